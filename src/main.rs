//! sketchlist CLI entry point

mod commands;

use clap::Parser;

use sketchlist::cli::{Cli, Commands, ConfigCommands};
use sketchlist::logging;
use sketchlist::theme::current_theme;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        // Logging is best-effort; the command still runs.
        eprintln!(
            "{}",
            current_theme().secondary_text(&format!("warning: {:#}", e))
        );
    }

    if let Err(e) = run(cli) {
        tracing::error!("{:#}", e);
        eprintln!("{}", current_theme().error_text(&format!("Error: {:#}", e)));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = commands::config_path(cli.config.as_deref())?;
    let server = cli.server;
    let load = || commands::load_config(&config_path, server.as_deref());

    match cli.command.unwrap_or(Commands::Browse) {
        Commands::List { preview, json } => commands::list::handle(&load()?, preview, json),
        Commands::Delete { names, yes } => commands::delete::handle(&load()?, names, yes),
        Commands::Export { dir, size } => commands::export::handle(&load()?, &dir, size),
        Commands::Browse => commands::browse::handle(&load()?),
        Commands::Config(ConfigCommands::Show) => commands::config::handle_show(&load()?),
        Commands::Config(ConfigCommands::Path) => commands::config::handle_path(&config_path),
        Commands::Config(ConfigCommands::Init { force }) => {
            commands::config::handle_init(&config_path, force)
        }
        Commands::Completions { shell } => commands::completions::handle(shell),
    }
}
