//! Development tasks for sketchlist
//!
//! Run with `cargo xtask <task>` (via the alias in `.cargo/config.toml`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

use sketchlist::cli::Cli;

#[derive(Parser)]
#[command(name = "xtask", about = "sketchlist development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate man pages for sketchlist and its subcommands
    Man {
        /// Output directory
        #[arg(long, default_value = "target/man")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man { out } => generate_man_pages(&out),
    }
}

fn generate_man_pages(out: &Path) -> Result<()> {
    fs::create_dir_all(out).with_context(|| format!("Failed to create {}", out.display()))?;

    let command = Cli::command();
    write_page(&command, out, "sketchlist")?;
    for sub in command.get_subcommands() {
        let name = format!("sketchlist-{}", sub.get_name());
        write_page(&sub.clone().name(name.clone()), out, &name)?;
    }

    println!("Man pages written to {}", out.display());
    Ok(())
}

fn write_page(command: &clap::Command, out: &Path, name: &str) -> Result<()> {
    let mut buffer = Vec::new();
    Man::new(command.clone()).render(&mut buffer)?;
    let path = out.join(format!("{}.1", name));
    fs::write(&path, buffer).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
