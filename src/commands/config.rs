//! Config subcommands handler

use std::path::Path;

use anyhow::{bail, Result};

use sketchlist::theme::current_theme;
use sketchlist::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config: &Config) -> Result<()> {
    let theme = current_theme();
    println!("{}", theme.primary_text(&config.to_toml()?));
    Ok(())
}

/// Print the config file location.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

/// Write a config file with default settings.
///
/// An existing file is only replaced with `force`.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(path: &Path, force: bool) -> Result<()> {
    let theme = current_theme();

    if path.exists() && !force {
        bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!(
        "{}",
        theme.success_text(&format!("Wrote default config to {}", path.display()))
    );
    Ok(())
}
