//! Delete command handler

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};

use sketchlist::deletion::is_valid_name;
use sketchlist::theme::current_theme;
use sketchlist::{Config, DeletionRequest, SketchService};

/// Delete the named sketches, asking first unless `yes` is set.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, names: Vec<String>, yes: bool) -> Result<()> {
    let theme = current_theme();

    if let Some(bad) = names.iter().find(|name| !is_valid_name(name)) {
        bail!("Invalid sketch name '{}': names cannot be empty or contain ',' or '|'", bad);
    }
    let Some(request) = DeletionRequest::from_selected(names) else {
        bail!("No sketches to delete");
    };

    if !yes {
        if !atty::is(atty::Stream::Stdin) {
            bail!("Refusing to delete without confirmation in non-interactive mode: use --yes");
        }
        let question = format!(
            "Delete {} sketch(es): {}?",
            request.len(),
            request.names().join(", ")
        );
        if !prompt_confirmation(&question)? {
            println!("{}", theme.primary_text("No changes made."));
            return Ok(());
        }
    }

    let service = super::connect(config)?;
    service
        .delete(&request)
        .context("Failed to delete sketches")?;

    tracing::info!(count = request.len(), "deleted sketches");
    println!(
        "{}",
        theme.success_text(&format!("Deleted {} sketch(es).", request.len()))
    );
    Ok(())
}

/// Ask a yes/no question on the terminal. Anything but y/yes is a no.
fn prompt_confirmation(message: &str) -> Result<bool> {
    let theme = current_theme();
    print!("{} [y/N] ", theme.primary_text(message));
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input)?;
    Ok(is_yes(&input))
}

fn is_yes(input: &str) -> bool {
    let response = input.trim().to_lowercase();
    response == "y" || response == "yes"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_y_or_yes_confirms() {
        assert!(is_yes("y\n"));
        assert!(is_yes("  YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("no"));
        assert!(!is_yes("yep"));
    }
}
