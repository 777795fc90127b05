//! List command handler

use anyhow::Result;
use serde::Serialize;

use sketchlist::render::halfblock;
use sketchlist::theme::{color_enabled, current_theme};
use sketchlist::tui::widgets::PREVIEW_SIZE;
use sketchlist::{Config, Gallery};

/// One sketch in `--json` output.
#[derive(Debug, Serialize)]
struct ListItem<'a> {
    name: &'a str,
    file: &'a str,
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Print the sketches stored on the device.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, preview: bool, json: bool) -> Result<()> {
    let gallery = super::fetch_gallery(config, PREVIEW_SIZE)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&json_items(&gallery))?);
    } else {
        print_listing(&gallery, preview);
    }
    Ok(())
}

fn json_items(gallery: &Gallery) -> Vec<ListItem<'_>> {
    gallery
        .thumbnails()
        .iter()
        .map(|t| ListItem {
            name: &t.name,
            file: &t.file_name,
            valid: t.is_valid(),
            error: t.error.as_ref().map(ToString::to_string),
        })
        .collect()
}

fn print_listing(gallery: &Gallery, preview: bool) {
    let theme = current_theme();

    if gallery.is_empty() {
        println!("{}", theme.secondary_text("No sketches on the device."));
        return;
    }

    for (idx, thumbnail) in gallery.thumbnails().iter().enumerate() {
        match &thumbnail.error {
            None => println!("{}", theme.primary_text(&thumbnail.name)),
            Some(e) => println!(
                "{} {}",
                theme.primary_text(&thumbnail.name),
                theme.error_text(&format!("(undecodable: {})", e))
            ),
        }
        if preview {
            if let Some(canvas) = gallery.canvas(idx).filter(|_| thumbnail.is_valid()) {
                for line in halfblock::to_ansi(canvas, color_enabled()) {
                    println!("  {}", line);
                }
                println!();
            }
        }
    }

    println!("{}", theme.secondary_text(&summary_line(gallery)));
}

/// "3 sketches" plus counts of undecodable and skipped entries.
fn summary_line(gallery: &Gallery) -> String {
    let mut parts = vec![format!("{} sketches", gallery.len())];
    if gallery.broken_count() > 0 {
        parts.push(format!("{} undecodable", gallery.broken_count()));
    }
    if gallery.skipped_count() > 0 {
        parts.push(format!("{} malformed entries skipped", gallery.skipped_count()));
    }
    parts.join(", ")
}
