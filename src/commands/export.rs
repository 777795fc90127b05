//! Export command handler

use std::path::Path;

use anyhow::Result;

use sketchlist::export::export_gallery;
use sketchlist::theme::current_theme;
use sketchlist::Config;

/// Fetch the listing and write one PNG per decodable sketch into `dir`.
#[cfg(not(tarpaulin_include))]
pub fn handle(config: &Config, dir: &Path, size: Option<u32>) -> Result<()> {
    let theme = current_theme();
    let size = size.unwrap_or(config.thumbnail.size);
    let gallery = super::fetch_gallery(config, size)?;

    let report = export_gallery(&gallery, dir)?;

    for path in &report.written {
        println!("{}", theme.primary_text(&path.display().to_string()));
    }
    for name in &report.skipped {
        eprintln!(
            "{}",
            theme.error_text(&format!("Skipped undecodable sketch '{}'", name))
        );
    }
    println!(
        "{}",
        theme.success_text(&format!(
            "Exported {} sketch(es) to {} ({}x{} px)",
            report.written.len(),
            dir.display(),
            size,
            size
        ))
    );
    Ok(())
}
