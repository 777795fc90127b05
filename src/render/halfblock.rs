//! Half-block terminal rendering.
//!
//! Each terminal cell shows two vertically stacked pixels using the upper
//! half block glyph: foreground is the top pixel, background the bottom one.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::canvas::PixelCanvas;
use super::surface::Surface;
use crate::palette::Rgb;

/// Upper half block glyph.
pub const HALF_BLOCK: char = '▀';

const ANSI_RESET: &str = "\x1b[0m";

/// One terminal cell: (top pixel, bottom pixel).
pub type CellPair = (Option<Rgb>, Option<Rgb>);

/// Pair up canvas rows. An odd final row gets an empty bottom half.
pub fn cell_rows(canvas: &PixelCanvas) -> Vec<Vec<CellPair>> {
    let (width, height) = (canvas.width(), canvas.height());
    (0..height)
        .step_by(2)
        .map(|y| {
            (0..width)
                .map(|x| (canvas.pixel(x, y), canvas.pixel(x, y + 1)))
                .collect()
        })
        .collect()
}

/// Render as styled ratatui lines.
pub fn to_lines(canvas: &PixelCanvas) -> Vec<Line<'static>> {
    cell_rows(canvas)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span<'static>> = row
                .into_iter()
                .map(|(top, bottom)| {
                    let style = Style::default()
                        .fg(to_color(top))
                        .bg(to_color(bottom));
                    Span::styled(HALF_BLOCK.to_string(), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

/// Render as truecolor ANSI strings, one per terminal row.
///
/// Without `color` the rows are bare glyphs with no escape codes.
pub fn to_ansi(canvas: &PixelCanvas, color: bool) -> Vec<String> {
    cell_rows(canvas)
        .into_iter()
        .map(|row| {
            if !color {
                return HALF_BLOCK.to_string().repeat(row.len());
            }
            let mut buf = String::new();
            for (top, bottom) in row {
                match top {
                    Some(Rgb(r, g, b)) => buf.push_str(&format!("\x1b[38;2;{};{};{}m", r, g, b)),
                    None => buf.push_str("\x1b[39m"),
                }
                match bottom {
                    Some(Rgb(r, g, b)) => buf.push_str(&format!("\x1b[48;2;{};{};{}m", r, g, b)),
                    None => buf.push_str("\x1b[49m"),
                }
                buf.push(HALF_BLOCK);
            }
            buf.push_str(ANSI_RESET);
            buf
        })
        .collect()
}

fn to_color(pixel: Option<Rgb>) -> Color {
    match pixel {
        Some(Rgb(r, g, b)) => Color::Rgb(r, g, b),
        None => Color::Reset,
    }
}
