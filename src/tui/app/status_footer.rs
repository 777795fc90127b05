//! Status line and footer rendering
//!
//! The status line shows counts, prompts and request outcomes; the footer
//! shows key hints for the current mode.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme::{current_theme, Theme};

/// Render a status line, in the error color when `is_error` is set.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str, is_error: bool) {
    let theme = current_theme();
    let color = if is_error {
        theme.error
    } else {
        theme.text_secondary
    };
    let status = Paragraph::new(text.to_string()).style(Style::default().fg(color));
    frame.render_widget(status, area);
}

/// Render a centered footer with keybinding hints.
///
/// Example: `&[("q", "quit"), ("?", "help")]` renders as `"q: quit | ?: help"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[(&str, &str)]) {
    let theme = current_theme();
    let spans = build_footer_spans(keys, &theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(theme.text_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Keys in the accent color, descriptions dimmed, entries joined by " | ".
fn build_footer_spans(keys: &[(&str, &str)], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, (key, desc)) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                " | ".to_string(),
                Style::default().fg(theme.text_secondary),
            ));
        }
        spans.push(Span::styled(key.to_string(), theme.accent_style()));
        spans.push(Span::styled(
            format!(": {}", desc),
            Style::default().fg(theme.text_secondary),
        ));
    }
    spans
}
