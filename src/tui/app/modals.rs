//! Modal overlays: help and delete confirmation.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme::{current_theme, Theme};
use crate::tui::ui::centered_fixed;

/// Render the keyboard help overlay.
pub fn render_help_modal(frame: &mut Frame, area: Rect) {
    let theme = current_theme();
    let modal_area = centered_fixed(56, 24, area);

    frame.render_widget(Clear, modal_area);

    let help = Paragraph::new(build_help_text(&theme))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.accent))
                .title(" Help "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(help, modal_area);
}

fn key_line(theme: &Theme, key: &'static str, description: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<15}", key), Style::default().fg(theme.accent)),
        Span::raw(description),
    ])
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

/// Build the help text lines.
fn build_help_text(theme: &Theme) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Sketch Gallery Shortcuts",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading("Navigation"),
        key_line(theme, "arrows, hjkl", "Move cursor"),
        key_line(theme, "PgUp/PgDn", "Page up/down"),
        key_line(theme, "Home/End", "Go to first/last"),
        Line::from(""),
        heading("Selection"),
        key_line(theme, "Space", "Toggle current sketch"),
        key_line(theme, "a", "Select all / Deselect all"),
        key_line(theme, "g", "Glob select (e.g. cat*, *2024*)"),
        Line::from(""),
        heading("Actions"),
        Line::from(vec![
            Span::styled(format!("  {:<15}", "Enter"), Style::default().fg(theme.error)),
            Span::raw("Delete selected (with confirmation)"),
        ]),
        key_line(theme, "r", "Reload the sketch list"),
        key_line(theme, "Esc", "Clear selection"),
        key_line(theme, "q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(theme.text_secondary),
        )),
    ]
}

/// Render the confirmation overlay for deleting `names`.
pub fn render_confirm_delete_modal(frame: &mut Frame, area: Rect, names: &[String]) {
    let theme = current_theme();
    let modal_area = centered_fixed(50, 9, area);

    frame.render_widget(Clear, modal_area);

    let confirm = Paragraph::new(build_confirm_text(&theme, names))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .title(" Confirm Delete "),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(confirm, modal_area);
}

fn build_confirm_text(theme: &Theme, names: &[String]) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "Delete Sketches?",
            Style::default()
                .fg(theme.error)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("Sketches to delete: {}", names.len())),
        Line::from(Span::styled(
            summarize_names(names, 40),
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(theme.error)),
            Span::raw(": Yes, delete  |  "),
            Span::styled("n", Style::default().fg(theme.accent)),
            Span::raw(": No, cancel"),
        ]),
    ]
}

/// Comma-separated names, cut to `max_chars` with a "+N more" tail.
fn summarize_names(names: &[String], max_chars: usize) -> String {
    let mut out = String::new();
    for (i, name) in names.iter().enumerate() {
        let sep = if i == 0 { "" } else { ", " };
        if out.chars().count() + sep.len() + name.chars().count() > max_chars {
            return format!("{} +{} more", out, names.len() - i);
        }
        out.push_str(sep);
        out.push_str(name);
    }
    out
}
