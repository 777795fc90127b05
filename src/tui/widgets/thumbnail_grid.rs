//! Grid of thumbnail cards
//!
//! Each card is a bordered box holding a 16x8 half-block preview, titled
//! with its checkbox and name. The card under the cursor gets an accent
//! border; checked cards get the selection color.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::gallery::{Gallery, Thumbnail};
use crate::render::halfblock;
use crate::tui::theme::{current_theme, Theme};
use crate::tui::ui::centered_rect;

/// Canvas edge length used for terminal previews (one pixel per cell).
pub const PREVIEW_SIZE: u32 = 16;
/// Card width: 16 preview columns plus borders.
pub const CARD_WIDTH: u16 = PREVIEW_SIZE as u16 + 2;
/// Card height: 8 half-block rows plus borders.
pub const CARD_HEIGHT: u16 = PREVIEW_SIZE as u16 / 2 + 2;

/// Number of card columns that fit in `width`.
pub fn grid_columns(width: u16) -> usize {
    usize::from((width / CARD_WIDTH).max(1))
}

/// Number of card rows that fit in `height`.
pub fn grid_rows(height: u16) -> usize {
    usize::from((height / CARD_HEIGHT).max(1))
}

/// Checkbox plus name, cut to fit the card title.
pub fn card_title(thumbnail: &Thumbnail) -> String {
    let checkbox = if thumbnail.checked { "[x]" } else { "[ ]" };
    let max_name = usize::from(CARD_WIDTH) - 2 - checkbox.len() - 1;
    let name: String = if thumbnail.name.chars().count() > max_name {
        let mut cut: String = thumbnail.name.chars().take(max_name - 1).collect();
        cut.push('…');
        cut
    } else {
        thumbnail.name.clone()
    };
    format!("{} {}", checkbox, name)
}

/// Render the visible part of the gallery, starting at card row `scroll_row`.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    gallery: &Gallery,
    cursor: usize,
    scroll_row: usize,
    loading: bool,
) {
    let theme = current_theme();

    if gallery.is_empty() {
        let message = if loading {
            "Loading sketches..."
        } else {
            "No sketches found"
        };
        let placeholder = Paragraph::new(message)
            .style(theme.text_secondary_style())
            .alignment(Alignment::Center);
        frame.render_widget(placeholder, centered_rect(60, 20, area));
        return;
    }

    let columns = grid_columns(area.width);
    let rows = grid_rows(area.height);
    let first = scroll_row * columns;
    let last = (first + rows * columns).min(gallery.len());

    for idx in first..last {
        let slot = idx - first;
        let card = Rect::new(
            area.x + (slot % columns) as u16 * CARD_WIDTH,
            area.y + (slot / columns) as u16 * CARD_HEIGHT,
            CARD_WIDTH,
            CARD_HEIGHT,
        )
        .intersection(area);
        if card.is_empty() {
            continue;
        }
        render_card(frame, card, gallery, idx, idx == cursor, &theme);
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    gallery: &Gallery,
    idx: usize,
    is_cursor: bool,
    theme: &Theme,
) {
    let Some(thumbnail) = gallery.get(idx) else {
        return;
    };

    let title_style = if thumbnail.checked {
        theme.selected_style()
    } else {
        theme.text_style()
    };
    let border_style = if is_cursor {
        theme.accent_bold_style()
    } else if thumbnail.checked {
        Style::default().fg(theme.selected)
    } else {
        theme.text_secondary_style()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Line::styled(card_title(thumbnail), title_style));

    let body = match (&thumbnail.error, gallery.canvas(idx)) {
        (None, Some(canvas)) => Paragraph::new(halfblock::to_lines(canvas)),
        (Some(error), _) => Paragraph::new(vec![
            Line::styled(
                "undecodable",
                theme.error_style().add_modifier(Modifier::BOLD),
            ),
            Line::styled(error.to_string(), theme.error_style()),
        ])
        .wrap(Wrap { trim: true }),
        (None, None) => Paragraph::new(""),
    };

    frame.render_widget(body.block(block), area);
}
