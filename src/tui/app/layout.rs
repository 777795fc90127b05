//! Screen layout for the gallery browser.

use std::rc::Rc;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Split the screen into grid, status line and footer.
pub fn build_gallery_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area)
}
