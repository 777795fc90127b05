//! Gallery browser application
//!
//! Shows the server's sketches as a grid of thumbnails with checkboxes.
//! Listing and deletion run on the request worker; the UI keeps drawing
//! while they are in flight and applies the results on the next tick.
//!
//! `GalleryState` holds everything the screen shows and decides what a key
//! press means. `GalleryApp` wires it to the terminal and the worker.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;

use super::app::layout::build_gallery_layout;
use super::app::modals::{render_confirm_delete_modal, render_help_modal};
use super::app::status_footer::{render_footer, render_status_line};
use super::app::{App, TuiApp};
use super::widgets::{grid_columns, grid_rows, render_grid, PREVIEW_SIZE};
use crate::deletion::DeletionRequest;
use crate::gallery::Gallery;
use crate::listing::{parse_listing, NameRules};
use crate::render::ThumbnailRenderer;
use crate::service::{Request, RequestWorker, Response, SketchService, TransportError};

const TICK_RATE: Duration = Duration::from_millis(100);

/// Input mode of the gallery browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Help,
    ConfirmDelete,
    GlobSelect,
}

/// What the application should do after a key press or response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    None,
    Refresh,
    Delete(DeletionRequest),
    Quit,
}

/// Screen state of the gallery browser.
#[derive(Debug)]
pub struct GalleryState {
    gallery: Gallery,
    cursor: usize,
    columns: usize,
    rows: usize,
    scroll_row: usize,
    mode: Mode,
    glob_input: String,
    status_message: Option<String>,
    status_is_error: bool,
    loading: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            gallery: Gallery::default(),
            cursor: 0,
            columns: 1,
            rows: 1,
            scroll_row: 0,
            mode: Mode::Normal,
            glob_input: String::new(),
            status_message: None,
            status_is_error: false,
            loading: false,
        }
    }
}

impl GalleryState {
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Show `message` in the status line until the next key press.
    pub fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status_message = Some(message.into());
        self.status_is_error = is_error;
    }

    /// Fit the grid to a `width` x `height` area.
    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.columns = grid_columns(width);
        self.rows = grid_rows(height);
        self.scroll_to_cursor();
    }

    /// Replace the gallery with a freshly fetched listing. Names that were
    /// checked before stay checked.
    pub fn apply_listing(
        &mut self,
        result: Result<String, TransportError>,
        renderer: &ThumbnailRenderer,
        rules: &NameRules,
    ) {
        self.loading = false;
        let body = match result {
            Ok(body) => body,
            Err(e) => {
                tracing::error!("listing failed: {}", e);
                self.set_status(format!("Failed to load sketches: {}", e), true);
                return;
            }
        };

        let checked: HashSet<String> = self.gallery.selected_names().into_iter().collect();
        let mut gallery = Gallery::from_listing(&parse_listing(&body), renderer, rules, PREVIEW_SIZE);
        gallery.select_where(|t| checked.contains(&t.name));
        self.gallery = gallery;
        self.cursor = self.cursor.min(self.gallery.len().saturating_sub(1));
        self.scroll_to_cursor();

        let mut message = format!("Loaded {} sketches", self.gallery.len());
        let broken = self.gallery.broken_count();
        let skipped = self.gallery.skipped_count();
        if broken > 0 || skipped > 0 {
            message.push_str(&format!(
                " ({} undecodable, {} malformed entries skipped)",
                broken, skipped
            ));
        }
        self.set_status(message, false);
    }

    /// Apply a deletion outcome. A successful delete asks for a refresh so
    /// the grid reflects what the server now holds.
    pub fn apply_deleted(
        &mut self,
        request: &DeletionRequest,
        result: Result<(), TransportError>,
    ) -> Action {
        self.loading = false;
        match result {
            Ok(()) => {
                self.gallery.remove_names(request.names());
                self.cursor = self.cursor.min(self.gallery.len().saturating_sub(1));
                self.scroll_to_cursor();
                self.set_status(format!("Deleted {} sketches", request.len()), false);
                Action::Refresh
            }
            Err(e) => {
                tracing::error!("delete failed: {}", e);
                self.set_status(format!("Delete failed: {}", e), true);
                Action::None
            }
        }
    }

    /// Interpret a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match self.mode {
            Mode::Normal => {
                self.status_message = None;
                self.status_is_error = false;
                self.handle_normal_key(key)
            }
            Mode::Help => {
                self.mode = Mode::Normal;
                Action::None
            }
            Mode::ConfirmDelete => self.handle_confirm_delete_key(key),
            Mode::GlobSelect => {
                self.handle_glob_key(key);
                Action::None
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Action {
        let page = self.columns * self.rows;
        match key.code {
            // Navigation
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(-1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(1),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-(self.columns as isize)),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(self.columns as isize),
            KeyCode::PageUp => self.move_cursor(-(page as isize)),
            KeyCode::PageDown => self.move_cursor(page as isize),
            KeyCode::Home => self.set_cursor(0),
            KeyCode::End => self.set_cursor(self.gallery.len().saturating_sub(1)),

            // Selection
            KeyCode::Char(' ') => self.gallery.toggle(self.cursor),
            KeyCode::Char('a') => self.gallery.toggle_all(),
            KeyCode::Char('g') => {
                self.mode = Mode::GlobSelect;
                self.glob_input.clear();
            }
            KeyCode::Esc => self.gallery.select_none(),

            // Actions
            KeyCode::Enter => {
                if self.gallery.selected_count() > 0 {
                    self.mode = Mode::ConfirmDelete;
                } else {
                    self.set_status("Nothing selected", false);
                }
            }
            KeyCode::Char('r') => {
                if self.loading {
                    return Action::None;
                }
                self.loading = true;
                return Action::Refresh;
            }
            KeyCode::Char('?') => self.mode = Mode::Help,
            KeyCode::Char('q') => return Action::Quit,
            _ => {}
        }
        Action::None
    }

    fn handle_glob_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Normal,
            KeyCode::Enter => {
                if !self.glob_input.is_empty() {
                    let matched = self.gallery.select_matching(&self.glob_input);
                    self.set_status(format!("Selected {} matching sketches", matched), false);
                }
                self.mode = Mode::Normal;
            }
            KeyCode::Backspace => {
                self.glob_input.pop();
            }
            KeyCode::Char(c) => {
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                    self.glob_input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_confirm_delete_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.mode = Mode::Normal;
                match self.gallery.deletion_request() {
                    Some(request) => {
                        self.loading = true;
                        self.set_status(format!("Deleting {} sketches...", request.len()), false);
                        Action::Delete(request)
                    }
                    None => Action::None,
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.mode = Mode::Normal;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.gallery.is_empty() {
            return;
        }
        let last = self.gallery.len() - 1;
        let target = self.cursor as isize + delta;
        self.set_cursor(target.clamp(0, last as isize) as usize);
    }

    fn set_cursor(&mut self, idx: usize) {
        self.cursor = idx.min(self.gallery.len().saturating_sub(1));
        self.scroll_to_cursor();
    }

    fn scroll_to_cursor(&mut self) {
        let row = self.cursor / self.columns.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + self.rows {
            self.scroll_row = row + 1 - self.rows;
        }
    }

    pub fn status_text(&self) -> String {
        if let Some(msg) = &self.status_message {
            return msg.clone();
        }
        match self.mode {
            Mode::GlobSelect => format!("Glob pattern: {}_", self.glob_input),
            Mode::ConfirmDelete | Mode::Help => String::new(),
            Mode::Normal if self.loading => "Loading...".to_string(),
            Mode::Normal => {
                let selected = self.gallery.selected_count();
                if selected > 0 {
                    format!(
                        "{} selected | {} total sketches",
                        selected,
                        self.gallery.len()
                    )
                } else {
                    format!("{} sketches | Space to select", self.gallery.len())
                }
            }
        }
    }

    pub fn footer_keys(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            Mode::GlobSelect => &[
                ("Esc", "cancel"),
                ("Enter", "select matching"),
                ("Backspace", "delete"),
            ],
            Mode::ConfirmDelete => &[("y", "confirm"), ("n/Esc", "cancel")],
            Mode::Help => &[("any key", "close")],
            Mode::Normal if self.gallery.selected_count() > 0 => &[
                ("Space", "toggle"),
                ("a", "toggle all"),
                ("Enter", "delete selected"),
                ("Esc", "clear"),
                ("?", "help"),
            ],
            Mode::Normal => &[
                ("Space", "select"),
                ("a", "all"),
                ("g", "glob"),
                ("r", "reload"),
                ("?", "help"),
                ("q", "quit"),
            ],
        }
    }

    /// Draw the whole screen.
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let chunks = build_gallery_layout(area);
        self.set_viewport(chunks[0].width, chunks[0].height);

        render_grid(
            frame,
            chunks[0],
            &self.gallery,
            self.cursor,
            self.scroll_row,
            self.loading,
        );
        render_status_line(frame, chunks[1], &self.status_text(), self.status_is_error);
        render_footer(frame, chunks[2], self.footer_keys());

        match self.mode {
            Mode::Help => render_help_modal(frame, area),
            Mode::ConfirmDelete => {
                render_confirm_delete_modal(frame, area, &self.gallery.selected_names())
            }
            _ => {}
        }
    }
}

/// Interactive gallery backed by a sketch service.
pub struct GalleryApp {
    app: App,
    state: GalleryState,
    worker: RequestWorker,
    renderer: ThumbnailRenderer,
    rules: NameRules,
}

impl GalleryApp {
    /// Take over the terminal and request the first listing.
    pub fn new(
        service: Arc<dyn SketchService>,
        renderer: ThumbnailRenderer,
        rules: NameRules,
    ) -> Result<Self> {
        let app = App::new(TICK_RATE)?;
        let mut gallery_app = Self {
            app,
            state: GalleryState::default(),
            worker: RequestWorker::spawn(service),
            renderer,
            rules,
        };
        gallery_app.dispatch(Action::Refresh);
        Ok(gallery_app)
    }

    fn dispatch(&mut self, action: Action) {
        let request = match action {
            Action::None => return,
            Action::Quit => {
                self.app.quit();
                return;
            }
            Action::Refresh => Request::List,
            Action::Delete(request) => Request::Delete(request),
        };
        match self.worker.send(request) {
            Ok(()) => self.state.set_loading(true),
            Err(e) => {
                self.state.set_loading(false);
                self.state.set_status(e.to_string(), true);
            }
        }
    }
}

impl TuiApp for GalleryApp {
    fn app(&mut self) -> &mut App {
        &mut self.app
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let action = self.state.handle_key(key);
        self.dispatch(action);
        Ok(())
    }

    fn tick(&mut self) -> Result<()> {
        for response in self.worker.poll() {
            let action = match response {
                Response::Listing(result) => {
                    self.state.apply_listing(result, &self.renderer, &self.rules);
                    Action::None
                }
                Response::Deleted { request, result } => self.state.apply_deleted(&request, result),
            };
            self.dispatch(action);
        }
        if self.worker.is_busy() {
            self.state.set_loading(true);
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        let state = &mut self.state;
        self.app.draw(|frame| state.render(frame))
    }
}
