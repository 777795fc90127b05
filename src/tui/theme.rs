//! Theme configuration for TUI and CLI
//!
//! Colors and styles for the gallery browser, plus ANSI helpers for plain
//! command output. ANSI output is suppressed when `NO_COLOR` is set.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (names, help text)
    pub text_primary: Color,
    /// Secondary/dimmed text color (status, footer)
    pub text_secondary: Color,
    /// Accent color for keys, borders and the cursor
    pub accent: Color,
    /// Color of checked thumbnails
    pub selected: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::sketch()
    }
}

impl Theme {
    /// Default theme: gray text, PICO-8 blue accent.
    pub fn sketch() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightBlue,
            selected: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }

    // Style helpers

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .fg(self.selected)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    // ANSI color helpers for CLI output

    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Whether ANSI colors should be written (`NO_COLOR` unset or empty).
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
}

fn paint(color: Color, text: &str) -> String {
    if color_enabled() {
        wrap_ansi(color, text)
    } else {
        text.to_string()
    }
}

fn wrap_ansi(color: Color, text: &str) -> String {
    format!("{}{}{}", color_to_ansi(color), text, ANSI_RESET)
}

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> String {
    let code = match color {
        Color::Black => "30",
        Color::Red => "31",
        Color::Green => "32",
        Color::Yellow => "33",
        Color::Blue => "34",
        Color::Magenta => "35",
        Color::Cyan => "36",
        Color::Gray => "37",
        Color::DarkGray => "90",
        Color::LightRed => "91",
        Color::LightGreen => "92",
        Color::LightYellow => "93",
        Color::LightBlue => "94",
        Color::LightMagenta => "95",
        Color::LightCyan => "96",
        Color::White => "97",
        Color::Rgb(r, g, b) => return format!("\x1b[38;2;{};{};{}m", r, g, b),
        Color::Indexed(n) => return format!("\x1b[38;5;{}m", n),
        Color::Reset => "0",
    };
    format!("\x1b[{}m", code)
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    Theme::default()
}
