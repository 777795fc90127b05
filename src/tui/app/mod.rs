//! Terminal application base
//!
//! `App` owns the terminal (raw mode + alternate screen) and restores it on
//! drop. `TuiApp` provides the shared event loop for applications built on it.

pub mod layout;
pub mod modals;
pub mod status_footer;

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

/// Terminal handle with a fixed input poll interval.
pub struct App {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    /// Enter raw mode and the alternate screen.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, cursor::Hide) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self {
            terminal,
            tick_rate,
            should_quit: false,
        })
    }

    /// Current terminal size as (width, height).
    pub fn size(&self) -> Result<(u16, u16)> {
        let size = self.terminal.size()?;
        Ok((size.width, size.height))
    }

    pub fn draw<F: FnOnce(&mut Frame)>(&mut self, render: F) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Wait up to one tick for an input event.
    pub fn next_event(&self) -> Result<Option<Event>> {
        if event::poll(self.tick_rate)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        );
    }
}

/// An interactive application driven by `run`.
pub trait TuiApp {
    fn app(&mut self) -> &mut App;

    fn handle_key(&mut self, key: KeyEvent) -> Result<()>;

    fn draw(&mut self) -> Result<()>;

    /// Called once per loop iteration before drawing.
    fn tick(&mut self) -> Result<()> {
        Ok(())
    }

    /// Event loop: tick, draw, then handle at most one input event.
    fn run(&mut self) -> Result<()> {
        loop {
            self.tick()?;
            self.draw()?;
            if self.app().should_quit() {
                break;
            }
            match self.app().next_event()? {
                Some(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if is_interrupt(&key) {
                        self.app().quit();
                    } else {
                        self.handle_key(key)?;
                    }
                }
                // Resize is picked up by the next draw
                _ => {}
            }
        }
        Ok(())
    }
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
