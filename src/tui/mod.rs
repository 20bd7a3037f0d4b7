//! Terminal User Interface for WizLauncher.
//!
//! Two panes: the project list and the selected project's tool table, with a
//! launch panel and status line underneath.
//!
//! The TUI runs on the tokio runtime; launching never blocks the loop.

mod app;
mod events;
mod runner;
mod state;
mod views;

pub use app::App;
pub use events::{Event, EventHandler};
pub use runner::TuiRunner;
pub use state::{AppState, Focus, StatusKind, StatusLine, ToolRow};

use crossterm::{
    ExecutableCommand,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use eyre::Result;
use ratatui::prelude::*;
use std::io::{Stdout, stdout};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode.
///
/// Enables raw mode and switches to the alternate screen.
pub fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to its original state.
///
/// Disables raw mode and leaves the alternate screen.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Dark theme palette.
pub mod colors {
    use ratatui::style::Color;

    pub const BACKGROUND: Color = Color::Rgb(0x2a, 0x2f, 0x4f);
    pub const PANEL: Color = Color::Rgb(0x19, 0x18, 0x25);
    pub const TEXT: Color = Color::Rgb(0xe0, 0xe1, 0xdd);
    pub const BORDER: Color = Color::Rgb(0x2b, 0x3e, 0x5b);
    pub const SELECTED: Color = Color::Rgb(0x3b, 0x59, 0x98);
    pub const SELECTED_TEXT: Color = Color::Rgb(0xff, 0xff, 0xff);
    pub const HEADER: Color = Color::Rgb(0xe0, 0xe1, 0xdd);
    pub const KEYBIND: Color = Color::Rgb(0x7f, 0x9c, 0xd8);
    pub const SUCCESS: Color = Color::Rgb(50, 205, 50); // Lime green
    pub const ERROR: Color = Color::Rgb(220, 20, 60); // Crimson
    pub const DIM: Color = Color::DarkGray;
}
