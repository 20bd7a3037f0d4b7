//! TUI Runner - main event loop.
//!
//! The `TuiRunner` owns the terminal, app, event handler, and spawner. It
//! runs the main loop: render → handle events → process launches → repeat.

use std::sync::Arc;

use eyre::Result;
use log::info;

use super::Tui;
use super::app::App;
use super::events::{Event, EventHandler};
use super::views::render;
use crate::launch::Spawner;

/// Main TUI runner that owns the event loop.
pub struct TuiRunner {
    terminal: Tui,
    app: App,
    event_handler: EventHandler,
    spawner: Arc<dyn Spawner>,
}

impl TuiRunner {
    pub fn new(terminal: Tui, app: App, tick_rate_ms: u64, spawner: Arc<dyn Spawner>) -> Self {
        Self {
            terminal,
            app,
            event_handler: EventHandler::new(tick_rate_ms),
            spawner,
        }
    }

    /// Run the main TUI loop.
    pub async fn run(&mut self) -> Result<()> {
        info!("Starting TUI main loop");

        loop {
            self.terminal.draw(|f| render(self.app.state(), f))?;

            if let Event::Key(key) = self.event_handler.next().await?
                && self.app.handle_key(key)
            {
                break;
            }

            // Spawning returns as soon as the process exists
            self.app.process_pending_launch(self.spawner.as_ref());

            if self.app.state().should_quit {
                break;
            }
        }

        info!("TUI main loop ended");
        Ok(())
    }
}
