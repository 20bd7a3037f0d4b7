//! Event handling for the TUI.
//!
//! Key presses come from crossterm, polled on a blocking thread so the
//! runtime stays free. A poll timeout turns into `Event::Tick`.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::Result;
use std::time::Duration;

/// Unified event type for the TUI.
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press
    Key(KeyEvent),
    /// Nothing happened within the tick interval, or a resize
    Tick,
}

/// Polls crossterm for key presses.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
        }
    }

    /// Wait for the next key press or tick.
    pub async fn next(&self) -> Result<Event> {
        let tick_rate = self.tick_rate;

        let event = tokio::task::spawn_blocking(move || -> Result<Event> {
            if !event::poll(tick_rate)? {
                return Ok(Event::Tick);
            }
            Ok(match event::read()? {
                // Release/repeat events show up on Windows
                CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Event::Key(key),
                _ => Event::Tick,
            })
        })
        .await??;

        Ok(event)
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(250)
    }
}
