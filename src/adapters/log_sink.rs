//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! ESP-IDF logger (which goes to UART / USB-CDC in production).  A future
//! network sink would implement the same trait.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::SessionStarted => {
                info!("SESSION | started at stage 0");
            }
            AppEvent::SessionStopped => {
                info!("SESSION | stopped by command");
            }
            AppEvent::StageChanged { from, to, name } => {
                info!("STAGE | {} -> {} ({})", from, to, name);
            }
            AppEvent::SessionFinished => {
                info!("SESSION | complete");
            }
        }
    }
}
