//! Event dispatcher for handling dashboard events.
//!
//! Called from the frame loop after both panels have been declared.
//! Processes all pending events in batch.
//!
//! ```text
//! EventBus::drain() → dispatch_events() → console line per event
//! ```
//!
//! Dispatching never touches `ServerState`; button presses only print.

use std::io::{self, Write};

use crate::events::{AppEvent, EventBus};

/// Dispatch all pending events from `bus`, writing one line per event to `out`.
///
/// Returns the number of events handled. A failed write does not stop the
/// batch: every drained event is still handled and logged, and the first
/// error is returned once the batch is done.
pub fn dispatch_events<W: Write>(bus: &EventBus, out: &mut W) -> io::Result<usize> {
    let events = bus.drain();
    let count = events.len();
    let mut first_error = None;

    for event in &events {
        if let Err(e) = dispatch_single_event(event, out) {
            log::warn!("Console line lost for '{}': {}", event.description(), e);
            first_error.get_or_insert(e);
        }
    }

    if count > 0 {
        if let Err(e) = out.flush() {
            first_error.get_or_insert(e);
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => Ok(count),
    }
}

/// Dispatch a single event.
fn dispatch_single_event<W: Write>(event: &AppEvent, out: &mut W) -> io::Result<()> {
    log::info!("{}", event.description());
    writeln!(out, "{}", event.console_line())
}
