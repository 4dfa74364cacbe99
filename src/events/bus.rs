//! Event queue between widgets and the dispatcher, using mpsc channels.
//!
//! - Widgets publish events via `EventPublisher::publish()`
//! - The frame loop collects them via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Queue of dashboard events.
///
/// Uses a multi-producer, single-consumer (mpsc) channel internally.
/// Both panels hold a publisher; the app owns the bus and drains it once
/// per frame.
///
/// # Example
///
/// ```
/// use server_debugger::events::{AppEvent, EventBus};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::SaveState);
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle. Publishers are cheap to clone.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            // The bus holds its own sender, so Disconnected can't happen
            // while `self` is alive.
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec, in publish order.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Publish an event to the bus.
    ///
    /// If the bus has been dropped the send silently fails.
    pub fn publish(&self, event: AppEvent) {
        log::trace!("publish: {}", event.description());
        let _ = self.sender.send(event);
    }
}
