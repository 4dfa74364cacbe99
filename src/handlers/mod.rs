//! Event handlers and dispatching.
//!
//! This module contains the event dispatcher that drains the event bus
//! and prints the console line for each button press.

pub mod dispatcher;

pub use dispatcher::dispatch_events;
