//! Game server debugger: a single-window eframe/egui dashboard demo.
//!
//! The model, events and dispatcher are plain Rust and testable without a
//! display. `platform` holds the native shell that opens the window.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod handlers;
pub mod model;
pub mod platform;
pub mod ui;

// Re-export model types for convenience
pub use model::ServerState;

// Re-export event types for convenience
pub use events::{AppEvent, EventBus, EventPublisher};

pub use app::DashboardApp;
pub use config::AppConfig;
pub use error::{ConfigError, ShellError};

/// Clamp a value to [lo, hi]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}
