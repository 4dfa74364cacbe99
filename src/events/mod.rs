//! Event system between the dashboard widgets and the dispatcher.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐
//! │  Dashboard  │     │ Player List │
//! │   buttons   │     │ Kick buttons│
//! └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()
//!        ▼                   ▼
//! ┌─────────────────────────────────┐
//! │            EventBus             │
//! │         (mpsc channel)          │
//! └────────────────┬────────────────┘
//!                  │ drain()  (end of frame)
//!                  ▼
//! ┌─────────────────────────────────┐
//! │           Dispatcher            │
//! │        (console output)         │
//! └─────────────────────────────────┘
//! ```
//!
//! # Module Structure
//!
//! - [`types`]: Event definitions (`AppEvent` enum)
//! - [`bus`]: `EventBus` and `EventPublisher` types

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::AppEvent;
