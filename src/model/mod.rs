//! Application domain model.
//!
//! This module contains pure state (no GUI dependencies): the dashboard's
//! scalar values and the constants that bound them.

pub mod constants;
pub mod server_state;

pub use constants::*;
pub use server_state::ServerState;
