//! User interface module.
//!
//! ## dashboard.rs
//! - "Game Server Dashboard" window: status, statistics, buttons, sliders
//!
//! ## player_list.rs
//! - "Player List" window: one Kick button per row
//!
//! ## text.rs
//! - label formatting shared by both panels

pub mod dashboard;
pub mod player_list;
pub mod text;
