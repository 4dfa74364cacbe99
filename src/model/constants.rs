//! Configuration constants and default values.
//!
//! This module contains the dashboard's initial values, widget ranges and
//! window defaults.

// === Initial Values ===

/// Player count shown on the first frame.
pub const DEFAULT_PLAYER_COUNT: i32 = 42;

/// Monster count (display only).
pub const DEFAULT_MONSTER_COUNT: i32 = 128;

/// Target ticks per second shown on the first frame.
pub const DEFAULT_TARGET_TPS: f32 = 60.0;

/// Whether the server starts out flagged as running.
pub const DEFAULT_RUNNING: bool = true;

// === Validation Limits ===

/// Minimum value of the "Max Players" slider.
pub const MIN_PLAYERS: i32 = 0;

/// Maximum value of the "Max Players" slider.
pub const MAX_PLAYERS: i32 = 1000;

/// Minimum value of the "Target TPS" slider.
pub const MIN_TPS: f32 = 30.0;

/// Maximum value of the "Target TPS" slider.
pub const MAX_TPS: f32 = 120.0;

// === Player List ===

/// Number of rows in the player list panel. Rows are numbered from 1.
pub const PLAYER_LIST_LEN: u32 = 5;

// === Status Labels ===

pub const STATUS_ONLINE: &str = "ONLINE";
pub const STATUS_OFFLINE: &str = "OFFLINE";

// === Window Defaults ===

/// Native window title.
pub const WINDOW_TITLE: &str = "Game Server Debugger";

/// Initial inner window width in logical pixels.
pub const WINDOW_WIDTH: f32 = 1000.0;

/// Initial inner window height in logical pixels.
pub const WINDOW_HEIGHT: f32 = 700.0;

/// Smallest window width accepted from config.
pub const MIN_WINDOW_WIDTH: f32 = 320.0;

/// Smallest window height accepted from config.
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Largest window dimension accepted from config.
pub const MAX_WINDOW_SIZE: f32 = 8192.0;

/// Background clear color (R, G, B, A).
pub const CLEAR_COLOR: [f32; 4] = [0.45, 0.55, 0.60, 1.00];

/// File name of the optional JSON config, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "server_debugger.json";
