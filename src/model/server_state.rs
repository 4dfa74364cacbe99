//! Dashboard state (pure Rust, no GUI types).
//!
//! Lives for one process run. Widgets write into it through `&mut`
//! borrows during a frame and `validate()` pulls anything out of range
//! back in afterwards.

use super::constants::*;
use crate::clamp;

/// The four values the dashboard displays and edits.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerState {
    /// Player count, [0, 1000].
    pub player_count: i32,
    /// Monster count. Never edited by a widget.
    pub monster_count: i32,
    /// Target ticks per second, [30.0, 120.0].
    pub target_tps: f32,
    /// Running flag shown as ONLINE/OFFLINE.
    pub running: bool,
}

impl Default for ServerState {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            monster_count: DEFAULT_MONSTER_COUNT,
            target_tps: DEFAULT_TARGET_TPS,
            running: DEFAULT_RUNNING,
        }
    }
}

impl ServerState {
    /// Stores `value` clamped into the player range.
    pub fn set_player_count(&mut self, value: i32) {
        self.player_count = clamp(value, MIN_PLAYERS, MAX_PLAYERS);
    }

    /// Stores `value` clamped into the TPS range. NaN becomes `MIN_TPS`.
    pub fn set_target_tps(&mut self, value: f32) {
        self.target_tps = clamp_tps(value);
    }

    /// Flips the running flag and returns the new value.
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// "ONLINE" or "OFFLINE".
    pub fn status_label(&self) -> &'static str {
        if self.running {
            STATUS_ONLINE
        } else {
            STATUS_OFFLINE
        }
    }

    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.player_count = clamp(self.player_count, MIN_PLAYERS, MAX_PLAYERS);
        self.target_tps = clamp_tps(self.target_tps);
    }
}

fn clamp_tps(value: f32) -> f32 {
    if value.is_nan() {
        MIN_TPS
    } else {
        clamp(value, MIN_TPS, MAX_TPS)
    }
}
