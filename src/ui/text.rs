//! Label text for the dashboard panels.
//!
//! Kept free of egui so the exact strings can be unit tested.

use crate::model::ServerState;

pub fn status_text(state: &ServerState) -> String {
    format!("Server Status: {}", state.status_label())
}

pub fn players_text(state: &ServerState) -> String {
    format!("  Players: {}", state.player_count)
}

pub fn monsters_text(state: &ServerState) -> String {
    format!("  Monsters: {}", state.monster_count)
}

/// TPS with one decimal place.
pub fn tps_text(state: &ServerState) -> String {
    format!("  TPS: {:.1}", state.target_tps)
}

pub fn player_row_label(index: u32) -> String {
    format!("Player {index}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_text_follows_running_flag() {
        let mut state = ServerState::default();
        assert_eq!(status_text(&state), "Server Status: ONLINE");

        state.toggle_running();
        assert_eq!(status_text(&state), "Server Status: OFFLINE");

        state.toggle_running();
        assert_eq!(status_text(&state), "Server Status: ONLINE");
    }

    #[test]
    fn test_statistics_text() {
        let state = ServerState::default();
        assert_eq!(players_text(&state), "  Players: 42");
        assert_eq!(monsters_text(&state), "  Monsters: 128");
        assert_eq!(tps_text(&state), "  TPS: 60.0");
    }

    #[test]
    fn test_tps_text_rounds_to_one_decimal() {
        let mut state = ServerState::default();
        state.set_target_tps(59.96);
        assert_eq!(tps_text(&state), "  TPS: 60.0");
        state.set_target_tps(33.33);
        assert_eq!(tps_text(&state), "  TPS: 33.3");
    }

    #[test]
    fn test_player_row_label() {
        assert_eq!(player_row_label(1), "Player 1");
        assert_eq!(player_row_label(5), "Player 5");
    }
}
