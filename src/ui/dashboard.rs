//! "Game Server Dashboard" window.

use eframe::egui;

use super::text::{monsters_text, players_text, status_text, tps_text};
use crate::events::{AppEvent, EventPublisher};
use crate::model::constants::*;
use crate::model::ServerState;

pub const TITLE: &str = "Game Server Dashboard";

/// Declare the dashboard window for this frame.
///
/// Sliders and the checkbox write straight into `state`. Buttons publish
/// events instead of acting.
pub fn show(ctx: &egui::Context, state: &mut ServerState, publisher: &EventPublisher) {
    egui::Window::new(TITLE).show(ctx, |ui| {
        ui.label(status_text(state));
        ui.separator();

        ui.label("Statistics:");
        ui.label(players_text(state));
        ui.label(monsters_text(state));
        ui.label(tps_text(state));

        ui.separator();

        ui.horizontal(|ui| {
            if ui.button("Restart Server").clicked() {
                publisher.publish(AppEvent::RestartServer);
            }
            if ui.button("Save State").clicked() {
                publisher.publish(AppEvent::SaveState);
            }
        });

        ui.separator();

        ui.add(
            egui::Slider::new(&mut state.player_count, MIN_PLAYERS..=MAX_PLAYERS)
                .text("Max Players"),
        );
        ui.add(egui::Slider::new(&mut state.target_tps, MIN_TPS..=MAX_TPS).text("Target TPS"));
        ui.checkbox(&mut state.running, "Server Running");
    });
}
