//! "Player List" window.

use eframe::egui;

use super::text::player_row_label;
use crate::events::{AppEvent, EventPublisher};
use crate::model::constants::PLAYER_LIST_LEN;

pub const TITLE: &str = "Player List";

/// Declare the player list window for this frame.
pub fn show(ctx: &egui::Context, publisher: &EventPublisher) {
    egui::Window::new(TITLE).show(ctx, |ui| {
        for i in 1..=PLAYER_LIST_LEN {
            ui.horizontal(|ui| {
                ui.label(player_row_label(i));
                // Each row needs its own id scope, the buttons share a label.
                ui.push_id(i, |ui| {
                    if ui.small_button("Kick").clicked() {
                        publisher.publish(AppEvent::KickPlayer(i));
                    }
                });
            });
        }
    });
}
