//! Widget tests: click the real dashboard widgets through egui_kittest.

use eframe::egui;
use egui_kittest::kittest::Queryable;
use egui_kittest::Harness;

use server_debugger::{AppConfig, DashboardApp, ServerState};

type App = DashboardApp<Vec<u8>>;

fn harness() -> Harness<'static, App> {
    Harness::new_state(
        |ctx: &egui::Context, app: &mut App| app.run_frame(ctx),
        DashboardApp::with_output(&AppConfig::default(), Vec::new()),
    )
}

fn console(harness: &Harness<'_, App>) -> Vec<String> {
    String::from_utf8_lossy(harness.state().output())
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn player_list_has_five_kick_buttons() {
    let harness = harness();
    assert_eq!(harness.get_all_by_label("Kick").count(), 5);
    harness.get_by_label("Player 1");
    harness.get_by_label("Player 5");
}

#[test]
fn kick_button_names_its_own_row() {
    let mut harness = harness();

    {
        let kicks: Vec<_> = harness.get_all_by_label("Kick").collect();
        kicks[2].click();
    }
    harness.run();

    assert_eq!(console(&harness), vec!["Player 3 kicked!"]);
    assert_eq!(harness.state().state(), &ServerState::default());
}

#[test]
fn every_kick_row_prints_once() {
    let mut harness = harness();

    for row in 0..5 {
        {
            let kicks: Vec<_> = harness.get_all_by_label("Kick").collect();
            kicks[row].click();
        }
        harness.run();
    }

    assert_eq!(
        console(&harness),
        vec![
            "Player 1 kicked!",
            "Player 2 kicked!",
            "Player 3 kicked!",
            "Player 4 kicked!",
            "Player 5 kicked!",
        ]
    );
}

#[test]
fn restart_and_save_buttons_print_fixed_lines() {
    let mut harness = harness();

    harness.get_by_label("Restart Server").click();
    harness.run();
    harness.get_by_label("Save State").click();
    harness.run();

    assert_eq!(console(&harness), vec!["Server Restart!", "State Saved!"]);
    assert_eq!(harness.state().state(), &ServerState::default());
}

#[test]
fn running_checkbox_switches_status_text() {
    let mut harness = harness();
    harness.get_by_label("Server Status: ONLINE");

    harness.get_by_label("Server Running").click();
    harness.run();

    assert!(!harness.state().state().running);
    harness.get_by_label("Server Status: OFFLINE");

    harness.get_by_label("Server Running").click();
    harness.run();

    assert!(harness.state().state().running);
    harness.get_by_label("Server Status: ONLINE");
    assert!(console(&harness).is_empty());
}
