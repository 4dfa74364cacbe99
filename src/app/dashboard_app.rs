//! The per-frame body of the application.
//!
//! `DashboardApp` owns the dashboard state and the event bus. Each frame
//! it declares both panels, clamps whatever the widgets wrote, then
//! prints the console line for every button pressed during the frame.

use std::io::{self, Write};

use eframe::egui;

use crate::config::AppConfig;
use crate::events::{EventBus, EventPublisher};
use crate::handlers::dispatch_events;
use crate::model::ServerState;
use crate::ui::{dashboard, player_list};

pub struct DashboardApp<W: Write = io::Stdout> {
    state: ServerState,
    bus: EventBus,
    publisher: EventPublisher,
    clear_color: [f32; 4],
    out: W,
    frames: u64,
}

impl DashboardApp<io::Stdout> {
    /// App printing button presses to stdout.
    pub fn new(config: &AppConfig) -> Self {
        Self::with_output(config, io::stdout())
    }
}

impl<W: Write> DashboardApp<W> {
    /// App printing button presses to `out`.
    pub fn with_output(config: &AppConfig, out: W) -> Self {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        Self {
            state: ServerState::default(),
            bus,
            publisher,
            clear_color: config.clear_color,
            out,
            frames: 0,
        }
    }

    pub fn state(&self) -> &ServerState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut ServerState {
        &mut self.state
    }

    /// Publisher feeding this app's bus, the same one the buttons use.
    pub fn publisher(&self) -> EventPublisher {
        self.publisher.clone()
    }

    /// Number of frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run one frame against `ctx`.
    pub fn run_frame(&mut self, ctx: &egui::Context) {
        dashboard::show(ctx, &mut self.state, &self.publisher);
        player_list::show(ctx, &self.publisher);

        self.state.validate();

        if let Err(e) = dispatch_events(&self.bus, &mut self.out) {
            log::error!("Failed to write console output: {}", e);
        }

        self.frames += 1;
        log::trace!("frame {} done: {:?}", self.frames, self.state);
    }
}

impl<W: Write> eframe::App for DashboardApp<W> {
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        self.clear_color
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.run_frame(ctx);
    }
}
