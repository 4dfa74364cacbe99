//! Application events raised by dashboard widgets.
//!
//! Widgets publish these while a frame is being built; the dispatcher
//! handles them once the frame's widgets have all been declared.

/// Button actions on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// "Restart Server" pressed
    RestartServer,

    /// "Save State" pressed
    SaveState,

    /// "Kick" pressed on the given player row (1-based)
    KickPlayer(u32),
}

impl AppEvent {
    /// The line printed to the console when this event is handled.
    pub fn console_line(&self) -> String {
        match self {
            AppEvent::RestartServer => "Server Restart!".to_string(),
            AppEvent::SaveState => "State Saved!".to_string(),
            AppEvent::KickPlayer(n) => format!("Player {n} kicked!"),
        }
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::RestartServer => "Restart server requested",
            AppEvent::SaveState => "Save state requested",
            AppEvent::KickPlayer(_) => "Kick player requested",
        }
    }
}
