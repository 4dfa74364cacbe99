//! Native shell backed by eframe (winit + glow).

use std::io::Write;

use eframe::egui;

use super::shell::{write_status, Shell};
use crate::app::DashboardApp;
use crate::config::AppConfig;
use crate::error::ShellError;

/// Opens the dashboard in a native window.
#[derive(Debug, Default)]
pub struct EframeShell {
    initialized: bool,
}

impl EframeShell {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Shell for EframeShell {
    fn init(&mut self) -> Result<(), ShellError> {
        check_display()?;

        self.initialized = true;
        log::info!("Windowing subsystem ready");
        Ok(())
    }

    fn run(
        &mut self,
        config: &AppConfig,
        app: DashboardApp,
        out: &mut dyn Write,
    ) -> Result<(), ShellError> {
        eframe::run_native(
            &config.window_title,
            native_options(config),
            Box::new(move |cc| {
                on_gui_ready(&cc.egui_ctx, out);
                Ok(Box::new(app))
            }),
        )
        .map_err(classify)
    }

    fn shutdown(&mut self) {
        if self.initialized {
            // eframe drops the window and GL context when run_native returns.
            self.initialized = false;
            log::info!("Windowing subsystem released");
        }
    }
}

/// Window options for `config`. The window opens centered unless the
/// config says otherwise.
pub fn native_options(config: &AppConfig) -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.as_str())
            .with_inner_size([config.window_width, config.window_height])
            .with_resizable(true),
        vsync: config.vsync,
        centered: config.centered,
        ..Default::default()
    }
}

/// Runs once the egui context exists, before the first frame.
fn on_gui_ready(ctx: &egui::Context, out: &mut dyn Write) {
    ctx.set_visuals(egui::Visuals::dark());
    write_status(out, "GUI Init Success!");
    log::info!("GUI context created");
}

/// winit reports a missing display only once the event loop is built;
/// check up front so no window creation is attempted.
#[cfg(all(unix, not(target_os = "macos")))]
fn check_display() -> Result<(), ShellError> {
    if std::env::var_os("DISPLAY").is_none() && std::env::var_os("WAYLAND_DISPLAY").is_none() {
        return Err(ShellError::Init(
            "neither DISPLAY nor WAYLAND_DISPLAY is set".to_string(),
        ));
    }
    Ok(())
}

#[cfg(not(all(unix, not(target_os = "macos"))))]
fn check_display() -> Result<(), ShellError> {
    Ok(())
}

/// Event loop failures are init failures; anything later is window creation.
fn classify(err: eframe::Error) -> ShellError {
    match err {
        eframe::Error::WinitEventLoop(e) => ShellError::Init(e.to_string()),
        other => ShellError::WindowCreation(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_options_center_window() {
        let config = AppConfig::default();
        let options = native_options(&config);

        assert!(options.centered);
        assert!(options.vsync);
        assert_eq!(options.viewport.title.as_deref(), Some("Game Server Debugger"));
        assert_eq!(options.viewport.inner_size, Some(egui::vec2(1000.0, 700.0)));
    }

    #[test]
    fn test_native_options_follow_config() {
        let config = AppConfig {
            centered: false,
            vsync: false,
            ..AppConfig::default()
        };
        let options = native_options(&config);

        assert!(!options.centered);
        assert!(!options.vsync);
    }

    #[test]
    fn test_gui_ready_writes_status_and_dark_visuals() {
        let ctx = egui::Context::default();
        let mut out = Vec::new();

        on_gui_ready(&ctx, &mut out);

        assert_eq!(String::from_utf8(out).unwrap(), "GUI Init Success!\n");
        assert!(ctx.style().visuals.dark_mode);
    }

    #[test]
    fn test_shutdown_before_init_is_noop() {
        let mut shell = EframeShell::new();
        shell.shutdown();
        assert!(!shell.initialized);
    }
}
