//! Startup and teardown around the frame loop.
//!
//! A [`Shell`] owns the windowing subsystem, the window and its graphics
//! context. [`launch`] drives a shell through one process run and turns
//! the outcome into an exit code.

use std::io::Write;

use crate::app::DashboardApp;
use crate::config::AppConfig;
use crate::error::ShellError;

/// Exit code for a normal quit.
pub const EXIT_OK: i32 = 0;

/// Exit code for windowing init or window creation failure.
pub const EXIT_FAILURE: i32 = -1;

/// Windowing backend the dashboard runs on.
pub trait Shell {
    /// Start the windowing subsystem.
    fn init(&mut self) -> Result<(), ShellError>;

    /// Create the window and graphics context, then run frames until the
    /// quit event arrives. Status lines go to `out`.
    fn run(
        &mut self,
        config: &AppConfig,
        app: DashboardApp,
        out: &mut dyn Write,
    ) -> Result<(), ShellError>;

    /// Release the window, context and subsystem.
    fn shutdown(&mut self);
}

/// Run the dashboard on `shell`, writing status lines to `out`.
///
/// Returns [`EXIT_OK`] after a normal quit and [`EXIT_FAILURE`] if the
/// windowing subsystem or the window could not be brought up. When `init`
/// fails nothing else on the shell is called. Otherwise `shutdown` is
/// called exactly once.
pub fn launch<S: Shell, W: Write>(shell: &mut S, config: &AppConfig, out: &mut W) -> i32 {
    if let Err(e) = shell.init() {
        log::error!("Windowing init failed: {}", e);
        write_status(out, &format!("Windowing Init Failed: {e}"));
        return EXIT_FAILURE;
    }
    write_status(out, "Windowing Init Success!");

    let app = DashboardApp::new(config);
    let result = shell.run(config, app, &mut *out);
    shell.shutdown();

    match result {
        Ok(()) => {
            log::info!("Dashboard closed");
            EXIT_OK
        }
        Err(ShellError::Init(e)) => {
            log::error!("Windowing init failed: {}", e);
            write_status(out, &format!("Windowing Init Failed: {e}"));
            EXIT_FAILURE
        }
        Err(ShellError::WindowCreation(e)) => {
            log::error!("Window creation failed: {}", e);
            write_status(out, &format!("Window Creation Failed: {e}"));
            EXIT_FAILURE
        }
    }
}

/// Write one status line and flush. Failures are logged, not returned.
pub fn write_status<W: Write + ?Sized>(out: &mut W, line: &str) {
    if let Err(e) = writeln!(out, "{line}").and_then(|()| out.flush()) {
        log::warn!("Failed to write status line: {}", e);
    }
}
