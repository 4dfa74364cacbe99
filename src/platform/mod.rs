//! Windowing backends.
//!
//! - [`shell`]: the `Shell` trait and `launch`
//! - [`eframe_shell`]: the native eframe implementation

pub mod eframe_shell;
pub mod shell;

pub use eframe_shell::EframeShell;
pub use shell::{launch, write_status, Shell, EXIT_FAILURE, EXIT_OK};
