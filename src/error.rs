//! Error types.

use thiserror::Error;

/// Startup and frame-loop failures reported by a [`crate::platform::Shell`].
#[derive(Error, Debug)]
pub enum ShellError {
    /// The windowing subsystem could not be started.
    #[error("{0}")]
    Init(String),

    /// The window or its graphics context could not be created.
    #[error("{0}")]
    WindowCreation(String),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
