//! Entry point: sets up logging, loads config and runs the native shell.

use std::io;
use std::process;

use env_logger::{Builder, Env};

use server_debugger::platform::{launch, EframeShell};
use server_debugger::AppConfig;

fn main() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .filter_module("winit", log::LevelFilter::Warn)
        .init();

    let config = AppConfig::load();
    let mut shell = EframeShell::new();

    let code = launch(&mut shell, &config, &mut io::stdout());
    process::exit(code);
}
