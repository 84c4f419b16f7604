#![windows_subsystem = "windows"]

mod companion;
mod logging;
mod shell;

use std::process::ExitCode;

fn main() -> ExitCode {
    // A launcher that cannot log must still launch, so init errors are
    // dropped. Nothing below is allowed to change the exit code either.
    let _ = logging::init_logging();

    tracing::info!("batlaunch {} starting", env!("CARGO_PKG_VERSION"));

    let exe_path = companion::resolve_exe_path();
    let target = companion::companion_path(&exe_path.to_string_lossy());

    match shell::open_detached(&target) {
        Ok(()) => tracing::info!("Companion launch requested: {}", target),
        Err(e) => tracing::warn!("Failed to launch {}: {:#}", target, e),
    }

    tracing::info!("batlaunch exiting");
    ExitCode::SUCCESS
}
