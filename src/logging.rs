use std::path::PathBuf;

use anyhow::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing with a daily-rolling file appender writing into a
/// `logs/` directory beside the executable.
///
/// The launcher lives for milliseconds, so each run contributes a few lines
/// to the current day's file. `RUST_LOG` adjusts verbosity only; nothing
/// read here influences what gets launched.
pub fn init_logging() -> Result<()> {
    let logs_dir = exe_dir().join("logs");
    std::fs::create_dir_all(&logs_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &logs_dir, "batlaunch.log");

    let fmt_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::SystemTime);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,batlaunch=info"));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

/// Directory holding the launcher binary, falling back to the current
/// directory when the executable path cannot be resolved.
fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logs_dir_sits_beside_executable() {
        let logs_dir = exe_dir().join("logs");

        assert!(logs_dir.ends_with("logs"));
        assert!(logs_dir.parent().is_some());
    }
}
