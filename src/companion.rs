use std::path::PathBuf;

/// Filename of the companion script expected beside the launcher binary.
pub const COMPANION_FILE: &str = "run.bat";

/// Returns the absolute path of the running launcher binary, or an empty
/// path when the OS query fails. The launch goes ahead either way; a bad
/// path just makes the shell-open fail downstream, where it is logged and
/// dropped.
pub fn resolve_exe_path() -> PathBuf {
    std::env::current_exe().unwrap_or_else(|e| {
        tracing::warn!("Failed to resolve own executable path: {}", e);
        PathBuf::new()
    })
}

/// Derives the companion script path from the launcher's own path using the
/// platform's primary separator.
pub fn companion_path(exe_path: &str) -> String {
    sibling_path(exe_path, std::path::MAIN_SEPARATOR)
}

/// Replaces everything after the last `separator` with the companion
/// filename. A path containing no separator is kept whole, so the companion
/// name lands after the full original string. Legacy behavior, kept on
/// purpose.
fn sibling_path(exe_path: &str, separator: char) -> String {
    let dir = match exe_path.rfind(separator) {
        Some(pos) => &exe_path[..pos],
        None => exe_path,
    };
    format!("{dir}{separator}{COMPANION_FILE}")
}
