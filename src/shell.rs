//! Hands the companion path to the OS shell and returns without waiting.
//! Whatever gets started runs detached; nothing here supervises it.

use anyhow::Result;

#[cfg(windows)]
use thiserror::Error;

#[cfg(windows)]
use windows::core::PCWSTR;
#[cfg(windows)]
use windows::Win32::UI::Shell::ShellExecuteW;
#[cfg(windows)]
use windows::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

/// `ShellExecuteW` signals failure through return values of 32 or less.
#[cfg(windows)]
#[derive(Debug, Error)]
#[error("shell-open was refused with code {code}")]
pub struct ShellOpenError {
    pub code: usize,
}

/// Asks the shell to `open` the file at `path` with its registered handler,
/// in a normally shown window, and returns as soon as the request is
/// issued.
#[cfg(windows)]
pub fn open_detached(path: &str) -> Result<()> {
    let wide: Vec<u16> = path.encode_utf16().chain(std::iter::once(0)).collect();

    // No parent window, no parameters, no explicit working directory: the
    // handler resolves everything relative to the opened file itself.
    let handle = unsafe {
        ShellExecuteW(
            None,
            windows::core::w!("open"),
            PCWSTR(wide.as_ptr()),
            PCWSTR::null(),
            PCWSTR::null(),
            SW_SHOWNORMAL,
        )
    };

    let code = handle.0 as usize;
    if code <= 32 {
        return Err(ShellOpenError { code }.into());
    }

    Ok(())
}

/// Non-Windows stand-in for the shell association: hand the path to
/// `xdg-open` and keep going. This keeps the crate buildable and testable
/// on dev hosts; the shipped artifact is the Windows binary.
#[cfg(not(windows))]
pub fn open_detached(path: &str) -> Result<()> {
    use anyhow::Context;

    std::process::Command::new("xdg-open")
        .arg(path)
        .spawn()
        .context("Failed to hand the path off to xdg-open")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_detached_signature() {
        // Both cfg arms must expose the same fire-and-forget shape.
        let _fn_ptr: fn(&str) -> Result<()> = open_detached;
    }

    #[cfg(windows)]
    #[test]
    fn test_shell_open_error_reports_code() {
        // Code 2 is what the shell returns for a missing file.
        assert_eq!(
            ShellOpenError { code: 2 }.to_string(),
            "shell-open was refused with code 2"
        );
    }
}
