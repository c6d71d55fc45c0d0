//! Browser launching
//!
//! Opens a URL in the platform's default browser via the standard
//! launcher utility. The launcher is spawned detached with its output
//! silenced so it cannot disturb the terminal.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::errors::{LinksnipError, Result};

/// Open a URL in the default browser
///
/// Only spawn failures surface as errors; whatever happens inside the
/// browser afterwards is not observable from here.
pub fn open_in_browser(url: &str) -> Result<()> {
    debug!("Browser: opening {}", url);

    #[cfg(target_os = "macos")]
    let spawned = launcher("open").arg(url).spawn();

    #[cfg(target_os = "windows")]
    let spawned = launcher("cmd").args(["/C", "start", url]).spawn();

    #[cfg(target_os = "linux")]
    let spawned = launcher("xdg-open").arg(url).spawn();

    #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
    let spawned: std::io::Result<std::process::Child> = Err(std::io::Error::other(
        "no browser launcher for this platform",
    ));

    spawned
        .map(|_| ())
        .map_err(|e| LinksnipError::browser(e.to_string()))
}

#[cfg(any(target_os = "macos", target_os = "windows", target_os = "linux"))]
fn launcher(program: &str) -> Command {
    let mut command = Command::new(program);
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}
