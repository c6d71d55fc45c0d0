//! Clipboard access
//!
//! The primary path uses the system clipboard API. When that fails
//! (headless session, no display server), the text is piped through a
//! platform clipboard utility instead.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::{debug, warn};

use crate::errors::{LinksnipError, Result};

/// Copy text to the system clipboard
///
/// Tries the clipboard API first, then each platform utility in order.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    match arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.to_string())) {
        Ok(()) => {
            debug!("Clipboard: copied {} bytes", text.len());
            Ok(())
        }
        Err(e) => {
            warn!("Clipboard API unavailable ({}), trying fallback utility", e);
            copy_via_command(text)
        }
    }
}

fn copy_via_command(text: &str) -> Result<()> {
    for (program, args) in fallback_commands() {
        match pipe_through(program, args, text) {
            Ok(()) => {
                debug!("Clipboard: copied via {}", program);
                return Ok(());
            }
            Err(e) => debug!("Clipboard fallback {} failed: {}", program, e),
        }
    }

    Err(LinksnipError::clipboard("no clipboard mechanism available"))
}

#[cfg(target_os = "linux")]
fn fallback_commands() -> &'static [(&'static str, &'static [&'static str])] {
    &[
        ("wl-copy", &[]),
        ("xclip", &["-selection", "clipboard"]),
        ("xsel", &["--clipboard", "--input"]),
    ]
}

#[cfg(target_os = "macos")]
fn fallback_commands() -> &'static [(&'static str, &'static [&'static str])] {
    &[("pbcopy", &[])]
}

#[cfg(target_os = "windows")]
fn fallback_commands() -> &'static [(&'static str, &'static [&'static str])] {
    &[("clip", &[])]
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn fallback_commands() -> &'static [(&'static str, &'static [&'static str])] {
    &[]
}

fn pipe_through(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if !status.success() {
        return Err(std::io::Error::other(format!(
            "{} exited with {}",
            program, status
        )));
    }
    Ok(())
}
