//! System-level modules
//!
//! This module contains system-level functionality:
//! - Logging initialization
//! - Clipboard access with command fallback
//! - Browser launching

#[cfg(feature = "tui")]
pub mod browser;
#[cfg(feature = "tui")]
pub mod clipboard;
pub mod logging;
