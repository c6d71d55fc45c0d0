//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - TUI mode (interactive widget, the default)
//! - CLI mode (one-shot commands)
//!
//! The mode selection is based on command-line arguments and feature flags.

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export mode functions for convenience
#[cfg(feature = "cli")]
pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "cli")]
    Cli,
    #[cfg(feature = "tui")]
    Tui,
    Unknown,
}

/// Detect which mode to run based on command-line arguments
///
/// # Mode Detection Logic
/// 1. No arguments, or "tui" as the first argument, with the TUI feature
///    enabled -> TUI mode
/// 2. Any arguments with the CLI feature enabled -> CLI mode
/// 3. CLI feature enabled (bare invocation without TUI) -> CLI mode (help)
/// 4. Otherwise -> Unknown (no matching feature enabled)
pub fn detect_mode(args: &[String]) -> Mode {
    #[cfg(feature = "tui")]
    if args.len() <= 1 || args[1] == "tui" {
        return Mode::Tui;
    }

    #[cfg(feature = "cli")]
    if args.len() > 1 {
        return Mode::Cli;
    }

    #[cfg(feature = "cli")]
    return Mode::Cli;

    #[cfg(not(feature = "cli"))]
    Mode::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    #[cfg(feature = "tui")]
    fn test_bare_invocation_selects_tui() {
        assert_eq!(detect_mode(&args_of(&["linksnip"])), Mode::Tui);
    }

    #[test]
    #[cfg(feature = "tui")]
    fn test_explicit_tui_argument() {
        assert_eq!(detect_mode(&args_of(&["linksnip", "tui"])), Mode::Tui);
    }

    #[test]
    #[cfg(feature = "cli")]
    fn test_subcommand_selects_cli() {
        assert_eq!(
            detect_mode(&args_of(&["linksnip", "shorten", "https://example.com"])),
            Mode::Cli
        );
        assert_eq!(detect_mode(&args_of(&["linksnip", "config"])), Mode::Cli);
    }
}
