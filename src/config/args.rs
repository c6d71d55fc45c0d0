//! Command-line argument parsing
//!
//! This module provides utilities for parsing command-line arguments,
//! particularly for extracting the configuration file path.

/// Extract the configuration file path from command-line arguments
///
/// Supports multiple formats:
/// - `-c path` / `--config path`
/// - `-c=path` / `--config=path`
///
/// Returns the path (if any) together with the remaining arguments,
/// so mode detection doesn't get confused by the config flag.
///
/// # Examples
/// ```
/// use linksnip::config::args::extract_config_path;
/// let args = vec!["program".to_string(), "-c".to_string(), "custom.toml".to_string(), "tui".to_string()];
/// let (path, rest) = extract_config_path(&args);
/// assert_eq!(path, Some("custom.toml".to_string()));
/// assert_eq!(rest, vec!["program".to_string(), "tui".to_string()]);
/// ```
pub fn extract_config_path(args: &[String]) -> (Option<String>, Vec<String>) {
    let mut path = None;
    let mut rest = Vec::with_capacity(args.len());
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        // -c path / --config path
        if (arg == "-c" || arg == "--config") && i + 1 < args.len() {
            path = Some(args[i + 1].clone());
            i += 2;
            continue;
        }

        // -c=path / --config=path
        if let Some(value) = arg.strip_prefix("-c=") {
            path = Some(value.to_string());
            i += 1;
            continue;
        }
        if let Some(value) = arg.strip_prefix("--config=") {
            path = Some(value.to_string());
            i += 1;
            continue;
        }

        rest.push(arg.clone());
        i += 1;
    }

    (path, rest)
}
