//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use crate::config::StaticConfig;
use tracing_subscriber;

/// Where log lines go when no file is configured
enum FallbackWriter {
    Stdout,
    Discard,
}

/// Initialize logging for console modes (CLI)
///
/// Writes to the configured log file when `logging.file` is set,
/// otherwise to stdout.
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
///
/// # Panics
/// * If opening the log file fails
/// * If setting the global subscriber fails (e.g., already initialized)
pub fn init_logging(config: &StaticConfig) -> tracing_appender::non_blocking::WorkerGuard {
    init_with_fallback(config, FallbackWriter::Stdout)
}

/// Initialize logging for TUI mode
///
/// The TUI owns the terminal (raw mode, alternate screen), so log lines
/// must never reach stdout. Writes to the configured log file when
/// `logging.file` is set, otherwise discards.
pub fn init_tui_logging(config: &StaticConfig) -> tracing_appender::non_blocking::WorkerGuard {
    init_with_fallback(config, FallbackWriter::Discard)
}

fn init_with_fallback(
    config: &StaticConfig,
    fallback: FallbackWriter,
) -> tracing_appender::non_blocking::WorkerGuard {
    let mut file_output = false;

    // Create writer based on config
    let writer: Box<dyn std::io::Write + Send + Sync> = match config.logging.file {
        Some(ref log_file) if !log_file.is_empty() => {
            // Append to file, no rotation
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .expect("Failed to open log file");
            file_output = true;
            Box::new(file)
        }
        _ => match fallback {
            FallbackWriter::Stdout => Box::new(std::io::stdout()),
            FallbackWriter::Discard => Box::new(std::io::sink()),
        },
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.logging.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(!file_output && matches!(fallback, FallbackWriter::Stdout));

    if config.logging.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}
