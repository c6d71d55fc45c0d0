//! Config show command

use colored::Colorize;

use crate::config::{get_config, ShortenerBackend};
use crate::interfaces::cli::CliError;

/// Print the resolved configuration
pub async fn config_show(json: bool) -> Result<(), CliError> {
    let config = get_config();

    if json {
        let json_str = serde_json::to_string_pretty(config.as_ref())
            .map_err(|e| CliError::CommandError(format!("Failed to serialize to JSON: {}", e)))?;
        println!("{}", json_str);
        return Ok(());
    }

    println!();
    println!(
        "{}: {}",
        "Backend".bold(),
        config.shortener.backend.as_ref().green()
    );

    match config.shortener.backend {
        ShortenerBackend::Local => {
            println!(
                "{}: {}",
                "Display domain".bold(),
                config.shortener.display_domain.cyan()
            );
            println!("{}: {}", "Code length".bold(), config.shortener.code_length);
            println!(
                "{}: {} - {} ms",
                "Simulated latency".bold(),
                config.shortener.latency_min_ms,
                config.shortener.latency_max_ms
            );
        }
        ShortenerBackend::Remote => {
            println!(
                "{}: {}",
                "Primary API".bold(),
                config.providers.primary_api.cyan()
            );
            println!(
                "{}: {}",
                "Fallback API".bold(),
                config.providers.fallback_api.cyan()
            );
        }
    }

    println!("{}: {}", "Log level".bold(), config.logging.level);
    println!("{}: {}", "Log format".bold(), config.logging.format);
    if let Some(ref file) = config.logging.file {
        println!("{}: {}", "Log file".bold(), file.blue());
    }
    println!();

    Ok(())
}
