//! Shorten command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{SubmissionRequest, SubmissionService};
use crate::session::SessionList;

pub async fn shorten_link(
    service: &SubmissionService,
    url: String,
    alias: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    if alias.is_some() && !service.supports_alias() {
        return Err(CliError::CommandError(
            "Custom alias requires the local backend (set shortener.backend = \"local\")"
                .to_string(),
        ));
    }

    let request = SubmissionRequest {
        url,
        alias: alias.unwrap_or_default(),
    };

    // One-shot invocation: no session carries over, so alias and duplicate
    // checks run against an empty list.
    let list = SessionList::new();
    let prepared = service.prepare(&request, &list)?;
    let link = service.shorten(prepared).await?;

    if json {
        let output = serde_json::to_string_pretty(&link)
            .map_err(|e| CliError::CommandError(e.to_string()))?;
        println!("{}", output);
        return Ok(());
    }

    println!(
        "{} Shortened: {} -> {}",
        "✓".bold().green(),
        link.short_url.cyan(),
        link.original_url.blue().underline()
    );

    if let Some(ref code) = link.short_code {
        println!("{} Short code: {}", "ℹ".bold().blue(), code.magenta());
    }

    if service.is_demo() {
        println!(
            "{} Demo link: the short URL is simulated and will not resolve.",
            "ℹ".bold().yellow()
        );
    }

    Ok(())
}
