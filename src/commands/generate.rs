use std::path::Path;
use tracing::{info, warn};

use crate::core::{load_config, segment, Presenter, PuzzleClient};
use crate::error::CalcrosticError;
use crate::models::{Config, ConfigOverrides, OutputFormat};

/// Generate options
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Service and puzzle values given on the command line
    pub overrides: ConfigOverrides,
    /// Output format for the rendered result
    pub format: OutputFormat,
    /// Print the request URL without contacting the service
    pub dry_run: bool,
}

/// Request one puzzle and print the rendered result
pub async fn generate_puzzle(project_root: &Path, options: GenerateOptions) -> Result<(), CalcrosticError> {
    let config = load_config(project_root, options.overrides)?;

    if options.dry_run {
        println!("{}", dry_run_request(&config)?);
        return Ok(());
    }

    let output = fetch_and_render(&config, options.format).await?;
    println!("{}", output);
    Ok(())
}

/// The request line `generate` would send, without sending it
pub fn dry_run_request(config: &Config) -> Result<String, CalcrosticError> {
    let client = PuzzleClient::new(config.service.clone())?;
    let url = client.generate_url(&config.puzzle)?;
    Ok(format!("GET {}", url))
}

/// One request, segment and render cycle.
///
/// Nothing is rendered when the request fails.
pub async fn fetch_and_render(config: &Config, format: OutputFormat) -> Result<String, CalcrosticError> {
    let client = PuzzleClient::new(config.service.clone())?;
    let raw = client.fetch_puzzle(&config.puzzle).await.map_err(|e| {
        if let Some(status) = e.status() {
            warn!("Puzzle service answered with HTTP {}", status);
        }
        e
    })?;

    let parsed = segment(&raw);
    if parsed.is_empty() {
        warn!("Puzzle service returned an empty response");
    } else {
        info!(
            "Parsed response: puzzle={}, solution={}, mapping={}",
            parsed.has_puzzle(),
            parsed.has_solution(),
            parsed.has_mapping()
        );
    }

    let presenter = Presenter::new(config.display.clone());
    Ok(presenter.present(&parsed, format)?)
}
