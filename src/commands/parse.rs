use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::{segment, Presenter};
use crate::error::CalcrosticError;
use crate::models::{Config, OutputFormat};

/// Segment a saved service response and print the rendered result.
///
/// Reads from stdin when `input` is `None` or `-`. Only the `[display]`
/// section of the config is used; the service is never contacted.
pub fn parse_response(
    project_root: &Path,
    input: Option<PathBuf>,
    format: OutputFormat,
) -> Result<(), CalcrosticError> {
    let config = Config::load_from_dir(project_root)?;
    let raw = read_input(input.as_deref())?;
    let output = render_response(&config, &raw, format)?;
    println!("{}", output);
    Ok(())
}

/// Segment raw response text and render it with the configured placeholders
pub fn render_response(config: &Config, raw: &str, format: OutputFormat) -> Result<String, CalcrosticError> {
    let parsed = segment(raw);
    let presenter = Presenter::new(config.display.clone());
    Ok(presenter.present(&parsed, format)?)
}

fn read_input(input: Option<&Path>) -> Result<String, CalcrosticError> {
    match input {
        Some(path) if path != Path::new("-") => {
            debug!("Reading response from {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            debug!("Reading response from stdin");
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}
