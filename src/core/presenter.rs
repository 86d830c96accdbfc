use std::fmt;
use tracing::debug;

use crate::models::{DisplayConfig, OutputFormat, ParsedResult};

/// Display slot labels, in output order
pub const PUZZLE_SLOT: &str = "=== Puzzle ===";
pub const SOLUTION_SLOT: &str = "=== Solution ===";
pub const MAPPING_SLOT: &str = "=== Letter -> Digit Mapping ===";

/// Writes parsed results into display slots
pub struct Presenter {
    display: DisplayConfig,
}

/// A parsed result with placeholders filled in for empty fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResult {
    pub puzzle: String,
    pub solution: String,
    pub mapping: String,
}

impl Presenter {
    pub fn new(display: DisplayConfig) -> Self {
        Self { display }
    }

    /// Substitute placeholders for empty fields
    pub fn render(&self, parsed: &ParsedResult) -> RenderedResult {
        RenderedResult {
            puzzle: or_placeholder(&parsed.puzzle, &self.display.puzzle_placeholder),
            solution: or_placeholder(&parsed.solution, &self.display.solution_placeholder),
            mapping: or_placeholder(&parsed.mapping, &self.display.mapping_placeholder),
        }
    }

    /// Produce the final output text for the requested format.
    ///
    /// JSON output carries the raw fields, empty ones included, without placeholders.
    pub fn present(&self, parsed: &ParsedResult, format: OutputFormat) -> Result<String, serde_json::Error> {
        debug!("Rendering result as {}", format);
        match format {
            OutputFormat::Text => Ok(self.render(parsed).to_string()),
            OutputFormat::Json => serde_json::to_string_pretty(parsed),
        }
    }
}

fn or_placeholder(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}

impl fmt::Display for RenderedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", PUZZLE_SLOT)?;
        writeln!(f, "{}", self.puzzle)?;
        writeln!(f)?;
        writeln!(f, "{}", SOLUTION_SLOT)?;
        writeln!(f, "{}", self.solution)?;
        writeln!(f)?;
        writeln!(f, "{}", MAPPING_SLOT)?;
        write!(f, "{}", self.mapping)
    }
}
