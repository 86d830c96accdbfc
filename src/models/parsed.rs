use serde::{Deserialize, Serialize};
use std::fmt;

/// The three fields split out of a service response.
///
/// Any field may be empty when the response lacks that part.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResult {
    pub puzzle: String,
    pub solution: String,
    /// Opaque letter to digit payload, e.g. `{'A': 1, 'B': 2}`
    pub mapping: String,
}

impl ParsedResult {
    /// Returns true if no field has content
    pub fn is_empty(&self) -> bool {
        self.puzzle.is_empty() && self.solution.is_empty() && self.mapping.is_empty()
    }

    pub fn has_puzzle(&self) -> bool {
        !self.puzzle.is_empty()
    }

    pub fn has_solution(&self) -> bool {
        !self.solution.is_empty()
    }

    pub fn has_mapping(&self) -> bool {
        !self.mapping.is_empty()
    }
}

/// How rendered results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Labelled sections with placeholders for missing parts
    #[default]
    Text,
    /// The parsed fields as a JSON object
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}
