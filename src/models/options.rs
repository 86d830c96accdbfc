//! Puzzle generation options forwarded to the service

use serde::{Deserialize, Serialize};

/// Constraints passed through to the puzzle service.
///
/// Values are forwarded verbatim; the service decides what is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleOptions {
    /// Allow the digit 0 and the value 0
    #[serde(default = "default_true")]
    pub allow_zero: bool,
    /// Allow two-digit cell values
    #[serde(default = "default_true")]
    pub allow_two_digit: bool,
    /// Allow division operators
    #[serde(default = "default_true")]
    pub allow_division: bool,
    /// Minimum number of distinct letters
    #[serde(default = "default_letters_min")]
    pub letters_min: u32,
    /// Maximum number of distinct letters
    #[serde(default = "default_letters_max")]
    pub letters_max: u32,
}

impl Default for PuzzleOptions {
    fn default() -> Self {
        Self {
            allow_zero: true,
            allow_two_digit: true,
            allow_division: true,
            letters_min: default_letters_min(),
            letters_max: default_letters_max(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_letters_min() -> u32 {
    5
}

fn default_letters_max() -> u32 {
    6
}

impl PuzzleOptions {
    /// Query parameters in the order the service documents them
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("allow_zero", self.allow_zero.to_string()),
            ("allow_two_digit", self.allow_two_digit.to_string()),
            ("allow_division", self.allow_division.to_string()),
            ("letters_min", self.letters_min.to_string()),
            ("letters_max", self.letters_max.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs() {
        let options = PuzzleOptions {
            allow_zero: false,
            allow_two_digit: true,
            allow_division: false,
            letters_min: 4,
            letters_max: 9,
        };
        let pairs = options.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("allow_zero", "false".to_string()),
                ("allow_two_digit", "true".to_string()),
                ("allow_division", "false".to_string()),
                ("letters_min", "4".to_string()),
                ("letters_max", "9".to_string()),
            ]
        );
    }

    #[test]
    fn test_ranges_are_not_validated() {
        let options = PuzzleOptions {
            letters_min: 12,
            letters_max: 2,
            ..Default::default()
        };
        let pairs = options.query_pairs();
        assert!(pairs.contains(&("letters_min", "12".to_string())));
        assert!(pairs.contains(&("letters_max", "2".to_string())));
    }
}
