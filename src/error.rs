use thiserror::Error;

use crate::models::ConfigError;

/// Main error type for calcrostic
#[derive(Error, Debug)]
pub enum CalcrosticError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors related to the puzzle service request
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("{status} {reason}: {body}")]
    Http {
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Connection refused: {0}")]
    Connection(String),

    #[error("Request timeout after {0} seconds")]
    Timeout(u64),

    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    Failed(String),
}

impl RequestError {
    /// HTTP status of the failed request, if the service answered
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        RequestError::Failed(err.to_string())
    }
}

impl CalcrosticError {
    /// Format the error the way it is shown to the user
    pub fn user_message(&self) -> String {
        match self {
            CalcrosticError::Request(e) => format!("Error fetching puzzle: {}", e),
            other => format!("Error: {}", other),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcrosticError>;
