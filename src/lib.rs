//! calcrostic - client for a calcrostic puzzle service
//!
//! Requests a generated letter-arithmetic puzzle and splits the service's
//! plain-text answer into the puzzle statement, the solution and the
//! letter to digit mapping.
//!
//! # Architecture
//!
//! - **commands**: CLI command implementations (generate, parse)
//! - **core**: Core functionality (segmenter, service client, presenter, config loading)
//! - **models**: Data structures (config, puzzle options, parsed result)
//! - **error**: Error types

pub mod commands;
pub mod core;
pub mod error;
pub mod models;

pub use crate::core::segment;
pub use error::{CalcrosticError, RequestError, Result};
pub use models::ParsedResult;
