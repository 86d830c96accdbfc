use std::path::Path;
use tracing::info;

use crate::error::CalcrosticError;
use crate::models::{Config, ConfigOverrides};

/// Load configuration from project directory with CLI overrides
pub fn load_config(project_root: &Path, overrides: ConfigOverrides) -> Result<Config, CalcrosticError> {
    let config = Config::load_from_dir(project_root)?;
    let config = config.with_overrides(overrides);

    info!(
        "Configuration loaded: url={}, timeout={}s",
        config.service.url, config.service.timeout_seconds
    );

    Ok(config)
}
