use std::path::Path;

use super::types::PartialGateConfig;
use crate::errors::ConfigError;

/// Reads a TOML settings file. Every key is optional; the command line fills
/// in or overrides whatever the file leaves out.
pub fn load_file(path: &Path) -> Result<PartialGateConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let s = std::fs::read_to_string(path).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e.into(),
    })?;
    let cfg = toml::from_str::<PartialGateConfig>(&s).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e.into(),
    })?;

    tracing::debug!(target: "gate.config", path = %path.display(), "loaded config file");
    Ok(cfg)
}
