use crate::error::{AsosError, Result};
use crate::types::config::EngineConfig;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = "asos.toml";

/// Loads `asos.toml` from `root` when present. Returns `Ok(None)` when the
/// file is missing so callers can fall back to the built-in constants.
pub fn load_config(root: &Path) -> Result<Option<EngineConfig>> {
    let path = root.join(DEFAULT_CONFIG_FILE);
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)?;
    let cfg: EngineConfig = toml::from_str(&content)
        .map_err(|e| AsosError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    cfg.validate()?;
    tracing::debug!(path = %path.display(), "loaded engine config");
    Ok(Some(cfg))
}
