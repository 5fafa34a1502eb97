use crate::conf::error::ConfigError;
use crate::conf::types::CruncherConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "ccruncher.toml";

pub fn load_config(path: &Path) -> Result<CruncherConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source: e,
    })?;

    let cfg: CruncherConfig = toml::from_str(&raw).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(path = %path.display(), ?cfg, "loaded config");
    Ok(cfg)
}

/// An explicit path must exist; otherwise `ccruncher.toml` in `dir` is used when present.
pub fn load_config_or_default(
    explicit: Option<&Path>,
    dir: &Path,
) -> Result<CruncherConfig, ConfigError> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    let fallback = dir.join(DEFAULT_CONFIG_FILE);
    if fallback.is_file() {
        load_config(&fallback)
    } else {
        Ok(CruncherConfig::default())
    }
}
