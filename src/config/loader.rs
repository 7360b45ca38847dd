use super::types::ServerConfig;
use crate::{GdocError, Result};
use std::path::Path;

/// Load server settings from a YAML file.
///
/// Keys left out of the file keep their defaults; unknown keys are an error
/// so typos do not silently fall back to defaults.
pub fn load_server_config<P: AsRef<Path>>(path: P) -> Result<ServerConfig> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        GdocError::Config(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;
    parse_server_config(&contents)
}

pub fn parse_server_config(contents: &str) -> Result<ServerConfig> {
    // An empty document means "all defaults".
    if contents.trim().is_empty() {
        return Ok(ServerConfig::default());
    }
    let config: ServerConfig = serde_yaml_ng::from_str(contents)?;
    if config.library_name.trim().is_empty() {
        return Err(GdocError::Config(
            "library_name must not be empty".to_string(),
        ));
    }
    Ok(config)
}
