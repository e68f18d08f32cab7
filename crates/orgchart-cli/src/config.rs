//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use orgchart::{OrgChartError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for OrgChartError {
    fn from(err: ConfigError) -> Self {
        OrgChartError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (orgchart/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
/// - Config values are out of range
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, OrgChartError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("orgchart/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "orgchart", "orgchart") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, OrgChartError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

fn parse_config(content: &str) -> Result<AppConfig, OrgChartError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate().map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r##"
            [layout]
            horizontal_gap = 60.0
            anchor_x = 500.0

            [style]
            background_color = "#f7fafc"
            "##,
        )
        .unwrap();

        assert_eq!(config.layout().metrics().horizontal_gap(), 60.0);
        assert_eq!(config.layout().anchor().x(), 500.0);
        assert_eq!(config.layout().metrics().node_width(), 240.0);
        assert!(config.style().background_color().unwrap().is_some());
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = parse_config("[layout\nnode_width = ");
        assert!(matches!(result, Err(OrgChartError::Config(msg)) if msg.contains("parse")));
    }

    #[test]
    fn test_validation_rejects_non_positive_size() {
        let result = parse_config("[layout]\nnode_width = 0.0\n");
        assert!(matches!(result, Err(OrgChartError::Config(msg)) if msg.contains("Validation")));
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = load_config(Some("does/not/exist.toml"));
        assert!(matches!(result, Err(OrgChartError::Config(msg)) if msg.contains("Missing")));
    }

    #[test]
    fn test_load_explicit_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "[layout]\nvertical_gap = 50.0\n").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.layout().metrics().vertical_gap(), 50.0);
    }
}
