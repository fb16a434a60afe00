//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the calculator
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};

use super::types::{CalculatorConfig, ReportBranding, ServerConfig};

/// Name of the configuration file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "calculator.yaml";

/// Loads and provides access to the calculator configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── calculator.yaml   # Currency, report branding, server and state settings
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_calculator::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Listening on {}", loader.server().bind_address);
/// # Ok::<(), wage_calculator::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: CalculatorConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `calculator.yaml` is missing from the directory
    /// - the file contains invalid YAML or a field of the wrong type
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<CalculatorConfig>(&config_path)?;

        info!(path = %config_path.display(), "Loaded calculator configuration");

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the prefix printed before money amounts.
    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Returns the report branding.
    pub fn report(&self) -> &ReportBranding {
        &self.config.report
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the path of the persisted state file.
    pub fn state_path(&self) -> &Path {
        &self.config.state.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::SocketAddr;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), contents).unwrap();
        dir
    }

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load("./config");
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.currency_symbol(), "$");
        assert_eq!(loader.report().title, "EzyMart Wages Report");
        assert_eq!(loader.report().version, "1.1.3V");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = write_config(
            "report:\n  organisation: Corner Store\nserver:\n  bind_address: \"0.0.0.0:8080\"\n",
        );

        let loader = ConfigLoader::load(dir.path()).unwrap();

        assert_eq!(loader.report().organisation, "Corner Store");
        assert_eq!(loader.report().title, ReportBranding::default().title);
        assert_eq!(
            loader.server().bind_address,
            "0.0.0.0:8080".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(loader.currency_symbol(), "$");
        assert_eq!(loader.state_path(), CalculatorConfig::default().state.path.as_path());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains(CONFIG_FILE_NAME));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = write_config("server:\n  bind_address: not-an-address\n");

        match ConfigLoader::load(dir.path()) {
            Err(EngineError::ConfigParseError { path, message }) => {
                assert!(path.ends_with(CONFIG_FILE_NAME));
                assert!(!message.is_empty());
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_default_loader_uses_built_in_values() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.config(), &CalculatorConfig::default());
        assert_eq!(loader.server().bind_address.port(), 3000);
    }
}
