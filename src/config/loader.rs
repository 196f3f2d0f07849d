//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a rule set
//! from a YAML file, plus the built-in Article 132 defaults for callers
//! that run without external configuration.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CalculationRules, EosbConfig};

/// Loads and provides access to the calculation configuration.
///
/// # File Format
///
/// The loader reads a single YAML file with the [`EosbConfig`] shape:
/// ```text
/// config/uae-article-132/rules.yaml
/// ```
///
/// # Example
///
/// ```no_run
/// use eosb_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/uae-article-132/rules.yaml").unwrap();
/// assert_eq!(loader.rules().minimum_service_days, 365);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EosbConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read, or
    /// `ConfigParseError` if it contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EosbConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { config })
    }

    /// Creates a loader carrying the built-in Article 132 rule set.
    pub fn builtin() -> Self {
        Self {
            config: EosbConfig::default(),
        }
    }

    /// Returns the full configuration value.
    pub fn config(&self) -> &EosbConfig {
        &self.config
    }

    /// Returns the calculation rules.
    pub fn rules(&self) -> &CalculationRules {
        &self.config.calculation_rules
    }
}
