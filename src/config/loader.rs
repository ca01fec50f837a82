//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the KPI
//! policy from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, KpiPolicy, PolicyMetadata};

/// Loads and provides access to the engine configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and validates the KPI policy before handing it out.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── policy.yaml   # Policy metadata
/// └── kpi.yaml      # Metric weights and caps
/// ```
///
/// # Example
///
/// ```no_run
/// use kpi_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Loaded policy: {}", loader.policy().name);
/// println!("Sales weight: {}", loader.kpi_policy().weights.sales);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - The KPI policy fails validation (`InvalidPolicy`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use kpi_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/default")?;
    /// # Ok::<(), kpi_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PolicyMetadata>(&path.join("policy.yaml"))?;
        let kpi = Self::load_yaml::<KpiPolicy>(&path.join("kpi.yaml"))?;
        kpi.validate()?;

        debug!(
            policy = %metadata.code,
            version = %metadata.version,
            "Loaded KPI policy"
        );

        Ok(Self {
            config: EngineConfig::new(metadata, kpi),
        })
    }

    /// Returns a loader holding the built-in 50/30/20 policy.
    pub fn with_defaults() -> Self {
        Self::default()
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

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        self.config.metadata()
    }

    /// Returns the KPI scoring policy.
    pub fn kpi_policy(&self) -> &KpiPolicy {
        self.config.kpi()
    }
}
