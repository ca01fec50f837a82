//! Configuration loading and management for the KPI Engine.
//!
//! This module provides functionality to load the KPI policy from YAML files
//! and the server settings from the environment.
//!
//! # Example
//!
//! ```no_run
//! use kpi_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod settings;
mod types;

pub use loader::ConfigLoader;
pub use settings::ServerSettings;
pub use types::{EngineConfig, KpiPolicy, KpiWeights, PolicyMetadata};
