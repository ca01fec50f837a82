//! Server settings read from the process environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::info;

use crate::error::{EngineError, EngineResult};

const ADDR_VAR: &str = "KPI_ENGINE_ADDR";
const CONFIG_DIR_VAR: &str = "KPI_ENGINE_CONFIG_DIR";
const LOG_VAR: &str = "KPI_ENGINE_LOG";

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_CONFIG_DIR: &str = "./config/default";
const DEFAULT_LOG: &str = "info";

/// Settings for running the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    /// Address the HTTP listener binds to.
    pub bind_address: SocketAddr,
    /// Directory holding `policy.yaml` and `kpi.yaml`.
    pub config_dir: PathBuf,
    /// Fallback log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl ServerSettings {
    /// Reads settings from the environment, falling back to defaults.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> EngineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        info!("Loading environment `{}`", ADDR_VAR);
        let raw_addr = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let bind_address =
            raw_addr
                .trim()
                .parse::<SocketAddr>()
                .map_err(|e| EngineError::ConfigParseError {
                    path: ADDR_VAR.to_string(),
                    message: format!("'{}' is not a socket address: {}", raw_addr, e),
                })?;

        let config_dir = lookup(CONFIG_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_DIR));

        let log_level = lookup(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG.to_string());

        Ok(Self {
            bind_address,
            config_dir,
            log_level,
        })
    }
}
