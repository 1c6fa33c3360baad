//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::ApiConfig;
use crate::config::validation::{validate_config, ValidationError};

pub const ENV_BIND_ADDRESS: &str = "EMPLOYEE_API_BIND_ADDRESS";
pub const ENV_UPSTREAM_HOST: &str = "EMPLOYEE_API_UPSTREAM_HOST";
pub const ENV_UPSTREAM_PATH: &str = "EMPLOYEE_API_UPSTREAM_PATH";
pub const ENV_LOG_LEVEL: &str = "EMPLOYEE_API_LOG_LEVEL";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load a TOML file without validating it.
pub fn read_config(path: &Path) -> Result<ApiConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ApiConfig, ConfigError> {
    let config = read_config(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Overlay values from the process environment.
pub fn apply_env_overrides(config: &mut ApiConfig) {
    apply_overrides(config, |key| std::env::var(key).ok());
}

/// Overlay values from an arbitrary lookup; empty values are ignored.
pub fn apply_overrides<F>(config: &mut ApiConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(v) = get(ENV_BIND_ADDRESS) {
        config.listener.bind_address = v;
    }
    if let Some(v) = get(ENV_UPSTREAM_HOST) {
        config.upstream.host = v;
    }
    if let Some(v) = get(ENV_UPSTREAM_PATH) {
        config.upstream.path = v;
    }
    if let Some(v) = get(ENV_LOG_LEVEL) {
        config.observability.log_level = v;
    }
}
