//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `TRIPBOOK_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, CostPolicy, OutputFormat, StorageBackend};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Selects the storage backend.
pub const ENV_STORE_BACKEND: &str = "TRIPBOOK_STORE_BACKEND";
/// Overrides the store location.
pub const ENV_STORE_PATH: &str = "TRIPBOOK_STORE_PATH";
/// Selects the cost policy.
pub const ENV_COST_POLICY: &str = "TRIPBOOK_COST_POLICY";
/// Enables or disables department checking.
pub const ENV_STRICT_DEPARTMENTS: &str = "TRIPBOOK_STRICT_DEPARTMENTS";
/// Selects the output format.
pub const ENV_OUTPUT_FORMAT: &str = "TRIPBOOK_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use tripbook::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., an unknown backend or a non-boolean flag).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(backend) = env::var(ENV_STORE_BACKEND) {
            let backend: StorageBackend = backend
                .parse()
                .map_err(|e| Self::rename(e, ENV_STORE_BACKEND))?;
            config.store.get_or_insert_with(Default::default).backend = Some(backend);
        }

        if let Ok(path) = env::var(ENV_STORE_PATH) {
            if !path.trim().is_empty() {
                config.store.get_or_insert_with(Default::default).path = Some(PathBuf::from(path));
            }
        }

        if let Ok(policy) = env::var(ENV_COST_POLICY) {
            let policy: CostPolicy = policy.parse().map_err(|e| Self::rename(e, ENV_COST_POLICY))?;
            config.pricing.get_or_insert_with(Default::default).policy = Some(policy);
        }

        if let Ok(val) = env::var(ENV_STRICT_DEPARTMENTS) {
            config.strict_departments = Some(Self::parse_bool(ENV_STRICT_DEPARTMENTS, &val)?);
        }

        if let Ok(format) = env::var(ENV_OUTPUT_FORMAT) {
            let format: OutputFormat = format
                .parse()
                .map_err(|e| Self::rename(e, ENV_OUTPUT_FORMAT))?;
            config.output_format = Some(format);
        }

        Ok(())
    }

    /// Reports a parse failure against the variable name instead of the
    /// config key.
    fn rename(err: Error, variable: &str) -> Error {
        match err {
            Error::Validation { message, .. } => Error::Validation {
                field: variable.into(),
                message,
            },
            other => other,
        }
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
