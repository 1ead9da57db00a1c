//! Configuration validation.

use crate::config::schema::{Config, CostRange, PricingConfig, StoreConfig};
use crate::error::{Error, Result};

/// Largest accepted SQLite busy timeout (one minute).
const MAX_BUSY_TIMEOUT_MS: u64 = 60_000;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use tripbook::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending key.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref store) = config.store {
            Self::validate_store(store)?;
        }

        if let Some(ref pricing) = config.pricing {
            Self::validate_pricing(pricing)?;
        }

        Ok(())
    }

    fn validate_store(store: &StoreConfig) -> Result<()> {
        if let Some(ref path) = store.path {
            if path.as_os_str().is_empty() {
                return Err(Error::Validation {
                    field: "store.path".into(),
                    message: "Path cannot be empty".into(),
                });
            }
        }

        if let Some(timeout) = store.busy_timeout_ms {
            if timeout == 0 || timeout > MAX_BUSY_TIMEOUT_MS {
                return Err(Error::Validation {
                    field: "store.busy_timeout_ms".into(),
                    message: format!(
                        "Timeout must be between 1 and {MAX_BUSY_TIMEOUT_MS} ms (got {timeout})"
                    ),
                });
            }
        }

        Ok(())
    }

    fn validate_pricing(pricing: &PricingConfig) -> Result<()> {
        let ranges = [
            ("pricing.flight", pricing.flight),
            ("pricing.bus", pricing.bus),
            ("pricing.hotel", pricing.hotel),
        ];
        for (field, range) in ranges {
            if let Some(range) = range {
                Self::validate_range(field, range)?;
            }
        }
        Ok(())
    }

    fn validate_range(field: &str, range: CostRange) -> Result<()> {
        if range.min > range.max {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("min ({}) must not exceed max ({})", range.min, range.max),
            });
        }
        Ok(())
    }
}
