//! Configuration merging and precedence handling.
//!
//! Scalar fields are overwritten by higher-precedence sources. Nested
//! `store` and `pricing` sections merge field by field.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, PricingConfig, StoreConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use tripbook::config::{Config, ConfigMerger};
///
/// let low = Config { strict_departments: Some(false), ..Default::default() };
/// let high = Config { strict_departments: Some(true), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.strict_departments, Some(true));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.strict_departments.is_some() {
            target.strict_departments = source.strict_departments;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_store) = source.store {
            target.store = Some(match &target.store {
                Some(target_store) => Self::merge_store(target_store, source_store),
                None => source_store.clone(),
            });
        }

        if let Some(ref source_pricing) = source.pricing {
            target.pricing = Some(match &target.pricing {
                Some(target_pricing) => Self::merge_pricing(target_pricing, source_pricing),
                None => source_pricing.clone(),
            });
        }
    }

    fn merge_store(target: &StoreConfig, source: &StoreConfig) -> StoreConfig {
        StoreConfig {
            backend: source.backend.or(target.backend),
            path: source.path.clone().or_else(|| target.path.clone()),
            busy_timeout_ms: source.busy_timeout_ms.or(target.busy_timeout_ms),
        }
    }

    fn merge_pricing(target: &PricingConfig, source: &PricingConfig) -> PricingConfig {
        PricingConfig {
            policy: source.policy.or(target.policy),
            flight: source.flight.or(target.flight),
            bus: source.bus.or(target.bus),
            hotel: source.hotel.or(target.hotel),
        }
    }
}
