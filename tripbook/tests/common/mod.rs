//! Common test utilities for integration tests.

use std::path::Path;

use chrono::NaiveDate;
use serde_json::Value;
use tripbook::clock::FixedClock;
use tripbook::config::{Config, CostPolicy, PricingConfig};
use tripbook::store::StoredRecord;

/// The moment every integration test treats as "now": 2030-06-15 12:00.
#[allow(dead_code)]
pub fn test_clock() -> FixedClock {
    FixedClock::new(
        NaiveDate::from_ymd_opt(2030, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    )
}

/// Configuration that keeps caller costs so assertions can be exact.
#[allow(dead_code)]
pub fn caller_priced() -> Config {
    Config {
        pricing: Some(PricingConfig {
            policy: Some(CostPolicy::Caller),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Parses a JSON array literal into raw records.
#[allow(dead_code)]
pub fn records(value: Value) -> Vec<StoredRecord> {
    serde_json::from_value(value).unwrap()
}

/// Reads a JSON store file back as raw values.
#[allow(dead_code)]
pub fn read_json_file(path: &Path) -> Vec<Value> {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}
