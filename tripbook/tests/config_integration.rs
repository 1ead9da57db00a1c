//! Integration tests for configuration loading and precedence.
//!
//! Tests that modify environment variables are marked with `#[serial]`.

use serial_test::serial;
use std::env;
use std::fs;
use tempfile::TempDir;
use tripbook::config::{ConfigBuilder, CostPolicy, OutputFormat, PricedKind, StorageBackend};
use tripbook::error::Error;
use tripbook::store::{open_store, resolve_store_path};

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: &'static str,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &'static str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self { key, old_value }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(v) => env::set_var(self.key, v),
            None => env::remove_var(self.key),
        }
    }
}

const ALL_VARS: [&str; 5] = [
    "TRIPBOOK_STORE_BACKEND",
    "TRIPBOOK_STORE_PATH",
    "TRIPBOOK_COST_POLICY",
    "TRIPBOOK_STRICT_DEPARTMENTS",
    "TRIPBOOK_OUTPUT_FORMAT",
];

fn clear_env() -> Vec<EnvGuard> {
    ALL_VARS
        .iter()
        .map(|key| {
            let guard = EnvGuard::new(key, "");
            env::remove_var(key);
            guard
        })
        .collect()
}

#[test]
fn test_file_precedence_user_project_local() {
    let data = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    fs::write(
        data.path().join("config.yaml"),
        "output_format: csv\nstrict_departments: true\npricing:\n  policy: caller\n",
    )
    .unwrap();
    fs::write(project.path().join("tripbook.yaml"), "output_format: json\n").unwrap();
    fs::write(
        project.path().join("tripbook.local.yaml"),
        "pricing:\n  bus:\n    min: 4\n    max: 6\n",
    )
    .unwrap();

    let config = ConfigBuilder::new()
        .skip_env()
        .with_working_dir(project.path())
        .with_data_dir(data.path())
        .build()
        .unwrap();

    assert_eq!(config.output_format, Some(OutputFormat::Json));
    assert!(config.strict_departments());
    assert_eq!(config.cost_policy(), CostPolicy::Caller);
    assert_eq!(config.cost_range(PricedKind::Bus).max, 6);
}

#[test]
fn test_unknown_key_in_file_is_rejected() {
    let project = TempDir::new().unwrap();
    fs::write(project.path().join("tripbook.yaml"), "airline: BoA\n").unwrap();

    let result = ConfigBuilder::new()
        .skip_env()
        .with_working_dir(project.path())
        .with_data_dir(project.path())
        .build();
    assert!(matches!(result, Err(Error::Validation { .. })));
}

#[test]
#[serial]
fn test_env_overrides_files() {
    let _clean = clear_env();
    let data = TempDir::new().unwrap();
    fs::write(
        data.path().join("config.yaml"),
        "store:\n  backend: json\npricing:\n  policy: caller\n",
    )
    .unwrap();

    let _backend = EnvGuard::new("TRIPBOOK_STORE_BACKEND", "sqlite");
    let _policy = EnvGuard::new("TRIPBOOK_COST_POLICY", "randomized");
    let _strict = EnvGuard::new("TRIPBOOK_STRICT_DEPARTMENTS", "yes");

    let config = ConfigBuilder::new()
        .with_working_dir(data.path())
        .with_data_dir(data.path())
        .build()
        .unwrap();

    assert_eq!(config.store_backend(), StorageBackend::Sqlite);
    assert_eq!(config.cost_policy(), CostPolicy::Randomized);
    assert!(config.strict_departments());
}

#[test]
#[serial]
fn test_invalid_env_value_names_variable() {
    let _clean = clear_env();
    let _format = EnvGuard::new("TRIPBOOK_OUTPUT_FORMAT", "xml");
    let dir = TempDir::new().unwrap();

    let err = ConfigBuilder::new()
        .with_working_dir(dir.path())
        .with_data_dir(dir.path())
        .build()
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation { ref field, .. } if field == "TRIPBOOK_OUTPUT_FORMAT"
    ));
}

#[test]
#[serial]
fn test_env_store_path_drives_open_store() {
    let _clean = clear_env();
    let dir = TempDir::new().unwrap();
    let _path = EnvGuard::new("TRIPBOOK_STORE_PATH", "custom/trips.json");

    let config = ConfigBuilder::new()
        .with_working_dir(dir.path())
        .with_data_dir(dir.path())
        .build()
        .unwrap();

    let resolved = resolve_store_path(&config, Some(dir.path())).unwrap();
    assert_eq!(resolved, dir.path().join("custom/trips.json"));
    assert!(open_store(&config, Some(dir.path())).unwrap().load_all().unwrap().is_empty());
}
