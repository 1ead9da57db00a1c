//! Common test utilities for CLI integration tests.
//!
//! Every command runs with its working directory and data directory inside a
//! fresh temporary directory, with `TRIPBOOK_*` variables cleared, so no
//! user or project configuration leaks into a test.

use assert_cmd::Command;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables read by the binary.
const TRIPBOOK_VARS: [&str; 8] = [
    "TRIPBOOK_DATA_DIR",
    "TRIPBOOK_STORE",
    "TRIPBOOK_STORE_BACKEND",
    "TRIPBOOK_STORE_PATH",
    "TRIPBOOK_COST_POLICY",
    "TRIPBOOK_STRICT_DEPARTMENTS",
    "TRIPBOOK_OUTPUT_FORMAT",
    "TRIPBOOK_LOG_MODE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the tripbook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory is not created; the binary creates it on first
    /// write.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("tripbook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command builder with a clean environment but no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("tripbook").expect("Failed to find tripbook binary");
        for var in TRIPBOOK_VARS {
            cmd.env_remove(var);
        }
        cmd.current_dir(&self.temp_path);
        cmd
    }

    /// Get a command builder with the data directory set and the caller's
    /// costs kept, so outputs are deterministic.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd.env("TRIPBOOK_COST_POLICY", "caller");
        cmd
    }

    /// Path of the default JSON store.
    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("trip.json")
    }

    /// Read and parse the default JSON store.
    pub fn read_store(&self) -> Value {
        let contents = std::fs::read_to_string(self.store_path()).expect("Failed to read store");
        serde_json::from_str(&contents).expect("Store is not valid JSON")
    }

    /// Write a file relative to the temporary directory.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Record a flight and assert success.
    pub fn reserve_flight(&self, date: &str, from: &str, to: &str, cost: u64) {
        self.command()
            .args(["reserve-flight", "--date", date, "--from", from, "--to", to])
            .args(["--cost", &cost.to_string()])
            .assert()
            .success();
    }

    /// Record a hotel stay and assert success.
    pub fn reserve_hotel(&self, checkin: &str, checkout: &str, hotel: &str, cost: u64) {
        self.command()
            .args(["reserve-hotel", "--checkin", checkin, "--checkout", checkout])
            .args(["--hotel", hotel, "--city", "Sucre"])
            .args(["--cost", &cost.to_string()])
            .assert()
            .success();
    }

    /// Record a restaurant booking and assert success.
    pub fn reserve_restaurant(&self, date: &str, time: &str, cost: u64) {
        self.command()
            .args(["reserve-restaurant", "--date", date, "--time", time])
            .args(["--restaurant", "Gustu", "--city", "La Paz", "--dish", "Trucha"])
            .args(["--cost", &cost.to_string()])
            .assert()
            .success();
    }
}

/// Parse command stdout as JSON.
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
