//! Shared fixture for CLI integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestFixture {
    _temp_dir: TempDir,
    data_dir: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join(".rowdesk");

        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// Fixture whose first open seeds `seed_count` records.
    pub fn with_seed(seed_count: usize) -> Self {
        let fixture = Self::new();
        fs::create_dir_all(&fixture.data_dir).expect("Failed to create data dir");
        fs::write(
            fixture.data_dir.join("config.toml"),
            format!("[store]\nseed_count = {}\n", seed_count),
        )
        .expect("Failed to write config");
        fixture
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    pub fn command(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rowdesk");
        cmd.env_remove("RUST_LOG")
            .env_remove("ROWDESK_PATH")
            .arg("--data-dir")
            .arg(self.data_dir())
            .arg("--log-level")
            .arg("warn");
        cmd
    }

    /// Run with `--format json` and parse stdout.
    pub fn json(&self, args: &[&str]) -> anyhow::Result<serde_json::Value> {
        let output = self.command().args(["--format", "json"]).args(args).output()?;

        if !output.status.success() {
            anyhow::bail!(
                "rowdesk {:?} failed: {}",
                args,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        Ok(serde_json::from_slice(&output.stdout)?)
    }

    pub fn row_ids(value: &serde_json::Value) -> Vec<i64> {
        value["content"]["rows"]
            .as_array()
            .map(|rows| rows.iter().filter_map(|r| r["id"].as_i64()).collect())
            .unwrap_or_default()
    }
}
