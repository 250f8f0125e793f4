//! Test context and harness for relay scenarios
//!
//! A temporary directory stands in for the local view of the shared mount.

use crate::config_builder::ConfigBuilder;
use backup_relay::config::{BackupKind, SENTINEL_FILE_NAME};
use backup_relay::managers::relay::BackupRelay;
use backup_relay::utils::ecs_ops::mock::MockEcsOps;
use backup_relay::utils::storage_ops::mock::MockStorageOps;
use chrono::{DateTime, Duration, Utc};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test context that owns the mount directory
pub struct TestContext {
    mount: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        Self {
            mount: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Local view of the mount
    pub fn mount_path(&self) -> &Path {
        self.mount.path()
    }

    pub fn sentinel_path(&self) -> PathBuf {
        self.mount.path().join(SENTINEL_FILE_NAME)
    }

    /// Write a sentinel of `size` bytes and return its modification time
    pub fn write_sentinel(&self, size: usize) -> DateTime<Utc> {
        let path = self.sentinel_path();
        std::fs::write(&path, vec![0x1f; size]).expect("Failed to write sentinel");
        let modified = std::fs::metadata(&path)
            .and_then(|m| m.modified())
            .expect("Failed to read sentinel mtime");
        modified.into()
    }

    /// Write a sentinel and return the instant at which it is `age` old
    pub fn sentinel_aged(&self, size: usize, age: Duration) -> DateTime<Utc> {
        self.write_sentinel(size) + age
    }

    /// Write a dump file next to the sentinel
    pub fn write_dump(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.mount.path().join(name);
        std::fs::write(&path, content).expect("Failed to write dump");
        path
    }

    pub fn sentinel_exists(&self) -> bool {
        self.sentinel_path().exists()
    }

    /// Relay for `kind` over this mount with the given mocks
    pub fn relay(&self, kind: BackupKind, ecs: MockEcsOps, storage: MockStorageOps) -> BackupRelay {
        let config = ConfigBuilder::for_kind(kind, self.mount.path()).build();
        BackupRelay::new(config, Box::new(ecs), Box::new(storage))
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Extension trait for assertion helpers
pub trait ResultAssertions<T> {
    /// Assert that the result is Ok and return the value
    fn assert_ok(self) -> T;

    /// Assert that the result is Err and the error message contains the given string
    fn assert_err_contains(self, needle: &str);
}

impl<T: std::fmt::Debug, E: std::fmt::Debug> ResultAssertions<T> for Result<T, E> {
    fn assert_ok(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    }

    fn assert_err_contains(self, needle: &str) {
        match self {
            Ok(v) => panic!("Expected Err containing '{}', got Ok: {:?}", needle, v),
            Err(e) => {
                let err_msg = format!("{:?}", e);
                assert!(
                    err_msg.contains(needle),
                    "Error '{}' does not contain '{}'",
                    err_msg,
                    needle
                );
            }
        }
    }
}
