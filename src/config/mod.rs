//! Configuration module for backup-relay
//!
//! This module handles loading, overriding and validating configuration.
//!
//! ## Configuration Sources
//!
//! Settings are applied in this order (later overrides earlier):
//! 1. Built-in defaults
//! 2. Optional TOML file (`[relay]` and `[logging]` tables)
//! 3. Process environment (`CLUSTER_NAME`, `S3_BUCKET`, ...)
//!
//! ## Example Usage
//!
//! ```no_run
//! use backup_relay::config;
//!
//! let file = config::load_config(None)?;
//! let relay = config::resolve_relay(&file.relay, None)?;
//! println!("Relaying {} backups from {}", relay.kind, relay.cluster_name);
//! # Ok::<(), config::ConfigError>(())
//! ```

mod loader;
mod types;

pub use loader::*;
pub use types::*;

use std::path::PathBuf;

/// Sentinel written by the remote dump command
pub const SENTINEL_FILE_NAME: &str = "done.gz";

impl RelayConfig {
    /// Local view of the sentinel file
    pub fn sentinel_path(&self) -> PathBuf {
        self.local_path.join(SENTINEL_FILE_NAME)
    }

    /// Local view of a dump file on the shared mount
    pub fn local_dump_path(&self, dump_file_name: &str) -> PathBuf {
        self.local_path.join(dump_file_name)
    }

    /// Container view of the sentinel file
    pub fn remote_sentinel_path(&self) -> String {
        format!("{}/{}", self.efs_path, SENTINEL_FILE_NAME)
    }
}

/// Expand tilde (~) in path
pub fn expand_tilde(path: &std::path::Path) -> PathBuf {
    if let Ok(stripped) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    path.to_path_buf()
}
