//! Redis backup strategy
//!
//! Copies the RDB snapshot from the container's data directory onto the shared
//! mount, signalling through the sentinel the same way the PostgreSQL dump does.

use super::BackupStrategy;
use crate::config::{BackupKind, RelayConfig};
use crate::utils::command::gzip_into_sentinel;
use anyhow::Result;

pub const DUMP_FILE_NAME: &str = "dump.rdb";

pub struct RedisStrategy;

impl BackupStrategy for RedisStrategy {
    fn kind(&self) -> BackupKind {
        BackupKind::Redis
    }

    fn dump_file_name(&self) -> &'static str {
        DUMP_FILE_NAME
    }

    fn start_command(&self, config: &RelayConfig) -> Result<String> {
        let copy = format!("cp /data/{} {}", DUMP_FILE_NAME, config.efs_path);
        Ok(gzip_into_sentinel(&copy, &config.efs_path))
    }
}
