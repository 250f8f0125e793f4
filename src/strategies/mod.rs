pub mod postgresql;
pub mod redis;

use crate::config::{BackupKind, RelayConfig};
use anyhow::Result;

pub use postgresql::PostgresqlStrategy;
pub use redis::RedisStrategy;

/// Trait for the per-kind parts of a relayed backup
pub trait BackupStrategy: Send + Sync {
    /// Kind this strategy handles
    fn kind(&self) -> BackupKind;

    /// Dump file written next to the sentinel on the shared mount
    fn dump_file_name(&self) -> &'static str;

    /// Command that starts the dump inside the container
    fn start_command(&self, config: &RelayConfig) -> Result<String>;
}

/// Pick the strategy for a backup kind
pub fn strategy_for(kind: BackupKind) -> Box<dyn BackupStrategy> {
    match kind {
        BackupKind::Postgresql => Box::new(PostgresqlStrategy),
        BackupKind::Redis => Box::new(RedisStrategy),
    }
}
