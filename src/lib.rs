//! Backup Relay Library
//!
//! Moves database backups from a container on ECS to S3 by polling a sentinel
//! file on a shared EFS mount.

pub mod config;
pub mod managers;
pub mod strategies;
pub mod utils;

// Re-export commonly used types
pub use config::{load_config, resolve_relay, BackupKind, ConfigError, RelayConfig};
pub use managers::logging::{init_logging, LogGuard, LoggingConfig};
pub use managers::relay::{BackupRelay, RelayError, RelayOutcome};
pub use utils::BackupStatus;
