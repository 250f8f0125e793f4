//! Test utilities for backup-relay
//!
//! This crate provides shared test utilities, fixtures and helpers for
//! driving the relay against mocked ECS and S3 operations.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_utils::{MockEcsOps, MockStorageOps, TestContext};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let ctx = TestContext::new();
//!     ctx.write_sentinel(1024);
//!     let ecs = MockEcsOps::new().with_task(TASK_ARN);
//!     let relay = ctx.relay(BackupKind::Redis, ecs.clone(), MockStorageOps::new());
//!     // ... test code
//! }
//! ```

pub mod config_builder;
pub mod fixtures;
pub mod test_context;

// Re-export commonly used items
pub use config_builder::ConfigBuilder;
pub use fixtures::*;
pub use test_context::{ResultAssertions, TestContext};

// Re-export types from the main crate for convenience
pub use backup_relay::config::{BackupKind, ConfigFile, RelayConfig, RelaySettings};
pub use backup_relay::managers::relay::{BackupRelay, RelayError, RelayOutcome};
pub use backup_relay::utils::{BackupStatus, TaskArn};

// Re-export mock implementations from the main crate
pub use backup_relay::utils::ecs_ops::mock::{EcsCall, MockEcsOps};
pub use backup_relay::utils::ecs_ops::EcsOperations;
pub use backup_relay::utils::storage_ops::mock::{MockStorageOps, UploadCall};
pub use backup_relay::utils::storage_ops::StorageOperations;
