pub mod archive;
pub mod command;
pub mod status;

// Trait-based abstractions for testability
pub mod ecs_ops;
pub mod storage_ops;

// Re-export commonly used types and traits (used by test crate)
pub use ecs_ops::{CommandResponse, EcsOperations, RealEcsOps, TaskArn};
pub use status::{probe_status, BackupStatus, STALE_AFTER};
pub use storage_ops::{RealS3Ops, StorageOperations};
