//! Fluent API for building relay configurations
//!
//! Provides a builder pattern for creating test configurations with sensible defaults.

use crate::fixtures::*;
use backup_relay::config::{self, BackupKind, RelayConfig};
use std::path::Path;

/// Builder for creating test configurations
pub struct ConfigBuilder {
    config: RelayConfig,
}

impl ConfigBuilder {
    /// PostgreSQL relay reading the mount at `local_path`
    pub fn postgres(local_path: &Path) -> Self {
        Self {
            config: RelayConfig {
                kind: BackupKind::Postgresql,
                cluster_name: CLUSTER_NAME.to_string(),
                service_name: POSTGRES_SERVICE.to_string(),
                container_name: POSTGRES_SERVICE.to_string(),
                s3_bucket: S3_BUCKET.to_string(),
                database_name: Some(DATABASE_NAME.to_string()),
                database_user: Some(DATABASE_USER.to_string()),
                efs_path: EFS_PATH.to_string(),
                local_path: local_path.to_path_buf(),
            },
        }
    }

    /// Redis relay reading the mount at `local_path`
    pub fn redis(local_path: &Path) -> Self {
        Self {
            config: RelayConfig {
                kind: BackupKind::Redis,
                cluster_name: CLUSTER_NAME.to_string(),
                service_name: REDIS_SERVICE.to_string(),
                container_name: REDIS_SERVICE.to_string(),
                s3_bucket: S3_BUCKET.to_string(),
                database_name: None,
                database_user: None,
                efs_path: EFS_PATH.to_string(),
                local_path: local_path.to_path_buf(),
            },
        }
    }

    /// Builder for either kind
    pub fn for_kind(kind: BackupKind, local_path: &Path) -> Self {
        match kind {
            BackupKind::Postgresql => Self::postgres(local_path),
            BackupKind::Redis => Self::redis(local_path),
        }
    }

    pub fn efs_path(mut self, efs_path: &str) -> Self {
        self.config.efs_path = efs_path.to_string();
        self
    }

    pub fn without_database_user(mut self) -> Self {
        self.config.database_user = None;
        self
    }

    pub fn build(self) -> RelayConfig {
        self.config
    }

    /// The same configuration as environment variables
    pub fn env_vars(&self) -> Vec<(&'static str, String)> {
        let c = &self.config;
        let mut vars = vec![
            (config::ENV_BACKUP_KIND, c.kind.to_string()),
            (config::ENV_CLUSTER_NAME, c.cluster_name.clone()),
            (config::ENV_SERVICE_NAME, c.service_name.clone()),
            (config::ENV_CONTAINER_NAME, c.container_name.clone()),
            (config::ENV_S3_BUCKET, c.s3_bucket.clone()),
            (config::ENV_EFS_PATH, c.efs_path.clone()),
            (config::ENV_LOCAL_PATH, c.local_path.display().to_string()),
        ];
        if let Some(ref name) = c.database_name {
            vars.push((config::ENV_DATABASE_NAME, name.clone()));
        }
        if let Some(ref user) = c.database_user {
            vars.push((config::ENV_DATABASE_USER, user.clone()));
        }
        vars
    }
}
