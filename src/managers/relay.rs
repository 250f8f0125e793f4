//! Backup relay - drives one backup kind through its polling cycle
//!
//! Each invocation probes the sentinel on the shared mount and takes at most
//! one step:
//! - not started: find the service's task and start the dump in it
//! - in progress: nothing
//! - complete: upload the dump, then remove the sentinel through the task
//!
//! Nothing is kept between invocations apart from the sentinel itself.
//! Overlapping invocations are not guarded against, and remote command
//! responses are logged without being checked.

use crate::config::RelayConfig;
use crate::strategies::{strategy_for, BackupStrategy};
use crate::utils::archive::archive_key;
use crate::utils::command::remove_sentinel_command;
use crate::utils::{probe_status, BackupStatus, EcsOperations, StorageOperations, TaskArn, STALE_AFTER};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("No running tasks for service '{service}' in cluster '{cluster}'")]
    NoRunningTask { cluster: String, service: String },
}

/// What a single invocation did
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum RelayOutcome {
    /// A dump is still being written
    Waiting,
    /// A new dump was started in the task
    Started { task: TaskArn },
    /// The finished dump was uploaded and the sentinel removal was issued
    Archived { key: String, task: TaskArn },
}

pub struct BackupRelay {
    config: RelayConfig,
    strategy: Box<dyn BackupStrategy>,
    ecs: Box<dyn EcsOperations>,
    storage: Box<dyn StorageOperations>,
}

impl BackupRelay {
    /// Create a relay for the configured backup kind
    pub fn new(
        config: RelayConfig,
        ecs: Box<dyn EcsOperations>,
        storage: Box<dyn StorageOperations>,
    ) -> Self {
        let strategy = strategy_for(config.kind);
        Self {
            config,
            strategy,
            ecs,
            storage,
        }
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Current status of the backup, as seen through the sentinel
    pub fn status(&self, now: DateTime<Utc>) -> Result<BackupStatus> {
        probe_status(&self.config.sentinel_path(), now.into(), STALE_AFTER)
    }

    /// Run one step of the polling cycle
    pub async fn invoke(&self, now: DateTime<Utc>) -> Result<RelayOutcome> {
        let kind = self.strategy.kind();
        info!("Checking {} backup status", kind);

        let status = self.status(now)?;
        info!("Backup status: {}", status);

        match status {
            BackupStatus::InProgress => {
                info!("{} backup in progress, waiting for the next run", kind);
                Ok(RelayOutcome::Waiting)
            }
            BackupStatus::Complete => {
                info!("{} backup done, archiving", kind);
                let key = self.upload(now).await?;
                let task = self.locate_task().await?;
                self.remove_sentinel(&task).await?;
                Ok(RelayOutcome::Archived { key, task })
            }
            BackupStatus::NotStarted => {
                info!("Starting {} backup", kind);
                let task = self.locate_task().await?;
                self.start_dump(&task).await?;
                Ok(RelayOutcome::Started { task })
            }
        }
    }

    /// Upload the finished dump under today's key
    async fn upload(&self, now: DateTime<Utc>) -> Result<String> {
        let dump_file = self.strategy.dump_file_name();
        let path = self.config.local_dump_path(dump_file);
        let key = archive_key(self.strategy.kind().as_str(), dump_file, now);

        info!("Uploading {:?} to s3://{}/{}", path, self.config.s3_bucket, key);
        self.storage
            .upload_file(&path, &self.config.s3_bucket, &key)
            .await
            .context("Failed to upload backup archive")?;
        info!("Upload done");

        Ok(key)
    }

    /// Find the task to exec into
    async fn locate_task(&self) -> Result<TaskArn> {
        debug!(
            "Looking up task for service '{}' in cluster '{}'",
            self.config.service_name, self.config.cluster_name
        );

        let task = self
            .ecs
            .first_task(&self.config.cluster_name, &self.config.service_name)
            .await?;

        match task {
            Some(task) => {
                info!("Got task {}", task);
                Ok(task)
            }
            None => {
                warn!("No running tasks");
                Err(RelayError::NoRunningTask {
                    cluster: self.config.cluster_name.clone(),
                    service: self.config.service_name.clone(),
                }
                .into())
            }
        }
    }

    async fn start_dump(&self, task: &TaskArn) -> Result<()> {
        let command = self.strategy.start_command(&self.config)?;
        self.run_remote("start dump", task, &command).await
    }

    async fn remove_sentinel(&self, task: &TaskArn) -> Result<()> {
        let command = remove_sentinel_command(&self.config.efs_path);
        self.run_remote("remove sentinel", task, &command).await
    }

    async fn run_remote(&self, label: &str, task: &TaskArn, command: &str) -> Result<()> {
        info!("Running {} command in container '{}'", label, self.config.container_name);
        debug!("Command: {}", command);

        let response = self
            .ecs
            .execute_command(&self.config.cluster_name, task, &self.config.container_name, command)
            .await?;

        // The remote exit status is not available here
        info!("{} response: {:?}", label, response);
        Ok(())
    }
}
