//! PostgreSQL backup strategy
//!
//! Runs `pg_dump` in custom format onto the shared mount and pipes its
//! (empty) stdout through gzip into the sentinel, so the sentinel only gains
//! bytes once the dump has finished.

use super::BackupStrategy;
use crate::config::{BackupKind, RelayConfig};
use crate::utils::command::gzip_into_sentinel;
use anyhow::{Context, Result};

pub const DUMP_FILE_NAME: &str = "mlb-forecaster.dump";

pub struct PostgresqlStrategy;

impl BackupStrategy for PostgresqlStrategy {
    fn kind(&self) -> BackupKind {
        BackupKind::Postgresql
    }

    fn dump_file_name(&self) -> &'static str {
        DUMP_FILE_NAME
    }

    fn start_command(&self, config: &RelayConfig) -> Result<String> {
        let user = config
            .database_user
            .as_deref()
            .context("DATABASE_USER is required for PostgreSQL backups")?;
        let database = config
            .database_name
            .as_deref()
            .context("DATABASE_NAME is required for PostgreSQL backups")?;

        let pg_dump = format!(
            "pg_dump -U {} -d {} -F c -f {}/{}",
            user, database, config.efs_path, DUMP_FILE_NAME
        );
        Ok(gzip_into_sentinel(&pg_dump, &config.efs_path))
    }
}
