//! Backup progress inferred from the sentinel file on the shared mount

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::{Duration, SystemTime};
use tracing::{debug, info};

/// A sentinel older than this belongs to an abandoned run
pub const STALE_AFTER: Duration = Duration::from_secs(12 * 60 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupStatus {
    NotStarted,
    InProgress,
    Complete,
}

impl fmt::Display for BackupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            BackupStatus::NotStarted => "not started",
            BackupStatus::InProgress => "in progress",
            BackupStatus::Complete => "complete",
        };
        f.write_str(s)
    }
}

/// Probe the sentinel file.
///
/// - missing: `NotStarted`
/// - older than `stale_after`: `NotStarted` (the file is left in place)
/// - non-empty: `Complete`
/// - empty: `InProgress`
///
/// A modification time ahead of `now` counts as age zero. Stat failures other
/// than "not found" are returned as errors.
pub fn probe_status(path: &Path, now: SystemTime, stale_after: Duration) -> Result<BackupStatus> {
    debug!("Checking sentinel file: {:?}", path);

    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!("Sentinel file does not exist");
            return Ok(BackupStatus::NotStarted);
        }
        Err(e) => {
            return Err(e).context(format!("Failed to stat sentinel file: {:?}", path));
        }
    };

    let modified = metadata
        .modified()
        .context(format!("Failed to read modification time: {:?}", path))?;
    let age = now.duration_since(modified).unwrap_or(Duration::ZERO);

    if age > stale_after {
        info!(
            "Sentinel file is stale ({:.1}h old), treating backup as not started",
            age.as_secs_f64() / 3600.0
        );
        return Ok(BackupStatus::NotStarted);
    }

    let size = metadata.len();
    debug!("Sentinel file size: {} bytes", size);

    if size > 0 {
        Ok(BackupStatus::Complete)
    } else {
        Ok(BackupStatus::InProgress)
    }
}
