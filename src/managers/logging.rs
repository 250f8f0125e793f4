//! Logging setup
//!
//! Provides:
//! - Console: stderr, text or JSON (JSON suits CloudWatch)
//! - File: optional, daily rotation with old-file cleanup

use crate::config::{expand_tilde, LogFormat, LoggingSettings};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer, Registry};

const LOG_FILE_PREFIX: &str = "backup-relay";

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub log_level: Level,
    pub format: LogFormat,
    /// Directory for log files; console only when unset
    pub log_directory: Option<PathBuf>,
    /// Maximum number of log files to keep
    pub max_files: u32,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            format: LogFormat::Text,
            log_directory: None,
            max_files: 10,
        }
    }
}

impl LoggingConfig {
    /// Create from the logging settings
    pub fn from_settings(settings: &LoggingSettings) -> Self {
        Self {
            log_level: parse_level(&settings.level),
            format: settings.format,
            log_directory: settings.directory.as_deref().map(expand_tilde),
            max_files: settings.max_files,
        }
    }
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize logging
///
/// Returns a guard that must be kept alive for the duration of the program.
/// When the guard is dropped, any remaining file logs are flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<LogGuard> {
    let mut layers: Vec<BoxedLayer> = Vec::new();

    let console_layer: BoxedLayer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(false)
            .with_filter(level_filter(config.log_level))
            .boxed(),
        LogFormat::Text => fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_target(false)
            .with_level(true)
            .with_filter(level_filter(config.log_level))
            .boxed(),
    };
    layers.push(console_layer);

    let mut file_guard = None;
    if let Some(ref directory) = config.log_directory {
        fs::create_dir_all(directory)
            .with_context(|| format!("Failed to create log directory: {:?}", directory))?;

        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            directory,
            format!("{}.log", LOG_FILE_PREFIX),
        );
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        file_guard = Some(guard);

        layers.push(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_level(true)
                .with_filter(level_filter(config.log_level))
                .boxed(),
        );
    }

    tracing_subscriber::registry().with(layers).init();

    if let Some(ref directory) = config.log_directory {
        cleanup_old_logs(directory, config.max_files)?;
    }

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

/// Create a level filter; RUST_LOG wins when set
fn level_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()))
}

/// Cleanup old log files, keeping only the most recent N files
fn cleanup_old_logs(log_dir: &Path, max_files: u32) -> Result<()> {
    let mut log_files: Vec<_> = fs::read_dir(log_dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with(LOG_FILE_PREFIX)
        })
        .collect();

    // Newest first
    log_files.sort_by(|a, b| {
        let a_time = a.metadata().and_then(|m| m.modified()).ok();
        let b_time = b.metadata().and_then(|m| m.modified()).ok();
        b_time.cmp(&a_time)
    });

    for file in log_files.into_iter().skip(max_files as usize) {
        if let Err(e) = fs::remove_file(file.path()) {
            tracing::warn!("Failed to remove old log file {:?}: {}", file.path(), e);
        } else {
            tracing::debug!("Removed old log file: {:?}", file.path());
        }
    }

    Ok(())
}

/// Guard that keeps the file writer alive
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}
