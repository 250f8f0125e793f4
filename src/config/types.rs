use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Root configuration file structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub relay: RelaySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Relay settings (raw, before environment overrides and validation)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RelaySettings {
    /// Which backup this process relays
    #[serde(default)]
    pub kind: Option<BackupKind>,

    /// ECS cluster running the database service
    #[serde(default)]
    pub cluster_name: Option<String>,

    /// ECS service whose task runs the dump
    #[serde(default)]
    pub service_name: Option<String>,

    /// Container inside the task to exec into
    #[serde(default)]
    pub container_name: Option<String>,

    /// Destination bucket for archives
    #[serde(default)]
    pub s3_bucket: Option<String>,

    #[serde(default)]
    pub database_name: Option<String>,
    #[serde(default)]
    pub database_user: Option<String>,

    /// Mount path of the shared filesystem as seen by the container
    #[serde(default)]
    pub efs_path: Option<String>,

    /// Mount path of the shared filesystem as seen by this process
    #[serde(default)]
    pub local_path: Option<PathBuf>,
}

/// Logging settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,

    /// Rolling log files are written here when set
    #[serde(default)]
    pub directory: Option<PathBuf>,

    #[serde(default = "default_log_max_files")]
    pub max_files: u32,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            directory: None,
            max_files: default_log_max_files(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format '{}'", other)),
        }
    }
}

/// The two kinds of backup the relay knows how to drive
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum BackupKind {
    #[value(alias = "postgres")]
    Postgresql,
    Redis,
}

impl BackupKind {
    /// Name used in archive keys and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            BackupKind::Postgresql => "postgresql",
            BackupKind::Redis => "redis",
        }
    }
}

impl fmt::Display for BackupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BackupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "postgresql" | "postgres" => Ok(BackupKind::Postgresql),
            "redis" => Ok(BackupKind::Redis),
            other => Err(format!("unknown backup kind '{}'", other)),
        }
    }
}

/// Resolved relay configuration, built once at startup and passed to the relay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub kind: BackupKind,
    pub cluster_name: String,
    pub service_name: String,
    pub container_name: String,
    pub s3_bucket: String,
    pub database_name: Option<String>,
    pub database_user: Option<String>,
    pub efs_path: String,
    pub local_path: PathBuf,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_max_files() -> u32 { 10 }
