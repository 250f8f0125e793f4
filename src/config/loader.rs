use super::types::*;
use std::fs;
use std::path::Path;

pub const ENV_BACKUP_KIND: &str = "BACKUP_KIND";
pub const ENV_CLUSTER_NAME: &str = "CLUSTER_NAME";
pub const ENV_SERVICE_NAME: &str = "SERVICE_NAME";
pub const ENV_CONTAINER_NAME: &str = "CONTAINER_NAME";
pub const ENV_S3_BUCKET: &str = "S3_BUCKET";
pub const ENV_DATABASE_NAME: &str = "DATABASE_NAME";
pub const ENV_DATABASE_USER: &str = "DATABASE_USER";
pub const ENV_EFS_PATH: &str = "EFS_PATH";
pub const ENV_LOCAL_PATH: &str = "LOCAL_PATH";
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";
pub const ENV_LOG_DIRECTORY: &str = "LOG_DIRECTORY";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required setting {0}")]
    MissingSetting(&'static str),

    #[error("Invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Load a TOML config file
pub fn load_config_file<P: AsRef<Path>>(path: P) -> Result<ConfigFile> {
    let contents = fs::read_to_string(path)?;
    let config: ConfigFile = toml::from_str(&contents)?;
    Ok(config)
}

/// Load configuration from an optional file, then apply the process environment
pub fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    let mut config = match path {
        Some(p) => load_config_file(p)?,
        None => ConfigFile::default(),
    };
    apply_env_overrides(&mut config, |name| std::env::var(name).ok())?;
    Ok(config)
}

/// Overlay environment values onto the file settings.
///
/// `lookup` returns the value of an environment variable; empty values count
/// as unset.
pub fn apply_env_overrides<F>(config: &mut ConfigFile, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let relay = &mut config.relay;
    if let Some(kind) = get(ENV_BACKUP_KIND) {
        relay.kind = Some(kind.parse().map_err(|reason| ConfigError::InvalidValue {
            name: ENV_BACKUP_KIND,
            reason,
        })?);
    }
    override_string(&mut relay.cluster_name, get(ENV_CLUSTER_NAME));
    override_string(&mut relay.service_name, get(ENV_SERVICE_NAME));
    override_string(&mut relay.container_name, get(ENV_CONTAINER_NAME));
    override_string(&mut relay.s3_bucket, get(ENV_S3_BUCKET));
    override_string(&mut relay.database_name, get(ENV_DATABASE_NAME));
    override_string(&mut relay.database_user, get(ENV_DATABASE_USER));
    override_string(&mut relay.efs_path, get(ENV_EFS_PATH));
    if let Some(path) = get(ENV_LOCAL_PATH) {
        relay.local_path = Some(path.into());
    }

    let logging = &mut config.logging;
    if let Some(level) = get(ENV_LOG_LEVEL) {
        logging.level = level;
    }
    if let Some(format) = get(ENV_LOG_FORMAT) {
        logging.format = format.parse().map_err(|reason| ConfigError::InvalidValue {
            name: ENV_LOG_FORMAT,
            reason,
        })?;
    }
    if let Some(dir) = get(ENV_LOG_DIRECTORY) {
        logging.directory = Some(dir.into());
    }

    Ok(())
}

fn override_string(slot: &mut Option<String>, value: Option<String>) {
    if value.is_some() {
        *slot = value;
    }
}

/// Resolve and validate the relay settings.
///
/// `kind` overrides whatever the settings carry (used for the `--kind` flag).
pub fn resolve_relay(settings: &RelaySettings, kind: Option<BackupKind>) -> Result<RelayConfig> {
    let kind = kind
        .or(settings.kind)
        .ok_or(ConfigError::MissingSetting(ENV_BACKUP_KIND))?;

    let required = |value: &Option<String>, name: &'static str| -> Result<String> {
        value
            .as_ref()
            .filter(|v| !v.trim().is_empty())
            .cloned()
            .ok_or(ConfigError::MissingSetting(name))
    };

    let cluster_name = required(&settings.cluster_name, ENV_CLUSTER_NAME)?;
    let service_name = required(&settings.service_name, ENV_SERVICE_NAME)?;
    let container_name = required(&settings.container_name, ENV_CONTAINER_NAME)?;
    let s3_bucket = required(&settings.s3_bucket, ENV_S3_BUCKET)?;
    let efs_path = required(&settings.efs_path, ENV_EFS_PATH)?;
    let local_path = settings
        .local_path
        .as_deref()
        .map(super::expand_tilde)
        .ok_or(ConfigError::MissingSetting(ENV_LOCAL_PATH))?;

    // Only the database dump needs credentials
    let (database_name, database_user) = match kind {
        BackupKind::Postgresql => (
            Some(required(&settings.database_name, ENV_DATABASE_NAME)?),
            Some(required(&settings.database_user, ENV_DATABASE_USER)?),
        ),
        BackupKind::Redis => (settings.database_name.clone(), settings.database_user.clone()),
    };

    Ok(RelayConfig {
        kind,
        cluster_name,
        service_name,
        container_name,
        s3_bucket,
        database_name,
        database_user,
        efs_path,
        local_path,
    })
}
