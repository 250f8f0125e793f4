//! Unit tests for configuration loading and validation

use backup_relay::config::{
    self, apply_env_overrides, load_config, load_config_file, resolve_relay, BackupKind, ConfigError,
    ConfigFile, LogFormat,
};
use serial_test::serial;
use std::collections::HashMap;
use std::path::PathBuf;
use test_utils::{minimal_config_toml, ConfigBuilder, ResultAssertions, TestContext};

fn lookup<'a>(vars: &'a [(&'static str, String)]) -> impl Fn(&str) -> Option<String> + 'a {
    move |name: &str| vars.iter().find(|(k, _)| *k == name).map(|(_, v)| v.clone())
}

#[test]
fn test_load_config_file() {
    let ctx = TestContext::new();
    let toml = minimal_config_toml().replace("{local_path}", &ctx.mount_path().display().to_string());
    let path = ctx.write_dump("relay.toml", toml.as_bytes());

    let file = load_config_file(&path).unwrap();
    let relay = resolve_relay(&file.relay, None).unwrap();

    assert_eq!(relay.kind, BackupKind::Postgresql);
    assert_eq!(relay.database_user.as_deref(), Some("forecaster_admin"));
    assert_eq!(relay.local_path, ctx.mount_path());
    assert_eq!(file.logging.format, LogFormat::Json);
    assert_eq!(file.logging.level, "debug");
}

#[test]
fn test_load_config_file_missing() {
    let result = load_config_file("/nonexistent/relay.toml");
    assert!(matches!(result, Err(ConfigError::ReadError(_))));
}

#[test]
fn test_load_config_file_invalid_toml() {
    let ctx = TestContext::new();
    let path = ctx.write_dump("relay.toml", b"[relay\nkind = ");
    let result = load_config_file(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn test_unknown_kind_in_file_is_rejected() {
    let result: Result<ConfigFile, _> = toml::from_str("[relay]\nkind = \"mysql\"\n");
    assert!(result.is_err());
}

#[test]
fn test_every_required_setting_is_reported() {
    let builder = ConfigBuilder::postgres(&PathBuf::from("/mnt/local"));
    let all = builder.env_vars();

    for (missing, _) in &all {
        if *missing == config::ENV_BACKUP_KIND {
            continue;
        }
        let vars: Vec<_> = all.iter().filter(|(k, _)| k != missing).cloned().collect();
        let mut file = ConfigFile::default();
        apply_env_overrides(&mut file, lookup(&vars)).unwrap();

        resolve_relay(&file.relay, None).assert_err_contains(missing);
    }
}

#[test]
fn test_redis_ignores_database_settings() {
    let builder = ConfigBuilder::redis(&PathBuf::from("/mnt/local"));
    let vars = builder.env_vars();
    let mut file = ConfigFile::default();
    apply_env_overrides(&mut file, lookup(&vars)).unwrap();

    let relay = resolve_relay(&file.relay, None).assert_ok();
    assert_eq!(relay.kind, BackupKind::Redis);
    assert!(relay.database_name.is_none());
}

#[test]
fn test_kind_argument_overrides_settings() {
    let builder = ConfigBuilder::postgres(&PathBuf::from("/mnt/local"));
    let vars = builder.env_vars();
    let mut file = ConfigFile::default();
    apply_env_overrides(&mut file, lookup(&vars)).unwrap();

    let relay = resolve_relay(&file.relay, Some(BackupKind::Redis)).unwrap();
    assert_eq!(relay.kind, BackupKind::Redis);
}

#[test]
fn test_kind_aliases() {
    let vars: HashMap<&str, String> = [(config::ENV_BACKUP_KIND, "Postgres".to_string())].into();
    let mut file = ConfigFile::default();
    apply_env_overrides(&mut file, |k| vars.get(k).cloned()).unwrap();
    assert_eq!(file.relay.kind, Some(BackupKind::Postgresql));
}

#[test]
#[serial]
fn test_load_config_reads_process_environment() {
    let ctx = TestContext::new();
    let builder = ConfigBuilder::redis(ctx.mount_path());
    let vars = builder.env_vars();
    for (k, v) in &vars {
        std::env::set_var(k, v);
    }

    let file = load_config(None);

    for (k, _) in &vars {
        std::env::remove_var(k);
    }

    let relay = resolve_relay(&file.unwrap().relay, None).unwrap();
    assert_eq!(relay, builder.build());
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    let ctx = TestContext::new();
    let toml = minimal_config_toml().replace("{local_path}", &ctx.mount_path().display().to_string());
    let path = ctx.write_dump("relay.toml", toml.as_bytes());

    std::env::set_var(config::ENV_S3_BUCKET, "override-bucket");
    let file = load_config(Some(path.as_path()));
    std::env::remove_var(config::ENV_S3_BUCKET);

    let relay = resolve_relay(&file.unwrap().relay, None).unwrap();
    assert_eq!(relay.s3_bucket, "override-bucket");
    assert_eq!(relay.cluster_name, "mlb-forecaster");
}
