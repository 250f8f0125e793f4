//! Tests for the per-kind start commands

use backup_relay::strategies::{strategy_for, BackupStrategy, PostgresqlStrategy, RedisStrategy};
use backup_relay::config::BackupKind;
use std::path::Path;
use test_utils::{
    expected_postgres_start_command, expected_redis_start_command, ConfigBuilder,
};

#[test]
fn test_postgres_start_command_shape() {
    let config = ConfigBuilder::postgres(Path::new("/mnt/local")).build();
    assert_eq!(
        PostgresqlStrategy.start_command(&config).unwrap(),
        expected_postgres_start_command()
    );
}

#[test]
fn test_redis_start_command_shape() {
    let config = ConfigBuilder::redis(Path::new("/mnt/local")).build();
    assert_eq!(
        RedisStrategy.start_command(&config).unwrap(),
        expected_redis_start_command()
    );
}

#[test]
fn test_postgres_needs_database_user() {
    let config = ConfigBuilder::postgres(Path::new("/mnt/local"))
        .without_database_user()
        .build();
    let err = PostgresqlStrategy.start_command(&config).unwrap_err();
    assert!(err.to_string().contains("DATABASE_USER"));
}

#[test]
fn test_dump_file_names() {
    assert_eq!(strategy_for(BackupKind::Postgresql).dump_file_name(), "mlb-forecaster.dump");
    assert_eq!(strategy_for(BackupKind::Redis).dump_file_name(), "dump.rdb");
}

#[test]
fn test_commands_follow_efs_path() {
    let config = ConfigBuilder::redis(Path::new("/mnt/local"))
        .efs_path("/efs")
        .build();
    assert_eq!(
        RedisStrategy.start_command(&config).unwrap(),
        "sh -c 'cp /data/dump.rdb /efs | gzip - > /efs/done.gz'"
    );
}
