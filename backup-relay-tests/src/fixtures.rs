//! Test fixtures and sample data

use chrono::{DateTime, TimeZone, Utc};

pub const CLUSTER_NAME: &str = "mlb-forecaster";
pub const POSTGRES_SERVICE: &str = "postgres";
pub const REDIS_SERVICE: &str = "redis";
pub const S3_BUCKET: &str = "mlb-forecaster-backups";
pub const DATABASE_NAME: &str = "forecaster";
pub const DATABASE_USER: &str = "forecaster_admin";
pub const EFS_PATH: &str = "/mnt/efs/backups";
pub const TASK_ARN: &str =
    "arn:aws:ecs:us-west-2:123456789012:task/mlb-forecaster/0f1e2d3c4b5a69788796a5b4c3d2e1f0";

/// Start-dump command the PostgreSQL relay must send
pub fn expected_postgres_start_command() -> String {
    format!(
        "sh -c 'pg_dump -U {} -d {} -F c -f {}/mlb-forecaster.dump | gzip - > {}/done.gz'",
        DATABASE_USER, DATABASE_NAME, EFS_PATH, EFS_PATH
    )
}

/// Start-dump command the Redis relay must send
pub fn expected_redis_start_command() -> String {
    format!(
        "sh -c 'cp /data/dump.rdb {} | gzip - > {}/done.gz'",
        EFS_PATH, EFS_PATH
    )
}

/// Cleanup command both relays send
pub fn expected_cleanup_command() -> String {
    format!("sh -c 'rm -rf {}/done.gz'", EFS_PATH)
}

/// 06:15 UTC on July 4th, still July 3rd in Los Angeles
pub fn utc_after_midnight() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 4, 6, 15, 0).unwrap()
}

/// Minimal TOML config; `{local_path}` is replaced by the caller
pub fn minimal_config_toml() -> &'static str {
    r#"
[relay]
kind = "postgresql"
cluster_name = "mlb-forecaster"
service_name = "postgres"
container_name = "postgres"
s3_bucket = "mlb-forecaster-backups"
database_name = "forecaster"
database_user = "forecaster_admin"
efs_path = "/mnt/efs/backups"
local_path = "{local_path}"

[logging]
level = "debug"
format = "json"
"#
}
