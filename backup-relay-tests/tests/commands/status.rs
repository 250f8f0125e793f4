//! Tests for the status view of a relay
//!
//! Probing status never calls ECS or S3.

use chrono::{Duration, Utc};
use test_utils::*;

#[test]
fn test_status_without_sentinel() {
    let ctx = TestContext::new();
    let ecs = MockEcsOps::new();
    let relay = ctx.relay(BackupKind::Postgresql, ecs.clone(), MockStorageOps::new());

    assert_eq!(relay.status(Utc::now()).unwrap(), BackupStatus::NotStarted);
    assert!(ecs.get_calls().is_empty());
}

#[test]
fn test_status_in_progress() {
    let ctx = TestContext::new();
    let now = ctx.sentinel_aged(0, Duration::minutes(30));
    let relay = ctx.relay(BackupKind::Redis, MockEcsOps::new(), MockStorageOps::new());

    assert_eq!(relay.status(now).unwrap(), BackupStatus::InProgress);
}

#[test]
fn test_status_complete() {
    let ctx = TestContext::new();
    let now = ctx.sentinel_aged(512, Duration::hours(3));
    let relay = ctx.relay(BackupKind::Redis, MockEcsOps::new(), MockStorageOps::new());

    assert_eq!(relay.status(now).unwrap(), BackupStatus::Complete);
}

#[test]
fn test_status_display() {
    assert_eq!(BackupStatus::NotStarted.to_string(), "not started");
    assert_eq!(BackupStatus::InProgress.to_string(), "in progress");
    assert_eq!(BackupStatus::Complete.to_string(), "complete");
}
