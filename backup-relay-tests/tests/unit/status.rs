//! Tests for sentinel status probing

use backup_relay::utils::{probe_status, BackupStatus, STALE_AFTER};
use chrono::Duration;
use rstest::rstest;
use std::time::SystemTime;
use test_utils::TestContext;

#[test]
fn test_absent_sentinel_is_not_started() {
    let ctx = TestContext::new();
    let status = probe_status(&ctx.sentinel_path(), SystemTime::now(), STALE_AFTER).unwrap();
    assert_eq!(status, BackupStatus::NotStarted);
}

#[rstest]
#[case::fresh_empty(0, 0, BackupStatus::InProgress)]
#[case::two_hours_empty(0, 2, BackupStatus::InProgress)]
#[case::one_hour_written(1024, 1, BackupStatus::Complete)]
#[case::eleven_hours_written(1, 11, BackupStatus::Complete)]
#[case::stale_empty(0, 13, BackupStatus::NotStarted)]
#[case::stale_written(1024, 13, BackupStatus::NotStarted)]
#[case::very_stale(4096, 72, BackupStatus::NotStarted)]
fn test_status_by_size_and_age(
    #[case] size: usize,
    #[case] age_hours: i64,
    #[case] expected: BackupStatus,
) {
    let ctx = TestContext::new();
    let now = ctx.sentinel_aged(size, Duration::hours(age_hours));

    let status = probe_status(&ctx.sentinel_path(), now.into(), STALE_AFTER).unwrap();

    assert_eq!(status, expected);
}

#[test]
fn test_stale_sentinel_is_left_in_place() {
    let ctx = TestContext::new();
    let now = ctx.sentinel_aged(1024, Duration::hours(13));

    probe_status(&ctx.sentinel_path(), now.into(), STALE_AFTER).unwrap();

    assert!(ctx.sentinel_exists());
}

#[test]
fn test_just_past_threshold_is_stale() {
    let ctx = TestContext::new();
    let now = ctx.sentinel_aged(0, Duration::hours(12) + Duration::seconds(1));

    let status = probe_status(&ctx.sentinel_path(), now.into(), STALE_AFTER).unwrap();

    assert_eq!(status, BackupStatus::NotStarted);
}

#[cfg(unix)]
#[test]
fn test_unreadable_parent_is_an_error() {
    let ctx = TestContext::new();
    // A regular file used as a directory makes stat fail with something other than NotFound
    let file = ctx.write_dump("not-a-dir", b"x");
    let result = probe_status(&file.join("done.gz"), SystemTime::now(), STALE_AFTER);
    assert!(result.is_err());
}
