//! Tests for archive key construction

use backup_relay::utils::archive::archive_key;
use chrono::{TimeZone, Utc};
use rstest::rstest;
use test_utils::utc_after_midnight;

#[test]
fn test_key_uses_los_angeles_date_across_utc_midnight() {
    let key = archive_key("postgresql", "mlb-forecaster.dump", utc_after_midnight());
    assert_eq!(key, "backups/postgresql/2024-07-03_mlb-forecaster.dump");
}

#[rstest]
// PDT, UTC-7
#[case(Utc.with_ymd_and_hms(2024, 6, 1, 6, 59, 59).unwrap(), "2024-05-31")]
#[case(Utc.with_ymd_and_hms(2024, 6, 1, 7, 0, 0).unwrap(), "2024-06-01")]
// PST, UTC-8
#[case(Utc.with_ymd_and_hms(2025, 1, 1, 7, 59, 59).unwrap(), "2024-12-31")]
#[case(Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap(), "2025-01-01")]
// Spring-forward day
#[case(Utc.with_ymd_and_hms(2024, 3, 10, 12, 0, 0).unwrap(), "2024-03-10")]
fn test_key_date_boundaries(#[case] now: chrono::DateTime<Utc>, #[case] date: &str) {
    assert_eq!(
        archive_key("redis", "dump.rdb", now),
        format!("backups/redis/{}_dump.rdb", date)
    );
}
