//! Archive object keys

use chrono::{DateTime, Utc};
use chrono_tz::America::Los_Angeles;

/// Archives are partitioned by the calendar day in this zone
pub const ARCHIVE_TIME_ZONE: chrono_tz::Tz = Los_Angeles;

/// Build `backups/<kind>/<YYYY-MM-DD>_<dump-file>` for the given instant
pub fn archive_key(kind: &str, dump_file_name: &str, now: DateTime<Utc>) -> String {
    let date = now.with_timezone(&ARCHIVE_TIME_ZONE).format("%Y-%m-%d");
    format!("backups/{}/{}_{}", kind, date, dump_file_name)
}
