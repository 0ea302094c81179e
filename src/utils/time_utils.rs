use chrono::{Local, SecondsFormat, Utc};

pub struct TimeUtils;

impl TimeUtils {
    pub const MS_IN_S: i64 = 1000;
    /// 24-hour wall-clock format used for chart axis labels.
    pub const CLOCK_FORMAT: &str = "%H:%M:%S";

    /// Label for the sample being appended right now, e.g. "14:03:59".
    pub fn clock_label() -> String {
        Local::now().format(Self::CLOCK_FORMAT).to_string()
    }

    pub fn now_timestamp_ms() -> i64 {
        Local::now().timestamp_millis()
    }

    /// RFC3339 UTC stamp matching what the remote API puts in `timestamp`
    /// and `last_updated` fields.
    pub fn now_iso() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
