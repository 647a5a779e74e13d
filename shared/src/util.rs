use chrono::Datelike;

/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Calendar year of the host's local clock
pub fn local_year() -> i32 {
    chrono::Local::now().year()
}

/// Calendar year in UTC
pub fn utc_year() -> i32 {
    chrono::Utc::now().year()
}
