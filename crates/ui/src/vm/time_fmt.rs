use chrono::{DateTime, NaiveDate, Utc};

/// `Mar 25, 2023`
#[must_use]
pub fn format_date(value: NaiveDate) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// `Mar 20, 2023 at 12:00 UTC`
#[must_use]
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.format("%b %-d, %Y at %H:%M UTC").to_string()
}

#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    format!("{minutes} min")
}
