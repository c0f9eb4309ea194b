//! Display formatting for backend timestamps
//!
//! The backend sends SQLite timestamps (`2024-01-15 10:05:03`), ISO 8601
//! strings or bare dates. Values are shown in US short form without any
//! timezone conversion; anything unparsable is shown verbatim.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// Parse any timestamp shape the backend is known to produce
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `1/15/2024`
pub fn format_date(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%-m/%-d/%Y").to_string(),
        None => value.to_string(),
    }
}

/// `1/15/2024, 10:05:03 AM`
pub fn format_date_time(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_timestamp() {
        assert_eq!(format_date("2024-01-15 10:05:03"), "1/15/2024");
        assert_eq!(format_date_time("2024-01-15 10:05:03"), "1/15/2024, 10:05:03 AM");
        assert_eq!(format_date_time("2024-11-02 18:30:00"), "11/2/2024, 6:30:00 PM");
    }

    #[test]
    fn test_iso_and_bare_dates() {
        assert_eq!(format_date("2024-03-09T08:00:00Z"), "3/9/2024");
        assert_eq!(format_date("2024-03-09"), "3/9/2024");
        assert_eq!(format_date_time("2024-03-09"), "3/9/2024, 12:00:00 AM");
    }

    #[test]
    fn test_unparsable_is_verbatim() {
        assert_eq!(format_date("yesterday"), "yesterday");
        assert_eq!(format_date_time(""), "");
    }
}
