//! Lenient parsing of `lastAchievement` timestamps.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// A parsed achievement timestamp, ordered oldest to newest.
///
/// Strings that match no known format are kept as `Unrecognized`, which
/// orders before every real timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AchievementDate {
    Unrecognized,
    At(NaiveDateTime),
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d"];

/// Parse a timestamp as written by the platform exports.
///
/// Accepts RFC 3339 (offsets are converted to UTC), naive date-times and
/// plain dates (midnight).
pub fn parse_achievement_date(text: &str) -> AchievementDate {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return AchievementDate::At(dt.naive_utc());
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, fmt) {
            return AchievementDate::At(dt);
        }
    }
    for fmt in DATE_FORMATS {
        if let Some(dt) = NaiveDate::parse_from_str(text, fmt)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return AchievementDate::At(dt);
        }
    }

    AchievementDate::Unrecognized
}
