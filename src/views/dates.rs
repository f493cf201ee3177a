//! Schedule parsing and display formats.
//!
//! Schedules are stored as free strings (`YYYY-MM-DD`, `YYYY-MM-DDTHH:MM`,
//! full ISO date-times). Formatting never fails: empty input yields the
//! placeholder and unparsable input is returned unchanged.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, Timelike};
use studio_models::PLACEHOLDER;

const MONTHS_SHORT: [&str; 12] = [
    "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sep.", "Okt.", "Nov.", "Dez.",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Offset forms RFC 3339 rejects because the seconds are missing.
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M%:z", "%Y-%m-%d %H:%M%:z"];

/// Parse a schedule string into local wall-clock time.
///
/// Offsets (including a trailing `Z`) are converted to the local zone;
/// strings without an offset are taken as local time; a bare date means
/// midnight.
pub fn parse_schedule(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Local).naive_local());
    }
    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, format) {
            return Some(dt.with_timezone(&Local).naive_local());
        }
    }
    if let Some(utc) = value.strip_suffix(['Z', 'z']) {
        return parse_naive(utc).map(|dt| dt.and_utc().with_timezone(&Local).naive_local());
    }
    parse_naive(value).or_else(|| {
        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    })
}

fn parse_naive(value: &str) -> Option<NaiveDateTime> {
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

fn format_with(value: Option<&str>, render: impl Fn(NaiveDateTime) -> String) -> String {
    match value {
        None | Some("") => PLACEHOLDER.to_string(),
        Some(raw) => parse_schedule(raw).map(render).unwrap_or_else(|| raw.to_string()),
    }
}

/// `dd.MM.yyyy um HH:mm Uhr`
pub fn format_long(value: Option<&str>) -> String {
    format_with(value, |dt| dt.format("%d.%m.%Y um %H:%M Uhr").to_string())
}

/// `dd. MMM` with German month abbreviations, e.g. `05. März`.
pub fn format_short(value: Option<&str>) -> String {
    format_with(value, |dt| {
        format!("{:02}. {}", dt.day(), MONTHS_SHORT[dt.month0() as usize])
    })
}

/// `HH:mm`
pub fn format_time(value: Option<&str>) -> String {
    format_with(value, |dt| format!("{:02}:{:02}", dt.hour(), dt.minute()))
}

/// Whether the schedule falls on `today` (calendar date only).
pub fn is_today(value: Option<&str>, today: NaiveDate) -> bool {
    value
        .and_then(parse_schedule)
        .is_some_and(|dt| dt.date() == today)
}

/// Whether the schedule falls on `today` or later (calendar date only).
pub fn is_today_or_future(value: Option<&str>, today: NaiveDate) -> bool {
    value
        .and_then(parse_schedule)
        .is_some_and(|dt| dt.date() >= today)
}

/// Default schedule for new courses: the day after `today` at 10:00,
/// formatted for a `datetime-local` input.
pub fn tomorrow_default(today: NaiveDate) -> String {
    let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);
    format!("{}T10:00", tomorrow.format("%Y-%m-%d"))
}

/// Today's date in the local zone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
