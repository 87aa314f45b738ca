/**
 * date.rs
 * Stored project dates and PHP-style date format strings
 *
 * Project dates are stored as timezone-agnostic `YYYY-MM-DD HH:MM:SS` text
 * and read as site-local time. Display formats use the PHP `date()` letters
 * (e.g. "F j, Y" -> "January 15, 2020"); a backslash prints the next
 * character literally.
 */

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike};

/// Machine-readable format used for `datetime` attributes
pub const ISO_8601_FORMAT: &str = "Y-m-d\\TH:i:sP";

/// Layout dates are stored with
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Short month names, January first
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a stored date
///
/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS` and `YYYY-MM-DD`.
/// Empty values and the all-zero date return `None`.
pub fn parse_stored(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() || raw.starts_with("0000-00-00") {
        return None;
    }

    NaiveDateTime::parse_from_str(raw, STORAGE_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Render a date in storage layout
pub fn to_storage(date: NaiveDate) -> String {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.format(STORAGE_FORMAT).to_string())
        .unwrap_or_default()
}

/// Format a stored date with a PHP-style format string
///
/// # Arguments
/// * `format` - PHP `date()` format (e.g. "F j, Y")
/// * `raw` - Stored date text
/// * `offset` - Site offset the stored value is expressed in
///
/// # Returns
/// `None` when `raw` is not a recognizable date
pub fn mysql2date(format: &str, raw: &str, offset: FixedOffset) -> Option<String> {
    let naive = parse_stored(raw)?;
    let local = offset.from_local_datetime(&naive).single()?;
    Some(format_php(&local, format))
}

/// Format a date-time with a PHP-style format string
pub fn format_php(dt: &DateTime<FixedOffset>, format: &str) -> String {
    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(literal) = chars.next() {
                    out.push(literal);
                }
            }
            // Day
            'd' => out.push_str(&format!("{:02}", dt.day())),
            'D' => out.push_str(&dt.format("%a").to_string()),
            'j' => out.push_str(&dt.day().to_string()),
            'l' => out.push_str(&dt.format("%A").to_string()),
            'N' => out.push_str(&dt.weekday().number_from_monday().to_string()),
            'S' => out.push_str(ordinal_suffix(dt.day())),
            'w' => out.push_str(&dt.weekday().num_days_from_sunday().to_string()),
            'z' => out.push_str(&dt.ordinal0().to_string()),
            // Week
            'W' => out.push_str(&format!("{:02}", dt.iso_week().week())),
            // Month
            'F' => out.push_str(&dt.format("%B").to_string()),
            'm' => out.push_str(&format!("{:02}", dt.month())),
            'M' => out.push_str(&dt.format("%b").to_string()),
            'n' => out.push_str(&dt.month().to_string()),
            't' => out.push_str(&days_in_month(dt.year(), dt.month()).to_string()),
            // Year
            'L' => out.push_str(if is_leap_year(dt.year()) { "1" } else { "0" }),
            'o' => out.push_str(&dt.iso_week().year().to_string()),
            'Y' => out.push_str(&format!("{:04}", dt.year())),
            'y' => out.push_str(&format!("{:02}", dt.year().rem_euclid(100))),
            // Time
            'a' => out.push_str(if dt.hour() < 12 { "am" } else { "pm" }),
            'A' => out.push_str(if dt.hour() < 12 { "AM" } else { "PM" }),
            'g' => out.push_str(&dt.hour12().1.to_string()),
            'G' => out.push_str(&dt.hour().to_string()),
            'h' => out.push_str(&format!("{:02}", dt.hour12().1)),
            'H' => out.push_str(&format!("{:02}", dt.hour())),
            'i' => out.push_str(&format!("{:02}", dt.minute())),
            's' => out.push_str(&format!("{:02}", dt.second())),
            'u' => out.push_str(&format!("{:06}", dt.nanosecond() / 1_000 % 1_000_000)),
            'v' => out.push_str(&format!("{:03}", dt.nanosecond() / 1_000_000 % 1_000)),
            // Timezone
            'e' | 'T' => out.push_str(&zone_name(dt.offset())),
            'P' => out.push_str(&dt.format("%:z").to_string()),
            'O' => out.push_str(&dt.format("%z").to_string()),
            'Z' => out.push_str(&dt.offset().local_minus_utc().to_string()),
            // Full date/time
            'c' => out.push_str(&format_php(dt, ISO_8601_FORMAT)),
            'r' => out.push_str(&format_php(dt, "D, d M Y H:i:s O")),
            'U' => out.push_str(&dt.timestamp().to_string()),
            other => out.push(other),
        }
    }

    out
}

fn ordinal_suffix(day: u32) -> &'static str {
    match (day % 10, day % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    (28..=31)
        .rev()
        .find(|day| NaiveDate::from_ymd_opt(year, month, *day).is_some())
        .unwrap_or(28)
}

fn zone_name(offset: &FixedOffset) -> String {
    if offset.local_minus_utc() == 0 {
        "UTC".to_string()
    } else {
        let sign = if offset.local_minus_utc() < 0 { '-' } else { '+' };
        let minutes = offset.local_minus_utc().abs() / 60;
        format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
    }
}
