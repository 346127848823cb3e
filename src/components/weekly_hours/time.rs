use lazy_static::lazy_static;
use regex::Regex;

use super::models::{DayRange, ParsedRange, CLOSED};

lazy_static! {
    static ref RANGE_REGEX: Regex =
        Regex::new(r"(?i)^(\d{1,2}):(\d{2})\s*(AM|PM)\s*-\s*(\d{1,2}):(\d{2})\s*(AM|PM)$").unwrap();
}

/// Convert one 12-hour clock reading into 24-hour HH:MM.
///
/// Hours outside 1-12 and minutes past 59 are rejected.
fn to_24_hour(hour: &str, minute: &str, period: &str) -> Option<String> {
    let hour = hour.parse::<u32>().ok()?;
    let minute_value = minute.parse::<u32>().ok()?;
    if !(1..=12).contains(&hour) || minute_value > 59 {
        return None;
    }

    let pm = period.eq_ignore_ascii_case("PM");
    let hour = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };

    Some(format!("{:02}:{}", hour, minute))
}

/// Classify a stored range string.
///
/// Absent text and the exact literal "Closed" are closed days. Anything else
/// must be a full `h:mm AM - h:mm PM` range to count as open.
pub fn classify_range(text: Option<&str>) -> DayRange {
    let text = match text {
        None => return DayRange::Closed,
        Some(CLOSED) => return DayRange::Closed,
        Some(text) => text,
    };

    let Some(caps) = RANGE_REGEX.captures(text.trim()) else {
        return DayRange::Unrecognized(text.to_string());
    };

    match (
        to_24_hour(&caps[1], &caps[2], &caps[3]),
        to_24_hour(&caps[4], &caps[5], &caps[6]),
    ) {
        (Some(start), Some(end)) => DayRange::Open { start, end },
        _ => DayRange::Unrecognized(text.to_string()),
    }
}

/// Decode a range string into its editable 24-hour form.
///
/// Unrecognized text decodes as open with no times set.
pub fn parse_range(text: Option<&str>) -> ParsedRange {
    classify_range(text).into()
}

/// Format a 24-hour "HH:MM" time as "h:mm AM/PM". Empty input stays empty.
pub fn format_time12(time24: &str) -> String {
    if time24.is_empty() {
        return String::new();
    }

    let (hour, minute) = time24.split_once(':').unwrap_or((time24, ""));
    let Ok(hour) = hour.parse::<u32>() else {
        return time24.to_string();
    };

    let period = if hour < 12 { "AM" } else { "PM" };
    let display_hour = match hour {
        0 => 12,
        h if h > 12 => h - 12,
        h => h,
    };

    format!("{}:{} {}", display_hour, minute, period)
}

/// Encode an open day as its stored range string
pub fn format_range(start: &str, end: &str) -> String {
    format!("{} - {}", format_time12(start), format_time12(end))
}
