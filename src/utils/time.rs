use crate::error::{config_error, invalid_time, HoursResult};
use chrono::{Duration, NaiveTime, Timelike};

/// Minutes in one day
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Validate a user-supplied 24-hour time and return it zero-padded
pub fn normalize_time(time_str: &str) -> HoursResult<String> {
    let (hour, minute) = parse_time(time_str.trim()).ok_or_else(|| invalid_time(time_str))?;
    Ok(format!("{:02}:{:02}", hour, minute))
}

/// Every time of day starting at midnight, `step_minutes` apart
pub fn time_slots(step_minutes: u32) -> HoursResult<Vec<NaiveTime>> {
    if step_minutes == 0 || MINUTES_PER_DAY % step_minutes != 0 {
        return Err(config_error(&format!(
            "Time step must be a positive divisor of {} minutes, got {}",
            MINUTES_PER_DAY, step_minutes
        )));
    }

    let count = MINUTES_PER_DAY / step_minutes;
    let step = Duration::minutes(step_minutes as i64);

    let mut slots = Vec::with_capacity(count as usize);
    let mut current = NaiveTime::MIN;
    for _ in 0..count {
        slots.push(current);
        current += step;
    }

    Ok(slots)
}

/// Format a time of day as 24-hour HH:MM
pub fn format_hhmm(time: &NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        // Valid cases
        assert_eq!(parse_time("00:00"), Some((0, 0)));
        assert_eq!(parse_time("12:30"), Some((12, 30)));
        assert_eq!(parse_time("23:59"), Some((23, 59)));
        assert_eq!(parse_time("9:05"), Some((9, 5)));

        // Invalid cases
        assert_eq!(parse_time("24:00"), None); // Hour out of range
        assert_eq!(parse_time("12:60"), None); // Minute out of range
        assert_eq!(parse_time("12:30:45"), None); // Too many parts
        assert_eq!(parse_time("12"), None); // Too few parts
        assert_eq!(parse_time("12:ab"), None); // Invalid minute
        assert_eq!(parse_time("ab:30"), None); // Invalid hour
    }

    #[test]
    fn test_normalize_time() {
        assert_eq!(normalize_time("9:05").unwrap(), "09:05");
        assert_eq!(normalize_time(" 18:00 ").unwrap(), "18:00");
        assert!(normalize_time("25:00").is_err());
        assert!(normalize_time("").is_err());
    }

    #[test]
    fn test_time_slots() {
        let slots = time_slots(30).unwrap();
        assert_eq!(slots.len(), 48);
        assert_eq!(format_hhmm(&slots[0]), "00:00");
        assert_eq!(format_hhmm(&slots[1]), "00:30");
        assert_eq!(format_hhmm(&slots[47]), "23:30");

        let hourly = time_slots(60).unwrap();
        assert_eq!(hourly.len(), 24);
        assert_eq!(format_hhmm(&hourly[23]), "23:00");

        // Step must divide the day evenly
        assert!(time_slots(0).is_err());
        assert!(time_slots(7).is_err());
    }
}
