use crate::error::{invalid_day, Error};
use rust_i18n::t;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use super::time::{classify_range, parse_range};

/// Stored range string for a day without operating hours
pub const CLOSED: &str = "Closed";

/// One of the seven day keys, ordered Monday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub const WEEKDAYS: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub const WEEKEND: [Day; 2] = [Day::Saturday, Day::Sunday];

    /// Lower-case mapping key
    pub fn key(&self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
            Day::Sunday => "sunday",
        }
    }

    /// Display label in the current locale
    pub fn label(&self) -> String {
        self.label_in(&rust_i18n::locale())
    }

    /// Display label in the given locale
    pub fn label_in(&self, locale: &str) -> String {
        match self {
            Day::Monday => t!("day_monday", locale = locale).to_string(),
            Day::Tuesday => t!("day_tuesday", locale = locale).to_string(),
            Day::Wednesday => t!("day_wednesday", locale = locale).to_string(),
            Day::Thursday => t!("day_thursday", locale = locale).to_string(),
            Day::Friday => t!("day_friday", locale = locale).to_string(),
            Day::Saturday => t!("day_saturday", locale = locale).to_string(),
            Day::Sunday => t!("day_sunday", locale = locale).to_string(),
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Day {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Day::ALL
            .iter()
            .copied()
            .find(|day| day.key() == s)
            .ok_or_else(|| invalid_day(s))
    }
}

impl From<chrono::Weekday> for Day {
    fn from(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Day::Monday,
            chrono::Weekday::Tue => Day::Tuesday,
            chrono::Weekday::Wed => Day::Wednesday,
            chrono::Weekday::Thu => Day::Thursday,
            chrono::Weekday::Fri => Day::Friday,
            chrono::Weekday::Sat => Day::Saturday,
            chrono::Weekday::Sun => Day::Sunday,
        }
    }
}

impl Serialize for Day {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for Day {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

/// Decoded 24-hour form of a range string, used for editing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRange {
    pub start: String,
    pub end: String,
    pub closed: bool,
}

impl ParsedRange {
    pub fn closed() -> Self {
        Self {
            start: String::new(),
            end: String::new(),
            closed: true,
        }
    }

    pub fn open(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            closed: false,
        }
    }
}

/// Classification of a stored range string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayRange {
    Closed,
    Open { start: String, end: String },
    /// Text that is neither "Closed" nor a valid 12-hour range
    Unrecognized(String),
}

impl From<DayRange> for ParsedRange {
    fn from(range: DayRange) -> Self {
        match range {
            DayRange::Closed => ParsedRange::closed(),
            DayRange::Open { start, end } => ParsedRange::open(start, end),
            DayRange::Unrecognized(_) => ParsedRange::default(),
        }
    }
}

/// Operating hours for the week, keyed by day
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklyHours(BTreeMap<Day, String>);

impl WeeklyHours {
    pub fn new() -> Self {
        Self::default()
    }

    /// Range string for a day, if one is stored
    pub fn get(&self, day: Day) -> Option<&str> {
        self.0.get(&day).map(String::as_str)
    }

    pub fn set(&mut self, day: Day, range: impl Into<String>) {
        self.0.insert(day, range.into());
    }

    pub fn iter(&self) -> impl Iterator<Item = (Day, &str)> {
        self.0.iter().map(|(day, range)| (*day, range.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decoded range for a day; absent days decode as closed
    pub fn parsed(&self, day: Day) -> ParsedRange {
        parse_range(self.get(day))
    }

    /// Days whose stored text does not decode under the range grammar
    pub fn unrecognized_days(&self) -> Vec<Day> {
        self.iter()
            .filter(|(_, range)| matches!(classify_range(Some(*range)), DayRange::Unrecognized(_)))
            .map(|(day, _)| day)
            .collect()
    }
}

impl FromIterator<(Day, String)> for WeeklyHours {
    fn from_iter<I: IntoIterator<Item = (Day, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_keys_round_trip() {
        for day in Day::ALL {
            assert_eq!(day.key().parse::<Day>().unwrap(), day);
        }
        assert!("Monday".parse::<Day>().is_err());
        assert!("funday".parse::<Day>().is_err());
    }

    #[test]
    fn test_day_from_chrono() {
        assert_eq!(Day::from(chrono::Weekday::Mon), Day::Monday);
        assert_eq!(Day::from(chrono::Weekday::Sun), Day::Sunday);
    }

    #[test]
    fn test_day_labels() {
        assert_eq!(Day::Monday.label_in("en"), "Monday");
        assert_eq!(Day::Sunday.label_in("en"), "Sunday");
        assert_eq!(Day::Monday.label_in("fi"), "Maanantai");
        assert_eq!(Day::Friday.label(), "Friday");
    }

    #[test]
    fn test_weekly_hours_json() {
        let json = r#"{"sunday":"Closed","monday":"9:00 AM - 6:00 PM"}"#;
        let hours: WeeklyHours = serde_json::from_str(json).unwrap();
        assert_eq!(hours.get(Day::Monday), Some("9:00 AM - 6:00 PM"));
        assert_eq!(hours.get(Day::Sunday), Some(CLOSED));
        assert_eq!(hours.get(Day::Tuesday), None);

        // Serialized in day order
        assert_eq!(
            serde_json::to_string(&hours).unwrap(),
            r#"{"monday":"9:00 AM - 6:00 PM","sunday":"Closed"}"#
        );

        assert!(serde_json::from_str::<WeeklyHours>(r#"{"someday":"Closed"}"#).is_err());
    }

    #[test]
    fn test_parsed_and_unrecognized() {
        let mut hours = WeeklyHours::new();
        hours.set(Day::Monday, "10:30 AM - 7:15 PM");
        hours.set(Day::Tuesday, "all day");

        assert_eq!(hours.parsed(Day::Monday), ParsedRange::open("10:30", "19:15"));
        assert_eq!(hours.parsed(Day::Tuesday), ParsedRange::default());
        assert_eq!(hours.parsed(Day::Friday), ParsedRange::closed());
        assert_eq!(hours.unrecognized_days(), vec![Day::Tuesday]);
    }
}
