use crate::error::HoursResult;
use crate::utils::time::{format_hhmm, parse_time, time_slots};
use chrono::Timelike;

use super::time::format_time12;

/// Half of the day an option falls in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

/// One selectable time of day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOption {
    /// 24-hour HH:MM value emitted on selection
    pub value: String,
    /// 12-hour display text
    pub label: String,
    pub period: Period,
}

/// Searchable list of times of day at a fixed granularity
#[derive(Debug, Clone)]
pub struct TimeSelector {
    options: Vec<TimeOption>,
    value: String,
    disabled: bool,
}

impl TimeSelector {
    /// Build the option list, one entry every `step_minutes` from midnight
    pub fn new(step_minutes: u32) -> HoursResult<Self> {
        let options = time_slots(step_minutes)?
            .iter()
            .map(|slot| {
                let value = format_hhmm(slot);
                TimeOption {
                    label: format_time12(&value),
                    period: if slot.hour() < 12 { Period::Am } else { Period::Pm },
                    value,
                }
            })
            .collect();

        Ok(Self {
            options,
            value: String::new(),
            disabled: false,
        })
    }

    /// Set the current 24-hour value (may be empty)
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// 12-hour display of the current value
    pub fn display(&self) -> String {
        format_time12(&self.value)
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn options(&self) -> &[TimeOption] {
        &self.options
    }

    /// Options whose display text contains the query, ignoring case
    pub fn filter(&self, query: &str) -> Vec<&TimeOption> {
        let query = query.trim().to_lowercase();
        self.options
            .iter()
            .filter(|option| query.is_empty() || option.label.to_lowercase().contains(&query))
            .collect()
    }

    /// Filtered options split into AM and PM groups, skipping empty groups
    pub fn grouped(&self, query: &str) -> Vec<(Period, Vec<&TimeOption>)> {
        let (am, pm): (Vec<&TimeOption>, Vec<&TimeOption>) = self
            .filter(query)
            .into_iter()
            .partition(|option| option.period == Period::Am);

        [(Period::Am, am), (Period::Pm, pm)]
            .into_iter()
            .filter(|(_, group)| !group.is_empty())
            .collect()
    }

    /// Choose a value, returning the 24-hour string to emit.
    ///
    /// Nothing is emitted while disabled or for a malformed value.
    pub fn select(&mut self, value: &str) -> Option<String> {
        if self.disabled {
            return None;
        }
        let (hour, minute) = parse_time(value)?;
        self.value = format!("{:02}:{:02}", hour, minute);
        Some(self.value.clone())
    }
}
