use crate::config::Config;
use crate::error::HoursResult;
use crate::utils::time::normalize_time;
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, info, warn};

use super::models::{Day, DayRange, ParsedRange, WeeklyHours, CLOSED};
use super::range_editor::{DayRangeEditor, RangeEdit};
use super::time::{classify_range, format_range};

/// Receives the full mapping after every change
pub type ChangeListener = Box<dyn FnMut(&WeeklyHours) + Send>;

/// Owner of the weekly hours mapping and the per-day last known open times.
///
/// All edits go through here; after each one the complete mapping is handed
/// to the change listener.
pub struct WeeklyHoursEditor {
    hours: WeeklyHours,
    last_known: HashMap<Day, (String, String)>,
    default_open: String,
    default_close: String,
    time_step_minutes: u32,
    locale: String,
    listener: Option<ChangeListener>,
}

impl fmt::Debug for WeeklyHoursEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeeklyHoursEditor")
            .field("hours", &self.hours)
            .field("last_known", &self.last_known)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl WeeklyHoursEditor {
    /// Create an editor over an initial mapping
    pub fn new(hours: WeeklyHours, config: &Config) -> Self {
        for day in hours.unrecognized_days() {
            warn!(
                "Unrecognized hours for {}: {:?}, treating as open with no times",
                day,
                hours.get(day)
            );
        }

        Self {
            hours,
            last_known: HashMap::new(),
            default_open: config.default_open.clone(),
            default_close: config.default_close.clone(),
            time_step_minutes: config.time_step_minutes,
            locale: config.locale.clone(),
            listener: None,
        }
    }

    /// Register the callback that receives the mapping after each change
    pub fn on_change(mut self, listener: impl FnMut(&WeeklyHours) + Send + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn hours(&self) -> &WeeklyHours {
        &self.hours
    }

    /// Decoded range for one day
    pub fn parsed(&self, day: Day) -> ParsedRange {
        self.hours.parsed(day)
    }

    /// Last open times seen for a day, if any
    pub fn last_known(&self, day: Day) -> Option<(&str, &str)> {
        self.last_known
            .get(&day)
            .map(|(start, end)| (start.as_str(), end.as_str()))
    }

    /// Row editor for one day, built from the current mapping
    pub fn row(&self, day: Day) -> HoursResult<DayRangeEditor> {
        DayRangeEditor::new(
            day,
            day.label_in(&self.locale),
            &self.parsed(day),
            self.time_step_minutes,
        )
    }

    /// Row editors for the whole week, Monday first
    pub fn rows(&self) -> HoursResult<Vec<DayRangeEditor>> {
        Day::ALL.iter().map(|day| self.row(*day)).collect()
    }

    /// Apply a full set of fields for one day.
    ///
    /// Closing remembers the times in effect. Opening with a missing time
    /// restores the last known pair, or the defaults if there is none.
    /// Non-empty times must be 24-hour HH:MM; otherwise nothing changes.
    pub fn set_day_fields(
        &mut self,
        day: Day,
        start: &str,
        end: &str,
        closed: bool,
    ) -> HoursResult<&WeeklyHours> {
        let start = checked_time(start)?;
        let end = checked_time(end)?;

        if closed {
            if !start.is_empty() && !end.is_empty() {
                self.last_known.insert(day, (start, end));
            }
            debug!("Closing {}", day);
            self.hours.set(day, CLOSED);
        } else {
            let (start, end) = if start.is_empty() || end.is_empty() {
                self.last_known.get(&day).cloned().unwrap_or_else(|| {
                    (self.default_open.clone(), self.default_close.clone())
                })
            } else {
                (start, end)
            };

            let range = format_range(&start, &end);
            debug!("Setting {} to {}", day, range);
            self.last_known.insert(day, (start, end));
            self.hours.set(day, range);
        }

        self.notify();
        Ok(&self.hours)
    }

    /// Change the opening time, keeping the closing time and closed flag
    pub fn set_start(&mut self, day: Day, start: &str) -> HoursResult<&WeeklyHours> {
        let current = self.current_for_edit(day);
        let end = if current.end.is_empty() {
            self.default_close.clone()
        } else {
            current.end
        };
        self.set_day_fields(day, start, &end, current.closed)
    }

    /// Change the closing time, keeping the opening time and closed flag
    pub fn set_end(&mut self, day: Day, end: &str) -> HoursResult<&WeeklyHours> {
        let current = self.current_for_edit(day);
        let start = if current.start.is_empty() {
            self.default_open.clone()
        } else {
            current.start
        };
        self.set_day_fields(day, &start, end, current.closed)
    }

    /// Toggle the closed flag, keeping the current times
    pub fn set_closed(&mut self, day: Day, closed: bool) -> HoursResult<&WeeklyHours> {
        let current = self.current_for_edit(day);
        self.set_day_fields(day, &current.start, &current.end, closed)
    }

    /// Apply an edit raised by a day row
    pub fn apply(&mut self, day: Day, edit: RangeEdit) -> HoursResult<&WeeklyHours> {
        match edit {
            RangeEdit::Start(start) => self.set_start(day, &start),
            RangeEdit::End(end) => self.set_end(day, &end),
            RangeEdit::Closed(closed) => self.set_closed(day, closed),
        }
    }

    /// Monday to Friday open with the configured default hours,
    /// `9:00 AM - 6:00 PM` unless the config overrides them
    pub fn set_weekdays(&mut self) -> &WeeklyHours {
        let range = self.default_range();
        info!("Setting weekdays to {}", range);
        self.set_days(&Day::WEEKDAYS, &range)
    }

    /// Saturday and Sunday closed
    pub fn set_weekends_closed(&mut self) -> &WeeklyHours {
        info!("Closing weekends");
        self.set_days(&Day::WEEKEND, CLOSED)
    }

    /// Every day open with the configured default hours,
    /// `9:00 AM - 6:00 PM` unless the config overrides them
    pub fn set_all_days(&mut self) -> &WeeklyHours {
        let range = self.default_range();
        info!("Setting all days to {}", range);
        self.set_days(&Day::ALL, &range)
    }

    fn set_days(&mut self, days: &[Day], range: &str) -> &WeeklyHours {
        for day in days {
            self.hours.set(*day, range);
        }
        self.notify();
        &self.hours
    }

    fn default_range(&self) -> String {
        format_range(&self.default_open, &self.default_close)
    }

    fn current_for_edit(&self, day: Day) -> ParsedRange {
        let text = self.hours.get(day);
        let range = classify_range(text);
        if let DayRange::Unrecognized(ref raw) = range {
            warn!("Unrecognized hours for {}: {:?}, editing as unset", day, raw);
        }
        range.into()
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            listener(&self.hours);
        }
    }
}

/// Empty stays empty; anything else must be a valid 24-hour time
fn checked_time(time: &str) -> HoursResult<String> {
    if time.is_empty() {
        Ok(String::new())
    } else {
        normalize_time(time)
    }
}
