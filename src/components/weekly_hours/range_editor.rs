use crate::error::HoursResult;

use super::models::{Day, ParsedRange};
use super::selector::TimeSelector;

/// A single-field change raised by a day row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeEdit {
    Start(String),
    End(String),
    Closed(bool),
}

/// Editable row for one day: two time selectors and a closed toggle.
///
/// Holds no canonical state. Interactions are translated into [`RangeEdit`]s
/// for the weekly editor to apply.
#[derive(Debug, Clone)]
pub struct DayRangeEditor {
    day: Day,
    label: String,
    closed: bool,
    start: TimeSelector,
    end: TimeSelector,
}

impl DayRangeEditor {
    pub fn new(
        day: Day,
        label: impl Into<String>,
        range: &ParsedRange,
        step_minutes: u32,
    ) -> HoursResult<Self> {
        Ok(Self {
            day,
            label: label.into(),
            closed: range.closed,
            start: TimeSelector::new(step_minutes)?
                .with_value(range.start.clone())
                .with_disabled(range.closed),
            end: TimeSelector::new(step_minutes)?
                .with_value(range.end.clone())
                .with_disabled(range.closed),
        })
    }

    pub fn day(&self) -> Day {
        self.day
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Time selectors are muted while the day is closed
    pub fn times_disabled(&self) -> bool {
        self.closed
    }

    pub fn start(&self) -> &TimeSelector {
        &self.start
    }

    pub fn end(&self) -> &TimeSelector {
        &self.end
    }

    pub fn select_start(&mut self, value: &str) -> Option<RangeEdit> {
        self.start.select(value).map(RangeEdit::Start)
    }

    pub fn select_end(&mut self, value: &str) -> Option<RangeEdit> {
        self.end.select(value).map(RangeEdit::End)
    }

    /// Flip the closed checkbox. Previous times are not restored here.
    pub fn toggle_closed(&mut self, closed: bool) -> RangeEdit {
        self.closed = closed;
        RangeEdit::Closed(closed)
    }

    /// One-line summary, e.g. "Monday: 9:00 AM - 6:00 PM"
    pub fn summary(&self) -> String {
        if self.closed {
            format!("{}: Closed", self.label)
        } else {
            format!("{}: {} - {}", self.label, self.start.display(), self.end.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_row_emits_edits() {
        let mut row =
            DayRangeEditor::new(Day::Monday, "Monday", &ParsedRange::open("09:00", "18:00"), 30)
                .unwrap();

        assert!(!row.times_disabled());
        assert_eq!(row.start().value(), "09:00");
        assert_eq!(row.summary(), "Monday: 9:00 AM - 6:00 PM");

        assert_eq!(row.select_start("10:30"), Some(RangeEdit::Start("10:30".to_string())));
        assert_eq!(row.select_end("19:15"), Some(RangeEdit::End("19:15".to_string())));
        assert_eq!(row.toggle_closed(true), RangeEdit::Closed(true));
        assert!(row.is_closed());
    }

    #[test]
    fn test_closed_row_disables_times() {
        let mut row =
            DayRangeEditor::new(Day::Sunday, "Sunday", &ParsedRange::closed(), 30).unwrap();

        assert!(row.times_disabled());
        assert!(row.start().is_disabled());
        assert!(row.end().is_disabled());
        assert_eq!(row.select_start("10:00"), None);
        assert_eq!(row.summary(), "Sunday: Closed");

        // Unchecking only emits the flag; times stay empty
        assert_eq!(row.toggle_closed(false), RangeEdit::Closed(false));
        assert_eq!(row.start().value(), "");
    }
}
