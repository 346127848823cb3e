//! Weekly operating-hours editor.
//!
//! Each day's hours are stored as a display string, either `"Closed"` or
//! `"9:00 AM - 6:00 PM"`. [`WeeklyHoursEditor`] owns the mapping and hands
//! the whole of it to a listener after every edit; [`WeeklyHoursHandle`]
//! runs one editor behind an actor for async callers.

mod actor;
pub mod editor;
mod handle;
pub mod models;
pub mod range_editor;
pub mod selector;
pub mod time;

pub use editor::WeeklyHoursEditor;
pub use handle::WeeklyHoursHandle;
pub use models::{Day, DayRange, ParsedRange, WeeklyHours, CLOSED};
pub use range_editor::{DayRangeEditor, RangeEdit};
pub use selector::{Period, TimeOption, TimeSelector};
pub use time::{format_range, format_time12, parse_range};
