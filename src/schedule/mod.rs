/// Schedule subsystem - Turning the class list into dated sessions
///
/// Dates are parsed from the loose formats users type, class days are
/// given as weekday abbreviations, and the list of classes is laid out over
/// the available days before being rendered as tab-delimited text or as an
/// iCalendar file.

pub mod calendar;
pub mod dates;
pub mod error;
pub mod output;

// Re-export main types for convenience
pub use calendar::{AvailableDates, ScheduledClass, build_schedule};
pub use dates::{parse_class_days, parse_date, parse_date_this_year, weekday_label};
pub use error::ScheduleError;
pub use output::{ClassTimes, OutputFormat, render_ical, render_tsv};
