use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error(
        "Invalid date format '{0}'. Acceptable forms are yyyy/mm/dd, mm/dd/yyyy and mm/dd."
    )]
    InvalidDateFormat(String),
    #[error("No such date: {0}")]
    NoSuchDate(String),
    #[error("Unknown weekday '{0}'. Valid days are [mon, tue, wed, thu, fri, sat, sun].")]
    UnknownWeekday(String),
    #[error("No class days given")]
    NoClassDays,
    #[error("Invalid start time '{0}', expected HH:MM")]
    InvalidStartTime(String),
    #[error("Invalid duration '{0}', expected hours between 0 and 24")]
    InvalidDuration(String),
    #[error("The class list is empty")]
    NoClasses,
}
