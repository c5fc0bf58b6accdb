use super::dates::{format_class_days, weekday_name};
use super::error::ScheduleError;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// Days on which class can meet: the start date, then every following
/// class day that isn't marked unavailable.
#[derive(Debug, Clone)]
pub struct AvailableDates {
    next: Option<NaiveDate>,
    class_days: Vec<Weekday>,
    unavailable: HashSet<NaiveDate>,
}

impl AvailableDates {
    pub fn new(
        start: NaiveDate,
        class_days: &[Weekday],
        unavailable: &[NaiveDate],
    ) -> Result<Self, ScheduleError> {
        if class_days.is_empty() {
            return Err(ScheduleError::NoClassDays);
        }

        log::debug!("Class days: {}", format_class_days(class_days));
        log::debug!("Unavailable dates: {unavailable:?}");

        if !class_days.contains(&start.weekday()) {
            log::warn!(
                "Start date {start} is a {}, which is not a class day ({})",
                weekday_name(start.weekday()),
                format_class_days(class_days)
            );
        }

        Ok(Self {
            next: Some(start),
            class_days: class_days.to_vec(),
            unavailable: unavailable.iter().copied().collect(),
        })
    }

    fn is_available(&self, date: NaiveDate) -> bool {
        self.class_days.contains(&date.weekday()) && !self.unavailable.contains(&date)
    }

    fn following(&self, date: NaiveDate) -> Option<NaiveDate> {
        let mut day = date.succ_opt()?;
        while !self.is_available(day) {
            log::debug!("Unavailable: {day}");
            day = day.succ_opt()?;
        }
        Some(day)
    }
}

impl Iterator for AvailableDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        log::debug!("Available: {current} ({})", weekday_name(current.weekday()));
        self.next = self.following(current);
        Some(current)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledClass {
    pub date: NaiveDate,
    pub title: String,
}

/// Pair each class, in order, with the next available date.
pub fn build_schedule<S: AsRef<str>>(
    classes: &[S],
    dates: AvailableDates,
) -> Result<Vec<ScheduledClass>, ScheduleError> {
    if classes.is_empty() {
        return Err(ScheduleError::NoClasses);
    }

    Ok(classes
        .iter()
        .zip(dates)
        .map(|(title, date)| ScheduledClass {
            date,
            title: title.as_ref().to_string(),
        })
        .collect())
}
