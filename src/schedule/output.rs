use super::calendar::ScheduledClass;
use super::error::ScheduleError;
use chrono::{DateTime, Datelike, NaiveTime, TimeDelta, Utc};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Tsv,
    Ical,
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Tsv => "tsv",
            OutputFormat::Ical => "ical",
        }
    }
}

/// When each class starts and how long it runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassTimes {
    pub start: NaiveTime,
    pub duration_hours: f64,
}

impl Default for ClassTimes {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(18, 30, 0).unwrap_or(NaiveTime::MIN),
            duration_hours: 3.5,
        }
    }
}

impl ClassTimes {
    pub fn parse_start(value: &str) -> Result<NaiveTime, ScheduleError> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M")
            .map_err(|_| ScheduleError::InvalidStartTime(value.to_string()))
    }

    pub fn parse_duration(value: &str) -> Result<f64, ScheduleError> {
        match value.trim().parse::<f64>() {
            Ok(hours) if hours > 0.0 && hours <= 24.0 => Ok(hours),
            _ => Err(ScheduleError::InvalidDuration(value.to_string())),
        }
    }

    fn duration(&self) -> TimeDelta {
        TimeDelta::minutes((self.duration_hours * 60.0).round() as i64)
    }
}

/// `Y-M-D<tab>Title` entries separated by two tabs, for pasting into a
/// spreadsheet row.
pub fn render_tsv(schedule: &[ScheduledClass]) -> String {
    schedule
        .iter()
        .map(|entry| {
            format!(
                "{}-{}-{}\t{}",
                entry.date.year(),
                entry.date.month(),
                entry.date.day(),
                entry.title
            )
        })
        .collect::<Vec<_>>()
        .join("\t\t")
}

/// One VEVENT per class in floating local time.
pub fn render_ical(schedule: &[ScheduledClass], times: &ClassTimes, stamp: DateTime<Utc>) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        "PRODID:-//class-scheduler//EN".to_string(),
        "CALSCALE:GREGORIAN".to_string(),
    ];
    let stamp = stamp.format("%Y%m%dT%H%M%SZ").to_string();

    for (index, entry) in schedule.iter().enumerate() {
        let start = entry.date.and_time(times.start);
        let end = start + times.duration();

        lines.push("BEGIN:VEVENT".to_string());
        lines.push(format!(
            "UID:{}-{}@class-scheduler",
            entry.date.format("%Y%m%d"),
            index + 1
        ));
        lines.push(format!("DTSTAMP:{stamp}"));
        lines.push(format!("DTSTART:{}", start.format("%Y%m%dT%H%M%S")));
        lines.push(format!("DTEND:{}", end.format("%Y%m%dT%H%M%S")));
        lines.push(format!("SUMMARY:{}", escape_text(&entry.title)));
        lines.push("END:VEVENT".to_string());
    }

    lines.push("END:VCALENDAR".to_string());

    let mut out = lines.join("\r\n");
    out.push_str("\r\n");
    out
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(c),
        }
    }
    escaped
}
