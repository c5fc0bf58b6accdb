use super::error::ScheduleError;
use chrono::{Datelike, Local, NaiveDate, Weekday};
use regex::Regex;

pub const WEEKDAY_ABBREVS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// Year first, then month-first with the year last. Any non-digit separates.
const YEAR_FIRST: &str = r"^([0-9]{4})[^0-9]([0-9]{1,2})[^0-9]([0-9]{1,2})";
const YEAR_LAST: &str = r"^([0-9]{1,2})[^0-9]([0-9]{1,2})[^0-9]([0-9]{4})";

/// Parse `yyyy/mm/dd`, `mm/dd/yyyy` or `mm/dd`.
///
/// A two-part date takes `current_year`. The year is appended before the
/// month-first match is tried, so a three-part month-first date simply
/// ignores the extra year.
pub fn parse_date(value: &str, current_year: i32) -> Result<NaiveDate, ScheduleError> {
    let invalid = || ScheduleError::InvalidDateFormat(value.to_string());

    if value.chars().count() < 3 {
        return Err(invalid());
    }

    let year_first = Regex::new(YEAR_FIRST).map_err(|_| invalid())?;
    if let Some(caps) = year_first.captures(value) {
        return make_date(value, &caps[1], &caps[2], &caps[3]);
    }

    let with_year = format!("{value}/{current_year}");
    let year_last = Regex::new(YEAR_LAST).map_err(|_| invalid())?;
    if let Some(caps) = year_last.captures(&with_year) {
        return make_date(value, &caps[3], &caps[1], &caps[2]);
    }

    Err(invalid())
}

pub fn parse_date_this_year(value: &str) -> Result<NaiveDate, ScheduleError> {
    parse_date(value, Local::now().year())
}

fn make_date(value: &str, year: &str, month: &str, day: &str) -> Result<NaiveDate, ScheduleError> {
    let invalid = || ScheduleError::InvalidDateFormat(value.to_string());
    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let month = month.parse::<u32>().map_err(|_| invalid())?;
    let day = day.parse::<u32>().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| ScheduleError::NoSuchDate(value.to_string()))
}

/// Parse comma-separated weekday abbreviations such as `tue,thu`.
/// Case and order don't matter; duplicates are dropped.
pub fn parse_class_days(value: &str) -> Result<Vec<Weekday>, ScheduleError> {
    let mut days = Vec::new();
    for abbrev in value.to_lowercase().split(',') {
        let abbrev = abbrev.trim();
        let day = match abbrev {
            "mon" => Weekday::Mon,
            "tue" => Weekday::Tue,
            "wed" => Weekday::Wed,
            "thu" => Weekday::Thu,
            "fri" => Weekday::Fri,
            "sat" => Weekday::Sat,
            "sun" => Weekday::Sun,
            _ => return Err(ScheduleError::UnknownWeekday(abbrev.to_string())),
        };
        if !days.contains(&day) {
            days.push(day);
        }
    }
    Ok(days)
}

pub fn format_class_days(days: &[Weekday]) -> String {
    days.iter()
        .map(|day| WEEKDAY_ABBREVS[day.num_days_from_monday() as usize])
        .collect::<Vec<_>>()
        .join(",")
}

pub fn weekday_name(day: Weekday) -> &'static str {
    WEEKDAY_NAMES[day.num_days_from_monday() as usize]
}

/// `(Tuesday)` for a parseable date, empty otherwise.
pub fn weekday_label(value: &str) -> String {
    match parse_date_this_year(value.trim()) {
        Ok(date) => format!("({})", weekday_name(date.weekday())),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_year_first() {
        assert_eq!(parse_date("2026/10/20", 2000), Ok(ymd(2026, 10, 20)));
        assert_eq!(parse_date("2026-1-5", 2000), Ok(ymd(2026, 1, 5)));
    }

    #[test]
    fn test_parse_month_first_with_year() {
        assert_eq!(parse_date("10/20/2026", 2000), Ok(ymd(2026, 10, 20)));
        assert_eq!(parse_date("1.5.2027", 2000), Ok(ymd(2027, 1, 5)));
    }

    #[test]
    fn test_parse_month_day_uses_current_year() {
        assert_eq!(parse_date("12/25", 2026), Ok(ymd(2026, 12, 25)));
        assert_eq!(parse_date("3 7", 2025), Ok(ymd(2025, 3, 7)));
    }

    #[test]
    fn test_parse_rejects_short_and_garbage() {
        assert!(matches!(
            parse_date("12", 2026),
            Err(ScheduleError::InvalidDateFormat(_))
        ));
        assert!(matches!(
            parse_date("next tuesday", 2026),
            Err(ScheduleError::InvalidDateFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_impossible_date() {
        assert_eq!(
            parse_date("2026/02/30", 2026),
            Err(ScheduleError::NoSuchDate("2026/02/30".to_string()))
        );
        assert!(matches!(
            parse_date("13/01", 2026),
            Err(ScheduleError::NoSuchDate(_))
        ));
    }

    #[test]
    fn test_parse_class_days() {
        assert_eq!(
            parse_class_days("Tue,thu"),
            Ok(vec![Weekday::Tue, Weekday::Thu])
        );
        assert_eq!(
            parse_class_days("mon,mon,fri"),
            Ok(vec![Weekday::Mon, Weekday::Fri])
        );
    }

    #[test]
    fn test_parse_class_days_rejects_unknown() {
        assert_eq!(
            parse_class_days("mon,tues"),
            Err(ScheduleError::UnknownWeekday("tues".to_string()))
        );
        assert!(parse_class_days("").is_err());
    }

    #[test]
    fn test_format_class_days() {
        assert_eq!(format_class_days(&[Weekday::Tue, Weekday::Thu]), "tue,thu");
    }

    #[test]
    fn test_weekday_label() {
        assert_eq!(weekday_label(" 2026/10/20 "), "(Tuesday)");
        assert_eq!(weekday_label("2024/01/01"), "(Monday)");
        assert_eq!(weekday_label("whenever"), "");
        assert_eq!(weekday_label(""), "");
    }
}
