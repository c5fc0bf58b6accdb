use crate::name_list::NameList;
use crate::schedule::ScheduledClass;
use crate::schedule::dates::weekday_name;
use chrono::Datelike;
use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

pub fn render_list(list: &NameList, show_line_numbers: bool) -> String {
    if list.is_empty() {
        return "(empty list)".to_string();
    }

    let names = list.names();

    let number_width = names.len().to_string().len();
    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            if show_line_numbers {
                format!("{:>number_width$} {name}", index + 1)
            } else {
                name.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Aligned table of title, date and weekday. Titles are padded by display
/// width so wide characters line up.
pub fn render_schedule_table(schedule: &[ScheduledClass]) -> String {
    let title_width = schedule
        .iter()
        .map(|entry| entry.title.width())
        .max()
        .unwrap_or(0);

    schedule
        .iter()
        .map(|entry| {
            let padding = " ".repeat(title_width - entry.title.width());
            format!(
                "{}{padding}  {}  {}",
                entry.title,
                entry.date.format("%Y-%m-%d"),
                weekday_name(entry.date.weekday())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_status(message: &str, is_error: bool) -> String {
    if is_error {
        message.to_string().red().to_string()
    } else {
        message.to_string().dim().to_string()
    }
}
