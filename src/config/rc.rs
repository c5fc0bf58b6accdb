use crate::schedule::dates::{format_class_days, parse_class_days};
use crate::schedule::{ClassTimes, OutputFormat};
use chrono::{NaiveTime, Weekday};
use clap::ValueEnum;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const RC_FILE_NAME: &str = ".schedulerc";

#[derive(Debug, Clone, PartialEq)]
pub struct RcConfig {
    pub class_days: Vec<Weekday>,
    pub start_time: NaiveTime,
    pub duration_hours: f64,
    pub output: OutputFormat,
    pub show_line_numbers: bool,
}

impl Default for RcConfig {
    fn default() -> Self {
        let times = ClassTimes::default();
        Self {
            class_days: vec![Weekday::Tue, Weekday::Thu],
            start_time: times.start,
            duration_hours: times.duration_hours,
            output: OutputFormat::Ical,
            show_line_numbers: false,
        }
    }
}

impl RcConfig {
    pub fn class_times(&self) -> ClassTimes {
        ClassTimes {
            start: self.start_time,
            duration_hours: self.duration_hours,
        }
    }

    /// Apply one `key=value` setting. Returns a description of the change,
    /// or an error message when the key or value is rejected.
    pub fn set(&mut self, key: &str, value: &str) -> Result<String, String> {
        match key {
            "class_days" | "days" => {
                self.class_days = parse_class_days(value).map_err(|e| e.to_string())?;
                Ok(format!("Class days set to {}", format_class_days(&self.class_days)))
            }
            "start_time" | "time" => {
                self.start_time = ClassTimes::parse_start(value).map_err(|e| e.to_string())?;
                Ok(format!("Start time set to {}", self.start_time.format("%H:%M")))
            }
            "duration" => {
                self.duration_hours =
                    ClassTimes::parse_duration(value).map_err(|e| e.to_string())?;
                Ok(format!("Duration set to {} hours", self.duration_hours))
            }
            "output" | "format" => {
                self.output = OutputFormat::from_str(value, true)
                    .map_err(|_| format!("Unknown output format '{value}' (tsv or ical)"))?;
                Ok(format!("Output format set to {}", self.output.name()))
            }
            "line_numbers" | "number" => {
                self.show_line_numbers = value == "true" || value == "1" || value == "yes";
                Ok(format!(
                    "Line numbers {}",
                    if self.show_line_numbers { "enabled" } else { "disabled" }
                ))
            }
            _ => Err(format!("Unknown setting '{key}'")),
        }
    }
}

pub struct RcLoader;

impl RcLoader {
    /// Get the path to the RC file
    /// Looks for .schedulerc in:
    /// 1. Current directory
    /// 2. Home directory (~/.schedulerc)
    pub fn get_rc_path() -> Option<PathBuf> {
        let current_rc = Path::new(RC_FILE_NAME);
        if current_rc.exists() {
            return Some(current_rc.to_path_buf());
        }

        if let Ok(home) = env::var("HOME") {
            let home_rc = Path::new(&home).join(RC_FILE_NAME);
            if home_rc.exists() {
                return Some(home_rc);
            }
        }

        None
    }

    /// Load and parse the RC file, falling back to defaults.
    pub fn load_config() -> RcConfig {
        match Self::get_rc_path() {
            Some(rc_path) => Self::load_from(&rc_path),
            None => RcConfig::default(),
        }
    }

    pub fn load_from(rc_path: &Path) -> RcConfig {
        let mut config = RcConfig::default();

        match fs::read_to_string(rc_path) {
            Ok(content) => {
                log::debug!("Loading configuration from {}", rc_path.display());
                Self::parse_config_content(&content, &mut config);
            }
            Err(e) => {
                log::warn!("Could not read {}: {e}", rc_path.display());
            }
        }

        config
    }

    fn parse_config_content(content: &str, config: &mut RcConfig) {
        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            Self::parse_config_line(line, config);
        }
    }

    fn parse_config_line(line: &str, config: &mut RcConfig) {
        // Remove inline comments
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        let setting = line.strip_prefix("set ").unwrap_or(line).trim();

        match setting {
            "nu" | "number" => config.show_line_numbers = true,
            "nonu" | "nonumber" => config.show_line_numbers = false,
            _ => match setting.split_once('=') {
                Some((key, value)) => {
                    if let Err(msg) = config.set(key.trim(), value.trim()) {
                        log::warn!("Ignoring config line '{line}': {msg}");
                    }
                }
                None => log::warn!("Ignoring config line '{line}'"),
            },
        }
    }

    /// Generate a sample RC file content
    pub fn generate_sample_rc() -> String {
        r#"# class-scheduler configuration file (.schedulerc)
# Lines starting with # or " are comments

# Days of the week class meets (mon, tue, wed, thu, fri, sat, sun)
set days=tue,thu

# Session start time (HH:MM) and length in hours
set time=18:30
set duration=3.5

# Schedule output: tsv or ical
set output=ical

# Number the class list in the editing session
set nonu

# Alternative key=value syntax:
# class_days=mon,wed
# start_time=09:00
# duration=2
# format=tsv
# line_numbers=true
"#
        .to_string()
    }
}
