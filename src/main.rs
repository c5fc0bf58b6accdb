mod config;
mod name_list;
mod schedule;
mod session;
mod session_commands;
mod view;

use chrono::Utc;
use clap::{Parser, Subcommand};
use config::{RcConfig, RcLoader};
use log::LevelFilter;
use name_list::NameList;
use schedule::{
    AvailableDates, ClassTimes, OutputFormat, build_schedule, parse_class_days,
    parse_date_this_year, render_ical, render_tsv, weekday_label,
};
use session::Session;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "class-scheduler",
    version,
    about = "Edit a list of class names and lay it out over class days"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Edit a class list interactively
    Edit {
        /// List file to open (created on first write)
        list: Option<PathBuf>,
    },
    /// Apply directives (<name, -name, >name, name) to a list file
    Apply {
        list: PathBuf,
        /// Use `--` before directives that start with '-'
        #[arg(required = true, allow_hyphen_values = true)]
        directives: Vec<String>,
    },
    /// Merge import files into a list file
    Import {
        list: PathBuf,
        #[arg(required = true)]
        sources: Vec<PathBuf>,
    },
    /// Print a schedule for a class list
    Schedule {
        /// First class date: yyyy/mm/dd, mm/dd/yyyy or mm/dd
        start: String,
        /// Dates on which class won't be held
        unavailable: Vec<String>,
        #[arg(long, short)]
        classes: PathBuf,
        /// Class days, e.g. tue,thu
        #[arg(long)]
        days: Option<String>,
        #[arg(long, short, value_enum)]
        format: Option<OutputFormat>,
        /// Session start time, HH:MM
        #[arg(long)]
        start_time: Option<String>,
        /// Session length in hours
        #[arg(long)]
        duration: Option<String>,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show the weekday of a date
    Weekday { date: String },
    /// Print a sample .schedulerc
    SampleRc,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse::<LevelFilter>().unwrap_or(LevelFilter::Warn);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .parse_default_env()
        .init();

    // Load RC configuration
    let mut config = RcLoader::load_config();

    match cli.command {
        Commands::Edit { list } => {
            let mut session = match list {
                Some(path) => Session::open(path, config)?,
                None => Session::new(config),
            };
            let stdin = io::stdin();
            session.run(stdin.lock(), io::stdout())?;
        }
        Commands::Apply { list, directives } => {
            let mut names = load_or_new(&list)?;
            let mut changed = 0;
            for directive in &directives {
                if names.apply_directive(directive) {
                    changed += 1;
                }
            }
            let bytes = names.save_as(&list)?;
            println!("\"{}\" {changed} changes, {bytes}B written", list.display());
        }
        Commands::Import { list, sources } => {
            let mut names = load_or_new(&list)?;
            let mut added = 0;
            for source in &sources {
                added += names.merge_import_batch(&fs::read(source)?)?;
            }
            let bytes = names.save_as(&list)?;
            println!("\"{}\" {added} classes imported, {bytes}B written", list.display());
        }
        Commands::Schedule {
            start,
            unavailable,
            classes,
            days,
            format,
            start_time,
            duration,
            output,
        } => {
            apply_overrides(&mut config, days, format, start_time, duration)?;
            let text = render_schedule(&config, &classes, &start, &unavailable)?;
            match output {
                Some(path) => fs::write(path, text)?,
                None => println!("{text}"),
            }
        }
        Commands::Weekday { date } => {
            let label = weekday_label(&date);
            if label.is_empty() {
                return Err(format!("Not a date: {date}").into());
            }
            println!("{label}");
        }
        Commands::SampleRc => {
            print!("{}", RcLoader::generate_sample_rc());
        }
    }

    Ok(())
}

fn load_or_new(path: &Path) -> io::Result<NameList> {
    match NameList::from_file(path) {
        Ok(list) => Ok(list),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(NameList::new()),
        Err(e) => Err(e),
    }
}

fn apply_overrides(
    config: &mut RcConfig,
    days: Option<String>,
    format: Option<OutputFormat>,
    start_time: Option<String>,
    duration: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(days) = days {
        config.class_days = parse_class_days(&days)?;
    }
    if let Some(format) = format {
        config.output = format;
    }
    if let Some(start_time) = start_time {
        config.start_time = ClassTimes::parse_start(&start_time)?;
    }
    if let Some(duration) = duration {
        config.duration_hours = ClassTimes::parse_duration(&duration)?;
    }
    Ok(())
}

fn render_schedule(
    config: &RcConfig,
    classes: &Path,
    start: &str,
    unavailable: &[String],
) -> Result<String, Box<dyn std::error::Error>> {
    // Class files get the same comment and section filtering as imports.
    let mut names = NameList::new();
    names.merge_import_batch(&fs::read(classes)?)?;

    let start = parse_date_this_year(start)?;
    let unavailable = unavailable
        .iter()
        .map(|value| parse_date_this_year(value))
        .collect::<Result<Vec<_>, _>>()?;

    let dates = AvailableDates::new(start, &config.class_days, &unavailable)?;
    let schedule = build_schedule(&names.names(), dates)?;
    log::info!("Scheduled {} classes", schedule.len());

    Ok(match config.output {
        OutputFormat::Tsv => render_tsv(&schedule),
        OutputFormat::Ical => render_ical(&schedule, &config.class_times(), Utc::now()),
    })
}
