use crate::schedule::{AvailableDates, ScheduleError, ScheduledClass, build_schedule};
use crate::schedule::{parse_date_this_year, weekday_label};
use crate::session::Session;
use crate::view::{render_list, render_schedule_table};
use arboard::Clipboard;
use std::path::PathBuf;

const HELP_TEXT: &str = "\
name         append a class (same as >name)
<name        insert a class at the top
-name        remove the first matching class
:r FILE      import class names from FILE (;comments and [sections] skipped)
:paste       import class names from the clipboard
:w [FILE]    write the list
:wq          write and quit
:q / :q!     quit / quit without writing
:ls          show the list
:schedule START [SKIP...]   lay the list out from START, skipping dates
:weekday DATE               show the weekday of DATE
:set nu|nonu|days=..|time=..|duration=..|output=tsv|ical";

impl Session {
    /// Run a `:` command. Returns true when the session should end.
    pub fn execute_command(&mut self, command: &str) -> bool {
        let trimmed = command.trim();
        let (name, args) = match trimmed.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (trimmed, ""),
        };

        match name {
            "" => false,
            "q" | "quit" => self.handle_quit_command(),
            "q!" | "quit!" => true,
            "w" | "write" => {
                self.handle_write_command(args);
                false
            }
            "wq" | "x" => self.handle_write_command(args),
            "r" | "read" | "import" => {
                self.handle_import_command(args);
                false
            }
            "paste" => {
                self.handle_paste_command();
                false
            }
            "ls" | "list" => {
                self.set_status(render_list(&self.list, self.config.show_line_numbers));
                false
            }
            "schedule" => {
                self.handle_schedule_command(args);
                false
            }
            "weekday" => {
                self.handle_weekday_command(args);
                false
            }
            "set" => {
                self.handle_set_command(args);
                false
            }
            "h" | "help" => {
                self.set_status(HELP_TEXT);
                false
            }
            _ => {
                self.set_error(format!("Not a command: {trimmed}"));
                false
            }
        }
    }

    fn handle_quit_command(&mut self) -> bool {
        if self.is_modified() {
            self.set_error("No write since last change (add ! to override)");
            false
        } else {
            true
        }
    }

    /// Returns whether the write succeeded.
    fn handle_write_command(&mut self, args: &str) -> bool {
        let result = if args.is_empty() {
            self.save()
        } else {
            self.write_to(&PathBuf::from(args))
        };

        match result {
            Ok(bytes) => {
                let filename = self
                    .list_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.set_status(format!("\"{filename}\" {bytes}B written"));
                true
            }
            Err(e) => {
                self.set_error(format!("Error: {e}"));
                false
            }
        }
    }

    fn handle_import_command(&mut self, args: &str) {
        if args.is_empty() {
            self.set_error("Error: No filename specified");
            return;
        }

        match self.import_file(&PathBuf::from(args)) {
            Ok(added) => self.set_status(format!("{added} classes imported from \"{args}\"")),
            Err(e) => self.set_error(format!("Error: {e}")),
        }
    }

    pub fn handle_paste_command(&mut self) {
        let clipboard_text = match Clipboard::new().and_then(|mut c| c.get_text()) {
            Ok(text) => text,
            Err(e) => {
                self.set_error(format!("Error: Could not access clipboard: {e}"));
                return;
            }
        };

        if clipboard_text.trim().is_empty() {
            self.set_status("Nothing to paste");
            return;
        }

        match self.list.merge_import_batch(clipboard_text.as_bytes()) {
            Ok(added) => {
                self.mark_modified();
                self.set_status(format!("{added} classes pasted"));
            }
            Err(e) => self.set_error(format!("Error: {e}")),
        }
    }

    fn handle_schedule_command(&mut self, args: &str) {
        let mut dates = args.split_whitespace();
        let Some(start) = dates.next() else {
            self.set_error("Error: No start date specified");
            return;
        };
        let unavailable: Vec<&str> = dates.collect();

        match self.schedule(start, &unavailable) {
            Ok(schedule) => self.set_status(render_schedule_table(&schedule)),
            Err(e) => self.set_error(format!("Error: {e}")),
        }
    }

    /// Lay the current list out over the configured class days.
    pub fn schedule(
        &self,
        start: &str,
        unavailable: &[&str],
    ) -> Result<Vec<ScheduledClass>, ScheduleError> {
        let start = parse_date_this_year(start)?;
        let unavailable = unavailable
            .iter()
            .map(|value| parse_date_this_year(value))
            .collect::<Result<Vec<_>, _>>()?;

        let dates = AvailableDates::new(start, &self.config.class_days, &unavailable)?;
        build_schedule(&self.list.names(), dates)
    }

    fn handle_weekday_command(&mut self, args: &str) {
        let label = weekday_label(args);
        if label.is_empty() {
            self.set_error(format!("Not a date: {args}"));
        } else {
            self.set_status(format!("{args} {label}"));
        }
    }

    fn handle_set_command(&mut self, args: &str) {
        let result = match args {
            "nu" | "number" => self.config.set("line_numbers", "true"),
            "nonu" | "nonumber" => self.config.set("line_numbers", "false"),
            _ => match args.split_once('=') {
                Some((key, value)) => self.config.set(key.trim(), value.trim()),
                None => Err(format!("Unknown option: {args}")),
            },
        };

        match result {
            Ok(msg) => self.set_status(msg),
            Err(msg) => self.set_error(msg),
        }
    }
}
