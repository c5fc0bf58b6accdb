use crate::config::RcConfig;
use crate::name_list::{Directive, ImportError, NameList};
use crate::view::render_status;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Could not read \"{}\": {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Could not write \"{}\": {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error("No file name")]
    NoFileName,
}

/// An editing session over one class-name list.
///
/// Plain lines are directives; lines starting with `:` are commands.
pub struct Session {
    pub list: NameList,
    pub list_path: Option<PathBuf>,
    pub config: RcConfig,
    pub status_message: String,
    pub status_is_error: bool,
    modified: bool,
}

impl Session {
    pub fn new(config: RcConfig) -> Self {
        Self {
            list: NameList::new(),
            list_path: None,
            config,
            status_message: String::new(),
            status_is_error: false,
            modified: false,
        }
    }

    /// Open `path`, starting an empty list when the file doesn't exist yet.
    pub fn open(path: PathBuf, config: RcConfig) -> Result<Self, SessionError> {
        let mut session = Self::new(config);
        match NameList::from_file(&path) {
            Ok(list) => {
                session.status_message = format!("\"{}\" {} classes", path.display(), list.len());
                session.list = list;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                session.status_message = format!("\"{}\" [New File]", path.display());
            }
            Err(source) => return Err(SessionError::Read { path, source }),
        }
        session.list_path = Some(path);
        Ok(session)
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub(crate) fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    pub(crate) fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Handle one line of input. Returns true when the session should end.
    pub fn handle_input(&mut self, line: &str) -> bool {
        let line = line.trim_end_matches(['\n', '\r']);

        if let Some(command) = line.strip_prefix(':') {
            return self.execute_command(command);
        }

        self.handle_directive(line);
        false
    }

    fn handle_directive(&mut self, input: &str) {
        let Some(directive) = Directive::classify(input) else {
            self.set_status("");
            return;
        };

        let changed = self.list.apply(&directive);
        if changed {
            self.mark_modified();
        }

        let message = match (directive, changed) {
            (Directive::Prepend(name), _) => format!("\"{name}\" added at the top"),
            (Directive::Append(name), _) => format!("\"{name}\" added"),
            (Directive::RemoveFirst(name), true) => format!("\"{name}\" removed"),
            (Directive::RemoveFirst(name), false) => format!("\"{name}\" not in list"),
        };
        log::debug!("{message}");
        self.set_status(message);
    }

    pub fn write_to(&mut self, path: &Path) -> Result<usize, SessionError> {
        let bytes = self.list.save_as(path).map_err(|source| SessionError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        self.list_path = Some(path.to_path_buf());
        self.modified = false;
        Ok(bytes)
    }

    pub fn save(&mut self) -> Result<usize, SessionError> {
        let path = self.list_path.clone().ok_or(SessionError::NoFileName)?;
        self.write_to(&path)
    }

    /// Merge an import file into the list. The list is left as it was when
    /// the file can't be read or isn't text.
    pub fn import_file(&mut self, path: &Path) -> Result<usize, SessionError> {
        let raw = std::fs::read(path).map_err(|source| SessionError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let added = self.list.merge_import_batch(&raw)?;
        self.mark_modified();
        log::info!("Imported {added} classes from {}", path.display());
        Ok(added)
    }

    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        if !self.status_message.is_empty() {
            writeln!(output, "{}", render_status(&self.status_message, self.status_is_error))?;
        }

        let mut line = String::new();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            let quit = self.handle_input(&line);
            if !self.status_message.is_empty() {
                writeln!(output, "{}", render_status(&self.status_message, self.status_is_error))?;
            }
            if quit {
                break;
            }
        }

        Ok(())
    }
}
