use regex::Regex;
use thiserror::Error;

const LINE_BREAKS: &str = r"[\r\n]+";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("There was a problem importing the file: {0}")]
    InvalidText(String),
}

/// Lines taken from an imported file, trimmed and stripped of comments
/// (`;`), section headers (`[`) and blank lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportBatch {
    lines: Vec<String>,
}

impl ImportBatch {
    pub fn parse(raw: &[u8]) -> Result<Self, ImportError> {
        let text = std::str::from_utf8(raw).map_err(|e| ImportError::InvalidText(e.to_string()))?;
        Self::from_text(text)
    }

    pub fn from_text(text: &str) -> Result<Self, ImportError> {
        let splitter =
            Regex::new(LINE_BREAKS).map_err(|e| ImportError::InvalidText(e.to_string()))?;

        let lines = splitter
            .split(text)
            .map(trim_line)
            .filter(|line| is_class_name(line))
            .map(str::to_string)
            .collect();

        Ok(Self { lines })
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// Files saved by some editors start with a byte order mark.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn is_class_name(line: &str) -> bool {
    !line.is_empty() && !line.starts_with([';', '['])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines_of(batch: &ImportBatch) -> Vec<&str> {
        batch.lines().collect()
    }

    #[test]
    fn test_splits_on_any_line_break_run() {
        let batch = ImportBatch::from_text("a\r\nb\rc\n\n\r\nd").unwrap();
        assert_eq!(lines_of(&batch), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_drops_comments_sections_and_blanks() {
        let batch = ImportBatch::from_text("[Term 1]\n; intro classes\nPrimer 1\n   \nPrimer 2\n")
            .unwrap();
        assert_eq!(lines_of(&batch), vec!["Primer 1", "Primer 2"]);
    }

    #[test]
    fn test_keeps_markers_after_first_char() {
        let batch = ImportBatch::from_text("HTML [intro]\nCSS; part 1\n").unwrap();
        assert_eq!(lines_of(&batch), vec!["HTML [intro]", "CSS; part 1"]);
    }

    #[test]
    fn test_trims_whitespace_and_bom() {
        let batch = ImportBatch::from_text("\u{feff}Primer 1\n\t Linux/Unix 1 \t\n").unwrap();
        assert_eq!(lines_of(&batch), vec!["Primer 1", "Linux/Unix 1"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let first = ImportBatch::from_text("a\n;x\n[y]\n\n  b\n").unwrap();
        let rejoined = first.lines().collect::<Vec<_>>().join("\n");
        let second = ImportBatch::from_text(&rejoined).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_gives_empty_batch() {
        let batch = ImportBatch::from_text("").unwrap();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
    }

    #[test]
    fn test_invalid_utf8_is_reported() {
        let err = ImportBatch::parse(&[0xc3, 0x28]).unwrap_err();
        assert!(matches!(err, ImportError::InvalidText(_)));
        assert!(err.to_string().starts_with("There was a problem importing the file"));
    }
}
