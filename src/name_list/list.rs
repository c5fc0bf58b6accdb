use super::directive::Directive;
use super::import::{ImportBatch, ImportError};
use std::fs;
use std::path::Path;

/// Ordered class names, stored in their external newline-joined form.
///
/// Edits operate on the text itself rather than on a vector of lines, so a
/// removal matches exactly what the user sees in the list, trailing line
/// break included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    text: String,
}

impl NameList {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut text = String::new();
        for name in names {
            text.push_str(name.as_ref());
            text.push('\n');
        }
        Self { text }
    }

    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = fs::read_to_string(path)?;
        let normalized = content.replace("\r\n", "\n").replace('\r', "\n");
        Ok(Self::from_text(normalized))
    }

    pub fn save_as(&self, path: &Path) -> Result<usize, std::io::Error> {
        fs::write(path, &self.text)?;
        Ok(self.text.len())
    }

    pub fn as_text(&self) -> &str {
        &self.text
    }

    pub fn names(&self) -> Vec<&str> {
        self.text.lines().collect()
    }

    pub fn len(&self) -> usize {
        self.text.lines().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Classify `input` and apply it. Returns whether the list changed.
    pub fn apply_directive(&mut self, input: &str) -> bool {
        match Directive::classify(input) {
            Some(directive) => self.apply(&directive),
            None => false,
        }
    }

    pub fn apply(&mut self, directive: &Directive<'_>) -> bool {
        match directive {
            Directive::Prepend(name) => {
                self.text = format!("{name}\n{}", self.text);
                true
            }
            Directive::RemoveFirst(name) => self.remove_first(name),
            Directive::Append(name) => {
                self.append(name);
                true
            }
        }
    }

    fn remove_first(&mut self, name: &str) -> bool {
        let needle = format!("{name}\n");
        match self.text.find(&needle) {
            Some(start) => {
                self.text.replace_range(start..start + needle.len(), "");
                true
            }
            None => false,
        }
    }

    fn append(&mut self, name: &str) {
        if !self.text.is_empty() && !self.text.ends_with('\n') {
            self.text.push('\n');
        }
        self.text.push_str(name);
        self.text.push('\n');
    }

    /// Merge an already-filtered batch below the current names.
    pub fn merge_import(&mut self, batch: &ImportBatch) -> usize {
        if batch.is_empty() {
            log::debug!("Import batch has no class names");
        }
        let mut merged = self.text.trim().to_string();
        if !merged.is_empty() {
            merged.push('\n');
        }
        for line in batch.lines() {
            merged.push_str(line);
            merged.push('\n');
        }
        self.text = merged;
        batch.len()
    }

    /// Parse raw import bytes and merge them. On failure the list is untouched.
    pub fn merge_import_batch(&mut self, raw: &[u8]) -> Result<usize, ImportError> {
        let batch = ImportBatch::parse(raw)?;
        Ok(self.merge_import(&batch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_list_is_empty() {
        let list = NameList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
        assert!(list.names().is_empty());
    }

    #[test]
    fn test_from_names_terminates_each_line() {
        let list = NameList::from_names(["x", "y"]);
        assert_eq!(list.as_text(), "x\ny\n");
        assert_eq!(list.names(), vec!["x", "y"]);
    }

    #[test]
    fn test_prepend_into_empty_list() {
        let mut list = NameList::new();
        assert!(list.apply_directive("<first"));
        assert_eq!(list.names(), vec!["first"]);
    }

    #[test]
    fn test_prepend_keeps_prior_entries() {
        let mut list = NameList::from_names(["b", "c"]);
        list.apply_directive("<a");
        assert_eq!(list.names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_remove_first_match() {
        let mut list = NameList::from_names(["x", "y"]);
        assert!(list.apply_directive("-y"));
        assert_eq!(list.names(), vec!["x"]);
        assert_eq!(list.as_text(), "x\n");
    }

    #[test]
    fn test_remove_missing_name_is_noop() {
        let mut list = NameList::from_names(["x", "y"]);
        assert!(!list.apply_directive("-z"));
        assert_eq!(list.names(), vec!["x", "y"]);
    }

    #[test]
    fn test_remove_only_first_of_duplicates() {
        let mut list = NameList::from_names(["CSS 1", "HTML 1", "CSS 1"]);
        list.apply_directive("-CSS 1");
        assert_eq!(list.names(), vec!["HTML 1", "CSS 1"]);
    }

    #[test]
    fn test_remove_ignores_last_line_without_newline() {
        let mut list = NameList::from_text("x\ny");
        assert!(!list.apply_directive("-y"));
        assert_eq!(list.as_text(), "x\ny");
    }

    #[test]
    fn test_remove_is_literal_text_search() {
        // "y\n" is found inside "xy\n"
        let mut list = NameList::from_names(["xy", "y"]);
        list.apply_directive("-y");
        assert_eq!(list.as_text(), "xy\n");
        assert_eq!(list.names(), vec!["xy"]);
    }

    #[test]
    fn test_append_with_and_without_prefix_match() {
        let base = NameList::from_names(["PHP 1", "PHP 2"]);

        let mut prefixed = base.clone();
        prefixed.apply_directive(">PHP 3");
        let mut plain = base.clone();
        plain.apply_directive("PHP 3");

        assert_eq!(prefixed, plain);
        assert_eq!(plain.names(), vec!["PHP 1", "PHP 2", "PHP 3"]);
    }

    #[test]
    fn test_append_after_unterminated_last_line() {
        let mut list = NameList::from_text("x\ny");
        list.apply_directive("z");
        assert_eq!(list.names(), vec!["x", "y", "z"]);
    }

    #[test]
    fn test_prepend_then_remove_restores_list() {
        let original = NameList::from_names(["Primer 1", "Primer 2", "Graphics 1"]);
        let mut list = original.clone();
        list.apply_directive("<Capstone 1");
        list.apply_directive("-Capstone 1");
        assert_eq!(list, original);
    }

    #[test]
    fn test_empty_directive_is_noop() {
        let mut list = NameList::from_names(["x"]);
        assert!(!list.apply_directive(""));
        assert_eq!(list.as_text(), "x\n");
    }

    #[test]
    fn test_merge_into_empty_list() {
        let mut list = NameList::new();
        let added = list
            .merge_import_batch(b"a\n;comment\n[section]\n  b  \n")
            .unwrap();
        assert_eq!(added, 2);
        assert_eq!(list.names(), vec!["a", "b"]);
        assert_eq!(list.as_text(), "a\nb\n");
    }

    #[test]
    fn test_merge_trims_existing_list_and_separates() {
        let mut list = NameList::from_text("\n  x\ny  \n\n");
        list.merge_import_batch(b"z\r\n").unwrap();
        assert_eq!(list.as_text(), "x\ny\nz\n");
    }

    #[test]
    fn test_merge_failure_leaves_list_unchanged() {
        let mut list = NameList::from_text("x\ny\n");
        let result = list.merge_import_batch(&[b'a', 0xff, 0xfe, b'\n']);
        assert!(result.is_err());
        assert_eq!(list.as_text(), "x\ny\n");
    }

    #[test]
    fn test_merge_never_keeps_comment_or_section_lines() {
        let mut list = NameList::from_names(["keep"]);
        list.merge_import_batch(b"[Week 1]\n;skip me\n  ;indented comment\nJavaScript 1\n")
            .unwrap();
        for name in list.names() {
            assert!(!name.starts_with(';'));
            assert!(!name.starts_with('['));
        }
        assert_eq!(list.names(), vec!["keep", "JavaScript 1"]);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("classes.txt");

        let list = NameList::from_names(["MySQL 1", "MySQL 2"]);
        let bytes = list.save_as(&path).unwrap();
        assert_eq!(bytes, "MySQL 1\nMySQL 2\n".len());

        let reloaded = NameList::from_file(&path).unwrap();
        assert_eq!(reloaded, list);
    }

    #[test]
    fn test_from_file_normalizes_line_endings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dos.txt");
        std::fs::write(&path, "a\r\nb\r\n").unwrap();

        let list = NameList::from_file(&path).unwrap();
        assert_eq!(list.as_text(), "a\nb\n");
    }
}
