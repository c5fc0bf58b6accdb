/// Name list subsystem - The class-name list and the edits applied to it
///
/// This module holds the newline-delimited list of class names, the
/// single-line directives typed by the user, and the import batches merged
/// in from text files or the clipboard.

pub mod directive;
pub mod import;
pub mod list;

// Re-export main types for convenience
pub use directive::Directive;
pub use import::{ImportBatch, ImportError};
pub use list::NameList;
