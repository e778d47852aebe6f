use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A single file section of the report.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileSection {
    /// The file's path relative to the scanned root.
    pub path: PathBuf,
    /// The decoded content of the file.
    ///
    /// If the file's bytes are not valid UTF-8 this holds the literal
    /// placeholder `NOT READABLE` instead.
    pub content: String,
    /// Whether the file decoded as text.
    pub is_text: bool,
}

/// The complete result of scanning a directory.
#[derive(Debug, Serialize, Deserialize)]
pub struct Report {
    /// A visual tree representation of the directory structure.
    ///
    /// Ends with a trailing newline; one line per directory or file.
    pub tree: String,
    /// One section per non-ignored file, in tree order.
    pub sections: Vec<FileSection>,
}
