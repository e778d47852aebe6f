//! # Codereport
//!
//! `codereport` is a library for flattening a codebase into a single text
//! report: it recursively walks a directory tree, renders an indented ASCII
//! tree of its structure, and concatenates the contents of every non-ignored
//! file below it.
//!
//! A fixed set of directory names ([`IGNORE_DIRS`]) is pruned from traversal
//! and a fixed set of file names ([`IGNORE_FILES`]) is excluded from the
//! report, along with the report file itself and the running executable.
//! Files whose bytes are not valid UTF-8 get a `NOT READABLE` placeholder
//! instead of content.
//!
//! # Example
//!
//! ```no_run
//! use codereport::{ReportBuilder, generate_report};
//!
//! let options = ReportBuilder::new(".").build();
//! let path = generate_report(&options).expect("Failed to generate report");
//! println!("Report generated: {}", path.display());
//! ```

mod engine;
mod error;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{NOT_READABLE, generate_report, scan};
pub use error::ReportError;
pub use options::{
    DEFAULT_OUTPUT_FILE, IGNORE_DIRS, IGNORE_FILES, ReportBuilder, ReportOptions,
};
pub use types::{FileSection, Report};
