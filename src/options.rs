use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory names pruned from traversal entirely.
pub const IGNORE_DIRS: &[&str] = &["node_modules", ".git", ".venv"];

/// File names excluded from the tree and the report body.
pub const IGNORE_FILES: &[&str] = &["package.json", "package-lock.json", "codebase_report.txt"];

/// Default name of the generated report file.
pub const DEFAULT_OUTPUT_FILE: &str = "codebase_report.txt";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportOptions {
    pub root: PathBuf,
    pub output_file: String,
}
impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}
#[derive(Debug, Default)]
pub struct ReportBuilder {
    options: ReportOptions,
}
impl ReportBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ReportOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn output_file(mut self, name: impl Into<String>) -> Self {
        self.options.output_file = name.into();
        self
    }
    pub fn build(self) -> ReportOptions {
        self.options
    }
}
