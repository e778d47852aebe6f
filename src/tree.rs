//! Internal module for rendering a tree representation from a list of paths.

use crate::error::ReportError;
use std::path::{Path, PathBuf};

/// Renders the indented ASCII tree from a root directory and a list of entries.
///
/// The entries are expected to be paths under the root. Directories are drawn
/// as `+--` rows indented one `|  ` unit per depth level; files are nested one
/// marker deeper under their directory.
///
/// # Errors
///
/// Returns an error if the root has no final path component.
pub(crate) fn build_tree_from_entries(
    root: &Path,
    entries: &[PathBuf],
) -> Result<String, ReportError> {
    let mut sorted: Vec<_> = entries.iter().filter(|p| *p != root).collect();
    sorted.sort_by(|a, b| a.components().cmp(b.components()));

    let root_name = root
        .file_name()
        .ok_or_else(|| ReportError::InvalidPath(root.display().to_string()))?;
    let mut tree = format!("+-- {}\n", root_name.to_string_lossy());

    for entry in sorted {
        let relative = entry.strip_prefix(root).unwrap_or(entry);
        let depth = relative.components().count();
        let name = relative.file_name().unwrap().to_string_lossy();
        if entry.is_dir() {
            tree.push_str(&format!("{}+-- {}\n", "|  ".repeat(depth), name));
        } else {
            tree.push_str(&format!("{}|   +-- {}\n", "|  ".repeat(depth - 1), name));
        }
    }

    Ok(tree)
}
