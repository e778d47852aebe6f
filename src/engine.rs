use crate::error::ReportError;
use crate::options::{IGNORE_DIRS, IGNORE_FILES, ReportOptions};
use crate::output::write_report_to_file;
use crate::tree::build_tree_from_entries;
use crate::types::{FileSection, Report};
use ignore::WalkBuilder;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;

/// Placeholder written in place of content that is not valid UTF-8.
pub const NOT_READABLE: &str = "NOT READABLE";

struct Walker {
    inner: ignore::Walk,
}
impl Walker {
    fn new(root: &Path, options: &ReportOptions) -> Result<Self, ReportError> {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(false)
            .ignore(false)
            .parents(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false);
        let dir_matcher = build_name_set(IGNORE_DIRS.iter().copied())?;
        let mut file_names: Vec<&str> = IGNORE_FILES.to_vec();
        if !file_names.contains(&options.output_file.as_str()) {
            file_names.push(options.output_file.as_str());
        }
        let own_name = env::current_exe()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()));
        if let Some(name) = own_name.as_deref() {
            if !file_names.contains(&name) {
                file_names.push(name);
            }
        }
        let file_matcher = build_name_set(file_names.into_iter())?;
        builder.filter_entry(move |entry| {
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                !dir_matcher.is_match(entry.path())
            } else {
                !file_matcher.is_match(entry.path())
            }
        });
        Ok(Self {
            inner: builder.build(),
        })
    }
    fn into_iter(self) -> impl Iterator<Item = Result<PathBuf, ReportError>> {
        self.inner.filter_map(|result| match result {
            Ok(entry) => Some(Ok(entry.path().to_path_buf())),
            Err(e) => Some(Err(ReportError::Walk(e.to_string()))),
        })
    }
    fn collect_entries(self) -> Result<Vec<PathBuf>, ReportError> {
        self.into_iter().collect()
    }
}

/// Builds a matcher that hits a path whose final component equals any of the
/// given names, at any depth. Names are matched literally; glob
/// metacharacters in an output-file or executable name carry no meaning.
fn build_name_set<'a>(
    names: impl Iterator<Item = &'a str>,
) -> Result<globset::GlobSet, ReportError> {
    let mut glob_builder = globset::GlobSetBuilder::new();
    for name in names {
        let glob = globset::Glob::new(&format!("**/{}", globset::escape(name))).map_err(|e| {
            ReportError::Walk(format!("Invalid ignore name '{}': {}", name, e))
        })?;
        glob_builder.add(glob);
    }
    glob_builder
        .build()
        .map_err(|e| ReportError::Walk(format!("Failed to build glob set: {}", e)))
}

fn read_file_content(path: &Path) -> Result<(String, bool), ReportError> {
    let bytes = fs::read(path).map_err(|e| ReportError::io(path, e))?;
    match String::from_utf8(bytes) {
        Ok(content) => Ok((content, true)),
        Err(_) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Not valid UTF-8, using placeholder: {}", path.display());
            Ok((NOT_READABLE.to_string(), false))
        }
    }
}

/// Walks the root directory and assembles the tree and file sections.
pub fn scan(options: &ReportOptions) -> Result<Report, ReportError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting scan with root: {}", options.root.display());
    let root = fs::canonicalize(&options.root).map_err(|e| ReportError::io(&options.root, e))?;
    let walker = Walker::new(&root, options)?;
    let all_entries = walker.collect_entries()?;
    let tree = build_tree_from_entries(&root, &all_entries)?;
    let mut file_paths: Vec<PathBuf> = all_entries.into_iter().filter(|p| p.is_file()).collect();
    file_paths.sort_by(|a, b| a.components().cmp(b.components()));
    let mut sections = Vec::with_capacity(file_paths.len());
    for path in file_paths {
        let (content, is_text) = read_file_content(&path)?;
        let relative = path.strip_prefix(&root).unwrap_or(&path).to_path_buf();
        sections.push(FileSection {
            path: relative,
            content,
            is_text,
        });
    }
    Ok(Report { tree, sections })
}

/// Scans the root directory and writes the rendered report into it,
/// truncating any previous report. Returns the path of the written file.
pub fn generate_report(options: &ReportOptions) -> Result<PathBuf, ReportError> {
    let report = scan(options)?;
    let output_path = options.root.join(&options.output_file);
    write_report_to_file(&report, &output_path)?;
    Ok(output_path)
}
