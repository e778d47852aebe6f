use codereport::{DEFAULT_OUTPUT_FILE, ReportBuilder, generate_report};
use std::fs;
use tempfile::tempdir;

#[test]
fn integration_full_flow() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("main.rs"), "fn main() {}").unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(dir.path().join("src/lib.rs"), "pub fn test() {}").unwrap();
    let options = ReportBuilder::new(dir.path()).build();

    let path = generate_report(&options).unwrap();
    assert_eq!(path, dir.path().join(DEFAULT_OUTPUT_FILE));

    let report = fs::read_to_string(&path).unwrap();
    assert!(report.contains("|   +-- main.rs\n"));
    assert!(report.contains("|  +-- src\n"));
    assert!(report.contains("main.rs:\n"));
    assert!(report.contains("fn main() {}"));
    assert!(report.contains("src/lib.rs:\n"));
    assert!(report.contains("pub fn test() {}"));
    assert!(report.contains(&"=".repeat(77)));
}

#[test]
fn integration_rerun_overwrites_and_excludes_report() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "alpha").unwrap();
    let options = ReportBuilder::new(dir.path()).build();

    let path = generate_report(&options).unwrap();
    let first = fs::read_to_string(&path).unwrap();
    generate_report(&options).unwrap();
    let second = fs::read_to_string(&path).unwrap();

    // overwritten, not appended, and the previous report is never picked up
    assert_eq!(first, second);
    assert_eq!(second.matches("a.txt:\n").count(), 1);
    assert!(!second.contains(DEFAULT_OUTPUT_FILE));
}

#[test]
fn integration_custom_output_name_excluded() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "alpha").unwrap();
    let options = ReportBuilder::new(dir.path())
        .output_file("snapshot.txt")
        .build();

    let path = generate_report(&options).unwrap();
    assert_eq!(path, dir.path().join("snapshot.txt"));
    generate_report(&options).unwrap();

    let report = fs::read_to_string(&path).unwrap();
    assert!(!report.contains("snapshot.txt"));
    assert!(report.contains("a.txt:\n"));
}

#[test]
fn integration_output_name_with_glob_metacharacters() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("report1.txt"), "one").unwrap();
    let options = ReportBuilder::new(dir.path())
        .output_file("report[1].txt")
        .build();

    // the bracketed name is taken literally, not as a character class
    let path = generate_report(&options).unwrap();
    assert_eq!(path, dir.path().join("report[1].txt"));
    generate_report(&options).unwrap();

    let report = fs::read_to_string(&path).unwrap();
    assert!(report.contains("report1.txt:\n"));
    assert!(!report.contains("report[1].txt"));
}

#[test]
fn integration_content_verbatim() {
    let dir = tempdir().unwrap();
    let content = "line one\n\tline two\nno trailing newline";
    fs::write(dir.path().join("exact.txt"), content).unwrap();
    let options = ReportBuilder::new(dir.path()).build();

    let path = generate_report(&options).unwrap();
    let report = fs::read_to_string(&path).unwrap();
    let separator = "=".repeat(77);
    let expected = format!("exact.txt:\n{}\n{}\n{}\n\n", separator, content, separator);
    assert!(report.contains(&expected));
}
