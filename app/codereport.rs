//! Command-line interface for codereport.
//!
//! Runs on the current working directory and writes the report to a fixed
//! filename there. No operational flags: the ignore sets are static and the
//! output location is part of the contract.

use clap::Parser;
use codereport::{ReportBuilder, ReportOptions, generate_report};
use std::env;
use std::process::exit;

/// codereport — flatten a codebase into a single text report
#[derive(Parser)]
#[command(name = "codereport", version, about, long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let root = match env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    run(ReportBuilder::new(root).build());
}

fn run(options: ReportOptions) {
    match generate_report(&options) {
        Ok(path) => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            println!("Report generated: {}", name);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
