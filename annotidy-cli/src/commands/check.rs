//! Check command - report overlapping spans in JSONL collections

use std::path::Path;

use clap::{Parser, ValueEnum};

use crate::output::{color, print_report};
use annotidy_core::{corpus, OverlapReport};

/// Report output format
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable colored output (default)
    #[default]
    Human,
    /// JSON array of reports
    Json,
    /// JSON lines (one report per line)
    Jsonl,
}

/// Report overlapping spans (read-only)
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// JSONL collections to check
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Report output format
    #[arg(long, default_value = "human")]
    pub format: ReportFormat,

    /// Print the summary only
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: CheckArgs) -> Result<(), String> {
    let mut all_reports: Vec<OverlapReport> = Vec::new();

    for file in &args.files {
        let reports = corpus::check_file(Path::new(file)).map_err(|e| e.to_string())?;

        if matches!(args.format, ReportFormat::Human) && !args.quiet && !reports.is_empty() {
            println!("{}:", file);
            for report in &reports {
                print_report(report);
            }
        }
        all_reports.extend(reports);
    }

    match args.format {
        ReportFormat::Human => {
            if all_reports.is_empty() {
                println!("{} no overlapping spans", color("32", "ok:"));
            } else {
                println!(
                    "{} {} overlap reports in {} file(s)",
                    color("33", "!"),
                    all_reports.len(),
                    args.files.len(),
                );
            }
        }
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&all_reports)
                .map_err(|e| format!("Failed to serialize reports: {}", e))?;
            println!("{}", json);
        }
        ReportFormat::Jsonl => {
            for report in &all_reports {
                let line = serde_json::to_string(report)
                    .map_err(|e| format!("Failed to serialize report: {}", e))?;
                println!("{}", line);
            }
        }
    }

    if all_reports.is_empty() {
        Ok(())
    } else {
        Err(format!("{} overlap reports", all_reports.len()))
    }
}
