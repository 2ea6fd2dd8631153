//! Pipeline command - trim, check, fix in order
//!
//! The check stage here is informational: overlap reports are printed for
//! auditing, but the pipeline always continues to resolution and exits
//! successfully. Use the standalone `check` command to gate on conflicts.

use std::path::Path;

use clap::Parser;

use crate::output::{color, print_report};
use annotidy_core::corpus;

/// Full cleanup pipeline: trim, check, fix
#[derive(Parser, Debug)]
pub struct PipelineArgs {
    /// JSONL collections to process
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Suppress overlap reports, print per-file summaries only
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: PipelineArgs) -> Result<(), String> {
    for file in &args.files {
        log::info!("processing {}", file);
        let summary = corpus::process_file(Path::new(file)).map_err(|e| e.to_string())?;

        if !args.quiet && !summary.overlaps.is_empty() {
            println!("{}:", file);
            for report in &summary.overlaps {
                print_report(report);
            }
        }

        println!(
            "{} {}: {} spans adjusted, {} boundary chars removed, {} overlapping spans dropped",
            color("32", "ok:"),
            file,
            summary.trim.spans_adjusted,
            summary.trim.chars_trimmed,
            summary.spans_dropped,
        );
    }

    Ok(())
}
