//! Trim command - repair span offsets and strip boundary whitespace

use std::path::Path;

use clap::Parser;

use crate::output::color;
use annotidy_core::{corpus, TrimStats};

/// Trim span boundaries and repair offsets (rewrites in place)
#[derive(Parser, Debug)]
pub struct TrimArgs {
    /// JSONL collections to trim
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Compute and report without rewriting
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress per-file summaries
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: TrimArgs) -> Result<(), String> {
    let mut total = TrimStats::default();

    for file in &args.files {
        let path = Path::new(file);
        let stats = if args.dry_run {
            let mut records = corpus::load_collection(path).map_err(|e| e.to_string())?;
            corpus::trim_collection(&mut records)
        } else {
            corpus::trim_file(path).map_err(|e| e.to_string())?
        };

        if !args.quiet {
            println!(
                "{} {}: {} spans adjusted ({} clamped, {} boundary chars removed){}",
                color("32", "ok:"),
                file,
                stats.spans_adjusted,
                stats.spans_clamped,
                stats.chars_trimmed,
                if args.dry_run { " [dry-run]" } else { "" },
            );
        }
        total.merge(stats);
    }

    if !args.quiet && args.files.len() > 1 {
        println!(
            "{} files: {} spans adjusted, {} boundary chars removed",
            args.files.len(),
            total.spans_adjusted,
            total.chars_trimmed,
        );
    }

    Ok(())
}
