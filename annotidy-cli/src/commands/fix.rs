//! Fix command - drop every span that participates in an overlap

use std::path::Path;

use clap::Parser;

use crate::output::color;
use annotidy_core::corpus;

/// Drop every overlapping span (rewrites in place)
#[derive(Parser, Debug)]
pub struct FixArgs {
    /// JSONL collections to fix
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Compute and report without rewriting
    #[arg(long)]
    pub dry_run: bool,

    /// Suppress per-file summaries
    #[arg(short, long)]
    pub quiet: bool,
}

pub fn run(args: FixArgs) -> Result<(), String> {
    let mut total_dropped = 0usize;

    for file in &args.files {
        let path = Path::new(file);
        let dropped = if args.dry_run {
            let mut records = corpus::load_collection(path).map_err(|e| e.to_string())?;
            corpus::resolve_collection(&mut records)
        } else {
            corpus::fix_file(path).map_err(|e| e.to_string())?
        };

        if !args.quiet {
            println!(
                "{} {}: {} overlapping spans dropped{}",
                color("32", "ok:"),
                file,
                dropped,
                if args.dry_run { " [dry-run]" } else { "" },
            );
        }
        total_dropped += dropped;
    }

    if !args.quiet && args.files.len() > 1 {
        println!(
            "{} files: {} overlapping spans dropped",
            args.files.len(),
            total_dropped,
        );
    }

    Ok(())
}
