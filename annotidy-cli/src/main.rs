//! annotidy - Annotation collection cleanup CLI
//!
//! Cleans JSONL entity-span collections exported by a labeling tool or NER
//! model before they reach training or scoring:
//!
//! - **trim**: repair offsets and strip boundary whitespace from spans
//! - **check**: report overlapping spans for human inspection
//! - **fix**: drop every span that participates in an overlap
//! - **pipeline**: all three stages in order
//!
//! # Usage
//!
//! ```bash
//! # Trim span boundaries in place
//! annotidy trim vacancies.jsonl
//!
//! # Report conflicts without touching the file
//! annotidy check vacancies.jsonl
//!
//! # Full cleanup
//! annotidy pipeline vacancies.jsonl resumes.jsonl
//!
//! # Label inventory of a cleaned collection
//! annotidy stats vacancies.jsonl
//! ```

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::generate;

mod commands;
mod output;

use output::color;

/// Annotation cleanup CLI - span trimming, overlap detection, overlap resolution
#[derive(Parser)]
#[command(name = "annotidy")]
#[command(
    author,
    version,
    about = "Annotation cleanup CLI - span trimming, overlap detection, overlap resolution",
    long_about = r#"
annotidy - entity-span cleanup for JSONL annotation collections

Collections are newline-delimited JSON records:
  {"id": 1, "text": "...", "entities": [{"start_offset": 0, "end_offset": 5, "label": "Skill"}]}

STAGES:
  • trim     - clamp out-of-range offsets, strip boundary whitespace
  • check    - report every pair of overlapping spans (read-only)
  • fix      - drop every span involved in an overlap
  • pipeline - trim, check, fix in order

EXAMPLES:
  annotidy trim vacancies.jsonl
  annotidy check --format json vacancies.jsonl
  annotidy pipeline vacancies.jsonl resumes.jsonl
"#
)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Trim span boundaries and repair offsets (rewrites in place)
    #[command(visible_alias = "t")]
    Trim(commands::trim::TrimArgs),

    /// Report overlapping spans (read-only)
    #[command(visible_alias = "c")]
    Check(commands::check::CheckArgs),

    /// Drop every overlapping span (rewrites in place)
    #[command(visible_alias = "f")]
    Fix(commands::fix::FixArgs),

    /// Full cleanup pipeline: trim, check, fix
    #[command(visible_alias = "p")]
    Pipeline(commands::pipeline::PipelineArgs),

    /// Collection statistics: records, spans, labels
    Stats(commands::stats::StatsArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result: Result<(), String> = match cli.command {
        Commands::Trim(args) => commands::trim::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Fix(args) => commands::fix::run(args),
        Commands::Pipeline(args) => commands::pipeline::run(args),
        Commands::Stats(args) => commands::stats::run(args),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "annotidy", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
