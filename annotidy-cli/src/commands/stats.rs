//! Stats command - label inventory of a collection

use std::collections::BTreeMap;
use std::path::Path;

use clap::Parser;

use crate::output::{color, label_color};
use annotidy_core::corpus;

/// Collection statistics: records, spans, labels
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// JSONL collections to summarize
    #[arg(required = true)]
    pub files: Vec<String>,
}

pub fn run(args: StatsArgs) -> Result<(), String> {
    for file in &args.files {
        let records = corpus::load_collection(Path::new(file)).map_err(|e| e.to_string())?;

        let span_count: usize = records.iter().map(|r| r.entities.len()).sum();
        let empty_spans: usize = records
            .iter()
            .flat_map(|r| &r.entities)
            .filter(|s| s.is_empty())
            .count();

        // BTreeMap keeps label order stable across runs.
        let mut by_label: BTreeMap<&str, usize> = BTreeMap::new();
        for record in &records {
            for span in &record.entities {
                *by_label.entry(span.label.as_str()).or_default() += 1;
            }
        }

        println!();
        println!("{}", color("1;36", file));
        println!("  Records: {}", records.len());
        println!("  Spans: {} ({} empty)", span_count, empty_spans);
        if !by_label.is_empty() {
            println!("  Labels:");
            for (label, count) in &by_label {
                println!("    {} {}: {}", color(label_color(label), "*"), label, count);
            }
        }
    }
    println!();

    Ok(())
}
