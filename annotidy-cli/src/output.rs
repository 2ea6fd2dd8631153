//! Output formatting utilities for CLI commands

use is_terminal::IsTerminal;
use std::io;

use annotidy_core::OverlapReport;

/// Colorize text with ANSI escape codes (only if stdout is a terminal)
pub fn color(code: &str, text: &str) -> String {
    if io::stdout().is_terminal() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Get color code for an entity label
pub fn label_color(label: &str) -> &'static str {
    match label.to_lowercase().as_str() {
        "skill" | "coreskills" => "1;32",
        "name" | "sex" | "age" | "nationality" => "1;34",
        "education" | "speciality" | "languageskills" => "1;33",
        "workexperience" | "employment" | "workshedule" => "1;35",
        "resides" | "relocation" | "workpermit" | "businesstrips" => "1;36",
        _ => "1;37",
    }
}

/// Print one overlap report in human-readable form
pub fn print_report(report: &OverlapReport) {
    println!(
        "  {} record {}: {} [{},{}) overlaps {} [{},{})",
        color("33", "!"),
        report.record_id,
        color(label_color(&report.first.label), &report.first.label),
        report.first.start_offset,
        report.first.end_offset,
        color(label_color(&report.second.label), &report.second.label),
        report.second.start_offset,
        report.second.end_offset,
    );
    println!(
        "      \"{}\" | \"{}\"",
        report.first.excerpt, report.second.excerpt
    );
}
