//! Overlap detection: diagnostic reports for conflicting spans.
//!
//! Detection is purely observational. It never mutates a record, and the
//! resolver does not consume its output; skipping this stage changes nothing
//! downstream. Reports exist so a human can inspect what the annotator got
//! wrong before the resolver throws the conflicting spans away.

use serde::Serialize;

use crate::record::{Record, Span};

/// One side of a reported conflict.
#[derive(Debug, Clone, Serialize)]
pub struct ReportedSpan {
    /// The span's label.
    pub label: String,
    /// Start offset (characters).
    pub start_offset: i64,
    /// End offset (characters).
    pub end_offset: i64,
    /// The text the span covers, offsets clamped if still raw.
    pub excerpt: String,
}

impl ReportedSpan {
    fn from_span(span: &Span, text: &str) -> Self {
        Self {
            label: span.label.clone(),
            start_offset: span.start_offset,
            end_offset: span.end_offset,
            excerpt: span.excerpt(text),
        }
    }
}

/// A single detected overlap between two spans of one record.
///
/// Reports are directional: a conflicting pair produces one report per
/// ordering, so each side of the conflict appears once in the `first`
/// position. Consumers that want unordered pairs can halve the list;
/// resolution is independent of either view.
#[derive(Debug, Clone, Serialize)]
pub struct OverlapReport {
    /// Identifier of the record the conflict occurs in.
    pub record_id: String,
    /// The span the conflict was detected from.
    pub first: ReportedSpan,
    /// The span it collides with.
    pub second: ReportedSpan,
}

/// Find every ordered pair of distinct overlapping spans in a record.
///
/// Read-only; the record is left untouched.
#[must_use]
pub fn detect_overlaps(record: &Record) -> Vec<OverlapReport> {
    let mut reports = Vec::new();
    for (i, first) in record.entities.iter().enumerate() {
        for (j, second) in record.entities.iter().enumerate() {
            if i != j && first.overlaps(second) {
                reports.push(OverlapReport {
                    record_id: record.id_display(),
                    first: ReportedSpan::from_span(first, &record.text),
                    second: ReportedSpan::from_span(second, &record.text),
                });
            }
        }
    }
    reports
}
