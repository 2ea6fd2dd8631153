//! Overlap resolution: drop every span that conflicts with another.
//!
//! A span is kept iff it overlaps zero other spans in its record. There is no
//! tie-break by length, label, or confidence: every participant in a
//! conflicting cluster is discarded. Precision over recall for annotator
//! output that cannot be trusted to pick the right variant itself.
//!
//! The implementation is a sorted-interval sweep, but its output is exactly
//! the all-pairs rule above, not a maximum-independent-set selection.

use crate::record::{Record, Span};

/// For each span, whether it overlaps at least one other span in the list.
///
/// Flags are positional: `flags[i]` corresponds to `spans[i]`.
#[must_use]
pub fn overlap_flags(spans: &[Span]) -> Vec<bool> {
    let mut flagged = vec![false; spans.len()];

    let mut order: Vec<usize> = (0..spans.len()).collect();
    order.sort_by_key(|&i| (spans[i].start_offset, spans[i].end_offset));

    // Sweep in start order. A span stays active while a later span could
    // still reach back into it; once its end precedes the current start it
    // can never conflict again.
    let mut active: Vec<usize> = Vec::new();
    for &i in &order {
        let current = &spans[i];
        active.retain(|&j| spans[j].end_offset > current.start_offset);
        for &j in &active {
            if spans[j].start_offset < current.end_offset {
                flagged[j] = true;
                flagged[i] = true;
            }
        }
        active.push(i);
    }
    flagged
}

/// Return the spans that overlap nothing, in their original relative order.
#[must_use]
pub fn resolve_spans(spans: &[Span]) -> Vec<Span> {
    let flagged = overlap_flags(spans);
    spans
        .iter()
        .zip(&flagged)
        .filter(|(_, &conflicting)| !conflicting)
        .map(|(span, _)| span.clone())
        .collect()
}

/// Replace a record's spans with the conflict-free subset.
///
/// Returns how many spans were dropped.
pub fn resolve_record(record: &mut Record) -> usize {
    let kept = resolve_spans(&record.entities);
    let dropped = record.entities.len() - kept.len();
    if dropped > 0 {
        log::debug!(
            "record {}: dropped {} overlapping spans, kept {}",
            record.id_display(),
            dropped,
            kept.len(),
        );
    }
    record.entities = kept;
    dropped
}
