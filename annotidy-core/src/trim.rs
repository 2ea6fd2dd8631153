//! Span boundary cleanup: offset repair and whitespace trimming.
//!
//! The upstream annotator is imperfect: spans arrive with offsets outside the
//! text, inverted intervals, and boundary whitespace ("  Python " labeled as a
//! skill). Trimming repairs all of that without ever rejecting a span:
//!
//! 1. Clamp both offsets into `[0, char_len]`; collapse an inverted interval
//!    to the empty interval at its clamped start.
//! 2. Advance the start over leading whitespace, retreat the end over
//!    trailing whitespace, never crossing the interior.
//!
//! A non-empty trimmed span starts and ends on non-whitespace; a
//! whitespace-only span collapses to an empty interval. Trimming only ever
//! shrinks a valid span and is idempotent.

use crate::record::{Record, Span};

/// Counters from one trimming pass, for annotation-quality auditing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrimStats {
    /// Spans whose offsets changed in any way.
    pub spans_adjusted: usize,
    /// Spans whose raw offsets were out of range or inverted.
    pub spans_clamped: usize,
    /// Boundary whitespace characters removed across all spans.
    pub chars_trimmed: usize,
}

impl TrimStats {
    /// Accumulate counters from another pass.
    pub fn merge(&mut self, other: TrimStats) {
        self.spans_adjusted += other.spans_adjusted;
        self.spans_clamped += other.spans_clamped;
        self.chars_trimmed += other.chars_trimmed;
    }

    /// True if the pass changed nothing.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.spans_adjusted == 0
    }
}

/// Trim every span against `text`, returning the repaired spans.
///
/// Pure per-record function: span order and count are preserved, labels pass
/// through unchanged, `text` is untouched.
#[must_use]
pub fn trim_spans(text: &str, spans: &[Span]) -> (Vec<Span>, TrimStats) {
    let chars: Vec<char> = text.chars().collect();
    let mut stats = TrimStats::default();
    let trimmed = spans
        .iter()
        .map(|span| trim_span(&chars, span, &mut stats))
        .collect();
    (trimmed, stats)
}

/// Trim a record's spans in place (the `entities` list is replaced
/// wholesale).
pub fn trim_record(record: &mut Record) -> TrimStats {
    let (entities, stats) = trim_spans(&record.text, &record.entities);
    if !stats.is_noop() {
        log::debug!(
            "record {}: adjusted {} of {} spans ({} boundary chars removed)",
            record.id_display(),
            stats.spans_adjusted,
            entities.len(),
            stats.chars_trimmed,
        );
    }
    record.entities = entities;
    stats
}

fn trim_span(chars: &[char], span: &Span, stats: &mut TrimStats) -> Span {
    let len = chars.len() as i64;
    let mut start = span.start_offset.clamp(0, len);
    let mut end = span.end_offset.clamp(0, len).max(start);
    if start != span.start_offset || end != span.end_offset {
        stats.spans_clamped += 1;
    }

    let mut removed = 0usize;
    while start < end && chars[start as usize].is_whitespace() {
        start += 1;
        removed += 1;
    }
    while end > start && chars[end as usize - 1].is_whitespace() {
        end -= 1;
        removed += 1;
    }

    if removed > 0 {
        stats.chars_trimmed += removed;
        log::debug!(
            "'{}' span [{},{}) trimmed to [{},{})",
            span.label,
            span.start_offset,
            span.end_offset,
            start,
            end,
        );
    }
    if start != span.start_offset || end != span.end_offset {
        stats.spans_adjusted += 1;
    }

    Span::new(start, end, span.label.clone())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_span() -> impl Strategy<Value = Span> {
        (-30i64..90, -30i64..90, "[A-Za-z]{1,8}")
            .prop_map(|(start, end, label)| Span::new(start, end, label))
    }

    proptest! {
        /// Offsets always land inside the text after trimming.
        #[test]
        fn offsets_clamped_into_bounds(
            text in ".{0,50}",
            spans in proptest::collection::vec(arb_span(), 0..8),
        ) {
            let len = text.chars().count() as i64;
            let (trimmed, _) = trim_spans(&text, &spans);
            for span in &trimmed {
                prop_assert!(0 <= span.start_offset);
                prop_assert!(span.start_offset <= span.end_offset);
                prop_assert!(span.end_offset <= len);
            }
        }

        /// Trimming twice equals trimming once, for arbitrary raw input.
        #[test]
        fn trimming_is_idempotent(
            text in ".{0,50}",
            spans in proptest::collection::vec(arb_span(), 0..8),
        ) {
            let (once, _) = trim_spans(&text, &spans);
            let (twice, stats) = trim_spans(&text, &once);
            prop_assert_eq!(&once, &twice);
            prop_assert!(stats.is_noop());
        }

        /// A span that was already valid only ever shrinks.
        #[test]
        fn valid_spans_never_expand(
            text in ".{1,50}",
            raw in (0usize..50, 0usize..50),
        ) {
            let len = text.chars().count() as i64;
            let start = (raw.0 as i64).min(len);
            let end = start + (raw.1 as i64).min(len - start);
            let span = Span::new(start, end, "X");

            let (trimmed, _) = trim_spans(&text, std::slice::from_ref(&span));
            prop_assert!(trimmed[0].start_offset >= span.start_offset);
            prop_assert!(trimmed[0].end_offset <= span.end_offset);
        }

        /// Labels and span count survive any input.
        #[test]
        fn labels_and_count_preserved(
            text in ".{0,50}",
            spans in proptest::collection::vec(arb_span(), 0..8),
        ) {
            let (trimmed, _) = trim_spans(&text, &spans);
            prop_assert_eq!(trimmed.len(), spans.len());
            for (before, after) in spans.iter().zip(&trimmed) {
                prop_assert_eq!(&before.label, &after.label);
            }
        }
    }
}
