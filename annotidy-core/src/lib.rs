//! # annotidy-core
//!
//! Entity-span cleanup for JSONL annotation collections.
//!
//! An upstream annotator (an NER model or a human labeling tool) produces
//! records of `{id, text, entities}` where each entity is a labeled
//! character-offset span. Annotators are imperfect: offsets run past the
//! text, spans carry boundary whitespace, and competing labels overlap. This
//! crate repairs what can be repaired and discards what cannot:
//!
//! - **Trimmer** ([`trim`]): clamps offsets into the text and strips boundary
//!   whitespace, never rejecting a span.
//! - **Detector** ([`overlap`]): reports every pair of overlapping spans for
//!   human inspection; purely observational.
//! - **Resolver** ([`resolve`]): drops every span that participates in an
//!   overlap, keeping only conflict-free spans.
//!
//! The full pipeline ([`corpus::process_file`]) runs the stages in that
//! order, each fully reading and atomically rewriting the collection file.
//!
//! ## Example
//!
//! ```
//! use annotidy_core::{trim, resolve, Span};
//!
//! let text = "  Rust developer  ";
//! let (spans, stats) = trim::trim_spans(text, &[Span::new(0, 18, "Skill")]);
//! assert_eq!((spans[0].start_offset, spans[0].end_offset), (2, 16));
//! assert_eq!(stats.chars_trimmed, 4);
//!
//! let kept = resolve::resolve_spans(&[
//!     Span::new(0, 10, "Skill"),
//!     Span::new(5, 15, "Age"),
//!     Span::new(20, 25, "Education"),
//! ]);
//! assert_eq!(kept, vec![Span::new(20, 25, "Education")]);
//! ```
//!
//! Spans are only ever shrunk or deleted here, never created, grown, or
//! relabeled; record text is never mutated.

#![warn(missing_docs)]

pub mod corpus;
pub mod error;
pub mod overlap;
pub mod record;
pub mod resolve;
pub mod trim;

// Re-exports for convenience
pub use corpus::{
    check_file, detect_collection, fix_file, load_collection, process_file, resolve_collection,
    save_collection, trim_collection, trim_file, PipelineSummary,
};
pub use error::{Error, Result};
pub use overlap::{detect_overlaps, OverlapReport, ReportedSpan};
pub use record::{Record, RecordId, Span};
pub use resolve::{overlap_flags, resolve_record, resolve_spans};
pub use trim::{trim_record, trim_spans, TrimStats};
