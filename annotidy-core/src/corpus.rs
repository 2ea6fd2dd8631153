//! JSONL collection IO and the cleanup pipeline.
//!
//! A collection is one JSON object per line, UTF-8, as exported by the
//! labeling tool. The mutating stages rewrite the file in place; every write
//! goes through a temporary file in the same directory and an atomic rename,
//! so a crash mid-write never leaves a truncated collection behind.
//!
//! A record that fails to parse (bad JSON, missing `text`, `entities`, or a
//! span field) aborts the whole run with the file and line in the error.
//! Partial output would desynchronize downstream consumers keyed by record
//! id, so there is deliberately no per-record skip.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::error::{Error, Result};
use crate::overlap::{detect_overlaps, OverlapReport};
use crate::record::Record;
use crate::resolve::resolve_record;
use crate::trim::{trim_record, TrimStats};

/// Load a JSONL collection fully into memory.
///
/// Blank lines are skipped; anything else must parse as a [`Record`].
pub fn load_collection(path: &Path) -> Result<Vec<Record>> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::dataset(format!("failed to read {}: {}", path.display(), e)))?;

    let mut records = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: Record = serde_json::from_str(line)
            .map_err(|e| Error::parse(format!("{}:{}: {}", path.display(), idx + 1, e)))?;
        records.push(record);
    }
    Ok(records)
}

/// Write a collection back as JSONL, atomically replacing `path`.
pub fn save_collection(path: &Path, records: &[Record]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    for record in records {
        let line = serde_json::to_string(record)
            .map_err(|e| Error::dataset(format!("failed to serialize record: {}", e)))?;
        tmp.write_all(line.as_bytes())?;
        tmp.write_all(b"\n")?;
    }
    tmp.flush()?;
    tmp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

/// Trim every record's spans. See [`crate::trim`].
pub fn trim_collection(records: &mut [Record]) -> TrimStats {
    let mut stats = TrimStats::default();
    for record in records.iter_mut() {
        stats.merge(trim_record(record));
    }
    stats
}

/// Collect overlap reports across a collection. Read-only.
#[must_use]
pub fn detect_collection(records: &[Record]) -> Vec<OverlapReport> {
    records.iter().flat_map(detect_overlaps).collect()
}

/// Drop every overlapping span in every record. Returns spans dropped.
pub fn resolve_collection(records: &mut [Record]) -> usize {
    records.iter_mut().map(resolve_record).sum()
}

/// Run the trimmer over a file, rewriting it in place.
pub fn trim_file(path: &Path) -> Result<TrimStats> {
    let mut records = load_collection(path)?;
    let stats = trim_collection(&mut records);
    save_collection(path, &records)?;
    Ok(stats)
}

/// Run the detector over a file. No mutation.
pub fn check_file(path: &Path) -> Result<Vec<OverlapReport>> {
    let records = load_collection(path)?;
    Ok(detect_collection(&records))
}

/// Run the resolver over a file, rewriting it in place.
pub fn fix_file(path: &Path) -> Result<usize> {
    let mut records = load_collection(path)?;
    let dropped = resolve_collection(&mut records);
    save_collection(path, &records)?;
    Ok(dropped)
}

/// Outcome of the full pipeline over one file.
#[derive(Debug)]
pub struct PipelineSummary {
    /// Trimming counters from the first stage.
    pub trim: TrimStats,
    /// Overlaps the detector saw between trimming and resolution.
    pub overlaps: Vec<OverlapReport>,
    /// Spans discarded by the resolver.
    pub spans_dropped: usize,
}

/// Full cleanup: trim, detect, resolve, each stage re-reading and fully
/// rewriting the file, in the order the stages depend on each other.
pub fn process_file(path: &Path) -> Result<PipelineSummary> {
    let trim = trim_file(path)?;
    let overlaps = check_file(path)?;
    let spans_dropped = fix_file(path)?;
    Ok(PipelineSummary {
        trim,
        overlaps,
        spans_dropped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RecordId, Span};
    use std::io::Write as _;

    fn write_jsonl(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_skips_blank_lines() {
        let file = write_jsonl(&[
            r#"{"id":1,"text":"a","entities":[]}"#,
            "",
            r#"{"id":2,"text":"b","entities":[]}"#,
        ]);
        let records = load_collection(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, Some(RecordId::Int(2)));
    }

    #[test]
    fn test_missing_field_aborts_with_line_number() {
        let file = write_jsonl(&[
            r#"{"id":1,"text":"ok","entities":[]}"#,
            r#"{"id":2,"entities":[]}"#,
        ]);
        let err = load_collection(file.path()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(":2:"), "unexpected error: {}", msg);
        assert!(msg.contains("text"), "unexpected error: {}", msg);
    }

    #[test]
    fn test_save_round_trips_without_ascii_escaping() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let records = vec![Record::new(
            1,
            "Опыт работы: Python",
            vec![Span::new(13, 19, "Skill")],
        )];
        save_collection(file.path(), &records).unwrap();

        let raw = fs::read_to_string(file.path()).unwrap();
        assert!(raw.contains("Опыт работы"), "non-ASCII must stay literal");
        assert_eq!(raw.lines().count(), 1);

        let loaded = load_collection(file.path()).unwrap();
        assert_eq!(loaded[0].text, records[0].text);
        assert_eq!(loaded[0].entities, records[0].entities);
    }

    #[test]
    fn test_trim_file_rewrites_in_place() {
        let file = write_jsonl(&[
            r#"{"id":1,"text":"  hello world  ","entities":[{"start_offset":0,"end_offset":15,"label":"X"}]}"#,
        ]);
        let stats = trim_file(file.path()).unwrap();
        assert_eq!(stats.chars_trimmed, 4);

        let records = load_collection(file.path()).unwrap();
        assert_eq!(records[0].entities, vec![Span::new(2, 13, "X")]);
    }

    #[test]
    fn test_fix_file_drops_conflicts() {
        let file = write_jsonl(&[
            r#"{"id":1,"text":"0123456789abcdef","entities":[{"start_offset":0,"end_offset":10,"label":"A"},{"start_offset":5,"end_offset":15,"label":"B"},{"start_offset":15,"end_offset":16,"label":"C"}]}"#,
        ]);
        let dropped = fix_file(file.path()).unwrap();
        assert_eq!(dropped, 2);

        let records = load_collection(file.path()).unwrap();
        assert_eq!(records[0].entities, vec![Span::new(15, 16, "C")]);
    }

    #[test]
    fn test_process_file_runs_all_stages() {
        let file = write_jsonl(&[
            // Span "  01234567" needs trimming; once trimmed it overlaps
            // the second span, so both are resolved away.
            r#"{"id":1,"text":"  0123456789","entities":[{"start_offset":0,"end_offset":10,"label":"A"},{"start_offset":4,"end_offset":12,"label":"B"},{"start_offset":-1,"end_offset":2,"label":"C"}]}"#,
        ]);
        let summary = process_file(file.path()).unwrap();

        assert_eq!(summary.trim.chars_trimmed, 4);
        assert!(!summary.overlaps.is_empty());
        assert_eq!(summary.spans_dropped, 2);

        let records = load_collection(file.path()).unwrap();
        let labels: Vec<&str> = records[0]
            .entities
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, vec!["C"]);
    }

    #[test]
    fn test_detector_output_ignored_by_pipeline_state() {
        // Detection between the stages must not change what resolution does.
        let line = r#"{"id":1,"text":"0123456789","entities":[{"start_offset":0,"end_offset":6,"label":"A"},{"start_offset":4,"end_offset":9,"label":"B"}]}"#;
        let with_check = write_jsonl(&[line]);
        let without_check = write_jsonl(&[line]);

        trim_file(with_check.path()).unwrap();
        let _ = check_file(with_check.path()).unwrap();
        fix_file(with_check.path()).unwrap();

        trim_file(without_check.path()).unwrap();
        fix_file(without_check.path()).unwrap();

        let a = fs::read_to_string(with_check.path()).unwrap();
        let b = fs::read_to_string(without_check.path()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_extra_fields_survive_rewrite() {
        let file = write_jsonl(&[
            r#"{"id":1,"text":" x ","entities":[{"start_offset":0,"end_offset":3,"label":"X"}],"annotator":"batch-3"}"#,
        ]);
        trim_file(file.path()).unwrap();

        let raw = fs::read_to_string(file.path()).unwrap();
        assert!(raw.contains("\"annotator\":\"batch-3\""));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = load_collection(Path::new("no/such/collection.jsonl")).unwrap_err();
        assert!(matches!(err, Error::Dataset(_)));
    }
}
