//! Keyword document enrichment.
//!
//! Input files are JSON arrays of nodes, each node carrying a `keyword` array
//! of `{ "text_span": ... }` entries. Every entry with text is resolved and
//! annotated in place:
//!
//! ```text
//! { "text_span": "Paris" }
//!   → { "text_span": "Paris", "originalKey": "Paris",
//!       "original_value": "Paris", "Wikidata_ID": "Q90" }
//! ```
//!
//! The annotated document is written under the same file name in the output
//! directory. Files that cannot be read or are not arrays are skipped; a fatal
//! resolution error stops the whole batch.

pub mod error;


pub use error::{BatchError, BatchResult};

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use crate::constants::ERROR_ID_MARKER;
use crate::service::EntityResolutionService;
use crate::transport::Transport;

const KEYWORD_FIELD: &str = "keyword";
const TEXT_SPAN_FIELD: &str = "text_span";
const ORIGINAL_KEY_FIELD: &str = "originalKey";
const ORIGINAL_VALUE_FIELD: &str = "original_value";
const IDENTIFIER_FIELD: &str = "Wikidata_ID";
const INPUT_EXTENSION: &str = "json";

/// Per-mention counts for one document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MentionTally {
    pub resolved: usize,
    pub unresolved: usize,
    /// Mentions annotated with the error marker.
    pub errored: usize,
}

impl MentionTally {
    pub fn total(&self) -> usize {
        self.resolved + self.unresolved + self.errored
    }
}

/// Summary of a [`run_batch`] invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub files_processed: usize,
    pub files_skipped: usize,
    pub resolved: usize,
    pub unresolved: usize,
    pub errored: usize,
}

impl BatchReport {
    fn absorb(&mut self, tally: MentionTally) {
        self.resolved += tally.resolved;
        self.unresolved += tally.unresolved;
        self.errored += tally.errored;
    }
}

impl std::fmt::Display for BatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "files processed={} skipped={}, mentions resolved={} unresolved={} errored={}",
            self.files_processed, self.files_skipped, self.resolved, self.unresolved, self.errored
        )
    }
}

/// Lists `*.json` files in `dir` (extension matched case-insensitively), sorted.
///
/// A missing directory yields an empty list.
pub fn discover_inputs(dir: &Path) -> BatchResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "Input directory missing");
        return Ok(Vec::new());
    }

    let io_err = |source: std::io::Error| BatchError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && has_input_extension(&path) {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

fn has_input_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(INPUT_EXTENSION))
}

/// Resolves and annotates every keyword entry of `document` in place.
///
/// Non-fatal resolution errors mark the entry with the error marker and
/// processing continues; a fatal one is returned as [`BatchError::Fatal`].
pub fn annotate_document<T: Transport>(
    document: &mut Value,
    service: &EntityResolutionService<T>,
    force_refresh: bool,
) -> BatchResult<MentionTally> {
    let Some(nodes) = document.as_array_mut() else {
        return Err(BatchError::InvalidDocument {
            reason: "top-level value is not an array".to_string(),
        });
    };

    let mut tally = MentionTally::default();
    for (index, node) in nodes.iter_mut().enumerate() {
        let Some(keywords) = node.get_mut(KEYWORD_FIELD).and_then(Value::as_array_mut) else {
            info!(node = index, "'keyword' is not an array or is missing, skipping node");
            continue;
        };
        if keywords.is_empty() {
            info!(node = index, "'keyword' array is empty, skipping node");
            continue;
        }

        for entry in keywords.iter_mut() {
            annotate_entry(entry, service, force_refresh, &mut tally)?;
        }
    }
    Ok(tally)
}

fn annotate_entry<T: Transport>(
    entry: &mut Value,
    service: &EntityResolutionService<T>,
    force_refresh: bool,
    tally: &mut MentionTally,
) -> BatchResult<()> {
    let Some(fields) = entry.as_object_mut() else {
        info!("Skipping keyword entry that is not an object");
        return Ok(());
    };

    let text = fields.get(TEXT_SPAN_FIELD).map(text_of).unwrap_or_default();
    if text.is_empty() {
        info!("Skipping entity with empty or missing 'text_span'");
        return Ok(());
    }

    fields.insert(ORIGINAL_KEY_FIELD.to_string(), Value::String(text.clone()));
    fields.insert(ORIGINAL_VALUE_FIELD.to_string(), Value::String(text.clone()));

    let identifier = match service.resolve_entity(&text, force_refresh) {
        Ok(outcome) => {
            if outcome.is_resolved() {
                tally.resolved += 1;
            } else {
                tally.unresolved += 1;
            }
            info!(mention = %text, id = outcome.entity_id(), source = %outcome.source, "Mention annotated");
            outcome.entity_id().to_string()
        }
        Err(e) if e.is_fatal() => return Err(BatchError::Fatal(e)),
        Err(e) => {
            warn!(mention = %text, error = %e, "Resolution failed, marking entry");
            tally.errored += 1;
            ERROR_ID_MARKER.to_string()
        }
    };

    fields.insert(IDENTIFIER_FIELD.to_string(), Value::String(identifier));
    Ok(())
}

/// Scalar text of a JSON value; containers and null read as empty.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Annotates every input file of `input_dir` into `output_dir`.
#[instrument(skip(service, input_dir, output_dir), fields(input = %input_dir.display(), output = %output_dir.display()))]
pub fn run_batch<T: Transport>(
    input_dir: &Path,
    output_dir: &Path,
    service: &EntityResolutionService<T>,
    force_refresh: bool,
) -> BatchResult<BatchReport> {
    fs::create_dir_all(output_dir).map_err(|source| BatchError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let inputs = discover_inputs(input_dir)?;
    if inputs.is_empty() {
        warn!("No JSON files found in input directory");
    }

    let mut report = BatchReport::default();
    for path in inputs {
        info!(file = %path.display(), "Processing file");

        let mut document = match read_document(&path) {
            Ok(document) => document,
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Skipping unreadable file");
                report.files_skipped += 1;
                continue;
            }
        };

        let tally = match annotate_document(&mut document, service, force_refresh) {
            Ok(tally) => tally,
            Err(e) if e.is_fatal() => {
                error!(file = %path.display(), error = %e, "Aborting batch");
                return Err(e);
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "Skipping file");
                report.files_skipped += 1;
                continue;
            }
        };

        let Some(name) = path.file_name() else {
            report.files_skipped += 1;
            continue;
        };
        let target = output_dir.join(name);
        if let Err(e) = write_document(&target, &document) {
            warn!(file = %target.display(), error = %e, "Failed to save annotated file");
            report.files_skipped += 1;
            continue;
        }

        report.files_processed += 1;
        report.absorb(tally);
        info!(file = %target.display(), mentions = tally.total(), "File saved");
    }

    info!(report = %report, "Batch complete");
    Ok(report)
}

fn read_document(path: &Path) -> BatchResult<Value> {
    let raw = fs::read_to_string(path).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|e| BatchError::InvalidDocument {
        reason: format!("{}: {}", path.display(), e),
    })
}

fn write_document(path: &Path, document: &Value) -> BatchResult<()> {
    let body = serde_json::to_string_pretty(document).map_err(|e| BatchError::Serialization {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    fs::write(path, body).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })
}
