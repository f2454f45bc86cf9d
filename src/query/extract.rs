//! Candidate extraction from SPARQL JSON result payloads.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::constants::VALUE_FIELD_MARKER;

#[derive(Debug, Deserialize)]
struct SparqlResults {
    results: SparqlBindings,
}

#[derive(Debug, Deserialize)]
struct SparqlBindings {
    #[serde(default)]
    bindings: Vec<serde_json::Map<String, Value>>,
}

/// Turns a raw query payload into an ordered, de-duplicated candidate list.
///
/// Never fails. A payload that is valid JSON is read through
/// `results.bindings[*]`, taking every bound variable whose `type` is `uri`.
/// Anything else falls back to a scan over `"value"` fields that keeps only
/// URI-shaped values. Both paths preserve first-seen order.
pub fn extract_candidates(payload: &str) -> Vec<String> {
    match serde_json::from_str::<SparqlResults>(payload) {
        Ok(parsed) => from_bindings(&parsed.results.bindings),
        Err(e) => {
            if !payload.trim().is_empty() {
                warn!(error = %e, payload_len = payload.len(), "Malformed query payload, scanning for values");
            }
            scan_value_fields(payload)
        }
    }
}

fn from_bindings(bindings: &[serde_json::Map<String, Value>]) -> Vec<String> {
    let mut candidates = Vec::new();

    for binding in bindings {
        for term in binding.values() {
            let is_uri = term.get("type").and_then(Value::as_str) == Some("uri");
            if !is_uri {
                continue;
            }
            if let Some(value) = term.get("value").and_then(Value::as_str) {
                push_unique(&mut candidates, value.trim());
            }
        }
    }

    debug!(
        bindings = bindings.len(),
        candidates = candidates.len(),
        "Extracted candidates from bindings"
    );
    candidates
}

/// Boundary scan: for each `"value"` marker, read the quoted string that
/// follows (or, unquoted, up to the next `,` or `}`) and keep it when it looks
/// like an absolute URI.
pub fn scan_value_fields(payload: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    let mut rest = payload;

    while let Some(pos) = rest.find(VALUE_FIELD_MARKER) {
        rest = &rest[pos + VALUE_FIELD_MARKER.len()..];

        let Some(colon) = rest.find(':') else {
            break;
        };
        let after = rest[colon + 1..].trim_start();

        // An unterminated value is a truncated payload; drop it.
        let Some((value, consumed)) = read_scalar(after) else {
            break;
        };
        rest = &after[consumed..];

        let value = value.trim();
        if looks_like_uri(value) {
            push_unique(&mut candidates, value);
        }
    }

    candidates
}

/// Reads one scalar at the start of `text`, returning it and the bytes consumed.
///
/// Quoted values run to the closing quote (commas and braces included);
/// unquoted values end at `,` or `}`.
fn read_scalar(text: &str) -> Option<(&str, usize)> {
    if let Some(quoted) = text.strip_prefix('"') {
        let mut escaped = false;
        for (i, c) in quoted.char_indices() {
            match c {
                '\\' if !escaped => escaped = true,
                '"' if !escaped => return Some((&quoted[..i], i + 2)),
                _ => escaped = false,
            }
        }
        return None;
    }

    let end = text.find([',', '}'])?;
    Some((&text[..end], end))
}

fn looks_like_uri(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}

fn push_unique(candidates: &mut Vec<String>, value: &str) {
    if !value.is_empty() && !candidates.iter().any(|c| c == value) {
        candidates.push(value.to_string());
    }
}
