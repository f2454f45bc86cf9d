//! Label lookup against the knowledge-base SPARQL endpoint.
//!
//! A variant becomes an exact-match query on English labels; the JSON result
//! is reduced to candidate entity URIs by [`extract_candidates`]. Transport
//! and payload problems are absorbed here: the caller just sees fewer (or no)
//! candidates and moves on to the next ladder rung.

pub mod extract;

#[cfg(test)]
mod tests;

pub use extract::{extract_candidates, scan_value_fields};

use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::constants::{LABEL_LANGUAGE, LABEL_SERVICE_LANGUAGES};
use crate::transport::Transport;

/// Builds the label query for `label`.
///
/// `label` is escaped for a double-quoted SPARQL string literal.
pub fn build_label_query(label: &str) -> String {
    format!(
        "SELECT DISTINCT ?entity ?label WHERE {{?entity rdfs:label \"{}\"@{} . \
         SERVICE wikibase:label {{ bd:serviceParam wikibase:language \"{}\" }}}}",
        escape_literal(label),
        LABEL_LANGUAGE,
        LABEL_SERVICE_LANGUAGES
    )
}

fn escape_literal(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Issues label queries and returns candidate URIs in response order.
#[derive(Debug, Clone)]
pub struct QueryResolver<T: Transport> {
    transport: T,
    endpoint: Url,
}

impl<T: Transport> QueryResolver<T> {
    pub fn new(transport: T, endpoint: Url) -> Self {
        Self {
            transport,
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL (query text URL-encoded, JSON format requested).
    pub fn query_url(&self, variant: &str) -> String {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", &build_label_query(variant))
            .append_pair("format", "json");
        url.into()
    }

    /// Returns candidate URIs for `variant`; any failure yields an empty list.
    #[instrument(skip(self, variant), fields(variant = %variant))]
    pub fn resolve(&self, variant: &str) -> Vec<String> {
        let url = self.query_url(variant);
        debug!(url_len = url.len(), "Issuing label query");

        let payload = match self.transport.get(&url) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "Label query failed, treating as no candidates");
                return Vec::new();
            }
        };

        let candidates = extract_candidates(&payload);
        info!(candidates = candidates.len(), "Label query answered");
        candidates
    }
}
