//! Cross-cutting, shared constants.
//!
//! The marker strings mirror what the knowledge base currently renders. If the
//! page markup changes upstream, this is the single place to update.

/// Public SPARQL endpoint of the knowledge base.
pub const DEFAULT_SPARQL_ENDPOINT: &str = "https://query.wikidata.org/sparql";

/// Directory used for persisted resolution records when none is configured.
pub const DEFAULT_CACHE_DIR: &str = "./wikidatacache";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_REDIRECTS: usize = 10;
pub const DEFAULT_MEMORY_CAPACITY: u64 = 10_000;

/// Language tag the label query matches against.
pub const LABEL_LANGUAGE: &str = "en";

/// Language hint handed to the label service for the `?label` projection.
pub const LABEL_SERVICE_LANGUAGES: &str = "[AUTO_LANGUAGE],en";

/// Phrase (compared lowercase) identifying a disambiguation page.
pub const DISAMBIGUATION_MARKER: &str = "wikimedia disambiguation page";

/// Item id of "Wikimedia disambiguation page", used as an `instance of` value.
pub const DISAMBIGUATION_ITEM_ID: &str = "Q4167410";

/// Property id for "instance of".
pub const INSTANCE_OF_PROPERTY: &str = "P31";

/// Property id for "coordinate location".
pub const COORDINATE_PROPERTY: &str = "P625";

/// Sitelink key of the English encyclopedia.
pub const ENGLISH_SITELINK_KEY: &str = "enwiki";

/// Anchors for the positional scan of the rendered entity page.
pub const SITELINK_GROUP_MARKER: &str = "wikibase-sitelinkgrouplistview";
pub const ENGLISH_SITELINK_MARKER: &str = "title=\"English\">enwiki</span>";
pub const TITLE_ATTRIBUTE_MARKER: &str = "title=\"";

/// Field marker used by the fallback scan over query payloads.
pub const VALUE_FIELD_MARKER: &str = "\"value\"";

/// Version stamped into every persisted [`ResolutionRecord`](crate::cache::ResolutionRecord).
pub const RECORD_SCHEMA_VERSION: u32 = 1;

/// Extension of persisted record files.
pub const RECORD_EXTENSION: &str = "json";

/// Marker written into a document when a mention failed with a non-fatal error.
pub const ERROR_ID_MARKER: &str = "ERROR";
