//! Reading the facts the validator needs out of a fetched candidate page.
//!
//! The page is either the knowledge base's JSON entity document (content
//! negotiation can land there) or the rendered HTML entity page. JSON is read
//! structurally; HTML falls back to a positional scan anchored on the sitelink
//! group, then the English sitelink, then the first `title="..."` after it.

use serde_json::Value;
use tracing::debug;

use crate::cache::AuxiliaryCoordinate;
use crate::constants::{
    COORDINATE_PROPERTY, DISAMBIGUATION_ITEM_ID, DISAMBIGUATION_MARKER, ENGLISH_SITELINK_KEY,
    ENGLISH_SITELINK_MARKER, INSTANCE_OF_PROPERTY, SITELINK_GROUP_MARKER, TITLE_ATTRIBUTE_MARKER,
};

/// What a candidate page says about itself.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageFacts {
    pub disambiguation: bool,
    pub english_title: Option<String>,
    pub coordinate: Option<AuxiliaryCoordinate>,
}

/// Inspects a fetched page. Missing pieces come back as `None`/`false`.
pub fn inspect_page(body: &str) -> PageFacts {
    let marker_hit = body.to_lowercase().contains(DISAMBIGUATION_MARKER);

    if let Some(document) = entity_document(body)
        && let Some(entity) = first_entity(&document)
    {
        return PageFacts {
            disambiguation: marker_hit || is_disambiguation_item(entity),
            english_title: json_english_title(entity),
            coordinate: json_coordinate(entity),
        };
    }

    PageFacts {
        disambiguation: marker_hit,
        english_title: html_english_title(body),
        coordinate: None,
    }
}

fn entity_document(body: &str) -> Option<Value> {
    let trimmed = body.trim_start();
    if !trimmed.starts_with('{') {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

fn first_entity(document: &Value) -> Option<&Value> {
    document.get("entities")?.as_object()?.values().next()
}

fn json_english_title(entity: &Value) -> Option<String> {
    entity
        .pointer(&format!("/sitelinks/{}/title", ENGLISH_SITELINK_KEY))
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

fn claim_values<'a>(entity: &'a Value, property: &str) -> impl Iterator<Item = &'a Value> {
    entity
        .pointer(&format!("/claims/{}", property))
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|claim| claim.pointer("/mainsnak/datavalue/value"))
}

fn is_disambiguation_item(entity: &Value) -> bool {
    claim_values(entity, INSTANCE_OF_PROPERTY)
        .any(|v| v.get("id").and_then(Value::as_str) == Some(DISAMBIGUATION_ITEM_ID))
}

fn json_coordinate(entity: &Value) -> Option<AuxiliaryCoordinate> {
    let value = claim_values(entity, COORDINATE_PROPERTY).next()?;
    let latitude = value.get("latitude")?.as_f64()?;
    let longitude = value.get("longitude")?.as_f64()?;
    Some(AuxiliaryCoordinate::new(latitude, longitude))
}

/// Positional scan of the rendered page for the English encyclopedia title.
pub fn html_english_title(page: &str) -> Option<String> {
    let rest = after(page, SITELINK_GROUP_MARKER)?;
    let rest = after(rest, ENGLISH_SITELINK_MARKER)?;
    let rest = after(rest, TITLE_ATTRIBUTE_MARKER)?;
    let end = rest.find('"')?;

    let title = decode_entities(rest[..end].trim());
    if title.is_empty() {
        debug!("English sitelink has an empty title attribute");
        return None;
    }
    Some(title)
}

fn after<'a>(haystack: &'a str, marker: &str) -> Option<&'a str> {
    haystack
        .find(marker)
        .map(|pos| &haystack[pos + marker.len()..])
}

fn decode_entities(raw: &str) -> String {
    if !raw.contains('&') {
        return raw.to_string();
    }
    raw.replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#039;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
