use super::*;
use crate::transport::MockTransport;

const ENDPOINT: &str = "https://query.example.org/sparql";

fn resolver(mock: &MockTransport) -> QueryResolver<&MockTransport> {
    QueryResolver::new(mock, Url::parse(ENDPOINT).expect("endpoint"))
}

fn binding(entity: &str, label: &str) -> String {
    format!(
        r#"{{"entity":{{"type":"uri","value":"{entity}"}},"label":{{"xml:lang":"en","type":"literal","value":"{label}"}}}}"#
    )
}

fn payload(bindings: &[String]) -> String {
    format!(
        r#"{{"head":{{"vars":["entity","label"]}},"results":{{"bindings":[{}]}}}}"#,
        bindings.join(",")
    )
}

#[test]
fn test_build_label_query_shape() {
    let query = build_label_query("Paris");

    assert_eq!(
        query,
        "SELECT DISTINCT ?entity ?label WHERE {?entity rdfs:label \"Paris\"@en . \
         SERVICE wikibase:label { bd:serviceParam wikibase:language \"[AUTO_LANGUAGE],en\" }}"
    );
}

#[test]
fn test_build_label_query_escapes_literal() {
    let query = build_label_query(r#"The "Boss" \ Springsteen"#);

    assert!(query.contains(r#"rdfs:label "The \"Boss\" \\ Springsteen"@en"#));
}

#[test]
fn test_query_url_is_encoded() {
    let mock = MockTransport::new();
    let url = resolver(&mock).query_url("Eiffel Tower");

    assert!(url.starts_with("https://query.example.org/sparql?query="));
    assert!(url.ends_with("&format=json"));
    assert!(!url.contains(' '));
    assert!(!url.contains('"'));

    let parsed = Url::parse(&url).expect("valid url");
    let query = parsed
        .query_pairs()
        .find(|(k, _)| k == "query")
        .map(|(_, v)| v.into_owned())
        .expect("query param");
    assert_eq!(query, build_label_query("Eiffel Tower"));
}

#[test]
fn test_extract_three_candidates_in_order() {
    let body = payload(&[
        binding("http://www.wikidata.org/entity/Q90", "Paris"),
        binding("http://www.wikidata.org/entity/Q167646", "Paris"),
        binding("http://www.wikidata.org/entity/Q830149", "Paris"),
    ]);

    assert_eq!(
        extract_candidates(&body),
        vec![
            "http://www.wikidata.org/entity/Q90",
            "http://www.wikidata.org/entity/Q167646",
            "http://www.wikidata.org/entity/Q830149",
        ]
    );
}

#[test]
fn test_extract_zero_bindings() {
    assert!(extract_candidates(&payload(&[])).is_empty());
    assert!(extract_candidates(r#"{"results":{}}"#).is_empty());
}

#[test]
fn test_extract_ignores_literals_and_duplicates() {
    let body = payload(&[
        binding("http://www.wikidata.org/entity/Q1", "One"),
        binding("http://www.wikidata.org/entity/Q1", "Uno"),
        binding("http://www.wikidata.org/entity/Q2", "Two"),
    ]);

    assert_eq!(
        extract_candidates(&body),
        vec![
            "http://www.wikidata.org/entity/Q1",
            "http://www.wikidata.org/entity/Q2"
        ]
    );
}

#[test]
fn test_extract_tolerates_garbage() {
    assert!(extract_candidates("").is_empty());
    assert!(extract_candidates("<html>503 Service Unavailable</html>").is_empty());
    assert!(extract_candidates(r#"{"value""#).is_empty());
    assert!(extract_candidates(r#"{"value":"#).is_empty());
}

#[test]
fn test_extract_truncated_payload_falls_back_to_scan() {
    let full = payload(&[
        binding("http://www.wikidata.org/entity/Q90", "Paris"),
        binding("http://www.wikidata.org/entity/Q167646", "Paris"),
    ]);
    let cut = full.find("Q167646").expect("second uri") + 3;
    let truncated = &full[..cut];

    assert_eq!(
        extract_candidates(truncated),
        vec!["http://www.wikidata.org/entity/Q90"]
    );
}

#[test]
fn test_scan_value_fields_keeps_uris_only() {
    let body = r#"{"value" : "http://a/1" }, {"value":"Paris"}, {"value": "https://b/2"}"#;

    assert_eq!(scan_value_fields(body), vec!["http://a/1", "https://b/2"]);
}

#[test]
fn test_scan_keeps_commas_inside_quoted_values() {
    let truncated = r#"{"results":{"bindings":[{"entity":{"type":"uri","value":"http://dbpedia.org/resource/Paris,_Texas"}},{"entity":{"type":"uri","value":"http://x/Q"#;

    assert_eq!(
        extract_candidates(truncated),
        vec!["http://dbpedia.org/resource/Paris,_Texas"]
    );
}

#[test]
fn test_scan_handles_braces_and_escaped_quotes() {
    let body = r#"{"value": "http://a/{x},y" , "value":"http://b/\"q\"", "value": http://c/3 }"#;

    assert_eq!(
        scan_value_fields(body),
        vec!["http://a/{x},y", r#"http://b/\"q\""#, "http://c/3"]
    );
}

#[test]
fn test_resolve_returns_candidates() {
    let mock = MockTransport::new();
    let r = resolver(&mock);
    mock.set_response(
        r.query_url("Paris"),
        payload(&[binding("http://www.wikidata.org/entity/Q90", "Paris")]),
    );

    assert_eq!(r.resolve("Paris"), vec!["http://www.wikidata.org/entity/Q90"]);
    assert_eq!(mock.request_count(), 1);
}

#[test]
fn test_resolve_transport_failure_is_empty() {
    let mock = MockTransport::new();
    let r = resolver(&mock);

    assert!(r.resolve("Paris").is_empty());
    assert_eq!(mock.request_count(), 1);
}

#[test]
fn test_resolve_http_error_is_empty() {
    let url_source = MockTransport::new();
    let url = resolver(&url_source).query_url("Paris");
    let mock = MockTransport::new().with_status(url, 429);

    assert!(resolver(&mock).resolve("Paris").is_empty());
}
