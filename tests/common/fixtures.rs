//! Test fixtures for integration tests.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use linker::cache::ResolutionCache;
use linker::service::EntityResolutionService;
use linker::transport::MockTransport;
use url::Url;

pub const ENDPOINT: &str = "https://query.example.org/sparql";

pub const PARIS: &str = "http://www.wikidata.org/entity/Q90";

pub const ROME: &str = "http://www.wikidata.org/entity/Q220";

pub const EIFFEL_TOWER: &str = "http://www.wikidata.org/entity/Q243";

/// SPARQL JSON result listing `candidates` as `?entity` bindings.
pub fn sparql_body(candidates: &[&str]) -> String {
    let bindings: Vec<String> = candidates
        .iter()
        .map(|c| format!(r#"{{"entity":{{"type":"uri","value":"{c}"}}}}"#))
        .collect();
    format!(
        r#"{{"head":{{"vars":["entity","label"]}},"results":{{"bindings":[{}]}}}}"#,
        bindings.join(",")
    )
}

/// HTML entity page with an English sitelink titled `title`.
pub fn entity_page(title: &str) -> String {
    format!(
        r#"<html><body><div class="wikibase-sitelinkgrouplistview"><ul><li><span class="wikibase-sitelinkview-siteid" title="English">enwiki</span><span class="wikibase-sitelinkview-link"><a href="https://en.wikipedia.org/wiki/{title}" title="{title}" lang="en">{title}</a></span></li></ul></div></body></html>"#
    )
}

pub fn disambiguation_page(title: &str) -> String {
    format!(
        r#"<html><body><div class="wikibase-entitytermsview-heading-description">Wikimedia disambiguation page</div>{}</body></html>"#,
        entity_page(title)
    )
}

/// JSON entity document with an English sitelink and a coordinate claim.
pub fn entity_document(id: &str, title: &str, latitude: f64, longitude: f64) -> String {
    format!(
        r#"{{"entities":{{"{id}":{{"id":"{id}","sitelinks":{{"enwiki":{{"site":"enwiki","title":"{title}"}}}},"claims":{{"P625":[{{"mainsnak":{{"datavalue":{{"value":{{"latitude":{latitude},"longitude":{longitude}}},"type":"globecoordinate"}}}}}}]}}}}}}}}"#
    )
}

pub struct TestLinker {
    pub mock: Arc<MockTransport>,
    pub service: EntityResolutionService<MockTransport>,
}

impl TestLinker {
    /// Service over a fresh mock transport, caching under `cache_path`.
    pub fn new(cache_path: &Path) -> Self {
        Self::with_transport(Arc::new(MockTransport::new()), cache_path.to_path_buf())
    }

    pub fn with_transport(mock: Arc<MockTransport>, cache_path: PathBuf) -> Self {
        let service = EntityResolutionService::new(
            Arc::clone(&mock),
            Url::parse(ENDPOINT).expect("endpoint"),
            ResolutionCache::new(cache_path, 1_000),
        );
        Self { mock, service }
    }

    pub fn route_query(&self, variant: &str, candidates: &[&str]) {
        self.mock
            .set_response(self.service.resolver().query_url(variant), sparql_body(candidates));
    }

    pub fn route_page(&self, candidate: &str, body: impl Into<String>) {
        self.mock.set_response(candidate, body);
    }
}
