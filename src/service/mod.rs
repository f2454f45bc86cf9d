//! Mention → identifier orchestration.
//!
//! ```text
//! resolve_entity(mention, force_refresh)
//!   ├─ cache hit (unless forced)  → return record
//!   └─ for variant in ladder:
//!        candidates = query(variant)
//!        for c in candidates: validate(variant, c) → first VALID wins, stop
//!      write record (match or "") keyed by the raw mention → return
//! ```
//!
//! Everything runs on the calling thread, one mention at a time.

pub mod error;
pub mod types;


pub use error::{ResolveError, ResolveResult};
pub use types::{OutcomeSource, ResolutionOutcome};

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::cache::{AuxiliaryCoordinate, ResolutionCache, ResolutionRecord};
use crate::config::{Config, ConfigError};
use crate::normalize::{LadderRule, NormalizationLadder};
use crate::query::QueryResolver;
use crate::transport::Transport;
use crate::validate::CandidateValidator;

/// A validated match for one ladder variant.
#[derive(Debug, Clone, PartialEq)]
struct Match {
    identifier: String,
    coordinate: Option<AuxiliaryCoordinate>,
    rule: LadderRule,
}

/// Top-level resolver: cache, ladder, query and validation wired together.
pub struct EntityResolutionService<T: Transport> {
    resolver: QueryResolver<Arc<T>>,
    validator: CandidateValidator<Arc<T>>,
    cache: ResolutionCache,
}

impl<T: Transport> std::fmt::Debug for EntityResolutionService<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityResolutionService")
            .field("endpoint", &self.resolver.endpoint().as_str())
            .field("cache", &self.cache)
            .finish()
    }
}

impl<T: Transport> EntityResolutionService<T> {
    pub fn new(transport: Arc<T>, endpoint: Url, cache: ResolutionCache) -> Self {
        Self {
            resolver: QueryResolver::new(Arc::clone(&transport), endpoint),
            validator: CandidateValidator::new(transport),
            cache,
        }
    }

    /// Builds the service from `config` around an existing transport.
    pub fn from_config(transport: Arc<T>, config: &Config) -> Result<Self, ConfigError> {
        let endpoint =
            Url::parse(&config.sparql_endpoint).map_err(|e| ConfigError::InvalidEndpoint {
                value: config.sparql_endpoint.clone(),
                reason: e.to_string(),
            })?;
        Ok(Self::new(
            transport,
            endpoint,
            ResolutionCache::from_config(config),
        ))
    }

    pub fn cache(&self) -> &ResolutionCache {
        &self.cache
    }

    pub fn resolver(&self) -> &QueryResolver<Arc<T>> {
        &self.resolver
    }

    /// Resolves `mention`, consulting the cache unless `force_refresh` is set.
    ///
    /// A fresh resolution is always written back, including the empty
    /// "unresolved" outcome.
    #[instrument(skip(self, mention), fields(mention = %mention))]
    pub fn resolve_entity(
        &self,
        mention: &str,
        force_refresh: bool,
    ) -> ResolveResult<ResolutionOutcome> {
        if !force_refresh {
            match self.cache.get(mention) {
                Ok(Some(record)) => {
                    info!(identifier = %record.identifier, "Cache hit");
                    return Ok(ResolutionOutcome::from_record(record));
                }
                Ok(None) => debug!("Cache miss"),
                Err(e) => warn!(error = %e, "Unreadable cache record, resolving afresh"),
            }
        }

        let found = self.run_ladder(mention)?;

        let (identifier, coordinate, matched_rule) = match found {
            Some(m) => (m.identifier, m.coordinate, Some(m.rule)),
            None => (String::new(), None, None),
        };

        let record = ResolutionRecord::new(mention, identifier.clone(), coordinate);
        self.cache.put(&record)?;

        info!(
            identifier = %identifier,
            coordinate = ?coordinate,
            "Resolution stored"
        );

        Ok(ResolutionOutcome {
            identifier,
            coordinate,
            source: OutcomeSource::Fresh,
            matched_rule,
        })
    }

    fn run_ladder(&self, mention: &str) -> ResolveResult<Option<Match>> {
        for variant in NormalizationLadder::new(mention) {
            info!(rule = variant.rule.as_str(), variant = %variant.text, "Trying variant");

            if let Some(found) = self.try_variant(mention, &variant.text, variant.rule)? {
                return Ok(Some(found));
            }
            debug!(rule = variant.rule.as_str(), "No valid candidate for variant");
        }

        info!("Mention unresolved after all variants");
        Ok(None)
    }

    fn try_variant(
        &self,
        mention: &str,
        variant: &str,
        rule: LadderRule,
    ) -> ResolveResult<Option<Match>> {
        for candidate in self.resolver.resolve(variant) {
            let verdict = self
                .validator
                .validate(variant, &candidate)
                .map_err(|e| ResolveError::from_validation(mention, e))?;

            if verdict.is_valid() {
                return Ok(Some(Match {
                    coordinate: verdict.coordinate(),
                    identifier: candidate,
                    rule,
                }));
            }
        }
        Ok(None)
    }
}
