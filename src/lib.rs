//! Entity linker library crate (used by the CLI binary and integration tests).
//!
//! Maps free-text entity mentions to knowledge-base identifiers by walking a
//! normalization ladder, querying label matches, validating candidates against
//! the English encyclopedia sitelink, and caching every outcome on disk.
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Environment-backed configuration
//! - [`EntityResolutionService`], [`ResolutionOutcome`], [`ResolveError`] - Orchestration
//! - [`ResolutionCache`], [`ResolutionRecord`] - Persistent resolution cache
//!
//! ## Pipeline Stages
//! - [`NormalizationLadder`], [`LadderRule`] - Mention variants in fixed order
//! - [`QueryResolver`], [`extract_candidates`] - Label lookup
//! - [`CandidateValidator`], [`ValidationVerdict`] - Sitelink validation
//!
//! ## Transport
//! - [`Transport`], [`HttpTransport`] - Blocking HTTP access
//!
//! ## Batch
//! - [`run_batch`], [`annotate_document`] - Keyword document enrichment
//!
//! ## Test/Mock Support
//! [`MockTransport`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod batch;
pub mod cache;
pub mod config;
pub mod constants;
pub mod hashing;
pub mod normalize;
pub mod query;
pub mod service;
pub mod transport;
pub mod validate;

pub use batch::{BatchError, BatchReport, annotate_document, discover_inputs, run_batch};
pub use cache::{AuxiliaryCoordinate, CacheError, ResolutionCache, ResolutionRecord};
pub use config::{Config, ConfigError};
pub use hashing::{hash_mention, mention_key};
pub use normalize::{LadderRule, NormalizationLadder, NormalizedVariant};
pub use query::{QueryResolver, extract_candidates};
pub use service::{EntityResolutionService, OutcomeSource, ResolutionOutcome, ResolveError};
#[cfg(any(test, feature = "mock"))]
pub use transport::MockTransport;
pub use transport::{HttpTransport, Transport, TransportError};
pub use validate::{CandidateValidator, ValidationError, ValidationVerdict};
