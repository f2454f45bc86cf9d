//! Blocking HTTP transport used by the query and validation stages.
//!
//! The resolver never talks to the network directly; it goes through
//! [`Transport`] so tests can swap in [`MockTransport`].

pub mod error;
pub mod http;
#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockTransport;

/// Issues GET requests and returns the raw body text.
///
/// Implementations must report failures as errors; an empty string is a valid
/// body, never a stand-in for "request failed".
pub trait Transport: Send + Sync {
    /// Fetches `url` without following redirects.
    fn get(&self, url: &str) -> TransportResult<String>;

    /// Fetches `url`, following redirects to the final page.
    fn get_following_redirects(&self, url: &str) -> TransportResult<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> TransportResult<String> {
        (**self).get(url)
    }

    fn get_following_redirects(&self, url: &str) -> TransportResult<String> {
        (**self).get_following_redirects(url)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn get(&self, url: &str) -> TransportResult<String> {
        (**self).get(url)
    }

    fn get_following_redirects(&self, url: &str) -> TransportResult<String> {
        (**self).get_following_redirects(url)
    }
}
