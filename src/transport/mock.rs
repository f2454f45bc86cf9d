use std::collections::HashMap;

use parking_lot::Mutex;

use super::Transport;
use super::error::{TransportError, TransportResult};

/// Which [`Transport`] method served a recorded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Direct,
    FollowRedirects,
}

/// In-memory [`Transport`] that answers from a URL routing table.
///
/// Unrouted URLs fail with [`TransportError::Request`]. Every call is recorded
/// so tests can assert on network activity.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<HashMap<String, TransportResult<String>>>,
    requests: Mutex<Vec<(RequestKind, String)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `body` for `url`.
    pub fn with_response(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.set_response(url, body);
        self
    }

    /// Fails requests for `url` with an HTTP status error.
    pub fn with_status(self, url: impl Into<String>, status: u16) -> Self {
        let url = url.into();
        let err = TransportError::Status {
            url: url.clone(),
            status,
        };
        self.routes.lock().insert(url, Err(err));
        self
    }

    /// Replaces (or adds) the body served for `url`.
    pub fn set_response(&self, url: impl Into<String>, body: impl Into<String>) {
        self.routes.lock().insert(url.into(), Ok(body.into()));
    }

    /// Returns every requested URL in call order.
    pub fn requests(&self) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .map(|(_, url)| url.clone())
            .collect()
    }

    /// Returns requests made through `kind`, in call order.
    pub fn requests_of(&self, kind: RequestKind) -> Vec<String> {
        self.requests
            .lock()
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, url)| url.clone())
            .collect()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    fn answer(&self, kind: RequestKind, url: &str) -> TransportResult<String> {
        self.requests.lock().push((kind, url.to_string()));

        match self.routes.lock().get(url) {
            Some(result) => result.clone(),
            None => Err(TransportError::Request {
                url: url.to_string(),
                message: "no mock route".to_string(),
            }),
        }
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> TransportResult<String> {
        self.answer(RequestKind::Direct, url)
    }

    fn get_following_redirects(&self, url: &str) -> TransportResult<String> {
        self.answer(RequestKind::FollowRedirects, url)
    }
}
