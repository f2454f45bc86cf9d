use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use reqwest::redirect::Policy;
use tracing::debug;

use super::Transport;
use super::error::{TransportError, TransportResult};
use crate::config::Config;

const QUERY_ACCEPT: &str = "application/sparql-results+json, application/json;q=0.9";
/// Entity URIs content-negotiate; JSON lands on the structured entity document.
const PAGE_ACCEPT: &str = "application/json, text/html;q=0.9, */*;q=0.5";

/// [`Transport`] backed by blocking `reqwest` clients.
///
/// Two clients are kept: one that refuses redirects (query endpoint) and one
/// that follows up to `max_redirects` hops (candidate pages). Timeouts come
/// from [`Config::request_timeout`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    direct: Client,
    redirecting: Client,
}

impl HttpTransport {
    /// Builds both clients from `config`.
    pub fn from_config(config: &Config) -> TransportResult<Self> {
        let direct = Self::build_client(config, Policy::none(), QUERY_ACCEPT)?;
        let redirecting = Self::build_client(
            config,
            Policy::limited(config.max_redirects),
            PAGE_ACCEPT,
        )?;

        Ok(Self {
            direct,
            redirecting,
        })
    }

    fn build_client(config: &Config, policy: Policy, accept: &'static str) -> TransportResult<Client> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(accept));

        Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .redirect(policy)
            .default_headers(headers)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))
    }

    fn fetch(client: &Client, url: &str) -> TransportResult<String> {
        let response = client.get(url).send().map_err(|e| TransportError::Request {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        Self::read_body(url, response)
    }

    fn read_body(url: &str, response: Response) -> TransportResult<String> {
        let status = response.status();
        debug!(url = %url, final_url = %response.url(), status = status.as_u16(), "HTTP response");

        if !status.is_success() {
            return Err(TransportError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().map_err(|e| TransportError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> TransportResult<String> {
        Self::fetch(&self.direct, url)
    }

    fn get_following_redirects(&self, url: &str) -> TransportResult<String> {
        Self::fetch(&self.redirecting, url)
    }
}
