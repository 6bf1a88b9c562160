//! HTTP client wrapper: bounded fetches plus protocol dispatch.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::error::SourceError;
use crate::models::Article;
use crate::sources::{Protocol, SourceDescriptor, feed, newsapi};
use crate::utils::truncate_for_log;

const FETCH_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = concat!("news_mood/", env!("CARGO_PKG_VERSION"));

/// HTTP client used for all source attempts.
///
/// An optional proxy prefix routes every request through a
/// CORS-proxy-style relay: the target URL is percent-encoded and appended
/// to the prefix.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: Client,
    proxy_prefix: Option<String>,
}

impl FeedClient {
    pub fn new(proxy_prefix: Option<String>) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self { http, proxy_prefix }
    }

    fn request_url(&self, url: &str) -> String {
        match &self.proxy_prefix {
            Some(prefix) => format!("{}{}", prefix, urlencoding::encode(url)),
            None => url.to_string(),
        }
    }

    /// Fetch a payload as text. Network failures, timeouts, and non-2xx
    /// responses all classify as [`SourceError::Unavailable`].
    pub async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        let request_url = self.request_url(url);
        let response = self
            .http
            .get(&request_url)
            .send()
            .await
            .map_err(|e| SourceError::Unavailable(format!("request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Unavailable(format!(
                "HTTP {status} from {url}"
            )));
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::Unavailable(format!("reading body from {url} failed: {e}")))
    }

    /// One bounded attempt against one source: fetch, then parse per the
    /// source's protocol.
    #[instrument(level = "debug", skip_all, fields(source = %source.name))]
    pub async fn attempt(&self, source: &SourceDescriptor) -> Result<Vec<Article>, SourceError> {
        let payload = self.fetch_text(&source.url).await?;
        debug!(bytes = payload.len(), "Fetched source payload");

        let parsed = match source.protocol {
            Protocol::Feed => feed::parse_feed(&payload),
            Protocol::NewsApi => newsapi::parse_response(&payload),
        };
        if parsed.is_err() {
            warn!(
                payload_preview = %truncate_for_log(&payload, 300),
                "Payload did not parse"
            );
        }
        parsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_without_proxy_is_untouched() {
        let client = FeedClient::new(None);
        assert_eq!(
            client.request_url("https://example.com/feed?a=1"),
            "https://example.com/feed?a=1"
        );
    }

    #[test]
    fn test_request_url_with_proxy_encodes_target() {
        let client = FeedClient::new(Some("https://relay.example/raw?url=".to_string()));
        assert_eq!(
            client.request_url("https://example.com/feed?a=1"),
            "https://relay.example/raw?url=https%3A%2F%2Fexample.com%2Ffeed%3Fa%3D1"
        );
    }
}
