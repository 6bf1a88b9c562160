//! Content sources and the acquisition-fallback cascade.
//!
//! Every category has an ordered list of named sources. A cycle walks the
//! list strictly in order through a uniform attempt interface and returns
//! the first source that yields at least one parseable item; results from
//! different sources are never merged. When every source fails, the caller
//! substitutes the fixed built-in set so the pipeline always produces
//! output.
//!
//! # Protocols
//!
//! | Protocol | Module | Payload | Notes |
//! |----------|--------|---------|-------|
//! | Feed | [`feed`] | RSS/Atom XML | Permissive: untitled entries get a placeholder |
//! | NewsApi | [`newsapi`] | JSON `articles` array | Strict: incomplete entries are discarded |
//!
//! # Failure handling
//!
//! Per-source failures ([`crate::error::SourceError`]) are logged and
//! swallowed inside the cascade; only total exhaustion
//! ([`crate::error::AcquisitionError`]) crosses the boundary, and
//! [`cascade::acquire_or_fallback`] absorbs even that.

pub mod cascade;
pub mod client;
pub mod fallback;
pub mod feed;
pub mod newsapi;
pub mod registry;

use crate::models::Category;

/// Wire protocol a source speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// Structured feed document (RSS `<item>` or Atom `<entry>`).
    Feed,
    /// JSON document with an `articles` array.
    NewsApi,
}

/// One named entry in a category's cascade.
#[derive(Debug, Clone)]
pub struct SourceDescriptor {
    /// Display name, used in logs and the live-data status signal.
    pub name: String,
    /// Endpoint URL.
    pub url: String,
    pub protocol: Protocol,
}

impl SourceDescriptor {
    pub fn feed(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            protocol: Protocol::Feed,
        }
    }

    pub fn news_api(category: Category, api_key: &str) -> Self {
        Self {
            name: "NewsAPI".to_string(),
            url: format!(
                "https://newsapi.org/v2/top-headlines?category={}&language=en&apiKey={}",
                category.slug(),
                api_key
            ),
            protocol: Protocol::NewsApi,
        }
    }
}
