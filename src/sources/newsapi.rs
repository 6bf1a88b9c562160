//! JSON `articles`-array protocol (NewsAPI-style documents).
//!
//! Unlike the feed protocol this one is strict: an entry missing a
//! non-empty title, body, or source name is discarded here, at the
//! protocol layer. The payload shape is
//! `{ "articles": [{ "title", "description"/"content", "source": { "name" },
//! "publishedAt", "url", "urlToImage" }] }`.

use serde::Deserialize;

use crate::error::SourceError;
use crate::models::Article;
use crate::normalize::{DEFAULT_SUMMARY_LEN, normalize};
use crate::sources::feed::MAX_ENTRIES;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    articles: Vec<ApiArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiArticle {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    source: Option<ApiSource>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    url_to_image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiSource {
    #[serde(default)]
    name: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ApiArticle {
    fn into_article(self) -> Option<Article> {
        let title = non_empty(self.title)?;
        let source = non_empty(self.source.and_then(|s| s.name))?;
        let raw_body = non_empty(self.description).or_else(|| non_empty(self.content))?;

        Some(Article {
            title,
            summary: normalize(&raw_body, DEFAULT_SUMMARY_LEN),
            source,
            published_at: non_empty(self.published_at)
                .unwrap_or_else(|| chrono::Utc::now().to_rfc3339()),
            url: non_empty(self.url).unwrap_or_else(|| "#".to_string()),
            url_to_image: non_empty(self.url_to_image),
        })
    }
}

/// Parse a JSON payload into articles.
///
/// Fails with [`SourceError::Malformed`] on invalid JSON or when no entry
/// survives the field requirements.
pub fn parse_response(body: &str) -> Result<Vec<Article>, SourceError> {
    let response: ApiResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::Malformed(format!("JSON error: {e}")))?;

    let articles: Vec<Article> = response
        .articles
        .into_iter()
        .filter_map(ApiArticle::into_article)
        .take(MAX_ENTRIES)
        .collect();

    if articles.is_empty() {
        return Err(SourceError::Malformed(
            "no usable entries in articles array".to_string(),
        ));
    }
    Ok(articles)
}
