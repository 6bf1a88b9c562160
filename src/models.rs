//! Data models shared across the pipeline.
//!
//! This module defines the core data structures used throughout the
//! application:
//! - [`Category`]: the news categories a cycle can acquire
//! - [`Article`]: a normalized news item as produced by the source cascade
//! - [`Sentiment`] / [`SentimentFilter`]: classification verdicts and the
//!   view-filter selector derived from them
//! - [`AcquisitionStatus`]: whether a cycle served live or built-in data
//!
//! Serialized field names use camelCase (`publishedAt`, `urlToImage`) to
//! match the wire shape consumed by the presentation adapter.

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// News categories with a configured source list.
///
/// `Technology` doubles as the default for unrecognized category strings,
/// so every input maps to a non-empty fallback set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Business,
    Science,
    Health,
    Sports,
    Entertainment,
}

impl Category {
    /// The category used when an unrecognized value is encountered.
    pub const DEFAULT: Category = Category::Technology;

    /// Lowercase identifier used in URLs and output filenames.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Business => "business",
            Category::Science => "science",
            Category::Health => "health",
            Category::Sports => "sports",
            Category::Entertainment => "entertainment",
        }
    }

    /// Parse a free-form category string, falling back to
    /// [`Category::DEFAULT`] on anything unrecognized.
    ///
    /// The CLI surface stays strict (a typo there should fail loudly);
    /// this lenient form is for values arriving from outside the process.
    pub fn parse_or_default(s: &str) -> Category {
        match s.trim().to_lowercase().as_str() {
            "technology" => Category::Technology,
            "business" => Category::Business,
            "science" => Category::Science,
            "health" => Category::Health,
            "sports" => Category::Sports,
            "entertainment" => Category::Entertainment,
            _ => Category::DEFAULT,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Classification verdict for one article.
///
/// Always derived from the accumulated scores under the scorer's threshold
/// rule; never assigned independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        };
        f.write_str(s)
    }
}

/// View-filter selector over a classified set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SentimentFilter {
    #[default]
    All,
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for SentimentFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SentimentFilter::All => "all",
            SentimentFilter::Positive => "positive",
            SentimentFilter::Neutral => "neutral",
            SentimentFilter::Negative => "negative",
        };
        f.write_str(s)
    }
}

impl SentimentFilter {
    /// Whether an article with the given verdict belongs to the filtered view.
    pub fn matches(&self, sentiment: Sentiment) -> bool {
        match self {
            SentimentFilter::All => true,
            SentimentFilter::Positive => sentiment == Sentiment::Positive,
            SentimentFilter::Neutral => sentiment == Sentiment::Neutral,
            SentimentFilter::Negative => sentiment == Sentiment::Negative,
        }
    }
}

/// A news item as produced by the source cascade.
///
/// The body has already been run through the normalizer by the per-source
/// parse step, so `summary` is bounded plain text. Immutable once
/// constructed; classification wraps it rather than mutating it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Headline; `"No title"` when the entry had none.
    pub title: String,
    /// Bounded plain-text summary of the article body.
    #[serde(rename = "description")]
    pub summary: String,
    /// Source label, e.g. the feed or outlet name.
    pub source: String,
    /// Publish timestamp as provided by the source; may be any string the
    /// source emitted, or RFC 3339 "now" when the source had none.
    pub published_at: String,
    /// Link to the full article; `"#"` when the entry had none.
    pub url: String,
    /// Lead image, when the source provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,
}

/// Whether a completed cycle is serving live or built-in data.
///
/// Emitted alongside the displayed set so the presentation adapter can show
/// a non-blocking notice; raw error text never travels with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AcquisitionStatus {
    /// At least one source yielded parseable items.
    Live {
        /// Name of the winning source.
        source: String,
    },
    /// Every source failed; the fixed built-in set was substituted.
    Fallback,
}

impl AcquisitionStatus {
    pub fn is_fallback(&self) -> bool {
        matches!(self, AcquisitionStatus::Fallback)
    }
}
