//! Ordered per-category source lists.
//!
//! Ordering is precedence: the cascade attempts sources top to bottom and
//! stops at the first usable one.

use crate::models::Category;
use crate::sources::SourceDescriptor;

/// The cascade for one category.
///
/// When a NewsAPI key is configured its source is prepended, taking
/// precedence over the open feeds.
pub fn sources_for(category: Category, newsapi_key: Option<&str>) -> Vec<SourceDescriptor> {
    let mut sources = Vec::new();
    if let Some(key) = newsapi_key {
        sources.push(SourceDescriptor::news_api(category, key));
    }
    sources.extend(feed_sources(category));
    sources
}

fn feed_sources(category: Category) -> Vec<SourceDescriptor> {
    match category {
        Category::Technology => vec![
            SourceDescriptor::feed("TechCrunch", "https://feeds.feedburner.com/TechCrunch/"),
            SourceDescriptor::feed("O'Reilly Radar", "https://feeds.feedburner.com/oreilly/radar"),
            SourceDescriptor::feed("VentureBeat", "https://feeds.feedburner.com/venturebeat/SZYF"),
            SourceDescriptor::feed("Ars Technica", "https://feeds.feedburner.com/arstechnica/"),
        ],
        Category::Business => vec![
            SourceDescriptor::feed(
                "Business Insider",
                "https://feeds.feedburner.com/businessinsider",
            ),
            SourceDescriptor::feed(
                "Silicon Alley Insider",
                "https://feeds.feedburner.com/typepad/alleyinsider/silicon_alley_insider",
            ),
            SourceDescriptor::feed("VentureBeat", "https://feeds.feedburner.com/venturebeat/SZYF"),
            SourceDescriptor::feed("Forbes", "https://feeds.feedburner.com/forbes/"),
        ],
        Category::Science => vec![
            SourceDescriptor::feed("ScienceDaily", "https://feeds.feedburner.com/sciencedaily"),
            SourceDescriptor::feed("O'Reilly Radar", "https://feeds.feedburner.com/oreilly/radar"),
            SourceDescriptor::feed("VentureBeat", "https://feeds.feedburner.com/venturebeat/SZYF"),
            SourceDescriptor::feed("Nature", "https://feeds.feedburner.com/nature/"),
        ],
        Category::Health => vec![
            SourceDescriptor::feed("WebMD", "https://feeds.feedburner.com/WebMD"),
            SourceDescriptor::feed("O'Reilly Radar", "https://feeds.feedburner.com/oreilly/radar"),
            SourceDescriptor::feed("VentureBeat", "https://feeds.feedburner.com/venturebeat/SZYF"),
            SourceDescriptor::feed("Healthline", "https://feeds.feedburner.com/healthline/"),
        ],
        Category::Sports => vec![
            SourceDescriptor::feed("ESPN", "https://feeds.feedburner.com/espn/espn"),
            SourceDescriptor::feed("O'Reilly Radar", "https://feeds.feedburner.com/oreilly/radar"),
            SourceDescriptor::feed("VentureBeat", "https://feeds.feedburner.com/venturebeat/SZYF"),
            SourceDescriptor::feed(
                "Sports Illustrated",
                "https://feeds.feedburner.com/sportsillustrated/",
            ),
        ],
        Category::Entertainment => vec![
            SourceDescriptor::feed("O'Reilly Radar", "https://feeds.feedburner.com/oreilly/radar"),
            SourceDescriptor::feed("VentureBeat", "https://feeds.feedburner.com/venturebeat/SZYF"),
            SourceDescriptor::feed("TechCrunch", "https://feeds.feedburner.com/TechCrunch/"),
            SourceDescriptor::feed(
                "Entertainment Wire",
                "https://feeds.feedburner.com/entertainment/",
            ),
        ],
    }
}
