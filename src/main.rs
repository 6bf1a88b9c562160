//! # News Mood
//!
//! A news classification pipeline that acquires short news items from
//! unreliable feed sources, degrades through an ordered cascade of
//! fallbacks when sources fail, normalizes article bodies into bounded
//! summaries, and classifies each item into a sentiment category with a
//! deterministic lexicon-weighted scorer.
//!
//! ## Usage
//!
//! ```sh
//! news_mood -j ./json --category technology --filter negative
//! ```
//!
//! ## Architecture
//!
//! One invocation runs one acquisition cycle:
//! 1. **Acquire**: walk the category's source cascade in order; first
//!    usable source wins, built-in articles substitute on exhaustion
//! 2. **Normalize**: each body is reduced to a bounded plain-text summary
//!    at the parse step
//! 3. **Classify**: deterministic weighted scoring against the built-in
//!    lexicons
//! 4. **Output**: the filtered view plus a live/fallback status notice is
//!    written as a dated JSON snapshot

use clap::Parser;
use itertools::Itertools;
use std::error::Error;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt as tfmt};
use url::Url;

mod cli;
mod error;
mod lexicon;
mod models;
mod normalize;
mod outputs;
mod sentiment;
mod sources;
mod state;
mod utils;

use cli::Cli;
use lexicon::Lexicon;
use models::Category;
use sentiment::{ScoringScope, SentimentScorer};
use sources::cascade::acquire_or_fallback;
use sources::client::FeedClient;
use sources::registry;
use state::Dashboard;
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("news_mood starting up");

    let args = Cli::parse();
    debug!(?args.category, ?args.filter, ?args.json_output_dir, "Parsed CLI arguments");

    let category = Category::parse_or_default(&args.category);
    if category.slug() != args.category.trim().to_lowercase() {
        info!(requested = %args.category, using = %category, "Unrecognized category; using default");
    }

    if let Some(ref proxy) = args.proxy {
        Url::parse(proxy)?;
    }

    // Early check: ensure the snapshot dir is writable before any fetch.
    ensure_writable_dir(&args.json_output_dir).await?;

    let scope = if args.title_only {
        ScoringScope::TitleOnly
    } else {
        ScoringScope::TitleAndBody
    };
    let scorer = SentimentScorer::new(Lexicon::news_default().clone(), args.min_confidence, scope);

    let client = FeedClient::new(args.proxy.clone());
    let sources = registry::sources_for(category, args.newsapi_key.as_deref());
    info!(
        category = %category,
        sources = sources.len(),
        "Starting acquisition cycle"
    );

    // ---- One acquisition cycle ----
    let mut dashboard = Dashboard::new(args.filter);
    let token = dashboard.begin_cycle();

    let (articles, status) = acquire_or_fallback(&client, category, &sources).await;
    if status.is_fallback() {
        info!(count = articles.len(), "Serving built-in sample articles");
    } else {
        info!(count = articles.len(), "Live news loaded");
    }

    let classified = scorer.classify_all(articles);
    for article in &classified {
        debug!(
            title = %article.article().title,
            sentiment = %article.sentiment(),
            positive = article.positive_score(),
            negative = article.negative_score(),
            confidence = article.confidence(),
            "Classified article"
        );
    }
    let tally = classified
        .iter()
        .counts_by(|article| article.sentiment());
    info!(?tally, "Classified articles");

    dashboard.complete_cycle(token, classified, status);
    info!(
        displayed = dashboard.displayed().len(),
        total = dashboard.full_set().len(),
        filter = ?dashboard.active_filter(),
        "Dashboard state updated"
    );

    outputs::json::write_snapshot(&dashboard, category, &args.json_output_dir).await?;

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
