//! Command-line interface definitions.
//!
//! All options can be provided via command-line flags; the NewsAPI key can
//! also come from the environment.

use clap::Parser;

use crate::models::SentimentFilter;
use crate::sentiment::SentimentScorer;

/// Command-line arguments for one acquisition cycle.
///
/// # Examples
///
/// ```sh
/// # Classify today's technology headlines
/// news_mood -j ./json
///
/// # Negative business news only, stricter confidence floor
/// news_mood -j ./json --category business --filter negative --min-confidence 4
///
/// # Route feed fetches through a CORS relay
/// news_mood -j ./json --proxy "https://relay.example/raw?url="
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Output directory for JSON snapshots
    #[arg(short, long)]
    pub json_output_dir: String,

    /// News category to acquire; unrecognized values fall back to
    /// technology
    #[arg(short, long, default_value = "technology")]
    pub category: String,

    /// Sentiment filter applied to the displayed set
    #[arg(short, long, value_enum, default_value_t = SentimentFilter::All)]
    pub filter: SentimentFilter,

    /// Minimum confidence below which a verdict stays neutral
    #[arg(long, default_value_t = SentimentScorer::DEFAULT_MIN_CONFIDENCE)]
    pub min_confidence: u32,

    /// Score titles only, ignoring article bodies
    #[arg(long)]
    pub title_only: bool,

    /// NewsAPI key; when set, the NewsAPI source leads the cascade
    #[arg(long, env = "NEWSAPI_KEY")]
    pub newsapi_key: Option<String>,

    /// Proxy prefix to route feed fetches through (target URL is appended
    /// percent-encoded)
    #[arg(long)]
    pub proxy: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["news_mood", "--json-output-dir", "./json"]);
        assert_eq!(cli.json_output_dir, "./json");
        assert_eq!(cli.category, "technology");
        assert_eq!(cli.filter, SentimentFilter::All);
        assert_eq!(cli.min_confidence, 2);
        assert!(!cli.title_only);
        assert!(cli.proxy.is_none());
    }

    #[test]
    fn test_cli_full_flags() {
        let cli = Cli::parse_from([
            "news_mood",
            "-j",
            "/tmp/json",
            "--category",
            "business",
            "--filter",
            "negative",
            "--min-confidence",
            "0",
            "--title-only",
        ]);
        assert_eq!(cli.json_output_dir, "/tmp/json");
        assert_eq!(cli.category, "business");
        assert_eq!(cli.filter, SentimentFilter::Negative);
        assert_eq!(cli.min_confidence, 0);
        assert!(cli.title_only);
    }

    #[test]
    fn test_cli_rejects_unknown_filter() {
        let result = Cli::try_parse_from(["news_mood", "-j", "./json", "--filter", "angry"]);
        assert!(result.is_err());
    }
}
