//! Deterministic lexicon-weighted sentiment scoring.
//!
//! The scorer is a fixed, auditable keyword-weighting function, not a
//! statistical model: it case-folds the scoring text, tokenizes on
//! whitespace, and sums lexicon weights for whole-token hits. The verdict
//! is a pure projection of the two accumulated scores under a configurable
//! minimum-confidence threshold; low-signal text is never forced into a
//! polarity.

use serde::Serialize;

use crate::lexicon::Lexicon;
use crate::models::{Article, Sentiment};

/// Which text feeds the scorer.
///
/// The title+body scope is the reference design; title-only reproduces the
/// narrower legacy operating point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScoringScope {
    #[default]
    TitleAndBody,
    TitleOnly,
}

/// Accumulated weighted scores for one text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SentimentScores {
    pub positive: u32,
    pub negative: u32,
}

impl SentimentScores {
    /// Absolute difference between the two sides; the classification
    /// certainty proxy.
    pub fn confidence(&self) -> u32 {
        self.positive.abs_diff(self.negative)
    }

    /// Project the verdict under the given minimum-confidence threshold.
    ///
    /// Below the threshold the verdict is `Neutral` regardless of which
    /// side is larger; exact equality is `Neutral` too, reachable only
    /// with a threshold of zero.
    pub fn verdict(&self, min_confidence: u32) -> Sentiment {
        if self.confidence() < min_confidence {
            return Sentiment::Neutral;
        }
        if self.positive > self.negative {
            Sentiment::Positive
        } else if self.negative > self.positive {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

/// An article plus its classification.
///
/// Fields are private: the only way to obtain one is through
/// [`SentimentScorer::classify_article`], so the stored verdict can never
/// drift from the scores it was derived from. Serialize-only for the same
/// reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedArticle {
    #[serde(flatten)]
    article: Article,
    sentiment: Sentiment,
    positive_score: u32,
    negative_score: u32,
    confidence: u32,
}

impl ClassifiedArticle {
    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn sentiment(&self) -> Sentiment {
        self.sentiment
    }

    pub fn positive_score(&self) -> u32 {
        self.positive_score
    }

    pub fn negative_score(&self) -> u32 {
        self.negative_score
    }

    pub fn confidence(&self) -> u32 {
        self.confidence
    }
}

/// Configured scorer: a lexicon, a minimum-confidence threshold, and a
/// scoring scope.
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Lexicon,
    min_confidence: u32,
    scope: ScoringScope,
}

impl SentimentScorer {
    /// The weighted reference design's confidence floor.
    pub const DEFAULT_MIN_CONFIDENCE: u32 = 2;

    pub fn new(lexicon: Lexicon, min_confidence: u32, scope: ScoringScope) -> Self {
        Self {
            lexicon,
            min_confidence,
            scope,
        }
    }

    /// Score a title/body pair. Total over any input; empty text scores
    /// zero on both sides.
    pub fn score(&self, title: &str, body: &str) -> SentimentScores {
        let text = match self.scope {
            ScoringScope::TitleAndBody => format!("{} {}", title, body).to_lowercase(),
            ScoringScope::TitleOnly => title.to_lowercase(),
        };

        let mut scores = SentimentScores {
            positive: 0,
            negative: 0,
        };
        for token in text.split_whitespace() {
            let cleaned: String = token.chars().filter(|c| c.is_alphanumeric()).collect();
            if cleaned.is_empty() {
                continue;
            }
            if let Some(weight) = self.lexicon.positive_weight(&cleaned) {
                scores.positive += weight;
            }
            if let Some(weight) = self.lexicon.negative_weight(&cleaned) {
                scores.negative += weight;
            }
        }
        scores
    }

    /// Classify a normalized article, consuming it.
    pub fn classify_article(&self, article: Article) -> ClassifiedArticle {
        let scores = self.score(&article.title, &article.summary);
        ClassifiedArticle {
            sentiment: scores.verdict(self.min_confidence),
            positive_score: scores.positive,
            negative_score: scores.negative,
            confidence: scores.confidence(),
            article,
        }
    }

    /// Classify a whole acquisition result, preserving order.
    pub fn classify_all(&self, articles: Vec<Article>) -> Vec<ClassifiedArticle> {
        articles
            .into_iter()
            .map(|article| self.classify_article(article))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer_with(
        positive: &[(&str, u32)],
        negative: &[(&str, u32)],
        min_confidence: u32,
    ) -> SentimentScorer {
        let lexicon = Lexicon::new(positive, negative).unwrap();
        SentimentScorer::new(lexicon, min_confidence, ScoringScope::TitleAndBody)
    }

    fn article(title: &str, summary: &str) -> Article {
        Article {
            title: title.to_string(),
            summary: summary.to_string(),
            source: "Test Wire".to_string(),
            published_at: "2025-05-06T08:00:00Z".to_string(),
            url: "#".to_string(),
            url_to_image: None,
        }
    }

    #[test]
    fn test_weighted_multi_hit_scoring() {
        let scorer = scorer_with(&[("great", 2)], &[], 1);
        let classified =
            scorer.classify_article(article("This is great news, truly great", ""));
        assert_eq!(classified.positive_score(), 4);
        assert_eq!(classified.negative_score(), 0);
        assert_eq!(classified.confidence(), 4);
        assert_eq!(classified.sentiment(), Sentiment::Positive);
    }

    #[test]
    fn test_confidence_is_absolute_difference() {
        let scorer = scorer_with(&[("up", 2)], &[("down", 3)], 0);
        let scores = scorer.score("up down", "down");
        assert_eq!(scores.positive, 2);
        assert_eq!(scores.negative, 6);
        assert_eq!(scores.confidence(), 4);
        assert_eq!(scores.verdict(0), Sentiment::Negative);
    }

    #[test]
    fn test_below_threshold_is_neutral_even_when_one_side_leads() {
        let scorer = scorer_with(&[("good", 1)], &[], 2);
        let classified = scorer.classify_article(article("good day", ""));
        assert_eq!(classified.confidence(), 1);
        assert_eq!(classified.sentiment(), Sentiment::Neutral);
    }

    #[test]
    fn test_exact_tie_is_neutral_at_threshold_zero() {
        let scorer = scorer_with(&[("up", 2)], &[("down", 2)], 0);
        let scores = scorer.score("up down", "");
        assert_eq!(scores.confidence(), 0);
        assert_eq!(scores.verdict(0), Sentiment::Neutral);
    }

    #[test]
    fn test_empty_text_scores_zero_and_neutral() {
        let scorer = scorer_with(&[("good", 1)], &[("bad", 1)], 2);
        let scores = scorer.score("", "");
        assert_eq!((scores.positive, scores.negative), (0, 0));
        assert_eq!(scores.verdict(2), Sentiment::Neutral);
    }

    #[test]
    fn test_whole_token_matching_only() {
        let scorer = scorer_with(&[("great", 2)], &[], 1);
        let scores = scorer.score("greatness greater", "");
        assert_eq!(scores.positive, 0);
    }

    #[test]
    fn test_punctuation_stripped_before_lookup() {
        let scorer = scorer_with(&[("great", 2)], &[("crisis", 3)], 1);
        let scores = scorer.score("Great, day!", "A (crisis).");
        assert_eq!(scores.positive, 2);
        assert_eq!(scores.negative, 3);
    }

    #[test]
    fn test_title_only_scope_ignores_body() {
        let lexicon = Lexicon::new(&[("win", 2)], &[("loss", 2)]).unwrap();
        let scorer = SentimentScorer::new(lexicon, 1, ScoringScope::TitleOnly);
        let scores = scorer.score("big win today", "but a loss elsewhere");
        assert_eq!(scores.positive, 2);
        assert_eq!(scores.negative, 0);
    }

    #[test]
    fn test_deterministic_over_repeated_calls() {
        let scorer = scorer_with(&[("rise", 1), ("boost", 2)], &[("fall", 2)], 2);
        let first = scorer.score("Markets rise on boost", "then fall again");
        for _ in 0..10 {
            let next = scorer.score("Markets rise on boost", "then fall again");
            assert_eq!(next, first);
        }
    }

    #[test]
    fn test_classify_all_preserves_order() {
        let scorer = scorer_with(&[("win", 3)], &[("loss", 3)], 2);
        let classified = scorer.classify_all(vec![
            article("win", ""),
            article("loss", ""),
            article("nothing", ""),
        ]);
        let verdicts: Vec<Sentiment> = classified.iter().map(|c| c.sentiment()).collect();
        assert_eq!(
            verdicts,
            vec![Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral]
        );
        assert_eq!(classified[0].article().title, "win");
    }

    #[test]
    fn test_default_lexicon_classifies_layoffs_story() {
        let scorer = SentimentScorer::new(
            Lexicon::news_default().clone(),
            SentimentScorer::DEFAULT_MIN_CONFIDENCE,
            ScoringScope::TitleAndBody,
        );
        let classified = scorer.classify_article(article(
            "Tech Layoffs Continue as Companies Restructure",
            "Major technology companies announce additional job cuts amid market pressure.",
        ));
        // layoffs(2) + cuts(2) + pressure(1)
        assert_eq!(classified.negative_score(), 5);
        assert_eq!(classified.sentiment(), Sentiment::Negative);
    }

    #[test]
    fn test_serialization_exposes_camel_case_scores() {
        let scorer = scorer_with(&[("great", 2)], &[], 1);
        let classified = scorer.classify_article(article("great", "fine"));
        let json = serde_json::to_string(&classified).unwrap();
        assert!(json.contains("\"sentiment\":\"positive\""));
        assert!(json.contains("\"positiveScore\":2"));
        assert!(json.contains("\"negativeScore\":0"));
        assert!(json.contains("\"confidence\":2"));
        assert!(json.contains("\"title\":\"great\""));
    }
}
