//! Weighted sentiment lexicons.
//!
//! Two disjoint term tables (positive, negative), each mapping a lowercase
//! word to an integer weight. Immutable at run time; validated when
//! constructed so a term can never score both directions.

use itertools::Itertools;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::error::LexiconError;

const POSITIVE_TERMS: &[(&str, u32)] = &[
    ("breakthrough", 3),
    ("success", 3),
    ("achieve", 2),
    ("improve", 2),
    ("better", 2),
    ("best", 3),
    ("excellent", 3),
    ("amazing", 3),
    ("wonderful", 3),
    ("great", 2),
    ("good", 1),
    ("positive", 2),
    ("win", 2),
    ("victory", 3),
    ("progress", 2),
    ("innovation", 2),
    ("revolutionary", 3),
    ("promising", 2),
    ("saving", 3),
    ("successful", 2),
    ("historic", 2),
    ("record", 1),
    ("growth", 1),
    ("increase", 1),
    ("advance", 2),
    ("develop", 1),
    ("create", 1),
    ("build", 1),
    ("expand", 1),
    ("surge", 1),
    ("rise", 1),
    ("boost", 2),
    ("enhance", 2),
    ("optimize", 1),
];

const NEGATIVE_TERMS: &[(&str, u32)] = &[
    ("crisis", 3),
    ("warning", 2),
    ("problem", 2),
    ("issue", 2),
    ("concern", 2),
    ("threat", 3),
    ("danger", 3),
    ("risk", 2),
    ("failure", 3),
    ("decline", 2),
    ("drop", 2),
    ("fall", 2),
    ("crash", 3),
    ("disaster", 3),
    ("tragedy", 3),
    ("negative", 2),
    ("layoffs", 2),
    ("cuts", 2),
    ("pressure", 1),
    ("volatility", 1),
    ("accelerating", 1),
    ("severe", 2),
    ("worse", 2),
    ("worst", 3),
    ("terrible", 3),
    ("awful", 3),
    ("bad", 1),
    ("poor", 1),
    ("struggle", 2),
    ("challenge", 1),
    ("difficult", 1),
    ("hard", 1),
    ("tough", 1),
    ("loss", 2),
    ("decrease", 1),
    ("reduce", 1),
    ("cut", 1),
    ("eliminate", 2),
    ("remove", 1),
    ("destroy", 3),
];

/// A pair of disjoint term → weight tables.
///
/// Inflected forms are separate entries (`cut` and `cuts` both appear);
/// nothing is stemmed or generated at lookup time.
#[derive(Debug, Clone)]
pub struct Lexicon {
    positive: HashMap<String, u32>,
    negative: HashMap<String, u32>,
}

impl Lexicon {
    /// Build a lexicon from term tables, rejecting overlapping, non-lowercase,
    /// or zero-weight entries.
    pub fn new(
        positive: &[(&str, u32)],
        negative: &[(&str, u32)],
    ) -> Result<Self, LexiconError> {
        for &(term, weight) in positive.iter().chain(negative) {
            if term.is_empty() || term != term.to_lowercase() {
                return Err(LexiconError::NotLowercase(term.to_string()));
            }
            if weight == 0 {
                return Err(LexiconError::ZeroWeight(term.to_string()));
            }
        }
        if let Some(term) = positive
            .iter()
            .chain(negative)
            .map(|(term, _)| *term)
            .duplicates()
            .next()
        {
            return Err(LexiconError::Overlap(term.to_string()));
        }

        let build = |terms: &[(&str, u32)]| {
            terms
                .iter()
                .map(|&(term, weight)| (term.to_string(), weight))
                .collect()
        };
        Ok(Lexicon {
            positive: build(positive),
            negative: build(negative),
        })
    }

    /// The built-in news lexicon (34 positive, 40 negative weighted terms).
    pub fn news_default() -> &'static Lexicon {
        static DEFAULT: Lazy<Lexicon> = Lazy::new(|| {
            Lexicon::new(POSITIVE_TERMS, NEGATIVE_TERMS).expect("builtin term tables are valid")
        });
        &DEFAULT
    }

    /// Positive weight for an already-cleaned lowercase token.
    pub fn positive_weight(&self, token: &str) -> Option<u32> {
        self.positive.get(token).copied()
    }

    /// Negative weight for an already-cleaned lowercase token.
    pub fn negative_weight(&self, token: &str) -> Option<u32> {
        self.negative.get(token).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_lexicon_loads() {
        let lex = Lexicon::news_default();
        assert_eq!(lex.positive_weight("breakthrough"), Some(3));
        assert_eq!(lex.negative_weight("crisis"), Some(3));
        assert_eq!(lex.positive_weight("crisis"), None);
        assert_eq!(lex.negative_weight("nonword"), None);
    }

    #[test]
    fn test_inflected_forms_are_separate_entries() {
        let lex = Lexicon::news_default();
        assert_eq!(lex.negative_weight("cut"), Some(1));
        assert_eq!(lex.negative_weight("cuts"), Some(2));
    }

    #[test]
    fn test_overlapping_term_rejected() {
        let err = Lexicon::new(&[("growth", 1)], &[("growth", 2)]).unwrap_err();
        assert_eq!(err, LexiconError::Overlap("growth".to_string()));
    }

    #[test]
    fn test_duplicate_within_one_table_rejected() {
        let err = Lexicon::new(&[("win", 1), ("win", 2)], &[]).unwrap_err();
        assert_eq!(err, LexiconError::Overlap("win".to_string()));
    }

    #[test]
    fn test_uppercase_term_rejected() {
        let err = Lexicon::new(&[("Win", 1)], &[]).unwrap_err();
        assert_eq!(err, LexiconError::NotLowercase("Win".to_string()));
    }

    #[test]
    fn test_zero_weight_rejected() {
        let err = Lexicon::new(&[("win", 0)], &[]).unwrap_err();
        assert_eq!(err, LexiconError::ZeroWeight("win".to_string()));
    }
}
