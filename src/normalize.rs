//! Text normalization: raw article bodies down to bounded plain-text
//! summaries.
//!
//! Feed descriptions arrive as HTML fragments, entity-escaped text, or
//! entire article bodies pasted into the summary field. [`normalize`]
//! reduces all of that to a short plain-text summary:
//!
//! 1. Strip markup tags and character entities, collapse whitespace.
//! 2. If the text looks like full content (over 300 chars, or carrying a
//!    "Read more"-style marker), keep the first two sentences; a text with
//!    no sentence boundary is hard-cut at 150 chars instead.
//! 3. Apply the caller's hard cap, preferring to end on a sentence
//!    terminator found in the back half of the cut.
//!
//! Pure functions, no I/O. All lengths are counted in characters, not
//! bytes, so multi-byte input cannot split a code point.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default hard cap for summaries, in characters.
pub const DEFAULT_SUMMARY_LEN: usize = 200;

/// Returned for empty or markup-only input; never the empty string.
pub const PLACEHOLDER_SUMMARY: &str = "No description available";

/// Above this many characters the text is treated as full article content.
const FULL_CONTENT_LEN: usize = 300;

/// Hard cut used when full content has no sentence boundary to split on.
const SENTENCE_FALLBACK_CUT: usize = 150;

/// Markers that mean the "summary" is really a teaser for the full body.
const BOILERPLATE_MARKERS: [&str; 2] = ["Read more", "Continue reading"];

const ELLIPSIS: &str = "...";

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));
static ENTITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#?[A-Za-z0-9]+;").expect("valid entity pattern"));
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("valid sentence pattern"));

/// Normalize a raw article body into a plain-text summary of at most
/// `max_len` characters.
///
/// Deterministic for identical input; empty or markup-only input yields
/// [`PLACEHOLDER_SUMMARY`].
pub fn normalize(raw: &str, max_len: usize) -> String {
    let stripped = TAG_RE.replace_all(raw, "");
    let stripped = ENTITY_RE.replace_all(&stripped, " ");
    // Unpaired angle brackets survive the tag pattern; drop them so the
    // output never contains tag delimiters.
    let stripped = stripped.replace(['<', '>'], " ");
    let mut text = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.is_empty() {
        return PLACEHOLDER_SUMMARY.to_string();
    }

    let looks_like_full_content = char_len(&text) > FULL_CONTENT_LEN
        || BOILERPLATE_MARKERS.iter().any(|m| text.contains(m));

    if looks_like_full_content {
        let sentences: Vec<&str> = SENTENCE_RE.split(&text).collect();
        if sentences.len() > 1 {
            text = format!("{}.", sentences[..2.min(sentences.len())].join("."));
        } else if char_len(&text) > SENTENCE_FALLBACK_CUT {
            text = char_prefix(&text, SENTENCE_FALLBACK_CUT).trim_end().to_string();
            text.push_str(ELLIPSIS);
        }
    }

    if char_len(&text) <= max_len {
        return text;
    }

    let mut cut = char_prefix(&text, max_len.saturating_sub(ELLIPSIS.len()))
        .trim_end()
        .to_string();
    if let Some(idx) = cut.rfind(['.', '!', '?']) {
        // Ending on a real sentence beats ending on an ellipsis, but only
        // if the terminator sits in the back half of the cut.
        if cut[..idx].chars().count() > max_len / 2 {
            cut.truncate(idx + 1);
            return cut;
        }
    }
    cut.push_str(ELLIPSIS);
    cut
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// The longest prefix of `s` holding at most `n` characters.
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
