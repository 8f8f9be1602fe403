//! Token estimation and compression-potential scoring.
//!
//! Token counts are a character heuristic, not a tokenizer: one token per
//! four UTF-16 code units, rounded up.

use regex::Regex;
use serde::Serialize;
use slim_core::utf16_len;
use std::sync::LazyLock;

use crate::traits::TokenEstimator;

const CHARS_PER_TOKEN: usize = 4;
const LONG_SENTENCE_CHARS: usize = 100;

static RE_VERBOSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:when|in order to|it is important to|you should|please)\b").unwrap()
});
static RE_STOPWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:the|a|an|is|are|was|were|be|been|of|to|in|for|on|with|that|this|it)\b")
        .unwrap()
});
static RE_FILLER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:very|quite|rather|really|actually|basically|essentially)\b").unwrap()
});
static RE_LONG_SENTENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"[^.!?\n]{{{},}}", LONG_SENTENCE_CHARS + 1)).unwrap()
});
static RE_BULLET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-*•][ \t]+").unwrap());

/// `ceil(len / 4)` with length in UTF-16 code units. Empty text is 0 tokens.
pub fn approximate_token_count(text: &str) -> usize {
    utf16_len(text).div_ceil(CHARS_PER_TOKEN)
}

/// The character heuristic behind [`approximate_token_count`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CharHeuristic;

impl TokenEstimator for CharHeuristic {
    fn name(&self) -> &str {
        "chars/4"
    }

    fn count(&self, text: &str) -> usize {
        approximate_token_count(text)
    }
}

/// Raw match counts behind a compression-potential score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PotentialBreakdown {
    pub verbose: usize,
    pub stopwords: usize,
    pub filler: usize,
    pub long_sentences: usize,
    pub bullets: usize,
}

impl PotentialBreakdown {
    pub fn of(text: &str) -> Self {
        Self {
            verbose: RE_VERBOSE.find_iter(text).count(),
            stopwords: RE_STOPWORD.find_iter(text).count(),
            filler: RE_FILLER.find_iter(text).count(),
            long_sentences: RE_LONG_SENTENCE.find_iter(text).count(),
            bullets: RE_BULLET.find_iter(text).count(),
        }
    }

    /// Weighted score, capped at 100 and floored.
    pub fn score(&self) -> u32 {
        let missing_structure = 20usize.saturating_sub(self.bullets);
        let raw = 2.0 * self.verbose as f64
            + 0.5 * self.stopwords as f64
            + 3.0 * self.filler as f64
            + 5.0 * self.long_sentences as f64
            + missing_structure as f64;
        raw.min(100.0).floor() as u32
    }
}

/// Heuristic 0-100 ranking of how much `text` could shrink. Not a
/// readability metric.
pub fn assess_compression_potential(text: &str) -> u32 {
    PotentialBreakdown::of(text).score()
}
