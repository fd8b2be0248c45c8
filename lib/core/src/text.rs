//! Text normalization
//!
//! Lowercases, splits on whitespace and drops stop words. There is no
//! punctuation stripping and no stemming: `"shirt,"` and `"shirt"` are
//! different tokens.
//!
//! Splitting uses Unicode `White_Space`, which unlike Python's `str.split()`
//! does not break on the separators `\x1c` to `\x1f`.

use crate::stopwords::StopWords;
use ahash::AHashSet;

/// Unique tokens of a normalized text. Order is irrelevant.
pub type TokenSet = AHashSet<String>;

/// Applies a fixed stop-word list to free text.
#[derive(Debug, Clone)]
pub struct Normalizer {
    stop_words: StopWords,
}

impl Normalizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// Normalizer backed by the built-in English stop words.
    pub fn english() -> Self {
        Self::new(StopWords::english())
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    /// Surviving tokens in their original order, duplicates kept.
    pub fn tokens(&self, text: Option<&str>) -> Vec<String> {
        text.unwrap_or_default()
            .to_lowercase()
            .split_whitespace()
            .filter(|token| !self.stop_words.contains(token))
            .map(str::to_string)
            .collect()
    }

    /// Normalize text into its token set. Absent text yields an empty set.
    pub fn normalize(&self, text: Option<&str>) -> TokenSet {
        self.tokens(text).into_iter().collect()
    }

    /// Normalized text as a single space-joined string.
    pub fn normalize_as_string(&self, text: Option<&str>) -> String {
        self.tokens(text).join(" ")
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::english()
    }
}
