//! Stop-word lists
//!
//! The default list is the standard English stop-word corpus (179 entries)
//! compiled into the binary. Callers that ship their own linguistic resource
//! can load a plain-text list instead.

use crate::error::DataLoadError;
use ahash::AHashSet;
use std::path::Path;
use std::sync::{Arc, OnceLock};

const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
    "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he",
    "him", "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's",
    "its", "itself", "they", "them", "their", "theirs", "themselves", "what",
    "which", "who", "whom", "this", "that", "that'll", "these", "those", "am", "is",
    "are", "was", "were", "be", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about",
    "against", "between", "into", "through", "during", "before", "after", "above",
    "below", "to", "from", "up", "down", "in", "out", "on", "off", "over", "under",
    "again", "further", "then", "once", "here", "there", "when", "where", "why",
    "how", "all", "any", "both", "each", "few", "more", "most", "other", "some",
    "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
    "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn",
    "couldn't", "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn",
    "hasn't", "haven", "haven't", "isn", "isn't", "ma", "mightn", "mightn't",
    "mustn", "mustn't", "needn", "needn't", "shan", "shan't", "shouldn",
    "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// An immutable set of lowercase words excluded from token sets.
///
/// Cloning is cheap; the underlying set is shared.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: Arc<AHashSet<String>>,
}

impl StopWords {
    /// The built-in English list, built once per process.
    pub fn english() -> Self {
        static ENGLISH_SET: OnceLock<StopWords> = OnceLock::new();
        ENGLISH_SET
            .get_or_init(|| Self::from_words(ENGLISH.iter().copied()))
            .clone()
    }

    /// An empty list; every token survives normalization.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words: Arc::new(words) }
    }

    /// Load a list with one word per line. Blank lines and lines starting
    /// with `#` are skipped.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => DataLoadError::NotFound(path.to_path_buf()),
            _ => DataLoadError::StopWords(format!("{}: {}", path.display(), e)),
        })?;

        let words = Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        );
        tracing::debug!(path = %path.display(), count = words.len(), "loaded stop words");
        Ok(words)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_english_list() {
        let stop = StopWords::english();
        assert_eq!(stop.len(), 179);
        assert!(stop.contains("the"));
        assert!(stop.contains("wouldn't"));
        assert!(!stop.contains("shirt"));
    }

    #[test]
    fn test_english_is_shared() {
        let a = StopWords::english();
        let b = StopWords::english();
        assert!(Arc::ptr_eq(&a.words, &b.words));
    }

    #[test]
    fn test_from_words_lowercases() {
        let stop = StopWords::from_words(["The", " AND ", ""]);
        assert_eq!(stop.len(), 2);
        assert!(stop.contains("the"));
        assert!(stop.contains("and"));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# fashion noise words").unwrap();
        writeln!(file, "Casual").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "solid").unwrap();

        let stop = StopWords::from_file(file.path()).unwrap();
        assert_eq!(stop.len(), 2);
        assert!(stop.contains("casual"));
        assert!(stop.contains("solid"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = StopWords::from_file("/nonexistent/stopwords.txt").unwrap_err();
        assert!(matches!(err, DataLoadError::NotFound(_)));
    }

    #[test]
    fn test_none() {
        assert!(StopWords::none().is_empty());
    }
}
