//! Inverted token index
//!
//! Maps each description token to the catalog positions containing it, so a
//! query only scores records that share at least one token with it. Records
//! outside the candidate set score exactly 0.0.

use ahash::{AHashMap, AHashSet};
use stylesim_core::{Catalog, TokenSet};

#[derive(Debug, Clone, Default)]
pub struct TokenIndex {
    // token -> ascending catalog positions
    postings: AHashMap<String, Vec<usize>>,
    total_docs: usize,
}

impl TokenIndex {
    pub fn build(catalog: &Catalog) -> Self {
        let mut postings: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (position, record) in catalog.iter().enumerate() {
            for token in record.tokens() {
                postings.entry(token.clone()).or_default().push(position);
            }
        }
        tracing::debug!(tokens = postings.len(), docs = catalog.len(), "token index built");
        Self {
            postings,
            total_docs: catalog.len(),
        }
    }

    /// Positions sharing at least one token with `query`, ascending.
    pub fn candidates(&self, query: &TokenSet) -> Vec<usize> {
        let mut seen = AHashSet::new();
        let mut positions: Vec<usize> = query
            .iter()
            .filter_map(|token| self.postings.get(token))
            .flatten()
            .copied()
            .filter(|p| seen.insert(*p))
            .collect();
        positions.sort_unstable();
        positions
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Number of catalog records the index was built from
    pub fn total_docs(&self) -> usize {
        self.total_docs
    }
}
