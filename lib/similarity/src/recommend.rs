//! Catalog ranking
//!
//! Scores every record's description tokens against a normalized query and
//! returns the best matches. Ranking is a stable sort on score, so records
//! with equal scores keep their catalog order.

use crate::config::RecommenderConfig;
use crate::distance::score;
use crate::explain::RecommendResponse;
use crate::index::TokenIndex;
use std::sync::Arc;
use stylesim_core::{Catalog, Error, Normalizer, ProductRecord, Result, TokenSet};

/// A catalog record paired with its similarity to the query
#[derive(Debug, Clone, Copy)]
pub struct SimilarityResult<'a> {
    pub record: &'a ProductRecord,
    /// Position of the record in the catalog
    pub position: usize,
    pub score: f32,
}

fn check_top_n(top_n: usize) -> Result<()> {
    if top_n == 0 {
        return Err(Error::InvalidArgument(
            "top_n must be a positive integer".to_string(),
        ));
    }
    Ok(())
}

/// Score every record against `query` and return the `top_n` best.
///
/// The query is normalized with the catalog's own normalizer. Returns
/// `min(top_n, catalog.len())` results sorted by score descending; equal
/// scores keep catalog order. Fails only when `top_n` is zero.
pub fn recommend<'a>(
    catalog: &'a Catalog,
    query: &str,
    top_n: usize,
) -> Result<Vec<SimilarityResult<'a>>> {
    check_top_n(top_n)?;
    let query_tokens = catalog.normalizer().normalize(Some(query));
    Ok(rank_linear(catalog, &query_tokens, top_n))
}

/// Full scan over the catalog
fn rank_linear<'a>(catalog: &'a Catalog, query: &TokenSet, top_n: usize) -> Vec<SimilarityResult<'a>> {
    let mut results: Vec<SimilarityResult<'a>> = catalog
        .iter()
        .enumerate()
        .map(|(position, record)| SimilarityResult {
            record,
            position,
            score: score(query, record.tokens()),
        })
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(top_n);
    results
}

/// Score only records sharing a token with the query, then pad with
/// zero-score records in catalog order. Same output as [`rank_linear`].
fn rank_indexed<'a>(
    catalog: &'a Catalog,
    index: &TokenIndex,
    query: &TokenSet,
    top_n: usize,
) -> Vec<SimilarityResult<'a>> {
    let records = catalog.records();
    let candidates = index.candidates(query);

    let mut results: Vec<SimilarityResult<'a>> = candidates
        .iter()
        .map(|&position| SimilarityResult {
            record: &records[position],
            position,
            score: score(query, records[position].tokens()),
        })
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(top_n);

    if results.len() < top_n {
        let mut next_candidate = candidates.iter().peekable();
        for (position, record) in records.iter().enumerate() {
            if results.len() == top_n {
                break;
            }
            if next_candidate.peek() == Some(&&position) {
                next_candidate.next();
                continue;
            }
            results.push(SimilarityResult {
                record,
                position,
                score: 0.0,
            });
        }
    }

    results
}

/// Recommendation entry point shared by callers.
///
/// Holds an immutable catalog and carries no per-query state, so a single
/// instance can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
    config: RecommenderConfig,
    index: Option<Arc<TokenIndex>>,
}

impl Recommender {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            config: RecommenderConfig::default(),
            index: None,
        }
    }

    /// Apply a validated config, building the token index if it asks for one.
    pub fn with_config(mut self, config: RecommenderConfig) -> Result<Self> {
        config.validate()?;
        let use_index = config.use_index;
        self.config = config;
        if use_index {
            self = self.with_index();
        } else {
            self.index = None;
        }
        Ok(self)
    }

    /// Build the inverted token index for candidate pruning.
    #[must_use]
    pub fn with_index(mut self) -> Self {
        if self.index.is_none() {
            self.index = Some(Arc::new(TokenIndex::build(&self.catalog)));
        }
        self.config.use_index = true;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The catalog's normalizer, applied to every query
    pub fn normalizer(&self) -> &Normalizer {
        self.catalog.normalizer()
    }

    pub fn config(&self) -> &RecommenderConfig {
        &self.config
    }

    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Rank the catalog against `query`.
    pub fn recommend(&self, query: &str, top_n: usize) -> Result<Vec<SimilarityResult<'_>>> {
        check_top_n(top_n)?;
        let query_tokens = self.normalizer().normalize(Some(query));
        Ok(self.rank(&query_tokens, top_n))
    }

    /// Rank using the configured default count.
    pub fn recommend_default(&self, query: &str) -> Result<Vec<SimilarityResult<'_>>> {
        self.recommend(query, self.config.default_top_n)
    }

    /// Rank the catalog against the name of the selected product.
    pub fn recommend_for_name(&self, name: &str, top_n: usize) -> Result<Vec<SimilarityResult<'_>>> {
        let record = self
            .catalog
            .find_by_name(name)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown product name: {name}")))?;
        self.recommend(&record.name, top_n)
    }

    /// Rank the catalog against the name of the product with this id.
    pub fn recommend_for_id(&self, id: &str, top_n: usize) -> Result<Vec<SimilarityResult<'_>>> {
        let record = self
            .catalog
            .get(id)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown product id: {id}")))?;
        self.recommend(&record.name, top_n)
    }

    /// Rank and package the results with matched tokens and summary stats.
    pub fn recommend_explained(&self, query: &str, top_n: usize) -> Result<RecommendResponse> {
        check_top_n(top_n)?;
        let query_tokens = self.normalizer().normalize(Some(query));
        let results = self.rank(&query_tokens, top_n);
        Ok(RecommendResponse::from_results(
            query,
            &query_tokens,
            &results,
            self.catalog.len(),
        ))
    }

    fn rank(&self, query: &TokenSet, top_n: usize) -> Vec<SimilarityResult<'_>> {
        let results = match &self.index {
            Some(index) => rank_indexed(&self.catalog, index, query, top_n),
            None => rank_linear(&self.catalog, query, top_n),
        };
        tracing::debug!(
            query_tokens = query.len(),
            catalog = self.catalog.len(),
            indexed = self.index.is_some(),
            results = results.len(),
            "ranked catalog"
        );
        results
    }
}
