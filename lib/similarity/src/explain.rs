//! Explainability for recommendation results
//!
//! Serializable views of a ranked list, showing which query tokens each
//! product matched.

use crate::recommend::SimilarityResult;
use serde::Serialize;
use stylesim_core::{Gender, TokenSet};

/// A recommended product with the tokens it shared with the query
#[derive(Debug, Clone, Serialize)]
pub struct ExplainedResult {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub gender: Gender,
    pub primary_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub score: f32,
    /// Query tokens found in the product description, sorted
    pub matched_tokens: Vec<String>,
}

impl ExplainedResult {
    pub fn from_result(result: &SimilarityResult<'_>, query_tokens: &TokenSet) -> Self {
        let record = result.record;
        let mut matched_tokens: Vec<String> = query_tokens
            .iter()
            .filter(|token| record.tokens().contains(*token))
            .cloned()
            .collect();
        matched_tokens.sort();

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            brand: record.brand.clone(),
            gender: record.gender,
            primary_color: record.primary_color.clone(),
            price: record.price,
            score: result.score,
            matched_tokens,
        }
    }
}

/// Summary statistics for a recommendation query
#[derive(Debug, Clone, Serialize)]
pub struct RecommendStats {
    /// Number of catalog records considered
    pub candidates_count: usize,
    pub results_count: usize,
    pub avg_score: f32,
    pub best_score: f32,
}

impl RecommendStats {
    pub fn compute(results: &[SimilarityResult<'_>], candidates_count: usize) -> Self {
        if results.is_empty() {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: 0.0,
            };
        }

        let total: f32 = results.iter().map(|r| r.score).sum();
        Self {
            candidates_count,
            results_count: results.len(),
            avg_score: total / results.len() as f32,
            // results are sorted
            best_score: results[0].score,
        }
    }
}

/// Response body for a recommendation request
#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub query: String,
    /// Normalized query tokens, sorted
    pub query_tokens: Vec<String>,
    pub result: Vec<ExplainedResult>,
    pub stats: RecommendStats,
}

impl RecommendResponse {
    pub fn from_results(
        query: &str,
        query_tokens: &TokenSet,
        results: &[SimilarityResult<'_>],
        candidates_count: usize,
    ) -> Self {
        let mut sorted_tokens: Vec<String> = query_tokens.iter().cloned().collect();
        sorted_tokens.sort();

        Self {
            query: query.to_string(),
            query_tokens: sorted_tokens,
            result: results
                .iter()
                .map(|r| ExplainedResult::from_result(r, query_tokens))
                .collect(),
            stats: RecommendStats::compute(results, candidates_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Recommender;
    use std::sync::Arc;
    use stylesim_core::{Catalog, Normalizer, ProductRecord};

    fn recommender() -> Recommender {
        let n = Normalizer::english();
        let records = vec![
            ProductRecord::new("1", "Red Shirt", Some("red cotton shirt"), &n)
                .with_brand("Roadster")
                .with_gender(Gender::Men)
                .with_primary_color(Some("Red"))
                .with_price(Some(799.0)),
            ProductRecord::new("2", "Blue Dress", Some("blue silk dress"), &n)
                .with_gender(Gender::Women),
        ];
        Recommender::new(Arc::new(Catalog::from_records(records, n).unwrap()))
    }

    #[test]
    fn test_explained_response() {
        let response = recommender().recommend_explained("The Red Shirt", 2).unwrap();

        assert_eq!(response.query_tokens, vec!["red", "shirt"]);
        assert_eq!(response.result.len(), 2);
        assert_eq!(response.result[0].id, "1");
        assert_eq!(response.result[0].matched_tokens, vec!["red", "shirt"]);
        assert!(response.result[1].matched_tokens.is_empty());

        assert_eq!(response.stats.candidates_count, 2);
        assert_eq!(response.stats.results_count, 2);
        assert!((response.stats.best_score - 2.0 / 3.0).abs() < 1e-6);
        assert!((response.stats.avg_score - 1.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_response_json() {
        let response = recommender().recommend_explained("red shirt", 1).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["result"][0]["gender"], "Men");
        assert_eq!(json["result"][0]["primary_color"], "Red");
        assert_eq!(json["result"][0]["price"], 799.0);
        assert_eq!(json["stats"]["results_count"], 1);
    }

    #[test]
    fn test_empty_stats() {
        let stats = RecommendStats::compute(&[], 0);
        assert_eq!(stats.results_count, 0);
        assert_eq!(stats.best_score, 0.0);
    }
}
