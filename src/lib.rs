//! # stylesim
//!
//! Content-based fashion product recommendations.
//!
//! stylesim loads a product catalog from CSV, normalizes every description
//! into a token set once, and ranks the whole catalog against a query (usually
//! the name of the product a shopper selected) by Jaccard similarity.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! stylesim --data product_fashion.csv products
//! stylesim --data product_fashion.csv recommend "Roadster Men Navy Blue Slim Fit Shirt" --top-n 5
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use stylesim::prelude::*;
//! use std::sync::Arc;
//!
//! let catalog = build_catalog("product_fashion.csv").unwrap();
//! let recommender = Recommender::new(Arc::new(catalog));
//!
//! for result in recommender.recommend("Navy Blue Slim Fit Shirt", 5).unwrap() {
//!     println!("{:.3} {}", result.score, result.record.name);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `stylesim-core` - Product records, catalog loading, text normalization, stop words
//! - `stylesim-similarity` - Jaccard scoring, ranking, token index, explained results

// Re-export core types
pub use stylesim_core::{
    build_catalog, Catalog, DataLoadError, Error, Gender, Normalizer, ProductRecord, Result,
    StopWords, TokenSet,
};

// Re-export similarity engine
pub use stylesim_similarity::{
    recommend, score, ExplainedResult, RecommendResponse, RecommendStats, Recommender,
    RecommenderConfig, SimilarityResult, TokenIndex, DEFAULT_TOP_N,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        build_catalog, recommend, score, Catalog, DataLoadError, Error, Gender, Normalizer,
        ProductRecord, RecommendResponse, Recommender, RecommenderConfig, Result,
        SimilarityResult, StopWords, DEFAULT_TOP_N,
    };
}
