//! # stylesim Similarity
//!
//! Ranks a product catalog against a free-text query by Jaccard similarity
//! of description token sets.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use stylesim_core::{Catalog, Normalizer, ProductRecord};
//! use stylesim_similarity::Recommender;
//!
//! let n = Normalizer::english();
//! let records = vec![
//!     ProductRecord::new("1", "Red Shirt", Some("red cotton shirt"), &n),
//!     ProductRecord::new("2", "Blue Dress", Some("blue silk dress"), &n),
//! ];
//! let catalog = Arc::new(Catalog::from_records(records, n).unwrap());
//!
//! let recommender = Recommender::new(catalog);
//! let results = recommender.recommend("red shirt", 1).unwrap();
//! assert_eq!(results[0].record.id, "1");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Query    │────>│ Normalizer  │────>│  Token set  │
//! │   (text)    │     │ (stop words)│     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!       ┌─────────────┐     ┌─────────────┐      │
//!       │   Catalog   │────>│   Jaccard   │<─────┘
//!       │  (records)  │     │   scoring   │
//!       └─────────────┘     └─────────────┘
//!                                  │
//!                           ┌─────────────┐
//!                           │ stable sort │
//!                           │  + top N    │
//!                           └─────────────┘
//! ```

pub mod config;
pub mod distance;
pub mod explain;
pub mod index;
pub mod recommend;

pub use config::{RecommenderConfig, DEFAULT_TOP_N};
pub use distance::{intersection_len, score};
pub use explain::{ExplainedResult, RecommendResponse, RecommendStats};
pub use index::TokenIndex;
pub use recommend::{recommend, Recommender, SimilarityResult};
