//! # stylesim Core
//!
//! Core library for the stylesim product recommender.
//!
//! This crate provides the catalog side of the system:
//!
//! - [`ProductRecord`] - A product with its precomputed description tokens
//! - [`Catalog`] - Ordered, read-only product collection loaded from CSV
//! - [`Normalizer`] - Lowercase, whitespace tokenization and stop-word removal
//! - [`StopWords`] - Built-in English stop words or a caller-supplied list
//!
//! ## Example
//!
//! ```rust
//! use stylesim_core::{Catalog, Normalizer};
//!
//! let csv = "ProductID,ProductName,ProductBrand,Gender,PrimaryColor,Description\n\
//!            1,Red Shirt,Roadster,Men,Red,A red cotton shirt\n";
//! let normalizer = Normalizer::english();
//! let catalog = Catalog::from_reader(csv.as_bytes(), &normalizer).unwrap();
//!
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.records()[0].normalized_description(), "red cotton shirt");
//! ```

pub mod catalog;
pub mod error;
pub mod product;
pub mod stopwords;
pub mod text;

pub use catalog::Catalog;
pub use error::{DataLoadError, Error, Result};
pub use product::{coerce_color, Gender, ProductRecord, UNKNOWN_COLOR};
pub use stopwords::StopWords;
pub use text::{Normalizer, TokenSet};

use std::path::Path;

/// Load a catalog using the built-in English stop words.
pub fn build_catalog(path: impl AsRef<Path>) -> std::result::Result<Catalog, DataLoadError> {
    Catalog::from_path(path, &Normalizer::english())
}
