use crate::text::{Normalizer, TokenSet};
use serde::{Deserialize, Serialize};

/// Value stored when a product has no primary colour.
pub const UNKNOWN_COLOR: &str = "Unknown";

/// Target audience of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    Men,
    Women,
    #[default]
    Unisex,
}

impl Gender {
    /// Map a raw cell onto the fixed set. Only the exact values `Men`,
    /// `Women` and `Unisex` are kept; anything else becomes `Unisex`.
    pub fn coerce(raw: Option<&str>) -> Self {
        match raw {
            Some("Men") => Gender::Men,
            Some("Women") => Gender::Women,
            _ => Gender::Unisex,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Men => "Men",
            Gender::Women => "Women",
            Gender::Unisex => "Unisex",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Missing or empty colours become [`UNKNOWN_COLOR`]; anything else passes through.
pub fn coerce_color(raw: Option<&str>) -> String {
    match raw {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => UNKNOWN_COLOR.to_string(),
    }
}

/// A single catalog entry with its precomputed description tokens
#[derive(Debug, Clone, Serialize)]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub brand: String,
    pub gender: Gender,
    pub primary_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    description: String,
    normalized_description: String,
    #[serde(skip)]
    tokens: TokenSet,
}

impl ProductRecord {
    /// Create a record, normalizing `description` once.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: Option<&str>,
        normalizer: &Normalizer,
    ) -> Self {
        let mut record = Self {
            id: id.into(),
            name: name.into(),
            brand: String::new(),
            gender: Gender::Unisex,
            primary_color: UNKNOWN_COLOR.to_string(),
            price: None,
            description: String::new(),
            normalized_description: String::new(),
            tokens: TokenSet::default(),
        };
        record.set_description(description, normalizer);
        record
    }

    #[inline]
    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    #[inline]
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_primary_color(mut self, color: Option<&str>) -> Self {
        self.primary_color = coerce_color(color);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_price(mut self, price: Option<f64>) -> Self {
        self.price = price;
        self
    }

    /// Replace the description and recompute its normalized forms.
    pub fn set_description(&mut self, description: Option<&str>, normalizer: &Normalizer) {
        let tokens = normalizer.tokens(description);
        self.description = description.unwrap_or_default().to_string();
        self.normalized_description = tokens.join(" ");
        self.tokens = tokens.into_iter().collect();
    }

    /// Recompute the normalized forms of the current description.
    pub fn renormalize(&mut self, normalizer: &Normalizer) {
        let tokens = normalizer.tokens(Some(&self.description));
        self.normalized_description = tokens.join(" ");
        self.tokens = tokens.into_iter().collect();
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn normalized_description(&self) -> &str {
        &self.normalized_description
    }

    pub fn tokens(&self) -> &TokenSet {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_coercion() {
        assert_eq!(Gender::coerce(Some("Men")), Gender::Men);
        assert_eq!(Gender::coerce(Some("Women")), Gender::Women);
        assert_eq!(Gender::coerce(Some("Unisex")), Gender::Unisex);
        assert_eq!(Gender::coerce(Some("men")), Gender::Unisex);
        assert_eq!(Gender::coerce(Some(" WOMEN ")), Gender::Unisex);
        assert_eq!(Gender::coerce(Some(" Women ")), Gender::Unisex);
        assert_eq!(Gender::coerce(Some("Boys")), Gender::Unisex);
        assert_eq!(Gender::coerce(Some("Girls")), Gender::Unisex);
        assert_eq!(Gender::coerce(Some("")), Gender::Unisex);
        assert_eq!(Gender::coerce(None), Gender::Unisex);
    }

    #[test]
    fn test_color_coercion() {
        assert_eq!(coerce_color(None), UNKNOWN_COLOR);
        assert_eq!(coerce_color(Some("")), UNKNOWN_COLOR);
        assert_eq!(coerce_color(Some("Navy Blue")), "Navy Blue");
    }

    #[test]
    fn test_record_tokens() {
        let n = Normalizer::english();
        let record = ProductRecord::new("1", "Shirt", Some("A Red shirt for the beach"), &n)
            .with_brand("Roadster")
            .with_gender(Gender::Men);

        assert_eq!(record.description(), "A Red shirt for the beach");
        assert_eq!(record.normalized_description(), "red shirt beach");
        assert_eq!(record.tokens().len(), 3);
        assert!(record.tokens().contains("beach"));
        assert_eq!(record.primary_color, UNKNOWN_COLOR);
    }

    #[test]
    fn test_set_description_recomputes() {
        let n = Normalizer::english();
        let mut record = ProductRecord::new("1", "Dress", Some("blue silk dress"), &n);
        record.set_description(Some("green linen dress"), &n);
        assert!(record.tokens().contains("linen"));
        assert!(!record.tokens().contains("silk"));
        assert_eq!(record.normalized_description(), "green linen dress");
    }

    #[test]
    fn test_renormalize() {
        let mut record = ProductRecord::new("1", "Top", Some("the pink top"), &Normalizer::english());
        record.renormalize(&Normalizer::new(crate::StopWords::none()));
        assert_eq!(record.normalized_description(), "the pink top");
        assert!(record.tokens().contains("the"));
        assert_eq!(record.description(), "the pink top");
    }

    #[test]
    fn test_serialize_skips_tokens() {
        let n = Normalizer::english();
        let record = ProductRecord::new("7", "Kurta", Some("cotton kurta"), &n);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["gender"], "Unisex");
        assert_eq!(json["normalized_description"], "cotton kurta");
        assert!(json.get("tokens").is_none());
        assert!(json.get("price").is_none());
    }
}
