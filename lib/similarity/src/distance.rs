//! Set-overlap similarity
//!
//! All scores are in range [0.0, 1.0] where 1.0 means identical token sets.

use stylesim_core::TokenSet;

/// Jaccard similarity `|A ∩ B| / |A ∪ B|`.
///
/// Two empty sets carry no information and score 0.0.
pub fn score(a: &TokenSet, b: &TokenSet) -> f32 {
    let intersection = intersection_len(a, b);
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        return 0.0;
    }
    intersection as f32 / union as f32
}

/// Number of tokens present in both sets
pub fn intersection_len(a: &TokenSet, b: &TokenSet) -> usize {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(|token| large.contains(*token)).count()
}
