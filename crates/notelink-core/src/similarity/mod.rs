//! Similarity engine for relating notes
//!
//! Scores come from [`cosine_similarity`] over per-document vectors built by
//! [`embed`]. Reasons come from raw-text overlap signals and are reported
//! alongside the score without affecting it.

mod phrases;

mod signals;

mod vector;

pub use phrases::extract_key_phrases;
pub use signals::{common_phrases, common_terms, explain, headers, similar_structure};
pub use vector::{cosine_similarity, embed, magnitude, normalize};

/// Frequency-weighted embedding, dimensioned by the vocabulary of its own text
pub type Vector = Vec<f64>;

/// Score and explanation for one pair of texts
#[derive(Debug, Clone, PartialEq)]
pub struct PairAnalysis {
    /// Cosine similarity (0.0 to 1.0)
    pub similarity: f64,
    /// Human-readable overlap reasons
    pub reasons: Vec<String>,
}

/// Compare two texts whose vectors are already computed
pub fn analyze_pair(text_a: &str, vec_a: &[f64], text_b: &str, vec_b: &[f64]) -> PairAnalysis {
    PairAnalysis {
        similarity: cosine_similarity(vec_a, vec_b),
        reasons: explain(text_a, text_b),
    }
}
