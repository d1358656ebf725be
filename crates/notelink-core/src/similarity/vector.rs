use std::collections::HashMap;
use std::time::Instant;

use crate::text::tokenize;
use crate::trace_time;

use super::Vector;

/// Embed text as a frequency-weighted, unit-length vector
///
/// The vocabulary is the set of distinct tokens of this text alone, in
/// order of first occurrence, so the dimension varies per document. Each
/// token weighs `freq * ln(total / (freq + 1))`, a document-local stand-in
/// for TF-IDF. The result is scaled to unit length unless its magnitude is
/// zero, in which case the all-zero vector is returned as is.
pub fn embed(text: &str) -> Vector {
    let start = Instant::now();
    let tokens = tokenize(text);
    let total = tokens.len() as f64;

    let mut vocabulary: Vec<&str> = Vec::new();
    let mut freqs: HashMap<&str, usize> = HashMap::new();
    for token in &tokens {
        let count = freqs.entry(token.as_str()).or_insert(0);
        if *count == 0 {
            vocabulary.push(token.as_str());
        }
        *count += 1;
    }

    let weights: Vector = vocabulary
        .iter()
        .map(|term| {
            let freq = freqs.get(term).copied().unwrap_or(0) as f64;
            freq * (total / (freq + 1.0)).ln()
        })
        .collect();

    let vector = normalize(weights);
    trace_time!(start, "embed", dimension = vector.len());
    vector
}

/// Scale to unit Euclidean length; zero-magnitude vectors are returned unchanged
pub fn normalize(vector: Vector) -> Vector {
    let magnitude = magnitude(&vector);
    if magnitude == 0.0 {
        return vector;
    }
    vector.into_iter().map(|w| w / magnitude).collect()
}

/// Euclidean norm
pub fn magnitude(vector: &[f64]) -> f64 {
    vector.iter().map(|w| w * w).sum::<f64>().sqrt()
}

/// Cosine similarity clamped to `[0, 1]`
///
/// Vectors of different length come from different vocabularies and are
/// reported as 0.0, as are comparisons involving a zero vector.
pub fn cosine_similarity(vec_a: &[f64], vec_b: &[f64]) -> f64 {
    if vec_a.len() != vec_b.len() {
        tracing::trace!(
            len_a = vec_a.len(),
            len_b = vec_b.len(),
            "dimension mismatch"
        );
        return 0.0;
    }

    let mut dot_product = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;

    for (a, b) in vec_a.iter().zip(vec_b) {
        dot_product += a * b;
        norm_a += a * a;
        norm_b += b * b;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}
