//! Explainable overlap signals between two raw texts
//!
//! These run independently of the vectors and only produce reasons; they
//! never influence the similarity score.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use super::phrases::extract_key_phrases;
use crate::text::{dedup_preserving_order, long_words};

/// Words must be longer than this to count as a shared term
const TERM_MIN_CHARS: usize = 4;

/// Shared term occurrences needed before the signal is reported
const MIN_SHARED_TERMS: usize = 3;

/// Header words must be longer than this to count
const HEADER_WORD_MIN_CHARS: usize = 3;

/// Items listed in a single reason
const REASON_ITEMS: usize = 3;

static HEADER_RE: OnceLock<Regex> = OnceLock::new();

fn header_re() -> &'static Regex {
    HEADER_RE.get_or_init(|| Regex::new(r"(?m)^#{1,6}\s+.+$").expect("Invalid header pattern"))
}

/// Phrases of `text_a` that overlap some phrase of `text_b`
///
/// Two phrases overlap when either contains the other, ignoring case.
pub fn common_phrases(phrases_a: &[String], phrases_b: &[String]) -> Vec<String> {
    let lowered_b: Vec<String> = phrases_b.iter().map(|p| p.to_lowercase()).collect();
    phrases_a
        .iter()
        .filter(|phrase| {
            let lower = phrase.to_lowercase();
            lowered_b
                .iter()
                .any(|other| other.contains(&lower) || lower.contains(other.as_str()))
        })
        .cloned()
        .collect()
}

/// Long words of `text_a` that also occur in `text_b`, one entry per occurrence in `text_a`
pub fn common_terms(text_a: &str, text_b: &str) -> Vec<String> {
    let words_b: HashSet<String> = long_words(text_b, TERM_MIN_CHARS).into_iter().collect();
    long_words(text_a, TERM_MIN_CHARS)
        .into_iter()
        .filter(|word| words_b.contains(word))
        .collect()
}

/// Markdown heading lines (`#` to `######`)
pub fn headers(text: &str) -> Vec<&str> {
    header_re().find_iter(text).map(|m| m.as_str()).collect()
}

/// True when any heading of `text_a` shares a word longer than three characters with a heading of `text_b`
pub fn similar_structure(text_a: &str, text_b: &str) -> bool {
    let headers_a = headers(text_a);
    let headers_b = headers(text_b);
    if headers_a.is_empty() || headers_b.is_empty() {
        return false;
    }

    let words_b: HashSet<String> = headers_b
        .iter()
        .flat_map(|h| h.to_lowercase().split_whitespace().map(str::to_string).collect::<Vec<_>>())
        .collect();

    headers_a.iter().any(|h| {
        h.to_lowercase()
            .split_whitespace()
            .any(|w| w.chars().count() > HEADER_WORD_MIN_CHARS && words_b.contains(w))
    })
}

/// Render the overlap signals as reasons: concepts, then terms, then structure
pub fn explain(text_a: &str, text_b: &str) -> Vec<String> {
    let mut reasons = Vec::new();

    let shared = common_phrases(&extract_key_phrases(text_a), &extract_key_phrases(text_b));
    if !shared.is_empty() {
        reasons.push(format!(
            "Common concepts: {}",
            shared
                .iter()
                .take(REASON_ITEMS)
                .cloned()
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    let terms = common_terms(text_a, text_b);
    if terms.len() >= MIN_SHARED_TERMS {
        let unique = dedup_preserving_order(terms);
        reasons.push(format!(
            "Common terms: {}",
            unique
                .into_iter()
                .take(REASON_ITEMS)
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    if similar_structure(text_a, text_b) {
        reasons.push("Similar section structure".to_string());
    }

    reasons
}
