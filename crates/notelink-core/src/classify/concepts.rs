use std::sync::OnceLock;

use regex::Regex;

use crate::text::dedup_preserving_order;

const MATCHES_PER_PATTERN: usize = 5;
const MIN_CONCEPT_CHARS: usize = 3;
const MAX_CONCEPTS: usize = 10;

static CONCEPT_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn concept_patterns() -> &'static [Regex] {
    CONCEPT_PATTERNS.get_or_init(|| {
        [
            // Acronyms
            r"\b[A-Z]{2,}\b",
            r"(?i)\b\w+(?:Script|Lang|Framework|Library)\b",
            // Long capitalized words
            r"\b[А-ЯЁ][а-яё]{5,}\b",
            r"\b[A-Z][a-z]{5,}\b",
            // Quantities
            r"(?i)\d+\s*(?:лет|месяц|день|час|минут|рубл|доллар|процент|%)",
        ]
        .into_iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid concept pattern"))
        .collect()
    })
}

/// Acronyms, technology names, long capitalized words and quantities
///
/// Each pattern contributes its first five matches; the result is
/// deduplicated, limited to concepts longer than three characters and
/// capped at ten.
pub fn extract_key_concepts(text: &str) -> Vec<String> {
    let candidates: Vec<String> = concept_patterns()
        .iter()
        .flat_map(|pattern| {
            pattern
                .find_iter(text)
                .take(MATCHES_PER_PATTERN)
                .map(|m| m.as_str().to_string())
        })
        .collect();

    dedup_preserving_order(candidates)
        .into_iter()
        .filter(|concept| concept.chars().count() > MIN_CONCEPT_CHARS)
        .take(MAX_CONCEPTS)
        .collect()
}
