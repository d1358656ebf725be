//! Key phrase extraction
//!
//! An ordered list of independent matchers. Each contributes at most
//! [`MATCHES_PER_PATTERN`] candidates; the accumulated list is then
//! deduplicated, filtered and capped.

use std::sync::OnceLock;

use regex::Regex;

use crate::text::dedup_preserving_order;

/// Candidates taken from each matcher
const MATCHES_PER_PATTERN: usize = 10;

/// Phrases must be longer than this many characters
const MIN_PHRASE_CHARS: usize = 5;

/// Phrases may span at most this many space-separated words
const MAX_PHRASE_WORDS: usize = 4;

/// Phrases returned per document
const MAX_PHRASES: usize = 20;

/// A named extraction rule
pub struct PhraseMatcher {
    pub name: &'static str,
    pub pattern: Regex,
}

static MATCHERS: OnceLock<Vec<PhraseMatcher>> = OnceLock::new();

/// The matchers in application order
pub fn matchers() -> &'static [PhraseMatcher] {
    MATCHERS.get_or_init(|| {
        [
            // Two or three word runs
            ("cyrillic_words", r"(?i)\b[а-яё]+\s+[а-яё]+(?:\s+[а-яё]+)?\b"),
            ("latin_words", r"(?i)\b[a-z]+\s+[a-z]+(?:\s+[a-z]+)?\b"),
            // Technical terms
            ("capitalized_term", r"\b[A-Z][a-z]+(?:[A-Z][a-z]+)*\b"),
            ("acronym_suffix", r"(?i)\b\w+(?:API|SDK|DB|UI|UX)\b"),
            // Dates and durations
            (
                "date",
                r"(?i)\d{1,2}\s*(?:января|февраля|марта|апреля|мая|июня|июля|августа|сентября|октября|ноября|декабря)\s*\d{2,4}",
            ),
            ("duration", r"(?i)\d+\s*(?:лет|месяц|день|час|минут|секунд)"),
        ]
        .into_iter()
        .map(|(name, pattern)| PhraseMatcher {
            name,
            pattern: Regex::new(pattern).expect("Invalid key phrase pattern"),
        })
        .collect()
    })
}

/// Run one matcher, keeping its first candidates
pub fn match_phrases(matcher: &PhraseMatcher, text: &str) -> Vec<String> {
    matcher
        .pattern
        .find_iter(text)
        .take(MATCHES_PER_PATTERN)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract up to 20 key phrases from `text`
pub fn extract_key_phrases(text: &str) -> Vec<String> {
    let candidates: Vec<String> = matchers()
        .iter()
        .flat_map(|matcher| match_phrases(matcher, text))
        .collect();

    dedup_preserving_order(candidates)
        .into_iter()
        .filter(|phrase| {
            phrase.chars().count() > MIN_PHRASE_CHARS
                && phrase.trim().split(' ').count() <= MAX_PHRASE_WORDS
        })
        .take(MAX_PHRASES)
        .collect()
}
