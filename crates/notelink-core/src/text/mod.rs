//! Text processing utilities for tokenization and word overlap

/// Tokens must be longer than this many characters
const MIN_TOKEN_CHARS: usize = 2;

/// Letters the tokenizer keeps: Latin (including accented Latin-1/Extended-A/B) and Cyrillic
fn is_token_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
        || (c.is_alphabetic() && ('\u{00C0}'..='\u{024F}').contains(&c))
        || (c.is_alphabetic() && ('\u{0400}'..='\u{04FF}').contains(&c))
}

/// Lowercase token stream used by the vectorizer
///
/// Every character that is not a Latin or Cyrillic letter (digits and
/// punctuation included) becomes a separator. Tokens of two characters or
/// fewer are dropped. Order and duplicates are preserved.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !is_token_letter(c))
        .filter(|s| s.chars().count() > MIN_TOKEN_CHARS)
        .map(|s| s.to_string())
        .collect()
}

/// Lowercased whitespace-separated words longer than `min_chars` characters
///
/// Unlike [`tokenize`], punctuation stays attached to the word.
pub fn long_words(text: &str, min_chars: usize) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > min_chars)
        .map(|w| w.to_string())
        .collect()
}

/// Number of whitespace-separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Keep the last `max_chars` characters of `text`
pub fn tail_chars(text: &str, max_chars: usize) -> &str {
    let total = text.chars().count();
    if total <= max_chars {
        return text;
    }
    match text.char_indices().nth(total - max_chars) {
        Some((idx, _)) => &text[idx..],
        None => "",
    }
}

/// Remove duplicates while keeping the first occurrence of each item
pub fn dedup_preserving_order(items: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
