use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::rules::stem_pattern;
use crate::text::word_count;

/// Matched words quoted per tone in the details
const DETAIL_WORDS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Positive,
    Negative,
    #[default]
    Neutral,
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tone::Positive => write!(f, "positive"),
            Tone::Negative => write!(f, "negative"),
            Tone::Neutral => write!(f, "neutral"),
        }
    }
}

/// Dominant tone of a text with a density-based confidence
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct EmotionalTone {
    pub tone: Tone,
    /// `min(matches / (words / 10), 1)`; a density heuristic, not a probability
    pub confidence: f64,
    /// `"<tone>: word, word, word"` for every tone with matches
    pub details: Vec<String>,
}

static TONE_PATTERNS: OnceLock<Vec<(Tone, Regex)>> = OnceLock::new();

/// Tone patterns in evaluation order; earlier tones win ties
fn tone_patterns() -> &'static [(Tone, Regex)] {
    TONE_PATTERNS.get_or_init(|| {
        vec![
            (
                Tone::Positive,
                stem_pattern("хорошо|отлично|рад|счастлив|доволен|мотивирован|вдохновлен|успешно|получилось"),
            ),
            (
                Tone::Negative,
                stem_pattern("плохо|ужасно|расстроен|злой|грустно|депрессия|тревога|провал|не получается"),
            ),
            (
                Tone::Neutral,
                stem_pattern("нормально|обычно|как всегда|стандартно|привычно"),
            ),
        ]
    })
}

/// Pick the tone with the strictly highest match count
pub fn classify_emotional_tone(text: &str) -> EmotionalTone {
    let mut best = EmotionalTone::default();
    let mut best_score = 0;

    for (tone, pattern) in tone_patterns() {
        let found: Vec<&str> = pattern.find_iter(text).map(|m| m.as_str()).collect();
        if found.len() > best_score {
            best_score = found.len();
            best.tone = *tone;
        }
        if !found.is_empty() {
            let quoted: Vec<&str> = found.iter().take(DETAIL_WORDS).copied().collect();
            best.details.push(format!("{}: {}", tone, quoted.join(", ")));
        }
    }

    best.confidence = confidence(best_score, word_count(text));
    tracing::trace!(tone = %best.tone, confidence = best.confidence, "emotional tone");
    best
}

fn confidence(matches: usize, words: usize) -> f64 {
    if words == 0 {
        return 0.0;
    }
    (matches as f64 / (words as f64 / 10.0)).min(1.0)
}
