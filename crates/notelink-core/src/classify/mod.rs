//! Rule-based tagging and emotional tone
//!
//! Runs on raw text only. Nothing here touches vectors or the cache.

mod concepts;
mod emotion;
mod rules;

use std::fmt;

use serde::Serialize;

pub use concepts::extract_key_concepts;
pub use emotion::{classify_emotional_tone, EmotionalTone, Tone};
pub use rules::{classify_tags, tag_rules, TagRule};

/// Coarse category derived from the tag set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Technical,
    Emotional,
    Business,
    Planning,
    #[default]
    General,
}

impl ContentType {
    /// First category in priority order whose tags are present
    pub fn from_tags(tags: &[String]) -> Self {
        let has = |names: &[&str]| tags.iter().any(|tag| names.contains(&tag.as_str()));

        if has(&[rules::PROGRAMMING, rules::TECHNOLOGY]) {
            ContentType::Technical
        } else if has(&[rules::EMOTION_NEGATIVE, rules::EMOTION_POSITIVE]) {
            ContentType::Emotional
        } else if has(&[rules::BUSINESS, rules::SALES]) {
            ContentType::Business
        } else if has(&[rules::GOALS, rules::PLANNING]) {
            ContentType::Planning
        } else {
            ContentType::General
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentType::Technical => write!(f, "technical"),
            ContentType::Emotional => write!(f, "emotional"),
            ContentType::Business => write!(f, "business"),
            ContentType::Planning => write!(f, "planning"),
            ContentType::General => write!(f, "general"),
        }
    }
}

/// Everything the classifier says about one text
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ContentAnalysis {
    pub tags: Vec<String>,
    pub emotional_tone: EmotionalTone,
    pub key_concepts: Vec<String>,
    pub content_type: ContentType,
}

/// Tags, tone, key concepts and content type of `text`
pub fn classify_content(text: &str) -> ContentAnalysis {
    let tags = classify_tags(text);
    let content_type = ContentType::from_tags(&tags);
    let analysis = ContentAnalysis {
        emotional_tone: classify_emotional_tone(text),
        key_concepts: extract_key_concepts(text),
        content_type,
        tags,
    };

    tracing::debug!(
        content_type = %analysis.content_type,
        tags = analysis.tags.len(),
        concepts = analysis.key_concepts.len(),
        "content classified"
    );
    analysis
}
