//! Per-note analysis report
//!
//! Combines the classifier with link suggestions and a trailing excerpt of
//! the note, ready to be embedded into a prompt.

use std::fmt::Write as _;

use serde::Serialize;

use crate::classify::{classify_content, ContentAnalysis};
use crate::connections::{Connection, ConnectionFinder};
use crate::error::Result;
use crate::store::DocumentSource;
use crate::text::tail_chars;

/// Analysis of one note
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct NoteAnalysis {
    /// Why the note was not analyzed, if it was not
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<String>,
    #[serde(flatten)]
    pub content: ContentAnalysis,
    pub suggestions: Vec<Connection>,
    /// Trailing part of the note, at most `analysis.max_chars` characters
    pub snippet: String,
}

/// Classify `text` and suggest related notes
///
/// Text shorter than `analysis.min_chars` (after trimming) is skipped.
/// `exclude_id` keeps the note itself out of its own suggestions.
pub fn analyze_note<S: DocumentSource + ?Sized>(
    finder: &mut ConnectionFinder<'_, S>,
    text: &str,
    exclude_id: Option<&str>,
) -> Result<NoteAnalysis> {
    let config = finder.config();
    let chars = text.trim().chars().count();

    if chars < config.analysis.min_chars {
        tracing::debug!(chars, min = config.analysis.min_chars, "note too short");
        return Ok(NoteAnalysis {
            skipped: Some(format!(
                "note too short ({} of {} characters)",
                chars, config.analysis.min_chars
            )),
            ..NoteAnalysis::default()
        });
    }

    let content = classify_content(text);
    let suggestions =
        finder.suggestions_excluding(text, config.suggestions.max_results, exclude_id)?;

    Ok(NoteAnalysis {
        skipped: None,
        content,
        suggestions,
        snippet: tail_chars(text, config.analysis.max_chars).to_string(),
    })
}

/// One note of a folder batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NoteReport {
    pub id: String,
    pub analysis: NoteAnalysis,
}

/// Analyze every listed note whose id starts with `prefix`
///
/// The match is a plain string prefix; an empty prefix or `/` covers the
/// whole collection. Each note is kept out of its own suggestions and
/// notes that cannot be read are skipped.
#[tracing::instrument(skip(finder))]
pub fn analyze_folder<S: DocumentSource + ?Sized>(
    finder: &mut ConnectionFinder<'_, S>,
    prefix: &str,
) -> Result<Vec<NoteReport>> {
    let prefix = prefix.trim_start_matches("./").trim_start_matches('/');
    let source = finder.source();
    let ids: Vec<String> = source
        .list_documents()?
        .into_iter()
        .map(|document| document.id)
        .filter(|id| id.starts_with(prefix))
        .collect();

    let mut reports = Vec::with_capacity(ids.len());
    for id in ids {
        let text = match source.read_text(&id) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(id = %id, error = %e, "skipping unreadable note");
                continue;
            }
        };
        let analysis = analyze_note(finder, &text, Some(&id))?;
        reports.push(NoteReport { id, analysis });
    }

    tracing::info!(notes = reports.len(), "folder analyzed");
    Ok(reports)
}

impl NoteAnalysis {
    /// Plain-text block describing the note, stable for identical input
    pub fn context_block(&self) -> String {
        let mut out = String::new();

        if let Some(reason) = &self.skipped {
            let _ = writeln!(out, "Skipped: {}", reason);
            return out;
        }

        let tone = &self.content.emotional_tone;
        let _ = writeln!(out, "Tags: {}", list_or_none(&self.content.tags));
        let _ = writeln!(
            out,
            "Emotional tone: {} (confidence {:.2})",
            tone.tone, tone.confidence
        );
        let _ = writeln!(
            out,
            "Key concepts: {}",
            list_or_none(&self.content.key_concepts)
        );
        let _ = writeln!(out, "Content type: {}", self.content.content_type);

        if self.suggestions.is_empty() {
            let _ = writeln!(out, "Related notes: none");
        } else {
            let _ = writeln!(out, "Related notes:");
            for suggestion in &self.suggestions {
                let _ = write!(
                    out,
                    "- {} ({:.1}%)",
                    suggestion.document_id,
                    suggestion.similarity * 100.0
                );
                if !suggestion.reasons.is_empty() {
                    let _ = write!(out, ": {}", suggestion.reasons.join("; "));
                }
                out.push('\n');
            }
        }

        let _ = writeln!(out, "Excerpt:");
        let _ = writeln!(out, "{}", self.snippet);
        out
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
