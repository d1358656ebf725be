//! Connection finder: nearest notes, suggestions for new text, clusters
//!
//! Every query walks the collection in listing order, one document at a
//! time, pulling vectors through the [`DocumentCache`]. Documents that fail
//! to read are skipped; no query fails because of a single bad note.

mod clusters;

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::log_resource_metrics;
use crate::similarity::{analyze_pair, embed};
use crate::store::{DocumentCache, DocumentSource};

pub use clusters::Cluster;

/// A related document with its score and explanation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Connection {
    pub document_id: String,
    /// Cosine similarity (0.0 to 1.0)
    pub similarity: f64,
    pub reasons: Vec<String>,
}

/// Cache and collection counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub cache_size: usize,
    pub connections_count: usize,
    pub total_documents: usize,
}

/// Runs similarity queries against a document source
pub struct ConnectionFinder<'a, S: DocumentSource + ?Sized> {
    source: &'a S,
    cache: &'a mut DocumentCache,
    config: &'a AnalysisConfig,
}

impl<'a, S: DocumentSource + ?Sized> ConnectionFinder<'a, S> {
    pub fn new(source: &'a S, cache: &'a mut DocumentCache, config: &'a AnalysisConfig) -> Self {
        ConnectionFinder {
            source,
            cache,
            config,
        }
    }

    pub fn config(&self) -> &'a AnalysisConfig {
        self.config
    }

    pub fn source(&self) -> &'a S {
        self.source
    }

    pub fn cache(&self) -> &DocumentCache {
        self.cache
    }

    /// Documents most similar to `source_id`, best first
    ///
    /// Candidates must score strictly above `min_similarity`. The result set
    /// is also remembered in the cache under `source_id`. An unreadable
    /// source yields no connections.
    #[tracing::instrument(skip(self))]
    pub fn find_connected_notes(
        &mut self,
        source_id: &str,
        max_results: usize,
        min_similarity: f64,
    ) -> Result<Vec<Connection>> {
        let source = match self.cache.ensure(self.source, source_id) {
            Ok(entry) => entry,
            Err(e) => {
                warn!(error = %e, "source document unavailable");
                return Ok(Vec::new());
            }
        };

        let mut connections = Vec::new();
        for document in self.source.list_documents()? {
            if document.id == source_id {
                continue;
            }
            let Ok(candidate) = self.cache.ensure(self.source, &document.id) else {
                continue;
            };

            let pair = analyze_pair(&source.text, &source.vector, &candidate.text, &candidate.vector);
            if pair.similarity > min_similarity {
                connections.push(Connection {
                    document_id: document.id,
                    similarity: pair.similarity,
                    reasons: pair.reasons,
                });
            }
        }

        rank(&mut connections, max_results);
        info!(
            found = connections.len(),
            threshold = min_similarity,
            "connections found"
        );
        for connection in &connections {
            debug!(
                target_id = %connection.document_id,
                similarity = connection.similarity,
                reasons = %connection.reasons.join(", "),
                "connection"
            );
        }

        self.cache.store_connections(source_id, connections.clone());
        log_resource_metrics!(self.cache.metrics(), "find_connected_notes");
        Ok(connections)
    }

    /// [`find_connected_notes`](Self::find_connected_notes) with configured limits
    pub fn related(&mut self, source_id: &str) -> Result<Vec<Connection>> {
        let limits = &self.config.connections;
        let (max_results, min_similarity) = (limits.max_results, limits.min_similarity);
        self.find_connected_notes(source_id, max_results, min_similarity)
    }

    /// Existing documents that may relate to text outside the collection
    ///
    /// Only the first `suggestions.scan_limit` listed documents are scanned.
    /// The ad-hoc text is embedded once and never cached.
    pub fn get_suggestions(&mut self, text: &str, max_results: usize) -> Result<Vec<Connection>> {
        self.suggestions_excluding(text, max_results, None)
    }

    /// Like [`get_suggestions`](Self::get_suggestions), never suggesting `exclude_id`
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub fn suggestions_excluding(
        &mut self,
        text: &str,
        max_results: usize,
        exclude_id: Option<&str>,
    ) -> Result<Vec<Connection>> {
        let vector = embed(text);
        let scan_limit = self.config.suggestions.scan_limit;
        let threshold = self.config.suggestions.threshold;

        let mut suggestions = Vec::new();
        for document in self.source.list_documents()?.into_iter().take(scan_limit) {
            if exclude_id == Some(document.id.as_str()) {
                continue;
            }
            let Ok(candidate) = self.cache.ensure(self.source, &document.id) else {
                continue;
            };

            let pair = analyze_pair(text, &vector, &candidate.text, &candidate.vector);
            if pair.similarity > threshold {
                suggestions.push(Connection {
                    document_id: document.id,
                    similarity: pair.similarity,
                    reasons: pair.reasons,
                });
            }
        }

        rank(&mut suggestions, max_results);
        info!(count = suggestions.len(), "suggestions generated");
        log_resource_metrics!(self.cache.metrics(), "get_suggestions");
        Ok(suggestions)
    }

    /// Drop cached vectors and remembered connection results
    pub fn clear_cache(&mut self) {
        log_resource_metrics!(self.cache.metrics(), "clear_cache");
        self.cache.clear();
    }

    pub fn stats(&self) -> Result<Stats> {
        Ok(Stats {
            cache_size: self.cache.len(),
            connections_count: self.cache.connections_len(),
            total_documents: self.source.list_documents()?.len(),
        })
    }

    /// Ensure a cache entry for every listed document, returning how many succeeded
    pub fn warm(&mut self) -> Result<usize> {
        let mut warmed = 0;
        for document in self.source.list_documents()? {
            if self.cache.ensure(self.source, &document.id).is_ok() {
                warmed += 1;
            }
        }
        log_resource_metrics!(self.cache.metrics(), "warm");
        Ok(warmed)
    }
}

/// Sort best first and keep the top `max_results`; ties keep listing order
fn rank(connections: &mut Vec<Connection>, max_results: usize) {
    connections.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
    });
    connections.truncate(max_results);
}
