//! Per-session cache of document text and vectors

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::DocumentSource;
use crate::connections::Connection;
use crate::error::Result;
use crate::logging::ResourceMetrics;
use crate::similarity::{embed, Vector};

/// Text and vector of one document as of `cached_at`
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry {
    pub text: String,
    pub vector: Vector,
    pub cached_at: DateTime<Utc>,
}

impl CacheEntry {
    /// An entry is stale once the document changed after it was captured.
    /// Without a modification time the entry is kept.
    pub fn is_stale(&self, modified: Option<DateTime<Utc>>) -> bool {
        modified.is_some_and(|m| m > self.cached_at)
    }
}

/// Vectors and last connection results, keyed by document id
///
/// Construct one per session and hand it to the
/// [`ConnectionFinder`](crate::connections::ConnectionFinder) by reference.
#[derive(Debug, Default)]
pub struct DocumentCache {
    entries: HashMap<String, Arc<CacheEntry>>,
    connections: HashMap<String, Vec<Connection>>,
    metrics: ResourceMetrics,
}

impl DocumentCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a fresh entry for `id`, re-reading and re-embedding on miss or staleness
    ///
    /// If the read fails the previous entry (if any) is left untouched and
    /// the error is returned; callers skip the document.
    pub fn ensure<S: DocumentSource + ?Sized>(
        &mut self,
        source: &S,
        id: &str,
    ) -> Result<Arc<CacheEntry>> {
        if let Some(entry) = self.entries.get(id) {
            if !entry.is_stale(source.modified_time(id)) {
                self.metrics.record_cache_hit();
                return Ok(Arc::clone(entry));
            }
            debug!(id, "cache entry stale");
        }

        self.metrics.record_cache_miss();
        // Taken before the read: a write landing during the read leaves the entry stale
        let captured = Utc::now();
        let text = match source.read_text(id) {
            Ok(text) => text,
            Err(e) => {
                self.metrics.record_read_failure();
                warn!(id, error = %e, "failed to refresh cache entry");
                return Err(e);
            }
        };

        let entry = Arc::new(CacheEntry {
            vector: embed(&text),
            text,
            cached_at: captured,
        });
        self.entries.insert(id.to_string(), Arc::clone(&entry));
        debug!(id, dimension = entry.vector.len(), "cache entry updated");
        Ok(entry)
    }

    /// Entry for `id` without any freshness check
    pub fn get(&self, id: &str) -> Option<Arc<CacheEntry>> {
        self.entries.get(id).cloned()
    }

    /// Remember the latest connection results for a source document
    pub fn store_connections(&mut self, source_id: &str, connections: Vec<Connection>) {
        self.connections.insert(source_id.to_string(), connections);
    }

    /// Latest connection results computed for `source_id`
    pub fn connections(&self, source_id: &str) -> Option<&[Connection]> {
        self.connections.get(source_id).map(Vec::as_slice)
    }

    /// Number of cached documents
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of source documents with stored connection results
    pub fn connections_len(&self) -> usize {
        self.connections.len()
    }

    /// Drop every entry and stored connection result
    pub fn clear(&mut self) {
        self.entries.clear();
        self.connections.clear();
        self.metrics.reset();
        debug!("cache cleared");
    }

    pub fn metrics(&self) -> &ResourceMetrics {
        &self.metrics
    }
}
