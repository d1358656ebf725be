//! Document access for the analysis engine
//!
//! The engine never owns notes. It sees a collection through
//! [`DocumentSource`], keeps derived vectors in a [`DocumentCache`], and
//! never writes back.

pub mod cache;
pub mod fs;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;

pub use cache::{CacheEntry, DocumentCache};
pub use fs::FsStore;

/// A note as listed by its source
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    /// Unique, stable identifier (vault-relative path for [`FsStore`])
    pub id: String,
    /// Display name, used as a fallback cluster topic
    pub name: String,
    /// Last modification time as of listing
    pub modified: DateTime<Utc>,
}

/// Collection of notes the engine reads from
pub trait DocumentSource {
    /// All documents, in the order the source chooses
    fn list_documents(&self) -> Result<Vec<Document>>;

    /// Current text of a document
    ///
    /// Fails with `ReadFailure` when the document is gone or unreadable.
    fn read_text(&self, id: &str) -> Result<String>;

    /// Current modification time, if the source can tell
    fn modified_time(&self, id: &str) -> Option<DateTime<Utc>>;
}
