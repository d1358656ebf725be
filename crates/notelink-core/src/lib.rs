//! Notelink Core Library
//!
//! Content similarity, clustering and rule-based tagging for a collection
//! of Markdown notes.

pub mod analysis;
pub mod classify;
pub mod config;
pub mod connections;
pub mod error;
pub mod format;
pub mod logging;
pub mod records;
pub mod similarity;
pub mod store;
pub mod text;
