//! CLI commands for notelink

pub mod analyze;
pub mod classify;
pub mod clusters;
pub mod dispatch;
pub mod format;
pub mod input;
pub mod related;
pub mod stats;
pub mod suggest;
