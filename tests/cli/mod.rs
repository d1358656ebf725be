mod analyze;
mod classify;
mod clusters;
mod related;
mod stats;
mod suggest;
pub mod support;
