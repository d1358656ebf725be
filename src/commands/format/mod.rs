//! Shared output formatting helpers for commands

pub mod status;

pub use status::{print_connections_human, print_json, print_records_header, wrap_records_body};
