//! Output helpers shared by several commands

use notelink_core::connections::Connection;
use notelink_core::error::Result;
use notelink_core::format::percent;
use notelink_core::records;
use serde::Serialize;

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a Records header line
///
/// # Examples
/// ```ignore
/// print_records_header("related", &[("source", records::quoted(id))]);
/// ```
pub fn print_records_header(mode: &str, fields: &[(&str, String)]) {
    println!("{}", records::header(mode, fields));
}

/// Wrap body content in Records format with B and B-END markers
pub fn wrap_records_body(id: &str, body: &str) {
    println!("B {}", records::quoted(id));
    for line in body.lines() {
        println!("{}", line);
    }
    println!("B-END");
}

/// One line per connection: id, percentage, then reasons
pub fn print_connections_human(connections: &[Connection]) {
    for connection in connections {
        if connection.reasons.is_empty() {
            println!(
                "  {}  {}",
                connection.document_id,
                percent(connection.similarity)
            );
        } else {
            println!(
                "  {}  {}  ({})",
                connection.document_id,
                percent(connection.similarity),
                connection.reasons.join("; ")
            );
        }
    }
}
