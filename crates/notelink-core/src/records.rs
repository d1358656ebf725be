//! Line builders for records output
//!
//! Every record is one line: a one-letter kind, then `key=value` fields.
//! Free text and document ids are double-quoted, with backslashes and
//! inner quotes escaped, since vault paths may contain spaces.

use crate::connections::{Cluster, Connection};

/// Escape backslashes, then double quotes, for embedding in quoted fields
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('\"', r#"\""#)
}

/// Quote free text, folding newlines into spaces
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_quotes(&s.replace(['\r', '\n'], " ")))
}

/// Header line opening every records document
pub fn header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut parts = vec!["H notelink=1 records=1".to_string(), format!("mode={}", mode)];
    for (key, value) in fields {
        parts.push(format!("{}={}", key, value));
    }
    parts.join(" ")
}

/// `C "<id>" similarity=<0.000> reasons="..."`
pub fn connection_line(connection: &Connection) -> String {
    format!(
        "C {} similarity={:.3} reasons={}",
        quoted(&connection.document_id),
        connection.similarity,
        quoted(&connection.reasons.join("; "))
    )
}

/// `K topic="..." connections=<n> members="<id>","<id>",...`
pub fn cluster_line(cluster: &Cluster) -> String {
    let members: Vec<String> = cluster.member_ids.iter().map(|id| quoted(id)).collect();
    format!(
        "K topic={} connections={} members={}",
        quoted(&cluster.topic),
        cluster.connection_count,
        members.join(",")
    )
}
