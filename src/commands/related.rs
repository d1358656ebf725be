//! `notelink related` command - notes similar to a note in the vault

use notelink_core::connections::ConnectionFinder;
use notelink_core::error::Result;
use notelink_core::records::{connection_line, quoted};
use notelink_core::store::DocumentCache;
use serde_json::json;

use crate::cli::Cli;
use crate::commands::dispatch::Vault;
use crate::commands::format::{print_connections_human, print_json, print_records_header};
use crate::output_by_format_result;

/// Execute the related command
pub fn execute(
    cli: &Cli,
    vault: &Vault,
    id: &str,
    limit: Option<usize>,
    min_similarity: Option<f64>,
) -> Result<()> {
    vault.require(id)?;

    let mut cache = DocumentCache::new();
    let mut finder = ConnectionFinder::new(&vault.store, &mut cache, &vault.config);
    let connections = match (limit, min_similarity) {
        (None, None) => finder.related(id)?,
        (limit, min_similarity) => finder.find_connected_notes(
            id,
            limit.unwrap_or(vault.config.connections.max_results),
            min_similarity.unwrap_or(vault.config.connections.min_similarity),
        )?,
    };
    let min_similarity = min_similarity.unwrap_or(vault.config.connections.min_similarity);

    output_by_format_result!(cli.format,
        json => print_json(&json!({
            "source": id,
            "min_similarity": min_similarity,
            "connections": connections,
        })),
        human => {
            if connections.is_empty() {
                if !cli.quiet {
                    println!("No related notes found for {}", id);
                }
            } else {
                println!("Related to {}:", id);
                print_connections_human(&connections);
            }
        },
        records => {
            print_records_header(
                "related",
                &[("source", quoted(id)), ("count", connections.len().to_string())],
            );
            for connection in &connections {
                println!("{}", connection_line(connection));
            }
        }
    )
}
