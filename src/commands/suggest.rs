//! `notelink suggest` command - existing notes related to new text

use notelink_core::connections::ConnectionFinder;
use notelink_core::error::Result;
use notelink_core::records::connection_line;
use notelink_core::store::DocumentCache;
use serde_json::json;

use crate::cli::Cli;
use crate::commands::dispatch::Vault;
use crate::commands::format::{print_connections_human, print_json, print_records_header};
use crate::output_by_format_result;

/// Execute the suggest command
pub fn execute(cli: &Cli, vault: &Vault, text: &str, limit: Option<usize>) -> Result<()> {
    let max_results = limit.unwrap_or(vault.config.suggestions.max_results);

    let mut cache = DocumentCache::new();
    let mut finder = ConnectionFinder::new(&vault.store, &mut cache, &vault.config);
    let suggestions = finder.get_suggestions(text, max_results)?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({ "suggestions": suggestions })),
        human => {
            if suggestions.is_empty() {
                if !cli.quiet {
                    println!("No suggestions");
                }
            } else {
                println!("Suggested links:");
                print_connections_human(&suggestions);
            }
        },
        records => {
            print_records_header("suggest", &[("count", suggestions.len().to_string())]);
            for suggestion in &suggestions {
                println!("{}", connection_line(suggestion));
            }
        }
    )
}
