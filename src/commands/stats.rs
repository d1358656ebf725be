//! `notelink stats` command - cache and collection counters

use notelink_core::connections::ConnectionFinder;
use notelink_core::error::Result;
use notelink_core::store::DocumentCache;

use crate::cli::Cli;
use crate::commands::dispatch::Vault;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format_result;

/// Execute the stats command
///
/// Every invocation starts with an empty cache; `--warm` fills it first.
pub fn execute(cli: &Cli, vault: &Vault, warm: bool, clear: bool) -> Result<()> {
    let mut cache = DocumentCache::new();
    let mut finder = ConnectionFinder::new(&vault.store, &mut cache, &vault.config);

    if warm {
        let warmed = finder.warm()?;
        tracing::debug!(warmed, "cache warmed");
    }
    if clear {
        finder.clear_cache();
    }
    let stats = finder.stats()?;

    output_by_format_result!(cli.format,
        json => print_json(&stats),
        human => {
            println!("Documents: {}", stats.total_documents);
            println!("Cached: {}", stats.cache_size);
            println!("Connection sets: {}", stats.connections_count);
        },
        records => {
            print_records_header(
                "stats",
                &[
                    ("total_documents", stats.total_documents.to_string()),
                    ("cache_size", stats.cache_size.to_string()),
                    ("connections_count", stats.connections_count.to_string()),
                ],
            );
        }
    )
}
