//! `notelink clusters` command - greedy grouping of related notes

use notelink_core::connections::ConnectionFinder;
use notelink_core::error::Result;
use notelink_core::records::cluster_line;
use notelink_core::store::DocumentCache;
use serde_json::json;

use crate::cli::Cli;
use crate::commands::dispatch::Vault;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format_result;

/// Execute the clusters command
pub fn execute(cli: &Cli, vault: &Vault, min_size: Option<usize>) -> Result<()> {
    let min_cluster_size = min_size.unwrap_or(vault.config.clusters.min_cluster_size);

    let mut cache = DocumentCache::new();
    let mut finder = ConnectionFinder::new(&vault.store, &mut cache, &vault.config);
    let clusters = finder.find_note_clusters(min_cluster_size)?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({ "clusters": clusters })),
        human => {
            if clusters.is_empty() && !cli.quiet {
                println!("No clusters of {} or more notes", min_cluster_size);
            }
            for cluster in &clusters {
                println!(
                    "{} ({} notes, {} connections)",
                    cluster.topic,
                    cluster.member_ids.len(),
                    cluster.connection_count
                );
                for id in &cluster.member_ids {
                    println!("  {}", id);
                }
            }
        },
        records => {
            print_records_header("clusters", &[("count", clusters.len().to_string())]);
            for cluster in &clusters {
                println!("{}", cluster_line(cluster));
            }
        }
    )
}
