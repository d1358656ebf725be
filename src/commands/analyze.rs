//! `notelink analyze` command - full analysis report for one note or a folder

use notelink_core::analysis::{analyze_folder, analyze_note, NoteAnalysis};
use notelink_core::connections::ConnectionFinder;
use notelink_core::error::Result;
use notelink_core::records::{connection_line, quoted};
use notelink_core::store::{DocumentCache, DocumentSource};
use serde_json::json;

use crate::cli::Cli;
use crate::commands::dispatch::Vault;
use crate::commands::format::{print_json, print_records_header, wrap_records_body};
use crate::output_by_format_result;

/// Execute the analyze command for a single note
pub fn execute(cli: &Cli, vault: &Vault, id: &str) -> Result<()> {
    vault.require(id)?;
    let text = vault.store.read_text(id)?;

    let mut cache = DocumentCache::new();
    let mut finder = ConnectionFinder::new(&vault.store, &mut cache, &vault.config);
    let analysis = analyze_note(&mut finder, &text, Some(id))?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({ "id": id, "analysis": analysis })),
        human => {
            println!("Note: {}", id);
            print!("{}", analysis.context_block());
        },
        records => {
            print_records_header("analyze", &note_fields(id, &analysis));
            print_note_records(id, &analysis);
        }
    )
}

/// Execute the analyze command for every note under `prefix`, sharing one cache
pub fn execute_folder(cli: &Cli, vault: &Vault, prefix: &str) -> Result<()> {
    let mut cache = DocumentCache::new();
    let mut finder = ConnectionFinder::new(&vault.store, &mut cache, &vault.config);
    let reports = analyze_folder(&mut finder, prefix)?;

    output_by_format_result!(cli.format,
        json => print_json(&json!({ "folder": prefix, "notes": reports })),
        human => {
            if reports.is_empty() {
                if !cli.quiet {
                    println!("No notes in folder {}", prefix);
                }
            } else {
                for (i, report) in reports.iter().enumerate() {
                    if i > 0 {
                        println!();
                    }
                    println!("Note: {}", report.id);
                    print!("{}", report.analysis.context_block());
                }
                if !cli.quiet {
                    println!();
                    println!("Analyzed {} notes", reports.len());
                }
            }
        },
        records => {
            print_records_header(
                "analyze",
                &[("folder", quoted(prefix)), ("count", reports.len().to_string())],
            );
            for report in &reports {
                let fields: Vec<String> = note_fields(&report.id, &report.analysis)
                    .into_iter()
                    .map(|(key, value)| format!("{}={}", key, value))
                    .collect();
                println!("N {}", fields.join(" "));
                print_note_records(&report.id, &report.analysis);
            }
        }
    )
}

fn note_fields(id: &str, analysis: &NoteAnalysis) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("id", quoted(id)),
        ("content_type", analysis.content.content_type.to_string()),
        ("tone", analysis.content.emotional_tone.tone.to_string()),
    ];
    if analysis.skipped.is_some() {
        fields.push(("skipped", "true".to_string()));
    }
    fields
}

fn print_note_records(id: &str, analysis: &NoteAnalysis) {
    for suggestion in &analysis.suggestions {
        println!("{}", connection_line(suggestion));
    }
    wrap_records_body(id, &analysis.context_block());
}
