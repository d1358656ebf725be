//! `notelink classify` command - tags, tone and key concepts for text

use notelink_core::classify::{classify_content, ContentAnalysis};
use notelink_core::error::Result;
use notelink_core::records::quoted;

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format_result;

/// Execute the classify command
pub fn execute(cli: &Cli, text: &str) -> Result<()> {
    let analysis = classify_content(text);

    output_by_format_result!(cli.format,
        json => print_json(&analysis),
        human => { print_human(&analysis); },
        records => { print_records(&analysis); }
    )
}

fn print_human(analysis: &ContentAnalysis) {
    let tone = &analysis.emotional_tone;
    println!("Tags: {}", join_or_none(&analysis.tags));
    println!(
        "Emotional tone: {} (confidence {:.2})",
        tone.tone, tone.confidence
    );
    for detail in &tone.details {
        println!("  {}", detail);
    }
    println!("Key concepts: {}", join_or_none(&analysis.key_concepts));
    println!("Content type: {}", analysis.content_type);
}

fn print_records(analysis: &ContentAnalysis) {
    let tone = &analysis.emotional_tone;
    print_records_header(
        "classify",
        &[
            ("content_type", analysis.content_type.to_string()),
            ("tone", tone.tone.to_string()),
            ("confidence", format!("{:.2}", tone.confidence)),
        ],
    );
    for tag in &analysis.tags {
        println!("T {}", tag);
    }
    for detail in &tone.details {
        println!("E {}", quoted(detail));
    }
    for concept in &analysis.key_concepts {
        println!("W {}", quoted(concept));
    }
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
