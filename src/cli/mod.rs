//! CLI argument parsing for notelink
//!
//! Global flags: --root, --config, --format, --quiet, --verbose,
//! --log-level, --log-json

pub mod args;
pub mod format;
pub mod parse;
pub mod paths;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{AnalyzeArgs, ClustersArgs, InputArgs, RelatedArgs, StatsArgs, SuggestArgs};
pub use notelink_core::format::OutputFormat;
use parse::parse_format;

/// Notelink - find related notes, clusters and tags in a Markdown vault
#[derive(Parser, Debug)]
#[command(name = "notelink")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Vault directory (defaults to the current directory)
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    /// Config file (defaults to <root>/.notelink/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format: human, json or records
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug logging and timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "notelink_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show notes related to a note
    Related(RelatedArgs),

    /// Suggest existing notes related to new text
    Suggest(SuggestArgs),

    /// Group related notes into clusters
    Clusters(ClustersArgs),

    /// Suggest tags, emotional tone and key concepts for text
    Classify(InputArgs),

    /// Analyze a note: tags, tone, related notes and an excerpt
    Analyze(AnalyzeArgs),

    /// Show cache and collection counters
    Stats(StatsArgs),
}
