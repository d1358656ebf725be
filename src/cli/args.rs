//! Command argument structures

use std::path::PathBuf;

use clap::Args;

use super::parse::parse_similarity;

/// Where to read ad-hoc text from. Stdin is used when neither flag is given.
#[derive(Args, Debug, Default)]
pub struct InputArgs {
    /// Read text from a file
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Use the given text
    #[arg(long)]
    pub text: Option<String>,
}

/// Arguments for the related command.
#[derive(Args, Debug)]
pub struct RelatedArgs {
    /// Note ID (vault-relative path, e.g. projects/plan.md)
    pub id: String,

    /// Maximum number of related notes
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Minimum similarity (0.0 to 1.0, exclusive)
    #[arg(long, value_parser = parse_similarity)]
    pub min_similarity: Option<f64>,
}

/// Arguments for the suggest command.
#[derive(Args, Debug)]
pub struct SuggestArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum number of suggestions
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,
}

/// Arguments for the clusters command.
#[derive(Args, Debug)]
pub struct ClustersArgs {
    /// Minimum number of notes in a cluster
    #[arg(long)]
    pub min_size: Option<usize>,
}

/// Arguments for the analyze command.
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Note ID (vault-relative path)
    #[arg(required_unless_present = "folder", conflicts_with = "folder")]
    pub id: Option<String>,

    /// Analyze every note whose ID starts with this prefix (e.g. "journal/")
    #[arg(long)]
    pub folder: Option<String>,
}

/// Arguments for the stats command.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Load every note into the cache before reporting
    #[arg(long)]
    pub warm: bool,

    /// Clear the cache before reporting
    #[arg(long)]
    pub clear: bool,
}
