//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Analysis configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Related-note lookup defaults
    #[serde(default)]
    pub connections: ConnectionsConfig,

    /// Suggestions for ad-hoc text
    #[serde(default)]
    pub suggestions: SuggestionsConfig,

    /// Greedy cluster discovery
    #[serde(default)]
    pub clusters: ClustersConfig,

    /// Note analysis report
    #[serde(default)]
    pub analysis: NoteAnalysisConfig,

    /// Which files in the vault count as notes
    #[serde(default)]
    pub store: StoreConfig,
}

/// Defaults for `find_connected_notes`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConnectionsConfig {
    #[serde(default = "default_connections_max_results")]
    pub max_results: usize,

    /// Results must score strictly above this
    #[serde(default = "default_connections_min_similarity")]
    pub min_similarity: f64,
}

/// Settings for `get_suggestions`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_suggestions_max_results")]
    pub max_results: usize,

    #[serde(default = "default_suggestions_threshold")]
    pub threshold: f64,

    /// Only the first N listed documents are compared
    #[serde(default = "default_suggestions_scan_limit")]
    pub scan_limit: usize,
}

/// Settings for `find_note_clusters`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClustersConfig {
    #[serde(default = "default_min_cluster_size")]
    pub min_cluster_size: usize,

    /// Neighbor cap for each seed document
    #[serde(default = "default_cluster_neighbor_limit")]
    pub neighbor_limit: usize,

    #[serde(default = "default_cluster_min_similarity")]
    pub min_similarity: f64,

    /// Sort documents by id before the greedy pass
    #[serde(default)]
    pub sort_by_id: bool,
}

/// Settings for `analyze_note`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoteAnalysisConfig {
    /// Notes with fewer trimmed characters are skipped
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,

    /// The snippet keeps the last N characters of the note
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

/// Vault file selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for ConnectionsConfig {
    fn default() -> Self {
        Self {
            max_results: default_connections_max_results(),
            min_similarity: default_connections_min_similarity(),
        }
    }
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            max_results: default_suggestions_max_results(),
            threshold: default_suggestions_threshold(),
            scan_limit: default_suggestions_scan_limit(),
        }
    }
}

impl Default for ClustersConfig {
    fn default() -> Self {
        Self {
            min_cluster_size: default_min_cluster_size(),
            neighbor_limit: default_cluster_neighbor_limit(),
            min_similarity: default_cluster_min_similarity(),
            sort_by_id: false,
        }
    }
}

impl Default for NoteAnalysisConfig {
    fn default() -> Self {
        Self {
            min_chars: default_min_chars(),
            max_chars: default_max_chars(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

fn default_connections_max_results() -> usize {
    5
}

fn default_connections_min_similarity() -> f64 {
    0.1
}

fn default_suggestions_max_results() -> usize {
    3
}

fn default_suggestions_threshold() -> f64 {
    0.05
}

fn default_suggestions_scan_limit() -> usize {
    50
}

fn default_min_cluster_size() -> usize {
    3
}

fn default_cluster_neighbor_limit() -> usize {
    10
}

fn default_cluster_min_similarity() -> f64 {
    0.2
}

fn default_min_chars() -> usize {
    50
}

fn default_max_chars() -> usize {
    6000
}

fn default_extensions() -> Vec<String> {
    vec!["md".to_string()]
}
