//! Analysis configuration for notelink
//!
//! Configuration is read from `.notelink/config.toml` inside the vault.
//! Every key is optional and falls back to the built-in defaults.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{NotelinkError, Result};

pub use types::{
    AnalysisConfig, ClustersConfig, ConnectionsConfig, NoteAnalysisConfig, StoreConfig,
    SuggestionsConfig,
};

/// Directory inside the vault holding notelink state
pub const CONFIG_DIR: &str = ".notelink";

/// Config file name inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.toml";

impl AnalysisConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AnalysisConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load `<vault>/.notelink/config.toml`, or defaults when it does not exist
    pub fn load_for_vault(vault: &Path) -> Result<Self> {
        let path = vault.join(CONFIG_DIR).join(CONFIG_FILE);
        if path.exists() {
            tracing::debug!(path = %path.display(), "load_config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NotelinkError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<()> {
        check_threshold("connections.min_similarity", self.connections.min_similarity)?;
        check_threshold("suggestions.threshold", self.suggestions.threshold)?;
        check_threshold("clusters.min_similarity", self.clusters.min_similarity)?;

        if self.connections.max_results == 0 {
            bail_invalid!("connections.max_results", 0);
        }
        if self.suggestions.max_results == 0 {
            bail_invalid!("suggestions.max_results", 0);
        }
        if self.clusters.neighbor_limit == 0 {
            bail_invalid!("clusters.neighbor_limit", 0);
        }
        if self.store.extensions.is_empty() {
            bail_invalid!("store.extensions", "[]");
        }

        Ok(())
    }
}

fn check_threshold(context: &str, value: f64) -> Result<()> {
    if !(0.0..1.0).contains(&value) {
        bail_invalid!(context, value);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.connections.max_results, 5);
        assert_eq!(config.connections.min_similarity, 0.1);
        assert_eq!(config.suggestions.max_results, 3);
        assert_eq!(config.suggestions.threshold, 0.05);
        assert_eq!(config.suggestions.scan_limit, 50);
        assert_eq!(config.clusters.min_cluster_size, 3);
        assert_eq!(config.clusters.neighbor_limit, 10);
        assert_eq!(config.clusters.min_similarity, 0.2);
        assert!(!config.clusters.sort_by_id);
        assert_eq!(config.analysis.min_chars, 50);
        assert_eq!(config.analysis.max_chars, 6000);
        assert_eq!(config.store.extensions, vec!["md".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = AnalysisConfig::default();
        config.clusters.sort_by_id = true;
        config.suggestions.scan_limit = 10;
        config.save(&path).unwrap();

        let loaded = AnalysisConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[connections]\nmax_results = 8\n").unwrap();

        let loaded = AnalysisConfig::load(&path).unwrap();
        assert_eq!(loaded.connections.max_results, 8);
        assert_eq!(loaded.connections.min_similarity, 0.1);
        assert_eq!(loaded.clusters, ClustersConfig::default());
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[suggestions]\nthreshold = 1.5\n").unwrap();

        let err = AnalysisConfig::load(&path).unwrap_err();
        assert!(matches!(err, NotelinkError::InvalidValue { .. }));
    }

    #[test]
    fn test_load_for_vault_without_config() {
        let dir = tempdir().unwrap();
        let config = AnalysisConfig::load_for_vault(dir.path()).unwrap();
        assert_eq!(config, AnalysisConfig::default());
    }

    #[test]
    fn test_load_for_vault_with_config() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join(CONFIG_DIR)).unwrap();
        fs::write(
            dir.path().join(CONFIG_DIR).join(CONFIG_FILE),
            "[clusters]\nmin_cluster_size = 2\nsort_by_id = true\n",
        )
        .unwrap();

        let config = AnalysisConfig::load_for_vault(dir.path()).unwrap();
        assert_eq!(config.clusters.min_cluster_size, 2);
        assert!(config.clusters.sort_by_id);
    }
}
