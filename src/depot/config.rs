use crate::error::{DepotError, Result};
use crate::model::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for a depot, stored as `config.json` inside the storage root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepotConfig {
    /// The fixed folder catalog created (idempotently) on startup.
    #[serde(default)]
    pub catalog: Vec<String>,

    /// Results per search page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Maximum number of "similar files" suggestions.
    #[serde(default = "default_similar_limit")]
    pub similar_limit: usize,

    /// Minimum similarity ratio for a suggestion.
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// File extensions accepted by `save_file` (with leading dot).
    /// An empty list admits everything.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,

    /// Upper bound on saved file size, in bytes.
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_similar_limit() -> usize {
    3
}

fn default_similarity_threshold() -> f64 {
    0.3
}

fn default_allowed_extensions() -> Vec<String> {
    [".pdf", ".jpg", ".jpeg", ".png", ".mp4", ".avi", ".mov"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_max_file_size() -> u64 {
    50 * 1024 * 1024
}

impl Default for DepotConfig {
    fn default() -> Self {
        Self {
            catalog: Vec::new(),
            page_size: default_page_size(),
            similar_limit: default_similar_limit(),
            similarity_threshold: default_similarity_threshold(),
            allowed_extensions: default_allowed_extensions(),
            max_file_size: default_max_file_size(),
        }
    }
}

impl DepotConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DepotError::Io)?;
        let config: DepotConfig =
            serde_json::from_str(&content).map_err(DepotError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DepotError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DepotError::Serialization)?;
        fs::write(config_path, content).map_err(DepotError::Io)?;
        Ok(())
    }

    /// True if `filename`'s extension is admitted by the allow-list.
    pub fn extension_allowed(&self, filename: &str) -> bool {
        if self.allowed_extensions.is_empty() {
            return true;
        }
        let ext = match filename.rsplit_once('.') {
            Some((_, ext)) => format!(".{}", ext.to_lowercase()),
            None => return false,
        };
        self.allowed_extensions.iter().any(|a| a.to_lowercase() == ext)
    }
}
