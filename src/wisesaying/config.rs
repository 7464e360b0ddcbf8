use crate::commands::export::DEFAULT_EXPORT_PATH;
use crate::commands::list::DEFAULT_PAGE_SIZE;
use crate::error::{Result, WiseError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for a quote store, read from `<store dir>/config.json`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct WiseConfig {
    /// Quotes shown per list page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Where the `빌드` command writes its JSON export
    #[serde(default = "default_export_path")]
    pub export_path: PathBuf,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_export_path() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_PATH)
}

impl Default for WiseConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            export_path: default_export_path(),
        }
    }
}

impl WiseConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(WiseError::Io)?;
        let mut config: WiseConfig =
            serde_json::from_str(&content).map_err(WiseError::Serialization)?;
        config.set_page_size(config.page_size);
        Ok(config)
    }

    /// Set the page size; 0 falls back to the default
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };
    }
}
