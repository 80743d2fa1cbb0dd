use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub omdb: OmdbConfig,
    #[serde(default)]
    pub search: SearchOptions,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OmdbConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SearchOptions {
    /// Milliseconds a query must stay unchanged before a search fires.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Query dispatched once at browse startup, without debouncing.
    #[serde(default = "default_query")]
    pub default_query: String,
}

fn default_base_url() -> String {
    "https://www.omdbapi.com/".to_string()
}

fn default_debounce_ms() -> u64 {
    500
}

fn default_query() -> String {
    "batman".to_string()
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            default_query: default_query(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.omdb.api_key.is_empty() || self.omdb.api_key == "YOUR_API_KEY" {
            return Err(anyhow::anyhow!(
                "OMDb api_key is not configured; run `movieflix config set-key`"
            ));
        }
        if self.omdb.base_url.is_empty() {
            return Err(anyhow::anyhow!("OMDb base_url cannot be empty"));
        }
        if self.search.debounce_ms == 0 {
            return Err(anyhow::anyhow!("debounce_ms must be greater than zero"));
        }
        Ok(())
    }

    pub fn is_omdb_configured(&self) -> bool {
        !self.omdb.api_key.is_empty() && self.omdb.api_key != "YOUR_API_KEY"
    }
}
