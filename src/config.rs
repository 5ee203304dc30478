use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// NewsAPI credential. When unset, news fetching is skipped entirely.
    #[serde(default)]
    pub news_api_key: Option<String>,
    /// Reserved for a future model-generated commentary pass; loaded but unused.
    #[serde(default)]
    pub openai_api_key: Option<String>,
    #[serde(default = "default_ticker")]
    pub default_ticker: String,
    #[serde(default = "default_news_limit")]
    pub news_limit: usize,
}

fn default_ticker() -> String {
    "AAPL".to_string()
}

fn default_news_limit() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            news_api_key: None,
            openai_api_key: None,
            default_ticker: default_ticker(),
            news_limit: default_news_limit(),
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("marketbrief");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)?;
        }

        Ok(config_dir.join("config.json"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let config = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            let config = Config::default();
            config.save()?;
            config
        };

        Ok(config.with_env_overrides())
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Environment variables fill in keys the file leaves unset. The keys are
    /// never written back to disk.
    fn with_env_overrides(mut self) -> Self {
        if self.news_api_key.is_none()
            && let Ok(key) = env::var("NEWS_API_KEY")
            && !key.is_empty()
        {
            self.news_api_key = Some(key);
        }
        if self.openai_api_key.is_none()
            && let Ok(key) = env::var("OPENAI_API_KEY")
            && !key.is_empty()
        {
            self.openai_api_key = Some(key);
        }
        self
    }

    /// Config for tests: fixed values, no file or environment access.
    pub fn test_config() -> Self {
        Self {
            news_api_key: Some("test-key".to_string()),
            openai_api_key: None,
            default_ticker: "AAPL".to_string(),
            news_limit: 5,
        }
    }
}
