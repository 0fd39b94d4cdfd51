//! Configuration management for the career advisor

use crate::advisor::engine::Strategy;
use crate::advisor::matcher::DEFAULT_SPARSE_THRESHOLD;
use crate::error::{Result, SkillSyncError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `llm.api_key`.
pub const API_KEY_ENV: &str = "SKILLSYNC_OPENAI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub advisor: AdvisorConfig,
    pub llm: LlmConfig,
    pub storage: StorageConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub strategy: Strategy,
    pub sparse_threshold: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Use the live chat-completion API when a valid key is present.
    pub enabled: bool,
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub top_p: f32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub timeout_secs: u64,
    /// Artificial latency of demo answers, in milliseconds.
    pub demo_delay_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Console,
    Json,
    Markdown,
    Html,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::CatalogAugmented,
            sparse_threshold: DEFAULT_SPARSE_THRESHOLD,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_key: None,
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 600,
            top_p: 1.0,
            frequency_penalty: 0.3,
            presence_penalty: 0.3,
            timeout_secs: 60,
            demo_delay_ms: 0,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join("skillsync");

        Self { data_dir }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            color_output: true,
        }
    }
}

impl Config {
    /// Load the file, writing defaults on first use.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| SkillSyncError::Configuration(format!("Failed to parse config: {}", e)))?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save_to(config_path)?;
            Ok(config)
        }
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillSyncError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Update one setting addressed as `section.field`.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        let invalid = |reason: &str| {
            SkillSyncError::Configuration(format!("Invalid value {:?} for {}: {}", value, key, reason))
        };

        match key {
            "advisor.strategy" => self.advisor.strategy = value.parse().map_err(|e: String| invalid(&e))?,
            "advisor.sparse_threshold" => {
                self.advisor.sparse_threshold = value.parse().map_err(|_| invalid("expected a count"))?
            }
            "llm.enabled" => self.llm.enabled = value.parse().map_err(|_| invalid("expected true or false"))?,
            "llm.api_key" => {
                self.llm.api_key = Some(value.trim().to_string()).filter(|key| !key.is_empty())
            }
            "llm.api_url" => self.llm.api_url = value.to_string(),
            "llm.model" => self.llm.model = value.to_string(),
            "llm.temperature" => self.llm.temperature = value.parse().map_err(|_| invalid("expected a number"))?,
            "llm.max_tokens" => self.llm.max_tokens = value.parse().map_err(|_| invalid("expected a count"))?,
            "llm.timeout_secs" => self.llm.timeout_secs = value.parse().map_err(|_| invalid("expected seconds"))?,
            "llm.demo_delay_ms" => {
                self.llm.demo_delay_ms = value.parse().map_err(|_| invalid("expected milliseconds"))?
            }
            "storage.data_dir" => self.storage.data_dir = PathBuf::from(value),
            "output.format" => self.output.format = crate::cli::parse_output_format(value).map_err(|e| invalid(&e))?,
            "output.color_output" => {
                self.output.color_output = value.parse().map_err(|_| invalid("expected true or false"))?
            }
            _ => return Err(SkillSyncError::Configuration(format!("Unknown configuration key: {}", key))),
        }
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillsync")
            .join("config.toml")
    }

    /// API key from the environment, falling back to the config file.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.llm.api_key.clone())
    }

    pub fn data_dir(&self) -> &Path {
        &self.storage.data_dir
    }

    pub fn ensure_data_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.storage.data_dir)?;
        Ok(())
    }
}
