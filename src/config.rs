use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

use crate::models::SelectionMode;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Directory for daily-rolling log files; console only when unset
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_llm_temperature")]
    pub temperature: f32,
    #[serde(default = "default_llm_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_llm_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o".to_string()
}

const fn default_llm_temperature() -> f32 {
    0.8
}

const fn default_llm_timeout_secs() -> u64 {
    60
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_llm_endpoint(),
            api_key: String::new(),
            model: default_llm_model(),
            temperature: default_llm_temperature(),
            timeout_secs: default_llm_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectorConfig {
    #[serde(default)]
    pub mode: SelectionMode,
    /// Catalog file replacing the built-in one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_ffprobe_path")]
    pub ffprobe_path: String,
    #[serde(default = "default_probe_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_ffprobe_path() -> String {
    "ffprobe".to_string()
}

const fn default_probe_timeout_secs() -> u64 {
    10
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            ffprobe_path: default_ffprobe_path(),
            timeout_secs: default_probe_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub selector: SelectorConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text and validate it
    pub fn from_toml_str(content: &str) -> crate::Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, falling back to built-in defaults.
    ///
    /// An explicit `path` must exist. Otherwise `config.toml` is tried, then
    /// `config.example.toml`, then defaults. Environment overrides are
    /// applied last.
    pub fn load(path: Option<&Path>) -> crate::Result<Self> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if Path::new("config.toml").exists() {
            Self::from_file("config.toml")?
        } else if Path::new("config.example.toml").exists() {
            eprintln!(
                "Warning: Using config.example.toml. Please create config.toml for production use."
            );
            Self::from_file("config.example.toml")?
        } else {
            Self::default()
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Apply `OPENAI_API_KEY`, `SPREADIT_LLM_ENDPOINT` and `SPREADIT_LLM_MODEL`
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup("OPENAI_API_KEY").filter(|v| !v.is_empty()) {
            self.llm.api_key = key;
        }
        if let Some(endpoint) = lookup("SPREADIT_LLM_ENDPOINT").filter(|v| !v.is_empty()) {
            self.llm.endpoint = endpoint;
        }
        if let Some(model) = lookup("SPREADIT_LLM_MODEL").filter(|v| !v.is_empty()) {
            self.llm.model = model;
        }
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> crate::Result<()> {
        url::Url::parse(&self.llm.endpoint)?;
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(crate::SpreadItError::ConfigError(format!(
                "llm.temperature must be within 0.0..=2.0, got {}",
                self.llm.temperature
            )));
        }
        if self.llm.timeout_secs == 0 || self.probe.timeout_secs == 0 {
            return Err(crate::SpreadItError::ConfigError(
                "timeouts must be greater than zero".to_string(),
            ));
        }
        if self.probe.ffprobe_path.trim().is_empty() {
            return Err(crate::SpreadItError::ConfigError(
                "probe.ffprobe_path must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Get LLM endpoint
    pub fn llm_endpoint(&self) -> &str {
        &self.llm.endpoint
    }

    /// Get LLM model
    pub fn llm_model(&self) -> &str {
        &self.llm.model
    }

    /// Whether an API key is configured
    pub fn has_llm_key(&self) -> bool {
        !self.llm.api_key.is_empty()
    }

    /// Get default selection mode
    pub fn selection_mode(&self) -> SelectionMode {
        self.selector.mode
    }

    /// Get catalog override path
    pub fn catalog_path(&self) -> Option<&Path> {
        self.selector.catalog_path.as_deref()
    }
}
