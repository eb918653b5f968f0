//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

use super::standard::GradeBand;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the curriculum documents live
    #[serde(default)]
    pub sources: SourcesConfig,

    /// HTTP client settings for remote sources and the generation service
    #[serde(default)]
    pub http: HttpConfig,

    /// Relevance selection policy
    #[serde(default)]
    pub selector: SelectorConfig,

    /// Text generation service settings
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.sources.curriculum_2015.trim().is_empty() {
            return Err(AppError::validation("sources.curriculum_2015 is empty"));
        }
        if self.sources.curriculum_2022.trim().is_empty() {
            return Err(AppError::validation("sources.curriculum_2022 is empty"));
        }
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.selector.min_subjects == 0 {
            return Err(AppError::validation("selector.min_subjects must be > 0"));
        }
        if self.selector.max_records < self.selector.min_subjects {
            return Err(AppError::validation(
                "selector.max_records must be >= selector.min_subjects",
            ));
        }
        if self.selector.core_subjects.iter().all(|s| s.trim().is_empty()) {
            return Err(AppError::validation("No core subjects defined"));
        }
        if !(0.0..=2.0).contains(&self.generator.temperature) {
            return Err(AppError::validation(
                "generator.temperature must be within 0.0..=2.0",
            ));
        }
        if self.generator.max_output_tokens == 0 {
            return Err(AppError::validation(
                "generator.max_output_tokens must be > 0",
            ));
        }
        if self.generator.endpoint.trim().is_empty() {
            return Err(AppError::validation("generator.endpoint is empty"));
        }
        Ok(())
    }
}

/// Locations of the two curriculum documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// 2015 revision document (grades 5-6): file path or http(s) URL
    #[serde(default = "defaults::curriculum_2015")]
    pub curriculum_2015: String,

    /// 2022 revision document (grades 1-6): file path or http(s) URL
    #[serde(default = "defaults::curriculum_2022")]
    pub curriculum_2022: String,

    /// Optional TOML seed set replacing the built-in fallback standards
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            curriculum_2015: defaults::curriculum_2015(),
            curriculum_2022: defaults::curriculum_2022(),
            seed_file: None,
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Relevance selection policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Upper bound on selected standards
    #[serde(default = "defaults::max_records")]
    pub max_records: usize,

    /// Distinct subjects a selection must cover
    #[serde(default = "defaults::min_subjects")]
    pub min_subjects: usize,

    /// Subjects consulted, in order, when a selection lacks diversity
    #[serde(default = "defaults::core_subjects")]
    pub core_subjects: Vec<String>,

    /// Band used when the caller supplies none
    #[serde(default = "defaults::default_band")]
    pub default_band: GradeBand,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            max_records: defaults::max_records(),
            min_subjects: defaults::min_subjects(),
            core_subjects: defaults::core_subjects(),
            default_band: defaults::default_band(),
        }
    }
}

/// Text generation service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// generateContent endpoint of the model
    #[serde(default = "defaults::endpoint")]
    pub endpoint: String,

    /// Environment variable holding the API key
    #[serde(default = "defaults::api_key_env")]
    pub api_key_env: String,

    #[serde(default = "defaults::temperature")]
    pub temperature: f32,

    #[serde(default = "defaults::max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::endpoint(),
            api_key_env: defaults::api_key_env(),
            temperature: defaults::temperature(),
            max_output_tokens: defaults::max_output_tokens(),
        }
    }
}

mod defaults {
    use super::GradeBand;

    // Source defaults
    pub fn curriculum_2015() -> String {
        "data/2015 성취기준 5-6학년.md".into()
    }
    pub fn curriculum_2022() -> String {
        "data/2022 개정 교육과정 초등학교 성취기준.md".into()
    }

    // HTTP defaults
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; standards/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }

    // Selector defaults
    pub fn max_records() -> usize {
        4
    }
    pub fn min_subjects() -> usize {
        2
    }
    pub fn core_subjects() -> Vec<String> {
        vec!["국어".into(), "수학".into(), "사회".into(), "과학".into()]
    }
    pub fn default_band() -> GradeBand {
        GradeBand::Grades3To4
    }

    // Generator defaults
    pub fn endpoint() -> String {
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
            .into()
    }
    pub fn api_key_env() -> String {
        "AI_PLANNER_API_KEY".into()
    }
    pub fn temperature() -> f32 {
        0.7
    }
    pub fn max_output_tokens() -> u32 {
        2048
    }
}
