//! Provider configuration and factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use mcqmark_core::generator::GeneratorConfig;
use mcqmark_core::traits::AnswerProvider;

use crate::gemini::GeminiProvider;
use crate::offline::{OfflineProvider, DEFAULT_OFFLINE_ANSWER};
use crate::openai::OpenAiProvider;

/// Configuration for a single answer provider.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProviderConfig {
    OpenAI {
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
        #[serde(default)]
        org_id: Option<String>,
    },
    Gemini {
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
    },
    Offline {
        #[serde(default)]
        answers: HashMap<String, char>,
        #[serde(default = "default_offline_answer")]
        default_answer: char,
    },
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProviderConfig::OpenAI {
                api_key: _,
                base_url,
                org_id,
            } => f
                .debug_struct("OpenAI")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .field("org_id", org_id)
                .finish(),
            ProviderConfig::Gemini {
                api_key: _,
                base_url,
            } => f
                .debug_struct("Gemini")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .finish(),
            ProviderConfig::Offline {
                answers,
                default_answer,
            } => f
                .debug_struct("Offline")
                .field("answers", &answers.len())
                .field("default_answer", default_answer)
                .finish(),
        }
    }
}

fn default_offline_answer() -> char {
    DEFAULT_OFFLINE_ANSWER
}

/// Top-level mcqmark configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McqmarkConfig {
    /// Provider configurations keyed by name.
    #[serde(default)]
    pub providers: HashMap<String, ProviderConfig>,
    /// Default provider to use.
    #[serde(default = "default_provider")]
    pub default_provider: String,
    /// Default model to use.
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Default temperature (0.0 for a deterministic key).
    #[serde(default)]
    pub default_temperature: f64,
    /// Max tokens requested from the provider.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Max retries on provider errors.
    #[serde(default = "default_retries")]
    pub max_retries: u32,
    /// Delay between retries in milliseconds.
    #[serde(default = "default_retry_delay")]
    pub retry_delay_ms: u64,
    /// Prompt template override (`{questions}` placeholder).
    #[serde(default)]
    pub prompt_template: Option<String>,
    /// Answer text used when the provider keeps failing.
    #[serde(default)]
    pub fallback_answers: Option<String>,
}

fn default_provider() -> String {
    "gemini".to_string()
}
fn default_model() -> String {
    "gemini-1.5-pro".to_string()
}
fn default_max_tokens() -> u32 {
    1024
}
fn default_retries() -> u32 {
    3
}
fn default_retry_delay() -> u64 {
    1000
}

impl Default for McqmarkConfig {
    fn default() -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider(),
            default_model: default_model(),
            default_temperature: 0.0,
            max_tokens: default_max_tokens(),
            max_retries: default_retries(),
            retry_delay_ms: default_retry_delay(),
            prompt_template: None,
            fallback_answers: None,
        }
    }
}

impl McqmarkConfig {
    /// Build the key generator settings for `model`.
    pub fn generator_config(&self, model: &str) -> GeneratorConfig {
        GeneratorConfig {
            model: model.to_string(),
            temperature: self.default_temperature,
            max_tokens: self.max_tokens,
            max_retries: self.max_retries,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            prompt_template: self.prompt_template.clone(),
            system_prompt: None,
            fallback_answers: self.fallback_answers.clone(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a provider config.
fn resolve_provider_config(config: &ProviderConfig) -> ProviderConfig {
    match config {
        ProviderConfig::OpenAI {
            api_key,
            base_url,
            org_id,
        } => ProviderConfig::OpenAI {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
            org_id: org_id.as_ref().map(|o| resolve_env_vars(o)),
        },
        ProviderConfig::Gemini { api_key, base_url } => ProviderConfig::Gemini {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
        },
        offline @ ProviderConfig::Offline { .. } => offline.clone(),
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `mcqmark.toml` in the current directory
/// 2. `~/.config/mcqmark/config.toml`
///
/// Environment variable overrides: `MCQMARK_OPENAI_KEY`, `MCQMARK_GEMINI_KEY`.
pub fn load_config() -> Result<McqmarkConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<McqmarkConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("mcqmark.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => McqmarkConfig::default(),
    };

    apply_env_overrides(&mut config);

    let resolved: HashMap<String, ProviderConfig> = config
        .providers
        .iter()
        .map(|(k, v)| (k.clone(), resolve_provider_config(v)))
        .collect();
    config.providers = resolved;

    tracing::debug!(
        "loaded config with {} provider(s), default {}",
        config.providers.len(),
        config.default_provider
    );
    Ok(config)
}

/// Parse a TOML config string.
pub fn parse_config(content: &str) -> Result<McqmarkConfig> {
    Ok(toml::from_str::<McqmarkConfig>(content)?)
}

fn apply_env_overrides(config: &mut McqmarkConfig) {
    if let Ok(key) = std::env::var("MCQMARK_GEMINI_KEY") {
        let entry = config
            .providers
            .entry("gemini".into())
            .or_insert(ProviderConfig::Gemini {
                api_key: String::new(),
                base_url: None,
            });
        if let ProviderConfig::Gemini { api_key, .. } = entry {
            *api_key = key;
        }
    }

    if let Ok(key) = std::env::var("MCQMARK_OPENAI_KEY") {
        let entry = config
            .providers
            .entry("openai".into())
            .or_insert(ProviderConfig::OpenAI {
                api_key: String::new(),
                base_url: None,
                org_id: None,
            });
        if let ProviderConfig::OpenAI { api_key, .. } = entry {
            *api_key = key;
        }
    }
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("mcqmark"))
}

/// Create a provider instance from its configuration.
pub fn create_provider(config: &ProviderConfig) -> Result<Arc<dyn AnswerProvider>> {
    let provider: Arc<dyn AnswerProvider> = match config {
        ProviderConfig::OpenAI {
            api_key,
            base_url,
            org_id,
        } => Arc::new(OpenAiProvider::new(
            api_key,
            base_url.clone(),
            org_id.clone(),
        )?),
        ProviderConfig::Gemini { api_key, base_url } => {
            Arc::new(GeminiProvider::new(api_key, base_url.clone())?)
        }
        ProviderConfig::Offline {
            answers,
            default_answer,
        } => Arc::new(OfflineProvider::new(answers.clone(), *default_answer)),
    };
    Ok(provider)
}
