//! Model answer-key generation.
//!
//! Asks an [`AnswerProvider`] to answer a question paper, with retries on
//! transient provider errors and an optional fallback key, then parses the
//! reply into an [`AnswerKey`].

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::model::{AnswerKey, ScoreResult};
use crate::parser::parse_answer_text;
use crate::questions::clean_text;
use crate::scoring::evaluate;
use crate::traits::{
    build_answer_prompt, extract_answer_text, AnswerProvider, GenerateRequest, TokenUsage,
    DEFAULT_PROMPT_TEMPLATE,
};

/// Upper bound on the wait between attempts, including server-requested waits.
const MAX_RETRY_DELAY: Duration = Duration::from_secs(60);

/// Configuration for the key generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Model to ask.
    pub model: String,
    /// Temperature for generation.
    pub temperature: f64,
    /// Max tokens for generation.
    pub max_tokens: u32,
    /// Retries on provider errors.
    pub max_retries: u32,
    /// Delay before the first retry; doubles on each further retry.
    pub retry_delay: Duration,
    /// Prompt template override; must contain `{questions}` to place them.
    pub prompt_template: Option<String>,
    /// Optional system prompt override.
    pub system_prompt: Option<String>,
    /// Answer text used when every attempt fails.
    pub fallback_answers: Option<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-1.5-pro".to_string(),
            temperature: 0.0,
            max_tokens: 1024,
            max_retries: 3,
            retry_delay: Duration::from_secs(1),
            prompt_template: None,
            system_prompt: None,
            fallback_answers: None,
        }
    }
}

/// A model answer key produced by a provider (or by the fallback).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedKey {
    /// Answer text as returned, fences removed.
    pub raw: String,
    /// Parsed key.
    pub key: AnswerKey,
    /// Model that produced the key.
    pub model: String,
    pub token_usage: TokenUsage,
    /// Whether `raw` came from the configured fallback instead of the provider.
    pub used_fallback: bool,
    pub generated_at: DateTime<Utc>,
    pub latency_ms: u64,
}

impl GeneratedKey {
    /// Score a student's answer text against this key.
    pub fn grade(&self, student_text: &str) -> ScoreResult {
        evaluate(&self.key, &parse_answer_text(student_text))
    }
}

/// Generates model answer keys from question papers.
pub struct ModelKeyGenerator {
    provider: Arc<dyn AnswerProvider>,
    config: GeneratorConfig,
}

impl ModelKeyGenerator {
    pub fn new(provider: Arc<dyn AnswerProvider>, config: GeneratorConfig) -> Self {
        Self { provider, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    fn request_for(&self, questions: &str) -> GenerateRequest {
        let template = self
            .config
            .prompt_template
            .as_deref()
            .unwrap_or(DEFAULT_PROMPT_TEMPLATE);
        GenerateRequest {
            model: self.config.model.clone(),
            prompt: build_answer_prompt(template, &clean_text(questions)),
            system_prompt: self.config.system_prompt.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        }
    }

    /// Answer `questions` and parse the reply into a key.
    pub async fn generate(&self, questions: &str) -> Result<GeneratedKey> {
        let start = Instant::now();
        let request = self.request_for(questions);

        let mut last_error = None;
        let mut retry_delay = self.config.retry_delay;
        for retry in 0..=self.config.max_retries {
            if retry > 0 {
                tracing::warn!(
                    provider = self.provider.name(),
                    "retrying answer generation in {}ms (attempt {})",
                    retry_delay.as_millis(),
                    retry + 1
                );
                tokio::time::sleep(retry_delay).await;
                retry_delay = retry_delay.saturating_mul(2).min(MAX_RETRY_DELAY);
            }

            match self.provider.generate(&request).await {
                Ok(response) => {
                    let raw = extract_answer_text(&response.content);
                    let key = parse_answer_text(&raw);
                    if key.is_empty() {
                        tracing::warn!("provider reply contained no answers: {raw:?}");
                        last_error = Some(anyhow::anyhow!("provider reply contained no answers"));
                        continue;
                    }
                    return Ok(GeneratedKey {
                        raw,
                        key,
                        model: response.model,
                        token_usage: response.token_usage,
                        used_fallback: false,
                        generated_at: Utc::now(),
                        latency_ms: start.elapsed().as_millis() as u64,
                    });
                }
                Err(e) => {
                    if let Some(provider_err) = e.downcast_ref::<ProviderError>() {
                        if provider_err.is_permanent() {
                            last_error = Some(e);
                            break;
                        }
                        if let Some(ms) = provider_err.retry_after_ms() {
                            retry_delay = Duration::from_millis(ms).min(MAX_RETRY_DELAY);
                        }
                    }
                    tracing::warn!("answer generation failed: {e:#}");
                    last_error = Some(e);
                }
            }
        }

        let error = last_error.unwrap_or_else(|| anyhow::anyhow!("unknown error"));
        match &self.config.fallback_answers {
            Some(fallback) => {
                tracing::warn!("using fallback answers after provider failure: {error:#}");
                let raw = fallback.trim().to_string();
                Ok(GeneratedKey {
                    key: parse_answer_text(&raw),
                    raw,
                    model: self.config.model.clone(),
                    token_usage: TokenUsage::default(),
                    used_fallback: true,
                    generated_at: Utc::now(),
                    latency_ms: start.elapsed().as_millis() as u64,
                })
            }
            None => Err(error),
        }
    }
}
