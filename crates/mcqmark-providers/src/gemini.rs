//! Google Gemini (`generateContent`) provider implementation.

use std::time::Instant;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use mcqmark_core::error::ProviderError;
use mcqmark_core::traits::{
    AnswerProvider, GenerateRequest, GenerateResponse, ModelInfo, TokenUsage,
    DEFAULT_SYSTEM_PROMPT,
};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Gemini API provider.
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(api_key: &str, base_url: Option<String>) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            api_key: api_key.to_string(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            client,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    system_instruction: GeminiContent,
    generation_config: GeminiGenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct GeminiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Serialize, Deserialize)]
struct GeminiPart {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
    #[serde(default)]
    usage_metadata: GeminiUsage,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    #[serde(default)]
    prompt_token_count: u32,
    #[serde(default)]
    candidates_token_count: u32,
    #[serde(default)]
    total_token_count: u32,
}

#[async_trait]
impl AnswerProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    #[instrument(skip(self, request), fields(model = %request.model))]
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        let start = Instant::now();

        let system_prompt = request
            .system_prompt
            .clone()
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        let body = GeminiRequest {
            contents: vec![GeminiContent {
                role: Some("user".to_string()),
                parts: vec![GeminiPart {
                    text: request.prompt.clone(),
                }],
            }],
            system_instruction: GeminiContent {
                role: None,
                parts: vec![GeminiPart {
                    text: system_prompt,
                }],
            },
            generation_config: GeminiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/v1beta/models/{}:generateContent",
                self.base_url, request.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout(DEFAULT_TIMEOUT_SECS)
                } else {
                    ProviderError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status().as_u16();
        match status {
            429 => {
                return Err(ProviderError::RateLimited {
                    retry_after_ms: 5000,
                }
                .into())
            }
            401 | 403 => {
                let body = response.text().await.unwrap_or_default();
                return Err(ProviderError::AuthenticationFailed(body).into());
            }
            404 => return Err(ProviderError::ModelNotFound(request.model.clone()).into()),
            s if s >= 400 => {
                let body = response.text().await.unwrap_or_default();
                return Err(ProviderError::ApiError {
                    status,
                    message: body,
                }
                .into());
            }
            _ => {}
        }

        let api_response: GeminiResponse =
            response
                .json()
                .await
                .map_err(|e| ProviderError::ApiError {
                    status: 0,
                    message: format!("failed to parse response: {e}"),
                })?;

        let latency_ms = start.elapsed().as_millis() as u64;
        let content = api_response
            .candidates
            .first()
            .map(|c| {
                c.content
                    .parts
                    .iter()
                    .map(|p| p.text.as_str())
                    .collect::<String>()
            })
            .unwrap_or_default();

        Ok(GenerateResponse {
            content: content.trim().to_string(),
            model: api_response
                .model_version
                .unwrap_or_else(|| request.model.clone()),
            token_usage: TokenUsage {
                prompt_tokens: api_response.usage_metadata.prompt_token_count,
                completion_tokens: api_response.usage_metadata.candidates_token_count,
                total_tokens: api_response.usage_metadata.total_token_count,
            },
            latency_ms,
        })
    }

    fn available_models(&self) -> Vec<ModelInfo> {
        vec![
            ModelInfo {
                id: "gemini-1.5-pro".into(),
                name: "Gemini 1.5 Pro".into(),
                provider: "gemini".into(),
                max_context: 2_000_000,
            },
            ModelInfo {
                id: "gemini-1.5-flash".into(),
                name: "Gemini 1.5 Flash".into(),
                provider: "gemini".into(),
                max_context: 1_000_000,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request() -> GenerateRequest {
        GenerateRequest {
            model: "gemini-1.5-pro".into(),
            prompt: "Question 1. Which lens has virtual focus?".into(),
            system_prompt: None,
            max_tokens: 128,
            temperature: 0.0,
        }
    }

    #[tokio::test]
    async fn successful_generation() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "1 b\n"}, {"text": "2 c\n"}]}}],
            "usageMetadata": {"promptTokenCount": 30, "candidatesTokenCount": 6, "totalTokenCount": 36},
            "modelVersion": "gemini-1.5-pro-002"
        });

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
            .and(header("x-goog-api-key", "g-key"))
            .and(body_partial_json(serde_json::json!({
                "generationConfig": {"maxOutputTokens": 128}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let provider = GeminiProvider::new("g-key", Some(server.uri())).unwrap();
        let response = provider.generate(&request()).await.unwrap();
        assert_eq!(response.content, "1 b\n2 c");
        assert_eq!(response.model, "gemini-1.5-pro-002");
        assert_eq!(response.token_usage.total_tokens, 36);
    }

    #[tokio::test]
    async fn empty_candidates_yield_empty_content() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .mount(&server)
            .await;

        let provider = GeminiProvider::new("g-key", Some(server.uri())).unwrap();
        let response = provider.generate(&request()).await.unwrap();
        assert!(response.content.is_empty());
        assert_eq!(response.model, "gemini-1.5-pro");
    }

    #[tokio::test]
    async fn forbidden_is_authentication_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
            .mount(&server)
            .await;

        let provider = GeminiProvider::new("bad", Some(server.uri())).unwrap();
        let err = provider.generate(&request()).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ProviderError>(),
            Some(ProviderError::AuthenticationFailed(_))
        ));
    }

    #[tokio::test]
    async fn quota_exhausted_is_rate_limited() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-1.5-pro:generateContent"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let provider = GeminiProvider::new("key", Some(server.uri())).unwrap();
        let err = provider.generate(&request()).await.unwrap_err();
        assert!(err.to_string().contains("rate limited"));
    }
}
