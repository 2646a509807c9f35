//! Offline lookup provider.
//!
//! Answers every question found in the prompt from a fixed table, falling
//! back to a default letter. Useful when no API quota is available.

use std::collections::HashMap;

use async_trait::async_trait;

use mcqmark_core::questions::extract_mcq_questions;
use mcqmark_core::traits::{
    AnswerProvider, GenerateRequest, GenerateResponse, ModelInfo, TokenUsage,
};

/// Default option given to questions missing from the table.
pub const DEFAULT_OFFLINE_ANSWER: char = 'a';

/// Provider that answers from a question-number lookup table.
#[derive(Debug, Clone)]
pub struct OfflineProvider {
    answers: HashMap<String, char>,
    default_answer: char,
}

impl OfflineProvider {
    pub fn new(answers: HashMap<String, char>, default_answer: char) -> Self {
        Self {
            answers,
            default_answer,
        }
    }

    /// Render the answer text for the questions in `prompt`, one per line.
    pub fn answer(&self, prompt: &str) -> String {
        extract_mcq_questions(prompt)
            .iter()
            .map(|q| {
                let letter = self
                    .answers
                    .get(&q.number)
                    .copied()
                    .unwrap_or(self.default_answer);
                format!("{} {}", q.number, letter.to_ascii_lowercase())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl AnswerProvider for OfflineProvider {
    fn name(&self) -> &str {
        "offline"
    }

    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse> {
        let content = self.answer(&request.prompt);
        tracing::debug!("offline provider answered {} line(s)", content.lines().count());
        Ok(GenerateResponse {
            content,
            model: request.model.clone(),
            token_usage: TokenUsage::default(),
            latency_ms: 0,
        })
    }

    fn available_models(&self) -> Vec<ModelInfo> {
        vec![ModelInfo {
            id: "lookup".into(),
            name: "Offline lookup table".into(),
            provider: "offline".into(),
            max_context: u32::MAX,
        }]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> HashMap<String, char> {
        [("1", 'b'), ("2", 'b'), ("3", 'd'), ("4", 'c')]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn answers_known_and_unknown_questions() {
        let provider = OfflineProvider::new(table(), DEFAULT_OFFLINE_ANSWER);
        let text = provider.answer("Question 1. a? Question 3. b? Question 9. c?");
        assert_eq!(text, "1 b\n3 d\n9 a");
    }

    #[tokio::test]
    async fn generate_returns_answer_key_text() {
        let provider = OfflineProvider::new(table(), 'C');
        let request = GenerateRequest {
            model: "lookup".into(),
            prompt: "1. one 2. two 5. five".into(),
            system_prompt: None,
            max_tokens: 0,
            temperature: 0.0,
        };
        let response = provider.generate(&request).await.unwrap();
        assert_eq!(response.content, "1 b\n2 b\n5 c");
        assert_eq!(response.model, "lookup");
    }
}
