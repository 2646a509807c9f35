//! Answer provider trait and prompt helpers.
//!
//! Providers are the generative services that answer a question paper and
//! return raw answer-key text. They are implemented in `mcqmark-providers`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Answer provider trait
// ---------------------------------------------------------------------------

/// Trait for generative backends that answer MCQ question papers.
#[async_trait]
pub trait AnswerProvider: Send + Sync {
    /// Human-readable provider name (e.g. "gemini").
    fn name(&self) -> &str;

    /// Send a prompt and return the raw reply.
    async fn generate(&self, request: &GenerateRequest) -> anyhow::Result<GenerateResponse>;

    /// List available models for this provider.
    fn available_models(&self) -> Vec<ModelInfo>;
}

/// Request to answer a question paper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Model identifier (e.g. "gemini-1.5-pro").
    pub model: String,
    /// The full prompt, questions included.
    pub prompt: String,
    /// Optional system prompt override.
    #[serde(default)]
    pub system_prompt: Option<String>,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f64,
}

/// Reply from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// The raw response content.
    pub content: String,
    /// Model that actually generated the response.
    pub model: String,
    /// Token usage.
    pub token_usage: TokenUsage,
    /// Latency in milliseconds.
    pub latency_ms: u64,
}

/// Token accounting for one provider call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Information about an available model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Model identifier.
    pub id: String,
    /// Human-readable model name.
    pub name: String,
    /// Provider name.
    pub provider: String,
    /// Maximum context window size in tokens.
    pub max_context: u32,
}

// ---------------------------------------------------------------------------
// Prompts
// ---------------------------------------------------------------------------

/// Placeholder replaced by the question text in prompt templates.
pub const QUESTIONS_PLACEHOLDER: &str = "{questions}";

/// Default system prompt for answer providers.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a model answer generator for multiple-choice question papers. Respond ONLY with question numbers and option letters.";

/// Default prompt template asking for a compact answer key.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "\
You are a model answer generator for MCQ papers.

Instructions:
- Read the following MCQ questions carefully.
- Choose the correct option for each question.
- Output ONLY the option letter (a/b/c/d) for each question in order, numbered accordingly.
- Do NOT provide explanations, extra text, or formatting boxes.
- Do NOT write sentences or paragraphs.
- ONLY output the question number and letter answer.
- Example output:
1 b
2 c
3 a
4 d

Here are the questions:

{questions}

Generate the answers.
";

/// Fill a prompt template with the question text.
///
/// A template without the placeholder gets the questions appended.
pub fn build_answer_prompt(template: &str, questions: &str) -> String {
    if template.contains(QUESTIONS_PLACEHOLDER) {
        template.replace(QUESTIONS_PLACEHOLDER, questions)
    } else {
        format!("{template}\n\n{questions}")
    }
}

// ---------------------------------------------------------------------------
// Markdown answer extraction
// ---------------------------------------------------------------------------

/// Extract the answer key from a possibly markdown-formatted reply.
///
/// Fenced blocks (any language tag) are concatenated; a truncated, unclosed
/// block still counts. Replies without fences are returned trimmed.
pub fn extract_answer_text(response: &str) -> String {
    let mut blocks = Vec::new();
    let mut in_block = false;
    let mut current_block = String::new();

    for line in response.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("```") {
            if in_block {
                blocks.push(std::mem::take(&mut current_block));
            }
            in_block = !in_block;
            continue;
        }

        if in_block {
            if !current_block.is_empty() {
                current_block.push('\n');
            }
            current_block.push_str(trimmed);
        }
    }

    if in_block && !current_block.is_empty() {
        blocks.push(current_block);
    }

    let blocks: Vec<String> = blocks
        .into_iter()
        .filter(|b| !b.trim().is_empty())
        .collect();
    if blocks.is_empty() {
        response.trim().to_string()
    } else {
        blocks.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_template_substitution() {
        let prompt = build_answer_prompt(DEFAULT_PROMPT_TEMPLATE, "1. Q? a. x b. y");
        assert!(prompt.contains("Here are the questions:\n\n1. Q? a. x b. y\n"));
        assert!(!prompt.contains(QUESTIONS_PLACEHOLDER));
    }

    #[test]
    fn prompt_without_placeholder_appends_questions() {
        let prompt = build_answer_prompt("Answer these:", "1. Q?");
        assert_eq!(prompt, "Answer these:\n\n1. Q?");
    }

    #[test]
    fn raw_reply_is_trimmed() {
        assert_eq!(extract_answer_text("\n1 b\n2 c\n"), "1 b\n2 c");
    }

    #[test]
    fn fenced_reply() {
        let input = "Here are the answers:\n\n```\n1 b\n2 c\n```\nGood luck!";
        assert_eq!(extract_answer_text(input), "1 b\n2 c");
    }

    #[test]
    fn fenced_reply_with_language_tag() {
        let input = "```text\n1 b\n```\n\n```text\n2 d\n```";
        assert_eq!(extract_answer_text(input), "1 b\n2 d");
    }

    #[test]
    fn truncated_unclosed_block() {
        let input = "```\n1 a\n2 b";
        assert_eq!(extract_answer_text(input), "1 a\n2 b");
    }

    #[test]
    fn empty_fence_falls_back_to_raw() {
        let input = "```\n```\n1 a";
        assert_eq!(extract_answer_text(input), "```\n```\n1 a");
    }
}
