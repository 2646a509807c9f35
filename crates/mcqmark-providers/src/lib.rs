//! mcqmark-providers: generative answer-key providers.
//!
//! Implements the `AnswerProvider` trait for OpenAI-compatible APIs, Gemini,
//! and an offline lookup table, plus the TOML configuration that selects them.

pub mod config;
pub mod gemini;
pub mod mock;
pub mod offline;
pub mod openai;

pub use config::{create_provider, load_config, McqmarkConfig, ProviderConfig};
pub use mcqmark_core::error::ProviderError;
