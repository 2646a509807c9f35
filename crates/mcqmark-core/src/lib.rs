//! mcqmark-core: answer-key parsing, question splitting, and scoring.
//!
//! This crate defines the data model, the answer-text parser, the scorer, and
//! the provider trait that the rest of mcqmark builds on.

pub mod error;
pub mod generator;
pub mod grading;
pub mod model;
pub mod parser;
pub mod questions;
pub mod scoring;
pub mod traits;

pub use error::{GradeError, ProviderError};
pub use grading::{process_json_input, GradeRequest, GradeResponse};
pub use model::{AnswerEntry, AnswerKey, QuestionChunk, QuestionNumber, ScoreResult};
pub use parser::parse_answer_text;
pub use questions::extract_mcq_questions;
pub use scoring::{evaluate, evaluate_mcq};
