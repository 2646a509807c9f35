//! Structured grading requests.
//!
//! Adapts `{model_answers, student_answers}` documents (request bodies, JSON
//! files) onto the parser and scorer, and reads answer text from files.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::GradeError;
use crate::model::{QuestionNumber, QuestionOutcome};
use crate::parser::parse_answer_text;
use crate::scoring::evaluate_detailed;

/// Raw model and student answer texts to be graded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GradeRequest {
    pub model_answers: String,
    pub student_answers: String,
}

/// Result of grading a [`GradeRequest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeResponse {
    pub score: usize,
    pub total: usize,
    /// `score / total * 100`, or 0 for an empty model key.
    pub percentage: f64,
    /// Outcome of each model question, keyed by question number.
    pub results: BTreeMap<QuestionNumber, QuestionOutcome>,
}

/// Grade an already-typed request.
pub fn process_json_input(input: &GradeRequest) -> GradeResponse {
    let model = parse_answer_text(&input.model_answers);
    let student = parse_answer_text(&input.student_answers);
    let evaluation = evaluate_detailed(&model, &student);
    let percentage = evaluation.result().percentage();

    GradeResponse {
        score: evaluation.score,
        total: evaluation.total,
        percentage,
        results: evaluation
            .outcomes
            .into_iter()
            .map(|o| (o.question.clone(), o))
            .collect(),
    }
}

fn required_text(value: &serde_json::Value, field: &str) -> Result<String, GradeError> {
    match value.get(field) {
        Some(serde_json::Value::String(s)) => Ok(s.clone()),
        Some(other) => Err(GradeError::InvalidInput(format!(
            "field `{field}` must be a string, got {other}"
        ))),
        None => Err(GradeError::InvalidInput(format!(
            "missing required field `{field}`"
        ))),
    }
}

/// Grade an untyped JSON document.
pub fn process_json_value(value: &serde_json::Value) -> Result<GradeResponse, GradeError> {
    if !value.is_object() {
        return Err(GradeError::InvalidInput(
            "expected a JSON object with `model_answers` and `student_answers`".into(),
        ));
    }
    let request = GradeRequest {
        model_answers: required_text(value, "model_answers")?,
        student_answers: required_text(value, "student_answers")?,
    };
    Ok(process_json_input(&request))
}

/// Grade a JSON document given as text.
pub fn process_json_str(json: &str) -> Result<GradeResponse, GradeError> {
    let value: serde_json::Value = serde_json::from_str(json)
        .map_err(|e| GradeError::InvalidInput(format!("malformed JSON: {e}")))?;
    process_json_value(&value)
}

/// Read answer or question text from a file.
pub fn read_text_source(path: &Path) -> Result<String, GradeError> {
    std::fs::read_to_string(path).map_err(|e| GradeError::io(path, e))
}
