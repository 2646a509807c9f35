//! Scoring of a student answer key against a model answer key.

use crate::model::{AnswerKey, Evaluation, QuestionOutcome, ScoreResult};
use crate::parser::parse_answer_text;

/// Count the model questions the student answered with the same letter.
///
/// `total` is the size of the model key. Student answers to questions the
/// model key does not contain are ignored.
pub fn evaluate(model: &AnswerKey, student: &AnswerKey) -> ScoreResult {
    let score = model
        .iter()
        .filter(|(question, expected)| student.get(question) == Some(*expected))
        .count();

    ScoreResult {
        score,
        total: model.len(),
    }
}

/// Like [`evaluate`], but also reports every model question's outcome.
pub fn evaluate_detailed(model: &AnswerKey, student: &AnswerKey) -> Evaluation {
    let outcomes: Vec<QuestionOutcome> = model
        .iter()
        .map(|(question, expected)| {
            let submitted = student.get(question);
            QuestionOutcome {
                question: question.clone(),
                expected,
                submitted,
                correct: submitted == Some(expected),
            }
        })
        .collect();

    let score = outcomes.iter().filter(|o| o.correct).count();
    Evaluation {
        score,
        total: outcomes.len(),
        outcomes,
    }
}

/// Parse both answer texts and score the student against the model.
pub fn evaluate_mcq(model_text: &str, student_text: &str) -> ScoreResult {
    let model = parse_answer_text(model_text);
    let student = parse_answer_text(student_text);
    let result = evaluate(&model, &student);
    tracing::debug!(
        score = result.score,
        total = result.total,
        student_answers = student.len(),
        "evaluated MCQ answers"
    );
    result
}
