//! The `mcqmark grade` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use mcqmark_core::grading::{process_json_input, GradeRequest};
use mcqmark_core::model::Evaluation;
use mcqmark_core::parser::parse_answer_text;
use mcqmark_core::scoring::evaluate_detailed;

use super::{read_source, OutputFormat};

pub fn execute(
    model_key: Option<String>,
    model_key_file: Option<PathBuf>,
    student: Option<String>,
    student_file: Option<PathBuf>,
    format: OutputFormat,
    details: bool,
) -> Result<()> {
    let model_text = read_source(model_key, model_key_file, "model answer key")?;
    let student_text = read_source(student, student_file, "student answers")?;

    match format {
        OutputFormat::Json => {
            let response = process_json_input(&GradeRequest {
                model_answers: model_text,
                student_answers: student_text,
            });
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            let model = parse_answer_text(&model_text);
            let student = parse_answer_text(&student_text);
            if model.is_empty() {
                eprintln!("Warning: no answers found in the model answer key");
            }
            let evaluation = evaluate_detailed(&model, &student);
            let result = evaluation.result();
            println!("Score: {result} ({:.1}%)", result.percentage());
            if details {
                println!("{}", outcome_table(&evaluation));
            }
        }
    }

    Ok(())
}

pub(crate) fn outcome_table(evaluation: &Evaluation) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Question", "Model", "Student", "Result"]);

    for outcome in &evaluation.outcomes {
        let submitted = outcome
            .submitted
            .map(|c| c.to_string())
            .unwrap_or_else(|| "-".to_string());
        let verdict = if outcome.correct {
            "correct"
        } else if outcome.submitted.is_none() {
            "missing"
        } else {
            "wrong"
        };
        table.add_row(vec![
            Cell::new(outcome.question.as_str()),
            Cell::new(outcome.expected),
            Cell::new(submitted),
            Cell::new(verdict),
        ]);
    }

    table
}
