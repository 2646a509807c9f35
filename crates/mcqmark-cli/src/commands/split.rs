//! The `mcqmark split` command.

use std::path::PathBuf;

use anyhow::Result;

use mcqmark_core::questions::extract_mcq_questions;

use super::{read_source, OutputFormat};

pub fn execute(text: Option<String>, file: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let text = read_source(text, file, "question text")?;
    let chunks = extract_mcq_questions(&text);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&chunks)?),
        OutputFormat::Text => {
            for chunk in &chunks {
                println!("[{}] {}", chunk.number, chunk.body);
            }
            eprintln!("{} question(s)", chunks.len());
        }
    }

    Ok(())
}
