//! The `mcqmark parse` command.

use std::path::PathBuf;

use anyhow::Result;

use mcqmark_core::parser::parse_answer_text;

use super::{read_source, OutputFormat};

pub fn execute(text: Option<String>, file: Option<PathBuf>, format: OutputFormat) -> Result<()> {
    let text = read_source(text, file, "answer text")?;
    let key = parse_answer_text(&text);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&key)?),
        OutputFormat::Text => {
            if key.is_empty() {
                eprintln!("No answers found.");
            } else {
                println!("{key}");
            }
        }
    }

    Ok(())
}
