//! The `mcqmark json` command.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};

use mcqmark_core::grading::{process_json_str, read_text_source};

pub fn execute(input: Option<PathBuf>) -> Result<()> {
    let document = match input {
        Some(path) => read_text_source(&path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read JSON from stdin")?;
            buf
        }
    };

    let response = process_json_str(&document)?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
