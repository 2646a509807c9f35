pub mod generate;
pub mod grade;
pub mod init;
pub mod json;
pub mod list_models;
pub mod parse;
pub mod split;

use std::path::PathBuf;

use anyhow::Result;
use clap::ValueEnum;

use mcqmark_core::grading::read_text_source;

/// How a command prints its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Take answer text from an inline argument or a file.
pub fn read_source(inline: Option<String>, file: Option<PathBuf>, what: &str) -> Result<String> {
    match (inline, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => Ok(read_text_source(&path)?),
        (None, None) => anyhow::bail!("no {what} given"),
    }
}
