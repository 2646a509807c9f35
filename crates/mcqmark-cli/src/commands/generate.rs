//! The `mcqmark generate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use mcqmark_core::generator::ModelKeyGenerator;
use mcqmark_core::grading::read_text_source;
use mcqmark_core::parser::parse_answer_text;
use mcqmark_core::scoring::evaluate_detailed;
use mcqmark_providers::config::load_config_from;
use mcqmark_providers::create_provider;

use super::grade::outcome_table;
use super::{read_source, OutputFormat};

pub struct GenerateArgs {
    pub questions: PathBuf,
    pub provider: Option<String>,
    pub model: Option<String>,
    pub student: Option<String>,
    pub student_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub config: Option<PathBuf>,
}

pub async fn execute(args: GenerateArgs) -> Result<()> {
    let config = load_config_from(args.config.as_deref())?;
    let questions = read_text_source(&args.questions)?;

    let provider_name = args
        .provider
        .unwrap_or_else(|| config.default_provider.clone());
    let Some(provider_config) = config.providers.get(&provider_name) else {
        let mut available: Vec<&String> = config.providers.keys().collect();
        available.sort();
        anyhow::bail!("provider '{provider_name}' not found in config. Available: {available:?}");
    };
    let model = args.model.unwrap_or_else(|| config.default_model.clone());

    let provider = create_provider(provider_config)?;
    let generator = ModelKeyGenerator::new(provider, config.generator_config(&model));

    tracing::info!(provider = %provider_name, model = %model, "generating model answer key");
    let generated = generator.generate(&questions).await?;
    if generated.used_fallback {
        eprintln!("Warning: provider failed, using fallback answers from config.");
    }

    if let Some(path) = &args.output {
        std::fs::write(path, format!("{}\n", generated.key))
            .with_context(|| format!("failed to write answer key to {}", path.display()))?;
        eprintln!("Answer key saved to: {}", path.display());
    }

    let student_text = if args.student.is_some() || args.student_file.is_some() {
        Some(read_source(args.student, args.student_file, "student answers")?)
    } else {
        None
    };
    let evaluation =
        student_text.map(|text| evaluate_detailed(&generated.key, &parse_answer_text(&text)));

    match args.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "generated": generated,
                "evaluation": evaluation,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            println!("{}", generated.key);
            if let Some(evaluation) = &evaluation {
                let result = evaluation.result();
                println!("\nScore: {result} ({:.1}%)", result.percentage());
                println!("{}", outcome_table(evaluation));
            }
        }
    }

    Ok(())
}
