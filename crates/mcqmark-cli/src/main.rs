//! mcqmark CLI: extract MCQ answer keys and score students against them.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

use commands::OutputFormat;

#[derive(Parser)]
#[command(
    name = "mcqmark",
    version,
    about = "Extract MCQ answer keys from loose text and score student answers"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score student answers against a model answer key
    Grade {
        /// Model answer key text (e.g. "1A 2B 3C")
        #[arg(long, conflicts_with = "model_key_file", required_unless_present = "model_key_file")]
        model_key: Option<String>,

        /// File containing the model answer key
        #[arg(long)]
        model_key_file: Option<PathBuf>,

        /// Student answer text
        #[arg(long, conflicts_with = "student_file", required_unless_present = "student_file")]
        student: Option<String>,

        /// File containing the student answers
        #[arg(long)]
        student_file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Show a per-question breakdown (text format)
        #[arg(long)]
        details: bool,
    },

    /// Parse answer text into a canonical answer key
    Parse {
        /// Answer text
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,

        /// File containing answer text
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Split a question paper into individual questions
    Split {
        /// Question paper text
        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,

        /// File containing the question paper
        #[arg(long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Grade a JSON document with `model_answers` and `student_answers`
    Json {
        /// JSON input file (reads stdin when omitted)
        #[arg(long)]
        input: Option<PathBuf>,
    },

    /// Generate a model answer key for a question paper using a provider
    Generate {
        /// File containing the question paper
        #[arg(long)]
        questions: PathBuf,

        /// Provider name from the config (defaults to `default_provider`)
        #[arg(long)]
        provider: Option<String>,

        /// Model to ask (defaults to `default_model`)
        #[arg(long)]
        model: Option<String>,

        /// Student answer text to grade against the generated key
        #[arg(long, conflicts_with = "student_file")]
        student: Option<String>,

        /// File containing student answers to grade against the generated key
        #[arg(long)]
        student_file: Option<PathBuf>,

        /// Write the generated key to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List available models
    ListModels {
        /// Filter to specific provider
        #[arg(long)]
        provider: Option<String>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("mcqmark=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            model_key,
            model_key_file,
            student,
            student_file,
            format,
            details,
        } => commands::grade::execute(
            model_key,
            model_key_file,
            student,
            student_file,
            format,
            details,
        ),
        Commands::Parse { text, file, format } => commands::parse::execute(text, file, format),
        Commands::Split { text, file, format } => commands::split::execute(text, file, format),
        Commands::Json { input } => commands::json::execute(input),
        Commands::Generate {
            questions,
            provider,
            model,
            student,
            student_file,
            output,
            format,
            config,
        } => {
            commands::generate::execute(commands::generate::GenerateArgs {
                questions,
                provider,
                model,
                student,
                student_file,
                output,
                format,
                config,
            })
            .await
        }
        Commands::ListModels { provider, config } => {
            commands::list_models::execute(provider, config)
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
