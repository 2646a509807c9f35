//! The `mcqmark init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("mcqmark.toml").exists() {
        println!("mcqmark.toml already exists, skipping.");
    } else {
        std::fs::write("mcqmark.toml", SAMPLE_CONFIG)?;
        println!("Created mcqmark.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit mcqmark.toml with your API keys");
    println!("  2. Run: mcqmark split --file paper.txt");
    println!("  3. Run: mcqmark generate --questions paper.txt --student \"1a 2b 3c\"");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mcqmark configuration

default_provider = "gemini"
default_model = "gemini-1.5-pro"
default_temperature = 0.0
max_retries = 3
retry_delay_ms = 1000
# Used when the provider keeps failing.
# fallback_answers = "1 b\n2 b\n3 d\n4 c"

[providers.gemini]
type = "gemini"
api_key = "${GEMINI_API_KEY}"

[providers.openai]
type = "openai"
api_key = "${OPENAI_API_KEY}"

[providers.groq]
type = "openai"
api_key = "${GROQ_API_KEY}"
base_url = "https://api.groq.com/openai"

[providers.offline]
type = "offline"
default_answer = "a"

[providers.offline.answers]
1 = "b"
2 = "b"
3 = "d"
4 = "c"
"#;
