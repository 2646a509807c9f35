//! The `mcqmark list-models` command.

use std::path::PathBuf;

use anyhow::Result;

use mcqmark_providers::config::load_config_from;
use mcqmark_providers::create_provider;

pub fn execute(provider_filter: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let mut names: Vec<&String> = config.providers.keys().collect();
    names.sort();

    let mut found_any = false;

    for name in names {
        if provider_filter.as_ref().is_some_and(|filter| filter != name) {
            continue;
        }

        let provider = create_provider(&config.providers[name])?;
        let models = provider.available_models();

        if !models.is_empty() {
            found_any = true;
            println!("Provider: {name} ({})", provider.name());
            for model in &models {
                println!("  {} ({})", model.id, model.name);
            }
            println!();
        }
    }

    if !found_any {
        println!("No providers configured. Run `mcqmark init` to create a config file.");
    }

    Ok(())
}
