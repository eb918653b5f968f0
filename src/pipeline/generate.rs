// src/pipeline/generate.rs

use crate::error::Result;
use crate::models::{Config, GradeBand, SearchQuery, StandardRecord};
use crate::services::generator::scenario_prompt;
use crate::services::{GeminiClient, GenerationOptions, TextGenerator, load_corpus};
use crate::utils::http::create_async_client;

use super::select::select_for;

/// Build the prompt for a selection and ask the generator for a scenario.
pub async fn generate_scenario(
    generator: &dyn TextGenerator,
    options: &GenerationOptions,
    query: &SearchQuery,
    selection: &[StandardRecord],
) -> Result<String> {
    let topic = if query.idea_title.trim().is_empty() {
        query.text()
    } else {
        query.idea_title.trim().to_string()
    };
    let prompt = scenario_prompt(&topic, selection);
    log::debug!("Prompt:\n{}", prompt);

    generator.generate(&prompt, options).await
}

/// Select standards, call the generation service and print its answer.
pub async fn run_generate(
    config: &Config,
    band: Option<GradeBand>,
    query: &SearchQuery,
) -> Result<()> {
    let client = create_async_client(&config.http)?;
    let generator = GeminiClient::from_config(client, &config.generator)?;

    let corpus = load_corpus(config).await?;
    let selection = select_for(config, &corpus, band, query);

    log::info!("Requesting scenario for {} standard(s)...", selection.len());
    let text = generate_scenario(
        &generator,
        &GenerationOptions::from(&config.generator),
        query,
        &selection,
    )
    .await?;

    println!("{}", text);
    Ok(())
}
