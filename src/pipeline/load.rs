// src/pipeline/load.rs

use crate::error::Result;
use crate::models::{Config, CorpusMeta};
use crate::services::load_corpus;

/// Load the corpus and print its summary, or the whole corpus as JSON.
pub async fn run_load(config: &Config, json: bool) -> Result<()> {
    let corpus = load_corpus(config).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&corpus)?);
    } else {
        println!("{}", describe(&corpus.meta));
    }
    Ok(())
}

/// Multi-line human summary of a corpus.
pub fn describe(meta: &CorpusMeta) -> String {
    let join = |items: Vec<String>| items.join(", ");

    let mut lines = vec![
        format!("standards:  {}", meta.count),
        format!(
            "frameworks: {}",
            join(meta.frameworks.iter().map(|f| f.to_string()).collect())
        ),
        format!("subjects:   {}", meta.subjects.join(", ")),
        format!(
            "bands:      {}",
            join(meta.grade_bands.iter().map(|b| b.to_string()).collect())
        ),
    ];
    if meta.used_fallback {
        lines.push("source:     built-in seed (no curriculum document was usable)".to_string());
    }
    lines.join("\n")
}
