// src/pipeline/select.rs

use crate::error::Result;
use crate::models::{
    Config, Corpus, GradeBand, SearchQuery, SelectionSummary, StandardRecord, standards_block,
};
use crate::services::{RelevanceSelector, load_corpus};

/// Select standards for a query against a loaded corpus.
pub fn select_for(
    config: &Config,
    corpus: &Corpus,
    band: Option<GradeBand>,
    query: &SearchQuery,
) -> Vec<StandardRecord> {
    let selector = RelevanceSelector::new(config.selector.clone());
    let selection = selector.select(&corpus.items, &query.text(), band);

    let summary = SelectionSummary::of(&selection);
    log::info!(
        "Selected {} standard(s) across {} subject(s)",
        summary.standards_count,
        summary.subjects_count
    );
    if !summary.is_valid {
        log::warn!("Selection does not cover two subjects");
    }
    selection
}

/// Load the corpus, select standards and print them.
pub async fn run_select(
    config: &Config,
    band: Option<GradeBand>,
    query: &SearchQuery,
) -> Result<Vec<StandardRecord>> {
    let corpus = load_corpus(config).await?;
    let selection = select_for(config, &corpus, band, query);

    println!("{}", standards_block(&selection));
    let summary = SelectionSummary::of(&selection);
    println!(
        "subjects: {}, standards: {}, valid: {}",
        summary.subjects_count, summary.standards_count, summary.is_valid
    );
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Seed;

    #[test]
    fn test_select_for_seed_corpus() {
        let corpus = Corpus::new(Seed::default().standards, true);
        let query = SearchQuery {
            keywords: vec!["덧셈".into()],
            ..SearchQuery::default()
        };

        let selection = select_for(
            &Config::default(),
            &corpus,
            Some(GradeBand::Grades1To2),
            &query,
        );
        let summary = SelectionSummary::of(&selection);
        assert!(summary.is_valid);
        assert!(selection.len() <= 4);
        assert!(selection.iter().all(|r| r.grade_band == GradeBand::Grades1To2));
    }
}
