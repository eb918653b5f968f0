// src/services/loader.rs

//! Corpus loader.
//!
//! Fetches both curriculum documents concurrently, parses whatever is
//! available and merges the results. Loading never fails: missing sources
//! are skipped and the seed set stands in when nothing usable remains.

use crate::error::Result;
use crate::models::{Config, Corpus, Framework, Seed, StandardRecord};
use crate::pipeline::merge;
use crate::services::parser::parse_document;
use crate::services::source::{DocumentSource, source_for_location};
use crate::utils::http::create_async_client;

/// Service that builds a fresh [`Corpus`] on every call to [`load`](Self::load).
pub struct CorpusLoader {
    source_2015: Box<dyn DocumentSource>,
    source_2022: Box<dyn DocumentSource>,
    seed: Seed,
}

impl CorpusLoader {
    /// Create a loader from explicit sources.
    pub fn new(
        source_2015: Box<dyn DocumentSource>,
        source_2022: Box<dyn DocumentSource>,
        seed: Seed,
    ) -> Self {
        Self {
            source_2015,
            source_2022,
            seed,
        }
    }

    /// Create a loader for the locations and seed file in the configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = create_async_client(&config.http)?;
        let seed = Seed::load_or_default(config.sources.seed_file.as_deref());

        Ok(Self::new(
            source_for_location(&config.sources.curriculum_2015, &client),
            source_for_location(&config.sources.curriculum_2022, &client),
            seed,
        ))
    }

    /// Load, merge, deduplicate and sort the corpus.
    pub async fn load(&self) -> Corpus {
        let (doc_2015, doc_2022) = futures::join!(
            Self::fetch(self.source_2015.as_ref()),
            Self::fetch(self.source_2022.as_ref())
        );

        let documents: Vec<(Framework, Vec<u8>)> = [
            (Framework::Curriculum2015, doc_2015),
            (Framework::Curriculum2022, doc_2022),
        ]
        .into_iter()
        .filter_map(|(framework, doc)| doc.map(|bytes| (framework, bytes)))
        .collect();

        if documents.is_empty() {
            log::warn!("No curriculum document available, using seed standards");
            return self.fallback();
        }

        let mut batches = Vec::with_capacity(documents.len());
        for (framework, bytes) in &documents {
            match parse_document(*framework, bytes) {
                Ok(records) => {
                    log::info!(
                        "Parsed {} standard(s) from the {} document",
                        records.len(),
                        framework
                    );
                    batches.push(records);
                }
                Err(e) => {
                    log::warn!("{}. Using seed standards.", e);
                    return self.fallback();
                }
            }
        }

        let corpus = Corpus::new(merge::merge(batches), false);
        if corpus.is_empty() {
            log::warn!("Curriculum documents contain no standards, using seed standards");
            return self.fallback();
        }
        log::info!(
            "Loaded {} standard(s) across {} subject(s)",
            corpus.meta.count,
            corpus.meta.subjects.len()
        );
        corpus
    }

    /// Fetch one document, folding every failure into "unavailable".
    async fn fetch(source: &dyn DocumentSource) -> Option<Vec<u8>> {
        match source.fetch().await {
            Ok(Some(bytes)) => Some(bytes),
            Ok(None) => {
                log::warn!("Curriculum document not found: {}", source.location());
                None
            }
            Err(e) => {
                log::warn!(
                    "Curriculum document unavailable: {}: {}",
                    source.location(),
                    e
                );
                None
            }
        }
    }

    fn fallback(&self) -> Corpus {
        let records: Vec<StandardRecord> = self.seed.standards.clone();
        Corpus::new(merge::merge([records]), true)
    }
}

/// Load the corpus described by a configuration.
pub async fn load_corpus(config: &Config) -> Result<Corpus> {
    Ok(CorpusLoader::from_config(config)?.load().await)
}
