//! Loaded corpus and its summary.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::standard::{Framework, GradeBand, StandardRecord};

/// Distinct-value projections of a corpus.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusMeta {
    pub frameworks: Vec<Framework>,
    pub subjects: Vec<String>,
    pub grade_bands: Vec<GradeBand>,
    pub count: usize,

    /// True when the built-in seed set replaced the source documents
    pub used_fallback: bool,
}

impl CorpusMeta {
    /// Summarize a record set. Every projection is sorted ascending.
    pub fn from_items(items: &[StandardRecord], used_fallback: bool) -> Self {
        let frameworks: BTreeSet<Framework> = items.iter().map(|r| r.framework).collect();
        let subjects: BTreeSet<&str> = items.iter().map(|r| r.subject.as_str()).collect();
        let grade_bands: BTreeSet<GradeBand> = items.iter().map(|r| r.grade_band).collect();

        Self {
            frameworks: frameworks.into_iter().collect(),
            subjects: subjects.into_iter().map(String::from).collect(),
            grade_bands: grade_bands.into_iter().collect(),
            count: items.len(),
            used_fallback,
        }
    }
}

/// Deduplicated, sorted standards available at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    pub items: Vec<StandardRecord>,
    pub meta: CorpusMeta,
}

impl Corpus {
    /// Wrap already merged items and compute their summary.
    pub fn new(items: Vec<StandardRecord>, used_fallback: bool) -> Self {
        let meta = CorpusMeta::from_items(&items, used_fallback);
        Self { items, meta }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(framework: Framework, subject: &str, band: GradeBand, code: &str) -> StandardRecord {
        StandardRecord::new(framework, subject, band, code, "설명")
    }

    #[test]
    fn test_meta_projections_are_sorted_and_distinct() {
        let items = vec![
            record(Framework::Curriculum2022, "수학", GradeBand::Grades3To4, "4수01-01"),
            record(Framework::Curriculum2015, "국어", GradeBand::Grades5To6, "6국01-01"),
            record(Framework::Curriculum2022, "국어", GradeBand::Grades1To2, "2국01-01"),
        ];
        let meta = CorpusMeta::from_items(&items, false);

        assert_eq!(
            meta.frameworks,
            vec![Framework::Curriculum2015, Framework::Curriculum2022]
        );
        assert_eq!(meta.subjects, vec!["국어", "수학"]);
        assert_eq!(
            meta.grade_bands,
            vec![GradeBand::Grades1To2, GradeBand::Grades3To4, GradeBand::Grades5To6]
        );
        assert_eq!(meta.count, 3);
        assert!(!meta.used_fallback);
    }

    #[test]
    fn test_meta_json_field_names() {
        let corpus = Corpus::new(Vec::new(), true);
        let json = serde_json::to_value(&corpus.meta).unwrap();
        assert_eq!(json["usedFallback"], true);
        assert_eq!(json["count"], 0);
        assert!(json["gradeBands"].as_array().unwrap().is_empty());
    }
}
