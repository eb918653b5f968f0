// src/services/selector.rs

//! Relevance selector.
//!
//! Picks a small, subject-diverse set of standards for a topic within one
//! grade band. Selection never fails; when the corpus cannot provide enough
//! diversity a fixed pair of introductory standards is returned instead.

use std::collections::HashSet;

use unicode_segmentation::UnicodeSegmentation;

use crate::models::{Framework, GradeBand, SelectorConfig, StandardRecord};

/// Minimum query word length considered for statement matching.
const MIN_WORD_LENGTH: usize = 2;

/// Service selecting anchor standards for a lesson topic.
#[derive(Debug, Clone, Default)]
pub struct RelevanceSelector {
    config: SelectorConfig,
}

impl RelevanceSelector {
    pub fn new(config: SelectorConfig) -> Self {
        Self { config }
    }

    /// Select standards for `query` within `band` (or the default band).
    pub fn select(
        &self,
        corpus: &[StandardRecord],
        query: &str,
        band: Option<GradeBand>,
    ) -> Vec<StandardRecord> {
        let band = band.unwrap_or(self.config.default_band);
        let candidates: Vec<&StandardRecord> =
            corpus.iter().filter(|r| r.grade_band == band).collect();

        if candidates.is_empty() {
            log::warn!("No standards for grade band {}, using fallback pair", band);
            return fallback_pair(band);
        }

        let matcher = QueryMatcher::new(query);
        let relevant: Vec<&StandardRecord> = candidates
            .iter()
            .copied()
            .filter(|r| matcher.is_relevant(r))
            .collect();

        let mut selection = self.pick_diverse(&relevant);
        self.top_up(&mut selection, &candidates);

        if subject_count(&selection) < self.config.min_subjects {
            log::warn!(
                "Grade band {} cannot cover {} subjects, using fallback pair",
                band,
                self.config.min_subjects
            );
            return fallback_pair(band);
        }

        log::debug!(
            "Selected {} standard(s) from {} relevant candidate(s)",
            selection.len(),
            relevant.len()
        );
        selection.into_iter().cloned().collect()
    }

    /// One record per subject first, then a second per subject once the
    /// selection is diverse enough.
    fn pick_diverse<'a>(&self, relevant: &[&'a StandardRecord]) -> Vec<&'a StandardRecord> {
        let groups = group_by_subject(relevant);
        let mut selection = Vec::new();

        for round in 0..2 {
            if round > 0 && subject_count(&selection) < self.config.min_subjects {
                break;
            }
            for group in &groups {
                if selection.len() >= self.config.max_records {
                    return selection;
                }
                if let Some(record) = group.get(round) {
                    selection.push(*record);
                }
            }
        }
        selection
    }

    /// Add one record per missing subject, core subjects first, until the
    /// selection is diverse enough or the band runs out of subjects.
    fn top_up<'a>(&self, selection: &mut Vec<&'a StandardRecord>, candidates: &[&'a StandardRecord]) {
        let other_subjects = group_by_subject(candidates)
            .into_iter()
            .filter_map(|group| group.first().map(|r| r.subject.clone()));
        let preferred: Vec<String> = self
            .config
            .core_subjects
            .iter()
            .cloned()
            .chain(other_subjects)
            .collect();

        for subject in preferred {
            if subject_count(selection) >= self.config.min_subjects
                || selection.len() >= self.config.max_records
            {
                break;
            }
            if selection.iter().any(|r| r.subject == subject) {
                continue;
            }
            if let Some(record) = candidates.iter().find(|r| r.subject == subject) {
                selection.push(*record);
            }
        }
    }
}

/// Select standards with the default policy.
pub fn select_relevant_standards(
    corpus: &[StandardRecord],
    query: &str,
    band: Option<GradeBand>,
) -> Vec<StandardRecord> {
    RelevanceSelector::default().select(corpus, query, band)
}

/// Fixed introductory pair returned when selection cannot succeed.
pub fn fallback_pair(band: GradeBand) -> Vec<StandardRecord> {
    vec![
        StandardRecord::new(
            Framework::Curriculum2022,
            "국어",
            band,
            "2국01-01",
            "자신의 경험을 바탕으로 하여 느낌이나 생각을 말한다.",
        ),
        StandardRecord::new(
            Framework::Curriculum2022,
            "수학",
            band,
            "2수03-01",
            "구체물이나 그림을 이용하여 덧셈과 뺄셈의 의미를 이해한다.",
        ),
    ]
}

/// Case-insensitive relevance test against one query.
struct QueryMatcher {
    query: String,
    words: Vec<String>,
}

impl QueryMatcher {
    fn new(query: &str) -> Self {
        let query = query.trim().to_lowercase();
        let words = {
            let mut seen = HashSet::new();
            query
                .unicode_words()
                .filter(|w| w.chars().count() >= MIN_WORD_LENGTH)
                .filter(|w| !is_stopword(w))
                .filter(|w| seen.insert(*w))
                .map(String::from)
                .collect()
        };
        Self { query, words }
    }

    /// Query mentions the subject or code, or the statement shares text
    /// with the query.
    fn is_relevant(&self, record: &StandardRecord) -> bool {
        if self.query.is_empty() {
            return false;
        }
        let statement = record.statement.to_lowercase();

        self.query.contains(&record.subject.to_lowercase())
            || self.query.contains(&record.code.to_lowercase())
            || statement.contains(&self.query)
            || self.words.iter().any(|w| statement.contains(w.as_str()))
    }
}

fn is_stopword(word: &str) -> bool {
    const STOPWORDS: &[&str] = &[
        // Korean particles, endings and filler
        "및", "의", "를", "을", "가", "이", "은", "는", "에서", "으로", "로", "와", "과", "하기",
        "활동", "수업", "프로젝트",
        // English common words
        "the", "and", "or", "of", "to", "in", "for", "on", "with", "an",
    ];
    STOPWORDS.contains(&word)
}

/// Group records by subject, keeping first-appearance order of subjects and
/// the original order within each group.
fn group_by_subject<'a>(records: &[&'a StandardRecord]) -> Vec<Vec<&'a StandardRecord>> {
    let mut groups: Vec<Vec<&'a StandardRecord>> = Vec::new();
    for record in records {
        match groups.iter_mut().find(|g| g[0].subject == record.subject) {
            Some(group) => group.push(*record),
            None => groups.push(vec![*record]),
        }
    }
    groups
}

fn subject_count(records: &[&StandardRecord]) -> usize {
    records
        .iter()
        .map(|r| r.subject.as_str())
        .collect::<HashSet<_>>()
        .len()
}
