//! Selection inputs and the checks applied to a chosen set of standards.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::standard::StandardRecord;

/// Topic a teacher wants standards for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchQuery {
    pub keywords: Vec<String>,
    pub idea_title: String,
    pub idea_description: String,
}

impl SearchQuery {
    /// Free text handed to the selector: keywords, title and description.
    pub fn text(&self) -> String {
        self.keywords
            .iter()
            .map(String::as_str)
            .chain([self.idea_title.as_str(), self.idea_description.as_str()])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Coverage figures of a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSummary {
    pub subjects_count: usize,
    pub standards_count: usize,
    pub is_valid: bool,
}

impl SelectionSummary {
    pub fn of(records: &[StandardRecord]) -> Self {
        let subjects_count = records
            .iter()
            .map(|r| r.subject.as_str())
            .collect::<HashSet<_>>()
            .len();
        let standards_count = records.len();

        Self {
            subjects_count,
            standards_count,
            is_valid: subjects_count >= 2 && standards_count >= 2,
        }
    }
}

/// Render a selection as `[code] statement` lines for a prompt.
pub fn standards_block(records: &[StandardRecord]) -> String {
    records
        .iter()
        .map(StandardRecord::prompt_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Framework, GradeBand};

    fn record(subject: &str, code: &str, statement: &str) -> StandardRecord {
        StandardRecord::new(
            Framework::Curriculum2022,
            subject,
            GradeBand::Grades3To4,
            code,
            statement,
        )
    }

    #[test]
    fn test_query_text() {
        let query = SearchQuery {
            keywords: vec!["물".into(), "환경".into()],
            idea_title: "우리 동네 물 지도".into(),
            idea_description: "하천을 조사한다".into(),
        };
        assert_eq!(query.text(), "물 환경 우리 동네 물 지도 하천을 조사한다");

        let keywords_only = SearchQuery {
            keywords: vec!["자석".into()],
            ..SearchQuery::default()
        };
        assert_eq!(keywords_only.text(), "자석");
    }

    #[test]
    fn test_summary() {
        let one_subject = vec![record("국어", "4국01-01", "a"), record("국어", "4국01-02", "b")];
        let summary = SelectionSummary::of(&one_subject);
        assert_eq!(summary.subjects_count, 1);
        assert_eq!(summary.standards_count, 2);
        assert!(!summary.is_valid);

        let mixed = vec![record("국어", "4국01-01", "a"), record("수학", "4수01-01", "b")];
        assert!(SelectionSummary::of(&mixed).is_valid);
    }

    #[test]
    fn test_standards_block() {
        let block = standards_block(&[
            record("국어", "4국01-01", "듣는다."),
            record("수학", "4수01-01", "센다."),
        ]);
        assert_eq!(block, "[4국01-01] 듣는다.\n[4수01-01] 센다.");
    }
}
