//! 2015 revision document: one grade band (5-6), subjects as numbered
//! top-level headings such as `# **1. 국어**`.

use std::sync::LazyLock;

use regex::Regex;

use super::{content_lines, parse_code_line};
use crate::models::{Framework, GradeBand, StandardRecord};
use crate::utils::compact;

/// The document only covers the last elementary band.
const GRADE_BAND: GradeBand = GradeBand::Grades5To6;

static SUBJECT_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s*[*_`]*\s*\d+\.?\s*([^*`]+?)[*_`]*\s*$").expect("valid subject header pattern")
});

/// Parse a 2015 revision document.
pub fn parse_2015(text: &str) -> Vec<StandardRecord> {
    let mut records = Vec::new();
    let mut current_subject = String::new();

    for line in content_lines(text) {
        if let Some(caps) = SUBJECT_HEADER.captures(line) {
            current_subject = compact(&caps[1]);
            continue;
        }

        if current_subject.is_empty() {
            continue;
        }

        if let Some((code, statement)) = parse_code_line(line) {
            records.push(StandardRecord::new(
                Framework::Curriculum2015,
                current_subject.clone(),
                GRADE_BAND,
                code,
                statement,
            ));
        }
    }

    records
}
