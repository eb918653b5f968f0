//! 2022 revision document: subjects as `##` headings ending in
//! `(교과명)`, grade bands as `### 초등학교 N~M학년` headings.

use std::sync::LazyLock;

use regex::Regex;

use super::{content_lines, parse_code_line};
use crate::models::{Framework, GradeBand, StandardRecord};
use crate::utils::{clean_text, compact};

const STAGE_MARKER: &str = "초등학교";

static SUBJECT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*([^)]+?)\s*\)\s*$").expect("valid subject pattern"));

/// Accepts an escaped Markdown tilde (`1\~2`) as well as `~`, `-` and `–`.
static BAND_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"초등학교\s*([0-9]+)\s*\\?[~\-–]\s*([0-9]+)\s*학년").expect("valid band pattern")
});

/// Parse a 2022 revision document.
pub fn parse_2022(text: &str) -> Vec<StandardRecord> {
    let mut records = Vec::new();
    let mut current_subject = String::new();
    let mut current_band: Option<GradeBand> = None;

    for line in content_lines(text) {
        if line.starts_with("##") && !line.starts_with("###") {
            if let Some(caps) = SUBJECT_SUFFIX.captures(&clean_text(line)) {
                current_subject = compact(&caps[1]);
                continue;
            }
        }

        if line.starts_with("###") && line.contains(STAGE_MARKER) {
            // A stage heading without a readable range leaves the band as is.
            if let Some(caps) = BAND_RANGE.captures(line) {
                current_band = band_from_captures(&caps[1], &caps[2]);
                if current_band.is_none() {
                    log::debug!("Band header out of range, clearing band: {}", line);
                }
            }
            continue;
        }

        let Some(band) = current_band else {
            continue;
        };
        if current_subject.is_empty() {
            continue;
        }

        if let Some((code, statement)) = parse_code_line(line) {
            records.push(StandardRecord::new(
                Framework::Curriculum2022,
                current_subject.clone(),
                band,
                code,
                statement,
            ));
        }
    }

    records
}

fn band_from_captures(first: &str, last: &str) -> Option<GradeBand> {
    let first = first.parse().ok()?;
    let last = last.parse().ok()?;
    GradeBand::from_range(first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r"
# 2022 개정 교육과정 초등학교 성취기준

## **2022 개정 교육과정 성취기준 (국어)**

### **초등학교 1\~2학년**

* **[2국01-01]** 상황에 어울리는 인사말을 주고받는다.
* **[2국01-02]** 일이 일어난 차례를 고려하며 듣고 말한다.

### **초등학교 3\~4학년**

* **[4국01-01]** 대화의 즐거움을 알고 대화를 나눈다.

## 2022 개정 교육과정 성취기준 (수학)

### 초등학교 5~6학년

* [6수01-01] 덧셈, 뺄셈, 곱셈, 나눗셈의 혼합 계산에서 계산하는 순서를 알고, 혼합 계산을 할 수 있다.
* [참고] 계산기 사용은 허용한다.
";

    #[test]
    fn test_parse_sample() {
        let records = parse_2022(SAMPLE);
        let summary: Vec<_> = records
            .iter()
            .map(|r| (r.subject.as_str(), r.grade_band, r.code.as_str()))
            .collect();

        assert_eq!(
            summary,
            vec![
                ("국어", GradeBand::Grades1To2, "2국01-01"),
                ("국어", GradeBand::Grades1To2, "2국01-02"),
                ("국어", GradeBand::Grades3To4, "4국01-01"),
                ("수학", GradeBand::Grades5To6, "6수01-01"),
            ]
        );
        assert!(records.iter().all(|r| r.framework == Framework::Curriculum2022));
        assert_eq!(records[0].statement, "상황에 어울리는 인사말을 주고받는다.");
    }

    #[test]
    fn test_no_record_without_subject_or_band() {
        let doc = "\
### 초등학교 1~2학년
* [2국01-01] 교과 없음
## 성취기준 (국어)
* [2국01-02] 교과가 정해진 뒤의 줄
";
        let records = parse_2022(doc);
        // Band set before the subject stays active once the subject appears.
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code, "2국01-02");
        assert_eq!(records[0].grade_band, GradeBand::Grades1To2);

        let no_band = parse_2022("## 성취기준 (국어)\n* [2국01-01] 학년군 없음");
        assert!(no_band.is_empty());
    }

    #[test]
    fn test_out_of_range_header_resets_band() {
        let doc = "\
## 성취기준 (과학)
### 초등학교 3~4학년
* [4과01-01] 자석의 성질을 탐구한다.
### 초등학교 2~3학년
* [4과01-02] 학년군이 무효이므로 버린다.
### 초등학교 5~6학년
* [6과01-01] 학년군이 다시 유효하다.
";
        let records = parse_2022(doc);
        let codes: Vec<_> = records.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["4과01-01", "6과01-01"]);
        assert!(records.iter().all(|r| !r.subject.is_empty()));
    }

    #[test]
    fn test_stage_heading_without_range_keeps_band() {
        let doc = "\
## 성취기준 (사회)
### 초등학교 3~4학년
### 초등학교 성취기준 해설
* [4사01-01] 우리 마을의 위치를 설명한다.
";
        let records = parse_2022(doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].grade_band, GradeBand::Grades3To4);
    }

    #[test]
    fn test_fullwidth_range_is_not_a_band() {
        let doc = "\
## 성취기준 (수학)
### 초등학교 3~4학년
### 초등학교 ５~６학년
* [4수01-01] 큰 수를 읽고 쓴다.
";
        let records = parse_2022(doc);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].grade_band, GradeBand::Grades3To4);
    }

    #[test]
    fn test_subject_changes_keep_band() {
        let doc = "\
## 성취기준 (국어)
### 초등학교 1~2학년
* [2국01-01] 인사말을 주고받는다.
## 성취기준 (바른 생활)
* [2바01-01] 학교생활에 필요한 규칙과 약속을 정해서 지킨다.
";
        let records = parse_2022(doc);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].subject, "바른생활");
        assert_eq!(records[1].grade_band, GradeBand::Grades1To2);
    }

    #[test]
    fn test_bracketed_non_code_with_context_is_dropped() {
        let doc = "## 성취기준 (국어)\n### 초등학교 1~2학년\n* [주의] 참고 사항";
        assert!(parse_2022(doc).is_empty());
    }

    #[test]
    fn test_parsing_is_idempotent() {
        assert_eq!(parse_2022(SAMPLE), parse_2022(SAMPLE));
    }
}
