//! Curriculum standard records and their closed vocabularies.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Digit(s), Hangul subject abbreviation, two-digit area, dash, two-digit item.
static CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+[가-힣]+[0-9]{2}-[0-9]{2}").expect("valid code pattern"));

/// Check whether a bracketed token is a real standard code (e.g. `6국01-01`).
pub fn is_valid_code(code: &str) -> bool {
    CODE_PATTERN.is_match(code)
}

/// Curriculum revision that produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Framework {
    /// 2015 revision, grades 5-6 only
    #[serde(rename = "2015")]
    Curriculum2015,

    /// 2022 revision, all elementary grade bands
    #[serde(rename = "2022")]
    Curriculum2022,
}

impl Framework {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framework::Curriculum2015 => "2015",
            Framework::Curriculum2022 => "2022",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Framework {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "2015" => Ok(Framework::Curriculum2015),
            "2022" => Ok(Framework::Curriculum2022),
            other => Err(AppError::validation(format!("unknown framework '{other}'"))),
        }
    }
}

/// Two-year elementary schooling stage.
///
/// Variant order follows the schooling stage, which is also the order of
/// the string forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum GradeBand {
    #[serde(rename = "1-2")]
    Grades1To2,
    #[serde(rename = "3-4")]
    Grades3To4,
    #[serde(rename = "5-6")]
    Grades5To6,
}

impl GradeBand {
    pub const ALL: [GradeBand; 3] = [
        GradeBand::Grades1To2,
        GradeBand::Grades3To4,
        GradeBand::Grades5To6,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GradeBand::Grades1To2 => "1-2",
            GradeBand::Grades3To4 => "3-4",
            GradeBand::Grades5To6 => "5-6",
        }
    }

    /// Map a `first~last` grade range onto a canonical band.
    ///
    /// Only the three canonical pairs are accepted; anything else is `None`.
    pub fn from_range(first: u32, last: u32) -> Option<Self> {
        match (first, last) {
            (1, 2) => Some(GradeBand::Grades1To2),
            (3, 4) => Some(GradeBand::Grades3To4),
            (5, 6) => Some(GradeBand::Grades5To6),
            _ => None,
        }
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GradeBand {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradeBand::ALL
            .into_iter()
            .find(|band| band.as_str() == s.trim())
            .ok_or_else(|| {
                AppError::validation(format!("unknown grade band '{s}' (expected 1-2, 3-4 or 5-6)"))
            })
    }
}

/// One achievement standard tied to a framework, subject, band and code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandardRecord {
    pub framework: Framework,

    /// Subject name with all whitespace removed (e.g. "국어")
    pub subject: String,

    pub grade_band: GradeBand,

    /// Standard code without brackets (e.g. "6국01-01")
    pub code: String,

    pub statement: String,
}

impl StandardRecord {
    pub fn new(
        framework: Framework,
        subject: impl Into<String>,
        grade_band: GradeBand,
        code: impl Into<String>,
        statement: impl Into<String>,
    ) -> Self {
        Self {
            framework,
            subject: subject.into(),
            grade_band,
            code: code.into(),
            statement: statement.into(),
        }
    }

    /// Identity used for deduplication.
    pub fn key(&self) -> (Framework, &str) {
        (self.framework, self.code.as_str())
    }

    /// Render as a `[code] statement` prompt line.
    pub fn prompt_line(&self) -> String {
        format!("[{}] {}", self.code, self.statement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_validation() {
        assert!(is_valid_code("6국01-01"));
        assert!(is_valid_code("4사02-03"));
        assert!(is_valid_code("2슬01-04"));
        assert!(!is_valid_code("주의"));
        assert!(!is_valid_code("6국1-1"));
        assert!(!is_valid_code("AB01-01"));
        // Fullwidth and other non-ASCII digits are not code digits.
        assert!(!is_valid_code("６국０１-０１"));
        assert!(!is_valid_code("٦국01-01"));
    }

    #[test]
    fn test_grade_band_from_range() {
        assert_eq!(GradeBand::from_range(1, 2), Some(GradeBand::Grades1To2));
        assert_eq!(GradeBand::from_range(5, 6), Some(GradeBand::Grades5To6));
        assert_eq!(GradeBand::from_range(2, 3), None);
        assert_eq!(GradeBand::from_range(7, 8), None);
    }

    #[test]
    fn test_grade_band_order_matches_strings() {
        let mut by_variant = GradeBand::ALL.to_vec();
        by_variant.sort();
        let mut by_string = GradeBand::ALL.to_vec();
        by_string.sort_by_key(|b| b.as_str());
        assert_eq!(by_variant, by_string);
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!("3-4".parse::<GradeBand>().unwrap(), GradeBand::Grades3To4);
        assert!("7-8".parse::<GradeBand>().is_err());
        assert_eq!(
            "2022".parse::<Framework>().unwrap(),
            Framework::Curriculum2022
        );
        assert!("2009".parse::<Framework>().is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let record = StandardRecord::new(
            Framework::Curriculum2015,
            "국어",
            GradeBand::Grades5To6,
            "6국01-01",
            "설명",
        );
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["framework"], "2015");
        assert_eq!(json["gradeBand"], "5-6");
        assert_eq!(json["code"], "6국01-01");
        assert_eq!(record.prompt_line(), "[6국01-01] 설명");
    }
}
