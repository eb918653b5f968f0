//! Fallback seed data used when no curriculum document can be read.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

use super::standard::{Framework, GradeBand, StandardRecord, is_valid_code};

/// Root seed data structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    /// Standards handed out in place of a parsed corpus
    pub standards: Vec<StandardRecord>,
}

impl Seed {
    /// Load seed data from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load seed data from an optional file, falling back to the built-in set.
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };

        match Self::load(path).and_then(|seed| seed.validate().map(|()| seed)) {
            Ok(seed) => seed,
            Err(e) => {
                log::warn!("Seed load failed from {:?}: {}. Using built-in seed.", path, e);
                Self::default()
            }
        }
    }

    /// Validate that the seed can stand in for a real corpus.
    pub fn validate(&self) -> Result<()> {
        if self.standards.is_empty() {
            return Err(AppError::validation("No standards defined in seed data"));
        }

        if let Some(bad) = self.standards.iter().find(|s| s.subject.trim().is_empty()) {
            return Err(AppError::validation(format!(
                "Seed standard {} has an empty subject",
                bad.code
            )));
        }

        let subjects: HashSet<&str> = self.standards.iter().map(|s| s.subject.as_str()).collect();
        if subjects.len() < 2 {
            return Err(AppError::validation(
                "Seed data must cover at least two subjects",
            ));
        }

        if let Some(bad) = self.standards.iter().find(|s| !is_valid_code(&s.code)) {
            return Err(AppError::validation(format!(
                "Seed standard has an invalid code: {}",
                bad.code
            )));
        }
        if let Some(bad) = self.standards.iter().find(|s| s.statement.trim().is_empty()) {
            return Err(AppError::validation(format!(
                "Seed standard {} has an empty statement",
                bad.code
            )));
        }
        Ok(())
    }
}

impl Default for Seed {
    fn default() -> Self {
        let standard = |framework, subject: &str, band, code: &str, statement: &str| {
            StandardRecord::new(framework, subject, band, code, statement)
        };

        Self {
            standards: vec![
                standard(
                    Framework::Curriculum2015,
                    "국어",
                    GradeBand::Grades5To6,
                    "6국01-01",
                    "구어 의사소통의 특성을 바탕으로 하여 듣기·말하기 활동을 한다.",
                ),
                standard(
                    Framework::Curriculum2015,
                    "사회",
                    GradeBand::Grades5To6,
                    "6사01-01",
                    "우리 국토의 위치와 영역이 지니는 특성을 설명하고, 이를 바탕으로 국토 사랑의 태도를 기른다.",
                ),
                standard(
                    Framework::Curriculum2022,
                    "국어",
                    GradeBand::Grades1To2,
                    "2국01-01",
                    "상황에 어울리는 인사말을 주고받는다.",
                ),
                standard(
                    Framework::Curriculum2022,
                    "수학",
                    GradeBand::Grades1To2,
                    "2수01-01",
                    "0과 100까지의 수 개념을 이해하고, 수를 세고 읽고 쓸 수 있다.",
                ),
                standard(
                    Framework::Curriculum2022,
                    "과학",
                    GradeBand::Grades3To4,
                    "4과01-01",
                    "일상생활에서 자석을 찾아보고 자석의 성질을 탐구한다.",
                ),
                standard(
                    Framework::Curriculum2022,
                    "수학",
                    GradeBand::Grades3To4,
                    "4수01-01",
                    "큰 수의 필요성을 인식하면서 10000 이상의 큰 수에 대한 자릿값과 위치적 기수법을 이해하고, 수를 읽고 쓸 수 있다.",
                ),
            ],
        }
    }
}
