//! Line-oriented parsers for the curriculum standard documents.
//!
//! Each framework has its own document dialect; [`parse`] dispatches on
//! [`Framework`]. Parsers are permissive: anything that does not look like
//! a header or a valid standard line is skipped, never reported as an error.

mod curriculum_2015;
mod curriculum_2022;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::{Framework, StandardRecord, is_valid_code};
use crate::utils::clean_text;

pub use curriculum_2015::parse_2015;
pub use curriculum_2022::parse_2022;

/// `[code] statement`, wherever the bracket appears on the line.
static CODE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\s*([^\]]+?)\s*\]\s*(.+)$").expect("valid code line pattern"));

/// Parse document text with the parser for its framework.
pub fn parse(framework: Framework, text: &str) -> Vec<StandardRecord> {
    match framework {
        Framework::Curriculum2015 => parse_2015(text),
        Framework::Curriculum2022 => parse_2022(text),
    }
}

/// Decode raw document bytes and parse them.
///
/// Content that is not UTF-8 is the only condition reported as an error.
pub fn parse_document(framework: Framework, bytes: &[u8]) -> Result<Vec<StandardRecord>> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| AppError::parse(framework, format!("document is not valid UTF-8: {e}")))?;
    let text = text.strip_prefix('\u{FEFF}').unwrap_or(text);
    Ok(parse(framework, text))
}

/// Trimmed, non-blank lines of a document.
fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Extract a validated `(code, statement)` pair from a standard line.
///
/// Returns `None` for lines without a bracket and for bracketed text that
/// is not a standard code.
fn parse_code_line(line: &str) -> Option<(String, String)> {
    let caps = CODE_LINE.captures(line)?;
    let code = clean_text(caps.get(1)?.as_str());
    let statement = clean_text(caps.get(2)?.as_str());

    if !is_valid_code(&code) {
        log::debug!("Discarded bracketed text '{}': not a standard code", code);
        return None;
    }
    Some((code, statement))
}
