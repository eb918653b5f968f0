// src/utils/text.rs

//! Text normalization for Markdown fragments.

/// Strip Markdown decoration and canonicalize whitespace.
///
/// Removes `**` and backticks, turns non-breaking spaces into plain
/// spaces, collapses whitespace runs and trims both ends.
pub fn clean_text(text: &str) -> String {
    let stripped = text.replace("**", "").replace('`', "").replace('\u{00A0}', " ");
    normalize_whitespace(&stripped)
}

/// Clean a fragment and drop every remaining space (subject names).
pub fn compact(text: &str) -> String {
    clean_text(text).split_whitespace().collect()
}

fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_decoration() {
        assert_eq!(clean_text("**[6국01-01]**"), "[6국01-01]");
        assert_eq!(clean_text("`코드` 설명"), "코드 설명");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(clean_text("  듣기 \t 말하기\n활동  "), "듣기 말하기 활동");
        assert_eq!(clean_text("a\u{00A0}\u{00A0}b"), "a b");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text(" ** `` "), "");
    }

    #[test]
    fn test_single_emphasis_is_kept() {
        // Only bold markers are decoration.
        assert_eq!(clean_text("*강조*"), "*강조*");
    }

    #[test]
    fn test_compact() {
        assert_eq!(compact("사 회"), "사회");
        assert_eq!(compact("** 바른 생활 **"), "바른생활");
    }
}
