//! Search query normalization
//!
//! Canonicalizes free-text queries so that "3rd Season" and "Season 3"
//! reach the upstream search as the same string.

use std::sync::LazyLock;

use regex::Regex;

static ORDINAL_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d+)(?:st|nd|rd|th)\b").expect("valid ordinal regex"));
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace regex"));
static NUMBER_THEN_SEASON: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s*season").expect("valid season regex"));
static SEASON_THEN_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)season\s*(\d+)").expect("valid season regex"));

/// Normalizes a raw search query
///
/// Steps, in order:
/// 1. `3rd` → `3` (ordinal suffixes on whole numbers)
/// 2. whitespace runs → single space
/// 3. first `<n> Season` → `<n>`
/// 4. first `Season <n>` → `<n>`
/// 5. trim
///
/// # Example
/// ```
/// use anime_source_core::normalize_query;
/// assert_eq!(normalize_query("Attack on Titan 3rd Season"), "Attack on Titan 3");
/// assert_eq!(normalize_query("  My   Show "), "My Show");
/// ```
pub fn normalize_query(raw: &str) -> String {
    let query = ORDINAL_SUFFIX.replace_all(raw, "$1");
    let query = WHITESPACE_RUN.replace_all(&query, " ");
    let query = NUMBER_THEN_SEASON.replace(&query, "$1");
    let query = SEASON_THEN_NUMBER.replace(&query, "$1");
    query.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_season_forms_are_equivalent() {
        assert_eq!(normalize_query("3rd Season"), "3");
        assert_eq!(normalize_query("Season 3"), "3");
        assert_eq!(normalize_query("3rd Season"), normalize_query("Season 3"));
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_query("  My   Show "), "My Show");
        assert_eq!(normalize_query("a\t\n b"), "a b");
    }

    #[test]
    fn test_strips_ordinals() {
        assert_eq!(normalize_query("1st 2nd 3rd 4th 21st"), "1 2 3 4 21");
        assert_eq!(normalize_query("the 100th day"), "the 100 day");
    }

    #[test]
    fn test_ordinal_needs_word_boundary() {
        assert_eq!(normalize_query("1stly"), "1stly");
        assert_eq!(normalize_query("a3rd"), "a3rd");
    }

    #[test]
    fn test_season_case_insensitive() {
        assert_eq!(normalize_query("Show SEASON 2"), "Show 2");
        assert_eq!(normalize_query("Show 2nd season"), "Show 2");
        assert_eq!(normalize_query("Show season2"), "Show 2");
    }

    #[test]
    fn test_season_patterns_replace_first_match_only() {
        // number-then-season fires once, then season-then-number fires once
        assert_eq!(normalize_query("2 Season 3 Season"), "2 3 Season");
        assert_eq!(normalize_query("Season 1 Season 2"), "1 2");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize_query(""), "");
        assert_eq!(normalize_query("   "), "");
    }

    #[test]
    fn test_idempotent_on_examples() {
        for input in [
            "3rd Season",
            "Season 3",
            "  My   Show ",
            "Attack on Titan Season 3 Part 2",
            "Mob Psycho 100 II",
            "Re:Zero 2nd Season",
        ] {
            let once = normalize_query(input);
            assert_eq!(normalize_query(&once), once, "input: {input:?}");
        }
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(input in "[A-Za-z]{1,8}( {1,3}[A-Za-z0-9]{1,8}){0,5}") {
            let once = normalize_query(&input);
            prop_assert_eq!(normalize_query(&once), once);
        }

        #[test]
        fn prop_no_surrounding_or_repeated_whitespace(input in "[ \\ta-z0-9]{0,40}") {
            let normalized = normalize_query(&input);
            prop_assert_eq!(normalized.trim(), normalized.as_str());
            prop_assert!(!normalized.contains("  "));
            prop_assert!(!normalized.contains('\t'));
        }
    }
}
