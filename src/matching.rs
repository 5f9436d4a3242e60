// src/matching.rs

/// How [`contains`] compares letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseMode {
    #[default]
    Sensitive,
    /// Unicode lowercase folding on both sides. Scripts without case (kana, kanji) are unaffected.
    Insensitive,
}

/// Substring test on text of any script. The empty pattern matches everything.
pub fn contains(haystack: &str, pattern: &str, case: CaseMode) -> bool {
    match case {
        CaseMode::Sensitive => haystack.contains(pattern),
        CaseMode::Insensitive => haystack.to_lowercase().contains(&pattern.to_lowercase()),
    }
}
