//! Sort-prefix parsing for item directory names.
//!
//! Item directories may carry a sort prefix so they list in a deliberate order
//! on disk, while the document model only ever sees the clean name:
//!
//! - `01_intro/` → "intro"
//! - `aa_intro/` → "intro"
//! - `intro/` → "intro" (no prefix)
//!
//! ## Matching Rule
//!
//! The prefix is everything up to and including the first underscore that has
//! at least one character after it. The search is unanchored, so the prefix can
//! be empty (`_intro` → "intro") and only the first underscore counts
//! (`01_multi_word` → "multi_word"). A trailing bare underscore does not match
//! (`a_` stays `a_`).
//!
//! The captured name ends at the first line terminator, which keeps the rule
//! identical to the `_(.+)` pattern existing descriptor trees were laid out
//! against.

/// Result of parsing an item directory name like `01_intro`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedName {
    /// Sort prefix including its trailing underscore (e.g. `01_`), if present.
    pub sort_prefix: Option<String>,
    /// Canonical name used as the key in the document model.
    /// For unprefixed entries, this is the full input.
    pub name: String,
}

/// Parse an item directory name following the `<prefix>_<name>` convention.
///
/// - `"01_intro"` → sort_prefix=Some("01_"), name="intro"
/// - `"aa_intro"` → sort_prefix=Some("aa_"), name="intro"
/// - `"01_multi_word"` → sort_prefix=Some("01_"), name="multi_word"
/// - `"intro"` → sort_prefix=None, name="intro"
/// - `"a_"` → sort_prefix=None, name="a_"
pub fn parse_item_name(raw: &str) -> ParsedName {
    for (pos, _) in raw.match_indices('_') {
        let rest = &raw[pos + 1..];
        let captured = match rest.find(is_line_terminator) {
            Some(end) => &rest[..end],
            None => rest,
        };
        if !captured.is_empty() {
            return ParsedName {
                sort_prefix: Some(raw[..=pos].to_string()),
                name: captured.to_string(),
            };
        }
    }
    ParsedName {
        sort_prefix: None,
        name: raw.to_string(),
    }
}

/// Canonical display key for a raw item name.
pub fn canonical_name(raw: &str) -> String {
    parse_item_name(raw).name
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
