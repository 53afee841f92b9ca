//! Small string predicates and lookups shared by the transforms.

use std::collections::HashSet;
use textkit_chars::CodePoints;
use textkit_chars::case::is_whitespace;

/// Returns `true` if the string has no code points.
pub fn is_empty(s: &str) -> bool {
    s.is_empty()
}

/// Returns `true` if the string is empty or consists only of whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(is_whitespace)
}

/// Substitute the empty string for an absent value.
pub fn default_string(s: Option<&str>) -> &str {
    s.unwrap_or("")
}

/// Find the first occurrence of `needle` at or after code point `start`.
///
/// The result is a code-point index into `haystack`. A `start` past the end
/// only matches an empty needle, which is then found at the end.
pub fn index_of(haystack: &CodePoints<'_>, needle: &str, start: usize) -> Option<usize> {
    let start = start.min(haystack.len());
    let from = haystack.byte_offset(start);
    let found = haystack.as_str()[from..].find(needle)?;
    haystack.index_of_byte(from + found)
}

/// Build the set of delimiter code points.
///
/// An absent set means "space"; an explicitly empty set stays empty.
pub fn delimiter_set(delimiters: Option<&[char]>) -> HashSet<char> {
    match delimiters {
        None => HashSet::from([' ']),
        Some(delimiters) => delimiters.iter().copied().collect(),
    }
}
