//! Extract the first letter of each delimited word.

use crate::primitives::{delimiter_set, is_empty};
use std::borrow::Cow;
use textkit_chars::case::is_whitespace;

/// Collect the first code point after each run of delimiters.
///
/// The start of the string counts as following a delimiter, and a run of
/// several delimiters only yields one capture.
///
/// With `delimiters == None` any whitespace delimits. An explicitly empty
/// delimiter slice produces an empty string.
///
/// ```
/// use textkit::initials;
///
/// assert_eq!(initials("Ben John Lee", None), "BJL");
/// assert_eq!(initials("Ben J.Lee", Some(&[' ', '.'])), "BJL");
/// assert_eq!(initials("Ben John Lee", Some(&[])), "");
/// ```
pub fn initials<'a>(text: &'a str, delimiters: Option<&[char]>) -> Cow<'a, str> {
    if is_empty(text) {
        return Cow::Borrowed(text);
    }
    if delimiters.is_some_and(|d| d.is_empty()) {
        return Cow::Borrowed("");
    }

    let set = delimiter_set(delimiters);
    let any_whitespace = delimiters.is_none();

    let mut result = String::new();
    let mut last_was_gap = true;
    for c in text.chars() {
        if set.contains(&c) || (any_whitespace && is_whitespace(c)) {
            last_was_gap = true;
        } else if last_was_gap {
            result.push(c);
            last_was_gap = false;
        }
    }

    Cow::Owned(result)
}
