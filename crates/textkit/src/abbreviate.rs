//! Truncate a string at a word boundary and append a marker.

use crate::error::{TextError, TextResult};
use crate::primitives::{default_string, index_of, is_empty};
use std::borrow::Cow;
use textkit_chars::CodePoints;

/// Abbreviate `text` at the first space found at or after `lower`.
///
/// `upper` caps the length of the kept prefix; `-1` means "no cap". All
/// positions are code-point indices.
///
/// - If there is no space at or after `lower`, the first `upper` code points
///   are kept and `append_to_end` is added only when that cut something off.
/// - If there is one, the text is cut at the space (or at `upper`, whichever
///   comes first) and `append_to_end` is always added.
///
/// ```
/// assert_eq!(textkit::abbreviate("hello world", 2, 9, Some("end")).unwrap(), "helloend");
/// assert_eq!(textkit::abbreviate("hello world", 8, -1, Some("end")).unwrap(), "hello world");
/// ```
///
/// # Errors
///
/// Returns [`TextError::InvalidArgument`] if `upper < -1`, or if
/// `upper < lower` while `upper != -1`. The bounds are checked before
/// anything else, so an empty `text` still fails on bad bounds.
pub fn abbreviate<'a>(
    text: &'a str,
    lower: isize,
    upper: isize,
    append_to_end: Option<&str>,
) -> TextResult<Cow<'a, str>> {
    if upper < -1 {
        return Err(TextError::InvalidArgument(
            "upper value cannot be less than -1".to_string(),
        ));
    }
    if upper < lower && upper != -1 {
        return Err(TextError::InvalidArgument(
            "upper value is less than lower value".to_string(),
        ));
    }
    if is_empty(text) {
        return Ok(Cow::Borrowed(text));
    }

    let chars = CodePoints::new(text);
    let len = chars.len();
    let lower = usize::try_from(lower).unwrap_or(0).min(len);
    let upper = if upper == -1 {
        len
    } else {
        usize::try_from(upper).unwrap_or(0).min(len)
    };

    let mut result = String::with_capacity(text.len());
    match index_of(&chars, " ", lower) {
        None => {
            result.push_str(chars.slice(0, upper));
            if upper != len {
                result.push_str(default_string(append_to_end));
            }
        }
        Some(space) => {
            result.push_str(chars.slice(0, space.min(upper)));
            result.push_str(default_string(append_to_end));
        }
    }

    Ok(Cow::Owned(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_examples() {
        assert_eq!(
            abbreviate("hello world", 8, -1, Some("end")).unwrap(),
            "hello world"
        );
        assert_eq!(
            abbreviate("hello world", 2, 9, Some("end")).unwrap(),
            "helloend"
        );
    }

    #[test]
    fn cut_at_upper_when_no_space() {
        assert_eq!(
            abbreviate("abcdefghij", 0, 4, Some("...")).unwrap(),
            "abcd..."
        );
        // Nothing cut off, nothing appended.
        assert_eq!(abbreviate("abcd", 0, 10, Some("...")).unwrap(), "abcd");
    }

    #[test]
    fn upper_wins_over_later_space() {
        assert_eq!(
            abbreviate("0123456789 abc", 0, 5, Some("~")).unwrap(),
            "01234~"
        );
    }

    #[test]
    fn space_found_always_appends() {
        assert_eq!(
            abbreviate("hello world", 0, -1, Some("!")).unwrap(),
            "hello!"
        );
        assert_eq!(abbreviate("hello world", 0, -1, None).unwrap(), "hello");
    }

    #[test]
    fn lower_past_end_is_clamped() {
        assert_eq!(abbreviate("hi there", 50, -1, Some("x")).unwrap(), "hi there");
    }

    #[test]
    fn counts_code_points() {
        assert_eq!(
            abbreviate("héllo wörld", 1, 8, Some("…")).unwrap(),
            "héllo…"
        );
        assert_eq!(abbreviate("日本語です", 0, 2, Some("…")).unwrap(), "日本…");
    }

    #[test]
    fn empty_input_is_returned_as_is() {
        let result = abbreviate("", 0, -1, Some("end")).unwrap();
        assert!(matches!(result, Cow::Borrowed("")));
    }

    #[test]
    fn upper_below_minus_one_is_rejected() {
        let err = abbreviate("hello", 0, -2, None).unwrap_err();
        assert!(matches!(err, TextError::InvalidArgument(_)));
        assert!(err.to_string().contains("cannot be less than -1"));
    }

    #[test]
    fn upper_below_lower_is_rejected() {
        let err = abbreviate("hello world", 5, 2, Some("x")).unwrap_err();
        assert!(matches!(err, TextError::InvalidArgument(_)));
        assert!(err.to_string().contains("less than lower"));
    }

    #[test]
    fn bounds_checked_before_empty_shortcut() {
        assert!(abbreviate("", 5, 2, None).is_err());
    }
}
