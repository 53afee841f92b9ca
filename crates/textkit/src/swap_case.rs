//! Invert the case of every letter.

use crate::primitives::is_empty;
use std::borrow::Cow;
use textkit_chars::case::{
    is_lower, is_title, is_upper, is_whitespace, to_lower, to_title, to_upper,
};

/// Swap the case of each code point.
///
/// Upper- and titlecase letters become lowercase. Lowercase letters become
/// titlecase when they start a word (start of string or after whitespace)
/// and uppercase otherwise. Everything else is left alone.
///
/// ```
/// assert_eq!(textkit::swap_case("The dog has a BONE"), "tHE DOG HAS A bone");
/// ```
pub fn swap_case(text: &str) -> Cow<'_, str> {
    if is_empty(text) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut boundary = true;
    for c in text.chars() {
        let swapped = if is_upper(c) || is_title(c) {
            boundary = false;
            to_lower(c)
        } else if is_lower(c) {
            if boundary {
                boundary = false;
                to_title(c)
            } else {
                to_upper(c)
            }
        } else {
            boundary = is_whitespace(c);
            c
        };
        result.push(swapped);
    }

    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_word_gets_title_then_upper() {
        assert_eq!(swap_case("hello"), "HELLO");
        assert_eq!(swap_case("ǆungla"), "ǅUNGLA");
    }

    #[test]
    fn mixed_sentence() {
        assert_eq!(swap_case("The dog has a BONE"), "tHE DOG HAS A bone");
    }

    #[test]
    fn titlecase_letters_lowercase() {
        assert_eq!(swap_case("ǅ"), "ǆ");
    }

    #[test]
    fn non_letters_pass_through() {
        assert_eq!(swap_case("123 -_ !"), "123 -_ !");
        assert_eq!(swap_case("a1b"), "A1B");
    }

    #[test]
    fn boundary_only_resets_on_whitespace() {
        // After a digit the boundary flag is cleared, so no titlecasing.
        assert_eq!(swap_case("1ǆ ǆ"), "1Ǆ ǅ");
    }

    #[test]
    fn not_an_involution() {
        let once = swap_case("ǆ");
        assert_eq!(once, "ǅ");
        assert_eq!(swap_case(&once), "ǆ");
        assert_eq!(swap_case("ǆǆ"), "ǅǄ");
        assert_eq!(swap_case(&swap_case("ǆǆ")), "ǆǆ");
        assert_eq!(swap_case("Ǆ"), "ǆ");
        assert_eq!(swap_case(&swap_case("Ǆ")), "ǅ");
    }

    #[test]
    fn expanding_letters_are_kept() {
        assert_eq!(swap_case("straße"), "STRAßE");
    }

    #[test]
    fn empty_input_is_returned_as_is() {
        assert!(matches!(swap_case(""), Cow::Borrowed("")));
    }
}
