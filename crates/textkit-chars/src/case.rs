//! Single-code-point case classification and mapping.
//!
//! The standard library exposes *full* case mappings, which may expand one
//! code point into several (`'ß'.to_uppercase()` is `"SS"`). The transforms
//! in textkit work one code point at a time, so these helpers apply *simple*
//! mappings instead: a code point whose full mapping expands is returned
//! unchanged, apart from a few letters that carry an explicit single-code-point
//! simple mapping in the Unicode data.
//!
//! Titlecase has no standard-library support at all; the titlecase letters
//! (general category `Lt`) are listed here directly.

/// Returns `true` for code points with the Unicode `Uppercase` property.
pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

/// Returns `true` for code points with the Unicode `Lowercase` property.
pub fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

/// Returns `true` for titlecase letters (general category `Lt`).
pub fn is_title(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}'
            | '\u{01C8}'
            | '\u{01CB}'
            | '\u{01F2}'
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

/// Returns `true` for code points with the Unicode `White_Space` property.
pub fn is_whitespace(c: char) -> bool {
    c.is_whitespace()
}

/// Simple lowercase mapping.
pub fn to_lower(c: char) -> char {
    // Full mapping is "i̇"; the simple mapping drops the combining dot.
    if c == '\u{0130}' {
        return 'i';
    }
    single(c.to_lowercase()).unwrap_or(c)
}

/// Simple uppercase mapping.
pub fn to_upper(c: char) -> char {
    if let Some(upper) = greek_iota_subscript(c) {
        return upper;
    }
    single(c.to_uppercase()).unwrap_or(c)
}

/// Simple titlecase mapping.
///
/// Identical to [`to_upper`] except for the Latin digraphs, which map to
/// their mixed-case titlecase form (`ǆ` -> `ǅ`).
pub fn to_title(c: char) -> char {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        _ => to_upper(c),
    }
}

/// Greek small letters with ypogegrammeni map to the titlecase letter with
/// prosgegrammeni, not to the two-code-point full uppercase.
fn greek_iota_subscript(c: char) -> Option<char> {
    let code = c as u32;
    let mapped = match code {
        0x1F80..=0x1F87 | 0x1F90..=0x1F97 | 0x1FA0..=0x1FA7 => code + 8,
        0x1FB3 | 0x1FC3 | 0x1FF3 => code + 9,
        _ => return None,
    };
    char::from_u32(mapped)
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    match mapped.next() {
        Some(_) => None,
        None => Some(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_mappings() {
        assert!(is_upper('A'));
        assert!(is_lower('a'));
        assert!(!is_upper('1') && !is_lower('1'));
        assert_eq!(to_lower('A'), 'a');
        assert_eq!(to_upper('a'), 'A');
        assert_eq!(to_title('a'), 'A');
    }

    #[test]
    fn expanding_mappings_leave_code_point_unchanged() {
        assert_eq!(to_upper('ß'), 'ß');
        assert_eq!(to_title('ß'), 'ß');
        assert_eq!(to_upper('\u{0149}'), '\u{0149}');
    }

    #[test]
    fn dotted_capital_i_lowercases_to_plain_i() {
        assert_eq!(to_lower('İ'), 'i');
    }

    #[test]
    fn digraphs_have_distinct_titlecase() {
        assert!(is_title('ǅ'));
        assert!(!is_upper('ǅ') && !is_lower('ǅ'));
        assert_eq!(to_title('ǆ'), 'ǅ');
        assert_eq!(to_title('Ǆ'), 'ǅ');
        assert_eq!(to_upper('ǆ'), 'Ǆ');
        assert_eq!(to_lower('ǅ'), 'ǆ');
        assert_eq!(to_title('ǳ'), 'ǲ');
    }

    #[test]
    fn greek_iota_subscript_maps_to_prosgegrammeni() {
        assert_eq!(to_upper('ᾀ'), 'ᾈ');
        assert_eq!(to_title('ᾳ'), 'ᾼ');
        assert_eq!(to_upper('ῳ'), 'ῼ');
        assert!(is_title('ᾈ'));
        assert_eq!(to_lower('ᾈ'), 'ᾀ');
    }

    #[test]
    fn whitespace_classification() {
        assert!(is_whitespace(' '));
        assert!(is_whitespace('\t'));
        assert!(is_whitespace('\u{3000}'));
        assert!(!is_whitespace('x'));
    }
}
