//! Code-point indexed views over UTF-8 strings.

/// A string slice addressed by code point instead of by byte.
///
/// Holds the byte offset of every code point plus a trailing entry equal
/// to the byte length, so `offsets.len() == len() + 1` and any code-point
/// range maps to a valid `&str` slice.
#[derive(Debug, Clone)]
pub struct CodePoints<'a> {
    text: &'a str,
    offsets: Vec<usize>,
}

impl<'a> CodePoints<'a> {
    pub fn new(text: &'a str) -> Self {
        let mut offsets: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        offsets.push(text.len());
        CodePoints { text, offsets }
    }

    /// Number of code points.
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the code point at `index`.
    ///
    /// Indices past the end map to the byte length of the string.
    pub fn byte_offset(&self, index: usize) -> usize {
        self.offsets[index.min(self.len())]
    }

    /// Code-point index of a byte offset.
    ///
    /// Returns `None` when `byte` does not fall on a character boundary.
    pub fn index_of_byte(&self, byte: usize) -> Option<usize> {
        self.offsets.binary_search(&byte).ok()
    }

    /// The substring covering code points `[start, end)`.
    ///
    /// Both bounds are clamped to `len()`, and an inverted range yields an
    /// empty slice.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let end = end.min(self.len());
        let start = start.min(end);
        &self.text[self.offsets[start]..self.offsets[end]]
    }

    /// The substring from code point `start` to the end.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_indices_match_bytes() {
        let cp = CodePoints::new("hello");
        assert_eq!(cp.len(), 5);
        assert_eq!(cp.slice(1, 4), "ell");
        assert_eq!(cp.byte_offset(3), 3);
    }

    #[test]
    fn multibyte_characters_count_once() {
        let cp = CodePoints::new("a😀bé");
        assert_eq!(cp.len(), 4);
        assert_eq!(cp.slice(1, 2), "😀");
        assert_eq!(cp.slice(1, 3), "😀b");
        assert_eq!(cp.byte_offset(2), 5);
        assert_eq!(cp.index_of_byte(5), Some(2));
        assert_eq!(cp.index_of_byte(2), None);
    }

    #[test]
    fn out_of_range_slices_are_clamped() {
        let cp = CodePoints::new("abc");
        assert_eq!(cp.slice(2, 10), "c");
        assert_eq!(cp.slice(5, 10), "");
        assert_eq!(cp.slice(2, 1), "");
        assert_eq!(cp.slice_from(1), "bc");
        assert_eq!(cp.slice_from(3), "");
    }

    #[test]
    fn empty_string() {
        let cp = CodePoints::new("");
        assert!(cp.is_empty());
        assert_eq!(cp.slice(0, 1), "");
        assert_eq!(cp.index_of_byte(0), Some(0));
    }
}
