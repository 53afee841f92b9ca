//! Pattern-driven line wrapping.
//!
//! Text is scanned once from left to right. At each step the scanner looks
//! at a window of `width + 1` code points and breaks at the rightmost match
//! of the break pattern inside it. When the window holds no match, the run
//! is either split at exactly `width` code points or, if long words are
//! kept whole, extended to the next match anywhere in the rest of the text.
//!
//! Every position here is a code-point index. Regex matches are found on
//! `&str` windows and mapped back through [`CodePoints`].

use crate::config::WrapConfig;
use crate::error::TextResult;
use crate::primitives::is_blank;
use once_cell::sync::Lazy;
use regex::Regex;
use textkit_chars::CodePoints;

/// Break pattern used when none (or a blank one) is given.
pub const DEFAULT_WRAP_ON: &str = " ";

/// Width used by [`WrapOptions::default`].
pub const DEFAULT_WIDTH: usize = 80;

/// The platform line separator.
pub const LINE_SEPARATOR: &str = if cfg!(windows) { "\r\n" } else { "\n" };

static DEFAULT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(DEFAULT_WRAP_ON).unwrap());

/// Options for building a [`Wrapper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapOptions {
    /// Maximum code points per line. Zero is treated as one.
    pub width: usize,
    /// String inserted at each break. `None` means [`LINE_SEPARATOR`].
    pub new_line: Option<String>,
    /// Split words longer than `width` instead of emitting them whole.
    pub wrap_long_words: bool,
    /// Regular expression matching break positions. `None` or a blank
    /// string means a single space.
    pub wrap_on: Option<String>,
}

impl Default for WrapOptions {
    fn default() -> Self {
        WrapOptions {
            width: DEFAULT_WIDTH,
            new_line: None,
            wrap_long_words: false,
            wrap_on: None,
        }
    }
}

impl WrapOptions {
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn with_new_line(mut self, new_line: impl Into<String>) -> Self {
        self.new_line = Some(new_line.into());
        self
    }

    pub fn with_wrap_long_words(mut self, wrap_long_words: bool) -> Self {
        self.wrap_long_words = wrap_long_words;
        self
    }

    pub fn with_wrap_on(mut self, wrap_on: impl Into<String>) -> Self {
        self.wrap_on = Some(wrap_on.into());
        self
    }
}

/// A configured line wrapper with its break pattern compiled.
///
/// Building a `Wrapper` once and calling [`Wrapper::wrap`] repeatedly avoids
/// recompiling the pattern per call.
#[derive(Debug, Clone)]
pub struct Wrapper {
    width: usize,
    new_line: String,
    wrap_long_words: bool,
    pattern: Regex,
}

/// A match as code-point offsets relative to the start of a search window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    start: usize,
    end: usize,
}

impl Span {
    fn width(self) -> usize {
        self.end - self.start
    }
}

/// Find every match of `pattern` in code points `[start, end)` of `chars`.
///
/// The window is searched as a standalone string, so anchors and word
/// boundaries see the window edges as text edges.
fn find_spans<'a, 't>(
    pattern: &'a Regex,
    chars: &'a CodePoints<'t>,
    start: usize,
    end: usize,
) -> impl Iterator<Item = Span> + 'a {
    let base = chars.byte_offset(start);
    let window = chars.slice(start, end);
    pattern.find_iter(window).map(move |m| Span {
        start: relative_index(chars, base + m.start(), start),
        end: relative_index(chars, base + m.end(), start),
    })
}

fn relative_index(chars: &CodePoints<'_>, byte: usize, start: usize) -> usize {
    // Matches on a `&str` haystack always fall on character boundaries.
    chars
        .index_of_byte(byte)
        .map_or(0, |index| index.saturating_sub(start))
}

impl Wrapper {
    /// Compile the break pattern and fix the options.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TextError::Pattern`] if `wrap_on` is not a valid
    /// regular expression.
    pub fn new(options: WrapOptions) -> TextResult<Self> {
        let pattern = match options.wrap_on.as_deref() {
            Some(wrap_on) if !is_blank(wrap_on) => {
                log::debug!("Compiling wrap pattern {:?}", wrap_on);
                Regex::new(wrap_on)?
            }
            _ => DEFAULT_PATTERN.clone(),
        };

        Ok(Wrapper {
            width: options.width.max(1),
            new_line: options.new_line.unwrap_or_else(|| LINE_SEPARATOR.to_string()),
            wrap_long_words: options.wrap_long_words,
            pattern,
        })
    }

    /// Build a wrapper from the `[wrap]` section of a config file.
    pub fn from_config(config: &WrapConfig) -> TextResult<Self> {
        Self::new(WrapOptions::from(config))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn new_line(&self) -> &str {
        &self.new_line
    }

    pub fn wrap_long_words(&self) -> bool {
        self.wrap_long_words
    }

    /// The break pattern source.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Insert line breaks into `text`.
    pub fn wrap(&self, text: &str) -> String {
        let chars = CodePoints::new(text);
        let len = chars.len();
        let width = self.width;

        let mut wrapped = String::with_capacity(text.len() + 32);
        let mut offset = 0;
        // Width of the last match that decided a break. `Some(0)` means the
        // cursor was pushed one code point past a zero-width match and has
        // to step back before that code point is copied.
        let mut last_match_width: Option<usize> = None;

        while offset < len {
            let mut space_to_wrap_at = None;
            let window_end = offset.saturating_add(width).saturating_add(1).min(len);
            let mut matches = find_spans(&self.pattern, &chars, offset, window_end);

            if let Some(first) = matches.next() {
                if first.start == 0 {
                    last_match_width = Some(first.end);
                    if first.end != 0 {
                        // Leading delimiters are dropped.
                        offset += first.end;
                        continue;
                    }
                    offset += 1;
                }
                space_to_wrap_at = Some(first.start + offset);
            }

            if len - offset <= width {
                break;
            }

            if let Some(last) = matches.last() {
                space_to_wrap_at = Some(last.start + offset);
            }

            if let Some(at) = space_to_wrap_at {
                log::trace!("Breaking at match, code points {}..{}", offset, at);
                wrapped.push_str(chars.slice(offset, at));
                wrapped.push_str(&self.new_line);
                offset = at + 1;
            } else if self.wrap_long_words {
                if last_match_width == Some(0) {
                    offset = offset.saturating_sub(1);
                }
                log::trace!("Splitting long word at code point {}", offset + width);
                wrapped.push_str(chars.slice(offset, offset + width));
                wrapped.push_str(&self.new_line);
                offset += width;
                last_match_width = None;
            } else {
                let search_from = offset + width;
                let next = find_spans(&self.pattern, &chars, search_from, len).next();
                if let Some(span) = next {
                    last_match_width = Some(span.width());
                }
                if last_match_width == Some(0) && offset != 0 {
                    offset -= 1;
                }

                match next {
                    Some(span) => {
                        let at = span.start + search_from;
                        log::trace!("Keeping long word, code points {}..{}", offset, at);
                        wrapped.push_str(chars.slice(offset, at));
                        wrapped.push_str(&self.new_line);
                        offset = at + 1;
                    }
                    None => {
                        log::trace!("No further break after code point {}", offset);
                        wrapped.push_str(chars.slice_from(offset));
                        offset = len;
                        last_match_width = None;
                    }
                }
            }
        }

        if last_match_width == Some(0) && offset < len {
            offset = offset.saturating_sub(1);
        }
        wrapped.push_str(chars.slice_from(offset));

        wrapped
    }
}

/// Wrap `text` so that no line exceeds `wrap_length` code points.
///
/// Breaks are placed at matches of the `wrap_on` regular expression (a
/// single space when `None` or blank), preferring the match closest to the
/// limit. The matched code point is replaced by `new_line`
/// ([`LINE_SEPARATOR`] when `None`). A run with no match that is longer
/// than `wrap_length` is split at exactly `wrap_length` code points when
/// `wrap_long_words` is set, and otherwise kept whole up to the next match.
///
/// Matches are enumerated the way [`Regex::find_iter`] reports them: an
/// empty match directly after a non-empty one is skipped, so patterns that
/// can match both empty and non-empty text (such as `b*`) may pick a
/// different rightmost break than engines that report that empty match.
///
/// ```
/// let text = "Here is one line of text that is going to be wrapped after 20 columns.";
/// let wrapped = textkit::wrap(text, 20, Some("\n"), true, None).unwrap();
/// assert_eq!(
///     wrapped,
///     "Here is one line of\ntext that is going\nto be wrapped after\n20 columns."
/// );
/// ```
///
/// # Errors
///
/// Returns [`crate::TextError::Pattern`] if `wrap_on` is not a valid
/// regular expression.
pub fn wrap(
    text: &str,
    wrap_length: usize,
    new_line: Option<&str>,
    wrap_long_words: bool,
    wrap_on: Option<&str>,
) -> TextResult<String> {
    let options = WrapOptions {
        width: wrap_length,
        new_line: new_line.map(str::to_string),
        wrap_long_words,
        wrap_on: wrap_on.map(str::to_string),
    };
    Ok(Wrapper::new(options)?.wrap(text))
}
