//! Byte/char offset conversion.
//!
//! Spans count chars, while `str` slicing and `regex` matches count bytes:
//!
//! ```text
//! Text: "Caffè è"
//!
//! BYTE   C  a  f  f  [è ]  _  [è ]
//!        0  1  2  3  4-5   6  7-8      len = 9
//!
//! CHAR   C  a  f  f  è  _  è
//!        0  1  2  3  4  5  6           len = 7
//! ```
//!
//! Convert at the boundary: byte ranges from a regex become char spans before
//! they touch any term, and char spans become byte ranges only to slice text.

use std::ops::Range;

use crate::span::{HasSpan, Span};

/// Number of chars in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    if text.is_ascii() {
        text.len()
    } else {
        text.chars().count()
    }
}

/// Slice `text` by a char span. Offsets past the end are clamped.
#[must_use]
pub fn slice_chars<'a>(text: &'a str, span: &impl HasSpan) -> &'a str {
    if text.is_ascii() {
        let end = span.end().min(text.len());
        let start = span.start().min(end);
        return &text[start..end];
    }
    let byte_at = |char_idx: usize| {
        text.char_indices()
            .nth(char_idx)
            .map_or(text.len(), |(byte_idx, _)| byte_idx)
    };
    let start = byte_at(span.start());
    let end = byte_at(span.end()).max(start);
    &text[start..end]
}

fn build_byte_to_char_map(text: &str) -> Vec<usize> {
    let mut map = vec![0usize; text.len() + 1];
    for (char_idx, (byte_idx, ch)) in text.char_indices().enumerate() {
        for slot in &mut map[byte_idx..byte_idx + ch.len_utf8()] {
            *slot = char_idx;
        }
    }
    map[text.len()] = text.chars().count();
    map
}

fn build_char_to_byte_map(text: &str) -> Vec<usize> {
    let mut map: Vec<usize> = text.char_indices().map(|(byte_idx, _)| byte_idx).collect();
    map.push(text.len());
    map
}

/// Converter for many spans over the same text.
///
/// Pre-computes mapping tables so each conversion is O(1). ASCII text skips
/// the tables entirely.
#[derive(Debug, Clone)]
pub struct SpanConverter {
    byte_to_char: Vec<usize>,
    char_to_byte: Vec<usize>,
    char_len: usize,
    is_ascii: bool,
}

impl SpanConverter {
    /// Create a converter for the given text.
    #[must_use]
    pub fn new(text: &str) -> Self {
        if text.is_ascii() {
            Self {
                byte_to_char: Vec::new(),
                char_to_byte: Vec::new(),
                char_len: text.len(),
                is_ascii: true,
            }
        } else {
            let char_to_byte = build_char_to_byte_map(text);
            Self {
                byte_to_char: build_byte_to_char_map(text),
                char_len: char_to_byte.len() - 1,
                char_to_byte,
                is_ascii: false,
            }
        }
    }

    /// Number of chars in the text.
    #[must_use]
    pub const fn char_len(&self) -> usize {
        self.char_len
    }

    /// Convert a byte offset to a char offset, clamped to the text length.
    ///
    /// A byte offset inside a multi-byte char maps to that char.
    #[must_use]
    pub fn byte_to_char(&self, byte_idx: usize) -> usize {
        if self.is_ascii {
            byte_idx.min(self.char_len)
        } else {
            self.byte_to_char
                .get(byte_idx)
                .copied()
                .unwrap_or(self.char_len)
        }
    }

    /// Convert a char offset to a byte offset, clamped to the text length.
    #[must_use]
    pub fn char_to_byte(&self, char_idx: usize) -> usize {
        if self.is_ascii {
            char_idx.min(self.char_len)
        } else {
            self.char_to_byte
                .get(char_idx)
                .copied()
                .or_else(|| self.char_to_byte.last().copied())
                .unwrap_or(0)
        }
    }

    /// Convert a byte range (as returned by `regex`) to a char span.
    #[must_use]
    pub fn span_from_bytes(&self, bytes: Range<usize>) -> Span {
        let start = self.byte_to_char(bytes.start);
        let end = self.byte_to_char(bytes.end).max(start);
        Span::new(start, end).unwrap_or(Span::empty(start))
    }

    /// Convert a char span to a byte range.
    #[must_use]
    pub fn bytes_of(&self, span: &impl HasSpan) -> Range<usize> {
        self.char_to_byte(span.start())..self.char_to_byte(span.end())
    }

    /// True if the text is ASCII-only.
    #[must_use]
    pub const fn is_ascii(&self) -> bool {
        self.is_ascii
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Converting every char boundary to bytes and back is lossless.
        #[test]
        fn char_byte_roundtrip(text in ".{0,60}") {
            let conv = SpanConverter::new(&text);
            for idx in 0..=conv.char_len() {
                prop_assert_eq!(conv.byte_to_char(conv.char_to_byte(idx)), idx);
            }
        }

        /// Slicing through the converter matches direct char slicing.
        #[test]
        fn converter_matches_slice(text in ".{0,40}", a in 0usize..40, b in 0usize..40) {
            let conv = SpanConverter::new(&text);
            let (lo, hi) = (a.min(b).min(conv.char_len()), a.max(b).min(conv.char_len()));
            let s = Span::new(lo, hi).unwrap();
            prop_assert_eq!(&text[conv.bytes_of(&s)], slice_chars(&text, &s));
        }

        #[test]
        fn char_len_matches_std(text in ".{0,60}") {
            prop_assert_eq!(char_len(&text), text.chars().count());
        }
    }
}
