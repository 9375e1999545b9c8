use std::cmp;
use std::ops::Range;
use unicode_segmentation::{GraphemeCursor, UnicodeSegmentation};

/// One grapheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grapheme<'a> {
    /// grapheme
    grapheme: &'a str,
    /// byte-range of the grapheme in the given slice.
    text_bytes: Range<usize>,
}

impl<R: AsRef<str>> PartialEq<R> for Grapheme<'_> {
    fn eq(&self, other: &R) -> bool {
        self.grapheme == other.as_ref()
    }
}

impl<'a> Grapheme<'a> {
    pub fn new(grapheme: &'a str, text_bytes: Range<usize>) -> Self {
        Self {
            grapheme,
            text_bytes,
        }
    }

    /// Get the grapheme.
    pub fn grapheme(&self) -> &'a str {
        self.grapheme
    }

    /// Get the byte-range as absolute range into the complete text.
    pub fn text_bytes(&self) -> Range<usize> {
        self.text_bytes.clone()
    }
}

/// A cursor over graphemes of a string.
///
/// Works as an Iterator going forward, and has [StrGraphemes::prev]
/// to go back.
#[derive(Debug, Clone)]
pub struct StrGraphemes<'a> {
    text_offset: usize,
    text: &'a str,
    cursor: GraphemeCursor,
}

impl<'a> StrGraphemes<'a> {
    /// Iterate the graphemes of a str-slice.
    ///
    /// * slice_offset - offset of the slice in the complete text.
    /// * slice - slice
    ///
    pub fn new(slice_offset: usize, slice: &'a str) -> Self {
        Self {
            text_offset: slice_offset,
            text: slice,
            cursor: GraphemeCursor::new(0, slice.len(), true),
        }
    }

    /// Iterate the graphemes of a str-slice.
    ///
    /// * slice_offset - offset of the slice in the complete text.
    /// * slice - slice
    /// * offset - relative offset into the slice. Must be a grapheme boundary.
    ///
    pub fn new_offset(slice_offset: usize, slice: &'a str, offset: usize) -> Self {
        Self {
            text_offset: slice_offset,
            text: slice,
            cursor: GraphemeCursor::new(offset, slice.len(), true),
        }
    }

    /// Return the previous grapheme and move the cursor before it.
    pub fn prev(&mut self) -> Option<Grapheme<'a>> {
        let start = self.cursor.cur_cursor();
        // the whole text is one chunk, there is no incomplete state.
        let prev = self.cursor.prev_boundary(self.text, 0).ok().flatten()?;
        Some(Grapheme {
            grapheme: &self.text[prev..start],
            text_bytes: self.text_offset + prev..self.text_offset + start,
        })
    }

    /// Offset of the current cursor position into the underlying text.
    pub fn text_offset(&self) -> usize {
        self.text_offset + self.cursor.cur_cursor()
    }
}

impl<'a> Iterator for StrGraphemes<'a> {
    type Item = Grapheme<'a>;

    #[inline]
    fn next(&mut self) -> Option<Grapheme<'a>> {
        let start = self.cursor.cur_cursor();
        let next = self.cursor.next_boundary(self.text, 0).ok().flatten()?;
        Some(Grapheme {
            grapheme: &self.text[start..next],
            text_bytes: self.text_offset + start..self.text_offset + next,
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let slen = self.text.len() - self.cursor.cur_cursor();
        (cmp::min(slen, 1), Some(slen))
    }
}

/// Length of the text in graphemes.
pub fn grapheme_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Byte offset for a grapheme position.
///
/// The position right after the last grapheme is valid and maps to
/// text.len(). Returns None if the position is beyond that.
pub fn byte_pos(text: &str, pos: usize) -> Option<usize> {
    let mut it = StrGraphemes::new(0, text);
    for _ in 0..pos {
        it.next()?;
    }
    Some(it.text_offset())
}

/// Grapheme position for a byte offset.
///
/// Returns None if the byte offset is not at a grapheme boundary
/// or beyond the end of the text.
pub fn grapheme_pos(text: &str, byte: usize) -> Option<usize> {
    if byte == 0 {
        return Some(0);
    }
    for (idx, g) in StrGraphemes::new(0, text).enumerate() {
        if g.text_bytes().end == byte {
            return Some(idx + 1);
        } else if g.text_bytes().end > byte {
            return None;
        }
    }
    None
}

/// Split the text at a grapheme position. Positions beyond the
/// end split at the end.
pub(crate) fn split_at(text: &str, pos: usize) -> (&str, &str) {
    let byte = byte_pos(text, pos).unwrap_or(text.len());
    text.split_at(byte)
}

/// Collect the graphemes.
pub(crate) fn graphemes(text: &str) -> Vec<&str> {
    text.graphemes(true).collect()
}

/// Number of leading graphemes both share.
pub(crate) fn common_prefix(a: &[&str], b: &[&str]) -> usize {
    a.iter().zip(b.iter()).take_while(|(a, b)| a == b).count()
}
