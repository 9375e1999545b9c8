//!
//! The formatter.
//!
//! [MaskFormatter] gets every edit of the text field as an [EditDelta]
//! and answers with the [FormatResult] the text field should show.
//!
//! * Edits that only add or remove a decorator are handled without
//!   reformatting. A decorator typed at the end is kept if the mask
//!   has the same decorator at this place. Deleting a decorator
//!   doesn't work, the cursor jumps over it instead.
//! * Everything else reformats the text. The clean value is extracted,
//!   a mask is chosen and the text is rendered. If no mask fits the
//!   edit is rejected and the previous result stays.
//!
//! ```rust
//! use rat_mask_format::{EditDelta, MaskConfig, MaskFormatter};
//!
//! let mut fmt = MaskFormatter::new(MaskConfig::new(["+1 (###) ####-###"]))?;
//!
//! let r = fmt.process(&EditDelta::insert_str("", 0, "13123456")).clone();
//! assert_eq!(r.text, "+1 (312) 3456");
//! assert_eq!(r.cursor, 13);
//!
//! let r = fmt.process(&EditDelta::insert_str(&r.text, r.cursor, "7")).clone();
//! assert_eq!(r.text, "+1 (312) 3456-7");
//! assert_eq!(r.cursor, 15);
//! # Ok::<(), rat_mask_format::ConfigurationError>(())
//! ```
//!

use crate::classify::Classifier;
use crate::config::{MaskConfig, MaskRules};
use crate::cursor_map::{remap, skip_decorators_back, skip_decorators_forward};
use crate::grapheme::{common_prefix, grapheme_len, graphemes, split_at};
use crate::mask_collection::MaskCollection;
use crate::matcher::{find_mask, find_provisional, MaskMatch};
use crate::render::render;
use crate::ConfigurationError;
use log::debug;
use std::ops::Range;
use std::sync::Arc;

/// One edit of the text field.
///
/// Text before and after the edit, and the cursor/selection before
/// and after. Cursor positions count graphemes. An empty range is
/// a plain cursor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EditDelta {
    pub old_text: String,
    pub old_cursor: Range<usize>,
    pub new_text: String,
    pub new_cursor: Range<usize>,
}

impl EditDelta {
    pub fn new(
        old_text: impl Into<String>,
        old_cursor: Range<usize>,
        new_text: impl Into<String>,
        new_cursor: Range<usize>,
    ) -> Self {
        Self {
            old_text: old_text.into(),
            old_cursor,
            new_text: new_text.into(),
            new_cursor,
        }
    }

    /// Typing or pasting at the cursor.
    pub fn insert_str(text: &str, cursor: usize, s: &str) -> Self {
        Self::replace_range(text, cursor..cursor, s)
    }

    /// Replace the selection with the given text.
    /// The cursor ends up after the inserted text.
    pub fn replace_range(text: &str, range: Range<usize>, s: &str) -> Self {
        let (before, rest) = split_at(text, range.start);
        let (_, after) = split_at(rest, range.end.saturating_sub(range.start));

        let start = grapheme_len(before);
        let end = grapheme_len(text) - grapheme_len(after);
        let new_text = format!("{}{}{}", before, s, after);
        let cursor = start + grapheme_len(s);

        Self {
            old_text: text.to_string(),
            old_cursor: start..end,
            new_text,
            new_cursor: cursor..cursor,
        }
    }

    /// Backspace.
    pub fn remove_prev(text: &str, cursor: usize) -> Self {
        let cursor = cursor.min(grapheme_len(text));
        if cursor == 0 {
            return Self::new(text, 0..0, text, 0..0);
        }
        let mut delta = Self::replace_range(text, cursor - 1..cursor, "");
        delta.old_cursor = cursor..cursor;
        delta
    }

    /// Delete.
    pub fn remove_next(text: &str, cursor: usize) -> Self {
        let cursor = cursor.min(grapheme_len(text));
        let mut delta = Self::replace_range(text, cursor..cursor + 1, "");
        delta.old_cursor = cursor..cursor;
        delta
    }

    /// Selection or plain cursor before the edit.
    #[inline]
    pub fn had_selection(&self) -> bool {
        self.old_cursor.start != self.old_cursor.end
    }
}

/// Result of one edit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormatResult {
    /// Formatted text.
    pub text: String,
    /// Cursor position in graphemes.
    pub cursor: usize,
    /// The text without decorators.
    pub clean: String,
    /// The value fills a mask completely.
    pub valid: bool,
}

/// Value info of the last result.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MaskInfo {
    pub clean: String,
    pub valid: bool,
}

/// What kind of edit this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EditKind {
    /// Reformat the text.
    Reformat,
    /// Something was deleted and there are only decorators left.
    OnlyDecorators,
    /// A decorator was typed at the end.
    DecoratorAppended(usize),
    /// A decorator was typed somewhere in the text.
    DecoratorInserted(usize),
    /// A decorator was deleted with the delete key.
    DecoratorDeleted,
    /// A decorator was deleted with backspace.
    DecoratorRemoved,
}

/// Input-mask formatter.
///
/// Holds the configuration and the last result.
/// Clones share the configuration.
#[derive(Debug, Clone)]
pub struct MaskFormatter {
    rules: Arc<MaskRules>,
    result: FormatResult,
    mask: Option<usize>,
}

impl MaskFormatter {
    /// New formatter.
    ///
    /// Fails if there are no masks, or overflow is allowed
    /// without an overflow pattern.
    pub fn new(config: MaskConfig) -> Result<Self, ConfigurationError> {
        Ok(Self {
            rules: Arc::new(config.build()?),
            result: Default::default(),
            mask: None,
        })
    }

    /// Formatter for international phone numbers.
    pub fn phone() -> Result<Self, ConfigurationError> {
        Self::new(MaskConfig::phone())
    }

    /// The masks, shortest first.
    pub fn masks(&self) -> &MaskCollection {
        &self.rules.masks
    }

    /// Decorator/wildcard rules.
    pub fn classifier(&self) -> &Classifier {
        &self.rules.classifier
    }

    /// Process one edit.
    ///
    /// Returns the new result. If the edit is rejected this is the
    /// previous result.
    pub fn process(&mut self, delta: &EditDelta) -> &FormatResult {
        _ = self.apply(delta);
        &self.result
    }

    /// Format some text.
    ///
    /// Returns the text unchanged if no mask fits.
    /// This replaces the current result too.
    pub fn pretty_text(&mut self, raw: &str) -> String {
        let len = grapheme_len(raw);
        let delta = EditDelta::new(raw, len..len, raw, len..len);
        if self.apply(&delta) {
            self.result.text.clone()
        } else {
            raw.to_string()
        }
    }

    /// Format a clean value without changing the current result.
    pub fn format_clean(&self, clean: &str) -> Option<String> {
        let rules = &*self.rules;
        let m = find_mask(
            clean,
            &rules.masks,
            &rules.classifier,
            &rules.overflow,
            rules.allow_autofill,
        )?;
        Some(render(clean, m.mask, &rules.classifier, &rules.transforms))
    }

    /// Clean value and validity of the current result.
    pub fn current_info(&self) -> MaskInfo {
        MaskInfo {
            clean: self.result.clean.clone(),
            valid: self.result.valid,
        }
    }

    /// Current result.
    pub fn result(&self) -> &FormatResult {
        &self.result
    }

    /// The mask used for the current result.
    pub fn current_mask(&self) -> Option<&str> {
        self.mask.and_then(|idx| self.rules.masks.get(idx))
    }

    /// Reset to an empty result.
    pub fn clear(&mut self) {
        self.result = Default::default();
        self.mask = None;
    }
}

impl MaskFormatter {
    /// Process the edit. Returns false if the edit has been rejected.
    fn apply(&mut self, delta: &EditDelta) -> bool {
        let kind = self.edit_kind(delta);
        debug!("apply: {:?} {:?} -> {:?}", kind, delta.old_text, delta.new_text);

        let rules = Arc::clone(&self.rules);
        let c = &rules.classifier;
        match kind {
            EditKind::Reformat => return self.reformat(delta),
            EditKind::OnlyDecorators => {
                self.result = FormatResult {
                    text: delta.new_text.clone(),
                    cursor: delta.new_cursor.end.min(grapheme_len(&delta.new_text)),
                    clean: String::new(),
                    valid: false,
                };
                self.mask = None;
            }
            EditKind::DecoratorAppended(pos) => {
                let new = graphemes(&delta.new_text);
                let accept = find_provisional(
                    &delta.new_text,
                    &rules.masks,
                    c,
                    rules.overflow.allowed,
                    rules.allow_autofill,
                )
                .is_some_and(|m| graphemes(m.mask).get(pos) == new.get(pos));

                if accept {
                    self.store(&delta.new_text, delta.new_cursor.end);
                } else {
                    debug!("apply: decorator {:?} doesn't fit", new.get(pos));
                    self.store(&delta.old_text, delta.old_cursor.end);
                }
            }
            EditKind::DecoratorInserted(pos) => {
                let cursor = skip_decorators_forward(&delta.new_text, pos, c) + 1;
                self.store(&delta.new_text, cursor);
            }
            EditKind::DecoratorDeleted => {
                let cursor = skip_decorators_forward(&delta.old_text, delta.new_cursor.end, c);
                self.store(&delta.old_text, cursor);
            }
            EditKind::DecoratorRemoved => {
                let cursor = skip_decorators_back(&delta.old_text, delta.new_cursor.end, c);
                self.store(&delta.old_text, cursor);
            }
        }
        true
    }

    fn edit_kind(&self, delta: &EditDelta) -> EditKind {
        if delta.had_selection() {
            return EditKind::Reformat;
        }

        let c = &self.rules.classifier;
        let old_len = grapheme_len(&delta.old_text);
        let new_len = grapheme_len(&delta.new_text);

        if new_len + 1 == old_len && c.is_all_decorators(&delta.new_text) {
            return EditKind::OnlyDecorators;
        }
        if c.count_content(&delta.old_text) != c.count_content(&delta.new_text) {
            return EditKind::Reformat;
        }

        if new_len == old_len + 1 {
            let pos = common_prefix(&graphemes(&delta.old_text), &graphemes(&delta.new_text));
            if pos == old_len {
                EditKind::DecoratorAppended(pos)
            } else {
                EditKind::DecoratorInserted(pos)
            }
        } else if new_len + 1 == old_len {
            if delta.new_cursor.end == delta.old_cursor.end {
                EditKind::DecoratorDeleted
            } else {
                EditKind::DecoratorRemoved
            }
        } else {
            EditKind::Reformat
        }
    }

    /// Extract the clean value, find a mask and render.
    fn reformat(&mut self, delta: &EditDelta) -> bool {
        let rules = Arc::clone(&self.rules);
        let c = &rules.classifier;

        let clean = c.clean_of(&delta.new_text);
        let Some(m) = find_mask(
            &clean,
            &rules.masks,
            c,
            &rules.overflow,
            rules.allow_autofill,
        ) else {
            debug!("reformat: no mask for {:?}", clean);
            return false;
        };

        let text = render(&clean, m.mask, c, &rules.transforms);
        // autofill adds content the user didn't type.
        let skip = c.count_content(&text) as isize - grapheme_len(&clean) as isize;
        let cursor = remap(&delta.new_text, delta.new_cursor.end, &text, skip, c);
        let valid = is_valid(&clean, &m, c);

        self.result = FormatResult {
            text,
            cursor,
            clean,
            valid,
        };
        self.mask = Some(m.index);
        true
    }

    /// Store the text as is.
    fn store(&mut self, text: &str, cursor: usize) {
        let rules = &*self.rules;
        let c = &rules.classifier;

        let clean = c.clean_of(text);
        let m = find_mask(
            &clean,
            &rules.masks,
            c,
            &rules.overflow,
            rules.allow_autofill,
        );
        let valid = m.as_ref().is_some_and(|m| is_valid(&clean, m, c));

        self.mask = m.map(|m| m.index);
        self.result = FormatResult {
            text: text.to_string(),
            cursor: cursor.min(grapheme_len(text)),
            clean,
            valid,
        };
    }
}

/// The clean value fills the mask, or it overflows.
fn is_valid(clean: &str, m: &MaskMatch<'_>, c: &Classifier) -> bool {
    m.overflow || grapheme_len(clean) >= c.count_content(m.mask)
}
