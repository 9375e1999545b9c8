#![doc = include_str!("../readme.md")]
#![allow(clippy::uninlined_format_args)]
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

pub mod config;
pub mod mask_formatter;
pub mod pattern;
pub mod phone_masks;
pub mod transform;

mod classify;
mod cursor_map;
mod grapheme;
mod mask_collection;
mod matcher;
mod render;

pub use config::{MaskConfig, Overflow};
pub use grapheme::{byte_pos, grapheme_len, grapheme_pos, Grapheme, StrGraphemes};
pub use mask_formatter::{EditDelta, FormatResult, MaskFormatter, MaskInfo};
pub use pattern::CharPattern;

pub mod core {
    //!
    //! The building blocks of the formatter.
    //! [MaskFormatter](crate::MaskFormatter) puts them together,
    //! but they can be used on their own.
    //!

    pub use crate::classify::{Classifier, Token};
    pub use crate::cursor_map::{remap, skip_decorators_back, skip_decorators_forward};
    pub use crate::mask_collection::MaskCollection;
    pub use crate::matcher::{find_mask, find_provisional, MaskMatch};
    pub use crate::render::render;
}

/// Invalid formatter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigurationError {
    /// The list of masks is empty.
    NoMasks,
    /// Overflow is allowed, but there is no pattern for the overflowing input.
    MissingOverflowPattern,
    /// A pattern could not be compiled. Contains the error message.
    InvalidPattern(String),
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for ConfigurationError {}
