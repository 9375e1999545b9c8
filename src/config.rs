//!
//! Configuration of the formatter.
//!
//! ```rust
//! use rat_mask_format::{MaskConfig, MaskFormatter, Overflow};
//! use rat_mask_format::transform::Uppercase;
//!
//! let cfg = MaskConfig::new(["AA-####", "AA-#####"])
//!     .transform('A', Uppercase)
//!     .overflow(Overflow::forbidden());
//! let mut fmt = MaskFormatter::new(cfg)?;
//! assert_eq!(fmt.pretty_text("ab1234"), "AB-1234");
//! # Ok::<(), rat_mask_format::ConfigurationError>(())
//! ```
//!

use crate::classify::Classifier;
use crate::mask_collection::MaskCollection;
use crate::pattern::CharPattern;
use crate::phone_masks::PHONE_MASKS;
use crate::transform::{Transform, TransformTable};
use crate::ConfigurationError;
use rustc_hash::FxHashMap;

/// How to deal with input that is longer than any mask.
#[derive(Debug, Clone)]
pub struct Overflow {
    /// Overflow is possible.
    pub allowed: bool,
    /// Every overflowing grapheme must match this pattern.
    /// Required if allowed.
    pub pattern: Option<CharPattern>,
}

impl Default for Overflow {
    /// Allows overflow with digits.
    fn default() -> Self {
        Self {
            allowed: true,
            pattern: Some(CharPattern::Digit),
        }
    }
}

impl Overflow {
    /// Allow overflow with graphemes matching the pattern.
    pub fn allowed(pattern: CharPattern) -> Self {
        Self {
            allowed: true,
            pattern: Some(pattern),
        }
    }

    /// No overflow.
    pub fn forbidden() -> Self {
        Self {
            allowed: false,
            pattern: None,
        }
    }
}

/// Configuration for a [MaskFormatter](crate::MaskFormatter).
///
/// Checked when the formatter is created.
#[derive(Debug, Clone)]
pub struct MaskConfig {
    masks: Vec<String>,
    decorators: Vec<CharPattern>,
    wildcards: FxHashMap<char, CharPattern>,
    transforms: TransformTable,
    overflow: Overflow,
    allow_autofill: bool,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            masks: Default::default(),
            decorators: Classifier::default_decorators(),
            wildcards: Classifier::default_wildcards(),
            transforms: Default::default(),
            overflow: Default::default(),
            allow_autofill: false,
        }
    }
}

impl MaskConfig {
    /// New configuration with these masks and defaults for everything else.
    pub fn new<I, S>(masks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().masks(masks)
    }

    /// Configuration with the international phone masks.
    pub fn phone() -> Self {
        Self::new(PHONE_MASKS.iter().copied())
    }

    /// Replace the masks.
    pub fn masks<I, S>(mut self, masks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.masks = masks.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Replace the decorator patterns.
    pub fn decorators<I, P>(mut self, decorators: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<CharPattern>,
    {
        self.decorators = decorators.into_iter().map(|v| v.into()).collect();
        self
    }

    /// Replace the wildcard table.
    pub fn wildcards<I>(mut self, wildcards: I) -> Self
    where
        I: IntoIterator<Item = (char, CharPattern)>,
    {
        self.wildcards = wildcards.into_iter().collect();
        self
    }

    /// Add or change one wildcard.
    pub fn wildcard(mut self, id: char, pattern: CharPattern) -> Self {
        self.wildcards.insert(id, pattern);
        self
    }

    /// Transform for a wildcard id.
    pub fn transform(mut self, id: char, transform: impl Transform + 'static) -> Self {
        self.transforms.insert(id, Box::new(transform));
        self
    }

    /// Overflow policy.
    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    /// Fill in literals of the mask that have not been typed yet.
    pub fn allow_autofill(mut self, autofill: bool) -> Self {
        self.allow_autofill = autofill;
        self
    }

    /// Validate.
    pub(crate) fn build(self) -> Result<MaskRules, ConfigurationError> {
        if self.overflow.allowed && self.overflow.pattern.is_none() {
            return Err(ConfigurationError::MissingOverflowPattern);
        }
        let masks = MaskCollection::build(self.masks)?;

        Ok(MaskRules {
            masks,
            classifier: Classifier::new(self.decorators, self.wildcards),
            transforms: self.transforms,
            overflow: self.overflow,
            allow_autofill: self.allow_autofill,
        })
    }
}

/// Validated configuration.
#[derive(Debug)]
pub(crate) struct MaskRules {
    pub(crate) masks: MaskCollection,
    pub(crate) classifier: Classifier,
    pub(crate) transforms: TransformTable,
    pub(crate) overflow: Overflow,
    pub(crate) allow_autofill: bool,
}
