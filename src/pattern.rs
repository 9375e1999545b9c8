//!
//! Patterns for wildcards, decorators and overflow.
//!
//! A pattern is always matched against a single grapheme.
//!

use crate::ConfigurationError;
use regex::Regex;
use std::fmt::{Display, Formatter};

/// Matches one grapheme.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum CharPattern {
    /// One ASCII digit.
    Digit,
    /// One alphabetic char.
    Letter,
    /// Anything.
    Any,
    /// Exactly this grapheme.
    Exact(Box<str>),
    /// Regular expression. Must match the complete grapheme.
    Regex(Regex),
}

impl CharPattern {
    /// Exactly this grapheme.
    pub fn exact(g: impl Into<Box<str>>) -> Self {
        CharPattern::Exact(g.into())
    }

    /// Regular expression.
    ///
    /// The expression is anchored, it must match the complete grapheme.
    /// `[0-4]` is a fine pattern.
    pub fn regex(re: &str) -> Result<Self, ConfigurationError> {
        match Regex::new(&format!("^(?:{})$", re)) {
            Ok(re) => Ok(CharPattern::Regex(re)),
            Err(e) => Err(ConfigurationError::InvalidPattern(e.to_string())),
        }
    }

    /// Test the grapheme.
    pub fn matches(&self, g: &str) -> bool {
        match self {
            CharPattern::Digit => single_char(g).is_some_and(|c| c.is_ascii_digit()),
            CharPattern::Letter => single_char(g).is_some_and(|c| c.is_alphabetic()),
            CharPattern::Any => !g.is_empty(),
            CharPattern::Exact(s) => s.as_ref() == g,
            CharPattern::Regex(re) => re.is_match(g),
        }
    }
}

impl From<char> for CharPattern {
    fn from(value: char) -> Self {
        CharPattern::Exact(value.to_string().into_boxed_str())
    }
}

impl From<&str> for CharPattern {
    fn from(value: &str) -> Self {
        CharPattern::Exact(Box::from(value))
    }
}

impl Display for CharPattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CharPattern::Digit => write!(f, "[0-9]"),
            CharPattern::Letter => write!(f, "[:alpha:]"),
            CharPattern::Any => write!(f, "."),
            CharPattern::Exact(s) => write!(f, "{}", s),
            CharPattern::Regex(re) => write!(f, "{}", re.as_str()),
        }
    }
}

pub(crate) fn single_char(g: &str) -> Option<char> {
    let mut it = g.chars();
    let c = it.next()?;
    if it.next().is_some() {
        None
    } else {
        Some(c)
    }
}
