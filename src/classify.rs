use crate::pattern::{single_char, CharPattern};
use rustc_hash::FxHashMap;
use std::fmt::{Debug, Formatter};
use unicode_segmentation::UnicodeSegmentation;

/// Role of one grapheme of a mask.
#[derive(Clone, Copy)]
pub enum Token<'a> {
    /// Cosmetic, not part of the clean value.
    Decorator(&'a CharPattern),
    /// Placeholder for one input grapheme.
    Wildcard(char, &'a CharPattern),
    /// Must be entered as is.
    Literal(&'a str),
}

impl Debug for Token<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Decorator(p) => write!(f, "Decorator({})", p),
            Token::Wildcard(id, p) => write!(f, "Wildcard({}:{})", id, p),
            Token::Literal(s) => write!(f, "Literal({})", s),
        }
    }
}

impl Token<'_> {
    #[inline]
    pub fn is_decorator(&self) -> bool {
        matches!(self, Token::Decorator(_))
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Token::Wildcard(_, _))
    }
}

/// Decides for each grapheme whether it's a decorator, a wildcard
/// or a literal.
///
/// Decorators win over wildcards, wildcards win over literals.
/// Everything that needs this decision goes through here.
#[derive(Debug, Clone)]
pub struct Classifier {
    decorators: Vec<CharPattern>,
    wildcards: FxHashMap<char, CharPattern>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self {
            decorators: Self::default_decorators(),
            wildcards: Self::default_wildcards(),
        }
    }
}

impl Classifier {
    pub fn new(decorators: Vec<CharPattern>, wildcards: FxHashMap<char, CharPattern>) -> Self {
        Self {
            decorators,
            wildcards,
        }
    }

    /// Space, parentheses, hyphen, plus, pipe, slash and colon.
    pub fn default_decorators() -> Vec<CharPattern> {
        [' ', '(', ')', '-', '+', '|', '/', ':']
            .into_iter()
            .map(CharPattern::from)
            .collect()
    }

    /// `#` for a digit, `A` for a letter.
    pub fn default_wildcards() -> FxHashMap<char, CharPattern> {
        let mut wildcards = FxHashMap::default();
        wildcards.insert('#', CharPattern::Digit);
        wildcards.insert('A', CharPattern::Letter);
        wildcards
    }

    /// Decorator patterns.
    pub fn decorators(&self) -> &[CharPattern] {
        &self.decorators
    }

    /// Pattern for a wildcard id.
    pub fn wildcard(&self, id: char) -> Option<&CharPattern> {
        self.wildcards.get(&id)
    }

    /// Classify one grapheme.
    pub fn classify<'a>(&'a self, g: &'a str) -> Token<'a> {
        if let Some(p) = self.decorators.iter().find(|p| p.matches(g)) {
            return Token::Decorator(p);
        }

        if let Some(c) = single_char(g) {
            if let Some(p) = self.wildcards.get(&c) {
                return Token::Wildcard(c, p);
            }
        }

        Token::Literal(g)
    }

    #[inline]
    pub fn is_decorator(&self, g: &str) -> bool {
        self.classify(g).is_decorator()
    }

    /// Text without decorators.
    pub fn clean_of(&self, text: &str) -> String {
        text.graphemes(true)
            .filter(|g| !self.is_decorator(g))
            .collect()
    }

    /// Count of decorator graphemes.
    pub fn count_decorators(&self, text: &str) -> usize {
        text.graphemes(true)
            .filter(|g| self.is_decorator(g))
            .count()
    }

    /// Count of graphemes that are no decorators.
    pub fn count_content(&self, text: &str) -> usize {
        text.graphemes(true)
            .filter(|g| !self.is_decorator(g))
            .count()
    }

    /// Only decorators. True for the empty text too.
    pub fn is_all_decorators(&self, text: &str) -> bool {
        text.graphemes(true).all(|g| self.is_decorator(g))
    }
}
