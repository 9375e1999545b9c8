//!
//! Transforms change the input grapheme before it is rendered.
//!
//! They are registered per wildcard id. A mask `AAA-###` with
//! [Uppercase] for `A` renders `abc123` as `ABC-123`.
//!

use dyn_clone::{clone_box, DynClone};
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::fmt::Debug;

/// Maps one input grapheme to its display form.
///
/// Must be a pure function of the input.
pub trait Transform: DynClone + Debug + Send + Sync {
    fn transform<'a>(&self, g: &'a str) -> Cow<'a, str>;
}

impl Clone for Box<dyn Transform> {
    fn clone(&self) -> Self {
        clone_box(self.as_ref())
    }
}

impl Transform for Box<dyn Transform> {
    fn transform<'a>(&self, g: &'a str) -> Cow<'a, str> {
        self.as_ref().transform(g)
    }
}

/// Uppercase.
#[derive(Debug, Default, Clone, Copy)]
pub struct Uppercase;

impl Transform for Uppercase {
    fn transform<'a>(&self, g: &'a str) -> Cow<'a, str> {
        if g.chars().any(|c| c.is_lowercase()) {
            Cow::Owned(g.to_uppercase())
        } else {
            Cow::Borrowed(g)
        }
    }
}

/// Lowercase.
#[derive(Debug, Default, Clone, Copy)]
pub struct Lowercase;

impl Transform for Lowercase {
    fn transform<'a>(&self, g: &'a str) -> Cow<'a, str> {
        if g.chars().any(|c| c.is_uppercase()) {
            Cow::Owned(g.to_lowercase())
        } else {
            Cow::Borrowed(g)
        }
    }
}

/// Use a plain fn as transform.
#[derive(Debug, Clone, Copy)]
pub struct TransformFn(pub fn(&str) -> String);

impl Transform for TransformFn {
    fn transform<'a>(&self, g: &'a str) -> Cow<'a, str> {
        Cow::Owned((self.0)(g))
    }
}

/// Transforms by wildcard id.
#[derive(Debug, Default, Clone)]
pub struct TransformTable {
    table: FxHashMap<char, Box<dyn Transform>>,
}

impl TransformTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transform for a wildcard id.
    pub fn insert(&mut self, id: char, transform: Box<dyn Transform>) {
        self.table.insert(id, transform);
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Apply the transform for the id. Returns the grapheme unchanged
    /// if there is none.
    pub fn apply<'a>(&self, id: char, g: &'a str) -> Cow<'a, str> {
        match self.table.get(&id) {
            Some(t) => t.transform(g),
            None => Cow::Borrowed(g),
        }
    }
}
