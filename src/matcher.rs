use crate::classify::{Classifier, Token};
use crate::config::Overflow;
use crate::grapheme::graphemes;
use crate::mask_collection::MaskCollection;
use log::debug;

/// Result of the mask search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskMatch<'a> {
    /// The mask.
    pub mask: &'a str,
    /// Index of the mask in the collection.
    pub index: usize,
    /// The value is longer than the mask.
    pub overflow: bool,
}

/// Outcome of matching one mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Attempt {
    /// All of the value fits.
    Full,
    /// The mask is used up, the value continues at this index.
    Overflow(usize),
    /// Doesn't fit.
    Mismatch,
}

/// Find the mask for a clean value.
///
/// Goes through the masks shortest first and returns the first that
/// takes the complete value. Masks that are too short for the value
/// are remembered as overflow candidate, and if nothing fits
/// completely the last candidate is used if the overflowing rest
/// matches the overflow pattern.
///
/// Only the last candidate is checked. If its rest fails the pattern
/// there is no match, even if an earlier candidate might have worked.
pub fn find_mask<'a>(
    clean: &str,
    masks: &'a MaskCollection,
    classifier: &Classifier,
    overflow: &Overflow,
    allow_autofill: bool,
) -> Option<MaskMatch<'a>> {
    let clean = graphemes(clean);

    let mut candidate = None;
    for (index, mask) in masks.iter().enumerate() {
        match attempt(&clean, mask, classifier, allow_autofill) {
            Attempt::Full => {
                return Some(MaskMatch {
                    mask,
                    index,
                    overflow: false,
                })
            }
            Attempt::Overflow(rest) => {
                if overflow.allowed {
                    candidate = Some((index, mask, rest));
                }
            }
            Attempt::Mismatch => {}
        }
    }

    let (index, mask, rest) = candidate?;
    let pattern = overflow.pattern.as_ref()?;
    if clean[rest..].iter().all(|g| pattern.matches(g)) {
        Some(MaskMatch {
            mask,
            index,
            overflow: true,
        })
    } else {
        debug!("find_mask: overflow {:?} fails {}", &clean[rest..], pattern);
        None
    }
}

fn attempt(clean: &[&str], mask: &str, classifier: &Classifier, allow_autofill: bool) -> Attempt {
    let mask = graphemes(mask);

    let mut mi = 0;
    let mut ci = 0;
    loop {
        if ci == clean.len() {
            return Attempt::Full;
        }
        if mi == mask.len() {
            return Attempt::Overflow(ci);
        }

        match classifier.classify(mask[mi]) {
            Token::Decorator(_) => {
                mi += 1;
            }
            Token::Wildcard(_, pattern) => {
                if pattern.matches(clean[ci]) {
                    mi += 1;
                    ci += 1;
                } else {
                    return Attempt::Mismatch;
                }
            }
            Token::Literal(lit) => {
                if lit == clean[ci] {
                    mi += 1;
                    ci += 1;
                } else if allow_autofill {
                    mi += 1;
                } else {
                    return Attempt::Mismatch;
                }
            }
        }
    }
}

/// Find the mask for a formatted text, decorators included.
///
/// Used to check a newly typed decorator. The text is walked together
/// with each mask. A decorator of the mask consumes an equal text
/// grapheme or is skipped, a decorator in the text at any other place
/// rejects the mask. When the mask is used up and there is more text,
/// the mask wins if overflow is allowed at all.
pub fn find_provisional<'a>(
    text: &str,
    masks: &'a MaskCollection,
    classifier: &Classifier,
    overflow_allowed: bool,
    allow_autofill: bool,
) -> Option<MaskMatch<'a>> {
    let text = graphemes(text);

    for (index, mask) in masks.iter().enumerate() {
        match attempt_formatted(&text, mask, classifier, allow_autofill) {
            Attempt::Full => {
                return Some(MaskMatch {
                    mask,
                    index,
                    overflow: false,
                })
            }
            Attempt::Overflow(_) => {
                if overflow_allowed {
                    return Some(MaskMatch {
                        mask,
                        index,
                        overflow: true,
                    });
                }
            }
            Attempt::Mismatch => {}
        }
    }
    None
}

fn attempt_formatted(
    text: &[&str],
    mask: &str,
    classifier: &Classifier,
    allow_autofill: bool,
) -> Attempt {
    let mask = graphemes(mask);

    let mut mi = 0;
    let mut ti = 0;
    loop {
        if ti == text.len() {
            return Attempt::Full;
        }
        if mi == mask.len() {
            return Attempt::Overflow(ti);
        }

        match classifier.classify(mask[mi]) {
            Token::Decorator(_) => {
                if mask[mi] == text[ti] {
                    ti += 1;
                }
                mi += 1;
            }
            _ if classifier.is_decorator(text[ti]) => {
                return Attempt::Mismatch;
            }
            Token::Wildcard(_, pattern) => {
                if pattern.matches(text[ti]) {
                    mi += 1;
                    ti += 1;
                } else {
                    return Attempt::Mismatch;
                }
            }
            Token::Literal(lit) => {
                if lit == text[ti] {
                    mi += 1;
                    ti += 1;
                } else if allow_autofill {
                    mi += 1;
                } else {
                    return Attempt::Mismatch;
                }
            }
        }
    }
}

#[cfg(test)]
mod test_matcher {
    use crate::classify::Classifier;
    use crate::config::Overflow;
    use crate::mask_collection::MaskCollection;
    use crate::matcher::{find_mask, find_provisional};

    #[test]
    fn test_attempt() {
        let c = Classifier::default();
        let m = MaskCollection::build(["+1 (###) ###"]).expect("masks");

        let r = find_mask("1234", &m, &c, &Overflow::forbidden(), false).expect("match");
        assert_eq!(r.index, 0);
        assert!(!r.overflow);

        assert!(find_mask("2234", &m, &c, &Overflow::forbidden(), false).is_none());
        assert!(find_mask("12a", &m, &c, &Overflow::forbidden(), false).is_none());
        assert!(find_mask("1234567", &m, &c, &Overflow::forbidden(), false).is_some());
        assert!(find_mask("12345678", &m, &c, &Overflow::forbidden(), false).is_none());

        let r = find_mask("12345678", &m, &c, &Overflow::default(), false).expect("match");
        assert!(r.overflow);
        assert!(find_mask("1234567x", &m, &c, &Overflow::default(), false).is_none());
    }

    #[test]
    fn test_autofill() {
        let c = Classifier::default();
        let m = MaskCollection::build(["+380 (##) ###"]).expect("masks");

        assert!(find_mask("1", &m, &c, &Overflow::forbidden(), false).is_none());
        assert!(find_mask("1", &m, &c, &Overflow::forbidden(), true).is_some());
        assert!(find_mask("3801", &m, &c, &Overflow::forbidden(), false).is_some());
    }

    #[test]
    fn test_provisional() {
        let c = Classifier::default();
        let m = MaskCollection::build(["+1 (###) ####-###"]).expect("masks");

        let r = find_provisional("+1 (312) 3456-", &m, &c, true, false).expect("match");
        assert_eq!(r.mask, "+1 (###) ####-###");
        assert!(find_provisional("+1 (312)-", &m, &c, true, false).is_none());
        assert!(find_provisional("+1 (312) 3456-7890", &m, &c, true, false).is_some());
        assert!(find_provisional("+1 (312) 3456-7890", &m, &c, false, false).is_none());
    }
}
