use crate::classify::Classifier;
use crate::grapheme::graphemes;
use unicode_segmentation::UnicodeSegmentation;

/// Find the cursor position in a reformatted text.
///
/// Counts the graphemes before the cursor in the source text that
/// are no decorators, and adds `skip`. The new cursor is placed right
/// after the grapheme of the target where the same count is reached,
/// or at the end of the target if it has not enough content.
///
/// All positions are grapheme positions.
pub fn remap(
    source: &str,
    source_cursor: usize,
    target: &str,
    skip: isize,
    classifier: &Classifier,
) -> usize {
    let before = source
        .graphemes(true)
        .take(source_cursor)
        .filter(|g| !classifier.is_decorator(g))
        .count();
    let wanted = before as isize + skip;
    if wanted <= 0 {
        return 0;
    }

    let mut n = 0;
    let mut len = 0;
    for (idx, g) in target.graphemes(true).enumerate() {
        if !classifier.is_decorator(g) {
            n += 1;
            if n == wanted {
                return idx + 1;
            }
        }
        len = idx + 1;
    }
    len
}

/// Move the position forward over a run of decorators.
pub fn skip_decorators_forward(text: &str, pos: usize, classifier: &Classifier) -> usize {
    let text = graphemes(text);
    let mut pos = pos.min(text.len());
    while pos < text.len() && classifier.is_decorator(text[pos]) {
        pos += 1;
    }
    pos
}

/// Move the position back over a run of decorators. Stops right
/// after the next grapheme that is no decorator, or at 0.
pub fn skip_decorators_back(text: &str, pos: usize, classifier: &Classifier) -> usize {
    let text = graphemes(text);
    let mut pos = pos.min(text.len());
    while pos > 0 && classifier.is_decorator(text[pos - 1]) {
        pos -= 1;
    }
    pos
}
