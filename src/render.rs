use crate::classify::{Classifier, Token};
use crate::grapheme::graphemes;
use crate::pattern::single_char;
use crate::transform::TransformTable;

/// Render the clean value with the mask.
///
/// * Decorators are copied from the mask.
/// * Wildcards take the next grapheme of the value, transformed.
/// * A literal takes the next grapheme if it's the same. If not,
///   the mask is copied up to the next wildcard. This is the autofill.
/// * Anything left of the value after the mask is used up is appended.
///
/// Rendering stops when the value is used up. Trailing decorators
/// are rendered only if nothing but decorators is left of the mask.
pub fn render(
    clean: &str,
    mask: &str,
    classifier: &Classifier,
    transforms: &TransformTable,
) -> String {
    let clean = graphemes(clean);
    let mask = graphemes(mask);

    let mut buf = String::new();
    let mut ti = 0;
    let mut pi = 0;
    loop {
        if ti == mask.len() {
            for g in &clean[pi..] {
                buf.push_str(g);
            }
            break;
        }
        if pi == clean.len() {
            if mask[ti..].iter().all(|g| classifier.is_decorator(g)) {
                for g in &mask[ti..] {
                    buf.push_str(g);
                }
            }
            break;
        }

        match classifier.classify(mask[ti]) {
            Token::Decorator(_) => {
                buf.push_str(mask[ti]);
                ti += 1;
            }
            Token::Wildcard(id, _) => {
                buf.push_str(&transforms.apply(id, clean[pi]));
                ti += 1;
                pi += 1;
            }
            Token::Literal(lit) => {
                if lit == clean[pi] {
                    match single_char(lit) {
                        Some(id) => buf.push_str(&transforms.apply(id, clean[pi])),
                        None => buf.push_str(clean[pi]),
                    }
                    ti += 1;
                    pi += 1;
                } else {
                    while ti < mask.len() && !classifier.classify(mask[ti]).is_wildcard() {
                        buf.push_str(mask[ti]);
                        ti += 1;
                    }
                }
            }
        }
    }
    buf
}

#[cfg(test)]
mod test_render {
    use crate::classify::Classifier;
    use crate::render::render;
    use crate::transform::TransformTable;

    #[test]
    fn test_render() {
        let c = Classifier::default();
        let t = TransformTable::new();

        assert_eq!(render("", "+1 (###)", &c, &t), "");
        assert_eq!(render("1", "+1 (###)", &c, &t), "+1");
        assert_eq!(render("12", "+1 (###)", &c, &t), "+1 (2");
        assert_eq!(render("1234", "+1 (###)", &c, &t), "+1 (234)");
        assert_eq!(render("123456", "+1 (###)", &c, &t), "+1 (234)56");
        assert_eq!(render("1", "+380 (##) ###", &c, &t), "+380 (1");
    }
}
