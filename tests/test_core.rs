use rat_mask_format::core::{
    find_mask, find_provisional, remap, render, skip_decorators_back, skip_decorators_forward,
    Classifier, MaskCollection, Token,
};
use rat_mask_format::transform::{TransformTable, Uppercase};
use rat_mask_format::{byte_pos, grapheme_len, grapheme_pos, CharPattern, Overflow};

#[test]
fn test_collection() {
    let m = MaskCollection::build(["+1 (###) ####-###", "##", "+1 ###"]).expect("ok");
    assert_eq!(m.len(), 3);
    assert_eq!(m.iter().collect::<Vec<_>>(), vec!["##", "+1 ###", "+1 (###) ####-###"]);
    assert_eq!(m.get(0), Some("##"));
    assert_eq!(m.get(3), None);
}

#[test]
fn test_classifier() {
    let c = Classifier::new(
        vec![CharPattern::from(' '), CharPattern::regex("[.,]").expect("ok")],
        [('9', CharPattern::Digit)].into_iter().collect(),
    );
    assert!(matches!(c.classify("."), Token::Decorator(_)));
    assert!(matches!(c.classify("9"), Token::Wildcard('9', _)));
    assert!(matches!(c.classify("#"), Token::Literal("#")));
    assert!(matches!(c.classify("-"), Token::Literal("-")));
    assert_eq!(c.clean_of("1.234,5"), "12345");
    assert!(c.wildcard('#').is_none());
}

#[test]
fn test_match_render() {
    let c = Classifier::default();
    let masks = MaskCollection::build(["AA-####"]).expect("ok");

    let m = find_mask("xy12", &masks, &c, &Overflow::default(), false).expect("match");
    assert_eq!(m.mask, "AA-####");
    assert!(!m.overflow);

    let mut t = TransformTable::new();
    t.insert('A', Box::new(Uppercase));
    assert_eq!(render("xy12", m.mask, &c, &t), "XY-12");
    assert_eq!(render("xy123456", m.mask, &c, &t), "XY-123456");

    assert!(find_provisional("XY-12", &masks, &c, false, false).is_some());
    assert!(find_provisional("XY 12", &masks, &c, false, false).is_none());
}

#[test]
fn test_cursor() {
    let c = Classifier::default();
    //                   0123456789
    let text = "+1 (234) 5";
    assert_eq!(remap("12345", 5, text, 0, &c), 10);
    assert_eq!(remap("12345", 3, text, 0, &c), 6);
    assert_eq!(remap("12345", 3, text, 1, &c), 7);
    assert_eq!(skip_decorators_forward(text, 7, &c), 9);
    assert_eq!(skip_decorators_back(text, 9, &c), 7);
}

#[test]
fn test_grapheme_pos() {
    let s = "🇩🇪 (12)";
    assert_eq!(grapheme_len(s), 6);
    assert_eq!(byte_pos(s, 1), Some(8));
    assert_eq!(grapheme_pos(s, 8), Some(1));
    assert_eq!(grapheme_pos(s, 4), None);
    assert_eq!(byte_pos(s, 6), Some(s.len()));
}
