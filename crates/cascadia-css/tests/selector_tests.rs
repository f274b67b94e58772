//! Integration tests for selector matching against a document tree.

use cascadia_css::config::{ClassIdMatch, MatchOptions};
use cascadia_css::selector::{SelectorChain, matches_with};
use cascadia_css::{matches, parse_selector};
use cascadia_dom::{Document, NodeId};

fn chain(css: &str) -> SelectorChain {
    let mut selector = parse_selector(css).unwrap();
    assert_eq!(selector.chains.len(), 1, "{css} is a group");
    selector.chains.remove(0)
}

/// `<a><b><c/></b></a>`
fn nested_abc() -> (Document, NodeId, NodeId, NodeId) {
    let mut doc = Document::new();
    let a = doc.create_element("a", &[]);
    let b = doc.create_element("b", &[]);
    let c = doc.create_element("c", &[]);
    doc.append_child(NodeId::ROOT, a);
    doc.append_child(a, b);
    doc.append_child(b, c);
    (doc, a, b, c)
}

#[test]
fn test_descendant_combinator() {
    let (doc, a, b, c) = nested_abc();
    let selector = chain("a b");
    assert!(matches(&selector, &doc.node(b)));
    assert!(!matches(&selector, &doc.node(a)));
    // "A B" names B as the subject, so C itself does not match.
    assert!(!matches(&selector, &doc.node(c)));
    assert!(matches(&chain("a c"), &doc.node(c)));
    assert!(matches(&chain("a b c"), &doc.node(c)));
    assert!(matches(&chain("a *"), &doc.node(c)));
}

#[test]
fn test_child_combinator() {
    let (doc, _, b, c) = nested_abc();
    assert!(matches(&chain("a > b"), &doc.node(b)));
    assert!(!matches(&chain("a > c"), &doc.node(c)));
    assert!(matches(&chain("a > b > c"), &doc.node(c)));
    assert!(matches(&chain("a c"), &doc.node(c)));
}

#[test]
fn test_adjacent_sibling_combinator() {
    let mut doc = Document::new();
    let parent = doc.create_element("div", &[]);
    let b = doc.create_element("b", &[]);
    let text = doc.create_text(" ");
    let comment = doc.create_comment("between");
    let c = doc.create_element("c", &[]);
    let d = doc.create_element("d", &[]);
    let c2 = doc.create_element("c", &[]);
    doc.append_child(NodeId::ROOT, parent);
    for child in [b, text, comment, c, d, c2] {
        doc.append_child(parent, child);
    }

    let selector = chain("b + c");
    // Text and comment nodes between siblings are ignored.
    assert!(matches(&selector, &doc.node(c)));
    assert!(!matches(&selector, &doc.node(c2)));
    assert!(matches(&chain("div > c + d + c"), &doc.node(c2)));
}

#[test]
fn test_attribute_predicates() {
    let mut doc = Document::new();
    let words = doc.create_element("p", &[("class", "foo bar"), ("lang", "en-US")]);
    let joined = doc.create_element("p", &[("class", "foobar"), ("lang", "english")]);
    doc.append_child(NodeId::ROOT, words);
    doc.append_child(NodeId::ROOT, joined);

    let includes = chain(r#"[class~="foo"]"#);
    assert!(matches(&includes, &doc.node(words)));
    assert!(!matches(&includes, &doc.node(joined)));

    let dash = chain(r#"[lang|="en"]"#);
    assert!(matches(&dash, &doc.node(words)));
    assert!(!matches(&dash, &doc.node(joined)));

    assert!(matches(&chain("[lang]"), &doc.node(joined)));
    assert!(matches(&chain("p[class=foobar]"), &doc.node(joined)));
    assert!(!matches(&chain("p[class=foo]"), &doc.node(words)));
    assert!(matches(&chain("p[class~=bar][lang|=en]"), &doc.node(words)));
}

#[test]
fn test_class_and_id_prefix_matching() {
    let mut doc = Document::new();
    let div = doc.create_element("div", &[("class", "foobar"), ("id", "header")]);
    doc.append_child(NodeId::ROOT, div);
    let node = doc.node(div);

    let prefix = MatchOptions::default();
    assert_eq!(prefix.class_id_match, ClassIdMatch::Prefix);
    assert!(matches_with(&chain(".foo"), &node, &prefix));
    assert!(matches_with(&chain("#head"), &node, &prefix));

    let exact = MatchOptions::exact();
    assert!(!matches_with(&chain(".foo"), &node, &exact));
    assert!(!matches_with(&chain("#head"), &node, &exact));
    assert!(matches_with(&chain("div.foobar#header"), &node, &exact));
}

#[test]
fn test_pseudo_classes() {
    let mut doc = Document::new();
    let html = doc.create_element("html", &[("lang", "fr-CA")]);
    let first = doc.create_element("p", &[]);
    let second = doc.create_element("p", &[]);
    let nested = doc.create_element("em", &[("lang", "de")]);
    doc.append_child(NodeId::ROOT, html);
    doc.append_child(html, first);
    doc.append_child(html, second);
    doc.append_child(second, nested);

    let first_child = chain("p:first-child");
    assert!(matches(&first_child, &doc.node(first)));
    assert!(!matches(&first_child, &doc.node(second)));
    // The document node is not an element, so the root has no parent element.
    assert!(!matches(&chain("html:first-child"), &doc.node(html)));

    assert!(matches(&chain(":lang(fr)"), &doc.node(second)));
    assert!(!matches(&chain(":lang(fr)"), &doc.node(nested)));
    assert!(matches(&chain("em:lang(de)"), &doc.node(nested)));

    for never in ["p:hover", "p:link", "p:first-line", "p:before", "p:no-such-thing"] {
        assert!(!matches(&chain(never), &doc.node(first)), "{never}");
    }
}

#[test]
fn test_type_selectors_ignore_case() {
    let mut doc = Document::new();
    let div = doc.create_element("DIV", &[]);
    doc.append_child(NodeId::ROOT, div);
    assert!(matches(&chain("div"), &doc.node(div)));
    assert!(matches(&chain("Div"), &doc.node(div)));
}

#[test]
fn test_non_elements_never_match() {
    let mut doc = Document::new();
    let p = doc.create_element("p", &[]);
    let text = doc.create_text("hi");
    doc.append_child(NodeId::ROOT, p);
    doc.append_child(p, text);
    assert!(!matches(&chain("*"), &doc.node(text)));
    assert!(!matches(&chain("p *"), &doc.node(text)));
    assert!(!matches(&chain("*"), &doc.node(NodeId::ROOT)));
}

#[test]
fn test_specificity() {
    let specificity = |css: &str| chain(css).specificity().to_string();
    assert_eq!(specificity("*"), "(0, 0, 0)");
    assert_eq!(specificity("li"), "(0, 0, 1)");
    assert_eq!(specificity("ul li"), "(0, 0, 2)");
    assert_eq!(specificity("ul ol+li"), "(0, 0, 3)");
    assert_eq!(specificity("h1 + *[rel=up]"), "(0, 1, 1)");
    assert_eq!(specificity("ul ol li.red"), "(0, 1, 3)");
    assert_eq!(specificity("li.red.level"), "(0, 2, 1)");
    assert_eq!(specificity("#x34y"), "(1, 0, 0)");
    assert_eq!(specificity("a:first-child"), "(0, 1, 1)");
}
