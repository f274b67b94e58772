//! Tests for document construction and node navigation.

use cascadia_dom::{Document, NodeId};

/// `<html><body><p/>text<div id="x" class="a b"/></body></html>`
fn sample() -> (Document, [NodeId; 5]) {
    let mut doc = Document::new();
    let html = doc.create_element("html", &[]);
    let body = doc.create_element("body", &[]);
    let p = doc.create_element("p", &[]);
    let text = doc.create_text("hello");
    let div = doc.create_element("div", &[("id", "x"), ("class", "a  b")]);
    doc.append_child(NodeId::ROOT, html);
    doc.append_child(html, body);
    doc.append_child(body, p);
    doc.append_child(body, text);
    doc.append_child(body, div);
    (doc, [html, body, p, text, div])
}

#[test]
fn test_append_child_wires_siblings() {
    let (doc, [_, body, p, text, div]) = sample();

    assert_eq!(doc.children(body), &[p, text, div]);
    assert_eq!(doc.prev_sibling(p), None);
    assert_eq!(doc.prev_sibling(text), Some(p));
    assert_eq!(doc.prev_sibling(div), Some(text));
    assert_eq!(doc.next_sibling(p), Some(text));
    assert_eq!(doc.next_sibling(div), None);
}

#[test]
fn test_node_ref_navigation() {
    let (doc, [html, body, _, text, div]) = sample();

    let div_ref = doc.node(div);
    assert!(div_ref.is_element());
    assert_eq!(div_ref.tag_name(), Some("div"));
    assert_eq!(div_ref.parent().map(|n| n.id()), Some(body));
    assert_eq!(div_ref.previous_sibling().map(|n| n.id()), Some(text));

    let text_ref = doc.node(text);
    assert!(!text_ref.is_element());
    assert_eq!(text_ref.tag_name(), None);
    assert_eq!(text_ref.attribute("id"), None);

    assert_eq!(doc.node(html).parent().map(|n| n.id()), Some(NodeId::ROOT));
    assert!(doc.node(NodeId::ROOT).parent().is_none());
}

#[test]
fn test_attributes_and_classes() {
    let (doc, [.., div]) = sample();
    let element = doc.as_element(div).unwrap();

    assert_eq!(element.id(), Some("x"));
    assert_eq!(element.classes().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(doc.node(div).attribute("class"), Some("a  b"));
    assert_eq!(doc.node(div).attribute("missing"), None);
}

#[test]
fn test_ancestors_nearest_first() {
    let (doc, [html, body, p, ..]) = sample();
    let ancestors: Vec<_> = doc.ancestors(p).collect();
    assert_eq!(ancestors, vec![body, html, NodeId::ROOT]);
}

#[test]
fn test_descendants_in_document_order() {
    let (doc, [html, body, p, text, div]) = sample();
    assert_eq!(
        doc.descendants(NodeId::ROOT),
        vec![NodeId::ROOT, html, body, p, text, div]
    );
    assert_eq!(doc.document_element(), Some(html));
}
