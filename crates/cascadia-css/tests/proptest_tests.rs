//! Property tests for the parser and the cascade.
//!
//! - Serializing a parsed sheet and parsing it again gives the same sheet,
//!   escaped names and strings included
//! - Tokenizing and parsing arbitrary input never panics
//! - Resolving the same node twice gives the same style

use cascadia_css::tokenizer::tokenize;
use cascadia_css::{Cascade, StyleSheet, parse_stylesheet, resolve_style};
use cascadia_dom::{Document, NodeId};
use proptest::prelude::*;

fn arb_type_selector() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("div".to_string()),
        Just("p".to_string()),
        Just("span".to_string()),
        Just("*".to_string()),
    ]
}

/// A class or id name, sometimes spelled with escapes.
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z][a-z0-9]{0,5}",
        Just(r"a\:b".to_string()),
        Just(r"\31 a".to_string()),
        Just(r"-\32 x".to_string()),
        Just(r"x\.y\#z".to_string()),
    ]
}

/// A compound selector: a type or universal selector plus optional class and id.
fn arb_compound() -> impl Strategy<Value = String> {
    (
        arb_type_selector(),
        proptest::option::of(arb_name()),
        proptest::option::of(arb_name()),
    )
        .prop_map(|(name, class, id)| {
            let mut out = name;
            if let Some(class) = class {
                out.push('.');
                out.push_str(&class);
            }
            if let Some(id) = id {
                out.push('#');
                out.push_str(&id);
            }
            out
        })
}

fn arb_selector() -> impl Strategy<Value = String> {
    (
        arb_compound(),
        proptest::option::of((prop_oneof![Just(" "), Just(" > "), Just(" + ")], arb_compound())),
    )
        .prop_map(|(first, rest)| match rest {
            Some((combinator, second)) => format!("{first}{combinator}{second}"),
            None => first,
        })
}

fn arb_declaration() -> impl Strategy<Value = String> {
    prop_oneof![
        prop_oneof![Just("red"), Just("navy"), Just("#0a0"), Just("rgb(1, 2, 3)")]
            .prop_map(|color| format!("color: {color}")),
        (0u32..100, 0u32..100).prop_map(|(v, h)| format!("margin: {v}px {h}px")),
        prop_oneof![Just("block"), Just("inline"), Just("none"), Just("list-item")]
            .prop_map(|display| format!("display: {display}")),
        (1u32..40).prop_map(|size| format!("font-size: {size}pt")),
        prop_oneof![
            Just(r#""plain""#),
            Just(r#""a\d b""#),
            Just(r#""q\"\\""#),
            Just(r#""f\c ""#),
        ]
        .prop_map(|content| format!("content: {content}")),
        prop_oneof![Just(r"\31 abc"), Just(r"a\:b"), Just("serif")]
            .prop_map(|family| format!("font-family: {family}")),
    ]
}

fn arb_ruleset() -> impl Strategy<Value = String> {
    (
        arb_selector(),
        prop::collection::vec((arb_declaration(), any::<bool>()), 1..4),
    )
        .prop_map(|(selector, declarations)| {
            let body: Vec<String> = declarations
                .into_iter()
                .map(|(declaration, important)| {
                    if important {
                        format!("{declaration} !important")
                    } else {
                        declaration
                    }
                })
                .collect();
            format!("{selector} {{ {} }}", body.join("; "))
        })
}

fn arb_stylesheet() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_ruleset(), 0..6).prop_map(|rulesets| rulesets.join("\n"))
}

proptest! {
    #[test]
    fn prop_serialized_sheet_reparses(css in arb_stylesheet()) {
        let sheet = parse_stylesheet(&css).unwrap();
        let reparsed = parse_stylesheet(&sheet.to_string()).unwrap();
        prop_assert_eq!(sheet, reparsed);
    }

    #[test]
    fn prop_arbitrary_input_never_panics(input in r#"[a-z0-9{}()\[\]:;.,#@!*>+~|='" \n/-]{0,80}"#) {
        let _ = tokenize(&input);
        let _ = parse_stylesheet(&input);
    }

    #[test]
    fn prop_resolution_is_deterministic(css in arb_stylesheet()) {
        let mut doc = Document::new();
        let div = doc.create_element("div", &[("class", "a1"), ("id", "b2")]);
        let p = doc.create_element("p", &[]);
        doc.append_child(NodeId::ROOT, div);
        doc.append_child(div, p);

        let author = StyleSheet::parse(&css).unwrap();
        let cascade = Cascade::with_default_user_agent(Some(author), None);
        let parent = resolve_style(&cascade, &doc.node(div), None);
        let first = resolve_style(&cascade, &doc.node(p), Some(&parent));
        let second = resolve_style(&cascade, &doc.node(p), Some(&parent));
        prop_assert_eq!(first, second);
    }
}
