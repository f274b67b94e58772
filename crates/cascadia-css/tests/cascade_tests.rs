//! Integration tests for cascade resolution.

use cascadia_css::cascade::{cascaded_declarations, matched_rulesets};
use cascadia_css::color::Rgb;
use cascadia_css::style::{DisplayType, Length, LengthOrAuto};
use cascadia_css::{
    Cascade, MatchOptions, Origin, ResolveOptions, StyleSheet, compute_styles, resolve_style,
    resolve_style_with,
};
use cascadia_dom::{Document, NodeId};

const RED: Rgb = Rgb::new(255, 0, 0);
const GREEN: Rgb = Rgb::new(0, 128, 0);
const BLUE: Rgb = Rgb::new(0, 0, 255);

fn sheet(css: &str) -> StyleSheet {
    StyleSheet::parse(css).unwrap()
}

fn author_only(css: &str) -> Cascade {
    Cascade::new(Some(sheet(css)), None, None)
}

/// `<div id="a" class="b">` under the document node.
fn single_div() -> (Document, NodeId) {
    let mut doc = Document::new();
    let div = doc.create_element("div", &[("id", "a"), ("class", "b")]);
    doc.append_child(NodeId::ROOT, div);
    (doc, div)
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_id_beats_class_beats_type_in_any_order() {
    init_tracing();
    let (doc, div) = single_div();
    let node = doc.node(div);

    for css in [
        "#a { color: red } .b { color: green } div { color: blue }",
        "div { color: blue } .b { color: green } #a { color: red }",
        ".b { color: green } #a { color: red } div { color: blue }",
    ] {
        assert_eq!(resolve_style(&author_only(css), &node, None).color, RED, "{css}");
    }

    let css = "div { color: blue } .b { color: green }";
    assert_eq!(resolve_style(&author_only(css), &node, None).color, GREEN);
    let css = ".b { color: green } div { color: blue }";
    assert_eq!(resolve_style(&author_only(css), &node, None).color, GREEN);
}

#[test]
fn test_later_rule_wins_on_tie() {
    let (doc, div) = single_div();
    let node = doc.node(div);

    let css = ".b { color: red } .b { color: blue }";
    assert_eq!(resolve_style(&author_only(css), &node, None).color, BLUE);
    let css = ".b { color: red; color: green }";
    assert_eq!(resolve_style(&author_only(css), &node, None).color, GREEN);
}

#[test]
fn test_origin_dominates_specificity() {
    let (doc, div) = single_div();
    let node = doc.node(div);

    let cascade = Cascade::new(
        Some(sheet("div { color: blue }")),
        Some(sheet("div#a.b { color: red }")),
        Some(sheet("html body div#a.b { color: green }")),
    );
    assert_eq!(resolve_style(&cascade, &node, None).color, BLUE);

    let cascade = Cascade::new(
        None,
        Some(sheet("div { color: red }")),
        Some(sheet("#a.b { color: green }")),
    );
    assert_eq!(resolve_style(&cascade, &node, None).color, RED);
}

#[test]
fn test_important_declarations() {
    init_tracing();
    let (doc, div) = single_div();
    let node = doc.node(div);

    // Author important beats author normal regardless of specificity.
    let cascade = author_only("div { color: red !important } #a { color: blue }");
    assert_eq!(resolve_style(&cascade, &node, None).color, RED);

    // Author important beats user normal; user important beats both.
    let cascade = Cascade::new(
        Some(sheet("#a { color: blue !important }")),
        Some(sheet("div { color: red }")),
        None,
    );
    assert_eq!(resolve_style(&cascade, &node, None).color, BLUE);

    let cascade = Cascade::new(
        Some(sheet("#a { color: blue !important }")),
        Some(sheet("div { color: red !important }")),
        None,
    );
    assert_eq!(resolve_style(&cascade, &node, None).color, RED);

    // User-agent important declarations get no boost.
    let cascade = Cascade::new(
        Some(sheet("div { color: blue }")),
        None,
        Some(sheet("div { color: red !important }")),
    );
    assert_eq!(resolve_style(&cascade, &node, None).color, BLUE);
}

#[test]
fn test_matched_rulesets_report_origin_and_specificity() {
    let (doc, div) = single_div();
    let cascade = Cascade::new(
        Some(sheet("p { color: red } div.b, #a { color: blue }")),
        None,
        Some(sheet("* { display: block }")),
    );
    let matched = matched_rulesets(&cascade, &doc.node(div), &ResolveOptions::default());
    assert_eq!(matched.len(), 2);
    assert_eq!(matched[0].origin, Origin::UserAgent);
    assert_eq!(matched[0].specificity.to_string(), "(0, 0, 0)");
    assert_eq!(matched[1].origin, Origin::Author);
    assert_eq!(matched[1].specificity.to_string(), "(1, 0, 0)");

    let winners = cascaded_declarations(&cascade, &doc.node(div), &ResolveOptions::default());
    assert_eq!(winners.len(), 2);
    assert_eq!(winners["color"].origin, Origin::Author);
    assert_eq!(winners["display"].origin, Origin::UserAgent);
}

#[test]
fn test_resolution_is_idempotent() {
    let (doc, div) = single_div();
    let node = doc.node(div);
    let cascade = Cascade::with_default_user_agent(
        Some(sheet("#a { margin: 1em 2em; color: red } .b { border: thin solid }")),
        Some(sheet("div { font-size: 20px }")),
    );

    let first = resolve_style(&cascade, &node, None);
    let second = resolve_style(&cascade, &node, None);
    assert_eq!(first, second);
    assert_eq!(first.margin.top, LengthOrAuto::Length(Length::Px(20.0)));

    let before = cascade.sheet(Origin::Author).map(ToString::to_string);
    let _ = compute_styles(&doc, &cascade, &ResolveOptions::default());
    assert_eq!(cascade.sheet(Origin::Author).map(ToString::to_string), before);
}

#[test]
fn test_unmatched_node_gets_initial_values() {
    let (doc, div) = single_div();
    let cascade = author_only("span { color: red }");
    let style = resolve_style(&cascade, &doc.node(div), None);

    let mut expected = cascadia_css::Style::default();
    expected.finalize();
    assert_eq!(style, expected);
    assert_eq!(style.color, Rgb::BLACK);
    assert_eq!(style.display, DisplayType::Inline);
}

#[test]
fn test_inheritance_through_compute_styles() {
    let mut doc = Document::new();
    let body = doc.create_element("body", &[]);
    let section = doc.create_element("section", &[("class", "x")]);
    let text = doc.create_text("words");
    let em = doc.create_element("em", &[]);
    doc.append_child(NodeId::ROOT, body);
    doc.append_child(body, section);
    doc.append_child(section, text);
    doc.append_child(section, em);

    let cascade = author_only(
        "body { color: green; font-size: 10px; margin: 5px }
         .x { font-size: 2em; border-color: inherit }
         em { margin: inherit; font-size: 150% }",
    );
    let styles = compute_styles(&doc, &cascade, &ResolveOptions::default());
    assert_eq!(styles.len(), 3);

    let section_style = &styles[&section];
    assert_eq!(section_style.color, GREEN);
    assert_eq!(section_style.font_size, 20.0);
    // margin is not inherited.
    assert_eq!(section_style.margin.top, LengthOrAuto::Length(Length::ZERO));

    let em_style = &styles[&em];
    assert_eq!(em_style.color, GREEN);
    assert_eq!(em_style.font_size, 30.0);
    // `inherit` takes the parent's value, which is 0 here.
    assert_eq!(em_style.margin.left, LengthOrAuto::Length(Length::ZERO));
}

#[test]
fn test_media_blocks_follow_the_configured_medium() {
    let (doc, div) = single_div();
    let cascade = author_only(
        "div { display: block }
         @media print { div { display: none } }
         @media all { div { color: red } }",
    );
    let node = doc.node(div);

    let screen = resolve_style_with(&cascade, &node, None, &ResolveOptions::for_medium("screen"));
    assert_eq!(screen.display, DisplayType::Block);
    assert_eq!(screen.color, RED);

    let print = resolve_style_with(&cascade, &node, None, &ResolveOptions::for_medium("PRINT"));
    assert_eq!(print.display, DisplayType::None);
}

#[test]
fn test_exact_matching_through_resolve_options() {
    let mut doc = Document::new();
    let div = doc.create_element("div", &[("class", "foobar")]);
    doc.append_child(NodeId::ROOT, div);
    let cascade = author_only(".foo { color: red }");
    let node = doc.node(div);

    assert_eq!(resolve_style(&cascade, &node, None).color, RED);

    let options = ResolveOptions {
        matching: MatchOptions::exact(),
        ..ResolveOptions::default()
    };
    assert_eq!(resolve_style_with(&cascade, &node, None, &options).color, Rgb::BLACK);
}

#[test]
fn test_shared_user_agent_sheet() {
    let first = Cascade::with_default_user_agent(None, None);
    let second = Cascade::with_default_user_agent(Some(StyleSheet::new()), None);
    let (Some(a), Some(b)) = (
        first.sheet(Origin::UserAgent),
        second.sheet(Origin::UserAgent),
    ) else {
        panic!("user-agent sheet missing");
    };
    assert!(std::ptr::eq(a, b));
    assert!(!a.is_empty());
}
