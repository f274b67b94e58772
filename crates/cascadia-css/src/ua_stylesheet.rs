//! Default user-agent stylesheet
//!
//! [CSS 2.1 Appendix D. Default style sheet for HTML 4](https://www.w3.org/TR/CSS2/sample.html)
//!
//! "This appendix is informative, not normative. This style sheet describes
//! the typical formatting of all HTML 4 elements based on extensive research
//! into current UA practice."
//!
//! The rules below are the subset whose properties [`Style`](crate::style::Style)
//! computes. Generated content, `vertical-align` and text decoration are
//! left out.

use std::sync::{Arc, OnceLock};

use tracing::warn;

use crate::parser::parse_stylesheet;
use crate::stylesheet::StyleSheet;

const UA_CSS: &str = r"
html, address,
blockquote,
body, dd, div,
dl, dt, fieldset, form,
frame, frameset,
h1, h2, h3, h4,
h5, h6, noframes,
ol, p, ul, center,
dir, hr, menu, pre   { display: block }
li              { display: list-item }
head            { display: none }
table           { display: table }
tr              { display: table-row }
thead           { display: table-header-group }
tbody           { display: table-row-group }
tfoot           { display: table-footer-group }
col             { display: table-column }
colgroup        { display: table-column-group }
td, th          { display: table-cell }
caption         { display: table-caption }
th              { font-weight: bolder; text-align: center }
caption         { text-align: center }
body            { margin: 8px }
h1              { font-size: 2em; margin: .67em 0 }
h2              { font-size: 1.5em; margin: .75em 0 }
h3              { font-size: 1.17em; margin: .83em 0 }
h4, p,
blockquote, ul,
fieldset, form,
ol, dl, dir,
menu            { margin: 1.12em 0 }
h5              { font-size: .83em; margin: 1.5em 0 }
h6              { font-size: .75em; margin: 1.67em 0 }
h1, h2, h3, h4,
h5, h6, b,
strong          { font-weight: bolder }
blockquote      { margin-left: 40px; margin-right: 40px }
i, cite, em,
var, address    { font-style: italic }
pre, tt, code,
kbd, samp       { font-family: monospace }
pre             { white-space: pre }
big             { font-size: 1.17em }
small, sub, sup { font-size: .83em }
ol, ul, dir,
menu, dd        { margin-left: 40px }
ol              { list-style-type: decimal }
ol ul, ul ol,
ul ul, ol ol    { margin-top: 0; margin-bottom: 0 }
hr              { border: 1px inset }
center          { text-align: center }
";

/// The parsed default sheet, shared by every cascade that uses it.
///
/// Parsed on first use.
#[must_use]
pub fn default_user_agent_sheet() -> Arc<StyleSheet> {
    static SHEET: OnceLock<Arc<StyleSheet>> = OnceLock::new();
    SHEET
        .get_or_init(|| {
            let sheet = parse_stylesheet(UA_CSS).unwrap_or_else(|error| {
                warn!(%error, "default user-agent sheet did not parse cleanly");
                error.into_partial().unwrap_or_default()
            });
            Arc::new(sheet)
        })
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::{Cascade, resolve_style};
    use crate::style::{DisplayType, Length, LengthOrAuto, ListStyleType, WhiteSpace};
    use cascadia_dom::{Document, NodeId};

    #[test]
    fn test_sheet_parses_completely() {
        let sheet = parse_stylesheet(UA_CSS).unwrap();
        assert_eq!(sheet.len(), 33);
        assert!(Arc::ptr_eq(
            &default_user_agent_sheet(),
            &default_user_agent_sheet()
        ));
    }

    #[test]
    fn test_heading_and_list_defaults() {
        let mut doc = Document::new();
        let body = doc.create_element("body", &[]);
        let h1 = doc.create_element("h1", &[]);
        let ol = doc.create_element("ol", &[]);
        let ul = doc.create_element("ul", &[]);
        let pre = doc.create_element("pre", &[]);
        doc.append_child(NodeId::ROOT, body);
        doc.append_child(body, h1);
        doc.append_child(body, ol);
        doc.append_child(ol, ul);
        doc.append_child(body, pre);

        let cascade = Cascade::with_default_user_agent(None, None);
        let body_style = resolve_style(&cascade, &doc.node(body), None);
        assert_eq!(body_style.display, DisplayType::Block);
        assert_eq!(body_style.margin.top, LengthOrAuto::Length(Length::Px(8.0)));

        let h1_style = resolve_style(&cascade, &doc.node(h1), Some(&body_style));
        assert_eq!(h1_style.font_size, 32.0);
        assert_eq!(h1_style.font_weight, 700);
        let LengthOrAuto::Length(Length::Px(top)) = h1_style.margin.top else {
            panic!("expected a pixel margin, got {:?}", h1_style.margin.top);
        };
        assert!((top - 21.44).abs() < 1e-9);

        let ol_style = resolve_style(&cascade, &doc.node(ol), Some(&body_style));
        assert_eq!(ol_style.list_style_type, ListStyleType::Decimal);
        assert_eq!(ol_style.margin.left, LengthOrAuto::Length(Length::Px(40.0)));

        // `ol ul` outranks `ul` by specificity.
        let ul_style = resolve_style(&cascade, &doc.node(ul), Some(&ol_style));
        assert_eq!(ul_style.margin.top, LengthOrAuto::Length(Length::ZERO));
        assert_eq!(ul_style.list_style_type, ListStyleType::Decimal);

        let pre_style = resolve_style(&cascade, &doc.node(pre), Some(&body_style));
        assert_eq!(pre_style.white_space, WhiteSpace::Pre);
        assert_eq!(pre_style.font_family, vec!["monospace".to_string()]);
    }
}
