//! CSS2 tokenizer, parser, object model, selector engine and cascade.
//!
//! # Scope
//!
//! This crate implements:
//! - **Tokenizer** ([§ 4.1.1 Tokenization](https://www.w3.org/TR/CSS2/syndata.html#tokenization))
//!   - Every CSS2 token type, comments, CDO/CDC
//!   - Escapes, unicode ranges, `url()` tokens
//!   - Source locations on every token
//!
//! - **Parser** ([§ 4.1 Syntax](https://www.w3.org/TR/CSS2/syndata.html#syntax))
//!   - Backtracking recursive descent over the CSS2 grammar
//!   - The forward-compatible core grammar, used to skip statements the CSS2
//!     grammar rejects ([§ 4.2 Rules for handling parsing errors](https://www.w3.org/TR/CSS2/syndata.html#parsing-errors))
//!   - Event callbacks through [`parser::DocumentHandler`], and a handler
//!     that builds a [`StyleSheet`]
//!
//! - **Object model**
//!   - Rulesets, `@import`, `@media`, `@page`, `@charset`, `@font-face`
//!   - Serialization back to CSS text via `Display`
//!
//! - **Selectors** ([§ 5 Selectors](https://www.w3.org/TR/CSS2/selector.html))
//!   - Type, universal, class, ID and attribute selectors, pseudo-classes
//!   - Descendant, child and adjacent sibling combinators
//!   - Specificity ([§ 6.4.3](https://www.w3.org/TR/CSS2/cascade.html#specificity))
//!
//! - **Cascade** ([§ 6 Assigning property values](https://www.w3.org/TR/CSS2/cascade.html))
//!   - User-agent, user and author origins with `!important`
//!   - Media filtering for `@media` blocks
//!   - Inheritance and the `inherit` value
//!   - A default user-agent sheet ([Appendix D](https://www.w3.org/TR/CSS2/sample.html))
//!
//! - **Computed styles**
//!   - Lengths in every CSS2 unit, colors, keywords
//!   - Shorthand expansion (margin, padding, border)
//!
//! # Not Yet Implemented
//!
//! - Fetching `@import` targets
//! - Pseudo-class state (`:hover`, `:link`, ...) and generated content
//! - Layout
//!
//! # Example
//! ```
//! use cascadia_css::{Cascade, StyleSheet, resolve_style};
//! use cascadia_dom::{Document, NodeId};
//!
//! let sheet = StyleSheet::parse("p.note { color: #00f; margin: 1em 0 }").unwrap();
//!
//! let mut doc = Document::new();
//! let p = doc.create_element("p", &[("class", "note")]);
//! doc.append_child(NodeId::ROOT, p);
//!
//! let cascade = Cascade::with_default_user_agent(Some(sheet), None);
//! let style = resolve_style(&cascade, &doc.node(p), None);
//! assert_eq!(style.color, cascadia_css::color::Rgb::new(0, 0, 255));
//! ```

/// The cascade per [CSS 2.1 § 6](https://www.w3.org/TR/CSS2/cascade.html).
pub mod cascade;
/// sRGB colors and the CSS2 named colors.
pub mod color;
/// Parser, matcher and resolver options.
pub mod config;
/// Parse errors and recoverable diagnostics.
pub mod error;
/// CSS2 parser per [§ 4.1 Syntax](https://www.w3.org/TR/CSS2/syndata.html#syntax).
pub mod parser;
/// Selectors and matching per [§ 5](https://www.w3.org/TR/CSS2/selector.html).
pub mod selector;
/// Computed style representation.
pub mod style;
/// The stylesheet object model.
pub mod stylesheet;
/// Declaration value terms.
pub mod term;
/// CSS2 tokenizer per [§ 4.1.1](https://www.w3.org/TR/CSS2/syndata.html#tokenization).
pub mod tokenizer;
/// Default user-agent stylesheet per [Appendix D](https://www.w3.org/TR/CSS2/sample.html).
pub mod ua_stylesheet;

// Re-exports for convenience
pub use cascade::{Cascade, Origin, compute_styles, resolve_style, resolve_style_with};
pub use config::{ClassIdMatch, MatchOptions, ParserConfig, ResolveOptions};
pub use error::{Diagnostic, ParseError};
pub use parser::{
    DocumentHandler, Parser, parse_declaration, parse_declaration_list, parse_expression,
    parse_selector, parse_stylesheet, parse_stylesheet_with,
};
pub use selector::{Selector, SelectorChain, Specificity, matches};
pub use style::Style;
pub use stylesheet::{Declaration, Ruleset, Statement, StyleSheet};
pub use term::Term;
pub use ua_stylesheet::default_user_agent_sheet;
