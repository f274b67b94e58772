//! [CSS 2.1 § 4 Syntax and basic data types](https://www.w3.org/TR/CSS2/syndata.html)
//!
//! The parser turns a token stream into events on a [`DocumentHandler`].
//! [`StyleSheetBuilder`] is the handler that collects those events into a
//! [`StyleSheet`]; the free functions in this module wire the two together
//! for the common cases.

mod builder;
mod core_grammar;
mod css2;
mod handler;

pub use builder::StyleSheetBuilder;
pub use css2::Parser;
pub use handler::DocumentHandler;

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::selector::Selector;
use crate::stylesheet::{Declaration, StyleSheet};
use crate::term::Term;
use crate::tokenizer::{TokenSource, TokenStream};

/// Where a [`Parser`] is in its work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParserState {
    /// Nothing has been parsed yet.
    #[default]
    Ready,
    /// Between statements.
    Running,
    /// Inside `@charset`.
    TryParseCharset,
    /// An `@charset` rule was the last statement parsed.
    CharsetParsed,
    /// Inside `@import`.
    TryParseImport,
    /// An `@import` rule was the last statement parsed.
    ImportParsed,
    /// Inside a ruleset.
    TryParseRuleset,
    /// A ruleset was the last statement parsed.
    RulesetParsed,
    /// Inside `@media`.
    TryParseMedia,
    /// An `@media` block was the last statement parsed.
    MediaParsed,
    /// Inside `@page`.
    TryParsePage,
    /// An `@page` block was the last statement parsed.
    PageParsed,
    /// Inside `@font-face`.
    TryParseFontFace,
    /// An `@font-face` block was the last statement parsed.
    FontFaceParsed,
    /// The input has been consumed, or parsing stopped.
    Finished,
}

/// Parse a complete stylesheet with the default [`ParserConfig`].
///
/// # Errors
///
/// Returns [`ParseError::Unrecoverable`] carrying the statements parsed so
/// far when a statement could be neither parsed nor skipped.
pub fn parse_stylesheet(css: &str) -> Result<StyleSheet, ParseError> {
    parse_stylesheet_with(css, ParserConfig::default())
}

/// Parse a complete stylesheet.
///
/// # Errors
///
/// See [`parse_stylesheet`].
pub fn parse_stylesheet_with(css: &str, config: ParserConfig) -> Result<StyleSheet, ParseError> {
    parse_stylesheet_from(TokenStream::new(css), config)
}

/// Parse a complete stylesheet from any token source.
///
/// # Errors
///
/// See [`parse_stylesheet`].
pub fn parse_stylesheet_from<S: TokenSource>(
    source: S,
    config: ParserConfig,
) -> Result<StyleSheet, ParseError> {
    let mut parser = Parser::with_config(source, config);
    let mut builder = StyleSheetBuilder::new();
    match parser.parse_stylesheet(&mut builder) {
        Ok(()) => Ok(builder.finish()),
        Err(ParseError::Unrecoverable {
            message, location, ..
        }) => Err(ParseError::Unrecoverable {
            message,
            location,
            partial: Some(Box::new(builder.finish())),
        }),
        Err(other) => Err(other),
    }
}

/// Parse the contents of a declaration block, such as an HTML `style`
/// attribute. Malformed declarations are dropped.
///
/// # Errors
///
/// Only fails when nesting exceeds the default depth bound.
pub fn parse_declaration_list(css: &str) -> Result<Vec<Declaration>, ParseError> {
    Parser::from_css(css).parse_declaration_list()
}

/// Parse exactly one declaration, optionally followed by `;`.
///
/// # Errors
///
/// Returns a syntax error if the input is not a single declaration.
pub fn parse_declaration(css: &str) -> Result<Declaration, ParseError> {
    let mut parser = Parser::from_css(css);
    let declaration = parser.parse_declaration()?;
    if parser.expect(&crate::tokenizer::TokenKind::Semicolon, "';'").is_ok() {
        parser.skip_trivia_only();
    }
    parser.expect_end()?;
    Ok(declaration)
}

/// Parse a selector group such as `h1, div > p.note`.
///
/// # Errors
///
/// Returns a syntax error if the input is not a selector group.
pub fn parse_selector(css: &str) -> Result<Selector, ParseError> {
    let mut parser = Parser::from_css(css);
    let selector = parser.parse_selector()?;
    parser.expect_end()?;
    Ok(selector)
}

/// Parse a property value such as `1px solid rgb(0, 0, 0)`.
///
/// # Errors
///
/// Returns a syntax error if the input is not a value expression.
pub fn parse_expression(css: &str) -> Result<Vec<Term>, ParseError> {
    let mut parser = Parser::from_css(css);
    let terms = parser.parse_expression()?;
    parser.expect_end()?;
    Ok(terms)
}
