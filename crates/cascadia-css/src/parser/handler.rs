//! Parse events.
//!
//! The parser reports what it recognizes through a [`DocumentHandler`] as
//! each production succeeds, moving the selectors and values it built
//! into the handler. If a statement is rejected after some of its events
//! were sent, [`DocumentHandler::error`] follows, and the handler drops
//! what it has of that statement. Every method has an empty default body;
//! implement the ones you need.

use crate::error::ParseError;
use crate::selector::Selector;
use crate::term::Term;

/// Receiver of parse events, in document order.
#[allow(unused_variables)]
pub trait DocumentHandler {
    /// Parsing has started.
    fn start_document(&mut self) {}

    /// Parsing has finished (also sent after an unrecoverable error).
    fn end_document(&mut self) {}

    /// `@charset "name";`
    fn charset(&mut self, charset: String) {}

    /// `@import url media;`
    fn import_style(&mut self, media: Vec<String>, url: String) {}

    /// A ruleset's selector group and `{` have been read.
    fn start_selector(&mut self, selector: Selector) {}

    /// The current ruleset ends.
    fn end_selector(&mut self) {}

    /// A declaration inside the current ruleset, `@page` or `@font-face`.
    fn property(&mut self, name: String, value: Vec<Term>, important: bool) {}

    /// An `@media` block begins.
    fn start_media(&mut self, media: Vec<String>) {}

    /// The current `@media` block ends.
    fn end_media(&mut self) {}

    /// An `@page` block begins.
    fn start_page(&mut self, name: Option<String>, pseudo_page: Option<String>) {}

    /// The current `@page` block ends.
    fn end_page(&mut self) {}

    /// An `@font-face` block begins.
    fn start_font_face(&mut self) {}

    /// The current `@font-face` block ends.
    fn end_font_face(&mut self) {}

    /// The statement being parsed was rejected by the CSS2 grammar. Events
    /// already sent for it belong to a statement that will not complete.
    fn error(&mut self, error: &ParseError) {}

    /// A statement could not be skipped; parsing stops after this call.
    fn unrecoverable_error(&mut self, error: &ParseError) {}
}
