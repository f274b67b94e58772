//! Builds a [`StyleSheet`] from parse events.

use tracing::trace;

use super::handler::DocumentHandler;
use crate::error::ParseError;
use crate::selector::Selector;
use crate::stylesheet::{
    AtCharset, AtFontFace, AtImport, AtMedia, AtPage, Declaration, Ruleset, Statement, StyleSheet,
};
use crate::term::Term;

/// The statement whose declarations are being received.
#[derive(Debug)]
enum OpenStatement {
    Ruleset(Ruleset),
    Page(AtPage),
    FontFace(AtFontFace),
}

/// A [`DocumentHandler`] that collects events into a [`StyleSheet`].
///
/// Statements are appended in the order their events arrive. A statement
/// still open when an error is reported is discarded.
#[derive(Debug, Default)]
pub struct StyleSheetBuilder {
    sheet: StyleSheet,
    open: Option<OpenStatement>,
    media: Option<AtMedia>,
}

impl StyleSheetBuilder {
    /// An empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The statements received so far.
    #[must_use]
    pub const fn sheet(&self) -> &StyleSheet {
        &self.sheet
    }

    /// Take the stylesheet. Unfinished statements are dropped.
    #[must_use]
    pub fn finish(self) -> StyleSheet {
        self.sheet
    }

    fn discard_open(&mut self) {
        let open = self.open.take();
        let media = self.media.take();
        if open.is_some() || media.is_some() {
            trace!("discarding unfinished statement");
        }
    }
}

impl DocumentHandler for StyleSheetBuilder {
    fn start_document(&mut self) {
        self.discard_open();
    }

    fn charset(&mut self, charset: String) {
        self.sheet.push(Statement::Charset(AtCharset { charset }));
    }

    fn import_style(&mut self, media: Vec<String>, url: String) {
        self.sheet.push(Statement::Import(AtImport {
            url,
            media,
            imported: None,
        }));
    }

    fn start_selector(&mut self, selector: Selector) {
        if self.open.is_some() {
            trace!("ruleset started inside an unfinished statement");
        }
        self.open = Some(OpenStatement::Ruleset(Ruleset {
            selector,
            declarations: Vec::new(),
        }));
    }

    fn end_selector(&mut self) {
        let Some(OpenStatement::Ruleset(ruleset)) = self.open.take() else {
            return;
        };
        match &mut self.media {
            Some(media) => media.rulesets.push(ruleset),
            None => self.sheet.push(Statement::Ruleset(ruleset)),
        }
    }

    fn property(&mut self, name: String, value: Vec<Term>, important: bool) {
        match &mut self.open {
            Some(OpenStatement::Ruleset(Ruleset { declarations, .. })
            | OpenStatement::Page(AtPage { declarations, .. })
            | OpenStatement::FontFace(AtFontFace { declarations })) => {
                declarations.push(Declaration {
                    property: name,
                    value,
                    important,
                });
            }
            None => trace!(property = %name, "declaration outside of a statement"),
        }
    }

    fn start_media(&mut self, media: Vec<String>) {
        self.media = Some(AtMedia {
            media,
            rulesets: Vec::new(),
        });
    }

    fn end_media(&mut self) {
        if let Some(media) = self.media.take() {
            self.sheet.push(Statement::Media(media));
        }
    }

    fn start_page(&mut self, name: Option<String>, pseudo_page: Option<String>) {
        self.open = Some(OpenStatement::Page(AtPage {
            name,
            pseudo_page,
            declarations: Vec::new(),
        }));
    }

    fn end_page(&mut self) {
        if let Some(OpenStatement::Page(page)) = self.open.take() {
            self.sheet.push(Statement::Page(page));
        }
    }

    fn start_font_face(&mut self) {
        self.open = Some(OpenStatement::FontFace(AtFontFace::default()));
    }

    fn end_font_face(&mut self) {
        if let Some(OpenStatement::FontFace(font_face)) = self.open.take() {
            self.sheet.push(Statement::FontFace(font_face));
        }
    }

    fn error(&mut self, _error: &ParseError) {
        self.discard_open();
    }

    fn unrecoverable_error(&mut self, _error: &ParseError) {
        self.discard_open();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{SelectorChain, SimpleSel};
    use crate::tokenizer::SourceLocation;

    #[test]
    fn test_collects_rulesets_inside_media() {
        let selector = Selector::single(SelectorChain::new(vec![SimpleSel::element("p")]));
        let mut builder = StyleSheetBuilder::new();
        builder.start_document();
        builder.start_media(vec!["print".to_string()]);
        builder.start_selector(selector);
        builder.property("color".to_string(), vec![Term::ident("red")], false);
        builder.end_selector();
        builder.end_media();
        builder.end_document();

        let sheet = builder.finish();
        assert_eq!(sheet.len(), 1);
        let Some(Statement::Media(at_media)) = sheet.get(0) else {
            panic!("expected @media");
        };
        assert_eq!(at_media.rulesets.len(), 1);
        assert_eq!(at_media.rulesets[0].declarations[0].property, "color");
    }

    #[test]
    fn test_error_discards_open_statement() {
        let selector = Selector::single(SelectorChain::new(vec![SimpleSel::universal()]));
        let mut builder = StyleSheetBuilder::new();
        builder.start_selector(selector);
        builder.property("color".to_string(), vec![Term::ident("red")], false);
        builder.error(&ParseError::syntax("broken", SourceLocation::START));
        builder.end_selector();
        assert!(builder.finish().is_empty());
    }

    #[test]
    fn test_error_discards_open_media_and_keeps_earlier_statements() {
        let mut builder = StyleSheetBuilder::new();
        builder.charset("utf-8".to_string());
        builder.start_media(vec!["screen".to_string()]);
        builder.start_selector(Selector::single(SelectorChain::new(vec![
            SimpleSel::element("p"),
        ])));
        builder.end_selector();
        builder.unrecoverable_error(&ParseError::syntax("broken", SourceLocation::START));
        builder.end_media();

        let sheet = builder.finish();
        assert_eq!(sheet.len(), 1);
        assert!(matches!(sheet.get(0), Some(Statement::Charset(_))));
    }
}
