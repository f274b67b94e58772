//! [CSS 2.1 Appendix G Grammar](https://www.w3.org/TR/CSS2/grammar.html)
//!
//! A backtracking recursive-descent parser. Every production reads from the
//! [`TokenSource`] and returns `Result<T, ParseError>`; productions that may
//! fail part-way are run through [`Parser::attempt`], which restores the
//! source to where the production started. When a top-level statement does
//! not match the CSS2 grammar the parser falls back to the core grammar
//! (see `core_grammar.rs`) to skip it.
//!
//! Statement productions send their events to the [`DocumentHandler`] as
//! they go. Nothing is sent for a statement before its `{` has been read.

use tracing::{debug, trace, warn};

use super::ParserState;
use super::handler::DocumentHandler;
use crate::color::Rgb;
use crate::config::ParserConfig;
use crate::error::{Diagnostic, ParseError};
use crate::selector::{
    AdditionalSel, AttrMatch, AttrSel, Combinator, Pseudo, Selector, SelectorChain, SimpleSel,
};
use crate::stylesheet::Declaration;
use crate::term::{Num, NumUnit, Operator, Term, TermValue, UnaryOp};
use crate::tokenizer::{HashType, Mark, Token, TokenKind, TokenSource, TokenStream};

pub(super) type PResult<T> = Result<T, ParseError>;

/// Which statements are still allowed at the current point of a stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Nothing has been seen: `@charset` and `@import` are allowed.
    Start,
    /// Only `@charset`/`@import` so far: `@import` is allowed.
    Imports,
    /// Any other statement has been seen.
    Body,
}

/// CSS2 parser over a [`TokenSource`].
///
/// # Example
/// ```
/// use cascadia_css::parser::{Parser, StyleSheetBuilder};
///
/// let mut parser = Parser::from_css("p { color: red }");
/// let mut builder = StyleSheetBuilder::new();
/// parser.parse_stylesheet(&mut builder).unwrap();
/// assert_eq!(builder.finish().len(), 1);
/// ```
#[derive(Debug)]
pub struct Parser<S> {
    pub(super) source: S,
    pub(super) config: ParserConfig,
    state: ParserState,
    diagnostics: Vec<Diagnostic>,
    depth: usize,
}

impl Parser<TokenStream> {
    /// Tokenize `css` and build a parser over it.
    #[must_use]
    pub fn from_css(css: &str) -> Self {
        Self::new(TokenStream::new(css))
    }
}

impl<S: TokenSource> Parser<S> {
    /// A parser with the default configuration.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    /// A parser with an explicit configuration.
    #[must_use]
    pub const fn with_config(source: S, config: ParserConfig) -> Self {
        Self {
            source,
            config,
            state: ParserState::Ready,
            diagnostics: Vec::new(),
            depth: 0,
        }
    }

    /// Where the parser is in its work.
    #[must_use]
    pub const fn state(&self) -> ParserState {
        self.state
    }

    /// Errors recorded while backtracking through the current statement.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Give back the token source.
    #[must_use]
    pub fn into_source(self) -> S {
        self.source
    }

    // ---- entry points --------------------------------------------------

    /// `stylesheet : [ CHARSET_SYM S* STRING S* ';' ]? [S|CDO|CDC]*
    ///   [ import [S|CDO|CDC]* ]* [ [ ruleset | media | page | font_face ] [S|CDO|CDC]* ]*`
    ///
    /// Events are sent to `handler` as each production succeeds. Statements
    /// the CSS2 grammar rejects are skipped with the core grammar and
    /// reported through [`DocumentHandler::error`], which tells the handler
    /// to drop whatever it collected for that statement.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Unrecoverable`] (after calling
    /// [`DocumentHandler::unrecoverable_error`]) when a statement cannot be
    /// skipped. `end_document` is sent either way.
    pub fn parse_stylesheet<H: DocumentHandler>(&mut self, handler: &mut H) -> PResult<()> {
        self.diagnostics.clear();
        self.state = ParserState::Running;
        handler.start_document();
        let result = self.stylesheet(handler);
        handler.end_document();
        self.state = ParserState::Finished;
        result
    }

    /// Parse a single statement and send its events to `handler`.
    ///
    /// # Errors
    ///
    /// Returns the CSS2 grammar's error if the statement does not parse,
    /// after reporting it through [`DocumentHandler::error`]. The source is
    /// left where the statement started.
    pub fn parse_statement<H: DocumentHandler>(&mut self, handler: &mut H) -> PResult<()> {
        self.diagnostics.clear();
        self.skip_s_cdo_cdc();
        let result = self.attempt(|p| p.css2_statement(handler, Phase::Start));
        if let Err(error) = &result {
            handler.error(error);
        }
        result
    }

    /// `S* declaration? [ ';' S* declaration? ]*` up to the end of input,
    /// as found in an HTML `style` attribute. Malformed declarations are
    /// skipped.
    ///
    /// # Errors
    ///
    /// Only fails if nesting exceeds the configured depth.
    pub fn parse_declaration_list(&mut self) -> PResult<Vec<Declaration>> {
        self.diagnostics.clear();
        self.state = ParserState::Running;
        let mut declarations = Vec::new();
        let result = self.declaration_list_body(false, |declaration| declarations.push(declaration));
        self.state = ParserState::Finished;
        result.map(|()| declarations)
    }

    /// Parse one `property: value [!important]`.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the input does not start with a declaration.
    pub fn parse_declaration(&mut self) -> PResult<Declaration> {
        self.diagnostics.clear();
        self.skip_trivia_only();
        self.attempt(Self::declaration)
    }

    /// Parse a comma-separated selector group.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the input does not start with a selector.
    pub fn parse_selector(&mut self) -> PResult<Selector> {
        self.diagnostics.clear();
        self.skip_trivia_only();
        self.attempt(Self::selector_group)
    }

    /// Parse a value expression.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the input does not start with a term.
    pub fn parse_expression(&mut self) -> PResult<Vec<Term>> {
        self.diagnostics.clear();
        self.skip_trivia_only();
        self.attempt(Self::expression)
    }

    /// Check that only whitespace and comments remain.
    ///
    /// # Errors
    ///
    /// Returns a syntax error naming the first leftover token.
    pub fn expect_end(&mut self) -> PResult<()> {
        self.skip_trivia_only();
        match self.source.peek() {
            None => Ok(()),
            Some(token) => Err(ParseError::syntax(
                format!("unexpected {} after the end of the input", token.kind),
                token.location,
            )),
        }
    }

    // ---- driver ----------------------------------------------------------

    fn stylesheet<H: DocumentHandler>(&mut self, handler: &mut H) -> PResult<()> {
        let mut phase = Phase::Start;
        loop {
            self.skip_s_cdo_cdc();
            let keyword = match self.peek_kind() {
                None => return Ok(()),
                Some(TokenKind::AtKeyword(name)) => Some(name.to_ascii_lowercase()),
                Some(_) => None,
            };
            self.top_level_statement(handler, phase)?;
            phase = match (phase, keyword.as_deref()) {
                (Phase::Start | Phase::Imports, Some("charset" | "import")) => Phase::Imports,
                _ => Phase::Body,
            };
        }
    }

    fn top_level_statement<H: DocumentHandler>(
        &mut self,
        handler: &mut H,
        phase: Phase,
    ) -> PResult<()> {
        let start = self.source.mark();
        let error = match self.attempt(|p| p.css2_statement(handler, phase)) {
            Ok(()) => {
                self.diagnostics.clear();
                return Ok(());
            }
            Err(error) => error,
        };

        if !self.config.forward_compatible {
            return Err(self.unrecoverable(handler, &error, start));
        }
        match self.attempt(Self::core_statement) {
            Ok(()) => {
                warn!(location = %start.location(), %error, "skipped statement");
                handler.error(&error);
                self.diagnostics.clear();
                self.state = ParserState::Running;
                Ok(())
            }
            Err(core_error) => Err(self.unrecoverable(handler, &core_error, start)),
        }
    }

    fn unrecoverable<H: DocumentHandler>(
        &mut self,
        handler: &mut H,
        cause: &ParseError,
        start: Mark,
    ) -> ParseError {
        let error = ParseError::Unrecoverable {
            message: cause.message(),
            location: start.location(),
            partial: None,
        };
        warn!(%error, "stopping");
        self.diagnostics.push(Diagnostic::from_error(&error, start.location()));
        handler.unrecoverable_error(&error);
        error
    }

    fn css2_statement<H: DocumentHandler>(&mut self, handler: &mut H, phase: Phase) -> PResult<()> {
        let keyword = match self.peek_kind() {
            Some(TokenKind::AtKeyword(name)) => Some(name.to_ascii_lowercase()),
            _ => None,
        };
        match keyword.as_deref() {
            None => self.ruleset(handler),
            Some("charset") if phase == Phase::Start => self.charset(handler),
            Some("import") if phase != Phase::Body => self.import(handler),
            Some("media") => self.media(handler),
            Some("page") => self.page(handler),
            Some("font-face") => self.font_face(handler),
            Some("charset") => Err(self.error_here("@charset must be the first statement")),
            Some("import") => Err(self.error_here("@import must precede all rulesets")),
            Some(other) => Err(self.error_here(format!("unknown at-rule '@{other}'"))),
        }
    }

    // ---- at-rules --------------------------------------------------------

    /// `CHARSET_SYM S* STRING S* ';'`
    fn charset<H: DocumentHandler>(&mut self, handler: &mut H) -> PResult<()> {
        self.state = ParserState::TryParseCharset;
        self.at_keyword("charset")?;
        self.skip_trivia_only();
        let charset = self.string("a charset name")?;
        self.skip_trivia_only();
        self.expect(&TokenKind::Semicolon, "';'")?;
        handler.charset(charset);
        self.state = ParserState::CharsetParsed;
        Ok(())
    }

    /// `IMPORT_SYM S* [STRING|URI] S* [ medium [ COMMA S* medium]* ]? ';' S*`
    fn import<H: DocumentHandler>(&mut self, handler: &mut H) -> PResult<()> {
        self.state = ParserState::TryParseImport;
        self.at_keyword("import")?;
        self.skip_trivia_only();
        let url = match self.peek_kind() {
            Some(TokenKind::Url(url) | TokenKind::String(url)) => {
                let url = url.clone();
                let _ = self.bump();
                url
            }
            Some(TokenKind::Function(name)) if name.eq_ignore_ascii_case("url") => {
                let _ = self.bump();
                self.skip_trivia_only();
                let url = self.string("a url")?;
                self.skip_trivia_only();
                self.expect(&TokenKind::RightParen, "')'")?;
                url
            }
            _ => return Err(self.unexpected("a url or string")),
        };
        self.skip_trivia_only();
        let media = if matches!(self.peek_kind(), Some(TokenKind::Ident(_))) {
            self.medium_list()?
        } else {
            Vec::new()
        };
        // A missing ';' at the end of the sheet is implied.
        if self.source.peek().is_some() {
            self.expect(&TokenKind::Semicolon, "';'")?;
        }
        handler.import_style(media, url);
        self.state = ParserState::ImportParsed;
        Ok(())
    }

    /// `medium [ COMMA S* medium ]*` where `medium : IDENT S*`
    fn medium_list(&mut self) -> PResult<Vec<String>> {
        let mut media = vec![self.ident("a medium")?];
        loop {
            self.skip_trivia_only();
            if self.peek_kind() != Some(&TokenKind::Comma) {
                return Ok(media);
            }
            let _ = self.bump();
            self.skip_trivia_only();
            media.push(self.ident("a medium")?);
        }
    }

    /// `MEDIA_SYM S* medium [ COMMA S* medium ]* '{' S* ruleset* '}' S*`
    fn media<H: DocumentHandler>(&mut self, handler: &mut H) -> PResult<()> {
        self.state = ParserState::TryParseMedia;
        self.at_keyword("media")?;
        self.skip_trivia_only();
        let media = self.medium_list()?;
        self.expect(&TokenKind::LeftBrace, "'{'")?;
        self.nested(|p| {
            handler.start_media(media);
            p.media_body(handler)
        })?;
        self.state = ParserState::MediaParsed;
        Ok(())
    }

    /// Rulesets up to the closing `}`. A ruleset sends no events until its
    /// block is open, so one that fails is skipped quietly.
    fn media_body<H: DocumentHandler>(&mut self, handler: &mut H) -> PResult<()> {
        loop {
            self.skip_trivia_only();
            match self.peek_kind() {
                None => {
                    trace!("closing @media at end of input");
                    handler.end_media();
                    return Ok(());
                }
                Some(TokenKind::RightBrace) => {
                    let _ = self.bump();
                    handler.end_media();
                    return Ok(());
                }
                Some(_) => {
                    if let Err(error) = self.attempt(|p| p.ruleset(handler)) {
                        debug!(%error, "skipping statement inside @media");
                        self.core_statement()?;
                    }
                }
            }
        }
    }

    /// `PAGE_SYM S* IDENT? pseudo_page? S* '{' S* declaration [ ';' S* declaration ]* '}' S*`
    fn page<H: DocumentHandler>(&mut self, handler: &mut H) -> PResult<()> {
        self.state = ParserState::TryParsePage;
        self.at_keyword("page")?;
        self.skip_trivia_only();
        let name = match self.peek_kind() {
            Some(TokenKind::Ident(_)) => Some(self.ident("a page name")?),
            _ => None,
        };
        // pseudo_page : ':' IDENT
        let pseudo_page = if self.peek_kind() == Some(&TokenKind::Colon) {
            let _ = self.bump();
            Some(self.ident("a page selector")?)
        } else {
            None
        };
        self.skip_trivia_only();
        self.declaration_block(handler, |h| h.start_page(name, pseudo_page), H::end_page)?;
        self.state = ParserState::PageParsed;
        Ok(())
    }

    /// `FONT_FACE_SYM S* '{' S* declaration [ ';' S* declaration ]* '}' S*`
    fn font_face<H: DocumentHandler>(&mut self, handler: &mut H) -> PResult<()> {
        self.state = ParserState::TryParseFontFace;
        self.at_keyword("font-face")?;
        self.skip_trivia_only();
        self.declaration_block(handler, H::start_font_face, H::end_font_face)?;
        self.state = ParserState::FontFaceParsed;
        Ok(())
    }

    // ---- rulesets and selectors -----------------------------------------

    /// `ruleset : selector [ COMMA S* selector ]* '{' S* declaration [ ';' S* declaration ]* '}' S*`
    fn ruleset<H: DocumentHandler>(&mut self, handler: &mut H) -> PResult<()> {
        self.state = ParserState::TryParseRuleset;
        let selector = self.selector_group()?;
        self.declaration_block(handler, |h| h.start_selector(selector), H::end_selector)?;
        self.state = ParserState::RulesetParsed;
        Ok(())
    }

    fn selector_group(&mut self) -> PResult<Selector> {
        let mut chains = vec![self.selector_chain()?];
        while self.peek_kind() == Some(&TokenKind::Comma) {
            let _ = self.bump();
            self.skip_trivia_only();
            chains.push(self.selector_chain()?);
        }
        Ok(Selector { chains })
    }

    /// `selector : simple_selector [ combinator simple_selector ]*`
    /// where `combinator : PLUS S* | GREATER S* | S`
    fn selector_chain(&mut self) -> PResult<SelectorChain> {
        let mut links = vec![self.simple_selector(Combinator::None)?];
        loop {
            let had_whitespace = self.skip_trivia();
            let combinator = match self.peek_kind() {
                Some(kind) if kind.is_delim('+') => Combinator::AdjacentSibling,
                Some(kind) if kind.is_delim('>') => Combinator::Child,
                Some(TokenKind::Comma | TokenKind::LeftBrace) | None => break,
                Some(_) if had_whitespace => Combinator::Descendant,
                Some(_) => return Err(self.unexpected("a combinator")),
            };
            if combinator != Combinator::Descendant {
                let _ = self.bump();
                self.skip_trivia_only();
            }
            links.push(self.simple_selector(combinator)?);
        }
        Ok(SelectorChain::new(links))
    }

    /// `simple_selector : element_name [ HASH | class | attrib | pseudo ]* | [ HASH | class | attrib | pseudo ]+`
    fn simple_selector(&mut self, combinator: Combinator) -> PResult<SimpleSel> {
        let mut sel = SimpleSel {
            combinator,
            ..SimpleSel::default()
        };
        let mut has_element_name = true;
        match self.peek_kind() {
            Some(TokenKind::Ident(_)) => sel.name = Some(self.ident("an element name")?),
            Some(kind) if kind.is_delim('*') => {
                let _ = self.bump();
            }
            _ => has_element_name = false,
        }

        loop {
            match self.peek_kind() {
                Some(TokenKind::Hash { value, hash_type }) => {
                    if *hash_type == HashType::Unrestricted {
                        return Err(self.unexpected("an identifier after '#'"));
                    }
                    let id = value.clone();
                    let _ = self.bump();
                    sel.additional.push(AdditionalSel::Id(id));
                }
                Some(kind) if kind.is_delim('.') => {
                    let _ = self.bump();
                    let class = self.ident("a class name")?;
                    sel.additional.push(AdditionalSel::Class(class));
                }
                Some(TokenKind::LeftBracket) => {
                    let attr = self.attribute_selector()?;
                    if let Some(AdditionalSel::Attribute(attrs)) = sel.additional.last_mut() {
                        attrs.push(attr);
                    } else {
                        sel.additional.push(AdditionalSel::Attribute(vec![attr]));
                    }
                }
                Some(TokenKind::Colon) => {
                    let pseudo = self.pseudo()?;
                    sel.additional.push(AdditionalSel::Pseudo(pseudo));
                }
                _ => break,
            }
        }

        if !has_element_name && sel.additional.is_empty() {
            return Err(self.unexpected("a selector"));
        }
        Ok(sel)
    }

    /// `attrib : '[' S* IDENT S* [ [ '=' | INCLUDES | DASHMATCH ] S* [ IDENT | STRING ] S* ]? ']'`
    fn attribute_selector(&mut self) -> PResult<AttrSel> {
        self.expect(&TokenKind::LeftBracket, "'['")?;
        self.skip_trivia_only();
        let name = self.ident("an attribute name")?;
        self.skip_trivia_only();
        let match_kind = match self.peek_kind() {
            Some(TokenKind::RightBracket) => {
                let _ = self.bump();
                return Ok(AttrSel::set(&name));
            }
            Some(kind) if kind.is_delim('=') => AttrMatch::Equals,
            Some(TokenKind::Includes) => AttrMatch::Includes,
            Some(TokenKind::DashMatch) => AttrMatch::DashMatch,
            _ => return Err(self.unexpected("'=', '~=', '|=' or ']'")),
        };
        let _ = self.bump();
        self.skip_trivia_only();
        let value = match self.peek_kind() {
            Some(TokenKind::Ident(value) | TokenKind::String(value)) => value.clone(),
            _ => return Err(self.unexpected("an identifier or string")),
        };
        let _ = self.bump();
        self.skip_trivia_only();
        self.expect(&TokenKind::RightBracket, "']'")?;
        Ok(AttrSel::with_value(&name, match_kind, &value))
    }

    /// `pseudo : ':' [ IDENT | FUNCTION S* IDENT S* ')' ]`
    fn pseudo(&mut self) -> PResult<Pseudo> {
        self.expect(&TokenKind::Colon, "':'")?;
        match self.peek_kind() {
            Some(TokenKind::Ident(_)) => Ok(Pseudo {
                name: self.ident("a pseudo-class")?,
                argument: None,
            }),
            Some(TokenKind::Function(name)) => {
                let name = name.clone();
                let _ = self.bump();
                self.skip_trivia_only();
                let argument = self.ident("a pseudo-class argument")?;
                self.skip_trivia_only();
                self.expect(&TokenKind::RightParen, "')'")?;
                Ok(Pseudo {
                    name,
                    argument: Some(argument),
                })
            }
            _ => Err(self.unexpected("a pseudo-class name")),
        }
    }

    // ---- declarations ----------------------------------------------------

    /// `'{' S* declaration [ ';' S* declaration ]* '}' S*`
    ///
    /// `open` is sent once the block is entered and `close` once it ends.
    /// A block left open at the end of the input is closed implicitly.
    fn declaration_block<H: DocumentHandler>(
        &mut self,
        handler: &mut H,
        open: impl FnOnce(&mut H),
        close: impl FnOnce(&mut H),
    ) -> PResult<()> {
        self.expect(&TokenKind::LeftBrace, "'{'")?;
        self.nested(|p| {
            open(handler);
            p.declaration_list_body(true, |declaration| {
                handler.property(declaration.property, declaration.value, declaration.important);
            })?;
            close(handler);
            Ok(())
        })
    }

    fn declaration_list_body(
        &mut self,
        in_block: bool,
        mut sink: impl FnMut(Declaration),
    ) -> PResult<()> {
        loop {
            self.skip_trivia_only();
            match self.peek_kind() {
                None => {
                    if in_block {
                        trace!("closing declaration block at end of input");
                    }
                    return Ok(());
                }
                Some(TokenKind::RightBrace) if in_block => {
                    let _ = self.bump();
                    return Ok(());
                }
                Some(TokenKind::Semicolon) => {
                    let _ = self.bump();
                }
                Some(_) => match self.attempt(Self::declaration_in_list) {
                    Ok(declaration) => sink(declaration),
                    Err(error) => {
                        debug!(%error, "skipping malformed declaration");
                        self.skip_malformed_declaration(in_block);
                    }
                },
            }
        }
    }

    /// A declaration must be followed by `;`, `}` or the end of the input.
    fn declaration_in_list(&mut self) -> PResult<Declaration> {
        let declaration = self.declaration()?;
        match self.peek_kind() {
            None | Some(TokenKind::Semicolon | TokenKind::RightBrace) => Ok(declaration),
            Some(_) => Err(self.unexpected("';' or '}'")),
        }
    }

    /// "User agents must handle unexpected tokens encountered while parsing a
    /// declaration by reading until the end of the declaration, while
    /// observing the rules for matching pairs of (), [], {}, "", and ''."
    fn skip_malformed_declaration(&mut self, in_block: bool) {
        let mut closers: Vec<TokenKind> = Vec::new();
        let mut consumed_any = false;
        while let Some(kind) = self.peek_kind() {
            if closers.is_empty() {
                match kind {
                    TokenKind::Semicolon => {
                        let _ = self.bump();
                        return;
                    }
                    TokenKind::RightBrace if in_block && consumed_any => return,
                    _ => {}
                }
            }
            match kind {
                TokenKind::LeftBrace => closers.push(TokenKind::RightBrace),
                TokenKind::LeftBracket => closers.push(TokenKind::RightBracket),
                TokenKind::LeftParen | TokenKind::Function(_) => {
                    closers.push(TokenKind::RightParen);
                }
                closer if closers.last() == Some(closer) => {
                    let _ = closers.pop();
                }
                _ => {}
            }
            let _ = self.bump();
            consumed_any = true;
        }
    }

    /// `declaration : property ':' S* expr prio?` where `property : IDENT S*`
    /// and `prio : IMPORTANT_SYM S*`
    fn declaration(&mut self) -> PResult<Declaration> {
        let property = self.ident("a property name")?;
        self.skip_trivia_only();
        self.expect(&TokenKind::Colon, "':'")?;
        self.skip_trivia_only();
        let value = self.expression()?;
        let important = self.peek_kind() == Some(&TokenKind::Important);
        if important {
            let _ = self.bump();
            self.skip_trivia_only();
        }
        Ok(Declaration {
            property,
            value,
            important,
        })
    }

    /// `expr : term [ operator term ]*`
    fn expression(&mut self) -> PResult<Vec<Term>> {
        let mut terms = vec![self.term()?];
        loop {
            self.skip_trivia_only();
            let separator = match self.peek_kind() {
                Some(TokenKind::Comma) => Some(Operator::Comma),
                Some(kind) if kind.is_delim('/') => Some(Operator::Slash),
                _ => None,
            };
            if let Some(separator) = separator {
                let _ = self.bump();
                self.skip_trivia_only();
                if let Some(last) = terms.last_mut() {
                    last.separator = Some(separator);
                }
            } else if !self.at_term_start() {
                return Ok(terms);
            }
            terms.push(self.term()?);
        }
    }

    fn at_term_start(&self) -> bool {
        matches!(
            self.peek_kind(),
            Some(
                TokenKind::Number { .. }
                    | TokenKind::Percentage { .. }
                    | TokenKind::Dimension { .. }
                    | TokenKind::Function(_)
                    | TokenKind::String(_)
                    | TokenKind::Ident(_)
                    | TokenKind::Url(_)
                    | TokenKind::UnicodeRange(_)
                    | TokenKind::Hash { .. }
                    | TokenKind::Delim('+' | '-')
            )
        )
    }

    /// `term : unary_operator? [ NUMBER S* | PERCENTAGE S* | LENGTH S* | ... | function ]
    ///   | STRING S* | IDENT S* | URI S* | RGB S* | UNICODERANGE S* | hexcolor`
    fn term(&mut self) -> PResult<Term> {
        let unary = match self.peek_kind() {
            Some(TokenKind::Delim('-')) => Some(UnaryOp::Minus),
            Some(TokenKind::Delim('+')) => Some(UnaryOp::Plus),
            _ => None,
        };
        if unary.is_some() {
            let _ = self.bump();
        }

        let Some(token) = self.bump() else {
            return Err(self.end_of_input());
        };
        let value = match token.kind {
            TokenKind::Number { value, .. } => TermValue::Number(Num::new(value, NumUnit::None)),
            TokenKind::Percentage { value } => TermValue::Number(Num::new(value, NumUnit::Percent)),
            TokenKind::Dimension { value, unit, .. } => {
                let unit = unit.parse().unwrap_or(NumUnit::Other(unit));
                TermValue::Number(Num::new(value, unit))
            }
            TokenKind::Function(name) => self.function(name)?,
            TokenKind::String(s) => TermValue::String(s),
            TokenKind::Ident(name) => TermValue::Ident(name),
            TokenKind::Url(url) => TermValue::Uri(url),
            TokenKind::UnicodeRange(range) => TermValue::UnicodeRange(range),
            TokenKind::Hash { value, .. } => TermValue::Hash(value),
            other => {
                return Err(ParseError::syntax(
                    format!("unexpected {other} in a value"),
                    token.location,
                ));
            }
        };
        if unary.is_some() && !matches!(value, TermValue::Number(_) | TermValue::Function { .. }) {
            return Err(ParseError::syntax(
                "a sign may only precede a number or function",
                token.location,
            ));
        }
        Ok(Term {
            value,
            unary,
            separator: None,
        })
    }

    /// `function : FUNCTION S* expr ')' S*`, with `rgb(...)` and quoted
    /// `url(...)` folded into their own term kinds.
    fn function(&mut self, name: String) -> PResult<TermValue> {
        let args = self.nested(|p| {
            p.skip_trivia_only();
            let args = p.expression()?;
            p.skip_trivia_only();
            p.expect(&TokenKind::RightParen, "')'")?;
            Ok(args)
        })?;

        if name.eq_ignore_ascii_case("url")
            && let [Term {
                value: TermValue::String(url),
                unary: None,
                ..
            }] = args.as_slice()
        {
            return Ok(TermValue::Uri(url.clone()));
        }
        if name.eq_ignore_ascii_case("rgb")
            && let Some(rgb) = fold_rgb(&args)
        {
            return Ok(TermValue::Rgb(rgb));
        }
        Ok(TermValue::Function { name, args })
    }

    // ---- helpers ---------------------------------------------------------

    /// Run a production, restoring the source and recording a diagnostic if
    /// it fails.
    pub(super) fn attempt<T>(
        &mut self,
        production: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<T> {
        let mark = self.source.mark();
        let result = production(self);
        if let Err(error) = &result {
            trace!(location = %mark.location(), %error, "backtracking");
            self.source.restore(mark);
            self.diagnostics
                .push(Diagnostic::from_error(error, mark.location()));
        }
        result
    }

    /// Run a production one nesting level deeper.
    pub(super) fn nested<T>(
        &mut self,
        production: impl FnOnce(&mut Self) -> PResult<T>,
    ) -> PResult<T> {
        if self.depth >= self.config.max_nesting_depth {
            return Err(ParseError::syntax(
                format!(
                    "nesting deeper than {} levels",
                    self.config.max_nesting_depth
                ),
                self.source.location(),
            ));
        }
        self.depth += 1;
        let result = production(self);
        self.depth -= 1;
        result
    }

    pub(super) fn peek_kind(&self) -> Option<&TokenKind> {
        self.source.peek().map(|token| &token.kind)
    }

    pub(super) fn bump(&mut self) -> Option<Token> {
        self.source.next_token()
    }

    /// Skip whitespace and comments, reporting whether any whitespace was seen.
    pub(super) fn skip_trivia(&mut self) -> bool {
        let mut saw_whitespace = false;
        while let Some(kind) = self.peek_kind()
            && kind.is_trivia()
        {
            saw_whitespace |= *kind == TokenKind::Whitespace;
            let _ = self.bump();
        }
        saw_whitespace
    }

    pub(super) fn skip_trivia_only(&mut self) {
        let _ = self.skip_trivia();
    }

    /// `[S|CDO|CDC]*`
    fn skip_s_cdo_cdc(&mut self) {
        while matches!(
            self.peek_kind(),
            Some(TokenKind::Whitespace | TokenKind::Comment(_) | TokenKind::Cdo | TokenKind::Cdc)
        ) {
            let _ = self.bump();
        }
    }

    pub(super) fn end_of_input(&self) -> ParseError {
        ParseError::EndOfInput {
            location: self.source.location(),
        }
    }

    fn error_here(&self, message: impl Into<String>) -> ParseError {
        ParseError::syntax(message, self.source.location())
    }

    pub(super) fn unexpected(&self, expected: &str) -> ParseError {
        match self.source.peek() {
            Some(token) => ParseError::syntax(
                format!("expected {expected}, found {}", token.kind),
                token.location,
            ),
            None => self.end_of_input(),
        }
    }

    pub(super) fn expect(&mut self, kind: &TokenKind, expected: &str) -> PResult<()> {
        if self.peek_kind() == Some(kind) {
            let _ = self.bump();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn ident(&mut self, expected: &str) -> PResult<String> {
        match self.peek_kind() {
            Some(TokenKind::Ident(name)) => {
                let name = name.clone();
                let _ = self.bump();
                Ok(name)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn string(&mut self, expected: &str) -> PResult<String> {
        match self.peek_kind() {
            Some(TokenKind::String(value)) => {
                let value = value.clone();
                let _ = self.bump();
                Ok(value)
            }
            _ => Err(self.unexpected(expected)),
        }
    }

    fn at_keyword(&mut self, keyword: &str) -> PResult<()> {
        match self.peek_kind() {
            Some(TokenKind::AtKeyword(name)) if name.eq_ignore_ascii_case(keyword) => {
                let _ = self.bump();
                Ok(())
            }
            _ => Err(self.unexpected(&format!("'@{keyword}'"))),
        }
    }
}

/// `rgb(r, g, b)` with numeric or percentage channels.
fn fold_rgb(args: &[Term]) -> Option<Rgb> {
    let [red, green, blue] = args else {
        return None;
    };
    if red.separator != Some(Operator::Comma) || green.separator != Some(Operator::Comma) {
        return None;
    }
    let channel = |term: &Term| {
        let num = term.as_number()?;
        let value = if term.unary == Some(UnaryOp::Minus) {
            -num.value
        } else {
            num.value
        };
        match num.unit {
            NumUnit::None => Some(Rgb::clamp_channel(value, false)),
            NumUnit::Percent => Some(Rgb::clamp_channel(value, true)),
            _ => None,
        }
    };
    Some(Rgb::new(channel(red)?, channel(green)?, channel(blue)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expression(css: &str) -> Vec<Term> {
        let mut parser = Parser::from_css(css);
        let terms = parser.parse_expression().unwrap();
        parser.expect_end().unwrap();
        terms
    }

    #[test]
    fn test_expression_operators() {
        let terms = expression("12px/1.5 Arial, \"Times New Roman\", serif");
        let separators: Vec<_> = terms.iter().map(|t| t.separator).collect();
        assert_eq!(
            separators,
            vec![
                Some(Operator::Slash),
                None,
                Some(Operator::Comma),
                Some(Operator::Comma),
                None
            ]
        );
        assert_eq!(terms[1].as_number(), Some(&Num::new(1.5, NumUnit::None)));
    }

    #[test]
    fn test_rgb_and_url_folding() {
        assert_eq!(
            expression("rgb(255, 50%, 0)")[0].value,
            TermValue::Rgb(Rgb::new(255, 128, 0))
        );
        assert_eq!(
            expression("url( 'a b.png' )")[0].value,
            TermValue::Uri("a b.png".into())
        );
        // Not three comma-separated channels: kept as a function.
        assert!(matches!(
            expression("rgb(1 2 3)")[0].value,
            TermValue::Function { .. }
        ));
    }

    #[test]
    fn test_unary_sign_on_function() {
        // "-foo" scans as a function name
        assert_eq!(expression("-foo(1)")[0].unary, None);

        let terms = expression("+foo(1)");
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].unary, Some(UnaryOp::Plus));

        assert!(Parser::from_css("+red").parse_expression().is_err());
    }

    #[test]
    fn test_nesting_depth_is_bounded() {
        let config = ParserConfig {
            max_nesting_depth: 3,
            ..ParserConfig::default()
        };
        let mut parser = Parser::with_config(TokenStream::new("f(f(f(f(1))))"), config);
        assert!(parser.parse_expression().is_err());

        let mut parser = Parser::from_css("f(f(f(f(1))))");
        assert!(parser.parse_expression().is_ok());
    }

    #[test]
    fn test_failed_production_restores_source() {
        let mut parser = Parser::from_css("color red");
        assert!(parser.parse_declaration().is_err());
        assert!(!parser.diagnostics().is_empty());
        assert_eq!(parser.parse_expression().unwrap().len(), 2);
        assert!(parser.diagnostics().is_empty());
    }

    #[test]
    fn test_each_entry_point_starts_with_no_diagnostics() {
        let mut parser = Parser::from_css("color red; margin: 0");
        let declarations = parser.parse_declaration_list().unwrap();
        assert_eq!(declarations.len(), 1);
        assert!(!parser.diagnostics().is_empty());

        assert!(parser.parse_declaration_list().unwrap().is_empty());
        assert!(parser.diagnostics().is_empty());
    }
}
