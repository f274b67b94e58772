//! [CSS 2.1 § 4.1.1 Tokenization and § 4.2 Rules for handling parsing errors](https://www.w3.org/TR/CSS2/syndata.html#syntax)
//!
//! The forward-compatible core grammar. It recognizes the shape of any
//! statement a later level of CSS could introduce, so that a statement the
//! CSS2 productions reject can be skipped as a whole. Nothing here produces
//! events. A block or bracket still open at the end of the input is closed
//! implicitly: "User agents must close all open constructs (for example:
//! blocks, parentheses, brackets, rules, strings, and comments) at the end
//! of the style sheet."

use super::css2::{PResult, Parser};
use crate::error::ParseError;
use crate::tokenizer::{TokenKind, TokenSource};

impl<S: TokenSource> Parser<S> {
    /// `statement : ruleset | at-rule`
    pub(super) fn core_statement(&mut self) -> PResult<()> {
        match self.peek_kind() {
            None => Err(self.end_of_input()),
            Some(TokenKind::AtKeyword(_)) => self.core_at_rule(),
            Some(_) => self.core_ruleset(),
        }
    }

    /// `at-rule : ATKEYWORD S* any* [ block | ';' S* ]`
    fn core_at_rule(&mut self) -> PResult<()> {
        let _ = self.bump();
        self.skip_trivia_only();
        loop {
            match self.peek_kind() {
                None => return Ok(()),
                Some(TokenKind::LeftBrace) => return self.core_block(),
                Some(TokenKind::Semicolon) => {
                    let _ = self.bump();
                    return Ok(());
                }
                Some(_) => self.core_any()?,
            }
        }
    }

    /// `ruleset : selector? '{' S* declaration? [ ';' S* declaration? ]* '}' S*`
    ///
    /// The selector is any run of `any`; the declarations are skipped as a
    /// block.
    fn core_ruleset(&mut self) -> PResult<()> {
        loop {
            match self.peek_kind() {
                None => return Ok(()),
                Some(TokenKind::LeftBrace) => return self.core_block(),
                Some(_) => self.core_any()?,
            }
        }
    }

    /// `block : '{' S* [ any | block | ATKEYWORD S* | ';' S* ]* '}' S*`
    fn core_block(&mut self) -> PResult<()> {
        self.expect(&TokenKind::LeftBrace, "'{'")?;
        self.nested(|p| p.core_contents(&TokenKind::RightBrace))
    }

    /// Block or bracket contents up to and including `closer`.
    fn core_contents(&mut self, closer: &TokenKind) -> PResult<()> {
        loop {
            match self.peek_kind() {
                None => return Ok(()),
                Some(kind) if kind == closer => {
                    let _ = self.bump();
                    return Ok(());
                }
                Some(TokenKind::LeftBrace) => self.core_block()?,
                Some(
                    TokenKind::AtKeyword(_)
                    | TokenKind::Semicolon
                    | TokenKind::Cdo
                    | TokenKind::Cdc,
                ) => {
                    let _ = self.bump();
                }
                Some(_) => self.core_any()?,
            }
        }
    }

    /// `any : [ IDENT | NUMBER | PERCENTAGE | DIMENSION | STRING | DELIM | URI
    ///   | HASH | UNICODE-RANGE | INCLUDES | DASHMATCH | ':'
    ///   | FUNCTION S* [any|unused]* ')' | '(' S* [any|unused]* ')'
    ///   | '[' S* [any|unused]* ']' ] S*`
    fn core_any(&mut self) -> PResult<()> {
        let Some(token) = self.bump() else {
            return Err(self.end_of_input());
        };
        match token.kind {
            TokenKind::Function(_) | TokenKind::LeftParen => {
                self.nested(|p| p.core_contents(&TokenKind::RightParen))?;
            }
            TokenKind::LeftBracket => {
                self.nested(|p| p.core_contents(&TokenKind::RightBracket))?;
            }
            TokenKind::Ident(_)
            | TokenKind::Number { .. }
            | TokenKind::Percentage { .. }
            | TokenKind::Dimension { .. }
            | TokenKind::String(_)
            | TokenKind::BadString
            | TokenKind::Delim(_)
            | TokenKind::Comma
            | TokenKind::Important
            | TokenKind::Url(_)
            | TokenKind::BadUrl
            | TokenKind::Hash { .. }
            | TokenKind::UnicodeRange(_)
            | TokenKind::Includes
            | TokenKind::DashMatch
            | TokenKind::Colon
            | TokenKind::Whitespace
            | TokenKind::Comment(_) => {}
            other => {
                return Err(ParseError::syntax(
                    format!("unexpected {other}"),
                    token.location,
                ));
            }
        }
        self.skip_trivia_only();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skip(css: &str) -> (PResult<()>, bool) {
        let mut parser = Parser::from_css(css);
        let result = parser.core_statement();
        let at_end = parser.expect_end().is_ok();
        (result, at_end)
    }

    #[test]
    fn test_skips_unknown_at_rules() {
        assert!(matches!(skip("@foo bar;"), (Ok(()), true)));
        assert!(matches!(
            skip("@foo bar { a { b: c } [x] (y) };"),
            (Ok(()), false)
        ));
        assert!(matches!(skip("@foo { a { b: c } [x] (y) }"), (Ok(()), true)));
    }

    #[test]
    fn test_skips_rulesets_with_odd_selectors() {
        assert!(matches!(skip("a::b ~ c { x: y }"), (Ok(()), true)));
        assert!(matches!(skip("f(a, b) { }"), (Ok(()), true)));
    }

    #[test]
    fn test_closes_constructs_at_end_of_input() {
        assert!(matches!(skip("@media x { a { b: c"), (Ok(()), true)));
        assert!(matches!(skip("a [b"), (Ok(()), true)));
    }

    #[test]
    fn test_rejects_stray_closers() {
        assert!(skip("} a {}").0.is_err());
        assert!(skip("a ] {}").0.is_err());
        assert!(skip("a ; b {}").0.is_err());
    }
}
