//! The token source the parser reads from.

use super::scanner::Tokenizer;
use super::token::{SourceLocation, Token};
use crate::error::ParseError;

/// A saved position in a [`TokenSource`].
///
/// Marks are cheap copies; restoring one rewinds the source so that the
/// next token read is the one that was next when the mark was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    index: usize,
    location: SourceLocation,
}

impl Mark {
    /// Build a mark for a source whose cursor is a plain index.
    #[must_use]
    pub const fn new(index: usize, location: SourceLocation) -> Self {
        Self { index, location }
    }

    /// The cursor index the mark was taken at.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Location of the next token when the mark was taken.
    #[must_use]
    pub const fn location(&self) -> SourceLocation {
        self.location
    }
}

/// Where the parser gets its tokens from.
///
/// Besides sequential reads, a source must support backtracking: the parser
/// takes a [`Mark`] before every production and restores it when the
/// production fails.
pub trait TokenSource {
    /// Read the next token, or `None` at end of input.
    fn next_token(&mut self) -> Option<Token>;

    /// Look at the next token without consuming it.
    fn peek(&self) -> Option<&Token>;

    /// Un-read the token most recently returned by
    /// [`next_token`](Self::next_token).
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::BadParameter`] if a token was already pushed
    /// back since the last read, or if `token` is not the token just read.
    fn push_back(&mut self, token: Token) -> Result<(), ParseError>;

    /// Save the current position.
    fn mark(&self) -> Mark;

    /// Return to a saved position.
    fn restore(&mut self, mark: Mark);

    /// Location of the next token (or of the end of input).
    fn location(&self) -> SourceLocation;
}

/// A [`TokenSource`] over tokens scanned up front by a [`Tokenizer`].
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
    end: SourceLocation,
    pushed_back: bool,
}

impl TokenStream {
    /// Tokenize `input` and wrap the result.
    #[must_use]
    pub fn new(input: &str) -> Self {
        let mut tokenizer = Tokenizer::new(input);
        tokenizer.run();
        let end = tokenizer.end_location();
        Self::from_tokens(tokenizer.into_tokens(), end)
    }

    /// Wrap already scanned tokens; `end` is reported once they run out.
    #[must_use]
    pub const fn from_tokens(tokens: Vec<Token>, end: SourceLocation) -> Self {
        Self {
            tokens,
            cursor: 0,
            end,
            pushed_back: false,
        }
    }

    /// Number of tokens not yet read.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }
}

impl TokenSource for TokenStream {
    fn next_token(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.cursor).cloned()?;
        self.cursor += 1;
        self.pushed_back = false;
        Some(token)
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    fn push_back(&mut self, token: Token) -> Result<(), ParseError> {
        if self.pushed_back {
            return Err(ParseError::BadParameter(
                "only one token can be pushed back between reads".to_string(),
            ));
        }
        let previous = self
            .cursor
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index));
        if previous != Some(&token) {
            return Err(ParseError::BadParameter(
                "pushed back token is not the token just read".to_string(),
            ));
        }
        self.cursor -= 1;
        self.pushed_back = true;
        Ok(())
    }

    fn mark(&self) -> Mark {
        Mark::new(self.cursor, self.location())
    }

    fn restore(&mut self, mark: Mark) {
        self.cursor = mark.index().min(self.tokens.len());
        self.pushed_back = false;
    }

    fn location(&self) -> SourceLocation {
        self.peek().map_or(self.end, |token| token.location)
    }
}
