//! CSS2 tokenizer and the token source interface the parser reads from.

/// CSS2 lexical scanner.
pub mod scanner;
/// The [`TokenSource`] trait, [`Mark`] and the vector-backed [`TokenStream`].
pub mod stream;
/// CSS2 token types.
pub mod token;

pub use scanner::{Tokenizer, tokenize};
pub use stream::{Mark, TokenSource, TokenStream};
pub use token::{HashType, NumericType, SourceLocation, Token, TokenKind};
