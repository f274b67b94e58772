//! CSS2 token types per [CSS 2.1 § 4.1.1 Tokenization](https://www.w3.org/TR/CSS2/syndata.html#tokenization).
//!
//! "All levels of CSS share the same core syntax." The token set below is
//! the CSS2 lexical scanner's: the CSS syntax tokens plus the CSS2-specific
//! `INCLUDES`, `DASHMATCH`, `IMPORTANT_SYM` and `UNICODE-RANGE` tokens.
//! Comments are kept as tokens so the parser can skip them explicitly.

use core::fmt;

/// Position of a token in the source text.
///
/// Lines and columns are 1-based and counted in characters; `byte_offset`
/// is the 0-based UTF-8 offset of the token's first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct SourceLocation {
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number.
    pub column: u32,
    /// 0-based byte offset into the source.
    pub byte_offset: usize,
}

impl SourceLocation {
    /// The first character of a source.
    pub const START: Self = Self {
        line: 1,
        column: 1,
        byte_offset: 0,
    };
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// "A `<hash-token>` with the type flag set to 'id'... or 'unrestricted'."
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashType {
    /// The value is a valid identifier (usable as an ID selector).
    Id,
    /// The value is not a valid identifier (`#123`).
    Unrestricted,
}

/// Whether a numeric token was written as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericType {
    /// No decimal point or exponent.
    Integer,
    /// Has a decimal point or exponent.
    Number,
}

/// A CSS2 token without its position.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// `IDENT`
    Ident(String),
    /// `FUNCTION`: an identifier immediately followed by `(`.
    Function(String),
    /// `ATKEYWORD`: `@` followed by an identifier.
    AtKeyword(String),
    /// `HASH`: `#` followed by a name.
    Hash {
        /// The name after `#`.
        value: String,
        /// Whether the name is a valid identifier.
        hash_type: HashType,
    },
    /// `STRING`, with quotes removed and escapes resolved.
    String(String),
    /// An unterminated string (newline before the closing quote).
    BadString,
    /// `URI`: the contents of an unquoted `url(...)`.
    Url(String),
    /// A malformed `url(...)`.
    BadUrl,
    /// Any other single character.
    Delim(char),
    /// `NUMBER`
    Number {
        /// The numeric value, sign included.
        value: f64,
        /// Integer or number.
        numeric_type: NumericType,
    },
    /// `PERCENTAGE`
    Percentage {
        /// The numeric value before `%`.
        value: f64,
    },
    /// `DIMENSION` (covers CSS2's `LENGTH`, `EMS`, `EXS`, `ANGLE`, `TIME`, `FREQ`).
    Dimension {
        /// The numeric value, sign included.
        value: f64,
        /// Integer or number.
        numeric_type: NumericType,
        /// The unit identifier as written.
        unit: String,
    },
    /// `UNICODE-RANGE`, e.g. `U+0-7F` (stored without the `U+` prefix).
    UnicodeRange(String),
    /// `~=`
    Includes,
    /// `|=`
    DashMatch,
    /// `IMPORTANT_SYM`: `!` followed by optional whitespace/comments and `important`.
    Important,
    /// `S`: one or more whitespace characters.
    Whitespace,
    /// `/* ... */`, with the delimiters removed.
    Comment(String),
    /// `<!--`
    Cdo,
    /// `-->`
    Cdc,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
}

impl TokenKind {
    /// Whitespace and comments, which separate tokens but carry no meaning
    /// in most productions.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(self, Self::Whitespace | Self::Comment(_))
    }

    /// Whether this is a `Delim` of the given character.
    #[must_use]
    pub fn is_delim(&self, c: char) -> bool {
        matches!(self, Self::Delim(d) if *d == c)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ident(s) => write!(f, "ident '{s}'"),
            Self::Function(s) => write!(f, "function '{s}('"),
            Self::AtKeyword(s) => write!(f, "'@{s}'"),
            Self::Hash { value, .. } => write!(f, "'#{value}'"),
            Self::String(s) => write!(f, "string \"{s}\""),
            Self::BadString => write!(f, "unterminated string"),
            Self::Url(s) => write!(f, "'url({s})'"),
            Self::BadUrl => write!(f, "malformed url"),
            Self::Delim(c) => write!(f, "'{c}'"),
            Self::Number { value, .. } => write!(f, "number {value}"),
            Self::Percentage { value } => write!(f, "percentage {value}%"),
            Self::Dimension { value, unit, .. } => write!(f, "dimension {value}{unit}"),
            Self::UnicodeRange(s) => write!(f, "'U+{s}'"),
            Self::Includes => write!(f, "'~='"),
            Self::DashMatch => write!(f, "'|='"),
            Self::Important => write!(f, "'!important'"),
            Self::Whitespace => write!(f, "whitespace"),
            Self::Comment(_) => write!(f, "comment"),
            Self::Cdo => write!(f, "'<!--'"),
            Self::Cdc => write!(f, "'-->'"),
            Self::Colon => write!(f, "':'"),
            Self::Semicolon => write!(f, "';'"),
            Self::Comma => write!(f, "','"),
            Self::LeftBracket => write!(f, "'['"),
            Self::RightBracket => write!(f, "']'"),
            Self::LeftParen => write!(f, "'('"),
            Self::RightParen => write!(f, "')'"),
            Self::LeftBrace => write!(f, "'{{'"),
            Self::RightBrace => write!(f, "'}}'"),
        }
    }
}

/// A token together with where it starts in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was scanned.
    pub kind: TokenKind,
    /// Where it starts.
    pub location: SourceLocation,
}

impl Token {
    /// Pair a kind with its location.
    #[must_use]
    pub const fn new(kind: TokenKind, location: SourceLocation) -> Self {
        Self { kind, location }
    }
}
