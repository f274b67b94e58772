//! Integration tests for the CSS2 tokenizer and token stream.

use cascadia_css::error::ErrorStatus;
use cascadia_css::tokenizer::{
    HashType, NumericType, SourceLocation, Token, TokenKind, TokenSource, TokenStream, tokenize,
};

fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input).into_iter().map(|t| t.kind).collect()
}

fn ident(s: &str) -> TokenKind {
    TokenKind::Ident(s.to_string())
}

#[test]
fn test_ruleset_tokens() {
    assert_eq!(
        kinds("h1{color:red;}"),
        vec![
            ident("h1"),
            TokenKind::LeftBrace,
            ident("color"),
            TokenKind::Colon,
            ident("red"),
            TokenKind::Semicolon,
            TokenKind::RightBrace,
        ]
    );
}

#[test]
fn test_at_keyword_and_function() {
    assert_eq!(
        kinds("@media rgb(1,2)"),
        vec![
            TokenKind::AtKeyword("media".into()),
            TokenKind::Whitespace,
            TokenKind::Function("rgb".into()),
            TokenKind::Number {
                value: 1.0,
                numeric_type: NumericType::Integer
            },
            TokenKind::Comma,
            TokenKind::Number {
                value: 2.0,
                numeric_type: NumericType::Integer
            },
            TokenKind::RightParen,
        ]
    );
}

#[test]
fn test_url_forms() {
    assert_eq!(kinds("url( x.png )"), vec![TokenKind::Url("x.png".into())]);
    assert_eq!(kinds("URL(a)"), vec![TokenKind::Url("a".into())]);
    assert_eq!(
        kinds(r#"url("a.css")"#),
        vec![
            TokenKind::Function("url".into()),
            TokenKind::String("a.css".into()),
            TokenKind::RightParen,
        ]
    );
    assert_eq!(kinds("url(a b) c"), vec![TokenKind::BadUrl, TokenKind::Whitespace, ident("c")]);
}

#[test]
fn test_strings_and_escapes() {
    assert_eq!(kinds(r#""a\"b""#), vec![TokenKind::String("a\"b".into())]);
    assert_eq!(kinds("'single'"), vec![TokenKind::String("single".into())]);
    assert_eq!(kinds(r"\41 bc"), vec![ident("Abc")]);
    assert_eq!(
        kinds("\"open\nx"),
        vec![TokenKind::BadString, TokenKind::Whitespace, ident("x")]
    );
    // A string left open at end of input still yields a string.
    assert_eq!(kinds("'tail"), vec![TokenKind::String("tail".into())]);
}

#[test]
fn test_hash_types() {
    assert_eq!(
        kinds("#main #123"),
        vec![
            TokenKind::Hash {
                value: "main".into(),
                hash_type: HashType::Id
            },
            TokenKind::Whitespace,
            TokenKind::Hash {
                value: "123".into(),
                hash_type: HashType::Unrestricted
            },
        ]
    );
    assert_eq!(kinds("# x")[0], TokenKind::Delim('#'));
}

#[test]
fn test_numeric_tokens() {
    assert_eq!(kinds("50%"), vec![TokenKind::Percentage { value: 50.0 }]);
    assert_eq!(
        kinds(".5em"),
        vec![TokenKind::Dimension {
            value: 0.5,
            numeric_type: NumericType::Number,
            unit: "em".into()
        }]
    );
    assert_eq!(
        kinds("+3"),
        vec![TokenKind::Number {
            value: 3.0,
            numeric_type: NumericType::Integer
        }]
    );
}

#[test]
fn test_cdo_cdc_and_delims() {
    assert_eq!(
        kinds("<!-- a -->"),
        vec![
            TokenKind::Cdo,
            TokenKind::Whitespace,
            ident("a"),
            TokenKind::Whitespace,
            TokenKind::Cdc,
        ]
    );
    assert_eq!(
        kinds("a>b+c"),
        vec![
            ident("a"),
            TokenKind::Delim('>'),
            ident("b"),
            TokenKind::Delim('+'),
            ident("c"),
        ]
    );
    assert_eq!(
        kinds("[lang|=en]"),
        vec![
            TokenKind::LeftBracket,
            ident("lang"),
            TokenKind::DashMatch,
            ident("en"),
            TokenKind::RightBracket,
        ]
    );
}

#[test]
fn test_token_locations() {
    let tokens = tokenize("p {\n  color: red\n}");
    let brace = tokens.last().unwrap();
    assert_eq!(brace.kind, TokenKind::RightBrace);
    assert_eq!(brace.location.line, 3);
    assert_eq!(brace.location.column, 1);

    let color = tokens
        .iter()
        .find(|t| t.kind == ident("color"))
        .unwrap();
    assert_eq!(
        color.location,
        SourceLocation {
            line: 2,
            column: 3,
            byte_offset: 6
        }
    );
}

#[test]
fn test_stream_over_explicit_tokens() {
    let tokens = vec![
        Token::new(ident("a"), SourceLocation::START),
        Token::new(TokenKind::Semicolon, SourceLocation::START),
    ];
    let end = SourceLocation {
        line: 1,
        column: 3,
        byte_offset: 2,
    };
    let mut stream = TokenStream::from_tokens(tokens, end);
    assert_eq!(stream.remaining(), 2);
    assert_eq!(stream.peek().map(|t| &t.kind), Some(&ident("a")));

    let first = stream.next_token().unwrap();
    let second = stream.next_token().unwrap();
    // Only the token just read may go back.
    let err = stream.push_back(first).unwrap_err();
    assert_eq!(err.status(), ErrorStatus::BadParameter);
    stream.push_back(second).unwrap();
    assert_eq!(stream.remaining(), 1);

    let _ = stream.next_token();
    assert!(stream.next_token().is_none());
    assert_eq!(stream.location(), end);
}

#[test]
fn test_mark_restore_rewinds() {
    let mut stream = TokenStream::new("a { b }");
    let mark = stream.mark();
    assert_eq!(mark.index(), 0);
    while stream.next_token().is_some() {}
    assert_eq!(stream.remaining(), 0);

    stream.restore(mark);
    assert_eq!(stream.next_token().map(|t| t.kind), Some(ident("a")));
}
