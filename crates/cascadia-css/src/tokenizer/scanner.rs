use super::token::{HashType, NumericType, SourceLocation, Token, TokenKind};

/// [CSS 2.1 § 4.1.1 Tokenization](https://www.w3.org/TR/CSS2/syndata.html#tokenization)
///
/// CSS2 lexical scanner. Consumption follows the CSS syntax tokenizer
/// algorithms (escapes, strings, numbers, `url(...)`), extended with the
/// CSS2 tokens `~=`, `|=`, `! important` and `U+` unicode ranges. Every
/// token records the [`SourceLocation`] of its first character.
#[derive(Debug)]
pub struct Tokenizer {
    /// The input being tokenized
    input: Vec<char>,
    /// UTF-8 byte offset of each character in `input`
    byte_offsets: Vec<usize>,
    /// Character index at which each line starts
    line_starts: Vec<usize>,
    /// Byte length of the source
    source_len: usize,
    /// Current position in `input`
    position: usize,
    /// Collected tokens
    tokens: Vec<Token>,
}

impl Tokenizer {
    /// Create a new tokenizer over `input`.
    #[must_use]
    pub fn new(input: &str) -> Self {
        let mut chars = Vec::with_capacity(input.len());
        let mut byte_offsets = Vec::with_capacity(input.len());
        for (offset, c) in input.char_indices() {
            chars.push(c);
            byte_offsets.push(offset);
        }

        let mut line_starts = vec![0];
        for (index, &c) in chars.iter().enumerate() {
            let ends_line = match c {
                '\n' | '\x0C' => true,
                '\r' => chars.get(index + 1) != Some(&'\n'),
                _ => false,
            };
            if ends_line {
                line_starts.push(index + 1);
            }
        }

        Self {
            input: chars,
            byte_offsets,
            line_starts,
            source_len: input.len(),
            position: 0,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole input.
    pub fn run(&mut self) {
        loop {
            let start = self.position;
            let Some(kind) = self.consume_token() else {
                break;
            };
            let location = self.location_at(start);
            self.tokens.push(Token::new(kind, location));
        }
    }

    /// Return the collected tokens.
    #[must_use]
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Return a reference to the collected tokens.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The location just past the last character of the input.
    #[must_use]
    pub fn end_location(&self) -> SourceLocation {
        self.location_at(self.input.len())
    }

    fn location_at(&self, position: usize) -> SourceLocation {
        let line_index = self
            .line_starts
            .partition_point(|&start| start <= position)
            .saturating_sub(1);
        let line_start = self.line_starts.get(line_index).copied().unwrap_or(0);
        SourceLocation {
            line: u32::try_from(line_index + 1).unwrap_or(u32::MAX),
            column: u32::try_from(position - line_start + 1).unwrap_or(u32::MAX),
            byte_offset: self
                .byte_offsets
                .get(position)
                .copied()
                .unwrap_or(self.source_len),
        }
    }

    /// Consume one token, or `None` at end of input.
    fn consume_token(&mut self) -> Option<TokenKind> {
        let c = self.consume()?;

        let kind = match c {
            c if is_whitespace(c) => {
                self.consume_whitespace();
                TokenKind::Whitespace
            }

            '"' | '\'' => self.consume_string_token(c),

            '#' => {
                // "If the next input code point is an ident code point or the next
                // two input code points are a valid escape..."
                if self.peek().is_some_and(is_ident_code_point)
                    || is_valid_escape(self.peek(), self.peek_at(1))
                {
                    let hash_type = if self.would_start_ident_sequence() {
                        HashType::Id
                    } else {
                        HashType::Unrestricted
                    };
                    let value = self.consume_ident_sequence();
                    TokenKind::Hash { value, hash_type }
                } else {
                    TokenKind::Delim('#')
                }
            }

            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,

            '+' | '.' => {
                if self.would_start_number_with(Some(c)) {
                    self.reconsume();
                    self.consume_numeric_token()
                } else {
                    TokenKind::Delim(c)
                }
            }

            ',' => TokenKind::Comma,

            '-' => {
                if self.would_start_number_with(Some('-')) {
                    self.reconsume();
                    self.consume_numeric_token()
                } else if self.peek() == Some('-') && self.peek_at(1) == Some('>') {
                    let _ = self.consume(); // -
                    let _ = self.consume(); // >
                    TokenKind::Cdc
                } else if starts_ident_sequence(Some('-'), self.peek(), self.peek_at(1)) {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    TokenKind::Delim('-')
                }
            }

            '/' if self.peek() == Some('*') => {
                let _ = self.consume(); // *
                self.consume_comment()
            }

            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,

            '<' => {
                if self.peek() == Some('!')
                    && self.peek_at(1) == Some('-')
                    && self.peek_at(2) == Some('-')
                {
                    let _ = self.consume(); // !
                    let _ = self.consume(); // -
                    let _ = self.consume(); // -
                    TokenKind::Cdo
                } else {
                    TokenKind::Delim('<')
                }
            }

            '@' => {
                if self.would_start_ident_sequence() {
                    TokenKind::AtKeyword(self.consume_ident_sequence())
                } else {
                    TokenKind::Delim('@')
                }
            }

            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,

            '\\' => {
                if is_valid_escape(Some('\\'), self.peek()) {
                    self.reconsume();
                    self.consume_ident_like_token()
                } else {
                    // Parse error: a lone backslash is a delimiter.
                    TokenKind::Delim('\\')
                }
            }

            '~' if self.peek() == Some('=') => {
                let _ = self.consume();
                TokenKind::Includes
            }

            '|' if self.peek() == Some('=') => {
                let _ = self.consume();
                TokenKind::DashMatch
            }

            '!' => self.consume_important(),

            'u' | 'U' if self.would_start_unicode_range() => self.consume_unicode_range(),

            c if c.is_ascii_digit() => {
                self.reconsume();
                self.consume_numeric_token()
            }

            c if is_ident_start_code_point(c) => {
                self.reconsume();
                self.consume_ident_like_token()
            }

            c => TokenKind::Delim(c),
        };
        Some(kind)
    }

    /// `/*` has been consumed; consume up to and including `*/`, or to EOF.
    fn consume_comment(&mut self) -> TokenKind {
        let mut text = String::new();
        loop {
            match self.consume() {
                Some('*') if self.peek() == Some('/') => {
                    let _ = self.consume(); // /
                    break;
                }
                Some(c) => text.push(c),
                None => break,
            }
        }
        TokenKind::Comment(text)
    }

    fn consume_whitespace(&mut self) {
        while self.peek().is_some_and(is_whitespace) {
            let _ = self.consume();
        }
    }

    /// `IMPORTANT_SYM: "!"({w}|{comment})*{I}{M}{P}{O}{R}{T}{A}{N}{T}`
    fn consume_important(&mut self) -> TokenKind {
        let start = self.position;
        loop {
            if self.peek().is_some_and(is_whitespace) {
                self.consume_whitespace();
            } else if self.peek() == Some('/') && self.peek_at(1) == Some('*') {
                let _ = self.consume();
                let _ = self.consume();
                let _ = self.consume_comment();
            } else {
                break;
            }
        }
        if self.would_start_ident_sequence()
            && self.consume_ident_sequence().eq_ignore_ascii_case("important")
        {
            return TokenKind::Important;
        }
        self.position = start;
        TokenKind::Delim('!')
    }

    fn would_start_unicode_range(&self) -> bool {
        self.peek() == Some('+')
            && self
                .peek_at(1)
                .is_some_and(|c| c.is_ascii_hexdigit() || c == '?')
    }

    /// `UNICODE-RANGE: U\+[0-9a-f?]{1,6}(-[0-9a-f]{1,6})?`
    fn consume_unicode_range(&mut self) -> TokenKind {
        let _ = self.consume(); // +
        let mut range = String::new();
        while range.len() < 6
            && self
                .peek()
                .is_some_and(|c| c.is_ascii_hexdigit() || c == '?')
        {
            self.consume_into(&mut range);
        }
        if !range.contains('?')
            && self.peek() == Some('-')
            && self.peek_at(1).is_some_and(|c| c.is_ascii_hexdigit())
        {
            self.consume_into(&mut range); // -
            let mut digits = 0;
            while digits < 6 && self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                self.consume_into(&mut range);
                digits += 1;
            }
        }
        TokenKind::UnicodeRange(range)
    }

    /// [§ 4.3.4 Consume a string token](https://www.w3.org/TR/css-syntax-3/#consume-string-token)
    fn consume_string_token(&mut self, ending_code_point: char) -> TokenKind {
        let mut value = String::new();

        loop {
            match self.consume() {
                Some(c) if c == ending_code_point => return TokenKind::String(value),

                // "EOF: This is a parse error. Return the <string-token>."
                None => return TokenKind::String(value),

                // "newline: This is a parse error. Reconsume the current input
                // code point, create a <bad-string-token>, and return it."
                Some('\n' | '\r' | '\x0C') => {
                    self.reconsume();
                    return TokenKind::BadString;
                }

                Some('\\') => match self.peek() {
                    None => {}
                    Some('\r') => {
                        let _ = self.consume();
                        if self.peek() == Some('\n') {
                            let _ = self.consume();
                        }
                    }
                    Some('\n' | '\x0C') => {
                        let _ = self.consume();
                    }
                    Some(_) => value.push(self.consume_escaped_code_point()),
                },

                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.5 Consume a numeric token](https://www.w3.org/TR/css-syntax-3/#consume-numeric-token)
    fn consume_numeric_token(&mut self) -> TokenKind {
        let (value, numeric_type) = self.consume_number();

        if self.would_start_ident_sequence() {
            let unit = self.consume_ident_sequence();
            TokenKind::Dimension {
                value,
                numeric_type,
                unit,
            }
        } else if self.peek() == Some('%') {
            let _ = self.consume();
            TokenKind::Percentage { value }
        } else {
            TokenKind::Number {
                value,
                numeric_type,
            }
        }
    }

    /// [§ 4.3.6 Consume an ident-like token](https://www.w3.org/TR/css-syntax-3/#consume-ident-like-token)
    fn consume_ident_like_token(&mut self) -> TokenKind {
        let string = self.consume_ident_sequence();

        if string.eq_ignore_ascii_case("url") && self.peek() == Some('(') {
            let _ = self.consume(); // (

            // A quoted url is a function token followed by a string token.
            let mut offset = 0;
            while self.peek_at(offset).is_some_and(is_whitespace) {
                offset += 1;
            }
            if matches!(self.peek_at(offset), Some('"' | '\'')) {
                return TokenKind::Function(string);
            }
            self.consume_url_token()
        } else if self.peek() == Some('(') {
            let _ = self.consume();
            TokenKind::Function(string)
        } else {
            TokenKind::Ident(string)
        }
    }

    /// [§ 4.3.7 Consume a url token](https://www.w3.org/TR/css-syntax-3/#consume-url-token)
    fn consume_url_token(&mut self) -> TokenKind {
        let mut value = String::new();
        self.consume_whitespace();

        loop {
            match self.consume() {
                Some(')') | None => return TokenKind::Url(value),

                Some(c) if is_whitespace(c) => {
                    self.consume_whitespace();
                    return match self.peek() {
                        Some(')') => {
                            let _ = self.consume();
                            TokenKind::Url(value)
                        }
                        None => TokenKind::Url(value),
                        Some(_) => {
                            self.consume_bad_url_remnants();
                            TokenKind::BadUrl
                        }
                    };
                }

                Some('"' | '\'' | '(') => {
                    self.consume_bad_url_remnants();
                    return TokenKind::BadUrl;
                }

                Some('\\') => {
                    if is_valid_escape(Some('\\'), self.peek()) {
                        value.push(self.consume_escaped_code_point());
                    } else {
                        self.consume_bad_url_remnants();
                        return TokenKind::BadUrl;
                    }
                }

                Some(c) => value.push(c),
            }
        }
    }

    /// [§ 4.3.14 Consume the remnants of a bad url](https://www.w3.org/TR/css-syntax-3/#consume-remnants-of-bad-url)
    fn consume_bad_url_remnants(&mut self) {
        loop {
            match self.consume() {
                Some(')') | None => return,
                Some('\\') if is_valid_escape(Some('\\'), self.peek()) => {
                    let _ = self.consume_escaped_code_point();
                }
                Some(_) => {}
            }
        }
    }

    /// [§ 4.3.11 Consume an ident sequence](https://www.w3.org/TR/css-syntax-3/#consume-name)
    fn consume_ident_sequence(&mut self) -> String {
        let mut result = String::new();

        loop {
            match self.consume() {
                Some(c) if is_ident_code_point(c) => result.push(c),
                Some('\\') if is_valid_escape(Some('\\'), self.peek()) => {
                    result.push(self.consume_escaped_code_point());
                }
                Some(_) => {
                    self.reconsume();
                    return result;
                }
                None => return result,
            }
        }
    }

    /// [§ 4.3.12 Consume a number](https://www.w3.org/TR/css-syntax-3/#consume-number)
    fn consume_number(&mut self) -> (f64, NumericType) {
        let mut numeric_type = NumericType::Integer;
        let mut repr = String::new();

        if matches!(self.peek(), Some('+' | '-')) {
            self.consume_into(&mut repr);
        }
        self.consume_digits(&mut repr);

        if self.peek() == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()) {
            self.consume_into(&mut repr); // .
            self.consume_digits(&mut repr);
            numeric_type = NumericType::Number;
        }

        if matches!(self.peek(), Some('e' | 'E')) {
            let has_sign = matches!(self.peek_at(1), Some('+' | '-'));
            let digit_pos = if has_sign { 2 } else { 1 };

            if self.peek_at(digit_pos).is_some_and(|c| c.is_ascii_digit()) {
                self.consume_into(&mut repr); // e or E
                if has_sign {
                    self.consume_into(&mut repr);
                }
                self.consume_digits(&mut repr);
                numeric_type = NumericType::Number;
            }
        }

        (repr.parse().unwrap_or(0.0), numeric_type)
    }

    fn consume_digits(&mut self, repr: &mut String) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.consume_into(repr);
        }
    }

    /// [§ 4.3.13 Consume an escaped code point](https://www.w3.org/TR/css-syntax-3/#consume-escaped-code-point)
    fn consume_escaped_code_point(&mut self) -> char {
        match self.consume() {
            Some(c) if c.is_ascii_hexdigit() => {
                let mut hex = String::from(c);
                // "Consume as many hex digits as possible, but no more than 5."
                for _ in 0..5 {
                    if self.peek().is_some_and(|c| c.is_ascii_hexdigit()) {
                        self.consume_into(&mut hex);
                    } else {
                        break;
                    }
                }
                if self.peek() == Some('\r') && self.peek_at(1) == Some('\n') {
                    let _ = self.consume();
                }
                if self.peek().is_some_and(is_whitespace) {
                    let _ = self.consume();
                }
                u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|&cp| cp != 0)
                    .and_then(char::from_u32)
                    .unwrap_or('\u{FFFD}')
            }
            None => '\u{FFFD}',
            Some(c) => c,
        }
    }

    /// [§ 4.3.9 Check if three code points would start an ident sequence](https://www.w3.org/TR/css-syntax-3/#would-start-an-identifier)
    fn would_start_ident_sequence(&self) -> bool {
        starts_ident_sequence(self.peek(), self.peek_at(1), self.peek_at(2))
    }

    /// [§ 4.3.10 Check if three code points would start a number](https://www.w3.org/TR/css-syntax-3/#starts-with-a-number)
    ///
    /// `first` is the code point that was just consumed.
    fn would_start_number_with(&self, first: Option<char>) -> bool {
        match first {
            Some('+' | '-') => {
                let second = self.peek();
                second.is_some_and(|c| c.is_ascii_digit())
                    || (second == Some('.') && self.peek_at(1).is_some_and(|c| c.is_ascii_digit()))
            }
            Some('.') => self.peek().is_some_and(|c| c.is_ascii_digit()),
            Some(c) => c.is_ascii_digit(),
            None => false,
        }
    }

    fn consume(&mut self) -> Option<char> {
        let c = self.input.get(self.position).copied()?;
        self.position += 1;
        Some(c)
    }

    fn consume_into(&mut self, buffer: &mut String) {
        if let Some(c) = self.consume() {
            buffer.push(c);
        }
    }

    fn reconsume(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    fn peek(&self) -> Option<char> {
        self.peek_at(0)
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }
}

/// Tokenize `input` in one call.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(input);
    tokenizer.run();
    tokenizer.into_tokens()
}

/// Whether three code points would start an ident sequence.
fn starts_ident_sequence(first: Option<char>, second: Option<char>, third: Option<char>) -> bool {
    match first {
        Some('-') => {
            second.is_some_and(is_ident_start_code_point)
                || second == Some('-')
                || is_valid_escape(second, third)
        }
        Some(c) if is_ident_start_code_point(c) => true,
        Some('\\') => is_valid_escape(first, second),
        _ => false,
    }
}

/// [§ 4.3.8 Check if two code points are a valid escape](https://www.w3.org/TR/css-syntax-3/#starts-with-a-valid-escape)
fn is_valid_escape(first: Option<char>, second: Option<char>) -> bool {
    first == Some('\\') && !matches!(second, Some('\n' | '\r' | '\x0C'))
}

fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ' | '\r' | '\x0C')
}

/// "A letter, a non-ASCII code point, or U+005F LOW LINE (_)."
fn is_ident_start_code_point(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

/// "An ident-start code point, a digit, or U+002D HYPHEN-MINUS (-)."
pub(crate) fn is_ident_code_point(c: char) -> bool {
    is_ident_start_code_point(c) || c.is_ascii_digit() || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        tokenize(input).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_css2_specific_tokens() {
        assert_eq!(
            kinds("~=|=! important"),
            vec![TokenKind::Includes, TokenKind::DashMatch, TokenKind::Important]
        );
        assert_eq!(kinds("!/* x */IMPORTANT"), vec![TokenKind::Important]);
        assert_eq!(
            kinds("!foo"),
            vec![TokenKind::Delim('!'), TokenKind::Ident("foo".into())]
        );
    }

    #[test]
    fn test_unicode_range() {
        assert_eq!(kinds("U+0-7F"), vec![TokenKind::UnicodeRange("0-7F".into())]);
        assert_eq!(kinds("u+4??"), vec![TokenKind::UnicodeRange("4??".into())]);
        assert_eq!(kinds("url"), vec![TokenKind::Ident("url".into())]);
    }

    #[test]
    fn test_locations_track_lines_and_bytes() {
        let tokens = tokenize("a\n  é b");
        let locations: Vec<_> = tokens.iter().map(|t| t.location).collect();
        assert_eq!(locations[0], SourceLocation::START);
        assert_eq!(
            locations[2],
            SourceLocation {
                line: 2,
                column: 3,
                byte_offset: 4
            }
        );
        // "é" is two bytes wide
        assert_eq!(locations[4].byte_offset, 7);
        assert_eq!(locations[4].column, 5);
    }

    #[test]
    fn test_comment_is_a_token() {
        assert_eq!(
            kinds("a/* c */b"),
            vec![
                TokenKind::Ident("a".into()),
                TokenKind::Comment(" c ".into()),
                TokenKind::Ident("b".into()),
            ]
        );
    }

    #[test]
    fn test_number_with_sign_and_exponent() {
        assert_eq!(
            kinds("-1.5e2px"),
            vec![TokenKind::Dimension {
                value: -150.0,
                numeric_type: NumericType::Number,
                unit: "px".into()
            }]
        );
    }
}
