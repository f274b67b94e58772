//! Declaration values per [CSS 2.1 § 4.1.1](https://www.w3.org/TR/CSS2/syndata.html#tokenization)
//! (`expr`, `term`, `operator`, `unary_operator`).
//!
//! An expression is a `Vec<Term>`. Each term records the operator that
//! separates it from the *next* term, so `1px/2px, 3px` is three terms whose
//! separators are `Slash`, `Comma` and `None`.

use core::fmt;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::color::Rgb;
use crate::tokenizer::scanner::is_ident_code_point;

/// `unary_operator : '-' | PLUS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    /// `+`
    Plus,
    /// `-`
    Minus,
}

/// `operator : '/' S* | COMMA S* | /* empty */`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// `,`
    Comma,
    /// `/`
    Slash,
}

/// Units of numeric terms. Unit names compare case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString, Serialize, Deserialize)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum NumUnit {
    /// A plain number.
    #[strum(serialize = "")]
    None,
    /// `%`
    #[strum(serialize = "%")]
    Percent,
    /// `em`
    Em,
    /// `ex`
    Ex,
    /// `px`
    Px,
    /// `cm`
    Cm,
    /// `mm`
    Mm,
    /// `in`
    In,
    /// `pt`
    Pt,
    /// `pc`
    Pc,
    /// `deg`
    Deg,
    /// `rad`
    Rad,
    /// `grad`
    Grad,
    /// `ms`
    Ms,
    /// `s`
    S,
    /// `Hz`
    Hz,
    /// `kHz`
    #[strum(serialize = "khz")]
    KHz,
    /// A dimension with a unit CSS2 does not define.
    #[strum(default)]
    Other(String),
}

impl NumUnit {
    /// Whether this is a length unit (`em`, `ex` and the absolute/pixel units).
    #[must_use]
    pub const fn is_length(&self) -> bool {
        matches!(
            self,
            Self::Em | Self::Ex | Self::Px | Self::Cm | Self::Mm | Self::In | Self::Pt | Self::Pc
        )
    }

    /// The unit as written in CSS.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::None => "",
            Self::Percent => "%",
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Px => "px",
            Self::Cm => "cm",
            Self::Mm => "mm",
            Self::In => "in",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Deg => "deg",
            Self::Rad => "rad",
            Self::Grad => "grad",
            Self::Ms => "ms",
            Self::S => "s",
            Self::Hz => "Hz",
            Self::KHz => "kHz",
            Self::Other(unit) => unit,
        }
    }
}

impl fmt::Display for NumUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A number with its unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Num {
    /// The value as written, sign included.
    pub value: f64,
    /// The unit.
    pub unit: NumUnit,
}

impl Num {
    /// A number with a unit.
    #[must_use]
    pub const fn new(value: f64, unit: NumUnit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_number(f, self.value)?;
        match &self.unit {
            NumUnit::Other(unit) => write_unit(f, unit),
            unit => f.write_str(unit.as_str()),
        }
    }
}

/// The value carried by a [`Term`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TermValue {
    /// `NUMBER`, `PERCENTAGE` or a dimension.
    Number(Num),
    /// `FUNCTION S* expr ')'`
    Function {
        /// The function name.
        name: String,
        /// The argument expression.
        args: Vec<Term>,
    },
    /// `STRING`
    String(String),
    /// `IDENT`
    Ident(String),
    /// `URI`
    Uri(String),
    /// `rgb(r, g, b)` folded into a color.
    Rgb(Rgb),
    /// `UNICODE-RANGE`, without the `U+` prefix.
    UnicodeRange(String),
    /// `hexcolor`: the name after `#`.
    Hash(String),
}

/// One `term` of an expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    /// The value.
    pub value: TermValue,
    /// An explicit sign written before a function term. Signs of numeric
    /// literals are part of [`Num::value`].
    pub unary: Option<UnaryOp>,
    /// The operator between this term and the next one.
    pub separator: Option<Operator>,
}

impl Term {
    /// A term with no sign and no separator.
    #[must_use]
    pub const fn new(value: TermValue) -> Self {
        Self {
            value,
            unary: None,
            separator: None,
        }
    }

    /// An identifier term.
    #[must_use]
    pub fn ident(name: &str) -> Self {
        Self::new(TermValue::Ident(name.to_string()))
    }

    /// A numeric term.
    #[must_use]
    pub const fn number(value: f64, unit: NumUnit) -> Self {
        Self::new(TermValue::Number(Num::new(value, unit)))
    }

    /// Set the separator to the next term.
    #[must_use]
    pub const fn with_separator(mut self, separator: Operator) -> Self {
        self.separator = Some(separator);
        self
    }

    /// The identifier, if this is one.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match &self.value {
            TermValue::Ident(name) => Some(name),
            _ => None,
        }
    }

    /// Whether this is the identifier `keyword` (case-insensitive).
    #[must_use]
    pub fn is_ident(&self, keyword: &str) -> bool {
        self.as_ident()
            .is_some_and(|name| name.eq_ignore_ascii_case(keyword))
    }

    /// The number, if this is a numeric term.
    #[must_use]
    pub const fn as_number(&self) -> Option<&Num> {
        match &self.value {
            TermValue::Number(num) => Some(num),
            _ => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unary {
            Some(UnaryOp::Plus) => f.write_str("+")?,
            Some(UnaryOp::Minus) => f.write_str("-")?,
            None => {}
        }
        match &self.value {
            TermValue::Number(num) => write!(f, "{num}"),
            TermValue::Function { name, args } => {
                write_ident(f, name)?;
                f.write_str("(")?;
                write_expression(f, args)?;
                f.write_str(")")
            }
            TermValue::String(s) => write_string(f, s),
            TermValue::Ident(name) => write_ident(f, name),
            TermValue::Uri(uri) => {
                f.write_str("url(")?;
                write_string(f, uri)?;
                f.write_str(")")
            }
            TermValue::Rgb(rgb) => write!(f, "{rgb}"),
            TermValue::UnicodeRange(range) => write!(f, "U+{range}"),
            TermValue::Hash(hash) => {
                f.write_str("#")?;
                write_name(f, hash)
            }
        }
    }
}

/// Serialize an expression, rendering each term's separator.
///
/// # Errors
///
/// Propagates formatter errors.
pub fn write_expression(f: &mut fmt::Formatter<'_>, terms: &[Term]) -> fmt::Result {
    for (index, term) in terms.iter().enumerate() {
        write!(f, "{term}")?;
        if index + 1 < terms.len() {
            match term.separator {
                Some(Operator::Comma) => f.write_str(", ")?,
                Some(Operator::Slash) => f.write_str("/")?,
                None => f.write_str(" ")?,
            }
        }
    }
    Ok(())
}

/// Serialize a string with double quotes, escaping what the tokenizer
/// would otherwise misread.
pub(crate) fn write_string(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    f.write_str("\"")?;
    for c in value.chars() {
        match c {
            '"' | '\\' => write!(f, "\\{c}")?,
            '\n' | '\r' | '\x0C' => write_hex_escape(f, c)?,
            c => write!(f, "{c}")?,
        }
    }
    f.write_str("\"")
}

/// Serialize `name` so that it scans back as a single ident token.
pub(crate) fn write_ident(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    if name == "-" {
        return f.write_str("\\-");
    }
    let leading_dash = name.starts_with('-');
    for (index, c) in name.chars().enumerate() {
        let digit_at_start = c.is_ascii_digit() && (index == 0 || (index == 1 && leading_dash));
        if digit_at_start {
            write_hex_escape(f, c)?;
        } else {
            write_name_code_point(f, c)?;
        }
    }
    Ok(())
}

/// A unit starting with `e` would otherwise scan as an exponent.
fn write_unit(f: &mut fmt::Formatter<'_>, unit: &str) -> fmt::Result {
    let mut chars = unit.chars();
    match chars.next() {
        Some(c @ ('e' | 'E')) => {
            write_hex_escape(f, c)?;
            write_name(f, chars.as_str())
        }
        _ => write_ident(f, unit),
    }
}

/// Serialize the name part of a `HASH` token.
pub(crate) fn write_name(f: &mut fmt::Formatter<'_>, name: &str) -> fmt::Result {
    name.chars().try_for_each(|c| write_name_code_point(f, c))
}

fn write_name_code_point(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    if is_ident_code_point(c) {
        write!(f, "{c}")
    } else if c.is_control() {
        write_hex_escape(f, c)
    } else {
        write!(f, "\\{c}")
    }
}

/// `\` and the hex code point. The trailing space ends the escape.
fn write_hex_escape(f: &mut fmt::Formatter<'_>, c: char) -> fmt::Result {
    write!(f, "\\{:x} ", u32::from(c))
}

/// Integral values print without a fractional part.
fn write_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        write!(f, "{value:.0}")
    } else {
        write!(f, "{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_parse_case_insensitively() {
        assert_eq!("PX".parse::<NumUnit>(), Ok(NumUnit::Px));
        assert_eq!("%".parse::<NumUnit>(), Ok(NumUnit::Percent));
        assert_eq!("kHz".parse::<NumUnit>(), Ok(NumUnit::KHz));
        assert_eq!("".parse::<NumUnit>(), Ok(NumUnit::None));
        assert_eq!(
            "vw".parse::<NumUnit>(),
            Ok(NumUnit::Other("vw".to_string()))
        );
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Num::new(12.0, NumUnit::Px).to_string(), "12px");
        assert_eq!(Num::new(-1.5, NumUnit::Em).to_string(), "-1.5em");
        assert_eq!(Num::new(50.0, NumUnit::Percent).to_string(), "50%");
        assert_eq!(Num::new(2.0, NumUnit::KHz).to_string(), "2kHz");
    }

    #[test]
    fn test_term_display() {
        let font = Term::new(TermValue::String("Times \"New\"".to_string()));
        assert_eq!(font.to_string(), r#""Times \"New\"""#);

        let uri = Term::new(TermValue::Uri("a.png".to_string()));
        assert_eq!(uri.to_string(), r#"url("a.png")"#);

        let attr = Term {
            value: TermValue::Function {
                name: "attr".to_string(),
                args: vec![Term::ident("title")],
            },
            unary: Some(UnaryOp::Minus),
            separator: None,
        };
        assert_eq!(attr.to_string(), "-attr(title)");
    }

    #[test]
    fn test_names_and_strings_are_escaped() {
        assert_eq!(Term::ident("a:b").to_string(), r"a\:b");
        assert_eq!(Term::ident("1a").to_string(), r"\31 a");
        assert_eq!(Term::ident("-2x").to_string(), r"-\32 x");
        assert_eq!(Term::ident("-").to_string(), r"\-");
        assert_eq!(Term::ident("--x").to_string(), "--x");
        assert_eq!(Term::new(TermValue::Hash("12".into())).to_string(), "#12");

        let string = Term::new(TermValue::String("a\rb\u{c}".into()));
        assert_eq!(string.to_string(), r#""a\d b\c ""#);

        let odd_unit = Num::new(1.0, NumUnit::Other("e3".into()));
        assert_eq!(odd_unit.to_string(), r"1\65 3");
    }
}
