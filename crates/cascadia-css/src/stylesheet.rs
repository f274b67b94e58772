//! The CSS object model: stylesheets, statements and declarations.
//!
//! [CSS 2.1 § 4.1.7](https://www.w3.org/TR/CSS2/syndata.html#rule-sets):
//! "A CSS style sheet, for any level of CSS, consists of a list of
//! statements." Each statement owns its children; nothing is shared and
//! nothing points back up.

use core::fmt;
use std::path::Path;

use crate::error::ParseError;
use crate::parser;
use crate::selector::Selector;
use crate::term::{Term, write_expression, write_ident, write_string};

/// `declaration : property ':' S* expr prio?`
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// The property name as written.
    pub property: String,
    /// The value expression.
    pub value: Vec<Term>,
    /// Whether `!important` was given.
    pub important: bool,
}

impl Declaration {
    /// A normal (not important) declaration.
    #[must_use]
    pub fn new(property: &str, value: Vec<Term>) -> Self {
        Self {
            property: property.to_string(),
            value,
            important: false,
        }
    }

    /// The single identifier value `inherit`.
    #[must_use]
    pub fn is_inherit(&self) -> bool {
        matches!(self.value.as_slice(), [term] if term.is_ident("inherit"))
    }
}

/// `ruleset : selector [ ',' S* selector ]* '{' S* declaration [ ';' S* declaration ]* '}' S*`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ruleset {
    /// The selector group.
    pub selector: Selector,
    /// The declaration block.
    pub declarations: Vec<Declaration>,
}

/// `@import [STRING|URI] medium-list? ';'`
#[derive(Debug, Clone, PartialEq)]
pub struct AtImport {
    /// The URL of the imported sheet.
    pub url: String,
    /// Media the import is restricted to; empty means all.
    pub media: Vec<String>,
    /// The imported sheet, when the caller has loaded it. The engine never
    /// fetches anything itself.
    pub imported: Option<Box<StyleSheet>>,
}

/// `@media medium-list '{' ruleset* '}'`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AtMedia {
    /// The media list.
    pub media: Vec<String>,
    /// The nested rulesets.
    pub rulesets: Vec<Ruleset>,
}

/// `@page IDENT? pseudo_page? '{' declarations '}'`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AtPage {
    /// Page name (CSS2 named pages).
    pub name: Option<String>,
    /// `first`, `left` or `right`.
    pub pseudo_page: Option<String>,
    /// The page context's declarations.
    pub declarations: Vec<Declaration>,
}

/// `@charset STRING ';'`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtCharset {
    /// The encoding name.
    pub charset: String,
}

/// `@font-face '{' declarations '}'`
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AtFontFace {
    /// The font descriptors.
    pub declarations: Vec<Declaration>,
}

/// One top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A ruleset.
    Ruleset(Ruleset),
    /// `@import`
    Import(AtImport),
    /// `@media`
    Media(AtMedia),
    /// `@page`
    Page(AtPage),
    /// `@charset`
    Charset(AtCharset),
    /// `@font-face`
    FontFace(AtFontFace),
}

/// A parsed stylesheet.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleSheet {
    /// The statements, in source order.
    pub statements: Vec<Statement>,
}

impl StyleSheet {
    /// An empty stylesheet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Parse CSS text.
    ///
    /// Statements the CSS2 grammar rejects are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Unrecoverable`], carrying the statements parsed
    /// so far, when a statement cannot be skipped either.
    pub fn parse(css: &str) -> Result<Self, ParseError> {
        parser::parse_stylesheet(css)
    }

    /// Read and parse a UTF-8 stylesheet file.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Io`] if the file cannot be read, otherwise as
    /// [`parse`](Self::parse).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let css = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&css)
    }

    /// Number of top-level statements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether the sheet has no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// The top-level statements.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// The statement at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Statement> {
        self.statements.get(index)
    }

    /// Append a statement.
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Every ruleset in document order, including those nested in `@media`.
    pub fn rulesets(&self) -> impl Iterator<Item = &Ruleset> {
        self.statements
            .iter()
            .flat_map(|statement| -> Box<dyn Iterator<Item = &Ruleset> + '_> {
                match statement {
                    Statement::Ruleset(ruleset) => Box::new(std::iter::once(ruleset)),
                    Statement::Media(media) => Box::new(media.rulesets.iter()),
                    _ => Box::new(std::iter::empty()),
                }
            })
    }
}

fn write_declarations(f: &mut fmt::Formatter<'_>, declarations: &[Declaration]) -> fmt::Result {
    f.write_str("{")?;
    for declaration in declarations {
        write!(f, " {declaration};")?;
    }
    f.write_str(" }")
}

fn write_media_list(f: &mut fmt::Formatter<'_>, media: &[String]) -> fmt::Result {
    for (index, medium) in media.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write_ident(f, medium)?;
    }
    Ok(())
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_ident(f, &self.property)?;
        f.write_str(": ")?;
        write_expression(f, &self.value)?;
        if self.important {
            f.write_str(" !important")?;
        }
        Ok(())
    }
}

impl fmt::Display for Ruleset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.selector)?;
        write_declarations(f, &self.declarations)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ruleset(ruleset) => write!(f, "{ruleset}"),
            Self::Import(import) => {
                f.write_str("@import url(")?;
                write_string(f, &import.url)?;
                f.write_str(")")?;
                if !import.media.is_empty() {
                    f.write_str(" ")?;
                    write_media_list(f, &import.media)?;
                }
                f.write_str(";")
            }
            Self::Media(media) => {
                f.write_str("@media ")?;
                write_media_list(f, &media.media)?;
                writeln!(f, " {{")?;
                for ruleset in &media.rulesets {
                    writeln!(f, "  {ruleset}")?;
                }
                f.write_str("}")
            }
            Self::Page(page) => {
                f.write_str("@page ")?;
                if let Some(name) = &page.name {
                    write_ident(f, name)?;
                }
                if let Some(pseudo) = &page.pseudo_page {
                    f.write_str(":")?;
                    write_ident(f, pseudo)?;
                }
                if page.name.is_some() || page.pseudo_page.is_some() {
                    f.write_str(" ")?;
                }
                write_declarations(f, &page.declarations)
            }
            Self::Charset(charset) => {
                f.write_str("@charset ")?;
                write_string(f, &charset.charset)?;
                f.write_str(";")
            }
            Self::FontFace(font_face) => {
                f.write_str("@font-face ")?;
                write_declarations(f, &font_face.declarations)
            }
        }
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::{SelectorChain, SimpleSel};
    use crate::term::NumUnit;

    fn ruleset(tag: &str, property: &str) -> Ruleset {
        Ruleset {
            selector: Selector::single(SelectorChain::new(vec![SimpleSel::element(tag)])),
            declarations: vec![Declaration::new(property, vec![Term::ident("red")])],
        }
    }

    #[test]
    fn test_rulesets_flattens_media() {
        let sheet = StyleSheet {
            statements: vec![
                Statement::Ruleset(ruleset("a", "color")),
                Statement::Charset(AtCharset {
                    charset: "utf-8".into(),
                }),
                Statement::Media(AtMedia {
                    media: vec!["print".into()],
                    rulesets: vec![ruleset("b", "color"), ruleset("c", "color")],
                }),
            ],
        };
        let tags: Vec<String> = sheet
            .rulesets()
            .map(|r| r.selector.to_string())
            .collect();
        assert_eq!(tags, vec!["a", "b", "c"]);
        assert_eq!(sheet.len(), 3);
    }

    #[test]
    fn test_display() {
        let mut declaration = Declaration::new(
            "margin",
            vec![Term::number(1.0, NumUnit::Px), Term::number(0.0, NumUnit::None)],
        );
        declaration.important = true;
        let rule = Ruleset {
            declarations: vec![declaration],
            ..ruleset("p", "color")
        };
        assert_eq!(rule.to_string(), "p { margin: 1px 0 !important; }");

        let page = Statement::Page(AtPage {
            name: None,
            pseudo_page: Some("first".into()),
            declarations: vec![],
        });
        assert_eq!(page.to_string(), "@page :first { }");
    }

    #[test]
    fn test_inherit_detection() {
        assert!(Declaration::new("color", vec![Term::ident("INHERIT")]).is_inherit());
        assert!(!Declaration::new("color", vec![Term::ident("red")]).is_inherit());
    }
}
