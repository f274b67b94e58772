//! CSS2 selectors per [CSS 2.1 § 5 Selectors](https://www.w3.org/TR/CSS2/selector.html).
//!
//! "A selector is a chain of one or more simple selectors separated by
//! combinators." A [`SelectorChain`] stores its [`SimpleSel`] links left to
//! right; every link records the combinator that joins it to the link
//! before it. A [`Selector`] is a comma-separated group of chains.
//!
//! ```text
//! div.nav > ul li   =>   [div.nav] <-Child- [ul] <-Descendant- [li]
//! ```

use core::fmt;

use crate::term::{write_ident, write_string};

/// Selector matching against a document tree.
pub mod matching;

pub use matching::{DocumentNode, matches, matches_with};

/// [§ 5.8 Attribute selectors](https://www.w3.org/TR/CSS2/selector.html#attribute-selectors)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttrMatch {
    /// `[att]`: "Match when the element sets the 'att' attribute, whatever
    /// the value of the attribute."
    Set,
    /// `[att=val]`: "Match when the element's 'att' attribute value is exactly 'val'."
    Equals,
    /// `[att~=val]`: "Represents an element with the att attribute whose value
    /// is a white space-separated list of words, one of which is exactly 'val'."
    Includes,
    /// `[att|=val]`: "Represents an element with the att attribute, its value
    /// either being exactly 'val' or beginning with 'val' immediately followed by '-'."
    DashMatch,
}

/// One bracketed attribute predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttrSel {
    /// Attribute name.
    pub name: String,
    /// How the value is compared.
    pub match_kind: AttrMatch,
    /// The value to compare against; `None` for [`AttrMatch::Set`].
    pub value: Option<String>,
}

impl AttrSel {
    /// `[name]`
    #[must_use]
    pub fn set(name: &str) -> Self {
        Self {
            name: name.to_string(),
            match_kind: AttrMatch::Set,
            value: None,
        }
    }

    /// `[name<op>value]`
    #[must_use]
    pub fn with_value(name: &str, match_kind: AttrMatch, value: &str) -> Self {
        Self {
            name: name.to_string(),
            match_kind,
            value: Some(value.to_string()),
        }
    }
}

/// `pseudo : ':' [ IDENT | FUNCTION S* IDENT S* ')' ]`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pseudo {
    /// The pseudo-class or pseudo-element name.
    pub name: String,
    /// The argument of a functional pseudo-class such as `:lang(en)`.
    pub argument: Option<String>,
}

impl Pseudo {
    /// [§ 5.12 Pseudo-elements](https://www.w3.org/TR/CSS2/selector.html#pseudo-elements)
    ///
    /// Whether this names one of the CSS2 pseudo-elements.
    #[must_use]
    pub fn is_pseudo_element(&self) -> bool {
        self.argument.is_none()
            && ["first-line", "first-letter", "before", "after"]
                .iter()
                .any(|name| self.name.eq_ignore_ascii_case(name))
    }
}

/// A condition attached to a simple selector after its element name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AdditionalSel {
    /// `.name`
    Class(String),
    /// `#name`
    Id(String),
    /// `:name` or `:name(arg)`
    Pseudo(Pseudo),
    /// One or more consecutive `[...]` predicates, all of which must hold.
    Attribute(Vec<AttrSel>),
}

/// How a simple selector relates to the one before it in its chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Combinator {
    /// The leftmost link. Treated as [`Descendant`](Self::Descendant) if it
    /// appears anywhere else.
    #[default]
    None,
    /// `A B`: "Matches when element B is an arbitrary descendant of some ancestor element A."
    Descendant,
    /// `A > B`: "Matches when element B is a child of some element A."
    Child,
    /// `A + B`: "Matches if E1 and E2 share the same parent in the document
    /// tree and E1 immediately precedes E2, ignoring non-element nodes."
    AdjacentSibling,
}

/// `simple_selector : element_name [ HASH | class | attrib | pseudo ]* | [ HASH | class | attrib | pseudo ]+`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SimpleSel {
    /// Element name; `None` for the universal selector (written or implied).
    pub name: Option<String>,
    /// Class, id, pseudo and attribute conditions in source order.
    pub additional: Vec<AdditionalSel>,
    /// Relationship to the previous link of the chain.
    pub combinator: Combinator,
}

impl SimpleSel {
    /// A type selector.
    #[must_use]
    pub fn element(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// The universal selector.
    #[must_use]
    pub fn universal() -> Self {
        Self::default()
    }

    /// Add a condition.
    #[must_use]
    pub fn with(mut self, additional: AdditionalSel) -> Self {
        self.additional.push(additional);
        self
    }

    /// Set the combinator to the previous link.
    #[must_use]
    pub const fn combined(mut self, combinator: Combinator) -> Self {
        self.combinator = combinator;
        self
    }

    /// This link's contribution to the chain's specificity.
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        let mut spec = Specificity::default();
        if self.name.is_some() {
            spec.2 += 1;
        }
        for additional in &self.additional {
            match additional {
                AdditionalSel::Id(_) => spec.0 += 1,
                AdditionalSel::Class(_) => spec.1 += 1,
                AdditionalSel::Pseudo(pseudo) if pseudo.is_pseudo_element() => spec.2 += 1,
                AdditionalSel::Pseudo(_) => spec.1 += 1,
                AdditionalSel::Attribute(attrs) => {
                    spec.1 += u32::try_from(attrs.len()).unwrap_or(u32::MAX);
                }
            }
        }
        spec
    }
}

/// A chain of simple selectors joined by combinators, leftmost first.
/// The last link is the subject.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectorChain {
    /// The links, left to right.
    pub links: Vec<SimpleSel>,
}

impl SelectorChain {
    /// Build a chain from its links.
    #[must_use]
    pub const fn new(links: Vec<SimpleSel>) -> Self {
        Self { links }
    }

    /// The rightmost link, which the matched node itself must satisfy.
    #[must_use]
    pub fn subject(&self) -> Option<&SimpleSel> {
        self.links.last()
    }

    /// [§ 6.4.3 Calculating a selector's specificity](https://www.w3.org/TR/CSS2/cascade.html#specificity)
    #[must_use]
    pub fn specificity(&self) -> Specificity {
        self.links
            .iter()
            .map(SimpleSel::specificity)
            .fold(Specificity::default(), |acc, spec| {
                Specificity(acc.0 + spec.0, acc.1 + spec.1, acc.2 + spec.2)
            })
    }
}

/// A selector group: "When several selectors share the same declarations,
/// they may be grouped into a comma-separated list."
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Selector {
    /// The alternatives, in source order.
    pub chains: Vec<SelectorChain>,
}

impl Selector {
    /// A group of one chain.
    #[must_use]
    pub fn single(chain: SelectorChain) -> Self {
        Self {
            chains: vec![chain],
        }
    }
}

/// [§ 6.4.3 Calculating a selector's specificity](https://www.w3.org/TR/CSS2/cascade.html#specificity)
///
/// "- count the number of ID attributes in the selector (= b)
///  - count the number of other attributes and pseudo-classes in the selector (= c)
///  - count the number of element names and pseudo-elements in the selector (= d)"
///
/// The inline-style component (a) does not apply to stylesheet selectors.
/// Specificities compare component-wise, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity(pub u32, pub u32, pub u32);

impl Specificity {
    /// Create a new specificity with (ids, classes, types) components.
    #[must_use]
    pub const fn new(ids: u32, classes: u32, types: u32) -> Self {
        Self(ids, classes, types)
    }

    /// "Concatenating the three numbers" in a large base, for callers that
    /// want a single integer.
    #[must_use]
    pub fn packed(self) -> u64 {
        const BASE: u64 = 1_000;
        let clamp = |n: u32| u64::from(n.min(999));
        clamp(self.0) * BASE * BASE + clamp(self.1) * BASE + clamp(self.2)
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0, self.1, self.2)
    }
}

impl fmt::Display for AttrSel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_ident(f, &self.name)?;
        let op = match self.match_kind {
            AttrMatch::Set => return f.write_str("]"),
            AttrMatch::Equals => "=",
            AttrMatch::Includes => "~=",
            AttrMatch::DashMatch => "|=",
        };
        f.write_str(op)?;
        write_string(f, self.value.as_deref().unwrap_or_default())?;
        f.write_str("]")
    }
}

impl fmt::Display for AdditionalSel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Class(name) => {
                f.write_str(".")?;
                write_ident(f, name)
            }
            Self::Id(name) => {
                f.write_str("#")?;
                write_ident(f, name)
            }
            Self::Pseudo(Pseudo { name, argument }) => {
                f.write_str(":")?;
                write_ident(f, name)?;
                if let Some(argument) = argument {
                    f.write_str("(")?;
                    write_ident(f, argument)?;
                    f.write_str(")")?;
                }
                Ok(())
            }
            Self::Attribute(attrs) => attrs.iter().try_for_each(|attr| write!(f, "{attr}")),
        }
    }
}

impl fmt::Display for SimpleSel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write_ident(f, name)?,
            None if self.additional.is_empty() => f.write_str("*")?,
            None => {}
        }
        self.additional
            .iter()
            .try_for_each(|additional| write!(f, "{additional}"))
    }
}

impl fmt::Display for SelectorChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, link) in self.links.iter().enumerate() {
            if index > 0 {
                match link.combinator {
                    Combinator::None | Combinator::Descendant => f.write_str(" ")?,
                    Combinator::Child => f.write_str(" > ")?,
                    Combinator::AdjacentSibling => f.write_str(" + ")?,
                }
            }
            write!(f, "{link}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.chains.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{chain}")?;
        }
        Ok(())
    }
}
