//! CSS Cascading and Style Computation
//!
//! This module implements the cascade per
//! [CSS 2.1 § 6 Assigning property values, Cascading, and Inheritance](https://www.w3.org/TR/CSS2/cascade.html).
//!
//! A [`Cascade`] holds up to one stylesheet per [`Origin`];
//! [`resolve_style`] matches its rulesets against a document node and
//! merges the winning declarations into a [`Style`](crate::style::Style).

mod resolve;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::stylesheet::StyleSheet;
use crate::ua_stylesheet::default_user_agent_sheet;

pub use resolve::{
    CascadedDeclaration, MatchedRuleset, cascaded_declarations, compute_styles, matched_rulesets,
    resolve_style, resolve_style_with,
};

/// [§ 6.4 The cascade](https://www.w3.org/TR/CSS2/cascade.html#cascade)
/// "Style sheets may have three different origins: author, user, and user
/// agent."
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Origin {
    /// "Conforming user agents must apply a default style sheet"
    UserAgent,
    /// "The user may be able to specify style information for a particular
    /// document."
    User,
    /// "The author specifies style sheets for a source document"
    Author,
}

impl Origin {
    /// Every origin, from lowest to highest normal precedence.
    pub const ALL: [Self; 3] = [Self::UserAgent, Self::User, Self::Author];

    const fn slot(self) -> usize {
        match self {
            Self::UserAgent => 0,
            Self::User => 1,
            Self::Author => 2,
        }
    }

    /// [§ 6.4.1 Cascading order](https://www.w3.org/TR/CSS2/cascade.html#cascading-order)
    ///
    /// "1. user agent declarations
    ///  2. user normal declarations
    ///  3. author normal declarations
    ///  4. author important declarations
    ///  5. user important declarations"
    ///
    /// A higher value wins.
    #[must_use]
    pub const fn precedence(self, important: bool) -> u8 {
        match (self, important) {
            (Self::UserAgent, _) => 0,
            (Self::User, false) => 1,
            (Self::Author, false) => 2,
            (Self::Author, true) => 3,
            (Self::User, true) => 4,
        }
    }
}

/// The stylesheets that take part in resolution, at most one per origin.
///
/// Sheets are held behind [`Arc`] so one parsed sheet (such as the default
/// user-agent sheet) can be shared by many cascades.
#[derive(Debug, Clone, Default)]
pub struct Cascade {
    sheets: [Option<Arc<StyleSheet>>; 3],
}

impl Cascade {
    /// A cascade over the given sheets.
    #[must_use]
    pub fn new(
        author: Option<StyleSheet>,
        user: Option<StyleSheet>,
        user_agent: Option<StyleSheet>,
    ) -> Self {
        let mut cascade = Self::default();
        for (origin, sheet) in [
            (Origin::Author, author),
            (Origin::User, user),
            (Origin::UserAgent, user_agent),
        ] {
            if let Some(sheet) = sheet {
                let _ = cascade.set_sheet(origin, sheet);
            }
        }
        cascade
    }

    /// A cascade whose user-agent sheet is [`default_user_agent_sheet`].
    #[must_use]
    pub fn with_default_user_agent(author: Option<StyleSheet>, user: Option<StyleSheet>) -> Self {
        let mut cascade = Self::new(author, user, None);
        let _ = cascade.set_sheet(Origin::UserAgent, default_user_agent_sheet());
        cascade
    }

    /// The sheet for `origin`.
    #[must_use]
    pub fn sheet(&self, origin: Origin) -> Option<&StyleSheet> {
        self.sheets[origin.slot()].as_deref()
    }

    /// Store the sheet for `origin`, returning the one it replaces.
    pub fn set_sheet(
        &mut self,
        origin: Origin,
        sheet: impl Into<Arc<StyleSheet>>,
    ) -> Option<Arc<StyleSheet>> {
        self.sheets[origin.slot()].replace(sheet.into())
    }

    /// Remove and return the sheet for `origin`.
    pub fn take_sheet(&mut self, origin: Origin) -> Option<Arc<StyleSheet>> {
        self.sheets[origin.slot()].take()
    }

    /// The present sheets in cascade order: user agent, user, author.
    pub fn sheets(&self) -> impl Iterator<Item = (Origin, &StyleSheet)> {
        Origin::ALL
            .into_iter()
            .filter_map(|origin| self.sheet(origin).map(|sheet| (origin, sheet)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_order() {
        let order: Vec<u8> = [
            (Origin::UserAgent, false),
            (Origin::User, false),
            (Origin::Author, false),
            (Origin::Author, true),
            (Origin::User, true),
        ]
        .into_iter()
        .map(|(origin, important)| origin.precedence(important))
        .collect();
        assert!(order.is_sorted());
        assert_eq!(Origin::UserAgent.precedence(true), 0);
    }

    #[test]
    fn test_one_sheet_per_origin() {
        let mut cascade = Cascade::new(Some(StyleSheet::new()), None, None);
        assert!(cascade.sheet(Origin::Author).is_some());
        assert!(cascade.sheet(Origin::User).is_none());

        let previous = cascade.set_sheet(Origin::Author, StyleSheet::new());
        assert!(previous.is_some());
        assert_eq!(cascade.sheets().count(), 1);

        assert!(cascade.take_sheet(Origin::Author).is_some());
        assert_eq!(cascade.sheets().count(), 0);
    }

    #[test]
    fn test_iterates_in_cascade_order() {
        let cascade = Cascade::with_default_user_agent(Some(StyleSheet::new()), None);
        let origins: Vec<Origin> = cascade.sheets().map(|(origin, _)| origin).collect();
        assert_eq!(origins, vec![Origin::UserAgent, Origin::Author]);
        assert_eq!("user-agent".parse(), Ok(Origin::UserAgent));
    }
}
