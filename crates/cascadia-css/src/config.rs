//! Parser, matcher and resolver configuration.
//!
//! All configuration is passed explicitly; nothing here is global. Every
//! struct deserializes with missing fields taking their defaults, so a
//! partial JSON or TOML document is a valid configuration.

use serde::{Deserialize, Serialize};

/// Default bound on nested blocks and function arguments.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

/// Options for [`Parser`](crate::parser::Parser).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// How deeply blocks, brackets and function arguments may nest before
    /// the enclosing production fails.
    pub max_nesting_depth: usize,
    /// Skip statements the CSS2 grammar rejects using the forward-compatible
    /// core grammar. When `false`, the first rejected statement stops
    /// parsing with [`ParseError::Unrecoverable`](crate::ParseError::Unrecoverable).
    pub forward_compatible: bool,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            forward_compatible: true,
        }
    }
}

/// How `.class` and `#id` selectors compare against attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassIdMatch {
    /// The attribute value starts with the selector name. `.foo` matches
    /// `class="foobar"`; only the start of the attribute is examined.
    #[default]
    Prefix,
    /// CSS2 semantics: `.foo` matches when `foo` is one of the
    /// whitespace-separated class names, `#foo` when the id is exactly `foo`.
    Exact,
}

/// Options for selector matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Class and id comparison mode.
    pub class_id_match: ClassIdMatch,
}

impl MatchOptions {
    /// Options using CSS2 class/id semantics.
    #[must_use]
    pub const fn exact() -> Self {
        Self {
            class_id_match: ClassIdMatch::Exact,
        }
    }
}

/// Options for cascade resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolveOptions {
    /// The target medium, e.g. `screen`. With `None`, rulesets inside every
    /// `@media` block apply.
    pub medium: Option<String>,
    /// Selector matching options.
    pub matching: MatchOptions,
}

impl ResolveOptions {
    /// Resolve for one medium.
    #[must_use]
    pub fn for_medium(medium: &str) -> Self {
        Self {
            medium: Some(medium.to_string()),
            ..Self::default()
        }
    }

    /// Whether a media list applies under these options.
    ///
    /// An empty list applies everywhere, as does one naming `all`.
    #[must_use]
    pub fn media_applies(&self, media: &[String]) -> bool {
        let Some(target) = &self.medium else {
            return true;
        };
        media.is_empty()
            || media
                .iter()
                .any(|m| m.eq_ignore_ascii_case("all") || m.eq_ignore_ascii_case(target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParserConfig::default();
        assert_eq!(config.max_nesting_depth, 64);
        assert!(config.forward_compatible);
        assert_eq!(MatchOptions::default().class_id_match, ClassIdMatch::Prefix);
    }

    #[test]
    fn test_media_applies() {
        let any = ResolveOptions::default();
        assert!(any.media_applies(&["print".to_string()]));

        let screen = ResolveOptions::for_medium("screen");
        assert!(screen.media_applies(&["print".to_string(), "Screen".to_string()]));
        assert!(screen.media_applies(&["all".to_string()]));
        assert!(!screen.media_applies(&["print".to_string()]));
    }
}
