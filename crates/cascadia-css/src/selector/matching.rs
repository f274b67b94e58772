//! [CSS 2.1 § 5 Selectors](https://www.w3.org/TR/CSS2/selector.html): matching.
//!
//! Chains are matched right to left. The subject link is tested against the
//! node itself; each earlier link is then looked for in the relationship its
//! successor's combinator names (some ancestor, the parent, or the
//! immediately preceding element sibling). For a descendant combinator the
//! nearest matching ancestor is taken and matching continues from there.

use cascadia_common::warning::warn_once;
use cascadia_dom::NodeRef;

use super::{AdditionalSel, AttrMatch, AttrSel, Combinator, Pseudo, SelectorChain, SimpleSel};
use crate::config::{ClassIdMatch, MatchOptions};

/// The view of a document node the selector engine needs.
///
/// Implemented for [`cascadia_dom::NodeRef`]; any other tree can be matched
/// against by implementing these five methods on a cheap handle type.
pub trait DocumentNode: Clone {
    /// Whether the node is an element. Every other kind of node fails to
    /// match any selector.
    fn is_element(&self) -> bool;

    /// The element's tag name.
    fn tag_name(&self) -> Option<&str>;

    /// The value of an attribute on the element.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// The parent node, of any kind.
    fn parent(&self) -> Option<Self>;

    /// The sibling immediately before this node, of any kind.
    fn previous_sibling(&self) -> Option<Self>;
}

impl DocumentNode for NodeRef<'_> {
    fn is_element(&self) -> bool {
        NodeRef::is_element(self)
    }

    fn tag_name(&self) -> Option<&str> {
        NodeRef::tag_name(self)
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        NodeRef::attribute(self, name)
    }

    fn parent(&self) -> Option<Self> {
        NodeRef::parent(self)
    }

    fn previous_sibling(&self) -> Option<Self> {
        NodeRef::previous_sibling(self)
    }
}

/// Whether `chain` matches `node`, with default [`MatchOptions`].
#[must_use]
pub fn matches<N: DocumentNode>(chain: &SelectorChain, node: &N) -> bool {
    matches_with(chain, node, &MatchOptions::default())
}

/// Whether `chain` matches `node`.
///
/// Non-element nodes and empty chains never match.
#[must_use]
pub fn matches_with<N: DocumentNode>(
    chain: &SelectorChain,
    node: &N,
    options: &MatchOptions,
) -> bool {
    let Some((subject, preceding)) = chain.links.split_last() else {
        return false;
    };
    if !simple_sel_matches(subject, node, options) {
        return false;
    }

    let mut current = node.clone();
    let mut combinator = subject.combinator;
    for link in preceding.iter().rev() {
        let next = match combinator {
            // "A B": the nearest ancestor matching A wins.
            Combinator::Descendant | Combinator::None => {
                std::iter::successors(current.parent(), DocumentNode::parent)
                    .find(|ancestor| simple_sel_matches(link, ancestor, options))
            }
            Combinator::Child => current
                .parent()
                .filter(|parent| simple_sel_matches(link, parent, options)),
            Combinator::AdjacentSibling => previous_element_sibling(&current)
                .filter(|sibling| simple_sel_matches(link, sibling, options)),
        };
        let Some(next) = next else {
            return false;
        };
        current = next;
        combinator = link.combinator;
    }
    true
}

/// Whether one simple selector matches `node` on its own.
#[must_use]
pub fn simple_sel_matches<N: DocumentNode>(
    sel: &SimpleSel,
    node: &N,
    options: &MatchOptions,
) -> bool {
    if !node.is_element() {
        return false;
    }
    // HTML element names are case-insensitive.
    if let Some(name) = &sel.name
        && !node
            .tag_name()
            .is_some_and(|tag| tag.eq_ignore_ascii_case(name))
    {
        return false;
    }
    sel.additional
        .iter()
        .all(|additional| additional_sel_matches(additional, node, options))
}

fn additional_sel_matches<N: DocumentNode>(
    additional: &AdditionalSel,
    node: &N,
    options: &MatchOptions,
) -> bool {
    match additional {
        AdditionalSel::Class(class) => node.attribute("class").is_some_and(|value| {
            match options.class_id_match {
                ClassIdMatch::Prefix => value.starts_with(class.as_str()),
                ClassIdMatch::Exact => value.split_ascii_whitespace().any(|c| c == class),
            }
        }),
        AdditionalSel::Id(id) => {
            node.attribute("id")
                .is_some_and(|value| match options.class_id_match {
                    ClassIdMatch::Prefix => value.starts_with(id.as_str()),
                    ClassIdMatch::Exact => value == id,
                })
        }
        AdditionalSel::Attribute(attrs) => attrs.iter().all(|attr| attr_sel_matches(attr, node)),
        AdditionalSel::Pseudo(pseudo) => pseudo_matches(pseudo, node),
    }
}

/// [§ 5.8.1 Matching attributes and attribute values](https://www.w3.org/TR/CSS2/selector.html#matching-attrs)
fn attr_sel_matches<N: DocumentNode>(attr: &AttrSel, node: &N) -> bool {
    let Some(value) = node.attribute(&attr.name) else {
        return false;
    };
    let expected = attr.value.as_deref().unwrap_or_default();
    match attr.match_kind {
        AttrMatch::Set => true,
        AttrMatch::Equals => value == expected,
        AttrMatch::Includes => {
            !expected.is_empty()
                && !expected.contains(char::is_whitespace)
                && value.split_ascii_whitespace().any(|word| word == expected)
        }
        AttrMatch::DashMatch => dash_matches(value, expected),
    }
}

/// `value` is exactly `expected` or begins with `expected` followed by `-`.
fn dash_matches(value: &str, expected: &str) -> bool {
    value.strip_prefix(expected).is_some_and(|rest| rest.is_empty() || rest.starts_with('-'))
}

/// [§ 5.11 Pseudo-classes](https://www.w3.org/TR/CSS2/selector.html#pseudo-class-selectors)
fn pseudo_matches<N: DocumentNode>(pseudo: &Pseudo, node: &N) -> bool {
    let name = pseudo.name.to_ascii_lowercase();
    match (name.as_str(), pseudo.argument.as_deref()) {
        // "The :first-child pseudo-class matches an element that is the
        // first child element of some other element."
        ("first-child", None) => {
            node.parent().is_some_and(|parent| parent.is_element())
                && previous_element_sibling(node).is_none()
        }
        // "The pseudo-class ':lang(C)' matches if the element is in language C."
        // The language comes from the nearest `lang` attribute, the element's own included.
        ("lang", Some(language)) => std::iter::successors(Some(node.clone()), DocumentNode::parent)
            .find_map(|n| n.attribute("lang").map(str::to_ascii_lowercase))
            .is_some_and(|lang| dash_matches(&lang, &language.to_ascii_lowercase())),
        // Link, dynamic and pseudo-element selectors describe states or
        // boxes a document tree does not have.
        ("link" | "visited" | "hover" | "active" | "focus", None) => false,
        _ if pseudo.is_pseudo_element() => false,
        _ => {
            let _ = warn_once("CSS", &format!("unsupported pseudo-class ':{name}'"));
            false
        }
    }
}

/// "ignoring non-element nodes (such as text nodes and comments)"
fn previous_element_sibling<N: DocumentNode>(node: &N) -> Option<N> {
    std::iter::successors(node.previous_sibling(), DocumentNode::previous_sibling)
        .find(DocumentNode::is_element)
}

#[cfg(test)]
mod tests {
    use cascadia_dom::{Document, NodeId};

    use super::*;
    use crate::selector::Specificity;

    #[test]
    fn test_prefix_and_exact_class_matching() {
        let mut doc = Document::new();
        let div = doc.create_element("div", &[("class", "foobar baz"), ("id", "main-1")]);
        doc.append_child(NodeId::ROOT, div);
        let node = doc.node(div);

        let class = |name: &str| {
            SelectorChain::new(vec![
                SimpleSel::universal().with(AdditionalSel::Class(name.into())),
            ])
        };
        let id = |name: &str| {
            SelectorChain::new(vec![SimpleSel::universal().with(AdditionalSel::Id(name.into()))])
        };

        assert!(matches(&class("foo"), &node));
        assert!(!matches(&class("baz"), &node));
        assert!(!matches_with(&class("foo"), &node, &MatchOptions::exact()));
        assert!(matches_with(&class("baz"), &node, &MatchOptions::exact()));

        assert!(matches(&id("main"), &node));
        assert!(!matches_with(&id("main"), &node, &MatchOptions::exact()));
        assert!(matches_with(&id("main-1"), &node, &MatchOptions::exact()));
    }

    #[test]
    fn test_dash_match() {
        assert!(dash_matches("en", "en"));
        assert!(dash_matches("en-US", "en"));
        assert!(!dash_matches("english", "en"));
        assert!(!dash_matches("fr", "en"));
    }

    #[test]
    fn test_empty_chain_never_matches() {
        let mut doc = Document::new();
        let div = doc.create_element("div", &[]);
        doc.append_child(NodeId::ROOT, div);
        let chain = SelectorChain::default();
        assert!(!matches(&chain, &doc.node(div)));
        assert_eq!(chain.specificity(), Specificity::default());
    }
}
