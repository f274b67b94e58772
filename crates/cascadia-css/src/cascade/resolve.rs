//! Cascade resolution: matching rulesets, picking winning declarations and
//! building computed styles.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use cascadia_dom::{Document, NodeId};
use tracing::trace;

use super::{Cascade, Origin};
use crate::config::ResolveOptions;
use crate::selector::{DocumentNode, SelectorChain, Specificity, matches_with};
use crate::style::Style;
use crate::stylesheet::{Declaration, Ruleset, Statement, StyleSheet};

/// A ruleset one of whose selectors matched a node.
///
/// The specificity belongs to the match, not to the ruleset, so resolving
/// never writes to a shared stylesheet.
#[derive(Debug, Clone, Copy)]
pub struct MatchedRuleset<'a> {
    /// The sheet the ruleset came from.
    pub origin: Origin,
    /// The matched ruleset.
    pub ruleset: &'a Ruleset,
    /// [§ 6.4.3 Calculating a selector's specificity](https://www.w3.org/TR/CSS2/cascade.html#specificity)
    /// of the most specific matching selector in the group.
    pub specificity: Specificity,
    /// Position of the ruleset in cascade order.
    pub order: usize,
}

/// The declaration that won the cascade for one property.
#[derive(Debug, Clone, Copy)]
pub struct CascadedDeclaration<'a> {
    /// The winning declaration.
    pub declaration: &'a Declaration,
    /// The sheet it came from.
    pub origin: Origin,
    /// Specificity of the selector that matched.
    pub specificity: Specificity,
    /// Position of the declaration in cascade order.
    pub order: usize,
}

impl CascadedDeclaration<'_> {
    /// [§ 6.4.1 Cascading order](https://www.w3.org/TR/CSS2/cascade.html#cascading-order)
    ///
    /// "2. Sort according to importance (normal or important) and origin
    ///  3. Sort rules with the same importance and origin by specificity
    ///  4. Finally, sort by order specified: if two declarations have the
    ///  same weight, origin and specificity, the latter specified wins."
    #[must_use]
    pub const fn sort_key(&self) -> (u8, Specificity, usize) {
        (
            self.origin.precedence(self.declaration.important),
            self.specificity,
            self.order,
        )
    }
}

/// Rulesets of one sheet that apply under `options`: top-level rulesets and
/// those inside an `@media` block for a matching medium. `@import` targets
/// are not descended into.
fn applicable_rulesets<'a>(
    sheet: &'a StyleSheet,
    options: &ResolveOptions,
) -> impl Iterator<Item = &'a Ruleset> {
    sheet
        .statements()
        .iter()
        .flat_map(move |statement| match statement {
            Statement::Ruleset(ruleset) => std::slice::from_ref(ruleset),
            Statement::Media(media) if options.media_applies(&media.media) => {
                media.rulesets.as_slice()
            }
            _ => &[],
        })
}

/// [§ 6.4.1](https://www.w3.org/TR/CSS2/cascade.html#cascading-order)
/// "1. Find all declarations that apply to the element and property in
/// question, for the target media type."
///
/// Every ruleset of `cascade` with a selector matching `node`, in cascade
/// order (user agent, user, author; document order within a sheet).
#[must_use]
pub fn matched_rulesets<'a, N: DocumentNode>(
    cascade: &'a Cascade,
    node: &N,
    options: &ResolveOptions,
) -> Vec<MatchedRuleset<'a>> {
    if !node.is_element() {
        return Vec::new();
    }
    cascade
        .sheets()
        .flat_map(|(origin, sheet)| {
            applicable_rulesets(sheet, options).map(move |ruleset| (origin, ruleset))
        })
        .enumerate()
        .filter_map(|(order, (origin, ruleset))| {
            let specificity = ruleset
                .selector
                .chains
                .iter()
                .filter(|chain| matches_with(chain, node, &options.matching))
                .map(SelectorChain::specificity)
                .max()?;
            Some(MatchedRuleset {
                origin,
                ruleset,
                specificity,
                order,
            })
        })
        .collect()
}

/// The winning declaration for each property set on `node`, keyed by the
/// lower-cased property name.
#[must_use]
pub fn cascaded_declarations<'a, N: DocumentNode>(
    cascade: &'a Cascade,
    node: &N,
    options: &ResolveOptions,
) -> HashMap<String, CascadedDeclaration<'a>> {
    let mut winners: HashMap<String, CascadedDeclaration<'a>> = HashMap::new();
    let mut order = 0;
    for matched in matched_rulesets(cascade, node, options) {
        for declaration in &matched.ruleset.declarations {
            let candidate = CascadedDeclaration {
                declaration,
                origin: matched.origin,
                specificity: matched.specificity,
                order,
            };
            order += 1;
            match winners.entry(declaration.property.to_ascii_lowercase()) {
                Entry::Occupied(mut entry) => {
                    if candidate.sort_key() > entry.get().sort_key() {
                        let _ = entry.insert(candidate);
                    }
                }
                Entry::Vacant(entry) => {
                    let _ = entry.insert(candidate);
                }
            }
        }
    }
    winners
}

/// Resolve the style of `node` with default [`ResolveOptions`].
///
/// `parent` is the computed style of the node's parent element, used for
/// inheritance; `None` for the root element.
#[must_use]
pub fn resolve_style<N: DocumentNode>(
    cascade: &Cascade,
    node: &N,
    parent: Option<&Style>,
) -> Style {
    resolve_style_with(cascade, node, parent, &ResolveOptions::default())
}

/// Resolve the style of `node`.
///
/// Winning declarations are applied lowest priority first, with
/// `font-size` ahead of everything else since `em` lengths depend on it.
/// A node that no ruleset matches gets its inherited and initial values;
/// so does a non-element node.
#[must_use]
pub fn resolve_style_with<N: DocumentNode>(
    cascade: &Cascade,
    node: &N,
    parent: Option<&Style>,
    options: &ResolveOptions,
) -> Style {
    let initial;
    let parent = if let Some(parent) = parent {
        parent
    } else {
        initial = Style::default();
        &initial
    };
    let mut style = Style::inherit_from(parent);
    if !node.is_element() {
        return style;
    }

    let mut winners: Vec<CascadedDeclaration<'_>> = cascaded_declarations(cascade, node, options)
        .into_values()
        .collect();
    winners.sort_by_key(|winner| {
        let is_font_size = winner
            .declaration
            .property
            .eq_ignore_ascii_case("font-size");
        (!is_font_size, winner.sort_key())
    });
    for winner in &winners {
        let applied = style.apply_declaration(winner.declaration, parent);
        trace!(
            declaration = %winner.declaration,
            origin = %winner.origin,
            applied,
            "cascade"
        );
    }
    style.finalize();
    style
}

/// [§ 6.2 Inheritance](https://www.w3.org/TR/CSS2/cascade.html#inheritance)
///
/// Compute the style of every element of `document`, each one inheriting
/// from its parent element. Text, comment and document nodes get no entry.
#[must_use]
pub fn compute_styles(
    document: &Document,
    cascade: &Cascade,
    options: &ResolveOptions,
) -> HashMap<NodeId, Style> {
    let mut styles = HashMap::new();
    let mut pending: Vec<(NodeId, Option<NodeId>)> = vec![(document.root(), None)];

    while let Some((id, parent)) = pending.pop() {
        let node = document.node(id);
        let inherit_from = if node.is_element() {
            let style = resolve_style_with(
                cascade,
                &node,
                parent.and_then(|parent| styles.get(&parent)),
                options,
            );
            let _ = styles.insert(id, style);
            Some(id)
        } else {
            parent
        };
        pending.extend(
            document
                .children(id)
                .iter()
                .rev()
                .map(|&child| (child, inherit_from)),
        );
    }
    styles
}
