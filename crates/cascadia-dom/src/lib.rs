//! Arena document tree for the cascadia CSS engine.
//!
//! The selector engine never owns a document; it reads one through a small
//! node interface (tag name, attributes, parent, previous sibling). This
//! crate is the tree that interface is usually backed by: every node lives
//! in one `Vec`, relationships are stored as [`NodeId`] indices, and
//! [`NodeRef`] pairs an id with its [`Document`] so it can be handed around
//! as a cheap `Copy` handle.
//!
//! # Example
//! ```
//! use cascadia_dom::{Document, NodeId};
//!
//! let mut doc = Document::new();
//! let html = doc.create_element("html", &[]);
//! let body = doc.create_element("body", &[("class", "main")]);
//! doc.append_child(NodeId::ROOT, html);
//! doc.append_child(html, body);
//!
//! let body_ref = doc.node(body);
//! assert_eq!(body_ref.tag_name(), Some("body"));
//! assert_eq!(body_ref.parent().map(|p| p.id()), Some(html));
//! ```

use std::collections::HashMap;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// What a node is.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// The document itself; only ever at [`NodeId::ROOT`].
    Document,
    /// An element with a tag name and attributes.
    Element(ElementData),
    /// Character data.
    Text(String),
    /// A comment.
    Comment(String),
}

/// Element-specific data.
#[derive(Debug, Clone, Default)]
pub struct ElementData {
    /// The element's local name, as written in the source document.
    pub tag_name: String,
    /// The element's attributes.
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create element data from a tag name and `(name, value)` pairs.
    #[must_use]
    pub fn new(tag_name: &str, attrs: &[(&str, &str)]) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attrs: attrs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        }
    }

    /// Look up an attribute value by name (case-sensitive).
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// The `id` attribute, if present.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// The whitespace-separated entries of the `class` attribute.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attribute("class")
            .unwrap_or_default()
            .split_ascii_whitespace()
    }
}

/// A node slot in the arena.
#[derive(Debug, Clone)]
pub struct Node {
    /// The node's kind and payload.
    pub kind: NodeKind,
    /// Parent node, `None` for the document and for detached nodes.
    pub parent: Option<NodeId>,
    /// Children in document order.
    pub children: Vec<NodeId>,
    /// The sibling immediately before this node.
    pub prev_sibling: Option<NodeId>,
    /// The sibling immediately after this node.
    pub next_sibling: Option<NodeId>,
}

impl Node {
    const fn detached(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
            prev_sibling: None,
            next_sibling: None,
        }
    }
}

/// Arena-backed document tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
}

impl Document {
    /// Create a document containing only the document node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::detached(NodeKind::Document)],
        }
    }

    /// The document node.
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Number of nodes in the arena, including detached ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: the document node is never removed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by id.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get a [`NodeRef`] handle for `id`.
    #[must_use]
    pub const fn node(&self, id: NodeId) -> NodeRef<'_> {
        NodeRef { doc: self, id }
    }

    /// Allocate a detached node and return its id.
    pub fn alloc(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::detached(kind));
        id
    }

    /// Allocate a detached element.
    pub fn create_element(&mut self, tag_name: &str, attrs: &[(&str, &str)]) -> NodeId {
        self.alloc(NodeKind::Element(ElementData::new(tag_name, attrs)))
    }

    /// Allocate a detached text node.
    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.alloc(NodeKind::Text(text.to_string()))
    }

    /// Allocate a detached comment node.
    pub fn create_comment(&mut self, text: &str) -> NodeId {
        self.alloc(NodeKind::Comment(text.to_string()))
    }

    /// Append `child` as the last child of `parent`, wiring sibling links.
    ///
    /// # Panics
    ///
    /// Panics if either id was not allocated by this document.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        let prev_last = self.nodes[parent.0].children.last().copied();
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
        self.nodes[child.0].next_sibling = None;
        self.nodes[child.0].prev_sibling = prev_last;
        if let Some(prev) = prev_last {
            self.nodes[prev.0].next_sibling = Some(child);
        }
    }

    /// Parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Children of a node in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// The sibling immediately before a node, of any kind.
    #[must_use]
    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.prev_sibling)
    }

    /// The sibling immediately after a node, of any kind.
    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.next_sibling)
    }

    /// Element data, if `id` is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Text content, if `id` is a text node.
    #[must_use]
    pub fn as_text(&self, id: NodeId) -> Option<&str> {
        self.get(id).and_then(|n| match &n.kind {
            NodeKind::Text(s) => Some(s.as_str()),
            _ => None,
        })
    }

    /// The first element child of the document node.
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.children(NodeId::ROOT)
            .iter()
            .copied()
            .find(|&id| self.as_element(id).is_some())
    }

    /// Ancestors of a node, nearest first.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&cur| self.parent(cur))
    }

    /// Every node reachable from `from` (inclusive), in document order.
    #[must_use]
    pub fn descendants(&self, from: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children(id).iter().rev().copied());
        }
        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A borrowed handle to one node of a [`Document`].
///
/// This is the shape the selector engine wants: everything it needs is a
/// method on the handle, and navigation returns another handle.
#[derive(Debug, Clone, Copy)]
pub struct NodeRef<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// The node's id.
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    /// The document this node belongs to.
    #[must_use]
    pub const fn document(&self) -> &'a Document {
        self.doc
    }

    /// Element data, if this is an element.
    #[must_use]
    pub fn element(&self) -> Option<&'a ElementData> {
        self.doc.as_element(self.id)
    }

    /// Whether this node is an element.
    #[must_use]
    pub fn is_element(&self) -> bool {
        self.element().is_some()
    }

    /// Tag name for elements, `None` for any other node kind.
    #[must_use]
    pub fn tag_name(&self) -> Option<&'a str> {
        self.element().map(|e| e.tag_name.as_str())
    }

    /// Attribute value for elements.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        self.element().and_then(|e| e.attribute(name))
    }

    /// Parent node.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.doc.parent(self.id).map(|id| self.doc.node(id))
    }

    /// Immediately preceding sibling, of any kind.
    #[must_use]
    pub fn previous_sibling(&self) -> Option<Self> {
        self.doc.prev_sibling(self.id).map(|id| self.doc.node(id))
    }

    /// Children in document order.
    pub fn children(&self) -> impl Iterator<Item = Self> + 'a {
        let doc = self.doc;
        doc.children(self.id).iter().map(move |&id| doc.node(id))
    }
}

impl PartialEq for NodeRef<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.doc, other.doc) && self.id == other.id
    }
}

impl Eq for NodeRef<'_> {}
