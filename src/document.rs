//! Markup document tree shared between the host parser and the checker
//!
//! The tree is an arena: every node lives in the owning [`Document`] and is
//! addressed by its [`NodeId`]. Parent links are plain indices into the same
//! arena, so upward walks never extend a node's lifetime. A host parser
//! populates the arena through [`TreeBuilder`], emitting open/close events in
//! document order the same way a streaming parser produces them.

use std::path::{Path, PathBuf};

/// Index of a node within its owning [`Document`]
pub type NodeId = usize;

/// Source position of a node (1-based line and column)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Span {
    /// Line number (1-based, 0 = unknown)
    pub line: usize,
    /// Column number (1-based, 0 = unknown)
    pub column: usize,
    /// Length of the highlighted region
    pub length: usize,
}

impl Span {
    pub fn new(line: usize, column: usize) -> Self {
        Self {
            line,
            column,
            length: 0,
        }
    }

    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }
}

/// Opening-tag identifier of an element
///
/// Only [`TagExpr::Name`] can be matched against a rule map; the compound
/// forms exist so a host parser can represent every tag it encounters and
/// the checker can recognize them as out of reach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagExpr {
    /// Simple identifier, e.g. `<Grid>`
    Name(String),
    /// Member access, e.g. `<My.Components.Grid>` or `<this.Component>`
    Member(Vec<String>),
    /// Namespaced name, e.g. `<svg:path>`
    Namespaced {
        namespace: String,
        name: String,
    },
}

impl TagExpr {
    /// Member-access identifier from its path segments
    pub fn member<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TagExpr::Member(parts.into_iter().map(Into::into).collect())
    }

    /// Namespaced identifier from its two halves
    pub fn namespaced(namespace: &str, name: &str) -> Self {
        TagExpr::Namespaced {
            namespace: namespace.to_string(),
            name: name.to_string(),
        }
    }
}

impl From<&str> for TagExpr {
    fn from(name: &str) -> Self {
        TagExpr::Name(name.to_string())
    }
}

impl From<String> for TagExpr {
    fn from(name: String) -> Self {
        TagExpr::Name(name)
    }
}

/// What a tree node is
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// A tagged element, e.g. `<Grid>...</Grid>`
    Element(TagExpr),
    /// A grouping construct with no tag of its own, e.g. `<>...</>`
    Fragment,
    /// An embedded expression container, e.g. `{items.map(...)}`
    Expression,
    /// Literal text content
    Text(String),
}

impl NodeKind {
    pub fn is_element(&self) -> bool {
        matches!(self, NodeKind::Element(_))
    }
}

/// A node in the markup tree
#[derive(Debug, Clone)]
pub struct MarkupNode {
    /// What this node is
    pub kind: NodeKind,
    /// Immediately enclosing node in the raw tree, not necessarily an element
    pub parent: Option<NodeId>,
    /// Ordered children, elements and non-elements alike
    pub children: Vec<NodeId>,
    /// Source position
    pub span: Span,
}

impl MarkupNode {
    fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
            span: Span::default(),
        }
    }

    pub fn is_element(&self) -> bool {
        self.kind.is_element()
    }

    /// Opening-tag identifier, for element nodes
    pub fn tag(&self) -> Option<&TagExpr> {
        match &self.kind {
            NodeKind::Element(tag) => Some(tag),
            _ => None,
        }
    }
}

/// A parsed markup document: the arena owning every node
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Source file this tree was parsed from, if any
    source: Option<PathBuf>,
    /// All nodes, in the order the producer emitted them
    nodes: Vec<MarkupNode>,
    /// Top-level nodes
    roots: Vec<NodeId>,
}

impl Document {
    /// Start building a document
    pub fn builder() -> TreeBuilder {
        TreeBuilder::new()
    }

    /// Source file this tree was parsed from, if the producer recorded one
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Number of nodes in the document
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node; `None` for ids the document never issued
    pub fn node(&self, id: NodeId) -> Option<&MarkupNode> {
        self.nodes.get(id)
    }

    /// Raw-tree parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Ordered children of a node; empty for leaves and unknown ids
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Source position of a node
    pub fn span(&self, id: NodeId) -> Option<Span> {
        self.nodes.get(id).map(|n| n.span)
    }

    /// Top-level nodes
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// All nodes in document order (pre-order depth-first)
    pub fn iter(&self) -> DocumentIter<'_> {
        let mut stack: Vec<NodeId> = self.roots.clone();
        stack.reverse();
        DocumentIter { doc: self, stack }
    }

    /// Element nodes in document order
    pub fn elements(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.iter()
            .filter(|&id| self.nodes.get(id).is_some_and(|n| n.is_element()))
    }
}

/// Pre-order iterator over every node id in a document
pub struct DocumentIter<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for DocumentIter<'a> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        if let Some(node) = self.doc.node(id) {
            for &child in node.children.iter().rev() {
                self.stack.push(child);
            }
        }
        Some(id)
    }
}

/// Builds a [`Document`] from open/close events in document order
///
/// Parent links are maintained by a stack of currently open nodes, the way a
/// streaming parser tracks its enclosing elements: `open_*` pushes, [`close`]
/// pops, and leaf methods attach to whatever is open. Unbalanced input is
/// tolerated rather than rejected; a stray [`close`] is a no-op and unclosed
/// nodes are simply still open when [`finish`] is called.
///
/// [`close`]: TreeBuilder::close
/// [`finish`]: TreeBuilder::finish
#[derive(Debug, Default)]
pub struct TreeBuilder {
    doc: Document,
    stack: Vec<NodeId>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the source file the tree is being built from
    pub fn with_source(mut self, path: impl Into<PathBuf>) -> Self {
        self.doc.source = Some(path.into());
        self
    }

    /// Open an element; subsequent nodes become its children until [`close`]
    ///
    /// [`close`]: TreeBuilder::close
    pub fn open_element(&mut self, tag: impl Into<TagExpr>) -> NodeId {
        let id = self.push(NodeKind::Element(tag.into()));
        self.stack.push(id);
        id
    }

    /// Open a fragment wrapper
    pub fn open_fragment(&mut self) -> NodeId {
        let id = self.push(NodeKind::Fragment);
        self.stack.push(id);
        id
    }

    /// Open an expression container
    pub fn open_expression(&mut self) -> NodeId {
        let id = self.push(NodeKind::Expression);
        self.stack.push(id);
        id
    }

    /// Close the innermost open node
    pub fn close(&mut self) {
        self.stack.pop();
    }

    /// Append a childless element (self-closing tag)
    pub fn element(&mut self, tag: impl Into<TagExpr>) -> NodeId {
        self.push(NodeKind::Element(tag.into()))
    }

    /// Append a text leaf
    pub fn text(&mut self, content: &str) -> NodeId {
        self.push(NodeKind::Text(content.to_string()))
    }

    /// Set the source position of an already-emitted node
    pub fn set_span(&mut self, id: NodeId, span: Span) {
        if let Some(node) = self.doc.nodes.get_mut(id) {
            node.span = span;
        }
    }

    /// Finish building and hand over the immutable document
    pub fn finish(self) -> Document {
        self.doc
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let parent = self.stack.last().copied();
        let id = self.doc.nodes.len();
        self.doc.nodes.push(MarkupNode::new(kind, parent));

        match parent {
            Some(parent_id) => self.doc.nodes[parent_id].children.push(id),
            None => self.doc.roots.push(id),
        }

        id
    }
}
