//! Static tag name resolution
//!
//! Containment rules are keyed by plain tag names, so only elements whose
//! opening tag is a simple identifier participate in checking. Everything
//! else (member access, namespaced names, dynamically computed tags) resolves
//! to [`TagName::Unresolvable`] and is skipped rather than guessed at.

use crate::document::{MarkupNode, NodeKind, TagExpr};

/// Outcome of resolving an element's tag name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagName<'a> {
    /// A plain identifier usable as a rule-map key
    Resolved(&'a str),
    /// Tag exists but cannot be reduced to a single static name
    Unresolvable,
}

impl<'a> TagName<'a> {
    /// The resolved name, if there is one
    pub fn name(self) -> Option<&'a str> {
        match self {
            TagName::Resolved(name) => Some(name),
            TagName::Unresolvable => None,
        }
    }

    pub fn is_resolved(self) -> bool {
        matches!(self, TagName::Resolved(_))
    }
}

/// Resolve an element node's tag to a rule-map key
///
/// Non-element nodes and compound tags resolve to
/// [`TagName::Unresolvable`]. An empty identifier is treated as
/// unresolvable too, so malformed input degrades to a skip instead of a
/// false match.
pub fn resolve_tag_name(node: &MarkupNode) -> TagName<'_> {
    match &node.kind {
        NodeKind::Element(TagExpr::Name(name)) if !name.is_empty() => TagName::Resolved(name),
        _ => TagName::Unresolvable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    fn only_node(doc: &Document) -> &MarkupNode {
        doc.node(0).unwrap()
    }

    #[test]
    fn test_plain_name_resolves() {
        let mut tree = Document::builder();
        tree.element("Grid");
        let doc = tree.finish();

        let resolved = resolve_tag_name(only_node(&doc));
        assert_eq!(resolved, TagName::Resolved("Grid"));
        assert_eq!(resolved.name(), Some("Grid"));
        assert!(resolved.is_resolved());
    }

    #[test]
    fn test_member_tag_is_unresolvable() {
        let mut tree = Document::builder();
        tree.element(TagExpr::member(["Components", "Grid"]));
        let doc = tree.finish();

        assert_eq!(resolve_tag_name(only_node(&doc)), TagName::Unresolvable);
    }

    #[test]
    fn test_namespaced_tag_is_unresolvable() {
        let mut tree = Document::builder();
        tree.element(TagExpr::namespaced("svg", "path"));
        let doc = tree.finish();

        assert_eq!(resolve_tag_name(only_node(&doc)), TagName::Unresolvable);
    }

    #[test]
    fn test_empty_name_is_unresolvable() {
        let mut tree = Document::builder();
        tree.element("");
        let doc = tree.finish();

        let resolved = resolve_tag_name(only_node(&doc));
        assert_eq!(resolved, TagName::Unresolvable);
        assert_eq!(resolved.name(), None);
    }

    #[test]
    fn test_non_element_is_unresolvable() {
        let mut tree = Document::builder();
        tree.text("hello");
        tree.open_fragment();
        tree.close();
        let doc = tree.finish();

        assert_eq!(resolve_tag_name(doc.node(0).unwrap()), TagName::Unresolvable);
        assert_eq!(resolve_tag_name(doc.node(1).unwrap()), TagName::Unresolvable);
    }
}
