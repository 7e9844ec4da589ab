//! Parent/child containment checking
//!
//! The check is child-centric: every element is validated against the rule
//! configured for its nearest enclosing element, if any. Walking up to the
//! nearest element (instead of only looking at direct children) means a
//! child stays governed by its logical parent even when an expression or
//! fragment wrapper sits between them in the raw tree.

use crate::config::{ConfigError, Options, RuleMap};
use crate::document::{Document, NodeId};
use crate::resolve::{resolve_tag_name, TagName};
use crate::violation::Violation;
use log::{debug, trace};

/// Identifier of this check
pub const RULE_ID: &str = "allowed-children";

/// One-line description of this check
pub const RULE_DESCRIPTION: &str =
    "Enforce parent/child containment constraints defined via user configuration";

/// Nearest ancestor of `id` that is an element, skipping expression and
/// fragment wrappers. `None` when no element encloses the node.
pub fn nearest_element_ancestor(doc: &Document, id: NodeId) -> Option<NodeId> {
    let mut current = doc.parent(id)?;
    loop {
        let node = doc.node(current)?;
        if node.is_element() {
            return Some(current);
        }
        current = node.parent?;
    }
}

/// Checks elements against a configured parent/child rule map
///
/// Construction validates the options once; checking is then read-only and
/// a single checker can be shared across documents and threads.
#[derive(Debug, Clone)]
pub struct ContainmentChecker {
    options: Options,
}

impl ContainmentChecker {
    /// Build a checker, rejecting invalid options up front
    pub fn new(options: Options) -> Result<Self, ConfigError> {
        options.validate()?;
        debug!(
            "containment checker initialized with {} rules",
            options.rules.len()
        );
        Ok(Self { options })
    }

    /// The configured rule map
    pub fn rules(&self) -> &RuleMap {
        &self.options.rules
    }

    /// Check one element against the rule for its nearest enclosing element
    ///
    /// Returns `None` for conforming elements and for every skip case:
    /// non-element nodes, elements with no enclosing element, enclosing
    /// elements without a configured rule, and tags on either side that do
    /// not resolve to a static name.
    pub fn check_element(&self, doc: &Document, id: NodeId) -> Option<Violation> {
        let node = doc.node(id)?;
        if !node.is_element() {
            return None;
        }

        let parent_id = nearest_element_ancestor(doc, id)?;
        let parent = doc.node(parent_id)?;

        let parent_tag = match resolve_tag_name(parent) {
            TagName::Resolved(name) => name,
            TagName::Unresolvable => {
                trace!("skipping node {}: enclosing tag has no static name", id);
                return None;
            }
        };

        let allowed = self.options.rules.get(parent_tag)?;

        let child_tag = match resolve_tag_name(node) {
            TagName::Resolved(name) => name,
            TagName::Unresolvable => {
                trace!("skipping node {}: tag has no static name", id);
                return None;
            }
        };

        if allowed.iter().any(|tag| tag == child_tag) {
            return None;
        }

        Some(Violation::invalid_child(id, parent_tag, child_tag, allowed))
    }

    /// Check every element of a document, in document order
    pub fn check_document(&self, doc: &Document) -> Vec<Violation> {
        doc.elements()
            .filter_map(|id| self.check_element(doc, id))
            .collect()
    }
}
