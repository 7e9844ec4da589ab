//! Violation records produced by the containment check
//!
//! A violation names the offending node and carries the data needed to
//! render the user-facing message. Rendering is template substitution, so
//! hosts that surface messages through their own reporting layer can reuse
//! the same placeholders.

use crate::document::NodeId;

/// Message id for a child that is not allowed inside its parent
pub const INVALID_CHILD: &str = "invalid-child";

/// Message template for [`INVALID_CHILD`]
pub const INVALID_CHILD_TEMPLATE: &str =
    "Only these children ({allowed_children}) are allowed inside <{parent}>. Found <{child}>.";

/// A single containment violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The violating child element
    pub node: NodeId,
    /// Which message this violation renders with
    pub message_id: &'static str,
    /// Resolved tag of the enclosing element
    pub parent: String,
    /// Resolved tag of the violating child
    pub child: String,
    /// Allowed child tags, joined with ", " in configured order
    pub allowed_children: String,
}

impl Violation {
    /// Violation for a child that is absent from its parent's allow-list
    pub fn invalid_child(node: NodeId, parent: &str, child: &str, allowed: &[String]) -> Self {
        Self {
            node,
            message_id: INVALID_CHILD,
            parent: parent.to_string(),
            child: child.to_string(),
            allowed_children: allowed.join(", "),
        }
    }

    /// Render the user-facing message
    pub fn message(&self) -> String {
        INVALID_CHILD_TEMPLATE
            .replace("{allowed_children}", &self.allowed_children)
            .replace("{parent}", &self.parent)
            .replace("{child}", &self.child)
    }
}
