//! # Nestling - markup containment linter
//!
//! Nestling validates parent/child tag nesting in JSX-like markup trees
//! against a user-supplied rule map. Each rule names a parent tag and the
//! exhaustive list of child tags allowed inside it; every element found
//! inside a ruled parent must appear on that list.
//!
//! ## Architecture
//!
//! - **Document**: an arena-backed markup tree. The host parser drives a
//!   [`TreeBuilder`] with open/close events and hands the finished
//!   [`Document`] to the checker.
//! - **Resolution**: [`resolve_tag_name`] reduces an element's tag to a
//!   static name where possible. Compound tags (member access, namespaced
//!   names) have no static name and are never matched against rules.
//! - **Checking**: [`ContainmentChecker`] validates each element against
//!   the rule of its nearest enclosing element, skipping expression and
//!   fragment wrappers in between, and reports one [`Violation`] per
//!   offending element in document order.
//!
//! ## Example
//!
//! ```
//! use nestling::{ContainmentChecker, Document, Options};
//!
//! let options = Options::from_json_str(r#"{ "rules": { "Grid": ["Row", "Col"] } }"#)?;
//! let checker = ContainmentChecker::new(options)?;
//!
//! let mut tree = Document::builder();
//! tree.open_element("Grid");
//! tree.element("Div");
//! tree.close();
//! let doc = tree.finish();
//!
//! let violations = checker.check_document(&doc);
//! assert_eq!(violations.len(), 1);
//! assert_eq!(
//!     violations[0].message(),
//!     "Only these children (Row, Col) are allowed inside <Grid>. Found <Div>."
//! );
//! # Ok::<(), nestling::ConfigError>(())
//! ```

pub mod checker;
pub mod config;
pub mod document;
pub mod resolve;
pub mod violation;

pub use checker::{nearest_element_ancestor, ContainmentChecker, RULE_DESCRIPTION, RULE_ID};
pub use config::{ConfigError, Options, RuleMap};
pub use document::{Document, MarkupNode, NodeId, NodeKind, Span, TagExpr, TreeBuilder};
pub use resolve::{resolve_tag_name, TagName};
pub use violation::{Violation, INVALID_CHILD, INVALID_CHILD_TEMPLATE};
