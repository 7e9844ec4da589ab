//! Checker options and their validation
//!
//! Options arrive as host-supplied JSON or YAML and are validated eagerly,
//! so a malformed rule map is reported once at construction instead of
//! surfacing as silent misbehavior during checking.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Allowed children per parent tag, in configured order
pub type RuleMap = HashMap<String, Vec<String>>;

/// Errors raised while reading or validating options
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid options: {0}")]
    Invalid(String),
}

/// Containment checker options
///
/// Parent tags may be any non-empty name; each maps to the exhaustive list
/// of child tags allowed directly inside it. An empty list is valid and
/// forbids every resolvable child. Parents without an entry are
/// unconstrained. Unknown top-level keys are rejected so a misspelled
/// option fails loudly instead of being ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Options {
    /// Maps a parent tag to the children allowed inside it
    pub rules: RuleMap,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule for one parent tag
    pub fn with_rule<I, S>(mut self, parent: &str, children: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.insert(
            parent.to_string(),
            children.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Read options from an already-parsed JSON value
    pub fn from_json_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let options: Options = serde_json::from_value(value)?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a JSON string
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let options: Options = serde_json::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Read options from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let options: Options = serde_yaml::from_str(content)?;
        options.validate()?;
        Ok(options)
    }

    /// Reject rule maps that could never match anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (parent, children) in &self.rules {
            if parent.is_empty() {
                return Err(ConfigError::Invalid(
                    "rule keys must be non-empty tag names".to_string(),
                ));
            }
            if children.iter().any(|child| child.is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "rule for <{}> contains an empty child tag name",
                    parent
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_is_empty() {
        let options = Options::default();
        assert!(options.rules.is_empty());
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_from_json_str() {
        let options = Options::from_json_str(
            r#"{ "rules": { "Grid": ["Row", "Col"], "List": ["Item"] } }"#,
        )
        .unwrap();

        assert_eq!(options.rules.len(), 2);
        assert_eq!(
            options.rules.get("Grid"),
            Some(&vec!["Row".to_string(), "Col".to_string()])
        );
        assert_eq!(options.rules.get("List"), Some(&vec!["Item".to_string()]));
    }

    #[test]
    fn test_from_yaml_str() {
        let yaml = r"
rules:
  Grid:
    - Row
    - Col
";
        let options = Options::from_yaml_str(yaml).unwrap();
        assert_eq!(
            options.rules.get("Grid"),
            Some(&vec!["Row".to_string(), "Col".to_string()])
        );
    }

    #[test]
    fn test_from_json_value() {
        let options =
            Options::from_json_value(json!({ "rules": { "Menu": ["MenuItem"] } })).unwrap();
        assert_eq!(options.rules.get("Menu"), Some(&vec!["MenuItem".to_string()]));
    }

    #[test]
    fn test_missing_rules_key_defaults_empty() {
        let options = Options::from_json_str("{}").unwrap();
        assert!(options.rules.is_empty());
    }

    #[test]
    fn test_unknown_top_level_key_is_rejected() {
        let result = Options::from_json_str(r#"{ "rules": {}, "mode": "strict" }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_children_must_be_a_list() {
        let result = Options::from_json_str(r#"{ "rules": { "Grid": "Row" } }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_children_must_be_strings() {
        let result = Options::from_json_str(r#"{ "rules": { "Grid": ["Row", 3] } }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_yaml_parse_error() {
        let result = Options::from_yaml_str("rules: [not: a: map");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_empty_parent_key_is_invalid() {
        let result = Options::from_json_str(r#"{ "rules": { "": ["Row"] } }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_empty_child_entry_is_invalid() {
        let result = Options::from_json_str(r#"{ "rules": { "Grid": ["Row", ""] } }"#);
        match result {
            Err(ConfigError::Invalid(message)) => assert!(message.contains("Grid")),
            other => panic!("expected invalid options, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_allow_list_is_valid() {
        let options = Options::from_json_str(r#"{ "rules": { "Void": [] } }"#).unwrap();
        assert_eq!(options.rules.get("Void"), Some(&Vec::new()));
    }

    #[test]
    fn test_with_rule_builder() {
        let options = Options::new()
            .with_rule("Grid", ["Row", "Col"])
            .with_rule("List", ["Item"]);

        assert_eq!(options.rules.len(), 2);
        assert_eq!(
            options.rules.get("Grid"),
            Some(&vec!["Row".to_string(), "Col".to_string()])
        );
    }

    #[test]
    fn test_serialize_round_trip() {
        let options = Options::new().with_rule("Grid", ["Row", "Col"]);
        let json = serde_json::to_string(&options).unwrap();
        let back = Options::from_json_str(&json).unwrap();
        assert_eq!(back, options);
    }

    #[test]
    fn test_arbitrary_parent_names_are_accepted() {
        let options = Options::from_json_str(
            r#"{ "rules": { "my-custom-element": ["slot"], "Über": ["X"] } }"#,
        )
        .unwrap();
        assert_eq!(options.rules.len(), 2);
    }
}
