//! Quoting policies: when a field value is wrapped in quotes.
//!
//! Escaping itself (doubling embedded quote characters) lives in the encoder;
//! a policy only decides *whether* a given field gets quoted.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::fields::fold_name;

/// A case-insensitive set of field names that are always quoted.
///
/// # Example
///
/// ```
/// use dsv_oxide::QuoteFieldSet;
///
/// let set: QuoteFieldSet = ["Name", "Path"].into_iter().collect();
/// assert!(set.contains("name"));
/// assert!(!set.contains("Length"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct QuoteFieldSet {
    /// Names as given, for round-tripping through configuration
    names: Vec<String>,
    /// Case-folded lookup set
    folded: HashSet<String>,
}

impl QuoteFieldSet {
    /// Build a set from field names.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        let folded = names.iter().map(|n| fold_name(n)).collect();
        QuoteFieldSet { names, folded }
    }

    /// True when `name` is in the set (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        self.folded.contains(&fold_name(name))
    }
}

impl<S: Into<String>> FromIterator<S> for QuoteFieldSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        QuoteFieldSet::new(iter)
    }
}

impl From<Vec<String>> for QuoteFieldSet {
    fn from(names: Vec<String>) -> Self {
        QuoteFieldSet::new(names)
    }
}

impl From<QuoteFieldSet> for Vec<String> {
    fn from(set: QuoteFieldSet) -> Self {
        set.names
    }
}

/// Rule deciding whether a field value is wrapped in quotes.
///
/// The explicit [`QuotePolicy::Fields`] variant replaces the three-way choice
/// entirely: named fields are always quoted, every other field is emitted
/// raw, regardless of content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum QuotePolicy {
    /// Quote every field, doubling embedded quote characters.
    #[default]
    Always,

    /// Quote a field only when its value contains the delimiter character.
    ///
    /// Embedded quote characters and line breaks do *not* trigger quoting
    /// under this policy. Values carrying embedded quotes or newlines produce
    /// output that a strict reader may mis-split; use [`QuotePolicy::Always`]
    /// when such values are possible.
    AsNeeded,

    /// Never quote. Values containing the delimiter will corrupt the output;
    /// this is an accepted limitation of the policy, not a bug.
    Never,

    /// Always quote exactly the named fields (case-insensitive), never the
    /// rest.
    Fields(QuoteFieldSet),
}

impl QuotePolicy {
    /// Decide whether the value of `field` should be quoted.
    pub fn should_quote(&self, field: &str, value: &str, delimiter: char) -> bool {
        match self {
            QuotePolicy::Always => true,
            QuotePolicy::AsNeeded => value.contains(delimiter),
            QuotePolicy::Never => false,
            QuotePolicy::Fields(set) => set.contains(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_quotes_everything() {
        let policy = QuotePolicy::Always;
        assert!(policy.should_quote("A", "", ','));
        assert!(policy.should_quote("A", "plain", ','));
    }

    #[test]
    fn test_as_needed_quotes_only_on_delimiter() {
        let policy = QuotePolicy::AsNeeded;
        assert!(policy.should_quote("A", "x,y", ','));
        assert!(!policy.should_quote("A", "xy", ','));
        // Embedded quotes and newlines do not trigger quoting.
        assert!(!policy.should_quote("A", "he said \"hi\"", ','));
        assert!(!policy.should_quote("A", "line\nbreak", ','));
    }

    #[test]
    fn test_as_needed_respects_configured_delimiter() {
        let policy = QuotePolicy::AsNeeded;
        assert!(policy.should_quote("A", "x;y", ';'));
        assert!(!policy.should_quote("A", "x,y", ';'));
    }

    #[test]
    fn test_never_quotes_nothing() {
        let policy = QuotePolicy::Never;
        assert!(!policy.should_quote("A", "x,y", ','));
    }

    #[test]
    fn test_fields_policy_ignores_content() {
        let policy = QuotePolicy::Fields(["Name"].into_iter().collect());
        assert!(policy.should_quote("Name", "plain", ','));
        assert!(policy.should_quote("NAME", "plain", ','));
        assert!(!policy.should_quote("Path", "x,y", ','));
    }

    #[test]
    fn test_quote_field_set_serde_round_trip() {
        let set: QuoteFieldSet = ["Name", "Path"].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Name","Path"]"#);
        let back: QuoteFieldSet = serde_json::from_str(&json).unwrap();
        assert!(back.contains("name"));
        assert!(back.contains("PATH"));
    }

    #[test]
    fn test_quote_policy_default() {
        assert_eq!(QuotePolicy::default(), QuotePolicy::Always);
    }
}
