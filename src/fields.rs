//! Field sets: the fixed, ordered column headers of one output.
//!
//! A [`FieldSet`] is captured once per encoder instance (from an explicit
//! header or from the first record) and reused for every subsequent row.
//! Field-name identity is case-insensitive throughout the library.

use crate::error::{Error, Result};

/// Case-fold a field name for identity comparison.
///
/// Field names compare case-insensitively everywhere in this library: within
/// a [`FieldSet`], in record lookups, and in explicit quote-field sets.
pub(crate) fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

/// The ordered sequence of field names shared by all records in one output.
///
/// Names are unique under case-insensitive comparison and keep the order they
/// were declared in. Fields present in later records but absent from this set
/// are ignored; fields in the set absent from a given record serialize as
/// empty.
///
/// # Example
///
/// ```
/// use dsv_oxide::FieldSet;
///
/// let fields = FieldSet::new(["Name", "Path", "Length"]).unwrap();
/// assert_eq!(fields.len(), 3);
/// assert!(fields.contains("name")); // case-insensitive
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSet {
    /// Field names in declaration order, original casing preserved
    names: Vec<String>,
    /// Case-folded names, parallel to `names`
    folded: Vec<String>,
}

impl FieldSet {
    /// Build a field set from an ordered sequence of names.
    ///
    /// Returns [`Error::EmptyFieldSet`] when the sequence is empty and
    /// [`Error::DuplicateField`] when two names collide case-insensitively.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = FieldSet {
            names: Vec::new(),
            folded: Vec::new(),
        };

        for name in names {
            let name = name.into();
            let folded = fold_name(&name);
            if set.folded.iter().any(|f| *f == folded) {
                return Err(Error::DuplicateField(name));
            }
            set.names.push(name);
            set.folded.push(folded);
        }

        if set.names.is_empty() {
            return Err(Error::EmptyFieldSet);
        }

        log::debug!("captured field set with {} column(s)", set.names.len());
        Ok(set)
    }

    /// Number of fields in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the set holds no fields.
    ///
    /// Construction rejects empty sets, so this is always false for a
    /// successfully built `FieldSet`; provided for API completeness.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// True when `name` is in the set (case-insensitive).
    pub fn contains(&self, name: &str) -> bool {
        let folded = fold_name(name);
        self.folded.iter().any(|f| *f == folded)
    }

    /// Iterate field names in declaration order, original casing.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&'a String) -> &'a str>;

    fn into_iter(self) -> Self::IntoIter {
        let as_str: fn(&'a String) -> &'a str = String::as_str;
        self.names.iter().map(as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_set_preserves_order() {
        let fields = FieldSet::new(["Z", "A", "M"]).unwrap();
        let names: Vec<&str> = fields.iter().collect();
        assert_eq!(names, vec!["Z", "A", "M"]);
    }

    #[test]
    fn test_field_set_preserves_original_casing() {
        let fields = FieldSet::new(["FullName", "EMail"]).unwrap();
        let names: Vec<&str> = fields.iter().collect();
        assert_eq!(names, vec!["FullName", "EMail"]);
    }

    #[test]
    fn test_field_set_rejects_empty() {
        let err = FieldSet::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyFieldSet));
    }

    #[test]
    fn test_field_set_rejects_case_insensitive_duplicate() {
        let err = FieldSet::new(["Name", "Path", "NAME"]).unwrap_err();
        match err {
            Error::DuplicateField(name) => assert_eq!(name, "NAME"),
            other => panic!("expected DuplicateField, got {:?}", other),
        }
    }

    #[test]
    fn test_contains_is_case_insensitive() {
        let fields = FieldSet::new(["Name"]).unwrap();
        assert!(fields.contains("Name"));
        assert!(fields.contains("name"));
        assert!(fields.contains("NAME"));
        assert!(!fields.contains("Path"));
    }

    #[test]
    fn test_into_iterator_for_ref() {
        let fields = FieldSet::new(["A", "B"]).unwrap();
        let mut collected = Vec::new();
        for name in &fields {
            collected.push(name);
        }
        assert_eq!(collected, vec!["A", "B"]);
    }
}
