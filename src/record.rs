//! Records: ordered named-field rows produced by an object pipeline.
//!
//! A [`Record`] is one row of named field values waiting to be serialized.
//! Field names compare case-insensitively while keeping their original casing
//! and insertion order. A record may also carry the declared type names of its
//! origin object, which feed the optional `#TYPE` marker line.

use indexmap::IndexMap;

use crate::fields::fold_name;

/// A single field value.
///
/// `Null` is distinct from `Text(String::new())`: a null field renders as an
/// absent value, an empty text field renders as an empty string. Both
/// serialize to an empty column, but quoting policies still see the rendered
/// (possibly empty) string.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean, rendered as `true`/`false`
    Bool(bool),
    /// Signed integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Text
    Text(String),
}

impl Value {
    /// Render the value to its display string.
    ///
    /// Returns `None` for [`Value::Null`]. Rendering never fails: a value
    /// that cannot produce a display string is treated as absent rather than
    /// failing the whole row (see [`Value::from_json`]).
    pub fn render(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(i) => Some(i.to_string()),
            Value::Float(f) => Some(f.to_string()),
            Value::Text(s) => Some(s.clone()),
        }
    }

    /// Convert a JSON value into a field value.
    ///
    /// Scalars map directly. Arrays and objects are rendered to their compact
    /// JSON form; if that rendering fails the value becomes `Null` — one bad
    /// field never fails the row.
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else {
                    // u64 beyond i64::MAX falls through as_f64
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            },
            serde_json::Value::String(s) => Value::Text(s.clone()),
            other => match serde_json::to_string(other) {
                Ok(s) => Value::Text(s),
                Err(_) => Value::Null,
            },
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// One entry of a record: the field name as inserted plus its value.
#[derive(Debug, Clone, PartialEq)]
struct Entry {
    name: String,
    value: Value,
}

/// One row of named field values.
///
/// # Example
///
/// ```
/// use dsv_oxide::{Record, Value};
///
/// let mut record = Record::new();
/// record.insert("Name", "report.pdf");
/// record.insert("Length", 20_480i64);
/// record.insert("Hidden", Value::Null);
///
/// assert_eq!(record.get("name"), Some(&Value::Text("report.pdf".into())));
/// assert_eq!(record.get("Missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// Entries keyed by case-folded field name, insertion order preserved
    entries: IndexMap<String, Entry>,
    /// Declared type names of the origin object, most specific first
    type_names: Vec<String>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a declared type name (builder pattern).
    ///
    /// The first attached name feeds the `#TYPE` marker line when marker
    /// emission is enabled.
    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_names.push(name.into());
        self
    }

    /// Insert a field.
    ///
    /// When a field with the same case-insensitive name already exists its
    /// value is replaced and the original name and position are kept.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        let name = name.into();
        let value = value.into();
        let folded = fold_name(&name);
        match self.entries.get_mut(&folded) {
            Some(entry) => entry.value = value,
            None => {
                self.entries.insert(folded, Entry { name, value });
            },
        }
    }

    /// Insert a field (builder pattern).
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Look up a field value by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(&fold_name(name)).map(|e| &e.value)
    }

    /// Iterate field names in insertion order, original casing.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(|e| e.name.as_str())
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the record holds no fields.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared type names of the origin object.
    pub fn type_names(&self) -> &[String] {
        &self.type_names
    }

    /// Build a record from a JSON object.
    ///
    /// Returns `None` when `value` is not a JSON object. Member order is
    /// preserved as the field order; nested values are converted with
    /// [`Value::from_json`].
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        let map = value.as_object()?;
        let mut record = Record::new();
        for (name, v) in map {
            record.insert(name.clone(), Value::from_json(v));
        }
        Some(record)
    }
}
