//! The delimited-record encoder.
//!
//! Produces one delimited text line per record, plus an optional header line
//! of field names and an optional `#TYPE` marker line. The encoder performs
//! no I/O: lines go to whatever sink the caller chooses (see
//! [`RecordWriter`](crate::writer::RecordWriter) for a ready-made one).
//!
//! # Example
//!
//! ```
//! use dsv_oxide::{DelimitedRecordEncoder, EncoderConfig, QuotePolicy, Record};
//!
//! let config = EncoderConfig::new().with_quote_policy(QuotePolicy::AsNeeded);
//! let mut encoder = DelimitedRecordEncoder::new(config)?;
//! encoder.initialize(["Name", "Length"])?;
//!
//! let record = Record::new()
//!     .with_field("Name", "a,b.txt")
//!     .with_field("Length", 42i64);
//!
//! assert_eq!(encoder.encode_header()?, "Name,Length");
//! assert_eq!(encoder.encode_record(&record)?, "\"a,b.txt\",42");
//! # Ok::<(), dsv_oxide::Error>(())
//! ```

use crate::config::EncoderConfig;
use crate::error::{Error, Result};
use crate::fields::FieldSet;
use crate::record::{Record, Value};

/// Prefix a reimporting reader prepends to declared type names. Stripped
/// back off when emitting the `#TYPE` marker so export/import round-trips
/// do not stack prefixes.
const REIMPORT_TYPE_PREFIX: &str = "CSV:";

/// Converts named-field records into delimited text lines.
///
/// The field set is fixed on first use — from an explicit
/// [`initialize`](Self::initialize) call or from the first record via
/// [`initialize_from_record`](Self::initialize_from_record) — and reused for
/// every subsequent row: extra fields in later records are ignored, missing
/// fields serialize as empty. One encoder serves one output; it reuses an
/// internal buffer across calls and is not meant for shared concurrent use.
#[derive(Debug)]
pub struct DelimitedRecordEncoder {
    /// Encoding options, fixed at construction
    config: EncoderConfig,
    /// Column headers, established on first use
    fields: Option<FieldSet>,
    /// Scratch buffer reused across encode calls
    buf: String,
}

impl Default for DelimitedRecordEncoder {
    fn default() -> Self {
        Self {
            config: EncoderConfig::default(),
            fields: None,
            buf: String::with_capacity(128),
        }
    }
}

impl DelimitedRecordEncoder {
    /// Create an encoder with the given configuration.
    ///
    /// Returns [`Error::InvalidDelimiter`] when the configured delimiter is
    /// the quote character or a line break.
    pub fn new(config: EncoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fields: None,
            buf: String::with_capacity(128),
        })
    }

    /// The encoder's configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// The established field set, if any.
    pub fn field_set(&self) -> Option<&FieldSet> {
        self.fields.as_ref()
    }

    /// Establish the field set from an ordered sequence of names.
    ///
    /// Must be called exactly once per encoder instance; a second call
    /// returns [`Error::AlreadyInitialized`]. Empty or duplicate name
    /// collections are rejected eagerly.
    pub fn initialize<I, S>(&mut self, field_names: I) -> Result<&FieldSet>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.fields.is_some() {
            return Err(Error::AlreadyInitialized);
        }
        let fields = FieldSet::new(field_names)?;
        Ok(self.fields.insert(fields))
    }

    /// Establish the field set from the fields of `record`, in order.
    ///
    /// Convenience for streaming use where the first record defines the
    /// columns. Same single-use rule as [`initialize`](Self::initialize).
    pub fn initialize_from_record(&mut self, record: &Record) -> Result<&FieldSet> {
        self.initialize(record.field_names().map(str::to_string))
    }

    /// Encode the header line: field names joined by the delimiter, quoting
    /// policy applied per name.
    pub fn encode_header(&mut self) -> Result<String> {
        let Self { config, fields, buf } = self;
        let fields = fields.as_ref().ok_or(Error::NotInitialized)?;

        buf.clear();
        for (i, name) in fields.iter().enumerate() {
            if i > 0 {
                buf.push(config.delimiter);
            }
            append_field(buf, config, name, name);
        }
        Ok(buf.clone())
    }

    /// Encode one record as a delimited line.
    ///
    /// For each field-set name in order the record's value is looked up
    /// (absent and null values become the empty string), rendered to its
    /// display string, quoted per policy, and joined with the delimiter. A
    /// value that cannot render never fails the row; it serializes as empty.
    pub fn encode_record(&mut self, record: &Record) -> Result<String> {
        let Self { config, fields, buf } = self;
        let fields = fields.as_ref().ok_or(Error::NotInitialized)?;

        buf.clear();
        for (i, name) in fields.iter().enumerate() {
            if i > 0 {
                buf.push(config.delimiter);
            }
            let value = record
                .get(name)
                .and_then(Value::render)
                .unwrap_or_default();
            append_field(buf, config, name, &value);
        }
        Ok(buf.clone())
    }

    /// Build the `#TYPE <name>` marker line for a record.
    ///
    /// Uses the record's first declared type name, stripping the reimport
    /// prefix (`CSV:`) if present. A record with no declared type names
    /// yields a bare `#TYPE`.
    pub fn type_marker(record: &Record) -> String {
        match record.type_names().first() {
            None => "#TYPE".to_string(),
            Some(name) => {
                let stripped = match name.get(..REIMPORT_TYPE_PREFIX.len()) {
                    Some(prefix) if prefix.eq_ignore_ascii_case(REIMPORT_TYPE_PREFIX) => {
                        &name[REIMPORT_TYPE_PREFIX.len()..]
                    },
                    _ => name.as_str(),
                };
                format!("#TYPE {}", stripped)
            },
        }
    }
}

/// Append one field to `dest`, quoted per the configured policy.
fn append_field(dest: &mut String, config: &EncoderConfig, field_name: &str, value: &str) {
    if config
        .quote_policy
        .should_quote(field_name, value, config.delimiter)
    {
        append_quoted(dest, value);
    } else {
        dest.push_str(value);
    }
}

/// Append `source` wrapped in quotes, doubling every embedded quote.
fn append_quoted(dest: &mut String, source: &str) {
    dest.push('"');
    for c in source.chars() {
        if c == '"' {
            dest.push('"');
        }
        dest.push(c);
    }
    dest.push('"');
}
