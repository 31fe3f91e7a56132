//! Configuration for delimited-record encoding.
//!
//! Configuration is an explicit struct handed to each encoder instance;
//! nothing is shared across encoders or stored process-wide.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::policy::QuotePolicy;

/// Default field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

/// Options controlling how records are encoded.
///
/// # Examples
///
/// ```
/// use dsv_oxide::{EncoderConfig, QuotePolicy};
///
/// // Default options: comma delimiter, quote everything, no type marker
/// let config = EncoderConfig::default();
/// assert_eq!(config.delimiter, ',');
///
/// // Custom options
/// let config = EncoderConfig::new()
///     .with_delimiter(';')
///     .with_quote_policy(QuotePolicy::AsNeeded)
///     .with_type_marker(true);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncoderConfig {
    /// Field delimiter character (default: `,`).
    pub delimiter: char,

    /// Quoting policy applied to header names and field values.
    pub quote_policy: QuotePolicy,

    /// Emit a `#TYPE <name>` marker line before the header, recording the
    /// first declared type name of the output's origin objects. Cosmetic
    /// compatibility behavior for round-trip reimport (default: false).
    pub emit_type_marker: bool,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EncoderConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
            quote_policy: QuotePolicy::default(),
            emit_type_marker: false,
        }
    }

    /// Set the field delimiter (builder pattern).
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set the quoting policy (builder pattern).
    pub fn with_quote_policy(mut self, policy: QuotePolicy) -> Self {
        self.quote_policy = policy;
        self
    }

    /// Enable or disable the `#TYPE` marker line (builder pattern).
    pub fn with_type_marker(mut self, enable: bool) -> Self {
        self.emit_type_marker = enable;
        self
    }

    /// Check that the delimiter can be encoded unambiguously.
    ///
    /// The quote character and line breaks cannot serve as delimiters:
    /// quoting could no longer distinguish field boundaries from content.
    pub fn validate(&self) -> Result<()> {
        match self.delimiter {
            '"' | '\r' | '\n' => Err(Error::InvalidDelimiter(self.delimiter)),
            _ => Ok(()),
        }
    }
}
