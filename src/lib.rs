//! # DSV Oxide
//!
//! Delimited-record encoding toolkit: stream named-field records to CSV and
//! friends with configurable quoting.
//!
//! ## Core Features
//!
//! - **Streaming protocol**: the column set is fixed once — from an explicit
//!   header or from the first record — and reused for every row
//! - **Quoting policies**: quote always, as needed, never, or exactly a named
//!   set of fields (case-insensitive)
//! - **Lossy value rendering**: a field that cannot render never fails its
//!   row; it serializes as empty
//! - **Type markers**: optional `#TYPE <name>` line for round-trip reimport
//!   compatibility
//! - **Pluggable sinks**: the encoder produces lines; [`RecordWriter`] adapts
//!   any `std::io::Write`
//!
//! ## Quick Start
//!
//! ```
//! use dsv_oxide::{encode_to_string, EncoderConfig, QuotePolicy, Record};
//!
//! let records = vec![
//!     Record::new().with_field("Name", "notes.txt").with_field("Length", 120i64),
//!     Record::new().with_field("Name", "a,b.txt").with_field("Length", 64i64),
//! ];
//!
//! let config = EncoderConfig::new().with_quote_policy(QuotePolicy::AsNeeded);
//! let text = encode_to_string(&records, config)?;
//! assert_eq!(text, "Name,Length\nnotes.txt,120\n\"a,b.txt\",64\n");
//! # Ok::<(), dsv_oxide::Error>(())
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Data model
pub mod fields;
pub mod record;

// Quoting policy
pub mod policy;

// Configuration
pub mod config;

// Core encoding
pub mod encoder;

// Sink adapter
pub mod writer;

// Re-exports
pub use config::{EncoderConfig, DEFAULT_DELIMITER};
pub use encoder::DelimitedRecordEncoder;
pub use error::{Error, Result};
pub use fields::FieldSet;
pub use policy::{QuoteFieldSet, QuotePolicy};
pub use record::{Record, Value};
pub use writer::{encode_to_string, RecordWriter};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        // VERSION is populated from CARGO_PKG_VERSION at compile time
        assert!(VERSION.starts_with("0."));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "dsv_oxide");
    }
}
