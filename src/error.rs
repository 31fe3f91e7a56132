//! Error types for the delimited-record encoding library.
//!
//! This module defines all error types that can occur while configuring an
//! encoder and streaming records through it.

/// Result type alias for encoding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during delimited-record encoding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The encoder's field set was established and a second initialization was attempted
    #[error("Encoder already initialized: the field set is fixed once per encoder instance")]
    AlreadyInitialized,

    /// A header or record was encoded before the field set was established
    #[error("Encoder not initialized: establish a field set before encoding")]
    NotInitialized,

    /// The field-name collection used to initialize the encoder was empty
    #[error("Empty field set: at least one field name is required")]
    EmptyFieldSet,

    /// Two field names collide under case-insensitive comparison
    #[error("Duplicate field name: '{0}'")]
    DuplicateField(String),

    /// The configured delimiter cannot be encoded unambiguously
    #[error("Invalid delimiter: {0:?} cannot be used as a field separator")]
    InvalidDelimiter(char),

    /// IO error from the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
