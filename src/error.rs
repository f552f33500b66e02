//! Error types for the conversational signal classifier.
//!
//! Classification itself is total and never fails. Errors only arise at the
//! dynamic boundaries: parsing a language selector from a string, loading
//! configuration, and compiling the built-in pattern sources.

/// Errors that can occur at the crate's dynamic boundaries.
#[derive(Debug, thiserror::Error)]
pub enum SignalError {
    /// A language selector outside `en`, `de`, `both`.
    #[error("invalid language selector: {0}")]
    InvalidSelector(String),

    /// A built-in pattern source failed to compile.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// Configuration could not be parsed or serialized.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error while reading or writing configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, SignalError>;
