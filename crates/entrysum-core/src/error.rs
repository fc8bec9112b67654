//! Error types for the entrysum-core library.

use thiserror::Error;

/// Main error type for entry summary parsing.
///
/// Missing fields are never errors: every per-field extractor degrades to
/// `None` and parsing continues. The source documents are noisy enough that
/// strict matching would make the parser useless.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The text carries neither "ENTRY SUMMARY" nor "CBP Form 7501".
    /// The caller must reject the upload; there is no partial result.
    #[error("this does not appear to be a CBP Form 7501 Entry Summary")]
    UnrecognizedFormat,
}

/// Result type for the entrysum library.
pub type Result<T> = std::result::Result<T, ParseError>;
