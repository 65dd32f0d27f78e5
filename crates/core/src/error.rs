//! Error types for deck assembly and PPTX serialization.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while assembling or writing a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to read or write a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// An embedded slide table could not be parsed.
    #[error("Slide table error: {0}")]
    TemplateError(String),

    /// ZIP archive error (for PPTX).
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML writing or parsing error (for PPTX).
    #[error("XML error: {0}")]
    XmlError(String),

    /// A package part is missing or malformed.
    #[error("Invalid or corrupted file: {0}")]
    CorruptedFile(String),

    /// A written deck did not read back as expected.
    #[error("Verification failed: {0}")]
    VerificationFailed(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::TemplateError(e.to_string())
    }
}
