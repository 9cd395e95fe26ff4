//! Error types for building and serializing the presentation.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing or reading back a deck.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to create, write or read a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A shape was given a negative width or height.
    #[error("Invalid geometry on slide {slide}, shape {shape}: {reason}")]
    InvalidGeometry {
        slide: usize,
        shape: usize,
        reason: String,
    },

    /// ZIP archive error.
    #[error("ZIP error: {0}")]
    ZipError(String),

    /// XML generation or parsing error.
    #[error("XML error: {0}")]
    XmlError(String),

    /// Formatting into an in-memory XML buffer failed.
    #[error("XML formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),

    /// A part required by the package structure is absent.
    #[error("Missing package part: {0}")]
    MissingPart(String),

    /// A written deck does not match what was generated.
    #[error("Verification failed: {0}")]
    VerificationError(String),
}
