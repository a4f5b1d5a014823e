//! Error types for the hantext library.

use std::io;
use thiserror::Error;

/// Result type alias for hantext operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during document resolution.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The page source is unavailable or unreadable. Fatal; no retry.
    #[error("Page source error: {0}")]
    PageSource(String),

    /// An OCR call failed or produced unusable output.
    ///
    /// Not fatal at the document level: the resolver degrades the affected
    /// page to an empty body and continues.
    #[error("Recognition error: {0}")]
    Recognition(String),

    /// The recognition engine or its language data could not be located.
    /// Fatal at startup, before any page is processed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Rasterization or image encoding failed on the OCR path.
    #[error("Image error: {0}")]
    Image(String),
}
