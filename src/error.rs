//! Error types for pdf-outline.

use std::io;
use thiserror::Error;

/// Result type alias for pdf-outline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading a document or writing its outline.
///
/// The classification pipeline itself never fails; every variant here
/// originates from file access, PDF parsing or serialization.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading a PDF or writing its JSON failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input does not start with a `%PDF-` header.
    #[error("not a PDF document")]
    UnknownFormat,

    #[error("unsupported PDF version '{0}'")]
    UnsupportedVersion(String),

    /// lopdf could not read the document structure.
    #[error("malformed PDF: {0}")]
    PdfParse(String),

    #[error("document is encrypted")]
    Encrypted,

    /// A page's content stream could not be turned into spans.
    #[error("cannot extract text: {0}")]
    TextExtract(String),

    /// A selected page lies past the end of the document: (page, page count).
    #[error("page {0} requested but document has {1} pages")]
    PageOutOfRange(u32, u32),

    /// A page selection string could not be parsed.
    #[error("invalid page selection '{0}'")]
    InvalidPageRange(String),

    /// Serializing an outline failed.
    #[error("cannot render outline: {0}")]
    Render(String),

    #[error("{0}")]
    Other(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Error::UnknownFormat.to_string(), "not a PDF document");
        assert_eq!(
            Error::PageOutOfRange(7, 3).to_string(),
            "page 7 requested but document has 3 pages"
        );
        assert_eq!(
            Error::InvalidPageRange("5-2".into()).to_string(),
            "invalid page selection '5-2'"
        );
    }

    #[test]
    fn test_from_io() {
        let err = Error::from(io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_from_lopdf_io() {
        let err = Error::from(lopdf::Error::IO(io::Error::from(io::ErrorKind::NotFound)));
        assert!(matches!(err, Error::Io(_)));
    }
}
