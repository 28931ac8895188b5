//! PDF header sniffing and file-name checks.
//!
//! Inputs are checked for the `%PDF-x.y` magic before they reach lopdf.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const PDF_MAGIC: &[u8] = b"%PDF-";
const HEADER_LEN: usize = PDF_MAGIC.len() + 3;

/// Version information read from a PDF header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfHeader {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// Read the header of the file at `path`.
pub fn sniff_file<P: AsRef<Path>>(path: P) -> Result<PdfHeader> {
    let mut header = [0u8; HEADER_LEN];
    File::open(path)?
        .read_exact(&mut header)
        .map_err(|_| Error::UnknownFormat)?;
    sniff_bytes(&header)
}

/// Read the header from the leading bytes of a document.
pub fn sniff_bytes(data: &[u8]) -> Result<PdfHeader> {
    if data.len() < HEADER_LEN || !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version = String::from_utf8_lossy(&data[PDF_MAGIC.len()..HEADER_LEN]).to_string();
    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(PdfHeader { version })
}

/// Whether the path ends in `.pdf`, ignoring case.
pub fn has_pdf_extension<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}

fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3
        && matches!(bytes[0], b'1' | b'2')
        && bytes[1] == b'.'
        && bytes[2].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_valid_header() {
        let header = sniff_bytes(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").unwrap();
        assert_eq!(header.version, "1.7");
        assert_eq!(header.to_string(), "PDF 1.7");
    }

    #[test]
    fn test_sniff_rejects_html() {
        let result = sniff_bytes(b"<!DOCTYPE html><html></html>");
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_sniff_too_short() {
        assert!(matches!(sniff_bytes(b"%PDF"), Err(Error::UnknownFormat)));
        assert!(matches!(sniff_bytes(b""), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_sniff_bad_version() {
        let result = sniff_bytes(b"%PDF-x.y\n");
        assert!(matches!(result, Err(Error::UnsupportedVersion(_))));
    }

    #[test]
    fn test_has_pdf_extension() {
        assert!(has_pdf_extension("report.pdf"));
        assert!(has_pdf_extension("REPORT.PDF"));
        assert!(!has_pdf_extension("report.pdf.json"));
        assert!(!has_pdf_extension("README"));
    }
}
