//! Text extraction: document bytes → one linear text stream.
//!
//! No OCR and no layout reconstruction. PDF pages and DOCX paragraphs are
//! emitted in document order, separated by newlines.

pub mod docx;
pub mod pdf;

use tracing::debug;

use crate::errors::ParseError;
use crate::models::{DocumentFormat, RawDocument};

/// Extracts the line-preserving text of a document.
///
/// `.doc` is routed through the DOCX reader; a legacy binary Word file is not
/// an OOXML package and surfaces as `ParseFailure`.
pub fn extract(document: &RawDocument) -> Result<String, ParseError> {
    let format = document.format()?;
    let text = match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(&document.bytes),
        DocumentFormat::Docx | DocumentFormat::Doc => docx::extract_docx_text(&document.bytes),
    }
    .map_err(ParseError::ParseFailure)?;

    debug!(
        filename = %document.filename,
        ?format,
        chars = text.len(),
        "Extracted document text"
    );
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_extension_is_rejected_before_reading_bytes() {
        let doc = RawDocument::new("resume.txt", b"John Smith".to_vec());
        assert!(matches!(
            extract(&doc),
            Err(ParseError::UnsupportedFormat(ext)) if ext == "txt"
        ));
    }

    #[test]
    fn test_corrupt_pdf_is_parse_failure() {
        let doc = RawDocument::new("resume.pdf", b"definitely not a pdf".to_vec());
        assert!(matches!(extract(&doc), Err(ParseError::ParseFailure(_))));
    }

    #[test]
    fn test_legacy_doc_is_parse_failure() {
        let doc = RawDocument::new("resume.doc", vec![0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1]);
        assert!(matches!(extract(&doc), Err(ParseError::ParseFailure(_))));
    }

    #[test]
    fn test_docx_routes_through_docx_reader() {
        let bytes = docx::tests::build_docx(&["Jane Doe", "jane@example.com"]);
        let doc = RawDocument::new("Resume.DOCX", bytes);
        assert_eq!(extract(&doc).unwrap(), "Jane Doe\njane@example.com");
    }
}
