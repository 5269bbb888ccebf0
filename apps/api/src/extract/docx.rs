use std::io::{Cursor, Read};

use anyhow::{Context, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Paragraph texts of an OOXML word document, in document order, joined
/// with `\n`. Paragraphs inside tables are included.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String> {
    let mut archive =
        ZipArchive::new(Cursor::new(bytes)).context("Document is not a valid DOCX package")?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .with_context(|| format!("DOCX package has no {DOCUMENT_PART}"))?
        .read_to_string(&mut xml)
        .with_context(|| format!("Failed to read {DOCUMENT_PART}"))?;

    Ok(paragraphs(&xml)?.join("\n"))
}

fn paragraphs(xml: &str) -> Result<Vec<String>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(false);

    let mut paragraphs = Vec::new();
    let mut current: Option<String> = None;
    let mut in_text_run = false;

    loop {
        match reader
            .read_event()
            .context("Malformed XML in DOCX document part")?
        {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => current = Some(String::new()),
                b"w:t" => in_text_run = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.extend(current.take()),
                b"w:t" => in_text_run = false,
                _ => {}
            },
            Event::Empty(e) => match e.name().as_ref() {
                b"w:p" => paragraphs.push(String::new()),
                b"w:tab" => push_text(&mut current, "\t"),
                b"w:br" | b"w:cr" => push_text(&mut current, "\n"),
                _ => {}
            },
            Event::Text(t) if in_text_run => {
                let text = t.unescape().context("Invalid escape in DOCX text run")?;
                push_text(&mut current, &text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_text(current: &mut Option<String>, text: &str) {
    if let Some(paragraph) = current.as_mut() {
        paragraph.push_str(text);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    /// Builds a minimal DOCX package with one `w:p` per paragraph.
    pub(crate) fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
            .collect();
        build_docx_from_body(&body)
    }

    pub(crate) fn build_docx_from_body(body: &str) -> Vec<u8> {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
        );

        let mut buffer = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
            let options =
                SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
            zip.start_file("[Content_Types].xml", options).unwrap();
            zip.write_all(br#"<?xml version="1.0"?><Types/>"#).unwrap();
            zip.start_file(DOCUMENT_PART, options).unwrap();
            zip.write_all(xml.as_bytes()).unwrap();
            zip.finish().unwrap();
        }
        buffer
    }

    #[test]
    fn test_paragraphs_joined_in_order() {
        let bytes = build_docx(&["Jane Doe", "Skills", "Languages: Rust, Go"]);
        assert_eq!(
            extract_docx_text(&bytes).unwrap(),
            "Jane Doe\nSkills\nLanguages: Rust, Go"
        );
    }

    #[test]
    fn test_runs_within_paragraph_are_concatenated() {
        let body = "<w:p><w:r><w:t>Jane</w:t></w:r><w:r><w:t xml:space=\"preserve\"> Doe</w:t></w:r></w:p>";
        let bytes = build_docx_from_body(body);
        assert_eq!(extract_docx_text(&bytes).unwrap(), "Jane Doe");
    }

    #[test]
    fn test_tabs_breaks_and_empty_paragraphs() {
        let body = "<w:p><w:r><w:t>A</w:t><w:tab/><w:t>B</w:t><w:br/><w:t>C</w:t></w:r></w:p><w:p/><w:p><w:r><w:t>D</w:t></w:r></w:p>";
        let bytes = build_docx_from_body(body);
        assert_eq!(extract_docx_text(&bytes).unwrap(), "A\tB\nC\n\nD");
    }

    #[test]
    fn test_entities_are_unescaped() {
        let bytes = build_docx(&["R&amp;D &lt;Team&gt;"]);
        assert_eq!(extract_docx_text(&bytes).unwrap(), "R&D <Team>");
    }

    #[test]
    fn test_non_text_elements_ignored() {
        let body = "<w:p><w:r><w:instrText>HYPERLINK x</w:instrText><w:t>Link</w:t></w:r></w:p>";
        let bytes = build_docx_from_body(body);
        assert_eq!(extract_docx_text(&bytes).unwrap(), "Link");
    }

    #[test]
    fn test_missing_document_part_errors() {
        let mut buffer = Vec::new();
        {
            let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
            zip.start_file("other.xml", SimpleFileOptions::default())
                .unwrap();
            zip.write_all(b"<x/>").unwrap();
            zip.finish().unwrap();
        }
        let err = extract_docx_text(&buffer).unwrap_err();
        assert!(err.to_string().contains(DOCUMENT_PART));
    }

    #[test]
    fn test_not_a_zip_errors() {
        assert!(extract_docx_text(b"plain text").is_err());
    }
}
