//! Document-to-text conversion for uploaded résumés (PDF and DOCX only).

use std::io::{Cursor, Read};

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Only PDF/DOCX allowed (got '{0}')")]
    UnsupportedType(String),

    #[error("Could not read PDF: {0}")]
    Pdf(String),

    #[error("Could not read DOCX: {0}")]
    Docx(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

impl DocumentKind {
    /// Picks the converter from the text after the last "." in the file name.
    pub fn from_file_name(file_name: &str) -> Result<Self, DocumentError> {
        let extension = file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .unwrap_or(file_name)
            .to_ascii_lowercase();

        match extension.as_str() {
            "pdf" => Ok(DocumentKind::Pdf),
            "docx" => Ok(DocumentKind::Docx),
            _ => Err(DocumentError::UnsupportedType(extension)),
        }
    }
}

/// Converts raw document bytes into a single text blob.
///
/// CPU-bound; async callers should run this on the blocking pool.
pub fn extract_text(kind: DocumentKind, data: &[u8]) -> Result<String, DocumentError> {
    match kind {
        DocumentKind::Pdf => {
            pdf_extract::extract_text_from_mem(data).map_err(|e| DocumentError::Pdf(e.to_string()))
        }
        DocumentKind::Docx => extract_docx_text(data),
    }
}

fn extract_docx_text(data: &[u8]) -> Result<String, DocumentError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(data)).map_err(docx_err)?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(docx_err)?
        .read_to_string(&mut xml)
        .map_err(docx_err)?;

    let mut reader = Reader::from_str(&xml);

    // One buffer per open `w:p`; text boxes nest paragraphs inside paragraphs.
    let mut open_paragraphs: Vec<String> = Vec::new();
    let mut lines = Vec::new();
    // Only `w:t` runs are visible text (not `w:delText` or `w:instrText`).
    let mut in_text_run = false;

    loop {
        match reader.read_event().map_err(docx_err)? {
            Event::Start(e) => match e.name().as_ref() {
                b"w:p" => open_paragraphs.push(String::new()),
                b"w:t" => in_text_run = true,
                _ => {}
            },
            Event::End(e) => match e.name().as_ref() {
                b"w:p" => {
                    if let Some(paragraph) = open_paragraphs.pop() {
                        let line = paragraph.trim();
                        if !line.is_empty() {
                            lines.push(line.to_string());
                        }
                    }
                }
                b"w:t" => in_text_run = false,
                _ => {}
            },
            Event::Empty(e) => {
                if let Some(current) = open_paragraphs.last_mut() {
                    match e.name().as_ref() {
                        b"w:tab" => current.push('\t'),
                        b"w:br" | b"w:cr" => current.push('\n'),
                        _ => {}
                    }
                }
            }
            Event::Text(e) if in_text_run => {
                if let Some(current) = open_paragraphs.last_mut() {
                    current.push_str(&e.xml_content().map_err(docx_err)?);
                }
            }
            Event::GeneralRef(e) if in_text_run => {
                let Some(current) = open_paragraphs.last_mut() else {
                    continue;
                };
                if let Some(ch) = e.resolve_char_ref().map_err(docx_err)? {
                    current.push(ch);
                } else {
                    let name = e.decode().map_err(docx_err)?;
                    if let Some(resolved) = resolve_predefined_entity(&name) {
                        current.push_str(resolved);
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(lines.join("\n"))
}

fn docx_err(err: impl std::fmt::Display) -> DocumentError {
    DocumentError::Docx(err.to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use zip::write::SimpleFileOptions;

    use super::*;

    /// Builds a minimal DOCX archive with one `w:p` per paragraph.
    pub(crate) fn docx_bytes(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t xml:space=\"preserve\">{p}</w:t></w:r></w:p>"))
            .collect();
        let xml = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
             <w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body>{body}</w:body></w:document>"
        );

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(xml.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_file_name("cv.pdf").unwrap(), DocumentKind::Pdf);
        assert_eq!(
            DocumentKind::from_file_name("My.Resume.DOCX").unwrap(),
            DocumentKind::Docx
        );
    }

    #[test]
    fn test_unsupported_extension() {
        let err = DocumentKind::from_file_name("resume.txt").unwrap_err();
        assert!(matches!(err, DocumentError::UnsupportedType(ref ext) if ext == "txt"));
        assert!(DocumentKind::from_file_name("resume").is_err());
        assert!(DocumentKind::from_file_name("resume.doc").is_err());
    }

    #[test]
    fn test_docx_paragraphs_become_lines() {
        let data = docx_bytes(&["Jane Doe", "", "Senior Engineer", "- Built systems"]);
        let text = extract_text(DocumentKind::Docx, &data).unwrap();
        assert_eq!(text, "Jane Doe\nSenior Engineer\n- Built systems");
    }

    #[test]
    fn test_docx_entities_resolved() {
        let data = docx_bytes(&["R&amp;D Lead"]);
        let text = extract_text(DocumentKind::Docx, &data).unwrap();
        assert_eq!(text, "R&D Lead");
    }

    #[test]
    fn test_docx_tabs_and_breaks() {
        let xml_para = "Engineer</w:t><w:tab/><w:t>2020</w:t><w:br/><w:t>Acme";
        let data = docx_bytes(&[xml_para]);
        let text = extract_text(DocumentKind::Docx, &data).unwrap();
        assert_eq!(text, "Engineer\t2020\nAcme");
    }

    #[test]
    fn test_docx_skips_deleted_and_field_code_runs() {
        let xml_para = "Jane</w:t></w:r>\
            <w:r><w:delText>OLDNAME</w:delText></w:r>\
            <w:r><w:instrText xml:space=\"preserve\"> HYPERLINK \"mailto:old@example.com\" </w:instrText></w:r>\
            <w:r><w:t xml:space=\"preserve\"> Doe";
        let data = docx_bytes(&[xml_para]);
        let text = extract_text(DocumentKind::Docx, &data).unwrap();
        assert_eq!(text, "Jane Doe");
    }

    #[test]
    fn test_docx_text_box_keeps_enclosing_paragraph() {
        let xml_para = "Senior Engineer at Acme</w:t></w:r>\
            <w:r><w:pict><w:txbxContent><w:p><w:r><w:t>Box</w:t></w:r></w:p></w:txbxContent></w:pict></w:r>\
            <w:r><w:t xml:space=\"preserve\"> 2020-2022";
        let data = docx_bytes(&[xml_para]);
        let text = extract_text(DocumentKind::Docx, &data).unwrap();
        assert_eq!(text, "Box\nSenior Engineer at Acme 2020-2022");
    }

    #[test]
    fn test_garbage_docx_is_error() {
        let err = extract_text(DocumentKind::Docx, b"not a zip").unwrap_err();
        assert!(matches!(err, DocumentError::Docx(_)));
    }

    #[test]
    fn test_docx_without_document_xml_is_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/other.xml", SimpleFileOptions::default())
            .unwrap();
        writer.write_all(b"<x/>").unwrap();
        let data = writer.finish().unwrap().into_inner();

        assert!(matches!(
            extract_text(DocumentKind::Docx, &data),
            Err(DocumentError::Docx(_))
        ));
    }
}
