//! DOCX text extraction.
//!
//! A .docx file is a zip archive; the body lives in `word/document.xml`.
//! Text runs (`<w:t>`) are collected and each paragraph (`<w:p>`) ends a
//! line, so the normalizer sees the same shape a PDF page produces.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use super::ExtractError;

pub fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractError::Malformed(format!("docx: {e}")))?;

    let mut document = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractError::Malformed(format!("docx: no document body ({e})")))?
        .read_to_string(&mut document)
        .map_err(|e| ExtractError::Malformed(format!("docx: {e}")))?;

    read_paragraphs(&document)
}

fn read_paragraphs(document: &str) -> Result<String, ExtractError> {
    let mut reader = Reader::from_str(document);
    let mut text = String::new();
    let mut in_text_run = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.local_name().as_ref() == b"t" => in_text_run = true,
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text_run = false,
                b"p" => text.push('\n'),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text_run => {
                let run = t
                    .unescape()
                    .map_err(|e| ExtractError::Malformed(format!("docx: {e}")))?;
                text.push_str(&run);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ExtractError::Malformed(format!("docx: {e}"))),
            Ok(_) => {}
        }
    }

    Ok(text)
}
