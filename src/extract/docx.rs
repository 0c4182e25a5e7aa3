use std::io::{Cursor, Read};

use quick_xml::Reader;
use quick_xml::events::Event;
use zip::ZipArchive;

use super::ExtractError;

/// Extract paragraph text from a DOCX file, joined with newlines.
///
/// A DOCX is a zip archive; the body lives in `word/document.xml`. Text runs
/// (`<w:t>`) are collected verbatim, and each paragraph boundary (`</w:p>`)
/// or explicit line break (`<w:br/>`) emits a newline.
pub fn docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;

    let mut xml = String::new();
    archive
        .by_name("word/document.xml")?
        .read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    let mut out = String::new();
    let mut in_run_text = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| ExtractError::DocxXml(e.to_string()))?;
        match event {
            Event::Start(e) if e.local_name().as_ref() == b"t" => in_run_text = true,
            Event::End(e) if e.local_name().as_ref() == b"t" => in_run_text = false,
            Event::End(e) if e.local_name().as_ref() == b"p" => out.push('\n'),
            Event::Empty(e) if e.local_name().as_ref() == b"br" => out.push('\n'),
            Event::Text(t) if in_run_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractError::DocxXml(e.to_string()))?;
                out.push_str(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(out)
}
