use lopdf::Document;

use super::ExtractError;

/// Extract the text of every page of a PDF, joined with newlines.
///
/// Pages whose text extraction fails contribute an empty string; only a
/// document that cannot be loaded at all is an error.
pub fn pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let document = Document::load_mem(bytes)?;

    let mut out = String::new();
    for (page_number, _) in document.get_pages() {
        match document.extract_text(&[page_number]) {
            Ok(text) => out.push_str(&text),
            Err(e) => {
                log::warn!("failed to extract text from page {page_number}: {e}");
            }
        }
        out.push('\n');
    }

    Ok(out)
}
