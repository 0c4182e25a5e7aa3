//! Content readers: raw bytes → text, per input format.
//!
//! Every reader is infallible or returns a typed [`ExtractError`]; converters
//! catch these at the file boundary so a bad file never aborts the batch.

mod docx;
mod pdf;
mod text;

pub use docx::docx_text;
pub use pdf::pdf_text;
pub use text::decode_text;

use crate::input::InputFile;

/// A per-file extraction failure.
///
/// These are always recoverable: the owning converter substitutes an inline
/// error note (TXT/HTML) or an ignored-list entry (CSV) and moves on.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("could not parse PDF: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("could not open DOCX archive: {0}")]
    DocxArchive(#[from] zip::result::ZipError),

    #[error("could not parse DOCX document: {0}")]
    DocxXml(String),

    #[error("could not parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV file is empty")]
    EmptyCsv,

    #[error("CSV header does not match the first merged file")]
    CsvHeaderMismatch,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read a file's content as text, routing by extension.
///
/// PDF and DOCX go through structured extraction; everything else is decoded
/// as raw text, which cannot fail.
pub fn read_content(file: &InputFile) -> Result<String, ExtractError> {
    match file.extension().as_str() {
        "pdf" => pdf_text(&file.data),
        "docx" => docx_text(&file.data),
        _ => Ok(decode_text(&file.data)),
    }
}
