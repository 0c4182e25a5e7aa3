//! doccat - merge mixed-format documents into a single file.
//!
//! Takes an ordered batch of files (txt, md, html, csv, docx, pdf), picks
//! the output format that loses the least structure (or is forced to PDF),
//! and merges everything into one document. Individual files that fail to
//! decode or parse are annotated and skipped; they never abort the batch.
//!
//! The core contract is [`process_files`], which is stateless and
//! synchronous so any front end (CLI, web form, batch job) can drive it.

mod error;
pub use error::*;

pub mod convert;
pub mod extract;
pub mod format;
pub mod input;
mod merge;
pub mod report;
pub mod walker;

pub use format::{OutputFormat, select_format};
pub use input::InputFile;
pub use merge::{MergeOutcome, process_files};
