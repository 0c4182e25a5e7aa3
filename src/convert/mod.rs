//! Per-format converters.
//!
//! Each converter consumes the full input list and produces one output
//! format. Per-file failures degrade to inline annotations or ignored-list
//! entries; a converter only returns an error for whole-batch problems such
//! as output serialization.

mod csv;
mod html;
mod pdf;
mod txt;
mod typeset;

pub use self::csv::{CsvMerge, merge_as_csv};
pub use self::html::merge_as_html;
pub use self::pdf::merge_as_pdf;
pub use self::txt::merge_as_txt;
