//! Output format selection.
//!
//! The selector is a pure function of the *set* of input extensions plus the
//! force-PDF flag. It is a strict priority ladder, not a vote: one file of a
//! richer type promotes the whole batch so that no structure present in any
//! input is thrown away.

use std::collections::BTreeSet;
use std::fmt;

use crate::input::InputFile;

/// The single output format chosen for a merge call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Txt,
    Csv,
    Html,
    Pdf,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Html => "html",
            Self::Pdf => "pdf",
        }
    }

    /// Name of the merged output file.
    pub fn output_filename(&self) -> String {
        format!("merged_document.{}", self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Collect the set of lower-cased extensions present in the input list.
pub fn extension_set(files: &[InputFile]) -> BTreeSet<String> {
    files.iter().map(|f| f.extension()).collect()
}

/// Decide the output format for a set of input extensions.
///
/// Decision ladder, first match wins:
/// 1. `force_pdf` → PDF
/// 2. any `pdf` input → PDF
/// 3. any `html` or `md` input → HTML
/// 4. any `docx` input → HTML (plain text would discard its structure)
/// 5. any `csv` input: only `csv`/`txt` present → CSV, otherwise HTML
/// 6. anything else → TXT
///
/// Depends only on the extension set, never on file order.
pub fn select_format(extensions: &BTreeSet<String>, force_pdf: bool) -> OutputFormat {
    if force_pdf {
        return OutputFormat::Pdf;
    }

    if extensions.contains("pdf") {
        return OutputFormat::Pdf;
    }

    if extensions.contains("html") || extensions.contains("md") {
        return OutputFormat::Html;
    }

    if extensions.contains("docx") {
        return OutputFormat::Html;
    }

    if extensions.contains("csv") {
        let richer = extensions.iter().any(|e| e != "csv" && e != "txt");
        return if richer {
            OutputFormat::Html
        } else {
            OutputFormat::Csv
        };
    }

    OutputFormat::Txt
}
