use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, MergeError>;

/// Errors that abort a whole merge call.
///
/// Per-file parse and decode problems never show up here; converters catch
/// those at the file boundary (see [`crate::extract::ExtractError`]) and turn
/// them into inline annotations or ignored-list entries.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    #[error("No input files to merge")]
    NoInputFiles,

    #[error("Failed to read input file: {}", path.display())]
    FailedToReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No files matched input pattern: {pattern}")]
    NoMatches { pattern: String },

    #[error("Failed to parse glob pattern: {0}")]
    FailedToParseGlobPattern(#[from] glob::PatternError),

    #[error("Failed to process glob entry: {0}")]
    FailedToProcessGlobEntry(#[from] glob::GlobError),

    #[error("Failed to assemble PDF output: {0}")]
    PdfAssembly(#[from] lopdf::Error),

    #[error("Failed to write merged CSV: {0}")]
    CsvSerialize(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
