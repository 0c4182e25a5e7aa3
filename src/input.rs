use std::path::Path;

use crate::error::{MergeError, Result};

/// A named, fully buffered input file.
///
/// Several conversion paths read the same bytes more than once (text
/// extraction, the PDF salvage path), so the data must stay re-readable from
/// the start for the whole merge call.
#[derive(Debug, Clone)]
pub struct InputFile {
    /// Filename as supplied by the caller, used to derive the extension.
    pub name: String,
    /// Raw file contents.
    pub data: Vec<u8>,
}

impl InputFile {
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Read a file from disk into an [`InputFile`].
    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read(path).map_err(|source| MergeError::FailedToReadInput {
            path: path.to_path_buf(),
            source,
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self { name, data })
    }

    /// Lower-cased suffix after the last `.`.
    ///
    /// A name without a dot yields the whole name; a trailing dot yields the
    /// empty string. The extension is a pure format discriminator and is
    /// never validated against the actual content.
    pub fn extension(&self) -> String {
        self.name
            .rsplit('.')
            .next()
            .unwrap_or_default()
            .to_lowercase()
    }

    /// File size in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }
}
