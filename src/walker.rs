use std::path::PathBuf;

use crate::error::{MergeError, Result};

/// Expand CLI input patterns into concrete file paths.
///
/// Each argument is treated as a glob pattern; a plain path matches itself.
/// A pattern that matches nothing is an error so typos do not silently
/// shrink the batch. Matches within one pattern come back in the sorted
/// order glob produces; pattern order is preserved.
pub fn resolve_input_paths<T>(patterns: T) -> Result<Vec<PathBuf>>
where
    T: IntoIterator,
    T::Item: AsRef<str>,
{
    let mut resolved = Vec::new();

    for pattern in patterns {
        let pattern = pattern.as_ref();
        let matches = resolve_pattern(pattern)?;
        if matches.is_empty() {
            return Err(MergeError::NoMatches {
                pattern: pattern.to_string(),
            });
        }
        resolved.extend(matches);
    }

    Ok(resolved)
}

fn resolve_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in glob::glob(pattern)? {
        let path = entry?;
        if path.is_file() {
            paths.push(path);
        }
    }

    Ok(paths)
}
