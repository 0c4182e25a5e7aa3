use serde::Serialize;

use crate::input::InputFile;
use crate::merge::MergeOutcome;

/// Machine-readable summary of a merge, for the CLI's `--json` mode.
#[derive(Debug, Serialize)]
pub struct MergeReport {
    pub format: String,
    pub filename: String,
    pub output_bytes: usize,
    pub inputs: Vec<String>,
    pub warning: Option<String>,
}

impl MergeReport {
    pub fn new(files: &[InputFile], outcome: &MergeOutcome) -> Self {
        Self {
            format: outcome.format.to_string(),
            filename: outcome.filename.clone(),
            output_bytes: outcome.data.as_ref().map(Vec::len).unwrap_or(0),
            inputs: files.iter().map(|f| f.name.clone()).collect(),
            warning: outcome.warning.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
