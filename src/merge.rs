use crate::convert::{self, CsvMerge};
use crate::error::{MergeError, Result};
use crate::format::{OutputFormat, extension_set, select_format};
use crate::input::InputFile;

/// The packaged result of one merge call.
#[derive(Debug)]
pub struct MergeOutcome {
    /// Merged output, or `None` when no content survived conversion (only
    /// the CSV path can end up here).
    pub data: Option<Vec<u8>>,
    /// Output filename, `merged_document.<ext>`.
    pub filename: String,
    /// The format that was selected.
    pub format: OutputFormat,
    /// Human-readable warning: files ignored by the CSV merge, or the
    /// terminal "no CSV files" message when `data` is `None`.
    pub warning: Option<String>,
}

/// Merge a batch of files into a single document.
///
/// Selects the output format from the set of input extensions (or the
/// force-PDF flag), dispatches to the matching converter, and packages the
/// result. Stateless: nothing persists across calls. Per-file problems
/// degrade to annotations or warnings; an `Err` here means the whole batch
/// failed (no inputs, or output serialization).
pub fn process_files(files: &[InputFile], force_pdf: bool) -> Result<MergeOutcome> {
    if files.is_empty() {
        return Err(MergeError::NoInputFiles);
    }

    let format = select_format(&extension_set(files), force_pdf);
    let filename = format.output_filename();
    log::debug!("selected output format {format} for {} files", files.len());

    match format {
        OutputFormat::Pdf => Ok(MergeOutcome {
            data: Some(convert::merge_as_pdf(files)?),
            filename,
            format,
            warning: None,
        }),
        OutputFormat::Html => Ok(MergeOutcome {
            data: Some(convert::merge_as_html(files)),
            filename,
            format,
            warning: None,
        }),
        OutputFormat::Csv => {
            let CsvMerge { data, ignored } = convert::merge_as_csv(files)?;

            if data.is_none() {
                return Ok(MergeOutcome {
                    data: None,
                    filename,
                    format,
                    warning: Some("No CSV files found to merge.".to_string()),
                });
            }

            let warning = (!ignored.is_empty()).then(|| {
                format!(
                    "The following files were ignored to preserve the CSV format: {}",
                    ignored.join(", ")
                )
            });

            Ok(MergeOutcome {
                data,
                filename,
                format,
                warning,
            })
        }
        OutputFormat::Txt => Ok(MergeOutcome {
            data: Some(convert::merge_as_txt(files)),
            filename,
            format,
            warning: None,
        }),
    }
}
