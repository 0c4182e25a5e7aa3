use csv::{ReaderBuilder, StringRecord, Writer};

use crate::error::{MergeError, Result};
use crate::extract::{self, ExtractError};
use crate::input::InputFile;

/// A parsed CSV file: one header record plus data rows.
#[derive(Debug, Clone)]
pub(crate) struct Table {
    pub(crate) header: StringRecord,
    pub(crate) rows: Vec<StringRecord>,
}

/// Result of the CSV merge: output bytes (if any table parsed) plus the
/// names of inputs that were ignored.
#[derive(Debug)]
pub struct CsvMerge {
    pub data: Option<Vec<u8>>,
    pub ignored: Vec<String>,
}

/// Parse text as a CSV table with a header row.
///
/// Any malformed record rejects the whole file, as does an empty one.
pub(crate) fn parse_table(content: &str) -> std::result::Result<Table, ExtractError> {
    if content.trim().is_empty() {
        return Err(ExtractError::EmptyCsv);
    }

    let mut reader = ReaderBuilder::new().from_reader(content.as_bytes());
    let header = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        rows.push(record?);
    }

    Ok(Table { header, rows })
}

/// Stack all parseable CSV inputs into one table.
///
/// Non-CSV inputs and unparseable CSVs go into the ignored list. The first
/// successfully parsed file fixes the column schema: a later CSV whose
/// header differs is ignored rather than silently producing a malformed
/// concatenation. With zero parsed tables the data is `None` and the caller
/// reports that no CSV files were found.
pub fn merge_as_csv(files: &[InputFile]) -> Result<CsvMerge> {
    let mut tables: Vec<Table> = Vec::new();
    let mut ignored = Vec::new();

    for file in files {
        if file.extension() != "csv" {
            ignored.push(file.name.clone());
            continue;
        }

        let content = extract::decode_text(&file.data);
        match parse_table(&content) {
            Ok(table) => {
                if let Some(first) = tables.first()
                    && first.header != table.header
                {
                    log::warn!(
                        "ignoring {}: {}",
                        file.name,
                        ExtractError::CsvHeaderMismatch
                    );
                    ignored.push(file.name.clone());
                    continue;
                }
                tables.push(table);
            }
            Err(e) => {
                log::warn!("ignoring {}: {e}", file.name);
                ignored.push(file.name.clone());
            }
        }
    }

    let Some(first) = tables.first() else {
        return Ok(CsvMerge {
            data: None,
            ignored,
        });
    };

    let mut writer = Writer::from_writer(Vec::new());
    writer
        .write_record(&first.header)
        .map_err(|e| MergeError::CsvSerialize(e.to_string()))?;
    for table in &tables {
        for row in &table.rows {
            writer
                .write_record(row)
                .map_err(|e| MergeError::CsvSerialize(e.to_string()))?;
        }
    }

    let data = writer
        .into_inner()
        .map_err(|e| MergeError::CsvSerialize(e.to_string()))?;

    Ok(CsvMerge {
        data: Some(data),
        ignored,
    })
}
