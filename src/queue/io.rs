//! Reading and writing the queue file.

use super::{KEYWORD_COLUMN, KeywordRecord, QueueSnapshot, STATUS_COLUMN, Status};
use crate::error::{HelpgenError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

impl QueueSnapshot {
    /// Load the whole queue file.
    ///
    /// Fails with `StoreUnavailable` when the file cannot be opened or read,
    /// and `StoreCorrupt` when its contents do not have the expected shape.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            HelpgenError::StoreUnavailable(format!(
                "failed to open queue file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let snapshot = Self::from_reader(file)?;
        tracing::debug!(
            path = %path.display(),
            records = snapshot.len(),
            pending = snapshot.pending_count(),
            "loaded keyword queue"
        );
        Ok(snapshot)
    }

    /// Parse a queue from CSV text.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut content = Vec::new();
        reader.read_to_end(&mut content).map_err(|e| {
            HelpgenError::StoreUnavailable(format!("failed to read queue: {}", e))
        })?;

        // The csv reader drops a leading BOM silently; note it so save restores it.
        let bom = content.starts_with(UTF8_BOM);
        let body = if bom {
            &content[UTF8_BOM.len()..]
        } else {
            &content[..]
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(body);

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| csv_error("failed to read header", e))?
            .iter()
            .map(str::to_string)
            .collect();

        let keyword_col = find_column(&columns, KEYWORD_COLUMN)?;
        let status_col = find_column(&columns, STATUS_COLUMN)?;

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row_number = index + 1;
            let row = row.map_err(|e| csv_error(&format!("row {}", row_number), e))?;

            let keyword = row.get(keyword_col).unwrap_or_default().to_string();
            if keyword.trim().is_empty() {
                return Err(HelpgenError::StoreCorrupt(format!(
                    "row {}: keyword is empty",
                    row_number
                )));
            }

            let raw_status = row.get(status_col).unwrap_or_default();
            let status = Status::from_code(raw_status).ok_or_else(|| {
                HelpgenError::StoreCorrupt(format!(
                    "row {}: unknown status '{}' for keyword '{}' (expected 0 or 1)",
                    row_number, raw_status, keyword
                ))
            })?;

            let extra = row
                .iter()
                .enumerate()
                .filter(|(col, _)| *col != keyword_col && *col != status_col)
                .map(|(_, value)| value.to_string())
                .collect();

            records.push(KeywordRecord {
                keyword,
                status,
                extra,
            });
        }

        Ok(Self {
            columns,
            bom,
            keyword_col,
            status_col,
            records,
        })
    }

    /// Atomically replace the queue file with this snapshot.
    ///
    /// The new content is written to a sibling temporary file and renamed
    /// over the original, so a failure at any point leaves the previous
    /// file intact.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = self.to_csv()?;

        crate::fs::atomic_write(path, &content).map_err(|e| {
            HelpgenError::StoreUnavailable(format!(
                "failed to write queue file '{}': {}",
                path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %path.display(), records = self.len(), "saved keyword queue");
        Ok(())
    }

    /// Serialize the snapshot: header first, then every record in order.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        let prefix = if self.bom { UTF8_BOM.to_vec() } else { Vec::new() };
        let mut writer = csv::Writer::from_writer(prefix);

        writer
            .write_record(&self.columns)
            .map_err(|e| serialize_error(e.to_string()))?;

        for record in &self.records {
            writer
                .write_record(self.row_fields(record))
                .map_err(|e| serialize_error(e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| serialize_error(e.to_string()))
    }

    fn row_fields<'a>(&self, record: &'a KeywordRecord) -> Vec<&'a str> {
        let mut extra = record.extra.iter();
        (0..self.columns.len())
            .map(|col| {
                if col == self.keyword_col {
                    record.keyword.as_str()
                } else if col == self.status_col {
                    record.status.code()
                } else {
                    extra.next().map(String::as_str).unwrap_or_default()
                }
            })
            .collect()
    }
}

fn find_column(columns: &[String], name: &str) -> Result<usize> {
    columns.iter().position(|c| c.trim() == name).ok_or_else(|| {
        HelpgenError::StoreCorrupt(format!(
            "missing '{}' column (found: {})",
            name,
            if columns.is_empty() {
                "no header".to_string()
            } else {
                columns.join(", ")
            }
        ))
    })
}

fn csv_error(context: &str, err: csv::Error) -> HelpgenError {
    match err.kind() {
        csv::ErrorKind::Io(_) => {
            HelpgenError::StoreUnavailable(format!("{}: {}", context, err))
        }
        _ => HelpgenError::StoreCorrupt(format!("{}: {}", context, err)),
    }
}

fn serialize_error(message: String) -> HelpgenError {
    HelpgenError::StoreUnavailable(format!("failed to serialize queue: {}", message))
}
