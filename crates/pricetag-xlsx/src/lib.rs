//! Spreadsheet input for the price-tag generator.
//!
//! Reads the first worksheet of an `.xlsx` file into [`RowRecord`]s: row 1
//! is the header row (header text is used verbatim as the record key,
//! trailing spaces included), data starts at row 2, and rows whose cells
//! are all blank are dropped before they ever reach the rendering core.

use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, Reader, Xlsx};
use pricetag_model::{CellValue, RowRecord};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("{}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },
    #[error("{}: workbook contains no worksheets", path.display())]
    NoWorksheet { path: PathBuf },
    #[error("{}: {source}", path.display())]
    Worksheet {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },
}

/// Read all usable data rows from the first worksheet of `path`.
///
/// Header cells that are empty leave their whole column unmapped, matching
/// the convention that a column without a header carries no data.
pub fn read_rows(path: &Path) -> Result<Vec<RowRecord>, ReadError> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|source| ReadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ReadError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|source| ReadError::Worksheet {
            path: path.to_path_buf(),
            source,
        })?;

    let mut rows_iter = range.rows();
    let Some(header_row) = rows_iter.next() else {
        return Ok(Vec::new());
    };

    // Column index -> header text. Empty headers leave a None slot.
    let headers: Vec<Option<String>> = header_row
        .iter()
        .map(|cell| match cell {
            Data::Empty => None,
            other => {
                let text = other.to_string();
                if text.is_empty() {
                    None
                } else {
                    Some(text)
                }
            }
        })
        .collect();

    let mut out = Vec::new();
    for row in rows_iter {
        let mut record = RowRecord::new();
        for (idx, cell) in row.iter().enumerate() {
            let Some(Some(header)) = headers.get(idx) else {
                continue;
            };
            if let Some(value) = cell_value(cell) {
                record.insert(header.clone(), value);
            }
        }
        if record.is_empty() || record.is_blank() {
            continue;
        }
        out.push(record);
    }

    log::debug!("{}: {} usable rows", path.display(), out.len());
    Ok(out)
}

/// Map one cell to a model value. Empty and error cells are skipped so
/// their header key is simply absent from the record.
fn cell_value(cell: &Data) -> Option<CellValue> {
    match cell {
        Data::Empty => None,
        Data::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(CellValue::Text(s.clone()))
            }
        }
        Data::Float(f) => Some(CellValue::Number(*f)),
        Data::Int(n) => Some(CellValue::Number(*n as f64)),
        Data::Bool(b) => Some(CellValue::Text(b.to_string())),
        Data::DateTime(dt) => Some(CellValue::Text(dt.to_string())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(CellValue::Text(s.clone())),
        Data::Error(e) => {
            log::warn!("skipping error cell: {e:?}");
            None
        }
    }
}
