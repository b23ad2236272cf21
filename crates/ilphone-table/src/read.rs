use crate::error::{Result, TableError};
use csv::{ReaderBuilder, StringRecord};
use ilphone_core::{EntityId, RawRecord};
use std::fs::File;
use std::path::Path;

const BOM: char = '\u{feff}';

/// Header names of the entity id and phone columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub entity: String,
    pub phone: String,
}

impl Columns {
    pub fn new(entity: impl Into<String>, phone: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            phone: phone.into(),
        }
    }
}

/// A data row as it appears in the file. `line` is the 1-based file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRow {
    pub line: usize,
    pub entity: String,
    pub phone: Option<String>,
}

pub fn read_rows(path: &Path, columns: &Columns) -> Result<Vec<InputRow>> {
    let file = File::open(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader
        .headers()
        .map_err(|source| csv_error(path, source))?
        .clone();
    let entity_idx = column_index(path, &headers, &columns.entity)?;
    let phone_idx = column_index(path, &headers, &columns.phone)?;

    let mut rows = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|source| csv_error(path, source))?;
        if record.iter().all(|field| field.trim().is_empty()) {
            continue;
        }
        let line = record
            .position()
            .map(|pos| pos.line() as usize)
            .unwrap_or(idx + 2);
        rows.push(InputRow {
            line,
            entity: record.get(entity_idx).unwrap_or_default().to_string(),
            phone: record
                .get(phone_idx)
                .filter(|value| !value.trim().is_empty())
                .map(str::to_string),
        });
    }
    Ok(rows)
}

pub fn read_records(path: &Path, columns: &Columns) -> Result<Vec<RawRecord>> {
    read_rows(path, columns)?
        .into_iter()
        .map(|row| {
            let entity_id = EntityId::new(&row.entity).map_err(|source| TableError::Row {
                path: path.to_path_buf(),
                line: row.line,
                source,
            })?;
            Ok(RawRecord::from_parts(entity_id, row.phone))
        })
        .collect()
}

fn column_index(path: &Path, headers: &StringRecord, column: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.trim_start_matches(BOM).trim() == column)
        .ok_or_else(|| TableError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

fn csv_error(path: &Path, source: csv::Error) -> TableError {
    TableError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
