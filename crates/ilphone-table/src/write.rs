use crate::error::{Result, TableError};
use crate::read::{Columns, InputRow};
use csv::Writer;
use ilphone_core::{MergedRecord, ProcessedRecord};
use std::fs::{self, File};
use std::io::Write as _;
use std::path::Path;

// Lets spreadsheet applications detect UTF-8 (the default headers are Hebrew).
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub fn write_processed(
    path: &Path,
    columns: &Columns,
    records: &[ProcessedRecord],
) -> Result<()> {
    let rows = records
        .iter()
        .map(|record| [record.entity_id.as_str(), record.formatted()]);
    write_table(path, columns, rows)
}

pub fn write_merged(path: &Path, columns: &Columns, records: &[MergedRecord]) -> Result<()> {
    let joined: Vec<(&str, String)> = records
        .iter()
        .map(|record| (record.entity_id.as_str(), record.joined()))
        .collect();
    let rows = joined
        .iter()
        .map(|(entity, phones)| [*entity, phones.as_str()]);
    write_table(path, columns, rows)
}

pub fn write_rows(path: &Path, columns: &Columns, rows: &[InputRow]) -> Result<()> {
    let rows = rows
        .iter()
        .map(|row| [row.entity.as_str(), row.phone.as_deref().unwrap_or_default()]);
    write_table(path, columns, rows)
}

fn write_table<'a, I>(path: &Path, columns: &Columns, rows: I) -> Result<()>
where
    I: IntoIterator<Item = [&'a str; 2]>,
{
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut file = File::create(path)?;
    file.write_all(UTF8_BOM)?;
    let mut writer = Writer::from_writer(file);
    let csv_error = |source: csv::Error| TableError::Csv {
        path: path.to_path_buf(),
        source,
    };

    writer
        .write_record([columns.entity.as_str(), columns.phone.as_str()])
        .map_err(csv_error)?;
    for row in rows {
        writer.write_record(row).map_err(csv_error)?;
    }
    writer.flush()?;
    Ok(())
}
