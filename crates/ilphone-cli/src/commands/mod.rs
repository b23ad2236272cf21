use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use chrono::Utc;
use ilphone_config::AppConfig;
use ilphone_core::RawRecord;
use ilphone_table::{read_records, timestamped_output_path, Columns};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod completions;
pub mod inspect;
pub mod merge;
pub mod normalize;

pub const DEFAULT_INPUT: &str = "calls.csv";

pub struct Context<'a> {
    pub json: bool,
    pub config: &'a AppConfig,
}

impl Context<'_> {
    pub fn columns(&self) -> Columns {
        Columns::new(
            self.config.columns.entity.clone(),
            self.config.columns.phone.clone(),
        )
    }

    pub fn output_path(&self, explicit: Option<PathBuf>, prefix: &str) -> PathBuf {
        explicit
            .unwrap_or_else(|| timestamped_output_path(&self.config.output.dir, prefix, Utc::now()))
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn input_files(files: Vec<PathBuf>) -> Vec<PathBuf> {
    if files.is_empty() {
        return vec![PathBuf::from(DEFAULT_INPUT)];
    }
    files
}

/// Reads every input in order into one record sequence.
pub fn load_records(ctx: &Context<'_>, files: &[PathBuf]) -> Result<Vec<RawRecord>> {
    let columns = ctx.columns();
    let mut records = Vec::new();
    for file in files {
        let loaded = read_records(file, &columns)
            .with_context(|| format!("read input file {}", file.display()))?;
        info!(path = %file.display(), rows = loaded.len(), "input loaded");
        records.extend(loaded);
    }
    debug!(files = files.len(), rows = records.len(), "inputs combined");
    Ok(records)
}

pub fn ensure_not_input(output: &Path, inputs: &[PathBuf]) -> Result<()> {
    if inputs.iter().any(|input| same_file(input, output)) {
        return Err(invalid_input(format!(
            "output path is also an input: {}",
            output.display()
        )));
    }
    Ok(())
}

fn same_file(left: &Path, right: &Path) -> bool {
    if left == right {
        return true;
    }
    match (left.canonicalize(), right.canonicalize()) {
        (Ok(left), Ok(right)) => left == right,
        _ => false,
    }
}

pub fn display_paths(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect()
}
