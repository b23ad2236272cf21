use crate::commands::{ensure_not_input, print_json, Context, DEFAULT_INPUT};
use anyhow::{Context as _, Result};
use clap::Args;
use ilphone_core::{is_special_format, EntityId};
use ilphone_table::{read_rows, write_rows, InputRow};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Input CSV file [default: calls.csv]
    pub file: Option<PathBuf>,
    /// Output file [default: <output.dir>/<output.special_prefix>_<timestamp>.csv]
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct InspectReport {
    input: String,
    output: String,
    rows: usize,
    special_rows: usize,
}

pub fn inspect(ctx: &Context<'_>, args: InspectArgs) -> Result<()> {
    let input = args.file.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output = ctx.output_path(args.out, &ctx.config.output.special_prefix);
    ensure_not_input(&output, std::slice::from_ref(&input))?;

    let columns = ctx.columns();
    let rows = read_rows(&input, &columns)
        .with_context(|| format!("read input file {}", input.display()))?;
    let mut special: Vec<InputRow> = rows
        .iter()
        .filter(|row| row.phone.as_deref().is_some_and(is_special_format))
        .cloned()
        .collect();
    special.sort_by_cached_key(|row| EntityId::new(&row.entity).ok());

    write_rows(&output, &columns, &special)
        .with_context(|| format!("write output file {}", output.display()))?;
    info!(path = %output.display(), rows = special.len(), "special format rows written");

    let report = InspectReport {
        input: input.display().to_string(),
        output: output.display().to_string(),
        rows: rows.len(),
        special_rows: special.len(),
    };
    if ctx.json {
        return print_json(&report);
    }

    println!("Created file: {}", report.output);
    println!(
        "Special format rows: {} of {}",
        report.special_rows, report.rows
    );
    Ok(())
}
