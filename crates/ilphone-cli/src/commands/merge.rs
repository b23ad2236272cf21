use crate::commands::normalize::run_pipeline;
use crate::commands::{print_json, Context};
use crate::report::print_human;
use anyhow::{Context as _, Result};
use clap::Args;
use ilphone_core::merge_by_entity;
use ilphone_table::write_merged;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct MergeArgs {
    /// Input CSV files, read in order [default: calls.csv]
    pub files: Vec<PathBuf>,
    /// Output file [default: <output.dir>/<output.merged_prefix>_<timestamp>.csv]
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn merge(ctx: &Context<'_>, args: MergeArgs) -> Result<()> {
    let run = run_pipeline(ctx, args.files, args.out, &ctx.config.output.merged_prefix)?;
    let merged = merge_by_entity(&run.outcome.records);
    write_merged(&run.output, &ctx.columns(), &merged)
        .with_context(|| format!("write output file {}", run.output.display()))?;
    info!(
        path = %run.output.display(),
        entities = merged.len(),
        "merged output written"
    );

    let report = run.report(ctx, Some(merged.len()));
    if ctx.json {
        return print_json(&report);
    }
    print_human(&report);
    Ok(())
}
