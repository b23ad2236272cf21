use crate::commands::{
    display_paths, ensure_not_input, input_files, load_records, print_json, Context,
};
use crate::report::{collect_examples, print_human, RunReport};
use anyhow::{Context as _, Result};
use clap::Args;
use ilphone_core::{normalize_with_summary, NormalizeOutcome, RawRecord};
use ilphone_table::write_processed;
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Args)]
pub struct NormalizeArgs {
    /// Input CSV files, read in order [default: calls.csv]
    pub files: Vec<PathBuf>,
    /// Output file [default: <output.dir>/<output.prefix>_<timestamp>.csv]
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub(crate) struct PipelineRun {
    pub files: Vec<PathBuf>,
    pub output: PathBuf,
    pub inputs: Vec<RawRecord>,
    pub outcome: NormalizeOutcome,
}

impl PipelineRun {
    pub fn report(&self, ctx: &Context<'_>, merged_rows: Option<usize>) -> RunReport {
        RunReport {
            inputs: display_paths(&self.files),
            output: self.output.display().to_string(),
            summary: self.outcome.summary,
            merged_rows,
            examples: collect_examples(
                &self.inputs,
                &self.outcome.records,
                ctx.config.output.examples,
            ),
        }
    }
}

pub(crate) fn run_pipeline(
    ctx: &Context<'_>,
    files: Vec<PathBuf>,
    out: Option<PathBuf>,
    prefix: &str,
) -> Result<PipelineRun> {
    let files = input_files(files);
    let output = ctx.output_path(out, prefix);
    ensure_not_input(&output, &files)?;

    let inputs = load_records(ctx, &files)?;
    let outcome = normalize_with_summary(&inputs);
    debug!(
        tokens = outcome.summary.tokens,
        rejected = outcome.summary.rejected_tokens,
        duplicates = outcome.summary.duplicates_removed,
        "normalization finished"
    );

    Ok(PipelineRun {
        files,
        output,
        inputs,
        outcome,
    })
}

pub fn normalize(ctx: &Context<'_>, args: NormalizeArgs) -> Result<()> {
    let run = run_pipeline(ctx, args.files, args.out, &ctx.config.output.prefix)?;
    write_processed(&run.output, &ctx.columns(), &run.outcome.records)
        .with_context(|| format!("write output file {}", run.output.display()))?;
    info!(
        path = %run.output.display(),
        rows = run.outcome.records.len(),
        "output written"
    );

    let report = run.report(ctx, None);
    if ctx.json {
        return print_json(&report);
    }
    print_human(&report);
    Ok(())
}
