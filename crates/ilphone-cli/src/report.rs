use ilphone_core::{NormalizeSummary, ProcessedRecord, RawRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    pub entity_id: String,
    pub raw: Vec<String>,
    pub formatted: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub inputs: Vec<String>,
    pub output: String,
    pub summary: NormalizeSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merged_rows: Option<usize>,
    pub examples: Vec<Example>,
}

/// Before/after view of the first `limit` entities, in input order.
pub fn collect_examples(
    inputs: &[RawRecord],
    records: &[ProcessedRecord],
    limit: usize,
) -> Vec<Example> {
    let mut examples: Vec<Example> = Vec::new();
    if limit == 0 {
        return examples;
    }

    for input in inputs {
        let id = input.entity_id().as_str();
        let raw = input.raw_phone().map(str::to_string);
        if let Some(example) = examples.iter_mut().find(|example| example.entity_id == id) {
            example.raw.extend(raw);
            continue;
        }
        if examples.len() < limit {
            examples.push(Example {
                entity_id: id.to_string(),
                raw: raw.into_iter().collect(),
                formatted: Vec::new(),
            });
        }
    }

    for example in &mut examples {
        example.formatted = records
            .iter()
            .filter(|record| record.entity_id.as_str() == example.entity_id)
            .map(|record| record.formatted().to_string())
            .collect();
    }
    examples
}

pub fn render_human(report: &RunReport) -> Vec<String> {
    let summary = &report.summary;
    let mut lines = vec![
        "Processing summary:".to_string(),
        format!("  input files: {}", report.inputs.join(", ")),
        format!("  output file: {}", report.output),
        format!("  original rows: {}", summary.input_rows),
        format!("  rows without a valid number: {}", summary.rows_without_numbers),
        format!(
            "  tokens examined: {} (rejected {})",
            summary.tokens, summary.rejected_tokens
        ),
        format!("  duplicates removed: {}", summary.duplicates_removed),
        format!(
            "  processed rows: {} (mobile {}, landline {})",
            summary.output_records, summary.mobile, summary.landline
        ),
    ];
    if let Some(merged) = report.merged_rows {
        lines.push(format!("  merged rows: {merged}"));
    }

    if report.examples.is_empty() {
        return lines;
    }
    lines.push("Example transformations:".to_string());
    for example in &report.examples {
        lines.push(format!("  ID {}: {}", example.entity_id, example.raw.join(" | ")));
        if example.formatted.is_empty() {
            lines.push("    (no valid numbers)".to_string());
        }
        for phone in &example.formatted {
            lines.push(format!("    - {phone}"));
        }
    }
    lines
}

pub fn print_human(report: &RunReport) {
    for line in render_human(report) {
        println!("{line}");
    }
}
