pub mod aggregate;
pub mod clean;
pub mod format;
pub mod national;
pub mod special;
pub mod tokenize;
pub mod validate;

pub use aggregate::{aggregate, Aggregator};
pub use clean::clean_token;
pub use format::{canonicalize, format_number};
pub use national::{national_significant_number, reconstruct};
pub use special::is_special_format;
pub use tokenize::tokenize;
pub use validate::classify;

use crate::domain::{CanonicalPhoneNumber, ProcessedRecord, RawRecord};
use crate::summary::NormalizeSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOutcome {
    pub records: Vec<ProcessedRecord>,
    pub summary: NormalizeSummary,
}

/// Runs one token through clean, national form, reconstruction, validation and formatting.
pub fn normalize_token(token: &str) -> Option<CanonicalPhoneNumber> {
    let cleaned = clean_token(token)?;
    let candidate = reconstruct(national_significant_number(&cleaned))?;
    canonicalize(candidate)
}

/// Canonical numbers of a single cell, first occurrence order, without repeats.
pub fn normalize_field(raw: Option<&str>) -> Vec<CanonicalPhoneNumber> {
    let mut phones: Vec<CanonicalPhoneNumber> = Vec::new();
    for token in tokenize(raw.unwrap_or_default()) {
        if let Some(phone) = normalize_token(&token) {
            if !phones.contains(&phone) {
                phones.push(phone);
            }
        }
    }
    phones
}

pub fn normalize(records: &[RawRecord]) -> Vec<ProcessedRecord> {
    normalize_with_summary(records).records
}

pub fn normalize_with_summary(records: &[RawRecord]) -> NormalizeOutcome {
    let mut summary = NormalizeSummary {
        input_rows: records.len(),
        ..NormalizeSummary::default()
    };
    let mut aggregator = Aggregator::new();

    for record in records {
        let mut accepted_in_row = 0;
        for token in tokenize(record.raw_phone().unwrap_or_default()) {
            summary.tokens += 1;
            let phone = normalize_token(&token);
            if phone.is_some() {
                summary.accepted += 1;
                accepted_in_row += 1;
            } else {
                summary.rejected_tokens += 1;
            }
            aggregator.push(record.entity_id(), phone);
        }
        if accepted_in_row == 0 {
            summary.rows_without_numbers += 1;
        }
    }

    summary.duplicates_removed = aggregator.duplicates();
    let records = aggregator.finish();
    summary.count_output(&records);
    NormalizeOutcome { records, summary }
}
