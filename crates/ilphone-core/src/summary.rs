use crate::domain::{PhoneClass, ProcessedRecord};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NormalizeSummary {
    pub input_rows: usize,
    pub rows_without_numbers: usize,
    pub tokens: usize,
    pub rejected_tokens: usize,
    pub accepted: usize,
    pub duplicates_removed: usize,
    pub output_records: usize,
    pub mobile: usize,
    pub landline: usize,
}

impl NormalizeSummary {
    pub fn rows_with_numbers(&self) -> usize {
        self.input_rows - self.rows_without_numbers
    }

    pub(crate) fn count_output(&mut self, records: &[ProcessedRecord]) {
        self.output_records = records.len();
        self.mobile = records
            .iter()
            .filter(|record| record.phone.class() == PhoneClass::Mobile)
            .count();
        self.landline = self.output_records - self.mobile;
    }
}
