use chrono::{DateTime, Utc};
use std::path::{Path, PathBuf};

pub const OUTPUT_EXTENSION: &str = "csv";

/// ISO-8601 UTC with milliseconds, `:` and `.` replaced so the label is filename safe.
pub fn timestamp_label(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%dT%H-%M-%S-%3fZ").to_string()
}

pub fn timestamped_output_path(dir: &Path, prefix: &str, now: DateTime<Utc>) -> PathBuf {
    dir.join(format!("{prefix}_{}.{OUTPUT_EXTENSION}", timestamp_label(now)))
}

#[cfg(test)]
mod tests {
    use super::{timestamp_label, timestamped_output_path};
    use chrono::{NaiveDate, TimeZone, Utc};
    use std::path::Path;

    #[test]
    fn timestamp_label_is_filename_safe() {
        let now = NaiveDate::from_ymd_opt(2024, 5, 1)
            .and_then(|date| date.and_hms_milli_opt(10, 20, 30, 123))
            .expect("valid datetime")
            .and_utc();
        assert_eq!(timestamp_label(now), "2024-05-01T10-20-30-123Z");
    }

    #[test]
    fn output_path_joins_dir_and_prefix() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let path = timestamped_output_path(Path::new("out"), "processed_calls", now);
        assert_eq!(
            path,
            Path::new("out").join("processed_calls_2024-01-02T03-04-05-000Z.csv")
        );
    }
}
