pub mod error;
pub mod naming;
pub mod read;
pub mod write;

pub use error::{Result, TableError};
pub use naming::{timestamp_label, timestamped_output_path};
pub use read::{read_records, read_rows, Columns, InputRow};
pub use write::{write_merged, write_processed, write_rows};
