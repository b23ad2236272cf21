pub mod domain;
pub mod error;
pub mod pipeline;
pub mod summary;

pub use domain::*;
pub use error::CoreError;
pub use pipeline::{
    is_special_format, normalize, normalize_field, normalize_token, normalize_with_summary,
    Aggregator, NormalizeOutcome,
};
pub use summary::NormalizeSummary;
