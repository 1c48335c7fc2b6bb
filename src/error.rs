//! Errors raised while loading the dataset and building visualizations.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum VizError {
    #[error("Cannot read {shown}: {source}", shown = .path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },

    #[error("Malformed CSV in {source_name}: {source}")]
    Csv { source_name: String, #[source] source: csv::Error },

    #[error("Column `{column}` not found in {source_name}")]
    MissingColumn { source_name: String, column: String },

    #[error("Invalid number {value:?} in column `{column}` of {source_name}")]
    InvalidNumber { source_name: String, column: String, value: String },

    #[error("Year {year} not found in {source_name}")]
    MissingYear { source_name: String, year: i32 },

    #[error("Unknown color scale `{0}`")]
    UnknownColorScale(String),

    #[error("Unknown province code `{0}`")]
    UnknownProvince(String),

    #[error("Column has no finite value to normalize")]
    EmptyColumn,

    #[error("Column norm is zero, values cannot be scaled")]
    ZeroNorm,

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = VizError> = std::result::Result<T, E>;
