//! Error Types for TrendSage

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Failures are confined to loading reference data; answering a query never fails.
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Duplicate asset identifier: {0}")]
    DuplicateAsset(String),

    #[error("Sustainability score for {asset} is {score}, expected a value in [0, 1]")]
    ScoreOutOfRange {
        asset: String,
        score: rust_decimal::Decimal,
    },

    #[error("Dataset contains no assets")]
    EmptyDataset,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
