//! Error types shared across the crate.

use thiserror::Error;

/// Errors surfaced by the extractor, configuration loading and exports.
///
/// Classification itself never fails; see
/// [`EmotionClassifier::classify`](crate::emotion::EmotionClassifier::classify).
#[derive(Debug, Error)]
pub enum WellnessError {
    /// The input is neither a table nor line-delimited text.
    #[error("unsupported format: {source_name} (expected CSV, Excel or TXT)")]
    UnsupportedFormat { source_name: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("workbook write error: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The sentiment scorer could not score the text.
    #[error("sentiment scoring failed: {0}")]
    Scoring(String),
}

impl WellnessError {
    pub fn unsupported(source_name: impl Into<String>) -> Self {
        WellnessError::UnsupportedFormat {
            source_name: source_name.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, WellnessError>;
