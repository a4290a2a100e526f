//! Layout error types

use std::path::PathBuf;
use thiserror::Error;

/// Grid layout errors
#[derive(Error, Debug)]
pub enum GridError {
    /// A cell must span at least one row and one column
    #[error("Invalid cell span {row_span}x{col_span}: spans must be at least 1")]
    InvalidSpan { row_span: usize, col_span: usize },

    /// Animation duration outside the accepted range
    #[error("Animation duration {duration_ms}ms is outside {min}..={max}ms")]
    DurationOutOfRange { duration_ms: u32, min: u32, max: u32 },

    /// Spacing must be finite and non-negative
    #[error("Invalid spacing: {0}")]
    InvalidSpacing(f32),

    /// Failed to read a config file
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a config document
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to serialize a config document
    #[error("Failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for layout operations
pub type Result<T> = std::result::Result<T, GridError>;
