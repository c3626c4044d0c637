//! Error types for the transfer function editor

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or exporting a transfer function
#[derive(Debug, Error)]
pub enum TransferFunctionError {
    /// A geometry parameter would make the coordinate mapping degenerate
    #[error("Invalid canvas geometry: {field} must be finite and positive, got {value}")]
    InvalidGeometry { field: &'static str, value: f32 },

    /// Domain must contain at least one sample
    #[error("Invalid domain size: {0} (must be at least 1)")]
    InvalidDomainSize(usize),

    /// Channel capacity too small for the default curves
    #[error("Invalid handle limit: {limit} (must be at least {min})")]
    InvalidHandleLimit { limit: usize, min: usize },

    /// Failed to create or write the export file
    #[error("Failed to export transfer function to '{path}': {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for transfer function operations
pub type TfResult<T> = Result<T, TransferFunctionError>;
