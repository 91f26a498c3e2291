//! Error types for the crop advisory library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all advisory operations.
#[derive(Error, Debug)]
pub enum AdvisoryError {
    /// Selection references a crop that is not in the catalog
    #[error("Unknown crop '{id}'")]
    UnknownCrop { id: String },
    /// Selection references a stage outside the active crop's stage range.
    ///
    /// `index` is wide enough to hold both negative user input and any
    /// `usize` index unchanged.
    #[error("Stage index {index} is out of range for a crop with {len} stages (valid: 0..{len})")]
    StageIndexOutOfRange { index: i128, len: usize },
    /// Catalog failed validation at construction
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl AdvisoryError {
    /// Creates an invalid catalog error.
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            reason: reason.into(),
        }
    }

    /// Creates an out-of-range error from an unsigned index.
    pub fn stage_out_of_range(index: usize, len: usize) -> Self {
        Self::StageIndexOutOfRange {
            // usize is at most 64 bits wide, so the cast is lossless.
            index: index as i128,
            len,
        }
    }

    /// Creates an out-of-range error from a signed index given by a user.
    pub fn signed_stage_out_of_range(index: i64, len: usize) -> Self {
        Self::StageIndexOutOfRange {
            index: i128::from(index),
            len,
        }
    }

    /// Whether the error is a user selection validation failure rather than
    /// an environment or catalog problem.
    pub fn is_selection_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownCrop { .. } | Self::StageIndexOutOfRange { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ConfigResultExt<T> {
    /// Map any error to a configuration error with a message.
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| AdvisoryError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for advisory operations
pub type Result<T> = std::result::Result<T, AdvisoryError>;
