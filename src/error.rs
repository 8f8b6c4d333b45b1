//! Error types for the postindex library
//!
//! Two families of failure abort an index run: format errors (the front
//! matter block is missing or cannot be scanned) and validation errors
//! (a required field is missing, has the wrong shape, or the date is not a
//! real `YYYY-MM-DD` date). Everything else is I/O or serialization.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum IndexError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A post file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Front matter block missing or not scannable
    #[error("Invalid front matter in {}: {reason}", .path.display())]
    Format { path: PathBuf, reason: String },

    /// Required fields absent or empty
    #[error("{} missing required fields: {}", .path.display(), .fields.join(", "))]
    MissingFields { path: PathBuf, fields: Vec<String> },

    /// Date is not a zero-padded, in-range `YYYY-MM-DD` value
    #[error("{} has invalid date {value:?}, use YYYY-MM-DD", .path.display())]
    InvalidDate { path: PathBuf, value: String },

    /// A present field has the wrong shape
    #[error("{} has invalid field `{field}`: {reason}", .path.display())]
    InvalidField {
        path: PathBuf,
        field: String,
        reason: String,
    },

    /// Path resolution errors
    #[error("Path resolution error: {reason}")]
    PathResolution { reason: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, IndexError>;

impl IndexError {
    /// Create a format error that is not yet tied to a file
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            path: PathBuf::new(),
            reason: reason.into(),
        }
    }

    /// Create a read error for a post file
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a missing fields error
    pub fn missing_fields(path: impl Into<PathBuf>, fields: Vec<String>) -> Self {
        Self::MissingFields {
            path: path.into(),
            fields,
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(path: impl Into<PathBuf>, value: impl Into<String>) -> Self {
        Self::InvalidDate {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Create an invalid field error
    pub fn invalid_field(
        path: impl Into<PathBuf>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            path: path.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a path resolution error
    pub fn path_resolution(reason: impl Into<String>) -> Self {
        Self::PathResolution {
            reason: reason.into(),
        }
    }

    /// Attach the offending file to a path-carrying error
    pub fn with_path(self, file: &Path) -> Self {
        match self {
            Self::Format { reason, .. } => Self::Format {
                path: file.to_path_buf(),
                reason,
            },
            Self::ReadFile { source, .. } => Self::ReadFile {
                path: file.to_path_buf(),
                source,
            },
            Self::MissingFields { fields, .. } => Self::MissingFields {
                path: file.to_path_buf(),
                fields,
            },
            Self::InvalidDate { value, .. } => Self::InvalidDate {
                path: file.to_path_buf(),
                value,
            },
            Self::InvalidField { field, reason, .. } => Self::InvalidField {
                path: file.to_path_buf(),
                field,
                reason,
            },
            other => other,
        }
    }

    /// Check if this is a front matter format error
    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format { .. })
    }

    /// Check if this is a post validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingFields { .. } | Self::InvalidDate { .. } | Self::InvalidField { .. }
        )
    }

    /// Process exit code for this error kind
    pub fn exit_code(&self) -> u8 {
        if self.is_format() {
            3
        } else if self.is_validation() {
            4
        } else {
            1
        }
    }
}
