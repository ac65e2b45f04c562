//! Typed error definitions for stamp_rename.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenameError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Permission denied on {path}: {context}")]
    PermissionDenied { path: PathBuf, context: String },
}

impl RenameError {
    /// Stable numeric code for structured logs and exit diagnostics.
    pub fn code(&self) -> u16 {
        match self {
            RenameError::DirectoryNotFound(_) => 2,
            RenameError::NotADirectory(_) => 3,
            RenameError::PermissionDenied { .. } => 13,
        }
    }

    /// Short machine-friendly label used as the `kind` log field.
    pub fn kind(&self) -> &'static str {
        match self {
            RenameError::DirectoryNotFound(_) => "directory_not_found",
            RenameError::NotADirectory(_) => "not_a_directory",
            RenameError::PermissionDenied { .. } => "permission_denied",
        }
    }
}
