// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! User-facing error kinds surfaced as notifications.

use thiserror::Error;

/// Blocked form transitions. Every variant is recoverable by the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Invalid ID. Please enter a valid Teacher or Administrator ID.")]
    InvalidCredential,
    #[error("This ID is not authorized to upload research.")]
    AuthorizationDenied,
    #[error("Identity service unavailable: {0}")]
    IdentityUnavailable(String),
    #[error("Only PDF files are allowed.")]
    InvalidFileType,
    #[error("File exceeds the maximum size of {limit}.")]
    FileTooLarge { limit: String },
    #[error("Please upload a PDF document.")]
    MissingFile,
    #[error("Please enter the research title.")]
    MissingTitle,
    #[error("Please wait until the current upload finishes.")]
    UploadInProgress,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl FormError {
    /// Size rejection with a human-readable limit.
    pub fn file_too_large(limit_bytes: u64) -> Self {
        Self::FileTooLarge {
            limit: crate::models::document::format_megabytes(limit_bytes),
        }
    }
}

/// Failures reported by an archive storage backend.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("File exceeds the archive size limit of {limit}.")]
    SizeExceeded { limit: String },
    #[error("The uploaded document is not a valid PDF.")]
    NotPdf,
    #[error("This document was already submitted (submission {existing}).")]
    Duplicate { existing: String },
    #[error("Archive storage unavailable: {0}")]
    Unavailable(String),
}

impl From<anyhow::Error> for StoreError {
    fn from(err: anyhow::Error) -> Self {
        Self::Unavailable(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_notification_copy() {
        assert_eq!(
            FormError::InvalidFileType.to_string(),
            "Only PDF files are allowed."
        );
        assert_eq!(
            FormError::MissingFile.to_string(),
            "Please upload a PDF document."
        );
        assert_eq!(
            FormError::file_too_large(10 * 1024 * 1024).to_string(),
            "File exceeds the maximum size of 10.00 MB."
        );
    }

    #[test]
    fn store_error_wraps_anyhow_chain() {
        let err: StoreError = anyhow::anyhow!("disk full")
            .context("Failed to write submission")
            .into();
        assert_eq!(
            err.to_string(),
            "Archive storage unavailable: Failed to write submission: disk full"
        );
    }
}
