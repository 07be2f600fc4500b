// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Candidate research documents and the shared acceptance rule.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use super::error::FormError;

/// The only MIME type accepted for research documents.
pub const PDF_MIME: &str = "application/pdf";

/// Where the document bytes can be read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileSource {
    /// File on the local filesystem (picker or native drop).
    Path(PathBuf),
    /// In-memory contents (drops that carry bytes instead of a path).
    Bytes(Arc<[u8]>),
}

/// A document offered by the user through the picker or a drop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    /// Display name (original filename).
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Declared MIME type.
    pub mime: String,
    pub source: FileSource,
}

impl SelectedFile {
    /// Describe a file on disk, declaring its MIME type from the filename.
    pub fn from_path(path: PathBuf) -> Result<Self> {
        let size = path
            .metadata()
            .with_context(|| format!("Failed to read file metadata: {:?}", path))?
            .len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let mime = declared_mime(&name, "");
        Ok(Self {
            name,
            size,
            mime,
            source: FileSource::Path(path),
        })
    }

    /// Open the document contents for reading.
    pub fn open(&self) -> Result<Box<dyn Read + '_>> {
        match &self.source {
            FileSource::Path(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open document {:?}", path))?;
                Ok(Box::new(file))
            }
            FileSource::Bytes(bytes) => Ok(Box::new(Cursor::new(bytes.as_ref()))),
        }
    }
}

/// MIME type declared for a file: the platform-reported type when present,
/// otherwise a guess from the filename extension.
pub fn declared_mime(name: &str, reported: &str) -> String {
    let reported = reported.trim();
    if !reported.is_empty() {
        return reported.to_string();
    }
    mime_guess::from_path(Path::new(name))
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Accept a document iff its declared MIME type is exactly `application/pdf`.
///
/// Both the picker and drag-and-drop paths go through this predicate.
pub fn validate_file(file: &SelectedFile) -> Result<(), FormError> {
    if file.mime == PDF_MIME {
        Ok(())
    } else {
        Err(FormError::InvalidFileType)
    }
}

/// Enforce an optional byte ceiling.
pub fn check_size(file: &SelectedFile, limit: Option<u64>) -> Result<(), FormError> {
    match limit {
        Some(max) if file.size > max => Err(FormError::file_too_large(max)),
        _ => Ok(()),
    }
}

/// Format a byte count as megabytes with two decimals (e.g. `2.00 MB`).
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / 1024.0 / 1024.0)
}
