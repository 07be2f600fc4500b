// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Directory-backed archive store writing one ZIP package per submission.
//!
//! Layout of `<root>/<submission-id>.zip`:
//! - `<submission-id>/<Year_Strand_Title>.pdf`: the document
//! - `<submission-id>/submission.json`: metadata and checksum
//!
//! `<root>/index.json` maps document SHA-256 digests to submission ids and is
//! used to reject duplicate uploads.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::Serialize;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;
use zip::{CompressionMethod, write::FileOptions};

use super::{ArchiveStore, SubmissionReceipt};
use crate::models::document::format_megabytes;
use crate::models::{ResearchMetadata, SelectedFile, StoreError};
use crate::utils::hash_reader;

const INDEX_FILE: &str = "index.json";
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Metadata record written next to the document.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionRecord<'a> {
    submission_id: Uuid,
    #[serde(flatten)]
    metadata: &'a ResearchMetadata,
    file_name: &'a str,
    original_name: &'a str,
    encoding_format: &'a str,
    content_size: u64,
    sha256: &'a str,
    date_created: String,
}

/// Stores submissions under a root directory.
pub struct LocalArchiveStore {
    root: PathBuf,
    size_limit: Option<u64>,
    // Serializes the duplicate check with the index update.
    index_lock: Mutex<()>,
}

impl LocalArchiveStore {
    pub fn new(root: PathBuf, size_limit: Option<u64>) -> Self {
        Self {
            root,
            size_limit,
            index_lock: Mutex::new(()),
        }
    }

    fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    fn load_index(&self) -> Result<BTreeMap<String, String>> {
        let path = self.index_path();
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read archive index {:?}", path))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Archive index is corrupt: {:?}", path))
    }

    fn save_index(&self, index: &BTreeMap<String, String>) -> Result<()> {
        let path = self.index_path();
        let tmp = path.with_extension("json.part");
        let bytes = serde_json::to_vec_pretty(index)?;
        fs::write(&tmp, bytes).with_context(|| format!("Failed to write {:?}", tmp))?;
        fs::rename(&tmp, &path).with_context(|| format!("Failed to replace {:?}", path))?;
        Ok(())
    }

    /// Write the package to a temporary file and move it into place.
    fn write_package(
        &self,
        id: Uuid,
        file: &SelectedFile,
        metadata: &ResearchMetadata,
        sha256: &str,
    ) -> Result<PathBuf, StoreError> {
        let output = self.root.join(format!("{id}.zip"));
        let partial = self.root.join(format!("{id}.zip.part"));

        let result = write_zip(&partial, id, file, metadata, sha256, self.size_limit);
        if let Err(err) = result {
            let _ = fs::remove_file(&partial);
            return Err(err);
        }

        fs::rename(&partial, &output)
            .with_context(|| format!("Failed to finalize submission package {:?}", output))?;
        Ok(output)
    }
}

impl ArchiveStore for LocalArchiveStore {
    fn store(
        &self,
        file: &SelectedFile,
        metadata: &ResearchMetadata,
    ) -> Result<SubmissionReceipt, StoreError> {
        if let Some(limit) = self.size_limit
            && file.size > limit
        {
            return Err(StoreError::SizeExceeded {
                limit: format_megabytes(limit),
            });
        }
        if !has_pdf_signature(file)? {
            return Err(StoreError::NotPdf);
        }

        let sha256 = hash_reader(file.open()?)?;

        let _guard = self
            .index_lock
            .lock()
            .map_err(|_| StoreError::Unavailable("archive index lock poisoned".into()))?;

        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create archive directory {:?}", self.root))?;

        let mut index = self.load_index()?;
        if let Some(existing) = index.get(&sha256) {
            tracing::info!(%existing, "duplicate submission rejected");
            return Err(StoreError::Duplicate {
                existing: existing.clone(),
            });
        }

        let id = Uuid::new_v4();
        let location = self.write_package(id, file, metadata, &sha256)?;

        index.insert(sha256.clone(), id.to_string());
        if let Err(err) = self.save_index(&index) {
            // An unindexed package would escape duplicate detection.
            let _ = fs::remove_file(&location);
            return Err(err.into());
        }

        tracing::info!(
            submission_id = %id,
            size = file.size,
            strand = metadata.strand.label(),
            year = metadata.year,
            "submission stored"
        );
        Ok(SubmissionReceipt {
            submission_id: id,
            location,
            sha256,
        })
    }
}

/// Check the leading bytes for the PDF header.
fn has_pdf_signature(file: &SelectedFile) -> Result<bool> {
    let mut head = [0u8; 5];
    let mut reader = file.open()?;
    let mut filled = 0;
    while filled < head.len() {
        let read = reader
            .read(&mut head[filled..])
            .context("Failed to read document header")?;
        if read == 0 {
            return Ok(false);
        }
        filled += read;
    }
    Ok(head == PDF_MAGIC)
}

fn write_zip(
    output: &Path,
    id: Uuid,
    file: &SelectedFile,
    metadata: &ResearchMetadata,
    sha256: &str,
    size_limit: Option<u64>,
) -> Result<(), StoreError> {
    let prefix = format!("{id}/");
    let file_name = metadata.suggested_file_name();
    let document_path = format!("{prefix}{file_name}");

    let out = File::create(output)
        .with_context(|| format!("Failed to create submission package {:?}", output))?;
    let mut zip = zip::ZipWriter::new(out);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.add_directory(&prefix, options)
        .context("Failed to create submission directory in package")?;
    zip.start_file(&document_path, options)
        .with_context(|| format!("Failed to add {} to package", document_path))?;

    // Count actual bytes; the declared size is only a hint.
    let mut reader = file.open()?;
    let mut written = 0u64;
    let mut buffer = [0u8; 8192];
    loop {
        let read = reader
            .read(&mut buffer)
            .with_context(|| format!("Failed to read {}", file.name))?;
        if read == 0 {
            break;
        }
        written += read as u64;
        if let Some(limit) = size_limit
            && written > limit
        {
            return Err(StoreError::SizeExceeded {
                limit: format_megabytes(limit),
            });
        }
        zip.write_all(&buffer[..read])
            .with_context(|| format!("Failed to write {} into package", document_path))?;
    }

    let date_created = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .map_err(|err| anyhow::anyhow!("Failed to format submission timestamp: {}", err))?;
    let record = SubmissionRecord {
        submission_id: id,
        metadata,
        file_name: &file_name,
        original_name: &file.name,
        encoding_format: &file.mime,
        content_size: written,
        sha256,
        date_created,
    };

    zip.start_file(format!("{prefix}submission.json"), options)
        .context("Failed to create submission metadata file")?;
    let record_bytes = serde_json::to_vec_pretty(&record).context("Failed to encode metadata")?;
    zip.write_all(&record_bytes)
        .context("Failed to write submission metadata file")?;

    zip.finish().context("Failed to finalize submission package")?;
    Ok(())
}
