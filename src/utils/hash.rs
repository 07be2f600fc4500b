// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Content hashing helpers used for duplicate detection.

use std::io::{self, Read};

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};

/// Compute the SHA-256 of everything readable from `reader` as a lowercase hex digest.
///
/// # Errors
///
/// Returns an error when the reader fails before reaching EOF.
///
/// # Examples
///
/// ```rust,ignore
/// let digest = research_archive::utils::hash_reader(&b"abc"[..])?;
/// assert_eq!(digest.len(), 64);
/// ```
pub fn hash_reader(mut reader: impl Read) -> Result<String> {
    let mut hasher = Sha256::new();
    io::copy(&mut reader, &mut hasher).context("Failed to read document for hashing")?;
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::hash_reader;

    #[test]
    fn hash_reader_matches_known_digest() {
        assert_eq!(
            hash_reader(&b"abc"[..]).unwrap(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
