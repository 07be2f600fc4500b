// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Access identifiers for the upload gate (UI-agnostic).

use super::error::FormError;

/// Minimum identifier length (in characters, after trimming).
pub const MIN_IDENTIFIER_LEN: usize = 3;

/// A trimmed identifier that passed the local length rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessCredential(String);

impl AccessCredential {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Character count, safe to log in place of the identifier itself.
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

/// Role granted by the identity collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Teacher,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Teacher => "Teacher",
            Role::Admin => "Administrator",
        }
    }
}

/// Apply the local identifier rule: valid iff the trimmed text has at least `min_len` characters.
///
/// This is a total function of its input; no other state influences the outcome.
pub fn check_identifier(raw: &str, min_len: usize) -> Result<AccessCredential, FormError> {
    let trimmed = raw.trim();
    if trimmed.chars().count() >= min_len {
        Ok(AccessCredential(trimmed.to_string()))
    } else {
        Err(FormError::InvalidCredential)
    }
}
