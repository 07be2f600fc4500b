// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Collaborator seams: identity verification, archive storage, and reset mail delivery.
//!
//! The UI never talks to a backend directly; commands are executed against a
//! [`Services`] bundle so real implementations can replace the local ones.

pub mod identity;
pub mod mailer;
pub mod store;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::models::{AccessCredential, ResearchMetadata, Role, SelectedFile, StoreError};

pub use identity::PlaceholderIdentity;
pub use mailer::SimulatedResetMailer;
pub use store::LocalArchiveStore;

/// Outcome of an identity check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verification {
    Authorized(Role),
    Unauthorized,
}

/// Verifies that an identifier belongs to someone allowed to upload.
pub trait IdentityService: Send + Sync {
    fn verify(&self, credential: &AccessCredential) -> Result<Verification>;
}

/// Durable receipt for a stored submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub submission_id: Uuid,
    /// Location of the stored package.
    pub location: PathBuf,
    pub sha256: String,
}

/// Stores a document together with its metadata.
///
/// Implementations are the authoritative check: they must not rely on the
/// form's client-side validation.
pub trait ArchiveStore: Send + Sync {
    fn store(
        &self,
        file: &SelectedFile,
        metadata: &ResearchMetadata,
    ) -> Result<SubmissionReceipt, StoreError>;
}

/// Result of a password reset request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    Sent,
    NotFound,
    RateLimited,
}

/// Delivers password reset links.
pub trait ResetMailer: Send + Sync {
    fn request_reset(&self, email: &str) -> Result<ResetOutcome>;
}

/// Collaborators shared by the command workers.
#[derive(Clone)]
pub struct Services {
    pub identity: Arc<dyn IdentityService>,
    pub store: Arc<dyn ArchiveStore>,
    pub mailer: Arc<dyn ResetMailer>,
    pub config: Arc<AppConfig>,
}

impl Services {
    /// Wire the local reference collaborators from configuration.
    pub fn local(config: AppConfig) -> Self {
        Self {
            identity: Arc::new(PlaceholderIdentity::new(config.min_identifier_len)),
            store: Arc::new(LocalArchiveStore::new(
                config.store_dir.clone(),
                config.size_limit(),
            )),
            mailer: Arc::new(SimulatedResetMailer::new(config.reset_delay())),
            config: Arc::new(config),
        }
    }
}

/// Shorten an e-mail address for log output (`j***@example.com`).
pub(crate) fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => {
            let first = local.chars().next().map(String::from).unwrap_or_default();
            format!("{first}***@{domain}")
        }
        None => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::mask_email;

    #[test]
    fn mask_email_keeps_only_first_char_and_domain() {
        assert_eq!(mask_email("juan@act.edu.ph"), "j***@act.edu.ph");
        assert_eq!(mask_email("@x.org"), "***@x.org");
        assert_eq!(mask_email("not-an-email"), "***");
    }
}
