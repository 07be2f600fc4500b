// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: pure data types and validation helpers shared between UI and services.

pub mod credential;
pub mod document;
pub mod error;
pub mod notification;
pub mod research;

pub use credential::{AccessCredential, Role, check_identifier};
pub use document::{SelectedFile, validate_file};
pub use error::{FormError, StoreError};
pub use notification::Notification;
pub use research::{ResearchMetadata, ResearchType, Strand};
