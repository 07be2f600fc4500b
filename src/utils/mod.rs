// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by UI and service code.

pub mod hash;
pub mod sanitize_component;

/// Compute the SHA-256 hash of a reader.
pub use hash::hash_reader;
/// Sanitize user-provided strings into filesystem-safe path components.
pub use sanitize_component::sanitize_component;
