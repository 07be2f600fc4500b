// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Transient user-facing feedback shared by all components.

/// Message for the status bar or error modal. The most recent one wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    /// Text shown to the user.
    pub message: String,
    /// Whether the message represents an error.
    pub is_error: bool,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_error: true,
        }
    }
}

impl From<super::error::FormError> for Notification {
    fn from(err: super::error::FormError) -> Self {
        Self::error(err.to_string())
    }
}
