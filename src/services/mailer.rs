// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Stand-in for password reset delivery.

use std::time::Duration;

use anyhow::Result;

use super::{ResetMailer, ResetOutcome, mask_email};

/// Waits a fixed delay and reports the reset link as sent.
///
/// No e-mail leaves the machine.
pub struct SimulatedResetMailer {
    delay: Duration,
}

impl SimulatedResetMailer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl ResetMailer for SimulatedResetMailer {
    fn request_reset(&self, email: &str) -> Result<ResetOutcome> {
        std::thread::sleep(self.delay);
        tracing::info!(email = %mask_email(email), "simulated reset link sent");
        Ok(ResetOutcome::Sent)
    }
}
