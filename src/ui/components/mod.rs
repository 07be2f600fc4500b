// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Reusable egui components structured for MVU-style updates.

pub mod access_gate;
pub mod guidelines;
pub mod reset_password;
pub mod upload_form;
