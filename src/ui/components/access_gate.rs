// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Restricted-access gate in front of the upload form.

use eframe::egui;

use crate::models::credential::MIN_IDENTIFIER_LEN;
use crate::models::{AccessCredential, FormError, Notification, Role, check_identifier};
use crate::services::Verification;

/// Where the gate currently stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GatePhase {
    #[default]
    Locked,
    /// Waiting for the identity service.
    Verifying,
    /// Terminal for the session.
    Unlocked(Role),
}

/// Gate state: the identifier being typed and the lock phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccessGateModel {
    identifier: String,
    phase: GatePhase,
    min_len: usize,
}

impl Default for AccessGateModel {
    fn default() -> Self {
        Self::new(MIN_IDENTIFIER_LEN)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateMsg {
    IdentifierChanged(String),
    Submit,
    Verified(Result<Verification, String>),
}

/// Side effects requested by the gate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GateCommand {
    Verify(AccessCredential),
}

impl AccessGateModel {
    pub fn new(min_len: usize) -> Self {
        Self {
            identifier: String::new(),
            phase: GatePhase::Locked,
            min_len,
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn phase(&self) -> GatePhase {
        self.phase
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self.phase, GatePhase::Unlocked(_))
    }
}

/// Apply a message to the gate. Returns a notification when relevant.
pub fn update(
    model: &mut AccessGateModel,
    msg: GateMsg,
    cmds: &mut Vec<GateCommand>,
) -> Option<Notification> {
    match msg {
        GateMsg::IdentifierChanged(text) => {
            if model.phase == GatePhase::Locked {
                model.identifier = text;
            }
            None
        }
        GateMsg::Submit => {
            if model.phase != GatePhase::Locked {
                return None;
            }
            match check_identifier(&model.identifier, model.min_len) {
                Ok(credential) => {
                    tracing::debug!(
                        identifier_len = credential.char_count(),
                        "identifier passed local check"
                    );
                    model.phase = GatePhase::Verifying;
                    cmds.push(GateCommand::Verify(credential));
                    None
                }
                Err(err) => {
                    tracing::info!("unlock rejected: identifier too short");
                    Some(err.into())
                }
            }
        }
        GateMsg::Verified(result) => {
            // Late answers after unlock (or without a pending check) are stale.
            if model.phase != GatePhase::Verifying {
                return None;
            }
            match result {
                Ok(Verification::Authorized(role)) => {
                    model.phase = GatePhase::Unlocked(role);
                    model.identifier.clear();
                    tracing::info!(role = role.label(), "upload access granted");
                    Some(Notification::info("Upload access granted."))
                }
                Ok(Verification::Unauthorized) => {
                    model.phase = GatePhase::Locked;
                    tracing::info!("identity service denied upload access");
                    Some(FormError::AuthorizationDenied.into())
                }
                Err(err) => {
                    model.phase = GatePhase::Locked;
                    tracing::warn!(error = %err, "identity service failed");
                    Some(FormError::IdentityUnavailable(err).into())
                }
            }
        }
    }
}

/// Render the locked card and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &AccessGateModel) -> Vec<GateMsg> {
    let mut msgs = Vec::new();

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(egui::RichText::new(egui_phosphor::regular::LOCK).size(40.0));
        ui.add_space(8.0);
        ui.heading("Restricted Access");
        ui.label(
            egui::RichText::new(
                "Please enter your Teacher or Administrator ID to unlock the upload feature.",
            )
            .color(egui::Color32::from_gray(110)),
        );
        ui.add_space(16.0);

        let verifying = model.phase == GatePhase::Verifying;
        let mut identifier = model.identifier.clone();
        let response = ui.add_enabled(
            !verifying,
            egui::TextEdit::singleline(&mut identifier)
                .hint_text("Enter Teacher / Admin ID")
                .horizontal_align(egui::Align::Center)
                .desired_width(280.0),
        );
        if response.changed() {
            msgs.push(GateMsg::IdentifierChanged(identifier));
        }
        let submitted_via_keyboard =
            response.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter));

        ui.add_space(8.0);
        let label = if verifying {
            "Verifying…".to_string()
        } else {
            format!("{} Unlock Access", egui_phosphor::regular::LOCK_OPEN)
        };
        let clicked = ui
            .add_enabled(
                !verifying,
                egui::Button::new(label).min_size(egui::vec2(280.0, 32.0)),
            )
            .clicked();

        if clicked || (submitted_via_keyboard && !verifying) {
            msgs.push(GateMsg::Submit);
        }
        if verifying {
            ui.add(egui::Spinner::new().size(16.0));
        }
    });

    msgs
}
