// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! "Reset Password" modal with a pending state for the delivery request.

use eframe::egui;
use email_address::EmailAddress;

use crate::models::{FormError, Notification};
use crate::services::ResetOutcome;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ResetPhase {
    #[default]
    Editing,
    /// A request is in flight; its answer must carry this id.
    Pending { request_id: u64 },
    /// Confirmation screen for the address the link went to.
    Sent { email: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResetPasswordModel {
    open: bool,
    email: String,
    phase: ResetPhase,
    next_request_id: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetMsg {
    Open,
    Close,
    EmailChanged(String),
    Submit,
    Completed {
        request_id: u64,
        result: Result<ResetOutcome, String>,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetCommand {
    RequestReset { request_id: u64, email: String },
}

impl ResetPasswordModel {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phase(&self) -> &ResetPhase {
        &self.phase
    }
}

/// Apply a message to the modal. Returns a notification when relevant.
pub fn update(
    model: &mut ResetPasswordModel,
    msg: ResetMsg,
    cmds: &mut Vec<ResetCommand>,
) -> Option<Notification> {
    match msg {
        ResetMsg::Open => {
            model.open = true;
            None
        }
        ResetMsg::Close => {
            // Abandons any pending request; its late answer is dropped by id.
            model.open = false;
            model.email.clear();
            model.phase = ResetPhase::Editing;
            None
        }
        ResetMsg::EmailChanged(text) => {
            if model.phase == ResetPhase::Editing {
                model.email = text;
            }
            None
        }
        ResetMsg::Submit => {
            if model.phase != ResetPhase::Editing {
                return None;
            }
            let email = model.email.trim().to_string();
            if email.is_empty() {
                return Some(FormError::MissingEmail.into());
            }
            if EmailAddress::parse_with_options(&email, Default::default()).is_err() {
                return Some(FormError::InvalidEmail.into());
            }

            model.next_request_id += 1;
            let request_id = model.next_request_id;
            model.phase = ResetPhase::Pending { request_id };
            cmds.push(ResetCommand::RequestReset { request_id, email });
            None
        }
        ResetMsg::Completed { request_id, result } => {
            if model.phase != (ResetPhase::Pending { request_id }) {
                tracing::debug!(request_id, "dropping stale reset response");
                return None;
            }
            match result {
                Ok(ResetOutcome::Sent) => {
                    model.phase = ResetPhase::Sent {
                        email: model.email.trim().to_string(),
                    };
                    Some(Notification::info("Reset link sent to your email"))
                }
                Ok(ResetOutcome::NotFound) => {
                    model.phase = ResetPhase::Editing;
                    Some(Notification::error("No account found for that email"))
                }
                Ok(ResetOutcome::RateLimited) => {
                    model.phase = ResetPhase::Editing;
                    Some(Notification::error(
                        "Too many reset requests. Please try again later.",
                    ))
                }
                Err(err) => {
                    model.phase = ResetPhase::Editing;
                    tracing::warn!(error = %err, "password reset request failed");
                    Some(Notification::error(format!(
                        "Could not send reset link: {err}"
                    )))
                }
            }
        }
    }
}

/// Render the modal when open and return any triggered messages.
pub fn view(ctx: &egui::Context, model: &ResetPasswordModel) -> Vec<ResetMsg> {
    let mut msgs = Vec::new();
    if !model.open {
        return msgs;
    }

    let mut open = true;
    egui::Window::new("Reset Password")
        .collapsible(false)
        .resizable(false)
        .open(&mut open)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .default_width(380.0)
        .show(ctx, |ui| match &model.phase {
            ResetPhase::Sent { email } => render_sent(ui, email, &mut msgs),
            phase => render_form(ui, model, matches!(phase, ResetPhase::Pending { .. }), &mut msgs),
        });
    if !open {
        msgs.push(ResetMsg::Close);
    }

    msgs
}

fn render_form(
    ui: &mut egui::Ui,
    model: &ResetPasswordModel,
    pending: bool,
    msgs: &mut Vec<ResetMsg>,
) {
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new(egui_phosphor::regular::ENVELOPE).size(32.0));
        ui.label(
            "Enter your email address and we'll send you a link to reset your password.",
        );
    });
    ui.add_space(10.0);

    ui.label("Email Address");
    let mut email = model.email.clone();
    let response = ui.add_enabled(
        !pending,
        egui::TextEdit::singleline(&mut email)
            .hint_text("example@student.act.edu.ph")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        msgs.push(ResetMsg::EmailChanged(email));
    }
    let submitted_via_keyboard =
        response.lost_focus() && ui.input(|inp| inp.key_pressed(egui::Key::Enter));

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        let label = if pending { "Sending…" } else { "Send Reset Link" };
        let clicked = ui.add_enabled(!pending, egui::Button::new(label)).clicked();
        if clicked || (submitted_via_keyboard && !pending) {
            msgs.push(ResetMsg::Submit);
        }
        if pending {
            ui.add(egui::Spinner::new().size(14.0));
        }
    });
}

fn render_sent(ui: &mut egui::Ui, email: &str, msgs: &mut Vec<ResetMsg>) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(egui_phosphor::regular::CHECK_CIRCLE)
                .size(32.0)
                .color(egui::Color32::from_rgb(34, 160, 90)),
        );
        ui.heading("Check your inbox");
        ui.label("We have sent a password reset link to");
        ui.strong(email);
        ui.add_space(8.0);
        if ui.button("Back to Login").clicked() {
            msgs.push(ResetMsg::Close);
        }
    });
}
