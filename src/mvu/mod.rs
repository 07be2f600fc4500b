// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Root Model-View-Update kernel wiring component state, messages, and commands.

use std::time::Duration;

use crate::config::AppConfig;
use crate::models::{AccessCredential, Notification};
use crate::services::Services;
use crate::ui::components::access_gate::{self, AccessGateModel, GateCommand, GateMsg};
use crate::ui::components::reset_password::{
    self, ResetCommand, ResetMsg, ResetPasswordModel,
};
use crate::ui::components::upload_form::{
    self, SubmissionPayload, UploadCommand, UploadFormModel, UploadMsg,
};

/// Top-level pages reachable from the navigation bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Upload,
    Guidelines,
}

/// Top-level application state.
#[derive(Default)]
pub struct AppModel {
    /// Page shown in the central panel.
    pub page: Page,
    /// Restricted-access gate in front of the upload form.
    pub gate: AccessGateModel,
    /// Upload form state; only reachable once the gate is unlocked.
    pub upload: UploadFormModel,
    /// Password reset modal state.
    pub reset: ResetPasswordModel,
    /// Latest status message to display.
    pub status: Option<String>,
    /// Latest error message to display in modal.
    pub error: Option<String>,
    /// Count of queued background commands.
    pub pending_commands: usize,
}

impl AppModel {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            gate: AccessGateModel::new(config.min_identifier_len),
            upload: UploadFormModel::new(config.size_limit()),
            ..Default::default()
        }
    }
}

/// Application messages routed through the update function.
#[derive(Debug)]
pub enum Msg {
    Navigate(Page),
    DismissError,
    Gate(GateMsg),
    Upload(UploadMsg),
    Reset(ResetMsg),
}

/// Commands represent side-effects executed off the UI thread.
#[derive(Debug)]
pub enum Command {
    VerifyIdentifier(AccessCredential),
    PickDocument,
    SubmitResearch(SubmissionPayload),
    RequestReset { request_id: u64, email: String },
}

/// Update the application model and enqueue commands.
pub fn update(model: &mut AppModel, msg: Msg, cmds: &mut Vec<Command>) {
    match msg {
        Msg::Navigate(page) => {
            model.page = page;
            // Drag input is only tracked while the form is on screen.
            upload_form::update(&mut model.upload, UploadMsg::DragLeft, &mut Vec::new());
        }
        Msg::DismissError => model.error = None,
        Msg::Gate(m) => {
            let mut gate_cmds = Vec::new();
            if let Some(event) = access_gate::update(&mut model.gate, m, &mut gate_cmds) {
                surface_event(model, event);
            }
            cmds.extend(gate_cmds.into_iter().map(|c| match c {
                GateCommand::Verify(credential) => Command::VerifyIdentifier(credential),
            }));
        }
        Msg::Upload(m) => {
            if !model.gate.is_unlocked() {
                tracing::warn!(?m, "upload message ignored while gate is locked");
                return;
            }
            let mut upload_cmds = Vec::new();
            if let Some(event) = upload_form::update(&mut model.upload, m, &mut upload_cmds) {
                surface_event(model, event);
            }
            cmds.extend(upload_cmds.into_iter().map(|c| match c {
                UploadCommand::PickFile => Command::PickDocument,
                UploadCommand::Submit(payload) => Command::SubmitResearch(payload),
            }));
        }
        Msg::Reset(m) => {
            let mut reset_cmds = Vec::new();
            if let Some(event) = reset_password::update(&mut model.reset, m, &mut reset_cmds) {
                surface_event(model, event);
            }
            cmds.extend(reset_cmds.into_iter().map(|c| match c {
                ResetCommand::RequestReset { request_id, email } => {
                    Command::RequestReset { request_id, email }
                }
            }));
        }
    }
}

/// Execute a command against the collaborators and return the resulting message.
pub fn run_command(cmd: Command, services: &Services) -> Msg {
    match cmd {
        Command::VerifyIdentifier(credential) => {
            let result = services
                .identity
                .verify(&credential)
                .map_err(|err| format!("{err:#}"));
            Msg::Gate(GateMsg::Verified(result))
        }
        Command::PickDocument => {
            let picked = rfd::FileDialog::new()
                .set_title("Select research document")
                .add_filter("PDF document", &["pdf"])
                .pick_file();
            match picked {
                Some(path) => match crate::models::SelectedFile::from_path(path) {
                    Ok(file) => Msg::Upload(UploadMsg::FilePicked(Some(file))),
                    Err(err) => Msg::Upload(UploadMsg::FilePickFailed(format!("{err:#}"))),
                },
                None => Msg::Upload(UploadMsg::FilePicked(None)),
            }
        }
        Command::SubmitResearch(payload) => {
            let result = services
                .store
                .store(&payload.file, &payload.metadata)
                .map_err(|err| err.to_string());
            Msg::Upload(UploadMsg::SubmitCompleted(result))
        }
        Command::RequestReset { request_id, email } => {
            let result = request_reset_with_timeout(services, email, services.config.reset_timeout());
            Msg::Reset(ResetMsg::Completed { request_id, result })
        }
    }
}

/// Run the mailer on its own thread and give up after `timeout`.
///
/// A timed-out request keeps running in the background; its result is discarded.
fn request_reset_with_timeout(
    services: &Services,
    email: String,
    timeout: Duration,
) -> Result<crate::services::ResetOutcome, String> {
    let (tx, rx) = crossbeam_channel::bounded(1);
    let mailer = services.mailer.clone();
    std::thread::spawn(move || {
        let _ = tx.send(mailer.request_reset(&email).map_err(|err| format!("{err:#}")));
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(crossbeam_channel::RecvTimeoutError::Timeout) => Err(format!(
            "request timed out after {}s",
            timeout.as_secs_f32()
        )),
        Err(crossbeam_channel::RecvTimeoutError::Disconnected) => {
            Err("reset service stopped unexpectedly".to_string())
        }
    }
}

/// Update status/error fields consistently for user feedback.
fn surface_event(model: &mut AppModel, event: Notification) {
    if event.is_error {
        model.error = Some(event.message.clone());
    }
    model.status = Some(event.message);
}
