// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Top-level egui application shell for the research archive.
//! Handles navigation, notifications, and wiring commands to worker threads.

pub mod components;

use eframe::egui;

use crate::mvu::{self, AppModel, Command, Msg, Page};
use crate::services::Services;
use crate::ui::components::reset_password::ResetMsg;
use crate::ui::components::{access_gate, guidelines, reset_password, upload_form};

/// Stateful egui application driving the archive views.
pub struct ResearchArchiveApp {
    model: AppModel,
    inbox: Vec<Msg>,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl ResearchArchiveApp {
    /// Spawn the command workers and build the initial model.
    pub fn new(services: Services) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        let threads = std::thread::available_parallelism()
            .map(|n| n.get().clamp(2, 4))
            .unwrap_or(2);
        for _ in 0..threads {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let services = services.clone();
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    let msg = mvu::run_command(cmd, &services);
                    let _ = msg_tx.send(msg);
                }
            });
        }
        tracing::debug!(threads, "command workers started");

        Self {
            model: AppModel::new(&services.config),
            inbox: Vec::new(),
            cmd_tx,
            msg_rx,
        }
    }
}

impl eframe::App for ResearchArchiveApp {
    /// Required by eframe 0.34; all rendering happens in [`Self::update`],
    /// which eframe still invokes right before this each frame.
    fn ui(&mut self, _ui: &mut egui::Ui, _frame: &mut eframe::Frame) {}

    #[allow(deprecated)]
    /// Drives a single UI frame: drains worker results, applies queued
    /// messages to the model, dispatches new commands, and renders the shell.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Pull messages produced by the command workers.
        let mut received = false;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
            received = true;
        }

        // Apply in arrival order.
        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Research Archive");
                ui.separator();
                self.render_navigation(ui);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.separator();
                    if ui
                        .button(format!("{} Forgot password?", egui_phosphor::regular::KEY))
                        .clicked()
                    {
                        self.inbox.push(Msg::Reset(ResetMsg::Open));
                    }
                });
            });
            ui.add_space(4.0);
        });

        self.render_error_modal(ctx);

        let reset_msgs = reset_password::view(ctx, &self.model.reset);
        self.inbox.extend(reset_msgs.into_iter().map(Msg::Reset));

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            egui::ScrollArea::vertical().show(ui, |ui| match self.model.page {
                Page::Upload => self.render_upload_page(ui),
                Page::Guidelines => guidelines::view(ui),
            });
        });

        // Keep polling while workers run or while new messages wait for the next frame.
        if self.model.pending_commands > 0 {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
        if received || !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl ResearchArchiveApp {
    fn render_navigation(&mut self, ui: &mut egui::Ui) {
        let pages = [
            (Page::Upload, egui_phosphor::regular::UPLOAD_SIMPLE, "Upload"),
            (Page::Guidelines, egui_phosphor::regular::BOOK_OPEN, "Guidelines"),
        ];
        for (page, icon, label) in pages {
            let button = egui::Button::new(format!("{icon} {label}"))
                .selected(self.model.page == page);
            if ui.add(button).clicked() && self.model.page != page {
                self.inbox.push(Msg::Navigate(page));
            }
        }
    }

    /// The gate card until unlocked, the form afterwards.
    fn render_upload_page(&mut self, ui: &mut egui::Ui) {
        if self.model.gate.is_unlocked() {
            let msgs = upload_form::view(ui, &self.model.upload);
            self.inbox.extend(msgs.into_iter().map(Msg::Upload));
        } else {
            let msgs = access_gate::view(ui, &self.model.gate);
            self.inbox.extend(msgs.into_iter().map(Msg::Gate));
        }
    }

    /// Render a simple modal window for error messages.
    fn render_error_modal(&mut self, ctx: &egui::Context) {
        if let Some(message) = self.model.error.clone() {
            egui::Window::new("Something went wrong")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.inbox.push(Msg::DismissError);
                    }
                });
        }
    }

    /// Render latest status/error message when present.
    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(text) = &self.model.status {
                ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
            }
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0)).on_hover_text(format!(
                    "{} task(s) running in background",
                    self.model.pending_commands
                ));
            }
        });
    }
}

