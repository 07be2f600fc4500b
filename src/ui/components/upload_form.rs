// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Research upload form: metadata, single-PDF drop zone, and submission.

use eframe::egui;

use crate::models::document::{FileSource, PDF_MIME, check_size, declared_mime, format_megabytes};
use crate::models::research::PUBLICATION_YEARS;
use crate::models::{
    FormError, Notification, ResearchMetadata, ResearchType, SelectedFile, Strand, validate_file,
};
use crate::services::SubmissionReceipt;

/// Observable state of the document slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilePhase {
    Empty,
    DragOver,
    Selected,
}

/// How a candidate document reached the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Acquisition {
    Picker,
    Drop,
}

/// Validated payload handed to the storage collaborator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub file: SelectedFile,
    pub metadata: ResearchMetadata,
}

/// MVU state of the upload form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UploadFormModel {
    title: String,
    research_type: ResearchType,
    strand: Strand,
    year: u16,
    file: Option<SelectedFile>,
    dragging: bool,
    submitting: bool,
    size_limit: Option<u64>,
    last_receipt: Option<SubmissionReceipt>,
}

impl Default for UploadFormModel {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Messages emitted by the upload form view and command results.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadMsg {
    TitleChanged(String),
    SetResearchType(ResearchType),
    SetStrand(Strand),
    SetYear(u16),
    BrowseRequested,
    FilePicked(Option<SelectedFile>),
    FilePickFailed(String),
    DragEntered,
    DragLeft,
    Dropped(Vec<SelectedFile>),
    RemoveFile,
    Submit,
    SubmitCompleted(Result<SubmissionReceipt, String>),
}

/// Side effects requested by the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UploadCommand {
    PickFile,
    Submit(SubmissionPayload),
}

impl UploadFormModel {
    /// Create an empty form; `size_limit` enables the byte ceiling check.
    pub fn new(size_limit: Option<u64>) -> Self {
        Self {
            title: String::new(),
            research_type: ResearchType::default(),
            strand: Strand::default(),
            year: PUBLICATION_YEARS[0],
            file: None,
            dragging: false,
            submitting: false,
            size_limit,
            last_receipt: None,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn last_receipt(&self) -> Option<&SubmissionReceipt> {
        self.last_receipt.as_ref()
    }

    /// Current phase of the document slot. An active drag wins over a selection.
    pub fn phase(&self) -> FilePhase {
        if self.dragging {
            FilePhase::DragOver
        } else if self.file.is_some() {
            FilePhase::Selected
        } else {
            FilePhase::Empty
        }
    }

    fn metadata(&self) -> ResearchMetadata {
        ResearchMetadata {
            title: self.title.trim().to_string(),
            research_type: self.research_type,
            strand: self.strand,
            year: self.year,
        }
    }
}

/// Apply a message to the form model. Returns a notification when relevant.
pub fn update(
    model: &mut UploadFormModel,
    msg: UploadMsg,
    cmds: &mut Vec<UploadCommand>,
) -> Option<Notification> {
    if model.submitting && msg.edits_form() {
        model.dragging = false;
        tracing::debug!(?msg, "form edit ignored while uploading");
        return match msg {
            UploadMsg::FilePicked(Some(_)) => Some(FormError::UploadInProgress.into()),
            UploadMsg::Dropped(files) if !files.is_empty() => {
                Some(FormError::UploadInProgress.into())
            }
            _ => None,
        };
    }

    match msg {
        UploadMsg::TitleChanged(text) => {
            model.title = text;
            None
        }
        UploadMsg::SetResearchType(kind) => {
            model.research_type = kind;
            None
        }
        UploadMsg::SetStrand(strand) => {
            model.strand = strand;
            None
        }
        UploadMsg::SetYear(year) => {
            if PUBLICATION_YEARS.contains(&year) {
                model.year = year;
            }
            None
        }
        UploadMsg::BrowseRequested => {
            cmds.push(UploadCommand::PickFile);
            None
        }
        UploadMsg::FilePicked(Some(file)) => accept_file(model, file, Acquisition::Picker),
        UploadMsg::FilePicked(None) => None,
        UploadMsg::FilePickFailed(err) => {
            model.dragging = false;
            Some(Notification::error(format!("Could not read file: {err}")))
        }
        UploadMsg::DragEntered => {
            model.dragging = true;
            None
        }
        UploadMsg::DragLeft => {
            model.dragging = false;
            None
        }
        UploadMsg::Dropped(files) => {
            model.dragging = false;
            let first = files.into_iter().next()?;
            accept_file(model, first, Acquisition::Drop)
        }
        UploadMsg::RemoveFile => {
            model.file = None;
            None
        }
        UploadMsg::Submit => submit(model, cmds),
        UploadMsg::SubmitCompleted(result) => {
            if !model.submitting {
                return None;
            }
            model.submitting = false;
            match result {
                Ok(receipt) => {
                    tracing::info!(submission_id = %receipt.submission_id, "research uploaded");
                    model.file = None;
                    model.title.clear();
                    model.last_receipt = Some(receipt);
                    Some(Notification::info("Research uploaded successfully!"))
                }
                Err(err) => {
                    tracing::warn!(error = %err, "research upload failed");
                    Some(Notification::error(format!("Upload failed: {err}")))
                }
            }
        }
    }
}

/// Single entry point for both acquisition paths.
fn accept_file(
    model: &mut UploadFormModel,
    file: SelectedFile,
    via: Acquisition,
) -> Option<Notification> {
    let verdict = validate_file(&file).and_then(|()| check_size(&file, model.size_limit));
    if let Err(err) = verdict {
        tracing::info!(?via, mime = %file.mime, size = file.size, "document rejected");
        return Some(err.into());
    }

    tracing::debug!(?via, size = file.size, "document selected");
    let notice = match via {
        Acquisition::Drop => Some(Notification::info(format!("File selected: {}", file.name))),
        Acquisition::Picker => None,
    };
    model.file = Some(file);
    notice
}

fn submit(model: &mut UploadFormModel, cmds: &mut Vec<UploadCommand>) -> Option<Notification> {
    if model.submitting {
        return None;
    }
    let Some(file) = model.file.clone() else {
        return Some(FormError::MissingFile.into());
    };
    let metadata = model.metadata();
    if metadata.title.is_empty() {
        return Some(FormError::MissingTitle.into());
    }

    model.submitting = true;
    cmds.push(UploadCommand::Submit(SubmissionPayload { file, metadata }));
    Some(Notification::info("Uploading research…"))
}

impl UploadMsg {
    /// Messages that change the form contents or selection.
    fn edits_form(&self) -> bool {
        matches!(
            self,
            UploadMsg::TitleChanged(_)
                | UploadMsg::SetResearchType(_)
                | UploadMsg::SetStrand(_)
                | UploadMsg::SetYear(_)
                | UploadMsg::BrowseRequested
                | UploadMsg::FilePicked(_)
                | UploadMsg::Dropped(_)
                | UploadMsg::RemoveFile
        )
    }
}

/// Translate the frame's raw drag-and-drop input into form messages.
///
/// `hovering` is true while files are dragged over the window; `dropped`
/// holds the converted first file released this frame, if any.
pub fn drag_messages(
    dragging: bool,
    hovering: bool,
    dropped: Option<Result<SelectedFile, String>>,
) -> Vec<UploadMsg> {
    match dropped {
        Some(Ok(file)) => return vec![UploadMsg::Dropped(vec![file])],
        Some(Err(err)) => return vec![UploadMsg::FilePickFailed(err)],
        None => {}
    }
    match (dragging, hovering) {
        (false, true) => vec![UploadMsg::DragEntered],
        (true, false) => vec![UploadMsg::DragLeft],
        _ => Vec::new(),
    }
}

/// Convert an egui drop into a candidate document.
///
/// Native drops carry a path and are described exactly like a picked file;
/// web drops carry the bytes. The platform-reported MIME wins when present.
fn candidate_from_drop(dropped: &egui::DroppedFile) -> anyhow::Result<SelectedFile> {
    let mut file = match (&dropped.bytes, &dropped.path) {
        (Some(bytes), _) => {
            if dropped.name.is_empty() {
                anyhow::bail!("Dropped item has no file name");
            }
            SelectedFile {
                name: dropped.name.clone(),
                size: bytes.len() as u64,
                mime: String::new(),
                source: FileSource::Bytes(bytes.clone()),
            }
        }
        (None, Some(path)) => SelectedFile::from_path(path.clone())?,
        (None, None) => anyhow::bail!("Dropped item carries no file contents"),
    };
    if !dropped.name.is_empty() {
        file.name = dropped.name.clone();
    }
    file.mime = declared_mime(&file.name, &dropped.mime);
    Ok(file)
}

/// Render the form and return any messages triggered by user interaction.
pub fn view(ui: &mut egui::Ui, model: &UploadFormModel) -> Vec<UploadMsg> {
    let mut msgs = Vec::new();

    let (hovering, dropped) = ui.ctx().input(|inp| {
        let dropped = inp
            .raw
            .dropped_files
            .first()
            .map(|file| candidate_from_drop(file).map_err(|err| format!("{err:#}")));
        (!inp.raw.hovered_files.is_empty(), dropped)
    });
    msgs.extend(drag_messages(model.dragging, hovering, dropped));

    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(egui_phosphor::regular::CLOUD_ARROW_UP).size(32.0));
        ui.vertical(|ui| {
            ui.heading("Upload Research");
            ui.label(
                egui::RichText::new("Submit your thesis or dissertation to the archive.")
                    .color(egui::Color32::from_gray(110)),
            );
        });
    });
    ui.separator();
    ui.add_space(8.0);

    // The form is frozen while its payload is being stored.
    ui.add_enabled_ui(!model.submitting, |ui| {
        ui.label("Research Title");
        let mut title = model.title.clone();
        if ui
            .add(
                egui::TextEdit::singleline(&mut title)
                    .hint_text("Enter complete title")
                    .desired_width(f32::INFINITY),
            )
            .changed()
        {
            msgs.push(UploadMsg::TitleChanged(title));
        }
        ui.add_space(12.0);

        render_metadata_grid(ui, model, &mut msgs);
        ui.add_space(12.0);

        ui.label("Upload Document (PDF)");
        render_drop_zone(ui, model, &mut msgs);
    });
    ui.add_space(16.0);

    let submit_label = if model.submitting {
        "Submitting…".to_string()
    } else {
        format!("{} Submit Research", egui_phosphor::regular::PAPER_PLANE_TILT)
    };
    let submit = egui::Button::new(submit_label).min_size(egui::vec2(ui.available_width(), 36.0));
    if ui
        .add_enabled(!model.submitting, submit)
        .on_disabled_hover_text("Upload in progress")
        .clicked()
    {
        msgs.push(UploadMsg::Submit);
    }

    if let Some(receipt) = &model.last_receipt {
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(format!("Last submission id: {}", receipt.submission_id))
                .small()
                .color(egui::Color32::from_gray(110)),
        );
    }

    msgs
}

/// Research type, strand, and year selectors.
fn render_metadata_grid(ui: &mut egui::Ui, model: &UploadFormModel, msgs: &mut Vec<UploadMsg>) {
    egui::Grid::new("upload_meta_grid")
        .num_columns(2)
        .spacing(egui::vec2(8.0, 10.0))
        .min_col_width(140.0)
        .show(ui, |ui| {
            ui.label("Research Type");
            let mut kind = model.research_type;
            egui::ComboBox::from_id_salt("research_type")
                .selected_text(kind.label())
                .show_ui(ui, |ui| {
                    for option in ResearchType::ALL {
                        ui.selectable_value(&mut kind, option, option.label());
                    }
                });
            if kind != model.research_type {
                msgs.push(UploadMsg::SetResearchType(kind));
            }
            ui.end_row();

            ui.label("Strand / Course");
            let mut strand = model.strand;
            egui::ComboBox::from_id_salt("strand")
                .selected_text(strand.label())
                .show_ui(ui, |ui| {
                    for option in Strand::ALL {
                        ui.selectable_value(&mut strand, option, option.label());
                    }
                });
            if strand != model.strand {
                msgs.push(UploadMsg::SetStrand(strand));
            }
            ui.end_row();

            ui.label("Year Published");
            let mut year = model.year;
            egui::ComboBox::from_id_salt("year")
                .selected_text(year.to_string())
                .show_ui(ui, |ui| {
                    for option in PUBLICATION_YEARS {
                        ui.selectable_value(&mut year, option, option.to_string());
                    }
                });
            if year != model.year {
                msgs.push(UploadMsg::SetYear(year));
            }
            ui.end_row();
        });
}

/// Dashed drop target; clicking it opens the file picker.
fn render_drop_zone(ui: &mut egui::Ui, model: &UploadFormModel, msgs: &mut Vec<UploadMsg>) {
    let visuals = ui.visuals().clone();
    let (fill, stroke) = if model.dragging {
        (
            visuals.selection.bg_fill.gamma_multiply(0.25),
            egui::Stroke::new(2.0, visuals.selection.stroke.color),
        )
    } else {
        (visuals.panel_fill, visuals.window_stroke())
    };

    let frame = egui::Frame::new()
        .fill(fill)
        .stroke(stroke)
        .corner_radius(10.0)
        .inner_margin(24.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| match &model.file {
                Some(file) => {
                    ui.label(egui::RichText::new(egui_phosphor::regular::FILE_PDF).size(32.0));
                    ui.strong(&file.name);
                    ui.label(
                        egui::RichText::new(format_megabytes(file.size))
                            .small()
                            .color(egui::Color32::from_gray(110)),
                    );
                    if ui
                        .button(format!("{} Remove file", egui_phosphor::regular::X))
                        .clicked()
                    {
                        msgs.push(UploadMsg::RemoveFile);
                    }
                }
                None => {
                    ui.label(egui::RichText::new(egui_phosphor::regular::FILE_TEXT).size(40.0));
                    ui.label("Click to upload or drag and drop");
                    ui.label(
                        egui::RichText::new("PDF only, max 10MB")
                            .small()
                            .color(egui::Color32::from_gray(150)),
                    );
                }
            });
        });

    let zone = frame
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .on_hover_text(format!("Accepted type: {PDF_MIME}"));
    // The remove button sits inside the zone; don't also open the picker for it.
    let remove_clicked = msgs.contains(&UploadMsg::RemoveFile);
    if zone.clicked() && !remove_clicked && !model.submitting {
        msgs.push(UploadMsg::BrowseRequested);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;

    const MB: u64 = 1024 * 1024;

    fn file(name: &str, mime: &str, size: u64) -> SelectedFile {
        SelectedFile {
            name: name.into(),
            size,
            mime: mime.into(),
            source: FileSource::Bytes(b"%PDF-".to_vec().into()),
        }
    }

    fn thesis() -> SelectedFile {
        file("thesis.pdf", PDF_MIME, 2 * MB)
    }

    fn apply(model: &mut UploadFormModel, msg: UploadMsg) -> Option<Notification> {
        let mut cmds = Vec::new();
        update(model, msg, &mut cmds)
    }

    #[test]
    fn drag_enter_and_leave_round_trip_to_empty() {
        let mut model = UploadFormModel::default();
        assert_eq!(model.phase(), FilePhase::Empty);

        apply(&mut model, UploadMsg::DragEntered);
        assert_eq!(model.phase(), FilePhase::DragOver);

        assert!(apply(&mut model, UploadMsg::DragLeft).is_none());
        assert_eq!(model.phase(), FilePhase::Empty);
    }

    #[test]
    fn dropping_a_pdf_selects_it_without_rejection() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::DragEntered);

        let event = apply(&mut model, UploadMsg::Dropped(vec![thesis()])).unwrap();

        assert_eq!(model.phase(), FilePhase::Selected);
        assert_eq!(model.file(), Some(&thesis()));
        assert!(!event.is_error);
        assert_eq!(event.message, "File selected: thesis.pdf");
    }

    #[test]
    fn dropping_a_png_is_rejected_and_leaves_slot_empty() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::DragEntered);

        let event = apply(
            &mut model,
            UploadMsg::Dropped(vec![file("figure.png", "image/png", 1024)]),
        )
        .unwrap();

        assert_eq!(model.phase(), FilePhase::Empty);
        assert_eq!(event, Notification::error("Only PDF files are allowed."));
    }

    #[test]
    fn rejected_drop_keeps_prior_selection() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::FilePicked(Some(thesis())));
        apply(&mut model, UploadMsg::DragEntered);
        assert_eq!(model.phase(), FilePhase::DragOver);

        apply(
            &mut model,
            UploadMsg::Dropped(vec![file("figure.png", "image/png", 1024)]),
        );

        assert_eq!(model.phase(), FilePhase::Selected);
        assert_eq!(model.file(), Some(&thesis()));
    }

    #[test]
    fn only_first_dropped_file_is_considered() {
        let mut model = UploadFormModel::default();
        apply(
            &mut model,
            UploadMsg::Dropped(vec![
                file("notes.docx", "application/msword", 10),
                thesis(),
            ]),
        );
        assert!(model.file().is_none());
    }

    #[test]
    fn empty_drop_only_clears_drag_flag() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::DragEntered);

        assert!(apply(&mut model, UploadMsg::Dropped(Vec::new())).is_none());
        assert_eq!(model.phase(), FilePhase::Empty);
    }

    #[test]
    fn picker_and_drop_apply_the_same_rule() {
        let candidates = [
            thesis(),
            file("figure.png", "image/png", 10),
            file("thesis.pdf", "application/x-pdf", 10),
            file("scan.pdf", PDF_MIME, 0),
        ];
        for candidate in candidates {
            let mut picked = UploadFormModel::default();
            let mut dropped = UploadFormModel::default();
            let pick_event = apply(&mut picked, UploadMsg::FilePicked(Some(candidate.clone())));
            let drop_event = apply(&mut dropped, UploadMsg::Dropped(vec![candidate.clone()]));

            assert_eq!(picked.file(), dropped.file(), "{}", candidate.name);
            let pick_rejection = pick_event.filter(|e| e.is_error);
            let drop_rejection = drop_event.filter(|e| e.is_error);
            assert_eq!(pick_rejection, drop_rejection, "{}", candidate.name);
        }
    }

    #[test]
    fn picker_selection_is_silent_and_cancel_is_noop() {
        let mut model = UploadFormModel::default();
        assert!(apply(&mut model, UploadMsg::FilePicked(Some(thesis()))).is_none());
        assert_eq!(model.phase(), FilePhase::Selected);

        assert!(apply(&mut model, UploadMsg::FilePicked(None)).is_none());
        assert_eq!(model.file(), Some(&thesis()));
    }

    #[test]
    fn browse_requests_picker_command() {
        let mut model = UploadFormModel::default();
        let mut cmds = Vec::new();
        update(&mut model, UploadMsg::BrowseRequested, &mut cmds);
        assert_eq!(cmds, vec![UploadCommand::PickFile]);
    }

    #[test]
    fn remove_is_idempotent_and_silent() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::FilePicked(Some(thesis())));

        assert!(apply(&mut model, UploadMsg::RemoveFile).is_none());
        assert_eq!(model.phase(), FilePhase::Empty);
        assert!(apply(&mut model, UploadMsg::RemoveFile).is_none());
        assert_eq!(model.phase(), FilePhase::Empty);
    }

    #[test]
    fn stray_drag_leave_changes_nothing() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::FilePicked(Some(thesis())));

        assert!(apply(&mut model, UploadMsg::DragLeft).is_none());

        assert_eq!(model.phase(), FilePhase::Selected);
        assert_eq!(model.file(), Some(&thesis()));
    }

    #[test]
    fn size_ceiling_only_applies_when_configured() {
        let big = file("huge.pdf", PDF_MIME, 11 * MB);

        let mut lenient = UploadFormModel::new(None);
        apply(&mut lenient, UploadMsg::FilePicked(Some(big.clone())));
        assert!(lenient.file().is_some());

        let mut strict = UploadFormModel::new(Some(10 * MB));
        let event = apply(&mut strict, UploadMsg::FilePicked(Some(big))).unwrap();
        assert!(strict.file().is_none());
        assert_eq!(
            event.message,
            "File exceeds the maximum size of 10.00 MB."
        );
    }

    #[test]
    fn submit_without_file_fails_without_command() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::TitleChanged("A Study".into()));
        let mut cmds = Vec::new();

        let event = update(&mut model, UploadMsg::Submit, &mut cmds).unwrap();

        assert!(cmds.is_empty());
        assert!(!model.is_submitting());
        assert_eq!(event, Notification::error("Please upload a PDF document."));
    }

    #[test]
    fn submit_requires_title() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::FilePicked(Some(thesis())));
        apply(&mut model, UploadMsg::TitleChanged("   ".into()));
        let mut cmds = Vec::new();

        let event = update(&mut model, UploadMsg::Submit, &mut cmds).unwrap();

        assert!(cmds.is_empty());
        assert_eq!(event.message, "Please enter the research title.");
    }

    #[test]
    fn complete_form_submits_payload_and_reports_success() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::TitleChanged("  Solar Dryers  ".into()));
        apply(&mut model, UploadMsg::SetResearchType(ResearchType::Quantitative));
        apply(&mut model, UploadMsg::SetStrand(Strand::Abm));
        apply(&mut model, UploadMsg::SetYear(2024));
        apply(&mut model, UploadMsg::FilePicked(Some(thesis())));
        let mut cmds = Vec::new();

        update(&mut model, UploadMsg::Submit, &mut cmds);

        assert!(model.is_submitting());
        assert_eq!(
            cmds,
            vec![UploadCommand::Submit(SubmissionPayload {
                file: thesis(),
                metadata: ResearchMetadata {
                    title: "Solar Dryers".into(),
                    research_type: ResearchType::Quantitative,
                    strand: Strand::Abm,
                    year: 2024,
                },
            })]
        );

        // A second click while the upload runs is ignored.
        update(&mut model, UploadMsg::Submit, &mut cmds);
        assert_eq!(cmds.len(), 1);

        let receipt = SubmissionReceipt {
            submission_id: uuid::Uuid::nil(),
            location: "archive/x.zip".into(),
            sha256: "00".into(),
        };
        let event = apply(&mut model, UploadMsg::SubmitCompleted(Ok(receipt.clone()))).unwrap();

        assert_eq!(event, Notification::info("Research uploaded successfully!"));
        assert!(!model.is_submitting());
        assert!(model.file().is_none());
        assert!(model.title().is_empty());
        assert_eq!(model.last_receipt(), Some(&receipt));
    }

    #[test]
    fn failed_submission_keeps_form_intact() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::TitleChanged("Solar Dryers".into()));
        apply(&mut model, UploadMsg::FilePicked(Some(thesis())));
        apply(&mut model, UploadMsg::Submit);

        let event = apply(
            &mut model,
            UploadMsg::SubmitCompleted(Err("Archive storage unavailable: disk full".into())),
        )
        .unwrap();

        assert!(event.is_error);
        assert!(event.message.contains("disk full"));
        assert_eq!(model.file(), Some(&thesis()));
        assert_eq!(model.title(), "Solar Dryers");
        assert!(!model.is_submitting());
    }

    #[test]
    fn unknown_year_is_ignored() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::SetYear(1999));
        assert_eq!(model.metadata().year, 2026);
    }

    #[test]
    fn drag_messages_follow_hover_edges() {
        assert_eq!(drag_messages(false, true, None), vec![UploadMsg::DragEntered]);
        assert_eq!(drag_messages(true, false, None), vec![UploadMsg::DragLeft]);
        assert!(drag_messages(true, true, None).is_empty());
        assert!(drag_messages(false, false, None).is_empty());
        assert_eq!(
            drag_messages(true, false, Some(Ok(thesis()))),
            vec![UploadMsg::Dropped(vec![thesis()])]
        );
        assert_eq!(
            drag_messages(true, false, Some(Err("gone".into()))),
            vec![UploadMsg::FilePickFailed("gone".into())]
        );
    }

    #[test]
    fn form_is_frozen_while_uploading() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::TitleChanged("First Study".into()));
        apply(&mut model, UploadMsg::FilePicked(Some(file("a.pdf", PDF_MIME, 10))));
        apply(&mut model, UploadMsg::Submit);
        assert!(model.is_submitting());

        apply(&mut model, UploadMsg::DragEntered);
        let event = apply(
            &mut model,
            UploadMsg::Dropped(vec![file("b.pdf", PDF_MIME, 10)]),
        )
        .unwrap();
        assert!(event.is_error);
        assert_eq!(event.message, "Please wait until the current upload finishes.");
        assert!(!model.is_dragging());

        let mut cmds = Vec::new();
        update(&mut model, UploadMsg::BrowseRequested, &mut cmds);
        assert!(cmds.is_empty());
        apply(&mut model, UploadMsg::TitleChanged("Second Study".into()));
        apply(&mut model, UploadMsg::RemoveFile);
        assert_eq!(model.title(), "First Study");
        assert_eq!(model.file().map(|f| f.name.as_str()), Some("a.pdf"));

        let receipt = SubmissionReceipt {
            submission_id: uuid::Uuid::nil(),
            location: "archive/a.zip".into(),
            sha256: "00".into(),
        };
        apply(&mut model, UploadMsg::SubmitCompleted(Ok(receipt)));

        // Editing resumes once the upload settles.
        apply(&mut model, UploadMsg::Dropped(vec![file("b.pdf", PDF_MIME, 10)]));
        assert_eq!(model.file().map(|f| f.name.as_str()), Some("b.pdf"));
    }

    #[test]
    fn failed_drop_read_clears_drag_and_reports() {
        let mut model = UploadFormModel::default();
        apply(&mut model, UploadMsg::DragEntered);
        assert!(model.is_dragging());

        let event = apply(&mut model, UploadMsg::FilePickFailed("denied".into())).unwrap();

        assert!(!model.is_dragging());
        assert_eq!(model.phase(), FilePhase::Empty);
        assert_eq!(event, Notification::error("Could not read file: denied"));
    }

    #[test]
    fn native_drop_matches_picked_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("thesis.pdf");
        fs::write(&path, b"%PDF-1.7").unwrap();
        let dropped = egui::DroppedFile {
            path: Some(path.clone()),
            ..Default::default()
        };

        let candidate = candidate_from_drop(&dropped).unwrap();
        let picked = SelectedFile::from_path(path).unwrap();

        assert_eq!(candidate, picked);
        assert_eq!(candidate.mime, PDF_MIME);
        assert_eq!(candidate.size, 8);
    }

    #[test]
    fn reported_mime_and_name_take_precedence() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("upload.tmp");
        fs::write(&path, b"%PDF-1.7").unwrap();
        let dropped = egui::DroppedFile {
            path: Some(path),
            name: "figure.pdf".into(),
            mime: "image/png".into(),
            ..Default::default()
        };

        let candidate = candidate_from_drop(&dropped).unwrap();

        assert_eq!(candidate.name, "figure.pdf");
        assert_eq!(candidate.mime, "image/png");
        assert_eq!(validate_file(&candidate), Err(FormError::InvalidFileType));
    }

    #[test]
    fn byte_drop_guesses_mime_from_name() {
        let bytes: Arc<[u8]> = b"%PDF-1.4 scan".to_vec().into();
        let dropped = egui::DroppedFile {
            name: "scan.pdf".into(),
            bytes: Some(bytes.clone()),
            ..Default::default()
        };

        let candidate = candidate_from_drop(&dropped).unwrap();

        assert_eq!(candidate.name, "scan.pdf");
        assert_eq!(candidate.mime, PDF_MIME);
        assert_eq!(candidate.size, bytes.len() as u64);
        assert_eq!(candidate.source, FileSource::Bytes(bytes));
    }

    #[test]
    fn unusable_drops_are_errors() {
        let nameless = egui::DroppedFile {
            bytes: Some(b"%PDF-".to_vec().into()),
            ..Default::default()
        };
        assert!(candidate_from_drop(&nameless).is_err());

        assert!(candidate_from_drop(&egui::DroppedFile::default()).is_err());

        // A vanished file must not pass as an empty document.
        let tmp = TempDir::new().unwrap();
        let missing = egui::DroppedFile {
            path: Some(tmp.path().join("gone.pdf")),
            ..Default::default()
        };
        let err = candidate_from_drop(&missing).unwrap_err();
        assert!(format!("{err:#}").contains("gone.pdf"), "{err:#}");
    }
}
