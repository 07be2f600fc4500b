// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Static archive guidelines page.

use eframe::egui;

/// One labelled rule inside a section.
pub struct GuidelineItem {
    pub label: &'static str,
    pub heading: &'static str,
    pub body: &'static str,
}

pub struct GuidelineSection {
    pub icon: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub items: &'static [GuidelineItem],
}

pub struct Contact {
    pub role: &'static str,
    pub email: &'static str,
}

pub const SECTIONS: &[GuidelineSection] = &[
    GuidelineSection {
        icon: egui_phosphor::regular::FILE_TEXT,
        title: "Submission Standards",
        intro: "To maintain the integrity and accessibility of the archive, all submissions must \
                adhere to the following technical and formatting standards. Failure to comply may \
                result in the rejection of your upload.",
        items: &[
            GuidelineItem {
                label: "Format",
                heading: "PDF (Portable Document Format) Only",
                body: "All documents must be converted to PDF to ensure cross-platform \
                       compatibility and preservation of formatting. Word documents (.docx) are \
                       not accepted.",
            },
            GuidelineItem {
                label: "Size",
                heading: "Maximum 10 MB",
                body: "Optimize images and charts before converting to PDF. For files exceeding \
                       this limit, please contact the administrator for compression assistance.",
            },
            GuidelineItem {
                label: "Naming",
                heading: "Standardized File Naming",
                body: "Use the format: Year_Strand_Title_LastName.pdf. Avoid special characters \
                       and spaces.",
            },
        ],
    },
    GuidelineSection {
        icon: egui_phosphor::regular::SCALES,
        title: "Academic Integrity & Ethics",
        intro: "The Research Archive operates under strict ethical guidelines. All submitting \
                authors certify that their work is original and properly cited.",
        items: &[
            GuidelineItem {
                label: "Policy",
                heading: "Plagiarism Policy",
                body: "Submissions found to violate intellectual property rights or contain \
                       uncited material will be removed immediately and reported to the Academic \
                       Affairs office.",
            },
            GuidelineItem {
                label: "Privacy",
                heading: "Data Privacy",
                body: "Redact sensitive personal information (PII) of participants, including \
                       names, addresses, and contact details, prior to upload.",
            },
        ],
    },
    GuidelineSection {
        icon: egui_phosphor::regular::SHIELD_WARNING,
        title: "Copyright & Usage",
        intro: "By submitting to the archive, authors grant the institution a non-exclusive, \
                perpetual license to store, reproduce, and make the work available for academic \
                and research purposes.",
        items: &[GuidelineItem {
            label: "Rights",
            heading: "Authors retain full copyright",
            body: "This archive serves as a repository for preservation and knowledge sharing, \
                   not as a publisher claiming ownership.",
        }],
    },
];

pub const CHECKLIST: [&str; 6] = [
    "Title Page is accurate",
    "Approval Sheet signed",
    "Abstract included",
    "Keywords defined (3-5)",
    "References in APA 7th Ed.",
    "Appendices attached",
];

pub const CONTACTS: [Contact; 2] = [
    Contact {
        role: "IT Support",
        email: "support@act.edu.ph",
    },
    Contact {
        role: "Research Coordinator",
        email: "research@act.edu.ph",
    },
];

/// Render the guidelines. The page has no state and emits no messages.
pub fn view(ui: &mut egui::Ui) {
    ui.heading("Research Archive Guidelines");
    ui.label(
        egui::RichText::new(
            "Comprehensive standards and protocols for the submission, storage, and utilization \
             of academic research within the ACT institutional repository.",
        )
        .color(egui::Color32::from_gray(110)),
    );
    ui.add_space(12.0);

    for section in SECTIONS {
        render_section(ui, section);
        ui.add_space(12.0);
    }

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.strong(format!(
            "{} Pre-Submission Checklist",
            egui_phosphor::regular::BOOK_OPEN
        ));
        ui.add_space(4.0);
        for item in CHECKLIST {
            ui.label(format!("{} {item}", egui_phosphor::regular::CHECK_SQUARE));
        }
    });
    ui.add_space(12.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.strong(format!("{} Need Assistance?", egui_phosphor::regular::QUESTION));
        ui.label(
            "For technical issues regarding file conversion, upload errors, or account access, \
             please contact the IT Support Office.",
        );
        ui.add_space(4.0);
        for contact in &CONTACTS {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(contact.role).strong());
                ui.label(
                    egui::RichText::new(contact.email).color(egui::Color32::from_gray(110)),
                );
            });
        }
    });
}

fn render_section(ui: &mut egui::Ui, section: &GuidelineSection) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            egui::RichText::new(format!("{} {}", section.icon, section.title))
                .size(18.0)
                .strong(),
        );
        ui.add_space(4.0);
        ui.label(section.intro);
        ui.add_space(6.0);

        egui::Grid::new(section.title)
            .num_columns(2)
            .spacing(egui::vec2(12.0, 8.0))
            .show(ui, |ui| {
                for item in section.items {
                    ui.label(egui::RichText::new(item.label).strong());
                    ui.vertical(|ui| {
                        ui.label(egui::RichText::new(item.heading).strong());
                        ui.label(egui::RichText::new(item.body).small());
                    });
                    ui.end_row();
                }
            });
    });
}
