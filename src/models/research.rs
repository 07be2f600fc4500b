// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Research metadata collected alongside an uploaded document.

use serde::Serialize;

use crate::utils::sanitize_component;

/// Methodology of the submitted research.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum ResearchType {
    #[default]
    Qualitative,
    Quantitative,
}

impl ResearchType {
    pub const ALL: [ResearchType; 2] = [ResearchType::Qualitative, ResearchType::Quantitative];

    pub fn label(&self) -> &'static str {
        match self {
            ResearchType::Qualitative => "Qualitative",
            ResearchType::Quantitative => "Quantitative",
        }
    }
}

/// Academic strand (curriculum track) used to categorize submissions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub enum Strand {
    #[default]
    #[serde(rename = "STEM")]
    Stem,
    #[serde(rename = "HUMSS")]
    Humss,
    #[serde(rename = "ABM")]
    Abm,
    #[serde(rename = "TVL-ICT")]
    TvlIct,
    #[serde(rename = "TVL-ICT (HS)")]
    TvlIctHs,
    #[serde(rename = "TVL-HE")]
    TvlHe,
    #[serde(rename = "GAS")]
    Gas,
    #[serde(rename = "ARTS AND DESIGN")]
    ArtsAndDesign,
}

impl Strand {
    /// All strands in display order.
    pub const ALL: [Strand; 8] = [
        Strand::Stem,
        Strand::Humss,
        Strand::Abm,
        Strand::TvlIct,
        Strand::TvlIctHs,
        Strand::TvlHe,
        Strand::Gas,
        Strand::ArtsAndDesign,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Strand::Stem => "STEM",
            Strand::Humss => "HUMSS",
            Strand::Abm => "ABM",
            Strand::TvlIct => "TVL-ICT",
            Strand::TvlIctHs => "TVL-ICT (HS)",
            Strand::TvlHe => "TVL-HE",
            Strand::Gas => "GAS",
            Strand::ArtsAndDesign => "ARTS AND DESIGN",
        }
    }
}

/// Publication years offered by the form, newest first.
pub const PUBLICATION_YEARS: [u16; 4] = [2026, 2025, 2024, 2023];

/// Validated metadata for one submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchMetadata {
    pub title: String,
    pub research_type: ResearchType,
    pub strand: Strand,
    pub year: u16,
}

impl ResearchMetadata {
    /// Archive filename following the `Year_Strand_Title.pdf` convention.
    ///
    /// Uses [`crate::utils::sanitize_component()`] for every part so the name
    /// carries no spaces or special characters.
    pub fn suggested_file_name(&self) -> String {
        let base = sanitize_component(&format!(
            "{}_{}_{}",
            self.year,
            self.strand.label(),
            self.title
        ));
        format!("{base}.pdf")
    }
}
