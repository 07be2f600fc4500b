// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Filesystem-safe naming for archived research documents.

/// Name used when nothing usable survives sanitization.
const FALLBACK_NAME: &str = "research";

/// Windows device names that cannot be used as a file basename.
const RESERVED_BASENAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Turn a research title (or any user text) into a single path component.
///
/// # Steps
/// - Transliterate Unicode to ASCII with `deunicode` ("Café" → "Cafe").
/// - Keep ASCII alphanumerics plus `-`, `_`, `.`; everything else becomes `_`.
/// - Collapse runs of `_` and `.`, drop `_` right before a dot, trim trailing dots/spaces.
/// - Fall back to `research` for empty names and suffix reserved device names.
///
/// The archive naming convention (`Year_Strand_Title.pdf`) forbids spaces and
/// special characters, which is exactly what this produces.
pub fn sanitize_component(value: &str) -> String {
    let transliterated = deunicode::deunicode(value);
    let mut out = String::with_capacity(transliterated.len());

    for ch in transliterated.chars() {
        let mapped = if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | '.') {
            ch
        } else {
            '_'
        };
        let collapses = matches!(mapped, '_' | '.') && out.ends_with(mapped);
        if !collapses {
            out.push(mapped);
        }
    }

    while let Some(pos) = out.find("_.") {
        out.remove(pos);
    }
    while out.ends_with('.') || out.ends_with(' ') {
        out.pop();
    }

    if out.is_empty() || out == "_" || out == "." || out == ".." {
        return FALLBACK_NAME.to_string();
    }

    guard_reserved(out)
}

/// Append `_` to basenames that collide with Windows device names.
fn guard_reserved(name: String) -> String {
    let (basename, ext) = match name.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base, Some(ext)),
        _ => (name.as_str(), None),
    };

    let upper = basename.to_ascii_uppercase();
    if !RESERVED_BASENAMES.contains(&upper.as_str()) {
        return name;
    }

    match ext {
        Some(ext) => format!("{basename}_.{ext}"),
        None => format!("{basename}_"),
    }
}

#[cfg(test)]
mod tests {
    use super::sanitize_component;

    #[test]
    fn transliterates_accents_and_punctuation() {
        assert_eq!(
            sanitize_component("Café Waste: A Study"),
            "Cafe_Waste_A_Study"
        );
    }

    #[test]
    fn collapses_separators_and_keeps_extension() {
        assert_eq!(
            sanitize_component("2024 STEM  Solar   Dryers.pdf"),
            "2024_STEM_Solar_Dryers.pdf"
        );
        assert_eq!(sanitize_component("thesis..final...pdf"), "thesis.final.pdf");
    }

    #[test]
    fn trims_trailing_dots() {
        assert_eq!(sanitize_component("abstract."), "abstract");
    }

    #[test]
    fn suffixes_reserved_device_names() {
        assert_eq!(sanitize_component("CON"), "CON_");
        assert_eq!(sanitize_component("nul.pdf"), "nul_.pdf");
    }

    #[test]
    fn falls_back_when_nothing_survives() {
        assert_eq!(sanitize_component("..."), "research");
        assert_eq!(sanitize_component("???"), "research");
        assert_eq!(sanitize_component(""), "research");
    }
}
