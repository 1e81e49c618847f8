// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Turn user-supplied file names into safe single path components.

/// Windows device names that cannot be used as a file basename.
const RESERVED_BASENAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

/// Name used when nothing usable survives sanitization.
const FALLBACK_NAME: &str = "resume";

/// Produce a filesystem-safe path component from an uploaded file name.
///
/// Unicode is transliterated to ASCII (`deunicode`), anything outside
/// `[A-Za-z0-9._-]` becomes `_`, runs of `_`/`.` collapse, trailing dots are
/// trimmed, and reserved device basenames get a `_` suffix. The extension is
/// preserved so external viewers still recognise the file type.
pub fn sanitize_component(value: &str) -> String {
    let ascii = deunicode::deunicode(value);
    let mut out = String::with_capacity(ascii.len());

    for ch in ascii.chars() {
        let mapped = match ch {
            c if c.is_ascii_alphanumeric() || c == '-' => c,
            '.' => '.',
            _ => '_',
        };
        let repeated_separator = matches!(mapped, '_' | '.') && out.ends_with(mapped);
        if !repeated_separator {
            out.push(mapped);
        }
    }

    while let Some(pos) = out.find("_.") {
        out.remove(pos);
    }
    let trimmed = out.trim_end_matches(['.', ' ']).len();
    out.truncate(trimmed);

    if out.is_empty() || out == "_" {
        return FALLBACK_NAME.to_string();
    }

    let (base, ext) = match out.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base, Some(ext)),
        _ => (out.as_str(), None),
    };
    if RESERVED_BASENAMES.contains(&base.to_ascii_uppercase().as_str()) {
        return match ext {
            Some(ext) => format!("{base}_.{ext}"),
            None => format!("{base}_"),
        };
    }

    out
}

#[cfg(test)]
mod tests {
    use super::sanitize_component;

    #[test]
    fn transliterates_and_keeps_extension() {
        assert_eq!(sanitize_component("Lebenslauf Müller.pdf"), "Lebenslauf_Muller.pdf");
        assert_eq!(sanitize_component("My CV (final).docx"), "My_CV_final.docx");
    }

    #[test]
    fn collapses_separators_and_dots() {
        assert_eq!(sanitize_component("cv//2025..v2.pdf"), "cv_2025.v2.pdf");
    }

    #[test]
    fn trims_trailing_dots() {
        assert_eq!(sanitize_component("resume.pdf.."), "resume.pdf");
    }

    #[test]
    fn guards_reserved_and_empty_names() {
        assert_eq!(sanitize_component("CON"), "CON_");
        assert_eq!(sanitize_component("nul.pdf"), "nul_.pdf");
        assert_eq!(sanitize_component("..."), "resume");
        assert_eq!(sanitize_component(""), "resume");
    }
}
