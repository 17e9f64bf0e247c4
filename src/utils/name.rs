// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! Filesystem-safe names for generated archives.

/// Reduce an arbitrary bundle title to a filesystem-safe path component.
///
/// Unicode is transliterated to ASCII with `deunicode` ("₹" → "Rs", "é" →
/// "e"); anything outside ASCII alphanumerics, `-`, `_`, and `.` becomes
/// `_`; runs of `_` and `.` collapse; trailing dots and spaces are trimmed
/// (they break extraction on Windows); Windows reserved device names get an
/// `_` suffix. Multi-part extensions survive (`fields.v2.csv` stays
/// `fields.v2.csv`).
pub fn sanitize_component(value: &str) -> String {
    let transliterated = deunicode::deunicode(value);
    let mut out = String::with_capacity(transliterated.len());
    let mut last: Option<char> = None;

    for ch in transliterated.chars() {
        let mapped = if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.' {
            ch
        } else {
            '_'
        };

        match mapped {
            '_' => {
                if last != Some('_') {
                    out.push('_');
                    last = Some('_');
                }
            }
            '.' => {
                if last != Some('.') {
                    out.push('.');
                    last = Some('.');
                }
            }
            c => {
                out.push(c);
                last = Some(c);
            }
        }
    }

    // An underscore directly before a dot reads as a typo; drop it.
    while let Some(pos) = out.find("_.") {
        out.remove(pos);
    }

    while out.ends_with('.') || out.ends_with(' ') {
        out.pop();
    }

    if out.is_empty() || out == "." || out == ".." {
        return "compliance_bundle".to_string();
    }

    // Windows refuses CON, NUL, COM1… as basenames regardless of extension.
    let (basename, ext) = match out.rsplit_once('.') {
        Some((base, ext)) if !base.is_empty() => (base.to_string(), Some(ext.to_string())),
        _ => (out.clone(), None),
    };

    let upper = basename.to_ascii_uppercase();
    let is_reserved = matches!(
        upper.as_str(),
        "CON"
            | "PRN"
            | "AUX"
            | "NUL"
            | "COM1"
            | "COM2"
            | "COM3"
            | "COM4"
            | "COM5"
            | "COM6"
            | "COM7"
            | "COM8"
            | "COM9"
            | "LPT1"
            | "LPT2"
            | "LPT3"
            | "LPT4"
            | "LPT5"
            | "LPT6"
            | "LPT7"
            | "LPT8"
            | "LPT9"
    );

    if is_reserved {
        let mut new_base = basename;
        new_base.push('_');
        out = if let Some(ext) = ext {
            format!("{new_base}.{ext}")
        } else {
            new_base
        };
    }

    out
}

/// Suggest a safe archive filename from a bundle title.
///
/// Sanitizes and lowercases the title, then appends `.zip`. Falls back to
/// `compliance_bundle.zip` when nothing printable survives.
pub fn suggested_archive_name(title: &str) -> String {
    let base = sanitize_component(title).to_ascii_lowercase();
    let final_base = if base.is_empty() {
        "compliance_bundle"
    } else {
        &base
    };
    format!("{}.zip", final_base)
}

#[cfg(test)]
mod tests {
    use super::{sanitize_component, suggested_archive_name};

    // Punctuation and separators must not leak into filenames.
    #[test]
    fn sanitize_component_collapses_punctuation_and_whitespace() {
        let result = sanitize_component("GST Returns (FY 2025-26): Q1 & Q2");
        assert_eq!(result, "GST_Returns_FY_2025-26_Q1_Q2");
    }

    // Accented titles transliterate instead of being dropped.
    #[test]
    fn sanitize_component_transliterates_unicode() {
        assert_eq!(sanitize_component("résumé.json"), "resume.json");
    }

    // Multi-part extensions stay intact while dot runs are deduplicated.
    #[test]
    fn sanitize_component_deduplicates_dots_and_keeps_extensions() {
        let result = sanitize_component("fields..v2...csv");
        assert_eq!(result, "fields.v2.csv");
    }

    #[test]
    fn sanitize_component_trims_trailing_dots() {
        assert_eq!(sanitize_component("checklist."), "checklist");
    }

    // Reserved Windows device names in the basename get a suffix.
    #[test]
    fn sanitize_component_guards_windows_reserved_basenames() {
        assert_eq!(sanitize_component("CON"), "CON_");
        assert_eq!(sanitize_component("NUL.json"), "NUL_.json");
    }

    #[test]
    fn sanitize_component_falls_back_for_empty_input() {
        assert_eq!(sanitize_component("…"), "compliance_bundle");
        assert_eq!(sanitize_component(".."), "compliance_bundle");
    }

    #[test]
    fn suggested_archive_name_lowercases_and_appends_zip() {
        let result = suggested_archive_name("Complete Indian Taxation & Compliance");
        assert_eq!(result, "complete_indian_taxation_compliance.zip");
    }
}
