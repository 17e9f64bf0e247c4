// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! Console reporting for assembled archives.
//!
//! Pure string rendering; the binary decides where the lines go. The
//! per-member `✓ Added` / `✗ Missing` lines follow the bundle's published
//! console output. Nothing here is a machine-readable contract.

use std::collections::HashSet;
use std::path::Path;

use crate::archive::{ArchiveResult, README_MEMBER};
use crate::manifest::ArchiveManifest;

/// Coarse classification of bundle members, by extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Json,
    Csv,
    Markdown,
    Text,
    Other,
}

impl FileKind {
    /// Classify a member path by its extension, case-insensitively.
    pub fn classify(path: &str) -> FileKind {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "json" => FileKind::Json,
            "csv" => FileKind::Csv,
            "md" => FileKind::Markdown,
            "txt" => FileKind::Text,
            _ => FileKind::Other,
        }
    }
}

/// One `✓ Added` / `✗ Missing` line per manifest entry, in manifest order,
/// closed by the synthetic README line.
pub fn render_member_lines(manifest: &ArchiveManifest, result: &ArchiveResult) -> Vec<String> {
    let skipped: HashSet<&str> = result.skipped.iter().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(manifest.len() + 1);
    for entry in manifest {
        if skipped.contains(entry.as_str()) {
            lines.push(format!("✗ Missing {entry}"));
        } else {
            lines.push(format!("✓ Added {entry}"));
        }
    }
    lines.push(format!("✓ Added {README_MEMBER}"));
    lines
}

/// Multi-line summary block: member count, on-disk size, kind tallies, and
/// the archive digest.
pub fn render_summary(result: &ArchiveResult, archive_name: &str) -> String {
    let mut documentation = 0usize;
    let mut data = 0usize;
    let mut configuration = 0usize;
    for member in result.included.iter().map(String::as_str).chain([README_MEMBER]) {
        match FileKind::classify(member) {
            // The README counts as documentation, like the published totals.
            FileKind::Markdown | FileKind::Text => documentation += 1,
            FileKind::Csv => data += 1,
            FileKind::Json => configuration += 1,
            FileKind::Other => {}
        }
    }

    format!(
        "Archive: {name}\n\
         Contains {members} members ({skipped} manifest entries skipped)\n\
         Size: {bytes} bytes ({kb:.1} KB)\n\
         Documentation: {documentation} | Data: {data} | Configuration: {configuration}\n\
         SHA-256: {digest}",
        name = archive_name,
        members = result.member_count,
        skipped = result.skipped.len(),
        bytes = group_thousands(result.archive_bytes),
        kb = result.archive_bytes as f64 / 1024.0,
        digest = result.archive_sha256,
    )
}

/// Format an integer with thousands separators ("24580" → "24,580").
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{FileKind, group_thousands, render_member_lines, render_summary};
    use crate::archive::ArchiveResult;
    use crate::manifest::ArchiveManifest;

    fn sample_result() -> ArchiveResult {
        ArchiveResult {
            included: vec!["a.json".into(), "c.md".into()],
            skipped: vec!["b.csv".into()],
            member_count: 3,
            archive_bytes: 24580,
            archive_sha256: "deadbeef".into(),
        }
    }

    #[test]
    fn classify_maps_known_extensions_case_insensitively() {
        assert_eq!(FileKind::classify("MASTER_CONFIG.json"), FileKind::Json);
        assert_eq!(FileKind::classify("rates.CSV"), FileKind::Csv);
        assert_eq!(FileKind::classify("GUIDE.md"), FileKind::Markdown);
        assert_eq!(FileKind::classify("README.txt"), FileKind::Text);
        assert_eq!(FileKind::classify("archive.zip"), FileKind::Other);
        assert_eq!(FileKind::classify("Makefile"), FileKind::Other);
    }

    // Lines interleave in manifest order, with the README line last.
    #[test]
    fn member_lines_follow_manifest_order() {
        let manifest = ArchiveManifest::new(["a.json", "b.csv", "c.md"]);
        let lines = render_member_lines(&manifest, &sample_result());

        assert_eq!(
            lines,
            [
                "✓ Added a.json",
                "✗ Missing b.csv",
                "✓ Added c.md",
                "✓ Added README.txt",
            ]
        );
    }

    #[test]
    fn summary_reports_size_tallies_and_digest() {
        let summary = render_summary(&sample_result(), "bundle.zip");

        assert!(summary.contains("Archive: bundle.zip"));
        assert!(summary.contains("Contains 3 members (1 manifest entries skipped)"));
        assert!(summary.contains("Size: 24,580 bytes (24.0 KB)"));
        // a.json configures, c.md and README.txt document, b.csv was skipped.
        assert!(summary.contains("Documentation: 2 | Data: 0 | Configuration: 1"));
        assert!(summary.contains("SHA-256: deadbeef"));
    }

    #[test]
    fn group_thousands_inserts_separators() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(24580), "24,580");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
