// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! Generation of the reference documents that make up the bundle.
//!
//! One ordered registry drives everything: [`reference_files()`] lists the
//! eleven documents in bundle order, [`materialize()`] writes them to disk,
//! and the default package manifest is derived from the same list. Every
//! renderer is a pure function of static data, so regenerating a document
//! always produces identical bytes.

pub mod banking;
pub mod csv;
pub mod documents;
pub mod guides;
pub mod taxation;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::report::FileKind;

/// A generated reference document: its place in the bundle and how to
/// produce its text.
#[derive(Clone)]
pub struct ReferenceFile {
    path: &'static str,
    renderer: fn() -> String,
}

impl ReferenceFile {
    /// Relative path of the document inside the bundle.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Coarse kind used for report tallies, classified from the extension.
    pub fn kind(&self) -> FileKind {
        FileKind::classify(self.path)
    }

    /// Produce the document text.
    pub fn render(&self) -> String {
        (self.renderer)()
    }
}

/// Every reference document in bundle order: the data tables first, then
/// the documentation set.
pub fn reference_files() -> Vec<ReferenceFile> {
    vec![
        ReferenceFile {
            path: "indian_taxation_document_structure.json",
            renderer: taxation::render_document_structure,
        },
        ReferenceFile {
            path: "document_field_summary.csv",
            renderer: documents::render_field_summary,
        },
        ReferenceFile {
            path: "purchase_requisition_fields.csv",
            renderer: documents::render_purchase_requisition_fields,
        },
        ReferenceFile {
            path: "purchase_order_fields.csv",
            renderer: documents::render_purchase_order_fields,
        },
        ReferenceFile {
            path: "banking_instruments_compliance_structure.json",
            renderer: banking::render_instruments_structure,
        },
        ReferenceFile {
            path: "due_date_tracking_matrix.csv",
            renderer: banking::render_due_date_matrix,
        },
        ReferenceFile {
            path: "rbi_compliance_checklist.csv",
            renderer: banking::render_rbi_checklist,
        },
        ReferenceFile {
            path: "COMPREHENSIVE_SYSTEM_DOCUMENTATION.md",
            renderer: guides::render_system_documentation,
        },
        ReferenceFile {
            path: "IMPLEMENTATION_GUIDE.md",
            renderer: guides::render_implementation_guide,
        },
        ReferenceFile {
            path: "MASTER_CONFIG.json",
            renderer: guides::render_master_config,
        },
        ReferenceFile {
            path: "API_DOCUMENTATION.md",
            renderer: guides::render_api_documentation,
        },
    ]
}

/// Write every reference document under `dir`, creating it if missing.
///
/// Rerunning overwrites each file with identical bytes.
pub fn materialize(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {:?}", dir))?;

    for file in reference_files() {
        let path = dir.join(file.path());
        fs::write(&path, file.render())
            .with_context(|| format!("Failed to write reference file {:?}", path))?;
        tracing::debug!(path = %file.path(), "materialized reference file");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{materialize, reference_files};
    use crate::report::FileKind;

    // The registry order is the bundle order; the archive depends on it.
    #[test]
    fn registry_lists_eleven_documents_in_bundle_order() {
        let files = reference_files();
        assert_eq!(files.len(), 11);
        assert_eq!(files[0].path(), "indian_taxation_document_structure.json");
        assert_eq!(files[10].path(), "API_DOCUMENTATION.md");
    }

    #[test]
    fn registry_kinds_split_into_data_and_documentation() {
        let files = reference_files();
        let json = files.iter().filter(|f| f.kind() == FileKind::Json).count();
        let csv = files.iter().filter(|f| f.kind() == FileKind::Csv).count();
        let md = files
            .iter()
            .filter(|f| f.kind() == FileKind::Markdown)
            .count();

        assert_eq!((json, csv, md), (3, 5, 3));
    }

    #[test]
    fn materialize_writes_every_document() {
        let tmp = TempDir::new().unwrap();
        materialize(tmp.path()).unwrap();

        for file in reference_files() {
            let path = tmp.path().join(file.path());
            assert!(path.is_file(), "{} missing", file.path());
            assert!(fs::metadata(&path).unwrap().len() > 0);
        }
    }

    // Regeneration must be byte-stable; the idempotent archive depends on it.
    #[test]
    fn materialize_is_byte_stable_across_reruns() {
        let tmp = TempDir::new().unwrap();
        materialize(tmp.path()).unwrap();
        let before = fs::read(tmp.path().join("due_date_tracking_matrix.csv")).unwrap();

        materialize(tmp.path()).unwrap();
        let after = fs::read(tmp.path().join("due_date_tracking_matrix.csv")).unwrap();

        assert_eq!(before, after);
    }
}
