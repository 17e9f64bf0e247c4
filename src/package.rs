// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! Bundle definition: what goes into an archive and how its README reads.
//!
//! A [`PackageSpec`] names the bundle, lists its files in order, and carries
//! the prose fragments the generated `README.txt` is built from. The default
//! spec is the published Indian taxation compliance bundle (v2.0); a JSON
//! file with the same shape can replace it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

use crate::content;
use crate::manifest::ArchiveManifest;
use crate::report::FileKind;
use crate::utils::suggested_archive_name;

/// One README highlight section: a heading and its bullet lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub heading: String,
    pub bullets: Vec<String>,
}

/// Definition of one distributable bundle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSpec {
    /// Bundle title, used in the README banner and as the archive-name
    /// fallback.
    pub title: String,
    pub version: String,
    /// Authoring date as `YYYY-MM-DD`; rendered long-form in the README.
    pub created: String,
    /// Compliance frameworks the bundle covers, joined into one README line.
    #[serde(default)]
    pub compliance: Vec<String>,
    /// Ordered member list; becomes the archive manifest.
    pub files: Vec<String>,
    /// Explicit archive file name; when absent the title is sanitized into
    /// a `.zip` name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_name: Option<String>,
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

impl Default for PackageSpec {
    fn default() -> Self {
        Self {
            title: "COMPLETE INDIAN TAXATION & BUSINESS COMPLIANCE SYSTEM".to_string(),
            version: "2.0".to_string(),
            created: "2025-09-19".to_string(),
            compliance: [
                "GST",
                "TDS",
                "RBI 2025",
                "E-Way Bill 2.0",
                "New Tax Regime",
            ]
            .map(String::from)
            .to_vec(),
            files: content::reference_files()
                .iter()
                .map(|file| file.path().to_string())
                .collect(),
            archive_name: Some("COMPLETE_INDIAN_TAXATION_COMPLIANCE_SYSTEM.zip".to_string()),
            highlights: default_highlights(),
        }
    }
}

impl PackageSpec {
    /// Load a spec from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read package spec {:?}", path))?;
        let spec: PackageSpec = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse package spec {:?}", path))?;
        spec.created_date()
            .with_context(|| format!("Invalid package spec {:?}", path))?;
        Ok(spec)
    }

    /// The archive manifest derived from the ordered file list.
    pub fn manifest(&self) -> ArchiveManifest {
        ArchiveManifest::new(self.files.iter().cloned())
    }

    /// File name for the produced archive: the explicit override when set,
    /// otherwise a sanitized `.zip` name derived from the title.
    pub fn archive_file_name(&self) -> String {
        match &self.archive_name {
            Some(name) => name.clone(),
            None => suggested_archive_name(&self.title),
        }
    }

    /// Parse the authoring date; a malformed date is a config error.
    pub fn created_date(&self) -> Result<Date> {
        let format = format_description!("[year]-[month]-[day]");
        Date::parse(&self.created, format)
            .with_context(|| format!("Invalid created date {:?}, expected YYYY-MM-DD", self.created))
    }

    /// Render the synthetic `README.txt` content for this bundle.
    ///
    /// Banner, version/created/compliance header, package contents grouped
    /// by kind, the highlight sections, and the quick-start block, the way
    /// the published bundle README reads.
    pub fn render_readme(&self) -> Result<String> {
        let created_long = self
            .created_date()?
            .format(format_description!("[month repr:long] [day padding:none], [year]"))
            .context("Failed to format created date")?;

        let mut out = String::new();
        out.push_str(&self.title);
        out.push('\n');
        out.push_str(&"=".repeat(self.title.chars().count()));
        out.push_str("\n\n");

        out.push_str(&format!("Package Version: {}\n", self.version));
        out.push_str(&format!("Created: {}\n", created_long));
        if !self.compliance.is_empty() {
            out.push_str(&format!("Compliance: {}\n", self.compliance.join(", ")));
        }

        out.push_str("\nPACKAGE CONTENTS:\n=================\n");
        push_contents_group(&mut out, "DOCUMENTATION FILES", &self.files, |kind| {
            kind == FileKind::Markdown || kind == FileKind::Text
        });
        push_contents_group(&mut out, "DATA FILES", &self.files, |kind| {
            kind == FileKind::Csv
        });
        push_contents_group(&mut out, "CONFIGURATION FILES", &self.files, |kind| {
            kind == FileKind::Json
        });

        if !self.highlights.is_empty() {
            out.push_str("\nKEY SYSTEM FEATURES:\n====================\n");
            for highlight in &self.highlights {
                out.push_str(&format!("\n{}:\n", highlight.heading));
                for bullet in &highlight.bullets {
                    out.push_str(&format!("   - {}\n", bullet));
                }
            }
        }

        out.push_str(
            "\nQUICK START GUIDE:\n\
             ==================\n\n\
             1. Read the system documentation first.\n\
             2. Follow the implementation guide step by step.\n\
             3. Import the CSV tables into your database.\n\
             4. Apply the master configuration file.\n\
             5. Validate every compliance requirement before go-live.\n",
        );

        out.push_str(&format!(
            "\nFor detailed specifications refer to the individual files in this\n\
             package.\n\n\
             ---\n\
             (c) 2025 - {}\n",
            self.title
        ));

        Ok(out)
    }
}

fn push_contents_group(
    out: &mut String,
    heading: &str,
    files: &[String],
    selects: impl Fn(FileKind) -> bool,
) {
    let members: Vec<&str> = files
        .iter()
        .map(String::as_str)
        .filter(|file| selects(FileKind::classify(file)))
        .collect();
    if members.is_empty() {
        return;
    }

    out.push_str(&format!("\n{}:\n", heading));
    for member in members {
        out.push_str(&format!("- {}\n", member));
    }
}

/// The published bundle's README highlight sections.
fn default_highlights() -> Vec<Highlight> {
    fn section(heading: &str, bullets: &[&str]) -> Highlight {
        Highlight {
            heading: heading.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
        }
    }

    vec![
        section(
            "TAX REGIME INTEGRATION",
            &[
                "New Tax Regime (FY 2025-26) - default regime with enhanced exemption limits",
                "Old Tax Regime (optional) - full deduction availability",
            ],
        ),
        section(
            "COMPLETE GST COMPLIANCE",
            &[
                "E-Invoice integration with IRN generation",
                "E-Way Bill 2.0 portal connectivity",
                "Automated GSTR filing capabilities",
            ],
        ),
        section(
            "RBI 2025 GUIDELINES",
            &[
                "Payment Aggregator Master Directions compliance",
                "Digital Lending Guidelines 2025",
                "Enhanced KYC/AML requirements",
            ],
        ),
        section(
            "MULTI-CHANNEL PAYMENT SUPPORT",
            &[
                "B2B: UPI B2B (Rs 1 crore), RTGS, NEFT, commercial cards, bank guarantees",
                "B2C: UPI, cards, wallets, BNPL, net banking",
                "B2G: e-Kuber, GeM portal, government challans",
            ],
        ),
        section(
            "AUTOMATED COMPLIANCE TRACKING",
            &[
                "Real-time due date monitoring",
                "Reminder schedule at T-5, T-2, T+0, and T+7 days",
                "Penalty calculation tables",
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::PackageSpec;

    #[test]
    fn default_spec_is_the_published_bundle() {
        let spec = PackageSpec::default();

        assert_eq!(spec.version, "2.0");
        assert_eq!(spec.files.len(), 11);
        assert_eq!(
            spec.archive_file_name(),
            "COMPLETE_INDIAN_TAXATION_COMPLIANCE_SYSTEM.zip"
        );
        assert!(spec.manifest().validate().is_ok());
    }

    #[test]
    fn archive_name_falls_back_to_the_sanitized_title() {
        let spec = PackageSpec {
            archive_name: None,
            ..PackageSpec::default()
        };

        assert_eq!(
            spec.archive_file_name(),
            "complete_indian_taxation_business_compliance_system.zip"
        );
    }

    #[test]
    fn created_date_parses_and_rejects_garbage() {
        let spec = PackageSpec::default();
        let date = spec.created_date().unwrap();
        assert_eq!((date.year(), date.month() as u8, date.day()), (2025, 9, 19));

        let broken = PackageSpec {
            created: "19/09/2025".to_string(),
            ..PackageSpec::default()
        };
        assert!(broken.created_date().is_err());
    }

    #[test]
    fn from_path_loads_a_json_spec() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bundle.json");
        fs::write(
            &path,
            r#"{
                "title": "GST Quarterly Pack",
                "version": "1.1",
                "created": "2025-10-01",
                "files": ["rates.csv", "notes.md"]
            }"#,
        )
        .unwrap();

        let spec = PackageSpec::from_path(&path).unwrap();
        assert_eq!(spec.title, "GST Quarterly Pack");
        assert_eq!(spec.files, ["rates.csv", "notes.md"]);
        assert!(spec.archive_name.is_none());
        assert_eq!(spec.archive_file_name(), "gst_quarterly_pack.zip");
        assert!(spec.highlights.is_empty());
    }

    #[test]
    fn from_path_rejects_an_invalid_created_date() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bundle.json");
        fs::write(
            &path,
            r#"{"title": "X", "version": "1", "created": "soon", "files": ["a.json"]}"#,
        )
        .unwrap();

        assert!(PackageSpec::from_path(&path).is_err());
    }

    #[test]
    fn readme_carries_banner_header_and_contents() {
        let readme = PackageSpec::default().render_readme().unwrap();

        assert!(readme.starts_with("COMPLETE INDIAN TAXATION & BUSINESS COMPLIANCE SYSTEM\n="));
        assert!(readme.contains("Package Version: 2.0"));
        assert!(readme.contains("Created: September 19, 2025"));
        assert!(readme.contains("Compliance: GST, TDS, RBI 2025, E-Way Bill 2.0, New Tax Regime"));
        assert!(readme.contains("PACKAGE CONTENTS:"));
        for file in &PackageSpec::default().files {
            assert!(readme.contains(file.as_str()), "{file} missing from README");
        }
        assert!(readme.contains("TAX REGIME INTEGRATION:"));
        assert!(readme.contains("QUICK START GUIDE:"));
    }

    #[test]
    fn readme_groups_contents_by_kind() {
        let readme = PackageSpec::default().render_readme().unwrap();

        let docs = readme.find("DOCUMENTATION FILES:").unwrap();
        let data = readme.find("DATA FILES:").unwrap();
        let config = readme.find("CONFIGURATION FILES:").unwrap();
        assert!(docs < data && data < config);
    }
}
