// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! Archive manifest domain model and validation (I/O-agnostic).

use std::collections::HashSet;

use crate::error::PackError;

/// Ordered list of candidate member paths for one archive.
///
/// Entries are relative paths as they will appear inside the zip; order is
/// preserved everywhere (assembly, result reporting). The list is immutable
/// after construction. Whether an entry actually exists on disk is decided
/// at assembly time, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveManifest {
    entries: Vec<String>,
}

impl ArchiveManifest {
    /// Build a manifest from anything yielding path strings.
    ///
    /// Construction does not validate; [`ArchiveManifest::validate()`] runs
    /// as the first step of assembly, before any filesystem mutation.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
        }
    }

    /// Candidate member paths in manifest order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ensure every entry can serve as a portable zip member name.
    ///
    /// Rejects: an empty manifest, empty entries, absolute paths, `..`
    /// components, backslashes, trailing slashes, and duplicates. Member
    /// paths may contain `/` to place files in archive subdirectories.
    pub fn validate(&self) -> Result<(), PackError> {
        if self.entries.is_empty() {
            return Err(PackError::EmptyManifest);
        }

        let mut seen = HashSet::new();
        for entry in &self.entries {
            let reason = if entry.is_empty() {
                Some("entry is empty")
            } else if entry.contains('\\') {
                Some("backslashes are not portable member separators")
            } else if entry.starts_with('/') {
                Some("absolute paths cannot be archive members")
            } else if entry.ends_with('/') {
                Some("directories cannot be archive members")
            } else if entry.split('/').any(|part| part == "..") {
                Some("parent-directory components are not allowed")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(PackError::InvalidEntry {
                    entry: entry.clone(),
                    reason,
                });
            }

            if !seen.insert(entry.as_str()) {
                return Err(PackError::InvalidEntry {
                    entry: entry.clone(),
                    reason: "duplicate member name",
                });
            }
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a ArchiveManifest {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::ArchiveManifest;
    use crate::error::PackError;

    #[test]
    fn entries_keep_construction_order() {
        let manifest = ArchiveManifest::new(["b.csv", "a.json", "c.md"]);
        assert_eq!(manifest.entries(), ["b.csv", "a.json", "c.md"]);
        assert_eq!(manifest.len(), 3);
    }

    #[test]
    fn empty_manifest_is_rejected() {
        let manifest = ArchiveManifest::new(Vec::<String>::new());
        assert!(matches!(manifest.validate(), Err(PackError::EmptyManifest)));
    }

    // Subdirectory members are fine; escaping the source directory is not.
    #[test]
    fn relative_subdirectory_entries_are_allowed() {
        let manifest = ArchiveManifest::new(["docs/guide.md", "data/rates.csv"]);
        assert!(manifest.validate().is_ok());
    }

    #[test]
    fn traversal_and_absolute_entries_are_rejected() {
        for entry in ["../escape.json", "data/../../escape.json", "/etc/passwd"] {
            let manifest = ArchiveManifest::new([entry]);
            assert!(
                matches!(manifest.validate(), Err(PackError::InvalidEntry { .. })),
                "{entry} should be rejected"
            );
        }
    }

    #[test]
    fn backslash_and_trailing_slash_entries_are_rejected() {
        for entry in ["data\\rates.csv", "docs/"] {
            let manifest = ArchiveManifest::new([entry]);
            assert!(matches!(
                manifest.validate(),
                Err(PackError::InvalidEntry { .. })
            ));
        }
    }

    // Duplicate member names would produce an ambiguous archive.
    #[test]
    fn duplicate_entries_are_rejected() {
        let manifest = ArchiveManifest::new(["a.json", "b.csv", "a.json"]);
        let err = manifest.validate().unwrap_err();

        match err {
            PackError::InvalidEntry { entry, reason } => {
                assert_eq!(entry, "a.json");
                assert!(reason.contains("duplicate"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
