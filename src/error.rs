// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! Error taxonomy for manifest validation and archive assembly.
//!
//! Two families: manifest problems (`EmptyManifest`, `InvalidEntry`) are
//! reported before any filesystem mutation; I/O and container problems
//! (`Io`, `Zip`) are fatal mid-assembly failures tagged with the phase in
//! which they occurred and the offending path. A manifest entry whose
//! source file is absent is NOT an error; it is recorded as skipped in the
//! assembly result.

use std::fmt;
use std::path::PathBuf;

/// Assembly phase in which a fatal failure occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Removing a previous archive at the output path.
    DeleteExisting,
    /// Creating the output file or its parent directory.
    CreateArchive,
    /// Streaming a manifest entry or the generated README into the archive.
    WriteMember,
    /// Writing the central directory and reading the finished file back.
    Finalize,
}

impl Phase {
    /// Stable lowercase name used in error messages and log events.
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::DeleteExisting => "delete-existing",
            Phase::CreateArchive => "create-archive",
            Phase::WriteMember => "write-member",
            Phase::Finalize => "finalize",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while validating a manifest or assembling an archive.
#[derive(Debug, thiserror::Error)]
pub enum PackError {
    /// The manifest named no files at all.
    #[error("manifest is empty: an archive needs at least one candidate file")]
    EmptyManifest,

    /// A manifest entry cannot serve as a zip member name.
    #[error("invalid manifest entry {entry:?}: {reason}")]
    InvalidEntry {
        /// The offending entry, verbatim.
        entry: String,
        /// What rule it broke.
        reason: &'static str,
    },

    /// A filesystem operation failed; the phase tells which one.
    #[error("{phase} failed for {path:?}")]
    Io {
        phase: Phase,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The zip writer rejected an operation.
    #[error("{phase} failed for {path:?}")]
    Zip {
        phase: Phase,
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },
}

impl PackError {
    pub(crate) fn io(phase: Phase, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        PackError::Io {
            phase,
            path: path.into(),
            source,
        }
    }

    pub(crate) fn zip(
        phase: Phase,
        path: impl Into<PathBuf>,
        source: zip::result::ZipError,
    ) -> Self {
        PackError::Zip {
            phase,
            path: path.into(),
            source,
        }
    }
}
