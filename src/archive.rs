// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! The archive assembler.
//!
//! One linear pass: validate the manifest, drop any previous archive at the
//! output path, stream every present manifest entry into a new zip, append
//! the synthetic `README.txt`, finalize. Missing source files are tolerated
//! and recorded as skipped; everything else is fatal and leaves no partial
//! archive behind.
//!
//! Member timestamps are pinned to the zip DOS epoch (the `zip` crate's
//! default without its `time` feature), so rerunning with identical inputs
//! produces a byte-identical archive. [`ArchiveResult::archive_sha256`]
//! makes that checkable.

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;

use zip::{CompressionMethod, write::FileOptions};

use crate::error::{PackError, Phase};
use crate::manifest::ArchiveManifest;
use crate::utils::hash_file;

/// Name of the synthetic member appended to every archive.
pub const README_MEMBER: &str = "README.txt";

/// Outcome of one assembler run.
///
/// `included` and `skipped` partition the manifest and both keep manifest
/// order. The result is reported and discarded; nothing here is persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArchiveResult {
    /// Manifest entries found on disk and written into the archive.
    pub included: Vec<String>,
    /// Manifest entries absent from the source directory.
    pub skipped: Vec<String>,
    /// Total archive members: included entries plus the README.
    pub member_count: usize,
    /// On-disk size of the finalized archive, read back after close.
    pub archive_bytes: u64,
    /// SHA-256 of the finalized archive as lowercase hex.
    pub archive_sha256: String,
}

/// Assemble a zip archive at `archive_path` from the manifest entries found
/// under `source_dir`, plus a synthetic `README.txt` carrying `readme`.
///
/// The manifest is validated before any filesystem mutation; a pre-existing
/// file at `archive_path` is deleted first (overwrite, never append). An
/// entry without a file under `source_dir` is skipped, not an error. Any
/// fatal I/O or container failure aborts the run with the offending path and
/// phase, and the partial output is removed so no half-written archive
/// survives.
pub fn assemble(
    manifest: &ArchiveManifest,
    source_dir: &Path,
    archive_path: &Path,
    readme: &str,
) -> Result<ArchiveResult, PackError> {
    manifest.validate()?;

    if archive_path.exists() {
        fs::remove_file(archive_path)
            .map_err(|err| PackError::io(Phase::DeleteExisting, archive_path, err))?;
        tracing::debug!(path = %archive_path.display(), "removed previous archive");
    }

    let result = write_archive(manifest, source_dir, archive_path, readme);
    if result.is_err() {
        // Best-effort cleanup; the original error is the one worth surfacing.
        let _ = fs::remove_file(archive_path);
    }
    result
}

fn write_archive(
    manifest: &ArchiveManifest,
    source_dir: &Path,
    archive_path: &Path,
    readme: &str,
) -> Result<ArchiveResult, PackError> {
    if let Some(parent) = archive_path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)
            .map_err(|err| PackError::io(Phase::CreateArchive, parent, err))?;
    }

    let file = File::create(archive_path)
        .map_err(|err| PackError::io(Phase::CreateArchive, archive_path, err))?;
    let mut zip = zip::ZipWriter::new(file);
    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut included = Vec::new();
    let mut skipped = Vec::new();

    for entry in manifest {
        let source = source_dir.join(entry);
        if !source.is_file() {
            tracing::debug!(entry = %entry, "manifest entry missing, skipping");
            skipped.push(entry.clone());
            continue;
        }

        zip.start_file(entry, options)
            .map_err(|err| PackError::zip(Phase::WriteMember, entry, err))?;

        let mut reader =
            File::open(&source).map_err(|err| PackError::io(Phase::WriteMember, &source, err))?;
        let mut buffer = [0u8; 8192];
        loop {
            let read = reader
                .read(&mut buffer)
                .map_err(|err| PackError::io(Phase::WriteMember, &source, err))?;
            if read == 0 {
                break;
            }
            zip.write_all(&buffer[..read])
                .map_err(|err| PackError::io(Phase::WriteMember, archive_path, err))?;
        }

        tracing::debug!(entry = %entry, "added member");
        included.push(entry.clone());
    }

    zip.start_file(README_MEMBER, options)
        .map_err(|err| PackError::zip(Phase::WriteMember, README_MEMBER, err))?;
    zip.write_all(readme.as_bytes())
        .map_err(|err| PackError::io(Phase::WriteMember, archive_path, err))?;

    zip.finish()
        .map_err(|err| PackError::zip(Phase::Finalize, archive_path, err))?;

    let archive_bytes = fs::metadata(archive_path)
        .map_err(|err| PackError::io(Phase::Finalize, archive_path, err))?
        .len();
    let archive_sha256 =
        hash_file(archive_path).map_err(|err| PackError::io(Phase::Finalize, archive_path, err))?;

    let member_count = included.len() + 1;
    tracing::info!(
        path = %archive_path.display(),
        members = member_count,
        skipped = skipped.len(),
        bytes = archive_bytes,
        "archive finalized"
    );

    Ok(ArchiveResult {
        included,
        skipped,
        member_count,
        archive_bytes,
        archive_sha256,
    })
}
