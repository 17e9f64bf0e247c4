// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! Shared helper utilities reused across assembly and the CLI.

pub mod digest;
pub mod name;

/// Compute SHA-256 digests of files.
pub use digest::hash_file;
/// Derive filesystem-safe archive names from bundle titles.
pub use name::{sanitize_component, suggested_archive_name};
