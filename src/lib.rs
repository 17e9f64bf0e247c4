// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 taxpack contributors

//! taxpack — packager for the Indian taxation & business-compliance
//! reference bundle.
//!
//! The library has three parts: the content registry ([`content`]) that
//! materializes the reference documents, the bundle definition
//! ([`package::PackageSpec`]) that names a bundle and renders its README,
//! and the archive assembler ([`archive::assemble`]) that packs whatever
//! manifest entries exist into a deterministic zip. [`report`] turns an
//! assembly result into the console lines the binary prints.

pub mod archive;
pub mod content;
pub mod error;
pub mod manifest;
pub mod package;
pub mod report;
pub mod utils;

pub use archive::{ArchiveResult, README_MEMBER, assemble};
pub use error::{PackError, Phase};
pub use manifest::ArchiveManifest;
pub use package::PackageSpec;
