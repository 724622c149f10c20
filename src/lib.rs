// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for deriving branch preview aliases and URLs.
//!
//! The library converts version-control branch names into DNS-label-safe
//! aliases and rewrites deployment URL templates into branch-specific preview
//! links suitable for automation reporting. All public APIs are documented
//! with invariants, error semantics, and minimal examples to facilitate
//! integration in automation tooling.

mod alias;
mod config;
mod entropy;
mod error;
mod normalizer;
mod preview;

pub use alias::{ALIAS_MAX_LEN, AliasStrategy};
pub use config::{BranchDescriptor, BranchEntry, PreviewConfig};
pub use entropy::{Entropy, OsEntropy, SeededEntropy};
pub use error::{Error, io_error};
pub use normalizer::{PreviewDocument, PreviewRecord, load_previews, parse_previews};
pub use preview::preview_url;
