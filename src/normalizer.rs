// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Transformation logic that converts batch configuration entries into
//! normalized preview records.
//!
//! Normalization derives one alias and one preview URL per configured branch
//! and rejects documents whose derived aliases collide. The resulting
//! structures are ready for serialization into workflow inputs.

use std::{collections::HashSet, fs, path::Path};

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    alias::AliasStrategy,
    config::PreviewConfig,
    entropy::Entropy,
    error::{self, Error},
    preview::preview_url,
};

/// Normalized preview mapping for a single branch.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
pub struct PreviewRecord
{
    /// Branch name exactly as configured.
    pub branch: String,
    /// DNS-safe alias derived from the branch name.
    pub alias:  String,
    /// Branch-specific preview URL.
    pub url:    String,
}

/// Document containing all normalized previews.
#[derive(Debug, Serialize, Clone, PartialEq, Eq,)]
pub struct PreviewDocument
{
    /// Aggregated records derived from the configuration.
    pub previews: Vec<PreviewRecord,>,
}

/// Loads previews from the provided YAML configuration file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read, the YAML cannot be
/// deserialized, or the configuration violates invariants during
/// normalization.
pub fn load_previews<E,>(path: &Path, entropy: &E,) -> Result<PreviewDocument, Error,>
where
    E: Entropy + ?Sized,
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_previews(&contents, entropy,)
}

/// Parses previews from the provided YAML document string.
///
/// This function is suitable for unit tests and higher-level callers that
/// already obtained the configuration contents.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded
/// and [`Error::Validation`](Error::Validation) when the branch list is empty
/// or normalization detects a collision.
pub fn parse_previews<E,>(contents: &str, entropy: &E,) -> Result<PreviewDocument, Error,>
where
    E: Entropy + ?Sized,
{
    let config: PreviewConfig = serde_yaml::from_str(contents,)?;
    if config.branches.is_empty() {
        return Err(Error::validation("configuration must include at least one branch",),);
    }

    normalize_previews(&config, entropy,)
}

/// Converts configuration entries into a deduplicated preview document.
///
/// # Errors
///
/// Returns [`Error::Validation`](Error::Validation) when a branch name is
/// blank, when two entries derive the same alias, or when no preview URL can
/// be produced for an entry.
fn normalize_previews<E,>(config: &PreviewConfig, entropy: &E,) -> Result<PreviewDocument, Error,>
where
    E: Entropy + ?Sized,
{
    let mut previews = Vec::with_capacity(config.branches.len(),);
    let mut seen_aliases = HashSet::with_capacity(config.branches.len(),);

    info!("normalizing {} branch entries", config.branches.len());

    for entry in &config.branches {
        let branch = entry.branch_name();
        if branch.trim().is_empty() {
            return Err(Error::validation("branch names cannot be empty strings",),);
        }

        let template = entry.resolved_template(&config.template_url,);
        let alias = AliasStrategy::builder(branch,).build(entropy,);
        let url = preview_url(branch, template, entropy,).ok_or_else(|| {
            Error::validation(format!("unable to derive a preview URL for branch '{branch}'",),)
        },)?;

        if !seen_aliases.insert(alias.clone(),) {
            return Err(Error::validation(format!("duplicate alias '{alias}'",),),);
        }

        debug!("mapped branch {:?} to alias {:?}", branch, alias);
        previews.push(PreviewRecord {
            branch: branch.to_owned(),
            alias,
            url,
        },);
    }

    Ok(PreviewDocument {
        previews,
    },)
}
