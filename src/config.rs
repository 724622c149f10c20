// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Configuration document types describing branch preview batches.
//!
//! The types in this module mirror the structure of the YAML documents
//! consumed by the CLI. Entries stay flexible: a branch can be listed as a
//! bare name or as a mapping that overrides the document-wide template URL.

use serde::{Deserialize, Serialize};

/// Root configuration document describing all branches to map.
///
/// # Examples
///
/// ```
/// use branch_preview::PreviewConfig;
///
/// let yaml = r#"
/// template_url: https://abcd1234.myproj.pages.dev
/// branches:
///   - feature/login
/// "#;
/// let config: PreviewConfig = serde_yaml::from_str(yaml,).expect("valid configuration",);
/// assert_eq!(config.branches.len(), 1);
/// ```
#[derive(Debug, Deserialize, Serialize,)]
pub struct PreviewConfig
{
    /// Deployment URL template whose leftmost label gets replaced.
    #[serde(alias = "template-url", alias = "templateUrl")]
    pub template_url: String,

    /// Branch entries to derive previews for.
    #[serde(default)]
    pub branches: Vec<BranchEntry,>,
}

/// Single branch entry: a bare name or a mapping with overrides.
#[derive(Debug, Deserialize, Serialize, Clone,)]
#[serde(untagged)]
pub enum BranchEntry
{
    /// Bare branch name.
    Name(String,),
    /// Mapping form carrying per-branch overrides.
    Descriptor(BranchDescriptor,),
}

/// Mapping form of a branch entry.
#[derive(Debug, Deserialize, Serialize, Clone,)]
pub struct BranchDescriptor
{
    /// Branch name as supplied by version control.
    #[serde(alias = "branch")]
    pub name: String,

    /// Optional template URL override for this branch.
    #[serde(default, alias = "template-url", alias = "templateUrl")]
    pub template_url: Option<String,>,
}

impl BranchEntry
{
    /// Returns the raw branch name for this entry.
    pub fn branch_name(&self,) -> &str
    {
        match self {
            Self::Name(name,) => name,
            Self::Descriptor(descriptor,) => &descriptor.name,
        }
    }

    /// Returns the template URL to apply, preferring the entry override.
    pub fn resolved_template<'config,>(&'config self, default_template: &'config str,)
    -> &'config str
    {
        match self {
            Self::Name(_,) => default_template,
            Self::Descriptor(descriptor,) => {
                descriptor.template_url.as_deref().unwrap_or(default_template,)
            }
        }
    }
}
