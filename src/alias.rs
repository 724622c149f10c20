// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Utilities for deriving DNS-label-safe aliases from branch names.
//!
//! Aliases produced by this module contain only lowercase ASCII alphanumeric
//! characters and hyphens, never start or end with a hyphen, and never exceed
//! [`ALIAS_MAX_LEN`] characters, making them usable as the leftmost label of
//! a preview hostname.

use tracing::debug;

use crate::entropy::Entropy;

/// Maximum number of characters an alias may carry.
pub const ALIAS_MAX_LEN: usize = 28;

/// Prefix applied to aliases produced by the random fallback.
const FALLBACK_PREFIX: &str = "branch-";
/// Number of random characters appended to the fallback prefix.
const FALLBACK_SUFFIX_LEN: usize = 10;
/// Alphabet the fallback suffix draws from.
const FALLBACK_ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";
/// Smallest byte value rejected so draws fold evenly onto the alphabet.
const FALLBACK_REJECT_FROM: u8 = 252;

/// Builder for branch aliases usable as DNS labels.
#[derive(Debug, Clone, Copy,)]
pub struct AliasStrategy<'input,>
{
    source: &'input str,
}

impl<'input,> AliasStrategy<'input,>
{
    /// Creates a new alias builder for the provided branch name.
    ///
    /// The builder retains a borrowed view of the source to avoid allocations
    /// until [`build`](Self::build) is invoked.
    pub fn builder(source: &'input str,) -> Self
    {
        Self {
            source,
        }
    }

    /// Builds an alias from the branch name. The whole input is lowercased,
    /// every character outside `a-z0-9-` becomes a single hyphen, the result
    /// is truncated to [`ALIAS_MAX_LEN`] characters, and boundary hyphens are
    /// trimmed. Truncation happens before trimming, so a truncation landing
    /// on a hyphen yields a shorter alias.
    ///
    /// Never returns an empty string: when normalization leaves nothing, a
    /// random alias of the form `branch-` plus ten alphanumeric characters is
    /// drawn through `entropy`. The fallback is alias-safe by construction
    /// and is returned without re-validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use branch_preview::{AliasStrategy, OsEntropy};
    ///
    /// let alias = AliasStrategy::builder("Feature/ABC-123",).build(&OsEntropy,);
    /// assert_eq!(alias, "feature-abc-123");
    /// ```
    pub fn build<E,>(self, entropy: &E,) -> String
    where
        E: Entropy + ?Sized,
    {
        let normalized = self.normalize();
        if normalized.is_empty() {
            debug!("branch name {:?} normalized to nothing, drawing fallback alias", self.source);
            return fallback_alias(entropy,);
        }

        normalized
    }

    /// Applies the deterministic normalization pipeline without the fallback.
    /// An empty result means the branch name carried no usable characters.
    fn normalize(self,) -> String
    {
        let lowered = self.source.to_lowercase();
        let mut alias = String::with_capacity(lowered.len(),);

        for candidate in lowered.chars() {
            match candidate {
                'a'..='z' | '0'..='9' | '-' => alias.push(candidate,),
                // one invalid character maps to exactly one hyphen; runs are
                // kept so the alias stays reproducible from the branch name
                _ => alias.push('-',),
            }
        }

        if alias.len() > ALIAS_MAX_LEN {
            // every character is ASCII after substitution, so truncating on
            // the byte boundary cannot split a character
            alias.truncate(ALIAS_MAX_LEN,);
        }

        alias.trim_matches('-',).to_owned()
    }
}

/// Draws a random alias of the form `branch-` followed by
/// [`FALLBACK_SUFFIX_LEN`] characters taken uniformly from `a-z0-9`.
fn fallback_alias<E,>(entropy: &E,) -> String
where
    E: Entropy + ?Sized,
{
    let mut alias = String::with_capacity(FALLBACK_PREFIX.len() + FALLBACK_SUFFIX_LEN,);
    alias.push_str(FALLBACK_PREFIX,);

    let mut byte = [0u8; 1];
    while alias.len() < FALLBACK_PREFIX.len() + FALLBACK_SUFFIX_LEN {
        entropy.fill(&mut byte,);
        if byte[0] >= FALLBACK_REJECT_FROM {
            // a modulo fold of the remaining values would bias the alphabet
            continue;
        }
        alias.push(FALLBACK_ALPHABET[usize::from(byte[0] % 36,)] as char,);
    }

    alias
}
