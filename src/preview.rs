// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Preview URL construction from deployment URL templates.
//!
//! Templates are manipulated textually by splitting on `.`; no structured URL
//! parsing is involved, so malformed templates degenerate to defined output
//! instead of failing. Switching to a structured URL type would change the
//! behavior on dot-less templates and must not happen silently.

use crate::{alias::AliasStrategy, entropy::Entropy};

/// Rewrites `template_url` so its leftmost hostname label addresses `branch`.
///
/// The template's first `.`-delimited segment is replaced with `https://`
/// followed by the branch name and the segments are rejoined. A template
/// without any `.` degenerates to `https://` plus the branch name.
///
/// An alias is derived first and gates URL production: `None` is returned
/// when the derived alias is empty, which the random fallback makes
/// unreachable in practice; the check is kept deliberately. The derived
/// alias itself is then discarded and the raw, unsanitized branch name is
/// substituted into the URL. Both behaviors are intentional-as-found and
/// pinned by tests.
///
/// # Examples
///
/// ```
/// use branch_preview::{OsEntropy, preview_url};
///
/// let url = preview_url("my-branch", "https://abcd1234.myproj.pages.dev", &OsEntropy,);
/// assert_eq!(url.as_deref(), Some("https://my-branch.myproj.pages.dev"));
/// ```
pub fn preview_url<E,>(branch: &str, template_url: &str, entropy: &E,) -> Option<String,>
where
    E: Entropy + ?Sized,
{
    let alias = AliasStrategy::builder(branch,).build(entropy,);
    if alias.is_empty() {
        return None;
    }

    let mut segments: Vec<&str,> = template_url.split('.',).collect();
    let leading = format!("https://{branch}");
    segments[0] = leading.as_str();

    Some(segments.join(".",),)
}

#[cfg(test)]
mod tests
{
    use super::preview_url;
    use crate::entropy::SeededEntropy;

    #[test]
    fn replaces_leftmost_label_with_branch()
    {
        let entropy = SeededEntropy::new(1,);
        let url = preview_url("my-branch", "https://abcd1234.myproj.pages.dev", &entropy,);
        assert_eq!(url.as_deref(), Some("https://my-branch.myproj.pages.dev"));
    }

    #[test]
    fn raw_branch_is_substituted_even_when_fallback_fires()
    {
        let entropy = SeededEntropy::new(1,);
        // the alias derivation falls back internally, but the raw branch
        // still lands in the URL verbatim
        let url = preview_url("-----", "https://abcd1234.myproj.pages.dev", &entropy,);
        assert_eq!(url.as_deref(), Some("https://-----.myproj.pages.dev"));
    }

    #[test]
    fn raw_branch_is_not_sanitized()
    {
        let entropy = SeededEntropy::new(1,);
        let url = preview_url("Feature/ABC", "https://abcd1234.myproj.pages.dev", &entropy,);
        assert_eq!(url.as_deref(), Some("https://Feature/ABC.myproj.pages.dev"));
    }

    #[test]
    fn template_without_dots_degenerates_to_branch_origin()
    {
        let entropy = SeededEntropy::new(1,);
        let url = preview_url("my-branch", "localhost", &entropy,);
        assert_eq!(url.as_deref(), Some("https://my-branch"));
    }

    #[test]
    fn empty_template_degenerates_to_branch_origin()
    {
        let entropy = SeededEntropy::new(1,);
        let url = preview_url("my-branch", "", &entropy,);
        assert_eq!(url.as_deref(), Some("https://my-branch"));
    }

    #[test]
    fn empty_branch_still_produces_a_url()
    {
        let entropy = SeededEntropy::new(1,);
        let url = preview_url("", "https://abcd1234.myproj.pages.dev", &entropy,);
        assert_eq!(url.as_deref(), Some("https://.myproj.pages.dev"));
    }
}
