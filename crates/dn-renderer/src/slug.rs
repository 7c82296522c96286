//! Anchor slug generation.

use std::collections::HashMap;

use unicode_normalization::UnicodeNormalization;

/// Fallback base for headings that normalize to nothing (symbols, emoji).
const EMPTY_SLUG: &str = "section";

/// Generator for unique, URL-safe heading anchors.
///
/// Scoped to a single rendering pass: instantiate a fresh generator per
/// document so anchors stay stable across re-renders. Repeated heading text
/// yields `base`, `base-1`, `base-2`, … so every returned slug within one
/// pass is distinct.
///
/// # Example
///
/// ```
/// use dn_renderer::SlugGenerator;
///
/// let mut slugs = SlugGenerator::new();
/// assert_eq!(slugs.slug("Getting Started"), "getting-started");
/// assert_eq!(slugs.slug("Getting Started"), "getting-started-1");
/// ```
#[derive(Debug, Default)]
pub struct SlugGenerator {
    counts: HashMap<String, usize>,
}

impl SlugGenerator {
    /// Create a generator with no seen slugs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Produce the next unique slug for the given heading text.
    pub fn slug(&mut self, text: &str) -> String {
        let base = normalize(text);
        let count = self.counts.entry(base.clone()).or_insert(0);
        let slug = if *count == 0 {
            base.clone()
        } else {
            format!("{base}-{count}")
        };
        *count += 1;
        slug
    }
}

/// Normalize heading text to a slug base.
///
/// Decomposes to NFKD, keeps letters, numbers, whitespace and hyphens,
/// collapses whitespace runs to single hyphens and lowercases. Text that
/// normalizes to nothing falls back to a fixed token.
fn normalize(text: &str) -> String {
    let kept: String = text
        .nfkd()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || *c == '-')
        .collect();
    let collapsed = kept.split_whitespace().collect::<Vec<_>>().join("-");
    let lowered = collapsed.to_lowercase();
    if lowered.is_empty() {
        EMPTY_SLUG.to_owned()
    } else {
        lowered
    }
}
