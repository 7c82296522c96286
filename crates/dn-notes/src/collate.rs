//! Collation strategies for catalog and tree ordering.
//!
//! Display ordering is locale-sensitive: the catalog mixes Latin and CJK
//! names, and code-point order interleaves them unhelpfully. The strategy is
//! explicit and injected so hosts can pick their locale (or byte order for
//! reproducible fixtures) instead of inheriting an ambient default.

use std::cmp::Ordering;
use std::sync::Arc;

use icu_collator::{Collator, CollatorOptions};
use icu_locid::{Locale, locale};

/// String comparison strategy.
pub trait Collate: Send + Sync {
    /// Compare two labels for display ordering.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Locale-aware collation backed by ICU data.
pub struct LocaleCollation {
    collator: Collator,
}

impl LocaleCollation {
    /// Create a collator for the given locale.
    ///
    /// Returns `None` when no collation data is available for the locale.
    #[must_use]
    pub fn new(locale: Locale) -> Option<Self> {
        let collator = Collator::try_new(&locale.into(), CollatorOptions::new()).ok()?;
        Some(Self { collator })
    }

    /// Chinese collation (pinyin ordering for Han characters).
    ///
    /// This is the default for note collections, matching how mixed
    /// Latin/CJK note names are conventionally listed.
    #[must_use]
    pub fn chinese() -> Option<Self> {
        Self::new(locale!("zh"))
    }
}

impl Collate for LocaleCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

/// Plain byte-order comparison.
///
/// Fallback when collation data is unavailable, and useful for tests that
/// want ordering independent of ICU data.
#[derive(Debug, Default)]
pub struct BinaryCollation;

impl Collate for BinaryCollation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// The default strategy: Chinese locale collation, degrading to byte order
/// if collation data cannot be loaded.
#[must_use]
pub fn default_collation() -> Arc<dyn Collate> {
    match LocaleCollation::chinese() {
        Some(collation) => Arc::new(collation),
        None => {
            tracing::warn!("collation data unavailable, using byte-order comparison");
            Arc::new(BinaryCollation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_collation() {
        let collation = BinaryCollation;
        assert_eq!(collation.compare("a", "b"), Ordering::Less);
        assert_eq!(collation.compare("b", "a"), Ordering::Greater);
        assert_eq!(collation.compare("a", "a"), Ordering::Equal);
    }

    #[test]
    fn test_chinese_collation_orders_han_by_pinyin() {
        let collation = LocaleCollation::chinese().expect("bundled collation data");
        // 安 (ān) sorts before 苹 (píng).
        assert_eq!(collation.compare("安全", "苹果"), Ordering::Less);
    }

    #[test]
    fn test_chinese_collation_mixed_scripts() {
        let collation = LocaleCollation::chinese().expect("bundled collation data");
        // Latin sorts before Han under the zh tailoring.
        assert_eq!(collation.compare("banana", "苹果"), Ordering::Less);
    }

    #[test]
    fn test_locale_collation_case_insensitive_primary_order() {
        let collation = LocaleCollation::chinese().expect("bundled collation data");
        // Unlike byte order, lowercase does not sort after all uppercase.
        assert_eq!(collation.compare("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn test_default_collation_is_usable() {
        let collation = default_collation();
        assert_eq!(collation.compare("a", "a"), Ordering::Equal);
    }
}
