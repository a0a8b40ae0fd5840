//! Locales and the process-wide default locale
//!
//! Terminal operations accept an explicit [`Locale`]; when none is given the
//! process-wide default is used. The default lives in a single `ArcSwap`
//! cell: reads are lock-free, writes replace the whole value, and the last
//! writer wins. Evaluation never writes it.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, LazyLock};

use arc_swap::ArcSwap;

static DEFAULT_LOCALE: LazyLock<ArcSwap<Locale>> =
    LazyLock::new(|| ArcSwap::from_pointee(Locale::ENGLISH));

/// A language tag such as `en`, `fr` or `fr-CA`.
///
/// Only the primary language subtag is used for catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Locale {
    tag: Cow<'static, str>,
}

impl Locale {
    /// English, the fallback for every lookup.
    pub const ENGLISH: Locale = Locale {
        tag: Cow::Borrowed("en"),
    };

    /// French.
    pub const FRENCH: Locale = Locale {
        tag: Cow::Borrowed("fr"),
    };

    /// Creates a locale from a language tag (`en`, `fr-FR`, `fr_CA`, ...).
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self { tag: tag.into() }
    }

    /// Returns the full tag as given.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the primary language subtag, e.g. `fr` for `fr-CA`.
    pub fn language(&self) -> &str {
        self.tag
            .split(['-', '_'])
            .next()
            .unwrap_or(&self.tag)
    }

    /// Returns true if both locales share the same primary language.
    pub fn same_language(&self, other: &Locale) -> bool {
        self.language().eq_ignore_ascii_case(other.language())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::ENGLISH
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl From<&'static str> for Locale {
    fn from(tag: &'static str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

// ============================================================================
// PROCESS-WIDE DEFAULT
// ============================================================================

/// Replaces the process-wide default locale. Last writer wins.
pub fn set_default_locale(locale: impl Into<Locale>) {
    let locale = locale.into();
    tracing::debug!(locale = %locale, "default locale changed");
    DEFAULT_LOCALE.store(Arc::new(locale));
}

/// Returns the current process-wide default locale.
#[inline]
pub fn default_locale() -> Arc<Locale> {
    DEFAULT_LOCALE.load_full()
}

/// Restores English as the process-wide default locale.
pub fn reset_default_locale() {
    DEFAULT_LOCALE.store(Arc::new(Locale::ENGLISH));
}
