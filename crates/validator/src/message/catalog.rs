//! Message catalogs
//!
//! A catalog maps a template key to its text for a locale, in a positive and
//! a negated form. [`BuiltinCatalog`] ships English and French texts for every
//! check in [`crate::checks`] and for the operator keywords.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::foundation::Locale;

/// Source of localized message patterns.
///
/// Implementations return `None` for keys they do not know; lookups then fall
/// back to [`BuiltinCatalog`].
pub trait MessageCatalog: Send + Sync {
    /// Returns the pattern for `key` in `locale`, negated or not.
    fn lookup(&self, locale: &Locale, key: &str, negated: bool) -> Option<Cow<'static, str>>;
}

// ============================================================================
// BUILTIN CATALOG
// ============================================================================

/// `(key, positive, negated)`
type Entry = (&'static str, &'static str, &'static str);

const ENGLISH: &[Entry] = &[
    ("operator.and", "AND", "AND"),
    ("operator.or", "OR", "OR"),
    ("operator.xor", "XOR", "XOR"),
    ("operator.nand", "NAND", "NAND"),
    ("operator.nor", "NOR", "NOR"),
    ("operator.not", "NOT", "NOT"),
    ("object.equal", "{value} should be equal to {0}", "{value} should NOT be equal to {0}"),
    ("object.one_of", "{value} should be one of {0}", "{value} should NOT be one of {0}"),
    ("compare.greater", "{value} should be greater than {0}", "{value} should NOT be greater than {0}"),
    (
        "compare.greater_or_equal",
        "{value} should be greater than or equal to {0}",
        "{value} should NOT be greater than or equal to {0}",
    ),
    ("compare.less", "{value} should be less than {0}", "{value} should NOT be less than {0}"),
    (
        "compare.less_or_equal",
        "{value} should be less than or equal to {0}",
        "{value} should NOT be less than or equal to {0}",
    ),
    (
        "compare.between",
        "{value} should be between {0} and {1}",
        "{value} should NOT be between {0} and {1}",
    ),
    (
        "compare.bounds",
        "the lower bound {0} should not be greater than the upper bound {1}",
        "the lower bound {0} should not be greater than the upper bound {1}",
    ),
    ("number.zero", "{value} should be zero", "{value} should NOT be zero"),
    ("number.positive", "{value} should be positive", "{value} should NOT be positive"),
    ("number.negative", "{value} should be negative", "{value} should NOT be negative"),
    (
        "number.divisible",
        "{value} should be divisible by {0}",
        "{value} should NOT be divisible by {0}",
    ),
    ("number.divisor", "the divisor {0} should not be zero", "the divisor {0} should not be zero"),
    ("text.empty", "{value} should be empty", "{value} should NOT be empty"),
    ("text.blank", "{value} should be blank", "{value} should NOT be blank"),
    ("text.length", "{value} should have a length of {0}", "{value} should NOT have a length of {0}"),
    ("text.contains", "{value} should contain {0}", "{value} should NOT contain {0}"),
    ("text.starts_with", "{value} should start with {0}", "{value} should NOT start with {0}"),
    ("text.ends_with", "{value} should end with {0}", "{value} should NOT end with {0}"),
    ("text.matches", "{value} should match {0}", "{value} should NOT match {0}"),
    (
        "text.pattern",
        "the pattern {0} should be a valid regular expression",
        "the pattern {0} should be a valid regular expression",
    ),
    ("collection.empty", "{value} should be empty", "{value} should NOT be empty"),
    ("collection.size", "{value} should have a size of {0}", "{value} should NOT have a size of {0}"),
    ("collection.contains", "{value} should contain {0}", "{value} should NOT contain {0}"),
    ("map.contains_key", "{value} should contain the key {0}", "{value} should NOT contain the key {0}"),
    ("option.some", "{value} should be present", "{value} should NOT be present"),
    ("option.none", "{value} should be absent", "{value} should NOT be absent"),
    ("error.message", "{value} should have the message {0}", "{value} should NOT have the message {0}"),
    (
        "error.cause",
        "{value} should have a cause whose message contains {0}",
        "{value} should NOT have a cause whose message contains {0}",
    ),
];

const FRENCH: &[Entry] = &[
    ("operator.and", "ET", "ET"),
    ("operator.or", "OU", "OU"),
    ("operator.xor", "OU EXCLUSIF", "OU EXCLUSIF"),
    ("operator.nand", "NON ET", "NON ET"),
    ("operator.nor", "NON OU", "NON OU"),
    ("operator.not", "NON", "NON"),
    ("object.equal", "{value} devrait être égal à {0}", "{value} ne devrait PAS être égal à {0}"),
    ("object.one_of", "{value} devrait être l'un de {0}", "{value} ne devrait PAS être l'un de {0}"),
    (
        "compare.greater",
        "{value} devrait être supérieur à {0}",
        "{value} ne devrait PAS être supérieur à {0}",
    ),
    (
        "compare.greater_or_equal",
        "{value} devrait être supérieur ou égal à {0}",
        "{value} ne devrait PAS être supérieur ou égal à {0}",
    ),
    ("compare.less", "{value} devrait être inférieur à {0}", "{value} ne devrait PAS être inférieur à {0}"),
    (
        "compare.less_or_equal",
        "{value} devrait être inférieur ou égal à {0}",
        "{value} ne devrait PAS être inférieur ou égal à {0}",
    ),
    (
        "compare.between",
        "{value} devrait être compris entre {0} et {1}",
        "{value} ne devrait PAS être compris entre {0} et {1}",
    ),
    (
        "compare.bounds",
        "la borne inférieure {0} ne devrait pas dépasser la borne supérieure {1}",
        "la borne inférieure {0} ne devrait pas dépasser la borne supérieure {1}",
    ),
    ("number.zero", "{value} devrait être nul", "{value} ne devrait PAS être nul"),
    ("number.positive", "{value} devrait être positif", "{value} ne devrait PAS être positif"),
    ("number.negative", "{value} devrait être négatif", "{value} ne devrait PAS être négatif"),
    (
        "number.divisible",
        "{value} devrait être divisible par {0}",
        "{value} ne devrait PAS être divisible par {0}",
    ),
    ("number.divisor", "le diviseur {0} ne devrait pas être nul", "le diviseur {0} ne devrait pas être nul"),
    ("text.empty", "{value} devrait être vide", "{value} ne devrait PAS être vide"),
    ("text.blank", "{value} devrait être blanc", "{value} ne devrait PAS être blanc"),
    (
        "text.length",
        "{value} devrait avoir une longueur de {0}",
        "{value} ne devrait PAS avoir une longueur de {0}",
    ),
    ("text.contains", "{value} devrait contenir {0}", "{value} ne devrait PAS contenir {0}"),
    ("text.starts_with", "{value} devrait commencer par {0}", "{value} ne devrait PAS commencer par {0}"),
    ("text.ends_with", "{value} devrait finir par {0}", "{value} ne devrait PAS finir par {0}"),
    ("text.matches", "{value} devrait correspondre à {0}", "{value} ne devrait PAS correspondre à {0}"),
    (
        "text.pattern",
        "le motif {0} devrait être une expression régulière valide",
        "le motif {0} devrait être une expression régulière valide",
    ),
    ("collection.empty", "{value} devrait être vide", "{value} ne devrait PAS être vide"),
    (
        "collection.size",
        "{value} devrait avoir une taille de {0}",
        "{value} ne devrait PAS avoir une taille de {0}",
    ),
    ("collection.contains", "{value} devrait contenir {0}", "{value} ne devrait PAS contenir {0}"),
    ("map.contains_key", "{value} devrait contenir la clé {0}", "{value} ne devrait PAS contenir la clé {0}"),
    ("option.some", "{value} devrait être présent", "{value} ne devrait PAS être présent"),
    ("option.none", "{value} devrait être absent", "{value} ne devrait PAS être absent"),
    (
        "error.message",
        "{value} devrait avoir le message {0}",
        "{value} ne devrait PAS avoir le message {0}",
    ),
    (
        "error.cause",
        "{value} devrait avoir une cause dont le message contient {0}",
        "{value} ne devrait PAS avoir une cause dont le message contient {0}",
    ),
];

/// The catalog shipped with the crate: English and French.
///
/// Unknown languages fall back to English.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    fn table(locale: &Locale) -> &'static [Entry] {
        if locale.same_language(&Locale::FRENCH) {
            FRENCH
        } else {
            ENGLISH
        }
    }

    fn find(table: &'static [Entry], key: &str, negated: bool) -> Option<&'static str> {
        table
            .iter()
            .find(|(k, _, _)| *k == key)
            .map(|(_, positive, negative)| if negated { *negative } else { *positive })
    }
}

impl MessageCatalog for BuiltinCatalog {
    fn lookup(&self, locale: &Locale, key: &str, negated: bool) -> Option<Cow<'static, str>> {
        Self::find(Self::table(locale), key, negated)
            .or_else(|| Self::find(ENGLISH, key, negated))
            .map(Cow::Borrowed)
    }
}

// ============================================================================
// MAP CATALOG
// ============================================================================

/// A catalog backed by in-memory maps, for caller-defined checks or to
/// override builtin texts.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::message::MapCatalog;
/// use verity_validator::foundation::Locale;
///
/// let catalog = MapCatalog::new()
///     .with_entry(Locale::ENGLISH, "user.adult", "{value} should be an adult", "{value} should be a minor");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapCatalog {
    entries: HashMap<(String, String), (Cow<'static, str>, Cow<'static, str>)>,
}

impl MapCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the positive and negated texts of `key` for the language of `locale`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_entry(
        mut self,
        locale: Locale,
        key: impl Into<String>,
        positive: impl Into<Cow<'static, str>>,
        negated: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.insert(locale, key, positive, negated);
        self
    }

    /// Adds the positive and negated texts of `key` for the language of `locale`.
    pub fn insert(
        &mut self,
        locale: Locale,
        key: impl Into<String>,
        positive: impl Into<Cow<'static, str>>,
        negated: impl Into<Cow<'static, str>>,
    ) {
        self.entries.insert(
            (locale.language().to_ascii_lowercase(), key.into()),
            (positive.into(), negated.into()),
        );
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MessageCatalog for MapCatalog {
    fn lookup(&self, locale: &Locale, key: &str, negated: bool) -> Option<Cow<'static, str>> {
        let language = locale.language().to_ascii_lowercase();
        self.entries
            .get(&(language, key.to_owned()))
            .map(|(positive, negative)| if negated { negative.clone() } else { positive.clone() })
    }
}
