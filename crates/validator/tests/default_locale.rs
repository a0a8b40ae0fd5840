//! The process-wide default locale.
//!
//! Kept in its own test binary: every other test renders with an explicit
//! locale or relies on the English default.

use pretty_assertions::assert_eq;
use verity_validator::foundation::{default_locale, reset_default_locale, set_default_locale};
use verity_validator::prelude::*;

#[test]
fn default_locale_drives_errors_and_failures() {
    assert_eq!(*default_locale(), Locale::ENGLISH);
    let chain = that(3).is_greater_than(5);
    assert_eq!(chain.errors().as_deref(), Some("3 should be greater than 5"));

    set_default_locale(Locale::FRENCH);
    assert_eq!(default_locale().tag(), "fr");
    assert_eq!(chain.errors().as_deref(), Some("3 devrait être supérieur à 5"));
    let err = chain.or_else_fail().unwrap_err();
    assert_eq!(err.message(), "3 devrait être supérieur à 5");

    // an explicit locale always wins
    assert_eq!(
        chain.evaluate().errors_in(&Locale::ENGLISH).as_deref(),
        Some("3 should be greater than 5")
    );

    // last writer wins
    set_default_locale("fr-CA");
    set_default_locale(String::from("en-GB"));
    assert_eq!(default_locale().tag(), "en-GB");
    assert_eq!(chain.errors().as_deref(), Some("3 should be greater than 5"));

    set_default_locale("fr");
    reset_default_locale();
    assert_eq!(*default_locale(), Locale::ENGLISH);
}
