//! Text checks
//!
//! Apply to any checked value that is [`AsRef<str>`], such as `&'static str`,
//! `String` or `Box<str>`. Lengths are counted in `char`s.

use std::sync::Arc;

use regex::Regex;

use crate::chain::{Chain, Rule};
use crate::foundation::{Checkable, Parameter};
use crate::message::MessageTemplate;

/// Checks over string-like values.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let name = that("  ").not().is_blank().or().starts_with("anon");
/// assert!(!name.is_valid());
///
/// let code = that("AB-123").matches(r"^[A-Z]{2}-\d+$");
/// assert!(code.is_valid());
/// ```
pub trait TextChecks: Sized {
    /// The text should have no characters.
    fn is_empty(self) -> Self;

    /// The text should be empty or whitespace only.
    fn is_blank(self) -> Self;

    /// The text should have exactly `length` characters.
    fn has_length(self, length: usize) -> Self;

    /// The text should contain `needle`.
    fn contains<S>(self, needle: S) -> Self
    where
        S: AsRef<str> + Checkable;

    /// The text should start with `prefix`.
    fn starts_with<S>(self, prefix: S) -> Self
    where
        S: AsRef<str> + Checkable;

    /// The text should end with `suffix`.
    fn ends_with<S>(self, suffix: S) -> Self
    where
        S: AsRef<str> + Checkable;

    /// The text should match the regular expression `pattern`.
    ///
    /// Requires `pattern` to compile. It is compiled once, when the check is
    /// appended.
    fn matches(self, pattern: &str) -> Self;
}

fn with_argument<T, S, F>(chain: Chain<T>, key: &'static str, argument: S, holds: F) -> Chain<T>
where
    T: Checkable + AsRef<str>,
    S: AsRef<str> + Checkable,
    F: Fn(&str, &str) -> bool + Send + Sync + 'static,
{
    let argument = Arc::new(argument);
    let template =
        MessageTemplate::key(key).param(Parameter::shared_argument(Arc::clone(&argument)));
    chain.verify(Rule::new(
        move |value: &T| holds(value.as_ref(), (*argument).as_ref()),
        template,
    ))
}

impl<T> TextChecks for Chain<T>
where
    T: Checkable + AsRef<str>,
{
    fn is_empty(self) -> Self {
        self.verify(Rule::new(
            |value: &T| value.as_ref().is_empty(),
            MessageTemplate::key("text.empty"),
        ))
    }

    fn is_blank(self) -> Self {
        self.verify(Rule::new(
            |value: &T| value.as_ref().trim().is_empty(),
            MessageTemplate::key("text.blank"),
        ))
    }

    fn has_length(self, length: usize) -> Self {
        self.verify(Rule::new(
            move |value: &T| value.as_ref().chars().count() == length,
            MessageTemplate::key("text.length").arg(length),
        ))
    }

    fn contains<S>(self, needle: S) -> Self
    where
        S: AsRef<str> + Checkable,
    {
        with_argument(self, "text.contains", needle, |text, needle| {
            text.contains(needle)
        })
    }

    fn starts_with<S>(self, prefix: S) -> Self
    where
        S: AsRef<str> + Checkable,
    {
        with_argument(self, "text.starts_with", prefix, |text, prefix| {
            text.starts_with(prefix)
        })
    }

    fn ends_with<S>(self, suffix: S) -> Self
    where
        S: AsRef<str> + Checkable,
    {
        with_argument(self, "text.ends_with", suffix, |text, suffix| {
            text.ends_with(suffix)
        })
    }

    fn matches(self, pattern: &str) -> Self {
        let compiled = match Regex::new(pattern) {
            Ok(regex) => Some(regex),
            Err(error) => {
                tracing::debug!(pattern, %error, "invalid regular expression");
                None
            }
        };
        let compiled = Arc::new(compiled);
        let guard_compiled = Arc::clone(&compiled);

        let pattern = Arc::new(pattern.to_owned());
        let template = MessageTemplate::key("text.matches")
            .param(Parameter::shared_argument(Arc::clone(&pattern)));
        let guard = MessageTemplate::key("text.pattern").param(Parameter::shared_argument(pattern));

        let rule = Rule::new(
            move |value: &T| {
                compiled
                    .as_ref()
                    .as_ref()
                    .is_some_and(|regex| regex.is_match(value.as_ref()))
            },
            template,
        )
        .requires(move |_: &T| guard_compiled.is_some(), guard);
        self.verify(rule)
    }
}
