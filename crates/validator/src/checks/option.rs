//! Presence checks for `Option` values
//!
//! A valid chain over an absent value still succeeds with `Some(&None)` from
//! [`Verdict::checked`](crate::chain::Verdict::checked); use
//! [`Verdict::checked_present`](crate::chain::Verdict::checked_present) to
//! treat absence as failure.

use crate::chain::{Chain, Rule};
use crate::foundation::Checkable;
use crate::message::MessageTemplate;

/// Checks over optional values.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let header: Option<&str> = None;
/// assert!(!that(header).is_some().is_valid());
/// ```
pub trait OptionChecks: Sized {
    /// The value should be present.
    fn is_some(self) -> Self;

    /// The value should be absent.
    fn is_none(self) -> Self;
}

impl<U: Checkable> OptionChecks for Chain<Option<U>> {
    fn is_some(self) -> Self {
        self.verify(Rule::new(
            |value: &Option<U>| value.is_some(),
            MessageTemplate::key("option.some"),
        ))
    }

    fn is_none(self) -> Self {
        self.verify(Rule::new(
            |value: &Option<U>| value.is_none(),
            MessageTemplate::key("option.none"),
        ))
    }
}
