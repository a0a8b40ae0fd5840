//! Equality checks

use std::sync::Arc;

use crate::chain::{Chain, Rule};
use crate::foundation::{Checkable, Parameter};
use crate::message::MessageTemplate;

/// Checks comparing the checked value with expected values.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// assert!(that("GET").is_one_of(["GET", "HEAD"]).is_valid());
/// assert!(!that(3).is_equal_to(4).is_valid());
/// ```
pub trait EqualityChecks<T>: Sized {
    /// The value should equal `expected`.
    fn is_equal_to(self, expected: T) -> Self;

    /// The value should equal one of `candidates`.
    fn is_one_of<I>(self, candidates: I) -> Self
    where
        I: IntoIterator<Item = T>;
}

impl<T> EqualityChecks<T> for Chain<T>
where
    T: Checkable + PartialEq,
{
    fn is_equal_to(self, expected: T) -> Self {
        let expected = Arc::new(expected);
        let template = MessageTemplate::key("object.equal")
            .param(Parameter::shared_argument(Arc::clone(&expected)));
        self.verify(Rule::new(move |value: &T| *value == *expected, template))
    }

    fn is_one_of<I>(self, candidates: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let candidates: Arc<Vec<T>> = Arc::new(candidates.into_iter().collect());
        let template = MessageTemplate::key("object.one_of")
            .param(Parameter::shared_argument(Arc::clone(&candidates)));
        self.verify(Rule::new(
            move |value: &T| candidates.contains(value),
            template,
        ))
    }
}
