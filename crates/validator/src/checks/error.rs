//! Checks over error values

use std::error::Error;
use std::sync::Arc;

use crate::chain::{Chain, Rule};
use crate::foundation::{Checkable, Parameter};
use crate::message::MessageTemplate;

/// Checks over the `Display` message and the `source()` chain of an error.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let error = std::io::Error::other("disk full");
/// assert!(that(error).has_message("disk full").is_valid());
/// ```
pub trait ErrorChecks: Sized {
    /// The error should display exactly as `expected`.
    fn has_message<S>(self, expected: S) -> Self
    where
        S: AsRef<str> + Checkable;

    /// One of the error's causes should display a message containing
    /// `fragment`. The error itself is not considered.
    fn has_cause_containing<S>(self, fragment: S) -> Self
    where
        S: AsRef<str> + Checkable;
}

impl<T> ErrorChecks for Chain<T>
where
    T: Checkable + Error,
{
    fn has_message<S>(self, expected: S) -> Self
    where
        S: AsRef<str> + Checkable,
    {
        let expected = Arc::new(expected);
        let template = MessageTemplate::key("error.message")
            .param(Parameter::shared_argument(Arc::clone(&expected)));
        self.verify(Rule::new(
            move |error: &T| error.to_string() == (*expected).as_ref(),
            template,
        ))
    }

    fn has_cause_containing<S>(self, fragment: S) -> Self
    where
        S: AsRef<str> + Checkable,
    {
        let fragment = Arc::new(fragment);
        let template = MessageTemplate::key("error.cause")
            .param(Parameter::shared_argument(Arc::clone(&fragment)));
        self.verify(Rule::new(
            move |error: &T| {
                let fragment = (*fragment).as_ref();
                let mut cause = error.source();
                while let Some(current) = cause {
                    if current.to_string().contains(fragment) {
                        return true;
                    }
                    cause = current.source();
                }
                false
            },
            template,
        ))
    }
}
