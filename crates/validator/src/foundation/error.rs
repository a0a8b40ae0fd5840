//! Error types raised by terminal operations
//!
//! Failures are plain data on a [`Verdict`](crate::chain::Verdict) until a
//! caller explicitly asks for an error through one of the `or_else_fail`
//! family. The resulting [`ValidationError`] carries the rendered message, the
//! kind of failure and the parameters that were involved.

use std::borrow::Cow;
use std::fmt;

use crate::foundation::parameter::Parameter;

/// Which part of a chain caused it to be invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FailureKind {
    /// A check's prerequisite was not met. Results of later steps are ignored.
    Precondition,
    /// A check ran and evaluated to false.
    Check,
}

impl FailureKind {
    /// Returns a stable code for programmatic handling.
    pub fn code(self) -> &'static str {
        match self {
            Self::Precondition => "precondition_failed",
            Self::Check => "check_failed",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error raised when an invalid chain is converted into a failure.
///
/// When the caller supplied its own message, the generated one is kept as the
/// [`source`](std::error::Error::source) of this error.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let err = that(3).is_greater_than(5).or_else_fail().unwrap_err();
/// assert_eq!(err.kind(), FailureKind::Check);
/// assert_eq!(err.message(), "3 should be greater than 5");
/// ```
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    kind: FailureKind,
    message: Cow<'static, str>,
    parameters: Vec<Parameter>,
    #[source]
    cause: Option<Box<ValidationError>>,
}

impl ValidationError {
    /// Creates a new error.
    pub fn new(kind: FailureKind, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            message: message.into(),
            parameters: Vec::new(),
            cause: None,
        }
    }

    /// Sets the parameters involved in the failure.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_parameters(mut self, parameters: Vec<Parameter>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Attaches the error this one replaces.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_cause(mut self, cause: ValidationError) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Returns the kind of failure.
    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the rendered message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the parameters involved in the failure, in chain order.
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    /// Returns the generated error this one replaced, if any.
    pub fn cause(&self) -> Option<&ValidationError> {
        self.cause.as_deref()
    }

    /// Returns true if a precondition caused the failure.
    pub fn is_precondition(&self) -> bool {
        self.kind == FailureKind::Precondition
    }
}
