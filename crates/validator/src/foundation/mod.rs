//! Core value, error and locale types
//!
//! - **Parameters**: [`Parameter`], [`Role`], [`TypeTag`], [`Checkable`]
//! - **Errors**: [`ValidationError`], [`FailureKind`]
//! - **Locale**: [`Locale`] and the process-wide default

pub mod error;
pub mod locale;
pub mod parameter;

pub use error::{FailureKind, ValidationError};
pub use locale::{Locale, default_locale, reset_default_locale, set_default_locale};
pub use parameter::{Checkable, ParamValue, Parameter, Role, TypeTag};

/// Result of a fallible terminal operation.
pub type ValidationResult<T> = Result<T, ValidationError>;
