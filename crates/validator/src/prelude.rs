//! Prelude module for convenient imports.
//!
//! Provides a single `use verity_validator::prelude::*;` import that brings
//! in the chain entry point, every check family and the terminal types.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! let verdict = that("alice")
//!     .not()
//!     .is_blank()
//!     .and_that(42)
//!     .is_between(18, 120)
//!     .evaluate();
//! assert!(verdict.is_valid());
//! ```

// ============================================================================
// CHAIN: Entry point, operators and verdicts
// ============================================================================

pub use crate::chain::{Chain, Operator, Rule, Verdict, that};

// ============================================================================
// CHECKS: Extension traits per checked type
// ============================================================================

pub use crate::checks::{
    CollectionChecks, EqualityChecks, ErrorChecks, MapChecks, NumberChecks, OptionChecks,
    OrderingChecks, TextChecks,
};

// ============================================================================
// FOUNDATION: Errors, locales and messages
// ============================================================================

pub use crate::foundation::{Checkable, FailureKind, Locale, ValidationError, ValidationResult};
pub use crate::message::{MapCatalog, MessageCatalog, MessageTemplate};

// ============================================================================
// SERDE-GATED: Serializable reports
// ============================================================================

#[cfg(feature = "serde")]
pub use crate::chain::Report;
