//! # verity-validator
//!
//! Fluent validation chains: checks joined by boolean operators, evaluated
//! lazily, with localized failure messages.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! // consecutive checks are joined with AND
//! let port = that(8080_u16).is_greater_than(1023).is_less_than(49152);
//! assert!(port.is_valid());
//!
//! let verdict = that(3).is_greater_than(5).evaluate();
//! assert_eq!(verdict.errors().as_deref(), Some("3 should be greater than 5"));
//! ```
//!
//! ## Operators
//!
//! Every binary operator comes in three forms: bare (`or()`, continuing on the
//! same value), grouped (`or_group(chain)`, joining a sub-chain as one
//! boolean) and switching (`or_that(value)`, continuing on a new value).
//! `not()` negates the next check. Chains are folded strictly left to right,
//! with no precedence between operators.
//!
//! ## Preconditions
//!
//! Some checks only make sense under a precondition, such as a non-zero
//! divisor for [`is_divisible_by`](checks::NumberChecks::is_divisible_by).
//! The first failing precondition invalidates the whole chain and its message
//! replaces every other.
//!
//! ## Messages
//!
//! Messages are rendered when asked for, in the process-wide default
//! [`Locale`](foundation::Locale) or in an explicit one. English and French
//! ship with the crate; more can be added with a
//! [`MessageCatalog`](message::MessageCatalog).
//!
//! ## Check families
//!
//! - **Equality**: [`EqualityChecks`](checks::EqualityChecks)
//! - **Ordering**: [`OrderingChecks`](checks::OrderingChecks)
//! - **Numbers**: [`NumberChecks`](checks::NumberChecks)
//! - **Text**: [`TextChecks`](checks::TextChecks)
//! - **Collections**: [`CollectionChecks`](checks::CollectionChecks),
//!   [`MapChecks`](checks::MapChecks)
//! - **Options**: [`OptionChecks`](checks::OptionChecks)
//! - **Errors**: [`ErrorChecks`](checks::ErrorChecks)

pub mod chain;
pub mod checks;
pub mod foundation;
pub mod message;
pub mod prelude;
