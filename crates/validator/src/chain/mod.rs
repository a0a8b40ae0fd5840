//! Chains of checks and their evaluation
//!
//! - [`builder`] - the fluent [`Chain`] handle
//! - [`operator`] - operator truth tables
//! - [`step`] - immutable chain nodes and [`Rule`]s
//! - `evaluate` - the left-to-right walk
//! - [`verdict`] - [`Verdict`] and the terminal operations

pub mod builder;
pub(crate) mod evaluate;
pub mod operator;
pub mod step;
pub mod verdict;

pub use builder::{Chain, that};
pub use operator::{Operator, negate};
pub use step::{Predicate, Rule};
#[cfg(feature = "serde")]
pub use verdict::{ParameterReport, Report};
pub use verdict::Verdict;
