//! Fluent chain construction
//!
//! [`Chain`] is the handle callers build on. Every call returns a new chain
//! sharing the previous steps; nothing is evaluated until a terminal
//! operation runs.
//!
//! # Examples
//!
//! ```rust,ignore
//! use verity_validator::prelude::*;
//!
//! // consecutive checks are joined with AND
//! let port = that(8080_u16).is_greater_than(1023).is_less_than_or_equal(49151);
//! assert!(port.is_valid());
//!
//! // explicit grouping: (name empty OR name blank) AND age >= 18
//! let chain = that(age)
//!     .is_greater_than_or_equal(18)
//!     .and_group(that(name).is_empty().or().is_blank());
//!
//! // switching to another checked value
//! let chain = that("key").not().is_empty().and_that(42).is_positive();
//! ```

use std::fmt;
use std::sync::Arc;

use crate::chain::evaluate::combine;
use crate::chain::operator::Operator;
use crate::chain::step::{Check, Precondition, Rule, StepKind, StepNode};
use crate::chain::verdict::Verdict;
use crate::foundation::{Checkable, Parameter, ValidationResult};
use crate::message::MessageTemplate;

/// Operator and negation waiting for the next appended step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Pending {
    operator: Option<Operator>,
    negated: bool,
}

/// A persistent chain of checks against one checked value.
///
/// Cloning is cheap and branches are independent: appending to a clone never
/// affects the original.
pub struct Chain<T> {
    value: Arc<T>,
    tail: Option<Arc<StepNode>>,
    pending: Pending,
}

/// Starts a chain on `value`.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// assert!(that(5).is_greater_than(3).is_valid());
/// ```
pub fn that<T: Checkable>(value: T) -> Chain<T> {
    Chain::new(value)
}

impl<T: Checkable> Chain<T> {
    /// Starts a chain on `value`.
    pub fn new(value: T) -> Self {
        Self::from_arc(Arc::new(value))
    }

    /// Starts a chain on an already shared value.
    pub fn from_arc(value: Arc<T>) -> Self {
        Self {
            value,
            tail: None,
            pending: Pending::default(),
        }
    }

    fn continue_with<U: Checkable>(self, value: U, operator: Operator) -> Chain<U> {
        Chain {
            value: Arc::new(value),
            tail: self.tail,
            pending: Pending {
                operator: Some(operator),
                negated: self.pending.negated,
            },
        }
    }

    /// Returns the checked value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Number of steps appended so far, groups counting as one.
    pub fn step_count(&self) -> usize {
        self.tail.as_ref().map_or(0, |tail| tail.depth())
    }

    // ------------------------------------------------------------------------
    // Bare operators: continue on the same value
    // ------------------------------------------------------------------------

    fn with_operator(mut self, operator: Operator) -> Self {
        self.pending.operator = Some(operator);
        self
    }

    /// Joins the next check with AND. This is also the default.
    pub fn and(self) -> Self {
        self.with_operator(Operator::And)
    }

    /// Joins the next check with OR.
    pub fn or(self) -> Self {
        self.with_operator(Operator::Or)
    }

    /// Joins the next check with XOR.
    pub fn xor(self) -> Self {
        self.with_operator(Operator::Xor)
    }

    /// Joins the next check with NAND.
    pub fn nand(self) -> Self {
        self.with_operator(Operator::Nand)
    }

    /// Joins the next check with NOR.
    pub fn nor(self) -> Self {
        self.with_operator(Operator::Nor)
    }

    /// Negates the next atomic check. Two calls cancel out.
    ///
    /// Groups are never negated: a pending negation is kept for the first
    /// check appended after them.
    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.pending.negated = !self.pending.negated;
        self
    }

    // ------------------------------------------------------------------------
    // Grouping: join a fully built chain as one boolean
    // ------------------------------------------------------------------------

    fn group<U>(mut self, operator: Operator, other: Chain<U>) -> Self {
        self.pending.operator = None;
        self.tail = Some(StepNode::append(
            self.tail.take(),
            operator,
            StepKind::Group(other.tail),
        ));
        self
    }

    /// Joins `other`, evaluated on its own, with AND.
    pub fn and_group<U>(self, other: Chain<U>) -> Self {
        self.group(Operator::And, other)
    }

    /// Joins `other`, evaluated on its own, with OR.
    pub fn or_group<U>(self, other: Chain<U>) -> Self {
        self.group(Operator::Or, other)
    }

    /// Joins `other`, evaluated on its own, with XOR.
    pub fn xor_group<U>(self, other: Chain<U>) -> Self {
        self.group(Operator::Xor, other)
    }

    /// Joins `other`, evaluated on its own, with NAND.
    pub fn nand_group<U>(self, other: Chain<U>) -> Self {
        self.group(Operator::Nand, other)
    }

    /// Joins `other`, evaluated on its own, with NOR.
    pub fn nor_group<U>(self, other: Chain<U>) -> Self {
        self.group(Operator::Nor, other)
    }

    // ------------------------------------------------------------------------
    // New checked value: the chain continues on `value`
    // ------------------------------------------------------------------------

    /// Continues the chain on `value`, joining its next check with AND.
    pub fn and_that<U: Checkable>(self, value: U) -> Chain<U> {
        self.continue_with(value, Operator::And)
    }

    /// Continues the chain on `value`, joining its next check with OR.
    pub fn or_that<U: Checkable>(self, value: U) -> Chain<U> {
        self.continue_with(value, Operator::Or)
    }

    /// Continues the chain on `value`, joining its next check with XOR.
    pub fn xor_that<U: Checkable>(self, value: U) -> Chain<U> {
        self.continue_with(value, Operator::Xor)
    }

    /// Continues the chain on `value`, joining its next check with NAND.
    pub fn nand_that<U: Checkable>(self, value: U) -> Chain<U> {
        self.continue_with(value, Operator::Nand)
    }

    /// Continues the chain on `value`, joining its next check with NOR.
    pub fn nor_that<U: Checkable>(self, value: U) -> Chain<U> {
        self.continue_with(value, Operator::Nor)
    }

    // ------------------------------------------------------------------------
    // Checks
    // ------------------------------------------------------------------------

    /// Appends a check, consuming any pending operator and negation.
    pub fn verify(mut self, rule: Rule<T>) -> Self {
        let checked = Parameter::checked(Arc::clone(&self.value));

        let precondition = rule.precondition.map(|(test, message)| {
            let value = Arc::clone(&self.value);
            Precondition {
                test: Arc::new(move || test(&*value)),
                message: message.with_checked(checked.clone()),
            }
        });

        let value = Arc::clone(&self.value);
        let predicate = rule.predicate;
        let check = Check {
            predicate: Arc::new(move || predicate(&*value)),
            precondition,
            message: rule.message.with_checked(checked),
            negated: self.pending.negated,
        };

        let operator = self.pending.operator.take().unwrap_or(Operator::And);
        self.pending.negated = false;
        self.tail = Some(StepNode::append(
            self.tail.take(),
            operator,
            StepKind::Check(check),
        ));
        self
    }

    /// Appends a caller-defined check described by `message`.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// use verity_validator::prelude::*;
    ///
    /// let chain = that(7).satisfies(|n| n % 2 == 1, "{value} should be odd");
    /// assert!(chain.is_valid());
    /// ```
    pub fn satisfies<F>(self, predicate: F, message: impl Into<MessageTemplate>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.verify(Rule::new(predicate, message))
    }

    // ------------------------------------------------------------------------
    // Terminal operations
    // ------------------------------------------------------------------------

    /// Walks the chain and returns its verdict. Every call re-evaluates.
    pub fn evaluate(&self) -> Verdict<T> {
        let _span = tracing::trace_span!("evaluate", steps = self.step_count()).entered();
        Verdict::new(Arc::clone(&self.value), combine(self.tail.as_ref()))
    }

    /// Returns true if every precondition holds and the chain is true.
    pub fn is_valid(&self) -> bool {
        self.evaluate().is_valid()
    }

    /// Returns the failure message in the default locale, if invalid.
    pub fn errors(&self) -> Option<String> {
        self.evaluate().errors()
    }

    /// Returns the checked value, or the failure as an error.
    pub fn or_else_fail(&self) -> ValidationResult<T>
    where
        T: Clone,
    {
        self.evaluate().or_else_fail()
    }
}

impl<T> Clone for Chain<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            tail: self.tail.clone(),
            pending: self.pending,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("value", &self.value)
            .field("tail", &self.tail)
            .field("pending", &self.pending)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Locale;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn even() -> Rule<i32> {
        Rule::new(|n: &i32| n % 2 == 0, "{value} should be even")
    }

    fn message(chain: &Chain<impl Checkable>) -> Option<String> {
        chain.evaluate().errors_in(&Locale::ENGLISH)
    }

    #[test]
    fn test_empty_chain_is_valid() {
        let chain = that(1);
        assert_eq!(chain.step_count(), 0);
        assert!(chain.is_valid());
        assert_eq!(message(&chain), None);
    }

    #[test]
    fn test_default_operator_is_and() {
        let chain = that(4).verify(even()).satisfies(|n| *n > 10, "{value} should be big");
        assert_eq!(chain.step_count(), 2);
        assert!(!chain.is_valid());
        assert_eq!(message(&chain).as_deref(), Some("4 should be big"));
    }

    #[test]
    fn test_bare_or() {
        let chain = that(3).verify(even()).or().satisfies(|n| *n == 3, "{value} should be 3");
        assert!(chain.is_valid());
    }

    #[test]
    fn test_last_operator_wins() {
        let chain = that(3).verify(even()).and().or().satisfies(|n| *n == 3, "three");
        assert!(chain.is_valid());
    }

    #[test]
    fn test_not_applies_to_next_check_only() {
        let chain = that(3).not().verify(even()).verify(even());
        assert!(!chain.is_valid());
        assert_eq!(message(&chain).as_deref(), Some("3 should be even"));
    }

    #[test]
    fn test_double_not_cancels() {
        let once = that(2).not().verify(even());
        let twice = that(2).not().not().verify(even());
        assert!(!once.is_valid());
        assert!(twice.is_valid());
    }

    #[test]
    fn test_not_skips_groups() {
        let group = that(2).verify(even());
        let chain = that(3).not().and_group(group).verify(even());
        // group stays un-negated, the negation lands on the last check
        assert!(chain.is_valid());
    }

    #[test]
    fn test_and_that_switches_value() {
        let chain = that(2).verify(even()).and_that("text").satisfies(|s| s.len() == 4, "len");
        assert_eq!(*chain.value(), "text");
        assert!(chain.is_valid());
        assert_eq!(chain.evaluate().parameters().len(), 2);
    }

    #[test]
    fn test_or_that() {
        let chain = that(3).verify(even()).or_that(8).verify(even());
        assert!(chain.is_valid());
        assert_eq!(chain.evaluate().checked(), Some(&8));
    }

    #[test]
    fn test_branches_are_independent() {
        let base = that(4).verify(even());
        let failing = base.clone().satisfies(|n| *n > 5, "{value} should be > 5");
        let passing = base.clone().or().satisfies(|n| *n > 5, "{value} should be > 5");
        assert!(base.is_valid());
        assert!(!failing.is_valid());
        assert!(passing.is_valid());
        assert_eq!(base.step_count(), 1);
    }

    #[test]
    fn test_construction_is_lazy() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let chain = that(1).satisfies(
            move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                true
            },
            "counted",
        );
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(chain.is_valid());
        assert!(chain.is_valid());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_group_operator_variants() {
        let t = || that(2).verify(even());
        let f = || that(3).verify(even());
        assert!(t().and_group(t()).is_valid());
        assert!(f().or_group(t()).is_valid());
        assert!(t().xor_group(f()).is_valid());
        assert!(t().nand_group(f()).is_valid());
        assert!(f().nor_group(f()).is_valid());
        assert!(!t().nor_group(f()).is_valid());
    }

    #[test]
    fn test_group_operator_overrides_bare_operator() {
        let t = || that(2).verify(even());
        let f = || that(3).verify(even());
        assert!(!f().or().and_group(t()).is_valid());
        assert!(t().and().or_group(f()).is_valid());
        assert!(!t().xor().nor_group(f()).is_valid());
    }

    #[test]
    fn test_group_after_value_switch() {
        let t = || that(2).verify(even());
        let f = || that(3).verify(even());
        // and_that leaves AND pending; the group's own operator wins
        assert!(f().and_that(4).or_group(t()).is_valid());
        assert!(!t().or_that(4).and_group(f()).is_valid());
        assert!(t().and_that(5).verify(even()).or_group(t()).is_valid());
    }

    #[test]
    fn test_that_operator_variants() {
        assert!(that(3).verify(even()).xor_that(2).verify(even()).is_valid());
        assert!(!that(2).verify(even()).nand_that(2).verify(even()).is_valid());
        assert!(that(3).verify(even()).nor_that(5).verify(even()).is_valid());
    }

    #[test]
    fn test_chain_is_send_sync() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<Chain<String>>();
        assert_send_sync::<Verdict<Vec<u8>>>();
    }
}
