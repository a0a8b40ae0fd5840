//! Ordering checks
//!
//! Comparisons use [`PartialOrd`], so incomparable values (such as `NaN`)
//! fail every check.

use std::sync::Arc;

use crate::chain::{Chain, Rule};
use crate::foundation::{Checkable, Parameter};
use crate::message::MessageTemplate;

/// Checks comparing the checked value against bounds.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let port = that(8080).is_between(1024, 49151);
/// assert!(port.is_valid());
///
/// // inverted bounds are a precondition failure
/// let verdict = that(5).is_between(10, 1).evaluate();
/// assert!(!verdict.is_precondition_valid());
/// ```
pub trait OrderingChecks<T>: Sized {
    /// The value should be strictly greater than `bound`.
    fn is_greater_than(self, bound: T) -> Self;

    /// The value should be greater than or equal to `bound`.
    fn is_greater_than_or_equal(self, bound: T) -> Self;

    /// The value should be strictly less than `bound`.
    fn is_less_than(self, bound: T) -> Self;

    /// The value should be less than or equal to `bound`.
    fn is_less_than_or_equal(self, bound: T) -> Self;

    /// The value should lie in `from..=to`.
    ///
    /// Requires `from <= to`.
    fn is_between(self, from: T, to: T) -> Self;
}

fn compare<T, F>(chain: Chain<T>, key: &'static str, bound: T, holds: F) -> Chain<T>
where
    T: Checkable,
    F: Fn(&T, &T) -> bool + Send + Sync + 'static,
{
    let bound = Arc::new(bound);
    let template = MessageTemplate::key(key).param(Parameter::shared_argument(Arc::clone(&bound)));
    chain.verify(Rule::new(move |value: &T| holds(value, &bound), template))
}

impl<T> OrderingChecks<T> for Chain<T>
where
    T: Checkable + PartialOrd,
{
    fn is_greater_than(self, bound: T) -> Self {
        compare(self, "compare.greater", bound, |value, bound| value > bound)
    }

    fn is_greater_than_or_equal(self, bound: T) -> Self {
        compare(self, "compare.greater_or_equal", bound, |value, bound| {
            value >= bound
        })
    }

    fn is_less_than(self, bound: T) -> Self {
        compare(self, "compare.less", bound, |value, bound| value < bound)
    }

    fn is_less_than_or_equal(self, bound: T) -> Self {
        compare(self, "compare.less_or_equal", bound, |value, bound| {
            value <= bound
        })
    }

    fn is_between(self, from: T, to: T) -> Self {
        let from = Arc::new(from);
        let to = Arc::new(to);
        let bounds = || {
            [
                Parameter::shared_argument(Arc::clone(&from)),
                Parameter::shared_argument(Arc::clone(&to)),
            ]
        };

        let [low, high] = bounds();
        let template = MessageTemplate::key("compare.between").param(low).param(high);
        let [low, high] = bounds();
        let guard = MessageTemplate::key("compare.bounds").param(low).param(high);

        let (pre_from, pre_to) = (Arc::clone(&from), Arc::clone(&to));
        let rule = Rule::new(
            move |value: &T| *from <= *value && *value <= *to,
            template,
        )
        .requires(move |_: &T| *pre_from <= *pre_to, guard);
        self.verify(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::that;
    use crate::foundation::{FailureKind, Locale};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn message<T: Checkable>(chain: Chain<T>) -> Option<String> {
        chain.evaluate().errors_in(&Locale::ENGLISH)
    }

    #[rstest]
    #[case(5, true, true, false, false)]
    #[case(3, false, true, false, true)]
    #[case(1, false, false, true, true)]
    fn test_comparisons_against_three(
        #[case] value: i32,
        #[case] greater: bool,
        #[case] greater_or_equal: bool,
        #[case] less: bool,
        #[case] less_or_equal: bool,
    ) {
        assert_eq!(that(value).is_greater_than(3).is_valid(), greater);
        assert_eq!(that(value).is_greater_than_or_equal(3).is_valid(), greater_or_equal);
        assert_eq!(that(value).is_less_than(3).is_valid(), less);
        assert_eq!(that(value).is_less_than_or_equal(3).is_valid(), less_or_equal);
    }

    #[test]
    fn test_greater_than_message() {
        assert_eq!(
            message(that(3).is_greater_than(5)).as_deref(),
            Some("3 should be greater than 5")
        );
    }

    #[test]
    fn test_nan_fails_every_comparison() {
        assert!(!that(f64::NAN).is_greater_than(0.0).is_valid());
        assert!(!that(f64::NAN).is_less_than_or_equal(0.0).is_valid());
    }

    #[rstest]
    #[case(1, true)]
    #[case(10, true)]
    #[case(5, true)]
    #[case(0, false)]
    #[case(11, false)]
    fn test_between_is_inclusive(#[case] value: i32, #[case] expected: bool) {
        assert_eq!(that(value).is_between(1, 10).is_valid(), expected);
    }

    #[test]
    fn test_between_message() {
        assert_eq!(
            message(that(12).is_between(1, 10)).as_deref(),
            Some("12 should be between 1 and 10")
        );
    }

    #[test]
    fn test_inverted_bounds_fail_precondition() {
        let verdict = that(5).is_between(10, 1).or().is_greater_than(0).evaluate();
        assert!(!verdict.is_valid());
        assert_eq!(verdict.failure_kind(), Some(FailureKind::Precondition));
        assert_eq!(
            verdict.errors_in(&Locale::ENGLISH).as_deref(),
            Some("the lower bound 10 should not be greater than the upper bound 1")
        );
    }

    #[test]
    fn test_strings_are_ordered() {
        assert!(that("b").is_between("a", "c").is_valid());
    }
}
