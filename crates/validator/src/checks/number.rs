//! Numeric checks

use std::sync::Arc;

use crate::chain::{Chain, Rule};
use crate::foundation::{Checkable, Parameter};
use crate::message::MessageTemplate;

/// Primitive numbers the numeric checks apply to.
pub trait Number: Checkable + Copy + PartialOrd {
    /// Additive identity.
    const ZERO: Self;

    /// Returns true if `divisor` divides `self` with no remainder.
    ///
    /// Integer overflow (`MIN % -1`) wraps instead of panicking.
    fn remainder_is_zero(self, divisor: Self) -> bool;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0;

                #[inline]
                fn remainder_is_zero(self, divisor: Self) -> bool {
                    self.wrapping_rem(divisor) == 0
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Number for $t {
                const ZERO: Self = 0.0;

                #[inline]
                fn remainder_is_zero(self, divisor: Self) -> bool {
                    self % divisor == 0.0
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

/// Sign and divisibility checks.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// assert!(that(12).is_positive().is_divisible_by(4).is_valid());
///
/// // a zero divisor is a precondition failure
/// assert!(!that(12).is_divisible_by(0).evaluate().is_precondition_valid());
/// ```
pub trait NumberChecks<T>: Sized {
    /// The value should be zero.
    fn is_zero(self) -> Self;

    /// The value should be strictly greater than zero.
    fn is_positive(self) -> Self;

    /// The value should be strictly less than zero.
    fn is_negative(self) -> Self;

    /// The value should be a multiple of `divisor`.
    ///
    /// Requires a non-zero divisor.
    fn is_divisible_by(self, divisor: T) -> Self;
}

impl<T: Number> NumberChecks<T> for Chain<T> {
    fn is_zero(self) -> Self {
        self.verify(Rule::new(
            |value: &T| *value == T::ZERO,
            MessageTemplate::key("number.zero"),
        ))
    }

    fn is_positive(self) -> Self {
        self.verify(Rule::new(
            |value: &T| *value > T::ZERO,
            MessageTemplate::key("number.positive"),
        ))
    }

    fn is_negative(self) -> Self {
        self.verify(Rule::new(
            |value: &T| *value < T::ZERO,
            MessageTemplate::key("number.negative"),
        ))
    }

    fn is_divisible_by(self, divisor: T) -> Self {
        let shared = Arc::new(divisor);
        let template = MessageTemplate::key("number.divisible")
            .param(Parameter::shared_argument(Arc::clone(&shared)));
        let guard = MessageTemplate::key("number.divisor").param(Parameter::shared_argument(shared));

        let rule = Rule::new(
            move |value: &T| value.remainder_is_zero(divisor),
            template,
        )
        .requires(move |_: &T| divisor != T::ZERO, guard);
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

    #[rstest]
    #[case(-2, false, false, true)]
    #[case(0, true, false, false)]
    #[case(7, false, true, false)]
    fn test_sign_checks(
        #[case] value: i64,
        #[case] zero: bool,
        #[case] positive: bool,
        #[case] negative: bool,
    ) {
        assert_eq!(that(value).is_zero().is_valid(), zero);
        assert_eq!(that(value).is_positive().is_valid(), positive);
        assert_eq!(that(value).is_negative().is_valid(), negative);
    }

    #[test]
    fn test_float_signs() {
        assert!(that(0.5_f64).is_positive().is_valid());
        assert!(that(-0.0_f32).is_zero().is_valid());
        assert!(!that(f64::NAN).is_positive().is_valid());
    }

    #[test]
    fn test_divisible_by() {
        assert!(that(9).is_divisible_by(3).is_valid());
        assert!(that(-6).is_divisible_by(3).is_valid());
        assert!(that(0_u32).is_divisible_by(5).is_valid());
        assert!(!that(7).is_divisible_by(3).is_valid());
        assert!(that(7.5).is_divisible_by(2.5).is_valid());
    }

    #[test]
    fn test_divisible_by_minus_one_does_not_overflow() {
        assert!(that(i32::MIN).is_divisible_by(-1).is_valid());
    }

    #[test]
    fn test_divisible_by_message() {
        let verdict = that(7).is_divisible_by(3).evaluate();
        assert_eq!(
            verdict.errors_in(&Locale::ENGLISH).as_deref(),
            Some("7 should be divisible by 3")
        );
    }

    #[test]
    fn test_zero_divisor_is_precondition_failure() {
        let verdict = that(7).is_divisible_by(0).evaluate();
        assert_eq!(verdict.failure_kind(), Some(FailureKind::Precondition));
        assert_eq!(
            verdict.errors_in(&Locale::ENGLISH).as_deref(),
            Some("the divisor 0 should not be zero")
        );
    }

    #[test]
    fn test_french_messages() {
        let verdict = that(-1).is_positive().evaluate();
        assert_eq!(
            verdict.errors_in(&Locale::FRENCH).as_deref(),
            Some("-1 devrait être positif")
        );
    }
}
