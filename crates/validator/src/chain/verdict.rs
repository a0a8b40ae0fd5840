//! Verdicts and terminal operations
//!
//! A [`Verdict`] is produced by each evaluation of a chain. It is never
//! cached on the chain; evaluating an unchanged chain twice yields equal
//! verdicts. Failure messages are rendered on demand, in the locale chosen by
//! the caller.

use std::fmt;
use std::sync::Arc;

use crate::chain::evaluate::Evaluation;
use crate::foundation::{
    Checkable, FailureKind, Locale, Parameter, ValidationError, ValidationResult, default_locale,
};
use crate::message::{Message, MessageCatalog, MessageTemplate, Renderer};

/// The outcome of evaluating a chain.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let verdict = that(3).is_greater_than(5).evaluate();
/// assert!(!verdict.is_valid());
/// assert_eq!(verdict.errors().as_deref(), Some("3 should be greater than 5"));
/// assert_eq!(verdict.checked(), None);
/// ```
pub struct Verdict<T> {
    checked: Arc<T>,
    evaluation: Evaluation,
}

impl<T> Verdict<T> {
    pub(crate) fn new(checked: Arc<T>, evaluation: Evaluation) -> Self {
        Self {
            checked,
            evaluation,
        }
    }

    /// Returns true only if every precondition held and the chain is true.
    pub fn is_valid(&self) -> bool {
        self.evaluation.precondition_valid && self.evaluation.valid
    }

    /// Returns false if a precondition failed.
    pub fn is_precondition_valid(&self) -> bool {
        self.evaluation.precondition_valid
    }

    /// Returns what made the chain invalid, if anything.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        self.evaluation.failure_kind()
    }

    /// Parameters involved in the evaluation, in chain order, without
    /// duplicates.
    pub fn parameters(&self) -> &[Parameter] {
        &self.evaluation.parameters
    }

    /// Number of checks whose predicate ran.
    pub fn evaluated_checks(&self) -> usize {
        self.evaluation.evaluated
    }

    /// The unrendered failure description.
    pub fn failure(&self) -> Option<&Message> {
        self.evaluation.failure.as_ref()
    }

    /// The unrendered formula of the whole chain. `None` for an empty chain
    /// or when a precondition failed.
    pub fn formula(&self) -> Option<&Message> {
        self.evaluation.formula.as_ref()
    }

    // ------------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------------

    /// Returns the failure message in the default locale, absent when valid.
    pub fn errors(&self) -> Option<String> {
        self.errors_in(&default_locale())
    }

    /// Returns the failure message in `locale`, absent when valid.
    pub fn errors_in(&self, locale: &Locale) -> Option<String> {
        self.render(&Renderer::new(locale))
    }

    /// Returns the failure message rendered against `catalog` first.
    pub fn errors_with(&self, locale: &Locale, catalog: &dyn MessageCatalog) -> Option<String> {
        self.render(&Renderer::with_catalog(locale, catalog))
    }

    fn render(&self, renderer: &Renderer<'_>) -> Option<String> {
        if self.is_valid() {
            return None;
        }
        self.failure().map(|failure| renderer.render(failure))
    }

    /// Builds the error describing this verdict, absent when valid.
    pub fn to_error_in(&self, locale: &Locale) -> Option<ValidationError> {
        let kind = self.failure_kind()?;
        let message = self.errors_in(locale).unwrap_or_default();
        Some(ValidationError::new(kind, message).with_parameters(self.parameters().to_vec()))
    }

    // ------------------------------------------------------------------------
    // Checked value
    // ------------------------------------------------------------------------

    /// Returns the last checked value when valid.
    ///
    /// For `Verdict<Option<U>>`, `Some(&None)` means the chain is valid and
    /// the value is absent; see [`Verdict::checked_present`] to treat absence
    /// like failure.
    pub fn checked(&self) -> Option<&T> {
        self.is_valid().then(|| self.checked.as_ref())
    }

    /// Returns the last checked value when valid.
    pub fn into_checked(self) -> Option<T>
    where
        T: Clone,
    {
        if self.is_valid() {
            Some(Arc::unwrap_or_clone(self.checked))
        } else {
            None
        }
    }

    /// Returns the checked value when valid, `default` otherwise.
    pub fn or_else(self, default: T) -> T
    where
        T: Clone,
    {
        self.into_checked().unwrap_or(default)
    }

    /// Returns the checked value when valid, computes a fallback otherwise.
    pub fn or_else_get<F>(self, fallback: F) -> T
    where
        T: Clone,
        F: FnOnce() -> T,
    {
        self.into_checked().unwrap_or_else(fallback)
    }

    // ------------------------------------------------------------------------
    // Raising
    // ------------------------------------------------------------------------

    /// Returns the checked value, or an error carrying the generated message
    /// in the default locale.
    pub fn or_else_fail(self) -> ValidationResult<T>
    where
        T: Clone,
    {
        let locale = default_locale();
        self.or_else_raise_in(&locale, |error| error)
    }

    /// Like [`or_else_fail`](Self::or_else_fail), but the error message is
    /// `template`, rendered in the default locale. The generated error is
    /// kept as its source.
    pub fn or_else_fail_with(self, template: impl Into<MessageTemplate>) -> ValidationResult<T>
    where
        T: Checkable + Clone,
    {
        let locale = default_locale();
        self.or_else_fail_in(&locale, template)
    }

    /// Like [`or_else_fail_with`](Self::or_else_fail_with), rendered in
    /// `locale`.
    ///
    /// `{value}` in the template refers to the checked value.
    pub fn or_else_fail_in(
        self,
        locale: &Locale,
        template: impl Into<MessageTemplate>,
    ) -> ValidationResult<T>
    where
        T: Checkable + Clone,
    {
        let template = template
            .into()
            .with_checked(Parameter::checked(Arc::clone(&self.checked)));
        self.or_else_raise_in(locale, |generated| {
            let message = Renderer::new(locale).render_template(&template, false);
            ValidationError::new(generated.kind(), message)
                .with_parameters(generated.parameters().to_vec())
                .with_cause(generated)
        })
    }

    /// Returns the checked value, or the caller's error built from the
    /// generated one (default locale). Keep it as the error's source to
    /// preserve the generated message.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("invalid port")]
    /// struct PortError(#[source] ValidationError);
    ///
    /// let port = that(80).is_greater_than(1023).evaluate().or_else_raise(PortError);
    /// ```
    pub fn or_else_raise<E, F>(self, factory: F) -> Result<T, E>
    where
        T: Clone,
        F: FnOnce(ValidationError) -> E,
    {
        let locale = default_locale();
        self.or_else_raise_in(&locale, factory)
    }

    /// Like [`or_else_raise`](Self::or_else_raise), rendering in `locale`.
    pub fn or_else_raise_in<E, F>(self, locale: &Locale, factory: F) -> Result<T, E>
    where
        T: Clone,
        F: FnOnce(ValidationError) -> E,
    {
        match self.to_error_in(locale) {
            Some(error) => Err(factory(error)),
            None => Ok(Arc::unwrap_or_clone(self.checked)),
        }
    }

    /// Returns the checked value, or the supplied error. No message is
    /// rendered.
    pub fn or_else_raise_with<E, F>(self, supplier: F) -> Result<T, E>
    where
        T: Clone,
        F: FnOnce() -> E,
    {
        if self.is_valid() {
            Ok(Arc::unwrap_or_clone(self.checked))
        } else {
            Err(supplier())
        }
    }
}

impl<U> Verdict<Option<U>> {
    /// Returns the checked value when valid and present.
    pub fn checked_present(&self) -> Option<&U> {
        self.checked().and_then(Option::as_ref)
    }

    /// Returns the checked value when valid and present.
    pub fn into_present(self) -> Option<U>
    where
        U: Clone,
    {
        self.into_checked().flatten()
    }

    /// Returns the checked value when valid and present, `default` otherwise.
    pub fn or_else_present(self, default: U) -> U
    where
        U: Clone,
    {
        self.into_present().unwrap_or(default)
    }

    /// Returns the checked value when valid and present, computes a fallback
    /// otherwise.
    pub fn or_else_present_get<F>(self, fallback: F) -> U
    where
        U: Clone,
        F: FnOnce() -> U,
    {
        self.into_present().unwrap_or_else(fallback)
    }
}

impl<T> Clone for Verdict<T> {
    fn clone(&self) -> Self {
        Self {
            checked: Arc::clone(&self.checked),
            evaluation: self.evaluation.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Verdict<T> {
    fn eq(&self, other: &Self) -> bool {
        (Arc::ptr_eq(&self.checked, &other.checked) || self.checked == other.checked)
            && self.evaluation == other.evaluation
    }
}

impl<T: fmt::Debug> fmt::Debug for Verdict<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Verdict")
            .field("valid", &self.evaluation.valid)
            .field("precondition_valid", &self.evaluation.precondition_valid)
            .field("checked", &self.checked)
            .field("parameters", &self.evaluation.parameters)
            .field("failure", &self.evaluation.failure)
            .finish()
    }
}

// ============================================================================
// REPORT
// ============================================================================

/// Serializable summary of a verdict.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Report {
    /// Overall validity.
    pub valid: bool,
    /// False if a precondition failed.
    pub precondition_valid: bool,
    /// What made the chain invalid.
    pub failure: Option<FailureKind>,
    /// Rendered failure message.
    pub message: Option<String>,
    /// Parameters involved, rendered.
    pub parameters: Vec<ParameterReport>,
}

/// One rendered parameter of a [`Report`].
#[cfg(feature = "serde")]
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParameterReport {
    /// Checked value or argument.
    pub role: crate::foundation::Role,
    /// Rust type name of the value.
    pub type_name: String,
    /// `Debug` representation of the value.
    pub value: String,
}

#[cfg(feature = "serde")]
impl<T> Verdict<T> {
    /// Summarizes the verdict, rendering the message in `locale`.
    pub fn report(&self, locale: &Locale) -> Report {
        Report {
            valid: self.is_valid(),
            precondition_valid: self.is_precondition_valid(),
            failure: self.failure_kind(),
            message: self.errors_in(locale),
            parameters: self
                .parameters()
                .iter()
                .map(|p| ParameterReport {
                    role: p.role(),
                    type_name: p.type_tag().name().to_owned(),
                    value: p.render(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::{Rule, that};
    use crate::message::MapCatalog;
    use pretty_assertions::assert_eq;
    use std::error::Error;

    fn positive() -> Rule<i32> {
        Rule::new(|n: &i32| *n > 0, "{value} should be positive")
    }

    fn non_zero() -> Rule<i32> {
        Rule::new(|_: &i32| true, "unused").requires(|n: &i32| *n != 0, "{value} must not be zero")
    }

    #[test]
    fn test_valid_verdict() {
        let verdict = that(5).verify(positive()).evaluate();
        assert!(verdict.is_valid());
        assert!(verdict.is_precondition_valid());
        assert_eq!(verdict.failure_kind(), None);
        assert_eq!(verdict.errors_in(&Locale::ENGLISH), None);
        assert_eq!(verdict.checked(), Some(&5));
        assert_eq!(verdict.evaluated_checks(), 1);
    }

    #[test]
    fn test_invalid_verdict() {
        let verdict = that(-5).verify(positive()).evaluate();
        assert!(!verdict.is_valid());
        assert_eq!(verdict.failure_kind(), Some(FailureKind::Check));
        assert_eq!(
            verdict.errors_in(&Locale::ENGLISH).as_deref(),
            Some("-5 should be positive")
        );
        assert_eq!(verdict.checked(), None);
        assert_eq!(verdict.clone().into_checked(), None);
    }

    #[test]
    fn test_precondition_failure() {
        let verdict = that(0).verify(non_zero()).evaluate();
        assert!(!verdict.is_valid());
        assert!(!verdict.is_precondition_valid());
        assert_eq!(verdict.failure_kind(), Some(FailureKind::Precondition));
        assert_eq!(
            verdict.errors_in(&Locale::ENGLISH).as_deref(),
            Some("0 must not be zero")
        );
        assert!(verdict.formula().is_none());
    }

    #[test]
    fn test_checked_option() {
        let absent = that(None::<u8>).satisfies(|_| true, "always").evaluate();
        assert_eq!(absent.checked(), Some(&None));
        assert_eq!(absent.checked_present(), None);
        assert_eq!(absent.into_present(), None);

        let present = that(Some(3_u8)).satisfies(|_| true, "always").evaluate();
        assert_eq!(present.checked_present(), Some(&3));

        let invalid = that(Some(3_u8)).satisfies(|_| false, "never").evaluate();
        assert_eq!(invalid.checked(), None);
    }

    #[test]
    fn test_or_else() {
        assert_eq!(that(4).verify(positive()).evaluate().or_else(1), 4);
        assert_eq!(that(-4).verify(positive()).evaluate().or_else(1), 1);
        assert_eq!(that(-4).verify(positive()).evaluate().or_else_get(|| 7), 7);
    }

    #[test]
    fn test_or_else_present() {
        let absent = || that(None::<u8>).satisfies(|_| true, "always").evaluate();
        assert_eq!(absent().or_else(Some(9)), None);
        assert_eq!(absent().or_else_present(9), 9);
        assert_eq!(absent().or_else_present_get(|| 4), 4);

        let present = that(Some(3_u8)).satisfies(|_| true, "always").evaluate();
        assert_eq!(present.or_else_present(9), 3);

        let invalid = that(Some(3_u8)).satisfies(|_| false, "never").evaluate();
        assert_eq!(invalid.or_else_present_get(|| 1), 1);
    }

    #[test]
    fn test_or_else_fail_with_default_locale() {
        let result: ValidationResult<i32> = that(-3)
            .verify(positive())
            .evaluate()
            .or_else_fail_with("rejected {value}");
        let err = result.unwrap_err();
        assert_eq!(err.message(), "rejected -3");
        assert_eq!(err.kind(), FailureKind::Check);
        assert!(err.source().is_some());
        assert_eq!(that(3).verify(positive()).evaluate().or_else_fail_with("unused").ok(), Some(3));
    }

    #[test]
    fn test_or_else_raise_in() {
        let err = that(-1)
            .verify(positive())
            .evaluate()
            .or_else_raise_in(&Locale::ENGLISH, |e| e)
            .unwrap_err();
        assert_eq!(err.message(), "-1 should be positive");
        assert_eq!(err.kind(), FailureKind::Check);
        assert_eq!(err.parameters().len(), 1);
    }

    #[test]
    fn test_or_else_fail_in_keeps_generated_as_source() {
        let err = that(-1)
            .verify(positive())
            .evaluate()
            .or_else_fail_in(&Locale::ENGLISH, MessageTemplate::literal("bad amount {value}"))
            .unwrap_err();
        assert_eq!(err.message(), "bad amount -1");
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("-1 should be positive")
        );
    }

    #[test]
    fn test_or_else_raise_with_skips_rendering() {
        #[derive(Debug, PartialEq)]
        struct Invalid;

        assert_eq!(
            that(-1).verify(positive()).evaluate().or_else_raise_with(|| Invalid),
            Err(Invalid)
        );
        assert_eq!(that(1).verify(positive()).evaluate().or_else_raise_with(|| Invalid), Ok(1));
    }

    #[test]
    fn test_errors_with_catalog() {
        let catalog = MapCatalog::new().with_entry(
            Locale::ENGLISH,
            "custom.positive",
            "{value} is not positive",
            "{value} is positive",
        );
        let rule = Rule::new(|n: &i32| *n > 0, MessageTemplate::key("custom.positive"));
        let verdict = that(-2).verify(rule).evaluate();
        assert_eq!(
            verdict.errors_with(&Locale::ENGLISH, &catalog).as_deref(),
            Some("-2 is not positive")
        );
        assert_eq!(verdict.errors_in(&Locale::ENGLISH).as_deref(), Some("custom.positive"));
    }

    #[test]
    fn test_reevaluation_is_equal() {
        let chain = that(-3).verify(positive()).or().verify(non_zero());
        assert_eq!(chain.evaluate(), chain.evaluate());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_report() {
        let report = that(-3).verify(positive()).evaluate().report(&Locale::ENGLISH);
        assert!(!report.valid);
        assert_eq!(report.failure, Some(FailureKind::Check));
        assert_eq!(report.message.as_deref(), Some("-3 should be positive"));
        assert_eq!(report.parameters.len(), 1);
        assert_eq!(report.parameters[0].type_name, "i32");
        assert_eq!(report.parameters[0].value, "-3");
    }
}
