//! Message templates
//!
//! A [`MessageTemplate`] is the unrendered description of one check: a
//! [`Pattern`] (a catalog key or caller text) plus the parameters its
//! placeholders refer to.

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::foundation::{Checkable, Parameter, Role};

/// The text source of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    /// Looked up in a [`MessageCatalog`](crate::message::MessageCatalog).
    Key(Cow<'static, str>),
    /// Caller-supplied text, used as is.
    Literal(Cow<'static, str>),
}

/// An opaque message token with its ordered parameters.
///
/// Placeholders in the pattern:
/// - `{value}` is replaced with the checked value
/// - `{0}`, `{1}`, ... are replaced with the arguments, in order
/// - `{{` and `}}` produce literal braces
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::message::MessageTemplate;
///
/// let template = MessageTemplate::key("compare.between").arg(1).arg(10);
/// let custom = MessageTemplate::literal("{value} should be a prime number");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MessageTemplate {
    pattern: Pattern,
    checked: Option<Parameter>,
    arguments: SmallVec<[Parameter; 2]>,
}

impl MessageTemplate {
    /// Creates a template looked up by key in a catalog.
    pub fn key(key: impl Into<Cow<'static, str>>) -> Self {
        Self::from_pattern(Pattern::Key(key.into()))
    }

    /// Creates a template from caller text.
    pub fn literal(text: impl Into<Cow<'static, str>>) -> Self {
        Self::from_pattern(Pattern::Literal(text.into()))
    }

    fn from_pattern(pattern: Pattern) -> Self {
        Self {
            pattern,
            checked: None,
            arguments: SmallVec::new(),
        }
    }

    /// Appends an argument.
    #[must_use = "builder methods must be chained or built"]
    pub fn arg<T: Checkable>(self, value: T) -> Self {
        self.param(Parameter::argument(value))
    }

    /// Appends an already captured parameter.
    ///
    /// A parameter with the [`Role::Checked`] role replaces the checked value.
    #[must_use = "builder methods must be chained or built"]
    pub fn param(mut self, parameter: Parameter) -> Self {
        match parameter.role() {
            Role::Checked => self.checked = Some(parameter),
            Role::Argument => self.arguments.push(parameter),
        }
        self
    }

    /// Returns the pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Returns the checked value parameter, once attached by the chain.
    pub fn checked(&self) -> Option<&Parameter> {
        self.checked.as_ref()
    }

    /// Returns the argument parameters, in order.
    pub fn arguments(&self) -> &[Parameter] {
        &self.arguments
    }

    /// Iterates over the checked value followed by the arguments.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.checked.iter().chain(self.arguments.iter())
    }

    pub(crate) fn with_checked(mut self, checked: Parameter) -> Self {
        self.checked = Some(checked);
        self
    }
}

impl From<&'static str> for MessageTemplate {
    fn from(text: &'static str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for MessageTemplate {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}
