//! Steps: the immutable nodes of a chain
//!
//! A chain is a singly-linked list of [`StepNode`]s, newest first, ending at
//! a root with no predecessor. Nodes are shared behind `Arc` and never
//! mutated, so any number of chains may branch off the same prefix.

use std::fmt;
use std::sync::Arc;

use crate::chain::operator::Operator;
use crate::foundation::Parameter;
use crate::message::MessageTemplate;

/// A deferred, captured-value predicate.
pub(crate) type Thunk = Arc<dyn Fn() -> bool + Send + Sync>;

/// A predicate over a borrowed checked value.
pub type Predicate<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

// ============================================================================
// RULE
// ============================================================================

/// A leaf check, ready to be appended to a [`Chain`](crate::chain::Chain).
///
/// Check families build rules; the chain binds them to its checked value.
///
/// # Examples
///
/// ```rust,ignore
/// use verity_validator::prelude::*;
///
/// let even = Rule::new(|n: &u32| n % 2 == 0, MessageTemplate::literal("{value} should be even"));
/// assert!(that(4_u32).verify(even).is_valid());
/// ```
pub struct Rule<T> {
    pub(crate) predicate: Predicate<T>,
    pub(crate) message: MessageTemplate,
    pub(crate) precondition: Option<(Predicate<T>, MessageTemplate)>,
}

impl<T> Rule<T> {
    /// Creates a rule from a predicate and the template describing it.
    pub fn new<F>(predicate: F, message: impl Into<MessageTemplate>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
            precondition: None,
        }
    }

    /// Adds a precondition that must hold before the predicate may run.
    ///
    /// When it fails, the whole chain is invalid and `message` becomes the
    /// only error.
    #[must_use = "builder methods must be chained or built"]
    pub fn requires<F>(mut self, precondition: F, message: impl Into<MessageTemplate>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.precondition = Some((Arc::new(precondition), message.into()));
        self
    }

    /// Returns the template describing the check.
    pub fn message(&self) -> &MessageTemplate {
        &self.message
    }

    /// Returns true if the rule carries a precondition.
    pub fn has_precondition(&self) -> bool {
        self.precondition.is_some()
    }
}

impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            message: self.message.clone(),
            precondition: self.precondition.clone(),
        }
    }
}

impl<T> fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("message", &self.message)
            .field("precondition", &self.precondition.as_ref().map(|(_, m)| m))
            .finish_non_exhaustive()
    }
}

// ============================================================================
// STEP NODE
// ============================================================================

/// A prerequisite of a check.
#[derive(Clone)]
pub(crate) struct Precondition {
    pub(crate) test: Thunk,
    pub(crate) message: MessageTemplate,
}

/// An atomic check bound to its captured values.
#[derive(Clone)]
pub(crate) struct Check {
    pub(crate) predicate: Thunk,
    pub(crate) precondition: Option<Precondition>,
    pub(crate) message: MessageTemplate,
    pub(crate) negated: bool,
}

impl Check {
    /// Parameters captured by the check and its precondition.
    pub(crate) fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.message.parameters().chain(
            self.precondition
                .iter()
                .flat_map(|precondition| precondition.message.parameters()),
        )
    }
}

pub(crate) enum StepKind {
    Check(Check),
    /// A self-contained chain, folded in as one boolean. `None` is an empty
    /// chain, which is vacuously valid.
    Group(Option<Arc<StepNode>>),
}

pub(crate) struct StepNode {
    pub(crate) predecessor: Option<Arc<StepNode>>,
    pub(crate) operator: Operator,
    pub(crate) kind: StepKind,
}

impl StepNode {
    /// Appends a new node after `predecessor`. The root always gets
    /// [`Operator::None`].
    pub(crate) fn append(
        predecessor: Option<Arc<StepNode>>,
        operator: Operator,
        kind: StepKind,
    ) -> Arc<StepNode> {
        let operator = if predecessor.is_some() {
            operator
        } else {
            Operator::None
        };
        Arc::new(Self {
            predecessor,
            operator,
            kind,
        })
    }

    /// Returns the steps from root to `tail`.
    pub(crate) fn materialize(tail: &Arc<StepNode>) -> Vec<&StepNode> {
        let mut steps = Vec::new();
        let mut cursor = Some(tail.as_ref());
        while let Some(step) = cursor {
            steps.push(step);
            cursor = step.predecessor.as_deref();
        }
        steps.reverse();
        steps
    }

    /// Number of steps from root to this node, not counting group contents.
    pub(crate) fn depth(&self) -> usize {
        let mut depth = 1;
        let mut cursor = self.predecessor.as_deref();
        while let Some(step) = cursor {
            depth += 1;
            cursor = step.predecessor.as_deref();
        }
        depth
    }
}

impl fmt::Debug for StepNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match &self.kind {
            StepKind::Check(check) if check.negated => "not check",
            StepKind::Check(_) => "check",
            StepKind::Group(_) => "group",
        };
        f.debug_struct("StepNode")
            .field("operator", &self.operator)
            .field("kind", &kind)
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

// Long chains would otherwise drop recursively through `predecessor`.
impl Drop for StepNode {
    fn drop(&mut self) {
        let mut next = self.predecessor.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.predecessor.take(),
                Err(_) => break,
            }
        }
    }
}
