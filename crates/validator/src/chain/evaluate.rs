//! The evaluator: one left-to-right walk over a chain
//!
//! For each step in append order:
//!
//! 1. a group is evaluated recursively and contributes its validity;
//! 2. otherwise the step's precondition runs first. The first failing
//!    precondition aborts the whole walk, including any enclosing chain, and
//!    its template becomes the only message;
//! 3. the predicate runs and NOT is applied to its raw result;
//! 4. the outcome is folded into the running result with the step's operator.
//!
//! Check failures never abort the walk. Alongside the boolean, the fold keeps
//! the full formula and a failure description, both as unrendered
//! [`Message`] trees.

use std::sync::Arc;

use crate::chain::operator::{Operator, negate};
use crate::chain::step::{Check, StepKind, StepNode};
use crate::foundation::{FailureKind, Parameter, parameter::push_unique};
use crate::message::Message;

/// Outcome of walking one chain.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Evaluation {
    pub(crate) valid: bool,
    pub(crate) precondition_valid: bool,
    pub(crate) parameters: Vec<Parameter>,
    /// Every step, as the formula it expresses. `None` for an empty chain.
    pub(crate) formula: Option<Message>,
    /// Why the chain is invalid. `None` when valid.
    pub(crate) failure: Option<Message>,
    /// Number of atomic checks whose predicate ran.
    pub(crate) evaluated: usize,
}

impl Evaluation {
    fn empty() -> Self {
        Self {
            valid: true,
            precondition_valid: true,
            parameters: Vec::new(),
            formula: None,
            failure: None,
            evaluated: 0,
        }
    }

    pub(crate) fn failure_kind(&self) -> Option<FailureKind> {
        if !self.precondition_valid {
            Some(FailureKind::Precondition)
        } else if !self.valid {
            Some(FailureKind::Check)
        } else {
            None
        }
    }
}

/// One step's contribution to the fold.
struct Operand {
    passed: bool,
    formula: Message,
    failure: Option<Message>,
}

/// Running state of the fold.
struct Fold {
    valid: bool,
    formula: Message,
    failure: Option<Message>,
}

/// Evaluates the chain ending at `tail`.
pub(crate) fn combine(tail: Option<&Arc<StepNode>>) -> Evaluation {
    let mut evaluation = Evaluation::empty();
    if let Some(tail) = tail {
        walk(tail, &mut evaluation);
    }
    tracing::debug!(
        valid = evaluation.valid,
        precondition_valid = evaluation.precondition_valid,
        evaluated = evaluation.evaluated,
        "chain evaluated"
    );
    evaluation
}

/// Walks one level of the chain, recursing into groups. Returns `false` if a
/// precondition aborted the walk; `out` then already holds the failure.
fn walk(tail: &Arc<StepNode>, out: &mut Evaluation) -> bool {
    let mut fold: Option<Fold> = None;

    for step in StepNode::materialize(tail) {
        let operand = match &step.kind {
            StepKind::Check(check) => match run_check(check, out) {
                Some(operand) => operand,
                None => return false,
            },
            StepKind::Group(inner) => match run_group(inner.as_ref(), out) {
                Some(operand) => operand,
                None => return false,
            },
        };

        fold = Some(match fold {
            None => Fold {
                valid: operand.passed,
                formula: operand.formula,
                failure: operand.failure,
            },
            Some(prior) => fold_step(prior, step.operator, operand),
        });
    }

    if let Some(fold) = fold {
        out.valid = fold.valid;
        out.formula = Some(fold.formula);
        out.failure = fold.failure;
    }
    true
}

fn run_check(check: &Check, out: &mut Evaluation) -> Option<Operand> {
    for parameter in check.parameters() {
        push_unique(&mut out.parameters, parameter);
    }

    if let Some(precondition) = &check.precondition {
        if !(precondition.test)() {
            tracing::debug!("precondition failed, ignoring the remaining steps");
            out.valid = false;
            out.precondition_valid = false;
            out.formula = None;
            out.failure = Some(Message::fragment(precondition.message.clone(), false));
            return None;
        }
    }

    let raw = (check.predicate)();
    let passed = negate(raw, check.negated);
    out.evaluated += 1;
    tracing::trace!(raw, negated = check.negated, passed, "check evaluated");

    let fragment = Message::fragment(check.message.clone(), check.negated);
    Some(Operand {
        passed,
        failure: (!passed).then(|| fragment.clone()),
        formula: fragment,
    })
}

fn run_group(inner: Option<&Arc<StepNode>>, out: &mut Evaluation) -> Option<Operand> {
    let mut nested = Evaluation::empty();
    let completed = match inner {
        Some(inner) => walk(inner, &mut nested),
        None => true,
    };

    out.evaluated += nested.evaluated;
    for parameter in &nested.parameters {
        push_unique(&mut out.parameters, parameter);
    }

    if !completed {
        out.valid = false;
        out.precondition_valid = false;
        out.formula = None;
        out.failure = nested.failure;
        return None;
    }

    tracing::trace!(passed = nested.valid, "group evaluated");
    Some(Operand {
        passed: nested.valid,
        formula: Message::group(nested.formula),
        failure: nested.failure.map(|failure| Message::group(Some(failure))),
    })
}

fn fold_step(prior: Fold, operator: Operator, operand: Operand) -> Fold {
    let valid = operator.apply(prior.valid, operand.passed);
    let formula = Message::join(prior.formula, operator, operand.formula);

    let failure = if valid {
        None
    } else {
        Some(match operator {
            Operator::And => match (prior.failure, operand.failure) {
                (Some(left), Some(right)) => Message::join(left, operator, right),
                (Some(left), None) => left,
                (None, Some(right)) => right,
                // unreachable for a consistent fold, fall back to the formula
                (None, None) => formula.clone(),
            },
            Operator::Or => match (prior.failure, operand.failure) {
                (Some(left), Some(right)) => Message::join(left, operator, right),
                _ => formula.clone(),
            },
            // neither side alone explains these, show the whole formula
            Operator::Xor | Operator::Nand | Operator::Nor | Operator::None => formula.clone(),
        })
    };

    Fold {
        valid,
        formula,
        failure,
    }
}
