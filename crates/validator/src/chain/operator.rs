//! Operator combinator - truth tables for joining check outcomes
//!
//! Chains are folded strictly left to right. There is no precedence: a chain
//! `a OR b AND c` evaluates as `(a OR b) AND c`. Grouping is expressed by
//! embedding a sub-chain, which folds in as a single boolean.

use std::fmt;

/// Operator joining a step to everything before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operator {
    /// The first step of a chain: seeds the fold with its own outcome.
    #[default]
    None,
    /// Both must hold.
    And,
    /// At least one must hold.
    Or,
    /// Exactly one must hold.
    Xor,
    /// Not both may hold.
    Nand,
    /// Neither may hold.
    Nor,
}

impl Operator {
    /// Every binary operator, in declaration order.
    pub const BINARY: [Operator; 5] = [Self::And, Self::Or, Self::Xor, Self::Nand, Self::Nor];

    /// Folds `current` into the `prior` result.
    ///
    /// [`Operator::None`] ignores `prior`.
    #[must_use]
    pub const fn apply(self, prior: bool, current: bool) -> bool {
        match self {
            Self::None => current,
            Self::And => prior && current,
            Self::Or => prior || current,
            Self::Xor => prior != current,
            Self::Nand => !(prior && current),
            Self::Nor => !(prior || current),
        }
    }

    /// Returns true for the five binary operators.
    pub const fn is_binary(self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns the English keyword.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
        }
    }

    /// Returns the catalog key of the keyword.
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::None => "operator.none",
            Self::And => "operator.and",
            Self::Or => "operator.or",
            Self::Xor => "operator.xor",
            Self::Nand => "operator.nand",
            Self::Nor => "operator.nor",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unary NOT, applied to one step's own outcome before it is folded.
#[inline]
#[must_use]
pub const fn negate(raw: bool, negated: bool) -> bool {
    raw != negated
}
