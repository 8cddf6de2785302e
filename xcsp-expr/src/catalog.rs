//! Operator catalog
//!
//! The closed set of node kinds that can appear in an intensional expression,
//! together with their arity ranges and canonical names. Names are exposed in
//! lower case in the interchange format while the internal identifiers are
//! upper case; lookups by name are therefore case-insensitive.
use std::collections::HashMap;

use log::debug;
use once_cell::sync::Lazy;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::utils::{Error, Result};

/// Range of accepted operand counts for an operator.
///
/// `max == None` stands for an unbounded range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Arity {
    pub min: usize,
    pub max: Option<usize>,
}

impl Arity {
    /// Arity of an operator accepting exactly `k` operands.
    #[inline]
    pub const fn exactly(k: usize) -> Self {
        Self {
            min: k,
            max: Some(k),
        }
    }

    /// Arity of an operator accepting `k` operands or more.
    #[inline]
    pub const fn at_least(k: usize) -> Self {
        Self { min: k, max: None }
    }

    /// Returns `true` if `count` operands are acceptable.
    #[inline]
    pub const fn contains(&self, count: usize) -> bool {
        match self.max {
            Some(max) => self.min <= count && count <= max,
            None => self.min <= count,
        }
    }

    #[inline]
    pub const fn is_fixed(&self) -> bool {
        matches!(self.max, Some(max) if max == self.min)
    }

    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => write!(f, "{}..{}", self.min, max),
            None => write!(f, "{}..∞", self.min),
        }
    }
}

/// Kinds of nodes found in the syntactic tree of an intensional expression.
///
/// The variant order follows the interchange format documentation: arithmetic,
/// relational, set construction and membership, logical, set operations, real
/// valued functions and finally the terminal kinds (literals and references).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount, IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[strum(serialize_all = "UPPERCASE")]
pub enum OperatorKind {
    Neg,
    Abs,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Sqr,
    Pow,
    Min,
    Max,
    Dist,
    Lt,
    Le,
    Ge,
    Gt,
    Ne,
    Eq,
    Set,
    In,
    Not,
    And,
    Or,
    Xor,
    Iff,
    Imp,
    If,
    Card,
    Union,
    Inter,
    Diff,
    Sdiff,
    Hull,
    Djoint,
    Subset,
    Subseq,
    Supset,
    Supseq,
    Convex,
    Fdiv,
    Fmod,
    Sqrt,
    Nroot,
    Exp,
    Ln,
    Log,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Long,
    Rational,
    Decimal,
    Var,
    Par,
    Symbol,
}

// Upper-case identifier to kind. Built on first use, read-only afterwards.
static BY_IDENTIFIER: Lazy<HashMap<&'static str, OperatorKind>> = Lazy::new(|| {
    let table: HashMap<_, _> = OperatorKind::iter()
        .map(|kind| (kind.identifier(), kind))
        .collect();
    debug!("Operator catalog initialized with {} kinds", table.len());
    table
});

impl OperatorKind {
    /// Returns the arity range of the operator.
    pub const fn arity(&self) -> Arity {
        use OperatorKind as K;
        match self {
            K::Neg | K::Abs | K::Sqr | K::Not | K::Card | K::Hull | K::Convex => Arity::exactly(1),
            K::Sqrt | K::Exp | K::Ln => Arity::exactly(1),
            K::Sin | K::Cos | K::Tan | K::Asin | K::Acos | K::Atan => Arity::exactly(1),
            K::Sinh | K::Cosh | K::Tanh => Arity::exactly(1),

            K::Sub | K::Div | K::Mod | K::Pow | K::Dist => Arity::exactly(2),
            K::Lt | K::Le | K::Ge | K::Gt | K::Ne | K::In | K::Imp => Arity::exactly(2),
            K::Diff | K::Djoint | K::Subset | K::Subseq | K::Supset | K::Supseq => {
                Arity::exactly(2)
            }
            K::Fdiv | K::Fmod | K::Nroot | K::Log => Arity::exactly(2),

            K::If => Arity::exactly(3),

            K::Add | K::Mul | K::Min | K::Max | K::Eq => Arity::at_least(2),
            K::And | K::Or | K::Xor | K::Iff => Arity::at_least(2),
            K::Union | K::Inter | K::Sdiff => Arity::at_least(2),

            K::Set => Arity::at_least(0),

            K::Long | K::Rational | K::Decimal | K::Var | K::Par | K::Symbol => Arity::exactly(0),
        }
    }

    /// Minimal number of operands.
    #[inline]
    pub const fn arity_min(&self) -> usize {
        self.arity().min
    }

    /// Maximal number of operands, `None` when unbounded.
    #[inline]
    pub const fn arity_max(&self) -> Option<usize> {
        self.arity().max
    }

    /// Returns `true` for the kinds that never take operands (literals and references).
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        matches!(self.arity().max, Some(0))
    }

    /// Internal (upper-case) identifier of the kind.
    #[inline]
    pub fn identifier(&self) -> &'static str {
        self.into()
    }

    /// Returns the canonical (lower-case) name used in the interchange format.
    pub const fn to_str(&self) -> &'static str {
        use OperatorKind as K;
        match self {
            K::Neg => "neg",
            K::Abs => "abs",
            K::Add => "add",
            K::Sub => "sub",
            K::Mul => "mul",
            K::Div => "div",
            K::Mod => "mod",
            K::Sqr => "sqr",
            K::Pow => "pow",
            K::Min => "min",
            K::Max => "max",
            K::Dist => "dist",
            K::Lt => "lt",
            K::Le => "le",
            K::Ge => "ge",
            K::Gt => "gt",
            K::Ne => "ne",
            K::Eq => "eq",
            K::Set => "set",
            K::In => "in",
            K::Not => "not",
            K::And => "and",
            K::Or => "or",
            K::Xor => "xor",
            K::Iff => "iff",
            K::Imp => "imp",
            K::If => "if",
            K::Card => "card",
            K::Union => "union",
            K::Inter => "inter",
            K::Diff => "diff",
            K::Sdiff => "sdiff",
            K::Hull => "hull",
            K::Djoint => "djoint",
            K::Subset => "subset",
            K::Subseq => "subseq",
            K::Supset => "supset",
            K::Supseq => "supseq",
            K::Convex => "convex",
            K::Fdiv => "fdiv",
            K::Fmod => "fmod",
            K::Sqrt => "sqrt",
            K::Nroot => "nroot",
            K::Exp => "exp",
            K::Ln => "ln",
            K::Log => "log",
            K::Sin => "sin",
            K::Cos => "cos",
            K::Tan => "tan",
            K::Asin => "asin",
            K::Acos => "acos",
            K::Atan => "atan",
            K::Sinh => "sinh",
            K::Cosh => "cosh",
            K::Tanh => "tanh",
            K::Long => "long",
            K::Rational => "rational",
            K::Decimal => "decimal",
            K::Var => "var",
            K::Par => "par",
            K::Symbol => "symbol",
        }
    }

    /// Looks up a kind by name, ignoring case.
    pub fn from_str(s: &str) -> Option<Self> {
        BY_IDENTIFIER.get(s.to_ascii_uppercase().as_str()).copied()
    }

    /// Same as [`OperatorKind::from_str`], but reports the offending text on failure.
    pub fn resolve(s: &str) -> Result<Self> {
        Self::from_str(s).ok_or_else(|| Error::UnknownOperator {
            name: s.to_string(),
        })
    }
}

impl std::fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_closed_and_consistent() {
        assert_eq!(OperatorKind::COUNT, 61);
        for kind in OperatorKind::iter() {
            let arity = kind.arity();
            if let Some(max) = arity.max {
                assert!(arity.min <= max, "{kind} has an empty arity range");
            }
            assert_eq!(kind.identifier().to_ascii_lowercase(), kind.to_str());
        }
    }

    #[test]
    fn only_set_accepts_zero_operands_among_operators() {
        let zero_min: Vec<_> = OperatorKind::iter()
            .filter(|k| k.arity_min() == 0 && !k.is_terminal())
            .collect();
        assert_eq!(zero_min, vec![OperatorKind::Set]);
    }

    #[test]
    fn arity_display() {
        assert_eq!(OperatorKind::Sub.arity().to_string(), "2..2");
        assert_eq!(OperatorKind::Add.arity().to_string(), "2..∞");
        assert_eq!(OperatorKind::Set.arity().to_string(), "0..∞");
    }
}
