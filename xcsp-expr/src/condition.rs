//! Operators used in conditions and in `<operator>` elements.
//!
//! The relational ones can be checked directly against integer values; the
//! set-based ones (`in`, `notin`, `subset`, ...) need a range or a set and are
//! rejected by the scalar checks.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::catalog::OperatorKind;

/// Operators that can be used in conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "UPPERCASE")
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TypeConditionOperator {
    Lt,
    Le,
    Ge,
    Gt,
    Ne,
    Eq,
    In,
    Notin,
}

impl TypeConditionOperator {
    /// Returns `true` if the operator is a set operator (`in`, `notin`).
    pub fn is_set(&self) -> bool {
        matches!(self, Self::In | Self::Notin)
    }

    /// Checks `v1 <op> v2`. Returns `None` for set operators.
    pub fn is_valid_for(&self, v1: i64, v2: i64) -> Option<bool> {
        let rel = TypeConditionOperatorRel::try_from(*self).ok()?;
        Some(rel.is_valid_for(v1, v2))
    }

    /// Checks whether `v` lies in (`in`) or out of (`notin`) the range `min..=max`.
    ///
    /// Returns `None` for relational operators.
    pub fn is_valid_for_range(&self, v: i64, min: i64, max: i64) -> Option<bool> {
        match self {
            Self::In => Some(min <= v && v <= max),
            Self::Notin => Some(v < min || v > max),
            _ => None,
        }
    }
}

/// Classical relational operators that can be used in conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "UPPERCASE")
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TypeConditionOperatorRel {
    Lt,
    Le,
    Ge,
    Gt,
    Ne,
    Eq,
}

impl TypeConditionOperatorRel {
    /// Operator to use once the two sides of the comparison are swapped.
    pub fn reverse_for_swap(&self) -> Self {
        match self {
            Self::Lt => Self::Gt,
            Self::Le => Self::Ge,
            Self::Ge => Self::Le,
            Self::Gt => Self::Lt,
            Self::Ne | Self::Eq => *self,
        }
    }

    pub fn is_valid_for(&self, v1: i64, v2: i64) -> bool {
        match self {
            Self::Lt => v1 < v2,
            Self::Le => v1 <= v2,
            Self::Ge => v1 >= v2,
            Self::Gt => v1 > v2,
            Self::Ne => v1 != v2,
            Self::Eq => v1 == v2,
        }
    }

    /// Catalog kind of the same comparison, used when a condition is turned
    /// into an intensional expression.
    pub fn operator_kind(&self) -> OperatorKind {
        match self {
            Self::Lt => OperatorKind::Lt,
            Self::Le => OperatorKind::Le,
            Self::Ge => OperatorKind::Ge,
            Self::Gt => OperatorKind::Gt,
            Self::Ne => OperatorKind::Ne,
            Self::Eq => OperatorKind::Eq,
        }
    }
}

impl From<TypeConditionOperatorRel> for TypeConditionOperator {
    fn from(value: TypeConditionOperatorRel) -> Self {
        match value {
            TypeConditionOperatorRel::Lt => Self::Lt,
            TypeConditionOperatorRel::Le => Self::Le,
            TypeConditionOperatorRel::Ge => Self::Ge,
            TypeConditionOperatorRel::Gt => Self::Gt,
            TypeConditionOperatorRel::Ne => Self::Ne,
            TypeConditionOperatorRel::Eq => Self::Eq,
        }
    }
}

impl TryFrom<TypeConditionOperator> for TypeConditionOperatorRel {
    type Error = TypeConditionOperatorSet;

    fn try_from(value: TypeConditionOperator) -> Result<Self, Self::Error> {
        match value {
            TypeConditionOperator::Lt => Ok(Self::Lt),
            TypeConditionOperator::Le => Ok(Self::Le),
            TypeConditionOperator::Ge => Ok(Self::Ge),
            TypeConditionOperator::Gt => Ok(Self::Gt),
            TypeConditionOperator::Ne => Ok(Self::Ne),
            TypeConditionOperator::Eq => Ok(Self::Eq),
            TypeConditionOperator::In => Err(TypeConditionOperatorSet::In),
            TypeConditionOperator::Notin => Err(TypeConditionOperatorSet::Notin),
        }
    }
}

/// Set operators that can be used in conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "UPPERCASE")
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TypeConditionOperatorSet {
    In,
    Notin,
}

impl From<TypeConditionOperatorSet> for TypeConditionOperator {
    fn from(value: TypeConditionOperatorSet) -> Self {
        match value {
            TypeConditionOperatorSet::In => Self::In,
            TypeConditionOperatorSet::Notin => Self::Notin,
        }
    }
}

/// Operators that can be used in elements `<operator>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "UPPERCASE")
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TypeOperator {
    Lt,
    Le,
    Ge,
    Gt,
    Subset,
    Subseq,
    Supseq,
    Supset,
}

impl TypeOperator {
    /// Parses the operator, ignoring surrounding whitespace and case.
    pub fn val_of(s: &str) -> Option<Self> {
        s.trim().to_ascii_uppercase().parse().ok()
    }

    /// Returns `true` if the operator compares sets.
    pub fn is_set(&self) -> bool {
        matches!(
            self,
            Self::Subset | Self::Subseq | Self::Supseq | Self::Supset
        )
    }

    /// Checks `v1 <op> v2`. Returns `None` for set operators.
    pub fn is_valid_for(&self, v1: i64, v2: i64) -> Option<bool> {
        match self {
            Self::Lt => Some(v1 < v2),
            Self::Le => Some(v1 <= v2),
            Self::Ge => Some(v1 >= v2),
            Self::Gt => Some(v1 > v2),
            _ => None,
        }
    }

    pub fn operator_kind(&self) -> OperatorKind {
        match self {
            Self::Lt => OperatorKind::Lt,
            Self::Le => OperatorKind::Le,
            Self::Ge => OperatorKind::Ge,
            Self::Gt => OperatorKind::Gt,
            Self::Subset => OperatorKind::Subset,
            Self::Subseq => OperatorKind::Subseq,
            Self::Supseq => OperatorKind::Supseq,
            Self::Supset => OperatorKind::Supset,
        }
    }
}

/// Arithmetic operators that can be used in elements `<operator>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "UPPERCASE")
)]
#[strum(serialize_all = "UPPERCASE")]
pub enum TypeArithmeticOperator {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Dist,
}

impl TypeArithmeticOperator {
    pub fn operator_kind(&self) -> OperatorKind {
        match self {
            Self::Add => OperatorKind::Add,
            Self::Sub => OperatorKind::Sub,
            Self::Mul => OperatorKind::Mul,
            Self::Div => OperatorKind::Div,
            Self::Mod => OperatorKind::Mod,
            Self::Dist => OperatorKind::Dist,
        }
    }
}
