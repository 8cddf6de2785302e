//! Classification of catalog and vocabulary entries.
//!
//! Predicates are free functions keyed by variant identity so that adding a new
//! cross-cutting classification never touches the variant definitions.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::EnumIter;

use crate::{
    catalog::OperatorKind,
    vocab::{TypeAtt, TypeCtr},
};

/// Shape of the operand list accepted by an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArityClass {
    /// Literals and references, never any operand.
    Terminal,
    Unary,
    Binary,
    Ternary,
    /// At least two operands, no upper bound.
    Nary,
    /// Any number of operands, including none.
    SetConstructor,
}

/// Broad family an operator belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OperatorFamily {
    Arithmetic,
    Relational,
    Logical,
    Set,
    /// Functions over real numbers (trigonometry, logarithms, roots, ...).
    Real,
    Terminal,
}

/// Sort of the value an expression evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ValueSort {
    Integer,
    Real,
    Boolean,
    Set,
    Symbolic,
}

pub fn arity_class(kind: OperatorKind) -> ArityClass {
    let arity = kind.arity();
    match (arity.min, arity.max) {
        (0, Some(0)) => ArityClass::Terminal,
        (0, None) => ArityClass::SetConstructor,
        (_, None) => ArityClass::Nary,
        (_, Some(1)) => ArityClass::Unary,
        (_, Some(2)) => ArityClass::Binary,
        (_, Some(_)) => ArityClass::Ternary,
    }
}

pub fn family_of(kind: OperatorKind) -> OperatorFamily {
    use OperatorKind as K;
    match kind {
        K::Neg | K::Abs | K::Add | K::Sub | K::Mul | K::Div | K::Mod | K::Sqr | K::Pow => {
            OperatorFamily::Arithmetic
        }
        K::Min | K::Max | K::Dist => OperatorFamily::Arithmetic,
        K::Lt | K::Le | K::Ge | K::Gt | K::Ne | K::Eq | K::In => OperatorFamily::Relational,
        K::Not | K::And | K::Or | K::Xor | K::Iff | K::Imp | K::If => OperatorFamily::Logical,
        K::Set | K::Card | K::Union | K::Inter | K::Diff | K::Sdiff | K::Hull => {
            OperatorFamily::Set
        }
        K::Djoint | K::Subset | K::Subseq | K::Supset | K::Supseq | K::Convex => {
            OperatorFamily::Set
        }
        K::Fdiv | K::Fmod | K::Sqrt | K::Nroot | K::Exp | K::Ln | K::Log => OperatorFamily::Real,
        K::Sin | K::Cos | K::Tan | K::Asin | K::Acos | K::Atan | K::Sinh | K::Cosh | K::Tanh => {
            OperatorFamily::Real
        }
        K::Long | K::Rational | K::Decimal | K::Var | K::Par | K::Symbol => {
            OperatorFamily::Terminal
        }
    }
}

/// Sort of the value produced by a node of the given kind.
///
/// Returns `None` for variable and parameter references, whose sort is the one
/// of the entity they refer to. `if` is reported as an integer since its
/// branches are integer-valued in the interchange format.
pub fn result_sort(kind: OperatorKind) -> Option<ValueSort> {
    use OperatorKind as K;
    let sort = match kind {
        K::Var | K::Par => return None,
        K::Long | K::Card | K::If => ValueSort::Integer,
        K::Rational | K::Decimal => ValueSort::Real,
        K::Symbol => ValueSort::Symbolic,
        K::Set | K::Union | K::Inter | K::Diff | K::Sdiff | K::Hull => ValueSort::Set,
        K::Djoint | K::Subset | K::Subseq | K::Supset | K::Supseq | K::Convex => {
            ValueSort::Boolean
        }
        K::Neg | K::Abs | K::Add | K::Sub | K::Mul | K::Div | K::Mod | K::Sqr | K::Pow => {
            ValueSort::Integer
        }
        K::Min | K::Max | K::Dist => ValueSort::Integer,
        K::Lt | K::Le | K::Ge | K::Gt | K::Ne | K::Eq | K::In => ValueSort::Boolean,
        K::Not | K::And | K::Or | K::Xor | K::Iff | K::Imp => ValueSort::Boolean,
        K::Fdiv | K::Fmod | K::Sqrt | K::Nroot | K::Exp | K::Ln | K::Log => ValueSort::Real,
        K::Sin | K::Cos | K::Tan | K::Asin | K::Acos | K::Atan | K::Sinh | K::Cosh | K::Tanh => {
            ValueSort::Real
        }
    };
    Some(sort)
}

/// Returns `true` if the order of the operands does not matter.
pub fn is_commutative(kind: OperatorKind) -> bool {
    use OperatorKind as K;
    matches!(
        kind,
        K::Add
            | K::Mul
            | K::Min
            | K::Max
            | K::Dist
            | K::Ne
            | K::Eq
            | K::And
            | K::Or
            | K::Xor
            | K::Iff
            | K::Union
            | K::Inter
            | K::Sdiff
            | K::Djoint
    )
}

/// Returns `true` if the constraint has a sliding nature.
pub fn is_sliding(ctr: TypeCtr) -> bool {
    matches!(ctr, TypeCtr::Slide | TypeCtr::Seqbin)
}

/// Returns `true` if the constraint has an if-based control structure.
pub fn is_control(ctr: TypeCtr) -> bool {
    matches!(ctr, TypeCtr::IfThen | TypeCtr::IfThenElse)
}

/// Returns `true` if the constraint has a logical nature.
pub fn is_logical(ctr: TypeCtr) -> bool {
    matches!(ctr, TypeCtr::And | TypeCtr::Or | TypeCtr::Not | TypeCtr::Iff)
}

/// Returns `true` if the element is a meta-constraint.
pub fn is_meta(ctr: TypeCtr) -> bool {
    is_sliding(ctr) || is_logical(ctr) || is_control(ctr)
}

/// Returns `true` if the attribute has a (full or half) reification nature.
pub fn is_reifying(att: TypeAtt) -> bool {
    matches!(
        att,
        TypeAtt::ReifiedBy | TypeAtt::HreifiedFrom | TypeAtt::HreifiedTo
    )
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn arity_classes_follow_catalog() {
        assert_eq!(arity_class(OperatorKind::Neg), ArityClass::Unary);
        assert_eq!(arity_class(OperatorKind::Sub), ArityClass::Binary);
        assert_eq!(arity_class(OperatorKind::If), ArityClass::Ternary);
        assert_eq!(arity_class(OperatorKind::Add), ArityClass::Nary);
        assert_eq!(arity_class(OperatorKind::Set), ArityClass::SetConstructor);
        assert_eq!(arity_class(OperatorKind::Var), ArityClass::Terminal);
    }

    #[test]
    fn every_kind_has_a_sort_except_references() {
        for kind in OperatorKind::iter() {
            let sort = result_sort(kind);
            match kind {
                OperatorKind::Var | OperatorKind::Par => assert!(sort.is_none()),
                _ => assert!(sort.is_some(), "{kind} has no sort"),
            }
        }
        assert_eq!(result_sort(OperatorKind::Subset), Some(ValueSort::Boolean));
        assert_eq!(result_sort(OperatorKind::Union), Some(ValueSort::Set));
        assert_eq!(result_sort(OperatorKind::Sqrt), Some(ValueSort::Real));
    }

    #[test]
    fn sorts_agree_with_families() {
        for kind in OperatorKind::iter() {
            let expected = match family_of(kind) {
                OperatorFamily::Arithmetic => Some(ValueSort::Integer),
                OperatorFamily::Relational | OperatorFamily::Logical if kind != OperatorKind::If => {
                    Some(ValueSort::Boolean)
                }
                OperatorFamily::Real => Some(ValueSort::Real),
                _ => continue,
            };
            assert_eq!(result_sort(kind), expected, "{kind}");
        }
    }

    #[test]
    fn symmetric_set_operations_commute() {
        for kind in [OperatorKind::Union, OperatorKind::Inter, OperatorKind::Sdiff] {
            assert!(is_commutative(kind), "{kind}");
        }
        assert!(!is_commutative(OperatorKind::Diff));
    }

    #[test]
    fn terminal_family_matches_terminal_arity() {
        for kind in OperatorKind::iter() {
            assert_eq!(
                family_of(kind) == OperatorFamily::Terminal,
                arity_class(kind) == ArityClass::Terminal
            );
        }
    }

    #[test]
    fn meta_constraints() {
        let meta: Vec<_> = TypeCtr::iter().filter(|c| is_meta(*c)).collect();
        assert_eq!(meta.len(), 8);
        assert!(is_meta(TypeCtr::Seqbin));
        assert!(!is_meta(TypeCtr::AllDifferent));
        assert!(is_reifying(TypeAtt::HreifiedTo));
        assert!(!is_reifying(TypeAtt::Cost));
    }
}
