//! Postfix (reverse Polish) encoding of expression nodes.
//!
//! Each call produces the fragment of one node given the fragments of its
//! operands, so a tree is encoded bottom-up by feeding each node the output of
//! its children. Layout of a fragment:
//! - fixed use: `o1 .. ok name ` when the operand count equals the minimal arity;
//! - variadic use: `o1 .. on nname ` (`n` in decimal, glued to the name) otherwise;
//! - set constructor: `o1 .. on nset `, the count being always present (`0set ` for
//!   the empty set).
//!
//! A stack evaluator reading the stream pops the minimal arity of an operator
//! unless a count is glued to its name. Every fragment ends with a single space.
use log::trace;

use crate::{
    catalog::OperatorKind,
    utils::{Error, Result},
};

/// Checks that `count` operands are acceptable for `kind`.
pub fn check_arity(kind: OperatorKind, count: usize) -> Result<()> {
    let expected = kind.arity();
    if expected.contains(count) {
        Ok(())
    } else {
        Err(Error::Arity {
            kind,
            expected,
            actual: count,
        })
    }
}

/// Count glued in front of the operator name, if any.
///
/// The set constructor always carries its count. Other operators only carry it
/// when used with more operands than their minimal arity.
pub fn count_prefix(kind: OperatorKind, count: usize) -> Option<usize> {
    if kind == OperatorKind::Set || count != kind.arity_min() {
        Some(count)
    } else {
        None
    }
}

/// Encodes one node of kind `kind` whose operands are already encoded.
///
/// Operands are kept in order; trailing whitespace left by previous calls is
/// dropped so that operands are separated by exactly one space.
pub fn fragment<S: AsRef<str>>(kind: OperatorKind, operands: &[S]) -> Result<String> {
    check_arity(kind, operands.len())?;
    if kind.arity_min() == 0 && kind != OperatorKind::Set {
        return Err(Error::TerminalOperator { kind });
    }

    let mut out = String::new();
    for operand in operands {
        out.push_str(operand.as_ref().trim_end());
        out.push(' ');
    }
    if let Some(count) = count_prefix(kind, operands.len()) {
        out.push_str(&count.to_string());
    }
    out.push_str(kind.to_str());
    out.push(' ');

    trace!("Encoded `{kind}` with {} operands: {out:?}", operands.len());
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_arity_has_no_count() {
        assert_eq!(fragment(OperatorKind::Sub, &["x", "3"]).unwrap(), "x 3 sub ");
        assert_eq!(fragment(OperatorKind::Neg, &["x"]).unwrap(), "x neg ");
        assert_eq!(
            fragment(OperatorKind::If, &["c", "1", "2"]).unwrap(),
            "c 1 2 if "
        );
    }

    #[test]
    fn variadic_use_carries_count() {
        assert_eq!(fragment(OperatorKind::Add, &["x", "3"]).unwrap(), "x 3 add ");
        assert_eq!(
            fragment(OperatorKind::Add, &["x", "y", "z"]).unwrap(),
            "x y z 3add "
        );
    }

    #[test]
    fn set_always_carries_count() {
        let empty: [&str; 0] = [];
        assert_eq!(fragment(OperatorKind::Set, &empty).unwrap(), "0set ");
        assert_eq!(fragment(OperatorKind::Set, &["1"]).unwrap(), "1 1set ");
        assert_eq!(fragment(OperatorKind::Set, &["1", "2"]).unwrap(), "1 2 2set ");
    }

    #[test]
    fn nested_fragments_keep_single_spaces() {
        let inner = fragment(OperatorKind::Mul, &["y", "2"]).unwrap();
        let outer = fragment(OperatorKind::Add, &["x", inner.as_str()]).unwrap();
        assert_eq!(outer, "x y 2 mul add ");
    }

    #[test]
    fn bad_arity_is_rejected() {
        let err = fragment(OperatorKind::Add, &["x"]).unwrap_err();
        assert_eq!(
            err,
            Error::Arity {
                kind: OperatorKind::Add,
                expected: OperatorKind::Add.arity(),
                actual: 1
            }
        );
        assert!(fragment(OperatorKind::Sub, &["a", "b", "c"]).unwrap_err().is_arity());
    }

    #[test]
    fn terminal_kinds_are_not_encoded() {
        let empty: [&str; 0] = [];
        assert!(
            fragment(OperatorKind::Long, &empty)
                .unwrap_err()
                .is_terminal_operator()
        );
        assert!(fragment(OperatorKind::Var, &["x"]).unwrap_err().is_arity());
    }
}
