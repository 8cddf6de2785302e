//! Expression trees and their bottom-up encoding.
//!
//! Trees are walked iteratively with an explicit stack, so deep expressions
//! (long chains of binary operators, typically) do not grow the call stack.
//! Each node consults the catalog through [`postfix::fragment`] and the
//! resulting fragment is handed to its parent.
use log::debug;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use strum::{EnumIs, EnumTryAs};

use crate::{
    catalog::OperatorKind,
    leaf::Leaf,
    postfix::{self, check_arity},
    utils::Result,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    Leaf(Leaf),
    Node {
        kind: OperatorKind,
        operands: Vec<Expr>,
    },
}

enum Step<'a> {
    Enter(&'a Expr),
    Exit(OperatorKind, usize),
}

impl Expr {
    /// Applies `kind` to `operands`. Arity is checked when the tree is encoded.
    pub fn apply(kind: OperatorKind, operands: impl IntoIterator<Item = Expr>) -> Self {
        Expr::Node {
            kind,
            operands: operands.into_iter().collect(),
        }
    }

    pub fn long(value: i64) -> Self {
        Expr::Leaf(Leaf::Long(value))
    }

    pub fn var(name: impl Into<String>) -> Self {
        Expr::Leaf(Leaf::Var(name.into()))
    }

    pub fn par(index: usize) -> Self {
        Expr::Leaf(Leaf::Par(index))
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Expr::Leaf(Leaf::Symbol(name.into()))
    }

    /// Set constructor; an empty iterator gives the empty set.
    pub fn set(elements: impl IntoIterator<Item = Expr>) -> Self {
        Self::apply(OperatorKind::Set, elements)
    }

    /// Kind of the root node.
    pub fn kind(&self) -> OperatorKind {
        match self {
            Expr::Leaf(leaf) => leaf.kind(),
            Expr::Node { kind, .. } => *kind,
        }
    }

    /// Operands of the root node (empty for leaves).
    pub fn operands(&self) -> &[Expr] {
        match self {
            Expr::Leaf(_) => &[],
            Expr::Node { operands, .. } => operands,
        }
    }

    /// Number of nodes of the tree.
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack: SmallVec<&Expr, 32> = SmallVec::new();
        stack.push(self);
        while let Some(expr) = stack.pop() {
            count += 1;
            stack.extend(expr.operands().iter());
        }
        count
    }

    /// Checks the arity of every node, stopping at the first failure.
    pub fn check_arity(&self) -> Result<()> {
        let mut stack: SmallVec<&Expr, 32> = SmallVec::new();
        stack.push(self);
        while let Some(expr) = stack.pop() {
            if let Expr::Node { kind, operands } = expr {
                check_arity(*kind, operands.len())?;
                stack.extend(operands.iter());
            }
        }
        Ok(())
    }

    /// Encodes the tree as a postfix token stream.
    ///
    /// The stream ends with a single space, like every fragment, so streams
    /// can be concatenated. Nothing is returned if any node is malformed.
    pub fn to_postfix(&self) -> Result<String> {
        let mut steps: SmallVec<Step<'_>, 32> = SmallVec::new();
        let mut encoded: Vec<String> = Vec::new();
        steps.push(Step::Enter(self));

        while let Some(step) = steps.pop() {
            match step {
                Step::Enter(Expr::Leaf(leaf)) => encoded.push(leaf.to_string()),
                Step::Enter(Expr::Node { kind, operands }) => {
                    check_arity(*kind, operands.len())?;
                    steps.push(Step::Exit(*kind, operands.len()));
                    steps.extend(operands.iter().rev().map(Step::Enter));
                }
                Step::Exit(kind, count) => {
                    let at = encoded.len() - count;
                    let fragment = postfix::fragment(kind, &encoded[at..])?;
                    encoded.truncate(at);
                    encoded.push(fragment);
                }
            }
        }

        let mut out = encoded.pop().unwrap_or_default();
        if self.is_leaf() {
            out.push(' ');
        }
        debug!("Encoded expression of {} nodes into {} bytes", self.size(), out.len());
        Ok(out)
    }
}

impl From<Leaf> for Expr {
    fn from(value: Leaf) -> Self {
        Expr::Leaf(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::long(value)
    }
}

/// Functional notation: `add(x,mul(y,3))`, `set()` for the empty set.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Leaf(Leaf::Symbol(name)) => write!(f, "'{name}'"),
            Expr::Leaf(leaf) => write!(f, "{leaf}"),
            Expr::Node { kind, operands } => {
                write!(f, "{kind}(")?;
                for (i, operand) in operands.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{operand}")?;
                }
                f.write_str(")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Error;

    fn x() -> Expr {
        Expr::var("x")
    }

    #[test]
    fn encodes_nested_tree() {
        let e = Expr::apply(
            OperatorKind::Eq,
            [
                Expr::apply(OperatorKind::Add, [x(), Expr::var("y"), Expr::long(1)]),
                Expr::apply(OperatorKind::Mul, [Expr::var("z"), Expr::long(2)]),
            ],
        );
        assert_eq!(e.to_postfix().unwrap(), "x y 1 3add z 2 mul eq ");
        assert_eq!(e.to_string(), "eq(add(x,y,1),mul(z,2))");
        assert_eq!(e.size(), 8);
    }

    #[test]
    fn leaf_root_is_emitted_as_is() {
        assert_eq!(Expr::par(2).to_postfix().unwrap(), "%2 ");
    }

    #[test]
    fn sets_and_membership() {
        let e = Expr::apply(
            OperatorKind::In,
            [x(), Expr::set([Expr::long(1), Expr::long(2), Expr::long(3)])],
        );
        assert_eq!(e.to_postfix().unwrap(), "x 1 2 3 3set in ");
        let empty = Expr::apply(OperatorKind::Card, [Expr::set([])]);
        assert_eq!(empty.to_postfix().unwrap(), "0set card ");
        assert_eq!(empty.to_string(), "card(set())");
    }

    #[test]
    fn malformed_subtree_aborts_encoding() {
        let e = Expr::apply(
            OperatorKind::And,
            [
                Expr::apply(OperatorKind::Lt, [x(), Expr::long(1)]),
                Expr::apply(OperatorKind::Not, [x(), x()]),
            ],
        );
        let expected = Error::Arity {
            kind: OperatorKind::Not,
            expected: OperatorKind::Not.arity(),
            actual: 2,
        };
        assert_eq!(e.to_postfix(), Err(expected.clone()));
        assert_eq!(e.check_arity(), Err(expected));
    }

    #[test]
    fn deep_chains_do_not_recurse() {
        let mut e = x();
        for i in 0..2_000 {
            e = Expr::apply(OperatorKind::Sub, [e, Expr::long(i)]);
        }
        let postfix = e.to_postfix().unwrap();
        assert!(postfix.starts_with("x 0 sub 1 sub "));
        assert!(postfix.ends_with("1999 sub "));
    }
}
