//! Operator catalog and postfix encoder for intensional expressions.
//!
//! The crate models the node kinds of the expression syntax trees found in
//! constraint problems ([`catalog::OperatorKind`]) and turns trees into the
//! canonical postfix token stream of the interchange format ([`postfix`],
//! [`tree::Expr::to_postfix`]). The remaining modules hold the declarative
//! vocabulary of the format (constraint kinds, attributes, condition
//! operators, classes).
//!
//! ```
//! use xcsp_expr::{catalog::OperatorKind, tree::Expr};
//!
//! let e = Expr::apply(
//!     OperatorKind::Add,
//!     [Expr::var("x"), Expr::var("y"), Expr::long(3)],
//! );
//! assert_eq!(e.to_postfix().unwrap(), "x y 3 3add ");
//! ```

pub mod catalog;
pub mod class;
pub mod classify;
pub mod condition;
pub mod leaf;
#[cfg(feature = "chumsky")]
pub mod parser;
pub mod postfix;
pub mod tree;
pub mod utils;
pub mod vocab;

pub use utils::{Error, Result};
