use std::ops::Range;

use strum::{EnumIs, EnumTryAs};
use thiserror::Error;

use crate::catalog::{Arity, OperatorKind};

/// A single diagnostic produced while reading the functional notation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseError {
    /// Human readable description of what went wrong.
    pub message: String,
    /// Byte range of the offending input.
    pub span: Range<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}..{}", self.message, self.span.start, self.span.end)
    }
}

fn operand_range(arity: &Arity) -> String {
    match arity.max {
        Some(max) if max == arity.min => format!("exactly {max}"),
        Some(max) => format!("between {} and {max}", arity.min),
        None => format!("at least {}", arity.min),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumTryAs, Error)]
pub enum Error {
    /// An operator was applied to a number of operands outside of its arity range.
    #[error(
        "Operator `{kind}` expects {} operands, but {actual} were provided. The expression tree is malformed.",
        operand_range(.expected)
    )]
    Arity {
        kind: OperatorKind,
        expected: Arity,
        actual: usize,
    },

    /// Terminal kinds (literals, references) never go through the postfix encoder.
    #[error(
        "Operator `{kind}` is a terminal kind. Only the `set` constructor may be encoded without operands; literals and references are emitted as their own text."
    )]
    TerminalOperator { kind: OperatorKind },

    /// The text does not name any operator of the catalog.
    #[error("Unknown operator `{name}`. No operator of the catalog matches this name.")]
    UnknownOperator { name: String },

    /// The functional notation could not be read.
    #[error("Failed to parse expression: {}", errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; "))]
    Parse { errors: Vec<ParseError> },
}

pub type Result<T> = std::result::Result<T, Error>;
