//! Terminal nodes: literals and references.
//!
//! Leaves never go through the postfix encoder, their textual form is emitted
//! as is. Parameters are written `%i`, rationals `num/den`. Decimals are always
//! written in plain positional form with at least one fractional digit, never
//! in exponent form.
use bigdecimal::BigDecimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIs, EnumTryAs};

use crate::catalog::OperatorKind;

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumTryAs)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Leaf {
    /// Integer literal
    Long(i64),
    /// Rational literal `num/den`
    Rational { num: i64, den: i64 },
    /// Decimal literal
    Decimal(BigDecimal),
    /// Reference to a variable by its identifier
    Var(String),
    /// Reference to the i-th parameter of an abstract expression
    Par(usize),
    /// Symbolic value
    Symbol(String),
}

impl Leaf {
    /// Catalog kind of the leaf.
    pub fn kind(&self) -> OperatorKind {
        match self {
            Leaf::Long(_) => OperatorKind::Long,
            Leaf::Rational { .. } => OperatorKind::Rational,
            Leaf::Decimal(_) => OperatorKind::Decimal,
            Leaf::Var(_) => OperatorKind::Var,
            Leaf::Par(_) => OperatorKind::Par,
            Leaf::Symbol(_) => OperatorKind::Symbol,
        }
    }
}

impl std::fmt::Display for Leaf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Leaf::Long(value) => write!(f, "{value}"),
            Leaf::Rational { num, den } => write!(f, "{num}/{den}"),
            Leaf::Decimal(value) => {
                value.write_plain_string(f)?;
                if value.fractional_digit_count() <= 0 {
                    f.write_str(".0")?;
                }
                Ok(())
            }
            Leaf::Var(name) | Leaf::Symbol(name) => f.write_str(name),
            Leaf::Par(index) => write!(f, "%{index}"),
        }
    }
}

impl From<i64> for Leaf {
    fn from(value: i64) -> Self {
        Leaf::Long(value)
    }
}

impl From<BigDecimal> for Leaf {
    fn from(value: BigDecimal) -> Self {
        Leaf::Decimal(value)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn literal_formatting() {
        assert_eq!(Leaf::Long(-12).to_string(), "-12");
        assert_eq!(Leaf::Rational { num: 3, den: 4 }.to_string(), "3/4");
        assert_eq!(Leaf::Var("x[2]".into()).to_string(), "x[2]");
        assert_eq!(Leaf::Par(0).to_string(), "%0");
        assert_eq!(Leaf::Symbol("red".into()).to_string(), "red");
        let decimal = BigDecimal::from_str("1.5").unwrap();
        assert_eq!(Leaf::Decimal(decimal).to_string(), "1.5");
    }

    #[test]
    fn decimals_print_without_exponent() {
        let decimal = |s: &str| Leaf::Decimal(BigDecimal::from_str(s).unwrap()).to_string();
        assert_eq!(decimal("0.0000001"), "0.0000001");
        assert_eq!(decimal("-0.000000000000000000001"), "-0.000000000000000000001");
        assert_eq!(decimal("1E+3"), "1000.0");
        assert_eq!(decimal("12"), "12.0");
        assert_eq!(decimal("2.50"), "2.50");
    }

    #[test]
    fn kinds_are_terminal() {
        let leaves = [
            Leaf::Long(1),
            Leaf::Rational { num: 1, den: 2 },
            Leaf::Var("x".into()),
            Leaf::Par(3),
            Leaf::Symbol("a".into()),
        ];
        for leaf in leaves {
            assert!(leaf.kind().is_terminal());
        }
    }
}
