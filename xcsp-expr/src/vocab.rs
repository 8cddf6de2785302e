//! Declarative vocabulary of the interchange format.
//!
//! Frameworks, constraint kinds, child elements, attributes and the various
//! small enumerations attached to them. Every enumeration converts to and from
//! its exact textual spelling through `Display` / `FromStr`; keywords that
//! clash with the host language (`final`, `class`, `for`, `case`) are spelled
//! as in the format regardless of the Rust variant name.
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// Parses an upper-case vocabulary entry, uppercasing `name` first.
///
/// Returns `None` when nothing matches.
pub fn value_of<T: FromStr>(name: &str) -> Option<T> {
    name.to_ascii_uppercase().parse().ok()
}

/// Types of frameworks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeFramework {
    Csp,
    Maxcsp,
    Cop,
    Wcsp,
    Fcsp,
    Qcsp,
    QcspPlus,
    Qcop,
    QcopPlus,
    Scsp,
    Scop,
    Qstr,
    Tcsp,
    Ncsp,
    Ncop,
    #[strum(serialize = "DisCSP")]
    #[cfg_attr(feature = "serde", serde(rename = "DisCSP"))]
    DisCsp,
    #[strum(serialize = "DisWCSP")]
    #[cfg_attr(feature = "serde", serde(rename = "DisWCSP"))]
    DisWcsp,
}

/// Types of constraints and meta-constraints.
///
/// See [`crate::classify`] for the sliding / control / logical / meta predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[strum(serialize_all = "camelCase")]
pub enum TypeCtr {
    Extension,
    Intension,
    Regular,
    Grammar,
    Mdd,
    AllDifferent,
    AllEqual,
    AllDistant,
    Ordered,
    Lex,
    AllIncomparable,
    Sum,
    Count,
    NValues,
    Cardinality,
    Balance,
    Spread,
    Deviation,
    SumCosts,
    Stretch,
    NoOverlap,
    Cumulative,
    BinPacking,
    Knapsack,
    NetworkFlow,
    Circuit,
    NCircuits,
    Path,
    NPaths,
    Tree,
    NTrees,
    Arbo,
    NArbos,
    NCliques,
    Clause,
    Instantiation,
    AllIntersecting,
    Range,
    Roots,
    Partition,
    Minimum,
    Maximum,
    Element,
    Channel,
    Permutation,
    Precedence,
    And,
    Or,
    Not,
    Iff,
    IfThen,
    IfThenElse,
    Slide,
    Seqbin,
    /// Reserved for a future constraint.
    Smart,
}

/// Types of child elements of constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[strum(serialize_all = "camelCase")]
pub enum TypeChild {
    List,
    Set,
    Mset,
    Matrix,
    Function,
    Supports,
    Conflicts,
    Except,
    Value,
    Values,
    Total,
    Coeffs,
    Condition,
    Cost,
    Operator,
    Number,
    Transitions,
    Start,
    Final,
    Terminal,
    Rules,
    Index,
    Mapping,
    Occurs,
    RowOccurs,
    ColOccurs,
    Widths,
    Patterns,
    Origins,
    Lengths,
    Ends,
    Heights,
    Machines,
    Conditions,
    Sizes,
    Weights,
    Profits,
    Limit,
    Size,
    Root,
    Image,
    Graph,
    Row,
}

/// Types of attributes that may be encountered.
///
/// See [`crate::classify::is_reifying`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
#[strum(serialize_all = "camelCase")]
pub enum TypeAtt {
    Format,
    Type,
    Id,
    Class,
    Note,
    As,
    Size,
    ViolationMeasure,
    ViolationParameters,
    DefaultCost,
    ViolationCost,
    Cost,
    ReifiedBy,
    HreifiedFrom,
    HreifiedTo,
    Closed,
    For,
    Restriction,
    Rank,
    StartIndex,
    ZeroIgnored,
    Case,
    Order,
    Circular,
    Offset,
    Collect,
    Violable,
    Lb,
    Ub,
    Combination,
}

impl TypeAtt {
    /// Returns the attribute spelled `s` in the interchange format.
    pub fn val_of(s: &str) -> Option<Self> {
        s.parse().ok()
    }
}

/// Flags that may be associated with some elements (e.g., constraints).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeFlag {
    StarredTuples,
    UncleanTuples,
}

/// Types of reification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeReification {
    Full,
    HalfFrom,
    HalfTo,
}

/// Types of measures used by elements `<cost>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeMeasure {
    Var,
    Dec,
    Val,
    Edit,
}

/// Types of objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeObjective {
    Expression,
    Sum,
    Product,
    Minimum,
    Maximum,
    Nvalues,
    Lex,
}

/// Types of combination of objectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeCombination {
    Lexico,
    Pareto,
}

/// Types of ranking used by constraints `<maximum>`, `<minimum>`, `<element>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr, Display)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeRank {
    First,
    Last,
    Any,
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn keywords_keep_their_interchange_spelling() {
        assert_eq!(TypeChild::Final.to_string(), "final");
        assert_eq!(TypeAtt::val_of("class"), Some(TypeAtt::Class));
        assert_eq!(TypeAtt::val_of("for"), Some(TypeAtt::For));
        assert_eq!(TypeAtt::val_of("case"), Some(TypeAtt::Case));
        assert_eq!(TypeAtt::val_of("reifiedBy"), Some(TypeAtt::ReifiedBy));
        assert_eq!(TypeAtt::val_of("CLASS"), None);
    }

    #[test]
    fn camel_case_constraint_names() {
        assert_eq!(TypeCtr::AllDifferent.to_string(), "allDifferent");
        assert_eq!(TypeCtr::NValues.to_string(), "nValues");
        assert_eq!(TypeCtr::IfThenElse.to_string(), "ifThenElse");
        assert_eq!(TypeCtr::Mdd.to_string(), "mdd");
        assert_eq!("nCircuits".parse::<TypeCtr>(), Ok(TypeCtr::NCircuits));
        for ctr in TypeCtr::iter() {
            assert_eq!(ctr.to_string().parse::<TypeCtr>(), Ok(ctr));
        }
    }

    #[test]
    fn framework_names() {
        assert_eq!(TypeFramework::QcspPlus.to_string(), "QCSP_PLUS");
        assert_eq!(TypeFramework::DisWcsp.to_string(), "DisWCSP");
        assert_eq!(value_of::<TypeFramework>("maxcsp"), Some(TypeFramework::Maxcsp));
        assert_eq!(value_of::<TypeRank>("any"), Some(TypeRank::Any));
        assert_eq!(value_of::<TypeReification>("half_from"), Some(TypeReification::HalfFrom));
        assert_eq!(value_of::<TypeMeasure>("nothing"), None);
    }
}
