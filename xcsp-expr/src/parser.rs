//! Reader for the functional notation of intensional expressions.
//!
//! Accepted syntax, as printed by the `Display` implementation of [`Expr`]:
//! - Calls: `name(e1,e2,...)`, the name resolving case-insensitively through
//!   the catalog (`add(x,3)`, `Eq(x,y)`, `set()`).
//! - Integers `-12`, decimals `1.5`, rationals `3/4`.
//! - Parameters `%0`, `%1`, ...
//! - Variables: identifiers with optional array indexing, `x`, `queens[3]`.
//!   Operator names are reserved and never read as variables.
//! - Symbols: single-quoted identifiers, `'red'`.
use std::str::FromStr;

use bigdecimal::BigDecimal;
use chumsky::prelude::*;

use crate::{
    catalog::OperatorKind,
    leaf::Leaf,
    tree::Expr,
    utils::{Error, ParseError, Result},
};

fn integer<'src>() -> impl Parser<'src, &'src str, &'src str, extra::Err<Rich<'src, char>>> + Clone
{
    just('-')
        .or_not()
        .then(text::digits(10))
        .to_slice()
        .labelled("integer")
}

fn leaf_parser<'src>() -> impl Parser<'src, &'src str, Leaf, extra::Err<Rich<'src, char>>> + Clone
{
    let decimal = integer()
        .then(just('.').then(text::digits(10)))
        .to_slice()
        .try_map(|s: &str, span| {
            BigDecimal::from_str(s)
                .map(Leaf::Decimal)
                .map_err(|e| Rich::custom(span, format!("invalid decimal `{s}`: {e}")))
        })
        .labelled("decimal");

    let long = integer().try_map(|s: &str, span| {
        s.parse::<i64>()
            .map_err(|_| Rich::custom(span, format!("integer `{s}` does not fit in 64 bits")))
    });

    let rational = long
        .clone()
        .then_ignore(just('/'))
        .then(long.clone())
        .try_map(|(num, den), span| {
            if den == 0 {
                Err(Rich::custom(span, "rational with a zero denominator"))
            } else {
                Ok(Leaf::Rational { num, den })
            }
        })
        .labelled("rational");

    let parameter = just('%')
        .ignore_then(text::digits(10).to_slice())
        .try_map(|s: &str, span| {
            s.parse::<usize>()
                .map(Leaf::Par)
                .map_err(|_| Rich::custom(span, format!("invalid parameter index `{s}`")))
        })
        .labelled("parameter");

    let index = just('[')
        .then(text::digits(10))
        .then(just(']'))
        .repeated();
    let variable = text::ident()
        .validate(|name: &str, extra, emit| {
            if OperatorKind::from_str(name).is_some() {
                emit.emit(Rich::custom(
                    extra.span(),
                    format!("`{name}` names an operator and cannot be used as a variable"),
                ));
            }
            name
        })
        .then(index)
        .to_slice()
        .map(|s: &str| Leaf::Var(s.to_string()))
        .labelled("variable");

    let symbol = text::ident()
        .delimited_by(just('\''), just('\''))
        .map(|s: &str| Leaf::Symbol(s.to_string()))
        .labelled("symbol");

    choice((
        decimal,
        rational,
        long.map(Leaf::Long),
        parameter,
        symbol,
        variable,
    ))
}

/// Parser of a single expression in functional notation.
pub fn expr_parser<'src>()
-> impl Parser<'src, &'src str, Expr, extra::Err<Rich<'src, char>>> + Clone {
    recursive(|expr| {
        let call = text::ident()
            .then(
                expr.padded()
                    .separated_by(just(','))
                    .collect::<Vec<_>>()
                    .delimited_by(just('('), just(')')),
            )
            .validate(|(name, operands): (&str, Vec<Expr>), extra, emit| {
                match OperatorKind::from_str(name) {
                    Some(kind) if !kind.is_terminal() => Expr::apply(kind, operands),
                    Some(_) => {
                        emit.emit(Rich::custom(
                            extra.span(),
                            format!("`{name}` is a terminal kind and cannot be applied"),
                        ));
                        Expr::var(name)
                    }
                    None => {
                        emit.emit(Rich::custom(extra.span(), format!("unknown operator `{name}`")));
                        Expr::var(name)
                    }
                }
            })
            .labelled("operator application");

        choice((call, leaf_parser().map(Expr::Leaf)))
    })
}

/// Reads an expression written in functional notation.
pub fn parse(src: &str) -> Result<Expr> {
    expr_parser()
        .padded()
        .then_ignore(end())
        .parse(src)
        .into_result()
        .map_err(|errors| Error::Parse {
            errors: errors
                .into_iter()
                .map(|e| ParseError {
                    message: e.to_string(),
                    span: e.span().start..e.span().end,
                })
                .collect(),
        })
}

impl FromStr for Expr {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
