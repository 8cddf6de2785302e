//! Command line front-end: encodes expressions written in functional notation
//! into the postfix token stream of the interchange format.

mod batch;
mod error;

use std::{path::PathBuf, process::ExitCode};

use ariadne::{ColorGenerator, Label, Report, ReportKind, Source};
use clap::{Parser, Subcommand};
use env_logger::{Builder, Target};
use log::{LevelFilter, debug};
use strum::IntoEnumIterator;
use xcsp_expr::{
    catalog::OperatorKind,
    classify::{arity_class, family_of},
    parser::parse,
    tree::Expr,
};

use crate::{
    batch::Batch,
    error::{CliError, CliResult},
};

#[derive(Parser)]
#[command(name = "xcsp-expr", author, version, about, long_about = None)]
struct Cli {
    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encodes each expression given on the command line.
    Encode {
        /// Expressions in functional notation, e.g. `add(x,mul(y,3))`
        #[arg(required = true)]
        expressions: Vec<String>,
    },
    /// Encodes the expressions listed in a TOML batch file.
    Batch {
        /// Path to the batch file
        file: PathBuf,
    },
    /// Lists the operator catalog.
    Operators,
}

/// Prints the diagnostics of a parse failure against the expression text.
///
/// Returns `false` if nothing could be rendered, in which case the caller still
/// has to report the error.
fn report_parse_errors(id: &str, text: &str, error: &xcsp_expr::Error) -> bool {
    let xcsp_expr::Error::Parse { errors } = error else {
        return false;
    };
    let mut reported = !errors.is_empty();
    let mut colors = ColorGenerator::new();
    let color = colors.next();
    for parse_error in errors {
        let span = (id.to_string(), parse_error.span.clone());
        let printed = Report::build(ReportKind::Error, span.clone())
            .with_message(&parse_error.message)
            .with_label(
                Label::new(span)
                    .with_message("The error occurred here")
                    .with_color(color),
            )
            .finish()
            .eprint((id.to_string(), Source::from(text)));
        if let Err(e) = printed {
            debug!("Could not render report for `{id}`: {e}");
            reported = false;
        }
    }
    reported
}

fn encode_one(id: &str, text: &str) -> CliResult<String> {
    let to_error = |source| CliError::Expression {
        id: id.to_string(),
        source,
    };
    let expr: Expr = parse(text).map_err(|e| {
        if report_parse_errors(id, text, &e) {
            CliError::Reported { id: id.to_string() }
        } else {
            to_error(e)
        }
    })?;
    debug!("Parsed `{id}` as {expr}");
    expr.to_postfix().map_err(to_error)
}

fn run_command(command: Commands) -> CliResult<()> {
    match command {
        Commands::Encode { expressions } => {
            for (i, text) in expressions.iter().enumerate() {
                let postfix = encode_one(&format!("arg{i}"), text)?;
                println!("{}", postfix.trim_end());
            }
        }
        Commands::Batch { file } => {
            let batch = Batch::load_from_toml(&file)?;
            for entry in &batch.expressions {
                let postfix = encode_one(&entry.id, &entry.text)?;
                println!("{}: {}", entry.id, postfix.trim_end());
            }
        }
        Commands::Operators => {
            for kind in OperatorKind::iter() {
                println!(
                    "{:<10} {:<6} {:<16} {:?}",
                    kind.to_str(),
                    kind.arity().to_string(),
                    format!("{:?}", arity_class(kind)),
                    family_of(kind)
                );
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Cli::parse();

    let mut builder = Builder::new();
    builder
        .filter_level(args.log_level)
        .parse_default_env()
        .target(Target::Stderr)
        .init();

    match run_command(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Reported { .. }) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_valid_expressions() {
        assert_eq!(encode_one("e", "add(x,y,3)").unwrap(), "x y 3 3add ");
    }

    #[test]
    fn parse_failures_are_reported_once() {
        let error = encode_one("e", "add(x,").unwrap_err();
        assert!(matches!(error, CliError::Reported { ref id } if id == "e"));
        assert_eq!(error.to_string(), "Expression `e` could not be parsed");
    }

    #[test]
    fn encoding_failures_keep_their_cause() {
        let error = encode_one("e", "add(x)").unwrap_err();
        let CliError::Expression { source, .. } = error else {
            panic!("expected an encoding error");
        };
        assert!(source.is_arity());
    }
}
