use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read '{file}': {source}")]
    Io {
        source: std::io::Error,
        file: String,
    },

    #[error("Failed to parse batch file '{file}': {source}")]
    BatchParse {
        source: toml::de::Error,
        file: String,
    },

    #[error("Batch file '{0}' does not list any expression")]
    EmptyBatch(String),

    /// The diagnostics were already rendered on stderr.
    #[error("Expression `{id}` could not be parsed")]
    Reported { id: String },

    #[error("Expression `{id}` could not be encoded: {source}")]
    Expression {
        id: String,
        source: xcsp_expr::Error,
    },
}

pub type CliResult<T> = Result<T, CliError>;
