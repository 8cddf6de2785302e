//! Batch files listing named expressions.
//!
//! ```toml
//! [[expression]]
//! id = "c1"
//! text = "eq(add(x,y,z),10)"
//! ```
use std::path::Path;

use log::info;
use serde::Deserialize;

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BatchEntry {
    pub id: String,
    /// Expression in functional notation.
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Batch {
    #[serde(default, rename = "expression")]
    pub expressions: Vec<BatchEntry>,
}

impl Batch {
    pub fn from_toml_str(toml_str: &str, file: &str) -> CliResult<Self> {
        let batch: Batch = toml::from_str(toml_str).map_err(|e| CliError::BatchParse {
            source: e,
            file: file.to_string(),
        })?;
        if batch.expressions.is_empty() {
            return Err(CliError::EmptyBatch(file.to_string()));
        }
        Ok(batch)
    }

    pub fn load_from_toml(path: &Path) -> CliResult<Self> {
        let file = path.display().to_string();
        let toml_str = std::fs::read_to_string(path).map_err(|e| CliError::Io {
            source: e,
            file: file.clone(),
        })?;
        let batch = Self::from_toml_str(&toml_str, &file)?;
        info!("Loaded {} expressions from {}", batch.expressions.len(), file);
        Ok(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_entries_in_order() {
        let batch = Batch::from_toml_str(
            r#"
            [[expression]]
            id = "c1"
            text = "add(x,3)"

            [[expression]]
            id = "c2"
            text = "set()"
            "#,
            "inline",
        )
        .unwrap();
        let ids: Vec<_> = batch.expressions.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["c1", "c2"]);
        assert_eq!(batch.expressions[1].text, "set()");
    }

    #[test]
    fn rejects_empty_and_malformed_files() {
        assert!(matches!(
            Batch::from_toml_str("", "empty.toml"),
            Err(CliError::EmptyBatch(_))
        ));
        assert!(matches!(
            Batch::from_toml_str("[[expression]]\nid = 3", "bad.toml"),
            Err(CliError::BatchParse { .. })
        ));
    }
}
