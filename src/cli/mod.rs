//! CLI support for oaql-lang
//!
//! Provides programmatic access to the `oaql` commands so they can be
//! embedded in other tools and exercised from tests.

mod check;
mod docs;
mod tokens;

pub use check::{execute_check, CheckOptions, CheckResult, DEMO_QUERY};
pub use docs::get_grammar_reference;
pub use tokens::{execute_tokens, render_token, token_to_json, TokensOptions};

use std::{fs, io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur during CLI operations
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Lex(#[from] crate::LexError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot read {}: {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No query provided. Pass it as an argument, use --file, or pipe it to stdin.")]
    NoInput,
}

/// Pick the query text: the inline argument wins over `--file`.
pub(crate) fn load_query(
    query: Option<&str>,
    file: Option<&PathBuf>,
) -> Result<Option<String>, CliError> {
    if let Some(q) = query {
        return Ok(Some(q.to_string()));
    }
    match file {
        Some(path) => fs::read_to_string(path)
            .map(Some)
            .map_err(|source| CliError::ReadFile {
                path: path.clone(),
                source,
            }),
        None => Ok(None),
    }
}
