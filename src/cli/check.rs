//! Validate OAQL queries

use std::path::PathBuf;

use tracing::debug;

use super::{load_query, CliError};
use crate::{Lexer, ParseError, Parser};

/// Validated when no query is given at all.
pub const DEMO_QUERY: &str = "SELECT name, age FROM users WHERE age >= 18";

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Inline query text
    pub query: Option<String>,
    /// File holding the query, used when `query` is absent
    pub file: Option<PathBuf>,
}

/// Result of a check operation
#[derive(Debug, PartialEq)]
pub enum CheckResult {
    Valid,
    Invalid(ParseError),
}

impl CheckResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, CheckResult::Valid)
    }
}

/// Execute a check operation.
///
/// A rejected query is a normal outcome and comes back as
/// [`CheckResult::Invalid`]; only I/O problems are errors.
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query = load_query(options.query.as_deref(), options.file.as_ref())?
        .unwrap_or_else(|| DEMO_QUERY.to_string());
    debug!(query = %query, "validating");

    let result = Parser::new(Lexer::new(&query)).and_then(|mut parser| parser.validate());

    Ok(match result {
        Ok(()) => CheckResult::Valid,
        Err(e) => CheckResult::Invalid(e),
    })
}
