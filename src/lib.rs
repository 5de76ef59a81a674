//! Scanner and grammar validator for OAQL.
//!
//! ```
//! assert!(oaql_lang::validate("SELECT name, age FROM users WHERE age >= 18").is_ok());
//!
//! let err = oaql_lang::validate("SELECT FROM users").unwrap_err();
//! assert_eq!(err.to_string(), "Expected field name in SELECT list but found: #9");
//! ```
pub mod ast;
pub mod cli;
pub mod lexer;
pub mod parser;

pub use ast::{ComparisonOp, Payload, Token, TokenKind};
pub use lexer::{LexError, Lexer, Position};
pub use parser::{ParseError, Parser};

/// Scan and validate a complete query.
pub fn validate(query: &str) -> Result<(), ParseError> {
    Parser::new(Lexer::new(query))?.validate()
}
