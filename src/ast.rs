//! # OAQL - Token Registry
//!
//! OAQL is a restricted SQL-like query language whose comparisons map onto
//! document-store operators. This module holds the closed vocabulary shared
//! by the lexer and the parser:
//!
//! - **[tokens]** - token kinds with their stable numeric codes, payloads,
//!   and the keyword table
//! - **[operators]** - comparison operators and their mnemonics
//!
//! ## Quick Start
//!
//! ```text
//! SELECT name, age FROM users WHERE age >= 18
//! ```
//!
//! Scans to `SELECT`, two identifiers separated by `,`, `FROM`, an
//! identifier, `WHERE`, and the condition `age` `$gte` `18.0`.
//!
//! ## Operator Mnemonics
//!
//! | Symbol | Payload |
//! |--------|---------|
//! | `=`    | `$eq`   |
//! | `<>`   | `$ne`   |
//! | `>`    | `$gt`   |
//! | `>=`   | `$gte`  |
//! | `<`    | `$lt`   |
//! | `<=`   | `$lte`  |
pub mod operators;
pub mod tokens;

pub use operators::ComparisonOp;
pub use tokens::{format_number, Payload, Position, Token, TokenKind};
