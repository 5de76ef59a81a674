//! Dump the token stream of a query

use std::{io::Write, path::PathBuf};

use serde_json::json;

use super::{load_query, CliError};
use crate::{ast::format_number, Lexer, Payload, Token, TokenKind};

/// Options for the tokens command
#[derive(Debug, Clone, Default)]
pub struct TokensOptions {
    pub query: Option<String>,
    pub file: Option<PathBuf>,
    /// One JSON object per line instead of plain text
    pub json: bool,
}

/// Plain-text form: `line:column #code label [payload]`
pub fn render_token(token: &Token) -> String {
    let mut line = format!(
        "{}:{} #{} {}",
        token.line,
        token.column,
        token.kind.code(),
        token.kind.label()
    );
    if let Some(payload) = &token.payload {
        line.push(' ');
        line.push_str(&payload.to_string());
    }
    line
}

pub fn token_to_json(token: &Token) -> serde_json::Value {
    let payload = match &token.payload {
        None => serde_json::Value::Null,
        Some(Payload::Text(s)) => json!(s),
        Some(Payload::Number(n)) if n.is_finite() => json!(n),
        // JSON has no infinity; keep the rendered text instead of `null`
        Some(Payload::Number(n)) => json!(format_number(*n)),
        Some(Payload::Boolean(b)) => json!(b),
        Some(Payload::Direction(d)) => json!(d),
        Some(Payload::Operator(op)) => json!(op.mnemonic()),
    };
    json!({
        "kind": token.kind.label(),
        "code": token.kind.code(),
        "line": token.line,
        "column": token.column,
        "payload": payload,
    })
}

/// Write each token as soon as it is scanned, ending with the end marker.
///
/// Tokens written before a lexical error stay in `out`.
pub fn execute_tokens<W: Write>(options: &TokensOptions, out: &mut W) -> Result<(), CliError> {
    let query = load_query(options.query.as_deref(), options.file.as_ref())?
        .ok_or(CliError::NoInput)?;

    let mut lexer = Lexer::new(&query);
    loop {
        let token = lexer.next_token()?;
        if options.json {
            serde_json::to_writer(&mut *out, &token_to_json(&token))?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", render_token(&token))?;
        }
        if token.kind == TokenKind::Eof {
            return Ok(());
        }
    }
}
