use thiserror::Error;
use tracing::{debug, trace};

use crate::{
    ast::{Position, Token, TokenKind},
    lexer::{LexError, Lexer},
};

/// Why a query was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The lexer gave up before the grammar could decide.
    #[error(transparent)]
    Lex(#[from] LexError),

    /// The token stream does not fit the grammar.
    #[error("{expected} but found: {found}")]
    Syntax { expected: &'static str, found: Token },
}

impl ParseError {
    pub fn position(&self) -> Position {
        match self {
            ParseError::Lex(e) => e.position(),
            ParseError::Syntax { found, .. } => found.position(),
        }
    }
}

/// Accepts:
///
/// ```text
/// query     := SELECT [DISTINCT] selection FROM name [WHERE condition] EOF
/// selection := '*' | name (',' name)*
/// condition := group ((AND | OR | XOR) group)*
/// group     := operand OPERATOR operand
/// operand   := name | STRING | NUMBER | BOOLEAN | NULL
/// name      := IDENTIFIER | FIELD
/// ```
///
/// `AND`, `OR` and `XOR` bind equally and are read left to right.
pub struct Parser {
    lexer: Lexer,
    current_token: Token,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_token = self.lexer.next_token()?;
        trace!(
            kind = self.current_token.kind.code(),
            line = self.current_token.line,
            column = self.current_token.column,
            "lookahead"
        );
        Ok(())
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_token.kind == kind
    }

    fn check_any(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.current_token.kind)
    }

    fn error(&self, expected: &'static str) -> ParseError {
        ParseError::Syntax {
            expected,
            found: self.current_token.clone(),
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<(), ParseError> {
        if !self.check(kind) {
            return Err(self.error(expected));
        }
        self.advance()
    }

    /// Check the whole token stream, through the end marker.
    pub fn validate(&mut self) -> Result<(), ParseError> {
        let result = self.parse_query();
        match &result {
            Ok(()) => debug!("query accepted"),
            Err(e) => debug!(error = %e, "query rejected"),
        }
        result
    }

    fn parse_query(&mut self) -> Result<(), ParseError> {
        self.expect(TokenKind::Select, "Expected SELECT")?;

        if self.check(TokenKind::Distinct) {
            self.advance()?;
        }

        self.parse_select_list()?;

        self.expect(TokenKind::From, "Expected FROM")?;
        self.parse_name("Expected table name after FROM")?;

        if self.check(TokenKind::Where) {
            self.advance()?;
            self.parse_condition()?;
        }

        self.expect(TokenKind::Eof, "Unexpected tokens after end of query")
    }

    fn parse_select_list(&mut self) -> Result<(), ParseError> {
        if self.check(TokenKind::Star) {
            return self.advance();
        }

        self.parse_name("Expected field name in SELECT list")?;
        while self.check(TokenKind::Comma) {
            self.advance()?;
            self.parse_name("Expected field name after comma")?;
        }
        Ok(())
    }

    fn parse_condition(&mut self) -> Result<(), ParseError> {
        self.parse_group()?;

        while self.check_any(&[TokenKind::And, TokenKind::Or, TokenKind::Xor]) {
            self.advance()?;
            self.parse_group()?;
        }
        Ok(())
    }

    fn parse_group(&mut self) -> Result<(), ParseError> {
        self.parse_operand()?;
        self.expect(TokenKind::Operator, "Expected comparison operator")?;
        self.parse_operand()
    }

    fn parse_operand(&mut self) -> Result<(), ParseError> {
        match self.current_token.kind {
            TokenKind::Identifier
            | TokenKind::Field
            | TokenKind::String
            | TokenKind::Number
            | TokenKind::Boolean
            | TokenKind::Null => self.advance(),
            _ => Err(self.error("Expected operand")),
        }
    }

    fn parse_name(&mut self, expected: &'static str) -> Result<(), ParseError> {
        if self.check_any(&[TokenKind::Identifier, TokenKind::Field]) {
            self.advance()
        } else {
            Err(self.error(expected))
        }
    }
}
