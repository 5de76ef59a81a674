use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use tracing::trace;

pub use crate::ast::Position;
use crate::ast::{ComparisonOp, Payload, Token, TokenKind};

/// Numeric literal grammar, anchored at the cursor.
static NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?").expect("numeric literal pattern")
});

/// Fatal scanning failure. Scanning cannot resume after one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("Illegal character <{found}> at {at}")]
    IllegalCharacter { found: char, at: Position },

    /// Reported at the opening quote.
    #[error("Unterminated string literal at {at}")]
    UnterminatedString { at: Position },

    /// A sign followed by something that does not complete a number, e.g. `-.x`.
    #[error("Invalid numeric literal at {at}")]
    InvalidNumber { at: Position },
}

impl LexError {
    pub fn position(&self) -> Position {
        match self {
            LexError::IllegalCharacter { at, .. }
            | LexError::UnterminatedString { at }
            | LexError::InvalidNumber { at } => *at,
        }
    }
}

pub struct Lexer {
    input: String,
    /// Byte offset into `input`
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.to_string(),
            position: 0,
            line: 0,
            column: 0,
        }
    }

    /// Location of the next unread character.
    pub fn cursor(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn rest(&self) -> &str {
        &self.input[self.position..]
    }

    fn current_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if matches!(ch, ' ' | '\t' | '\r' | '\n' | '\x0C') {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn read_identifier(&mut self) -> String {
        let mut result = String::new();
        while let Some(ch) = self.current_char() {
            if is_identifier_part(ch) {
                result.push(ch);
                self.advance();
            } else {
                break;
            }
        }
        result
    }

    fn read_string(&mut self, start: Position) -> Result<Token, LexError> {
        let mut result = String::new();
        self.advance(); // opening quote

        while let Some(ch) = self.current_char() {
            match ch {
                '"' => {
                    self.advance();
                    return Ok(Token::with_payload(
                        TokenKind::String,
                        start,
                        Payload::Text(result),
                    ));
                }
                '\\' => {
                    let Some(escaped) = self.peek_char(1) else {
                        break;
                    };
                    result.push(match escaped {
                        't' => '\t',
                        'n' => '\n',
                        'r' => '\r',
                        // `\"`, `\\` and unknown escapes all keep the character itself
                        other => other,
                    });
                    self.advance();
                    self.advance();
                }
                _ => {
                    result.push(ch);
                    self.advance();
                }
            }
        }

        Err(LexError::UnterminatedString { at: start })
    }

    fn read_word(&mut self, start: Position) -> Token {
        let word = self.read_identifier();

        // `alias.column` with nothing between the segments is a single field
        if self.current_char() == Some('.') && self.peek_char(1).is_some_and(is_identifier_start) {
            self.advance();
            let member = self.read_identifier();
            return Token::with_payload(
                TokenKind::Field,
                start,
                Payload::Text(format!("{}.{}", word, member)),
            );
        }

        match TokenKind::keyword(&word) {
            Some((kind, payload)) => Token {
                kind,
                line: start.line,
                column: start.column,
                payload,
            },
            None => Token::with_payload(TokenKind::Identifier, start, Payload::Text(word)),
        }
    }

    fn is_number_start(&self, ch: char) -> bool {
        match ch {
            '0'..='9' => true,
            '-' | '+' => self
                .peek_char(1)
                .is_some_and(|c| c.is_ascii_digit() || c == '.'),
            _ => false,
        }
    }

    fn read_number(&mut self, start: Position) -> Result<Token, LexError> {
        let text = match NUMBER.find(self.rest()) {
            Some(m) => m.as_str().to_string(),
            None => return Err(LexError::InvalidNumber { at: start }),
        };
        let value: f64 = text
            .parse()
            .map_err(|_| LexError::InvalidNumber { at: start })?;

        // the pattern only matches ASCII, one char per byte
        for _ in 0..text.len() {
            self.advance();
        }

        Ok(Token::with_payload(
            TokenKind::Number,
            start,
            Payload::Number(value),
        ))
    }

    fn match_operator(&mut self) -> Option<ComparisonOp> {
        let op = ComparisonOp::LONGEST_FIRST
            .into_iter()
            .find(|op| self.rest().starts_with(op.symbol()))?;
        for _ in 0..op.symbol().len() {
            self.advance();
        }
        Some(op)
    }

    fn punctuation(&mut self, kind: TokenKind, start: Position) -> Token {
        self.advance();
        Token::new(kind, start)
    }

    /// Scan the next token.
    ///
    /// Once the input is exhausted every further call returns
    /// [`TokenKind::Eof`] at the final cursor position.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();

        let start = self.cursor();
        let token = match self.current_char() {
            None => Token::new(TokenKind::Eof, start),
            Some('"') => self.read_string(start)?,
            Some('(') => self.punctuation(TokenKind::LParen, start),
            Some(')') => self.punctuation(TokenKind::RParen, start),
            Some(',') => self.punctuation(TokenKind::Comma, start),
            Some('.') => self.punctuation(TokenKind::Dot, start),
            Some('*') => self.punctuation(TokenKind::Star, start),
            Some(ch @ ('<' | '>' | '=')) => match self.match_operator() {
                Some(op) => Token::with_payload(TokenKind::Operator, start, Payload::Operator(op)),
                None => return Err(LexError::IllegalCharacter { found: ch, at: start }),
            },
            Some(ch) if is_identifier_start(ch) => self.read_word(start),
            Some(ch) if self.is_number_start(ch) => self.read_number(start)?,
            Some(ch) => return Err(LexError::IllegalCharacter { found: ch, at: start }),
        };

        trace!(
            kind = token.kind.code(),
            line = token.line,
            column = token.column,
            "scanned token"
        );
        Ok(token)
    }
}

fn is_identifier_start(ch: char) -> bool {
    ch.is_alphabetic() || ch == '_'
}

fn is_identifier_part(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut lexer = Lexer::new(input);
        let mut result = vec![];
        loop {
            let token = lexer.next_token().unwrap();
            result.push(token.kind);
            if token.kind == TokenKind::Eof {
                break;
            }
        }
        result
    }

    #[test]
    fn test_select_statement() {
        assert_eq!(
            kinds("SELECT a, b FROM t WHERE a <> 1"),
            vec![
                TokenKind::Select,
                TokenKind::Identifier,
                TokenKind::Comma,
                TokenKind::Identifier,
                TokenKind::From,
                TokenKind::Identifier,
                TokenKind::Where,
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Number,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_eof_is_sticky() {
        let mut lexer = Lexer::new("x");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Identifier);
        for _ in 0..3 {
            let token = lexer.next_token().unwrap();
            assert_eq!(token.kind, TokenKind::Eof);
            assert_eq!(token.position(), Position { line: 0, column: 1 });
        }
    }

    #[test]
    fn test_newline_resets_column() {
        let mut lexer = Lexer::new("a\n  b");
        assert_eq!(lexer.next_token().unwrap().position(), Position { line: 0, column: 0 });
        assert_eq!(lexer.next_token().unwrap().position(), Position { line: 1, column: 2 });
    }

    #[test]
    fn test_sign_without_digits() {
        let mut lexer = Lexer::new("-.x");
        assert_eq!(
            lexer.next_token(),
            Err(LexError::InvalidNumber {
                at: Position { line: 0, column: 0 }
            })
        );
    }
}
