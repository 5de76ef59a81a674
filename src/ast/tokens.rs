use std::fmt;

use crate::ast::ComparisonOp;

/// Zero-based location of a character in the query text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// Terminal kinds shared by the lexer and the parser.
///
/// The discriminants are part of the external contract: diagnostics print
/// them as `#<code>`, and other tooling keys on the numbers, so they must
/// never be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// End of input. Returned for every call once the text is exhausted.
    Eof = 0,

    // Punctuation
    /// `(`
    LParen = 1,
    /// `)`
    RParen = 2,
    /// `,`
    Comma = 3,
    /// `.` when not part of a qualified field
    Dot = 4,
    /// `*`
    Star = 5,

    /// Any comparison operator; the payload names which one.
    ///
    /// # Examples
    /// ```text
    /// =  <>  >  >=  <  <=
    /// ```
    Operator = 6,

    // Keywords
    Select = 7,
    Distinct = 8,
    From = 9,
    Join = 10,
    On = 11,
    As = 12,
    Where = 13,
    And = 14,
    Or = 15,
    Xor = 16,
    Not = 17,
    In = 18,
    Is = 19,
    Null = 20,
    Between = 21,
    Order = 22,
    By = 23,
    Limit = 24,
    /// `ASC` or `DESC`, with a `+1`/`-1` direction payload
    SortDirection = 25,
    Like = 26,

    // Literals and names
    /// `TRUE` or `FALSE`
    Boolean = 27,

    /// Two-segment dotted name, written without whitespace around the dot.
    ///
    /// # Examples
    /// ```text
    /// u.name
    /// orders.total_amount
    /// ```
    Field = 28,

    /// Bare name. May contain hyphens.
    ///
    /// # Examples
    /// ```text
    /// users
    /// created-at
    /// _id
    /// ```
    Identifier = 29,

    /// Numeric literal, always carried as a double.
    ///
    /// # Examples
    /// ```text
    /// 18
    /// -3.5e2
    /// +.25
    /// ```
    Number = 30,

    /// Double-quoted string literal
    String = 31,
}

impl TokenKind {
    const ALL: [TokenKind; 32] = [
        TokenKind::Eof,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Star,
        TokenKind::Operator,
        TokenKind::Select,
        TokenKind::Distinct,
        TokenKind::From,
        TokenKind::Join,
        TokenKind::On,
        TokenKind::As,
        TokenKind::Where,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Xor,
        TokenKind::Not,
        TokenKind::In,
        TokenKind::Is,
        TokenKind::Null,
        TokenKind::Between,
        TokenKind::Order,
        TokenKind::By,
        TokenKind::Limit,
        TokenKind::SortDirection,
        TokenKind::Like,
        TokenKind::Boolean,
        TokenKind::Field,
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::String,
    ];

    /// Stable numeric code of this kind.
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<TokenKind> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Every kind, in code order.
    pub fn all() -> impl Iterator<Item = TokenKind> {
        Self::ALL.into_iter()
    }

    /// Short human-readable label used by the CLI.
    pub fn label(self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Star => "*",
            TokenKind::Operator => "comparison operator",
            TokenKind::Select => "SELECT",
            TokenKind::Distinct => "DISTINCT",
            TokenKind::From => "FROM",
            TokenKind::Join => "JOIN",
            TokenKind::On => "ON",
            TokenKind::As => "AS",
            TokenKind::Where => "WHERE",
            TokenKind::And => "AND",
            TokenKind::Or => "OR",
            TokenKind::Xor => "XOR",
            TokenKind::Not => "NOT",
            TokenKind::In => "IN",
            TokenKind::Is => "IS",
            TokenKind::Null => "NULL",
            TokenKind::Between => "BETWEEN",
            TokenKind::Order => "ORDER",
            TokenKind::By => "BY",
            TokenKind::Limit => "LIMIT",
            TokenKind::SortDirection => "ASC/DESC",
            TokenKind::Like => "LIKE",
            TokenKind::Boolean => "boolean",
            TokenKind::Field => "field",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
        }
    }

    /// Look up a reserved word, ignoring case.
    ///
    /// Returns the kind together with the payload the keyword carries, if any.
    pub fn keyword(word: &str) -> Option<(TokenKind, Option<Payload>)> {
        let found = match word.to_uppercase().as_str() {
            "SELECT" => (TokenKind::Select, None),
            "DISTINCT" => (TokenKind::Distinct, None),
            "FROM" => (TokenKind::From, None),
            "JOIN" => (TokenKind::Join, None),
            "ON" => (TokenKind::On, None),
            "AS" => (TokenKind::As, None),
            "WHERE" => (TokenKind::Where, None),
            "AND" => (TokenKind::And, None),
            "OR" => (TokenKind::Or, None),
            "XOR" => (TokenKind::Xor, None),
            "NOT" => (TokenKind::Not, None),
            "IN" => (TokenKind::In, None),
            "IS" => (TokenKind::Is, None),
            "NULL" => (TokenKind::Null, None),
            "BETWEEN" => (TokenKind::Between, None),
            "ORDER" => (TokenKind::Order, None),
            "BY" => (TokenKind::By, None),
            "LIMIT" => (TokenKind::Limit, None),
            "ASC" => (TokenKind::SortDirection, Some(Payload::Direction(1))),
            "DESC" => (TokenKind::SortDirection, Some(Payload::Direction(-1))),
            "LIKE" => (TokenKind::Like, None),
            "TRUE" => (TokenKind::Boolean, Some(Payload::Boolean(true))),
            "FALSE" => (TokenKind::Boolean, Some(Payload::Boolean(false))),
            _ => return None,
        };
        Some(found)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.code())
    }
}

/// Value attached to a token.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Identifier, field or string text
    Text(String),
    Number(f64),
    Boolean(bool),
    /// `+1` for `ASC`, `-1` for `DESC`
    Direction(i32),
    Operator(ComparisonOp),
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Text(s) => f.write_str(s),
            Payload::Number(n) => f.write_str(&format_number(*n)),
            Payload::Boolean(b) => write!(f, "{}", b),
            Payload::Direction(d) => write!(f, "{}", d),
            Payload::Operator(op) => f.write_str(op.mnemonic()),
        }
    }
}

/// Render a number so it always shows a fractional digit.
///
/// `18` becomes `18.0` and `1e20` becomes `1.0e20`. Overflowed literals
/// render as `Infinity` or `-Infinity`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        let text = if n > 0.0 { "Infinity" } else { "-Infinity" };
        return text.to_string();
    }
    let text = format!("{:?}", n);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !mantissa.contains('.') => {
            format!("{}.0e{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// A classified lexical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
    pub column: usize,
    pub payload: Option<Payload>,
}

impl Token {
    pub fn new(kind: TokenKind, at: Position) -> Self {
        Token {
            kind,
            line: at.line,
            column: at.column,
            payload: None,
        }
    }

    pub fn with_payload(kind: TokenKind, at: Position, payload: Payload) -> Self {
        Token {
            kind,
            line: at.line,
            column: at.column,
            payload: Some(payload),
        }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Some(Payload::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self.payload {
            Some(Payload::Number(n)) => Some(n),
            _ => None,
        }
    }

    pub fn operator(&self) -> Option<ComparisonOp> {
        match self.payload {
            Some(Payload::Operator(op)) => Some(op),
            _ => None,
        }
    }
}

/// Renders as `#<code>`, followed by ` (<payload>)` when there is one.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(payload) = &self.payload {
            write!(f, " ({})", payload)?;
        }
        Ok(())
    }
}
