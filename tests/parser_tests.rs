// tests/parser_tests.rs

use oaql_lang::ast::{Position, TokenKind};
use oaql_lang::lexer::{LexError, Lexer};
use oaql_lang::parser::{ParseError, Parser};
use pretty_assertions::assert_eq;

fn validate(query: &str) -> Result<(), ParseError> {
    let lexer = Lexer::new(query);
    let mut parser = Parser::new(lexer)?;
    parser.validate()
}

fn message(query: &str) -> String {
    validate(query)
        .expect_err(&format!("Expected rejection for: {}", query))
        .to_string()
}

// ============================================================================
// Accepted queries
// ============================================================================

#[test]
fn test_valid_queries() {
    let test_cases = vec![
        "SELECT * FROM users",
        "select * from users",
        "SELECT name, age FROM users WHERE age >= 18",
        "SELECT DISTINCT name FROM users",
        "SELECT DISTINCT * FROM users",
        "SELECT u.name, u.email FROM users",
        "SELECT name FROM db.users",
        "SELECT * FROM users WHERE name = \"alice\"",
        "SELECT * FROM users WHERE active = TRUE",
        "SELECT * FROM users WHERE deleted_at = NULL",
        "SELECT * FROM users WHERE NULL <> deleted_at",
        "SELECT * FROM users WHERE 18 <= age",
        "SELECT * FROM users WHERE a = b",
        "SELECT * FROM users WHERE \"x\" = 1",
        "SELECT * FROM users WHERE score > -3.5e2",
        "SELECT * FROM users WHERE created-at < 20240101",
        "SELECT * FROM users WHERE age > 18 AND age < 65",
        "SELECT * FROM users WHERE a = 1 OR b = 2 XOR c = 3 AND d <> 4",
        "  SELECT\n  name\nFROM\n  users\n",
    ];

    for query in test_cases {
        assert_eq!(validate(query), Ok(()), "Failed for query: {}", query);
    }
}

#[test]
fn test_where_is_optional() {
    assert!(validate("SELECT * FROM users").is_ok());
    assert!(validate("SELECT * FROM users WHERE").is_err());
}

// ============================================================================
// Rejected queries and their messages
// ============================================================================

#[test]
fn test_missing_select_list() {
    assert_eq!(
        message("SELECT FROM users"),
        "Expected field name in SELECT list but found: #9"
    );
}

#[test]
fn test_dangling_connector() {
    assert_eq!(
        message("SELECT * FROM users WHERE age >= 18 AND"),
        "Expected operand but found: #0"
    );
}

#[test]
fn test_limit_not_supported() {
    assert_eq!(
        message("SELECT * FROM users LIMIT 10"),
        "Unexpected tokens after end of query but found: #24"
    );
}

#[test]
fn test_error_messages() {
    let test_cases = vec![
        ("", "Expected SELECT but found: #0"),
        ("users", "Expected SELECT but found: #29 (users)"),
        ("SELECT", "Expected field name in SELECT list but found: #0"),
        ("SELECT 1 FROM users", "Expected field name in SELECT list but found: #30 (1.0)"),
        ("SELECT \"a\" FROM t", "Expected field name in SELECT list but found: #31 (a)"),
        ("SELECT a, FROM t", "Expected field name after comma but found: #9"),
        ("SELECT a, * FROM t", "Expected field name after comma but found: #5"),
        ("SELECT a b FROM t", "Expected FROM but found: #29 (b)"),
        ("SELECT * users", "Expected FROM but found: #29 (users)"),
        ("SELECT *, a FROM t", "Expected FROM but found: #3"),
        ("SELECT * FROM", "Expected table name after FROM but found: #0"),
        ("SELECT * FROM *", "Expected table name after FROM but found: #5"),
        ("SELECT * FROM t WHERE = 1", "Expected operand but found: #6 ($eq)"),
        ("SELECT * FROM t WHERE age 18", "Expected comparison operator but found: #30 (18.0)"),
        ("SELECT * FROM t WHERE age", "Expected comparison operator but found: #0"),
        ("SELECT * FROM t WHERE age >", "Expected operand but found: #0"),
        ("SELECT * FROM t WHERE age > = 1", "Expected operand but found: #6 ($eq)"),
        ("SELECT * FROM t WHERE a = 1 b = 2", "Unexpected tokens after end of query but found: #29 (b)"),
        ("SELECT * FROM t WHERE a = 1 AND OR b = 2", "Expected operand but found: #15"),
        ("SELECT * FROM t WHERE a = 1 = 2", "Unexpected tokens after end of query but found: #6 ($eq)"),
        ("SELECT * FROM t u", "Unexpected tokens after end of query but found: #29 (u)"),
        ("SELECT * FROM t ORDER BY a DESC", "Unexpected tokens after end of query but found: #22"),
        ("SELECT 1e20 FROM t", "Expected field name in SELECT list but found: #30 (1.0e20)"),
        ("SELECT 0.0000001 FROM t", "Expected field name in SELECT list but found: #30 (1.0e-7)"),
        ("SELECT -2.5e30 FROM t", "Expected field name in SELECT list but found: #30 (-2.5e30)"),
        ("SELECT 1e999 FROM t", "Expected field name in SELECT list but found: #30 (Infinity)"),
        ("SELECT -1e999 FROM t", "Expected field name in SELECT list but found: #30 (-Infinity)"),
    ];

    for (query, expected) in test_cases {
        assert_eq!(message(query), expected, "Failed for query: {}", query);
    }
}

#[test]
fn test_direction_payload_in_message() {
    assert_eq!(
        message("SELECT * FROM t WHERE ASC = 1"),
        "Expected operand but found: #25 (1)"
    );
    assert_eq!(
        message("SELECT * FROM t WHERE DESC = 1"),
        "Expected operand but found: #25 (-1)"
    );
}

#[test]
fn test_boolean_payload_in_message() {
    assert_eq!(
        message("SELECT TRUE FROM t"),
        "Expected field name in SELECT list but found: #27 (true)"
    );
}

#[test]
fn test_field_payload_in_message() {
    assert_eq!(
        message("SELECT * FROM t WHERE u.age u.name"),
        "Expected comparison operator but found: #28 (u.name)"
    );
}

// ============================================================================
// Reserved but unsupported vocabulary
// ============================================================================

#[test]
fn test_unsupported_constructs_are_rejected() {
    let test_cases = vec![
        "SELECT * FROM users JOIN orders ON users.id = orders.user_id",
        "SELECT name AS n FROM users",
        "SELECT * FROM users WHERE NOT active = TRUE",
        "SELECT * FROM users WHERE age IN 1",
        "SELECT * FROM users WHERE age IS NULL",
        "SELECT * FROM users WHERE age BETWEEN 1 AND 2",
        "SELECT * FROM users ORDER BY name ASC",
        "SELECT * FROM users WHERE name LIKE \"a\"",
        "SELECT * FROM users WHERE (age > 1)",
        "SELECT COUNT(*) FROM users",
        "SELECT a.b.c FROM users",
    ];

    for query in test_cases {
        assert!(
            matches!(validate(query), Err(ParseError::Syntax { .. })),
            "Expected syntax error for query: {}",
            query
        );
    }
}

// ============================================================================
// Error values
// ============================================================================

#[test]
fn test_syntax_error_carries_token() {
    match validate("SELECT * FROM users\nWHERE age >= 18 AND") {
        Err(ParseError::Syntax { expected, found }) => {
            assert_eq!(expected, "Expected operand");
            assert_eq!(found.kind, TokenKind::Eof);
            assert_eq!(found.position(), Position { line: 1, column: 19 });
        }
        other => panic!("Expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_unterminated_string_is_lexical() {
    let err = validate("SELECT * FROM users WHERE name = \"abc").unwrap_err();
    assert_eq!(
        err,
        ParseError::Lex(LexError::UnterminatedString {
            at: Position { line: 0, column: 33 }
        })
    );
    assert_eq!(err.position(), Position { line: 0, column: 33 });
    assert_eq!(err.to_string(), "Unterminated string literal at line 0, column 33");
}

#[test]
fn test_lexical_error_wins_over_grammar() {
    // the grammar would accept everything up to `#`
    let err = validate("SELECT * FROM users WHERE a = #").unwrap_err();
    assert!(matches!(
        err,
        ParseError::Lex(LexError::IllegalCharacter { found: '#', .. })
    ));
}

#[test]
fn test_first_error_only() {
    // both the select list and the table name are wrong; only the first is reported
    assert_eq!(
        message("SELECT 1 FROM 2"),
        "Expected field name in SELECT list but found: #30 (1.0)"
    );
}

#[test]
fn test_crate_level_validate() {
    assert_eq!(oaql_lang::validate("SELECT * FROM users"), Ok(()));
    assert!(oaql_lang::validate("SELECT * FROM users LIMIT 10").is_err());
}
