//! Grammar reference for the oaql CLI

use crate::{ComparisonOp, TokenKind};

const OVERVIEW: &str = r#"OAQL GRAMMAR

OAQL is a small SQL-like query language. Comparisons are translated into
document-store operators while the query is scanned.

ACCEPTED QUERIES

  query     := SELECT [DISTINCT] selection FROM name [WHERE condition]
  selection := * | name (, name)*
  condition := group ((AND | OR | XOR) group)*
  group     := operand OPERATOR operand
  operand   := name | "string" | number | TRUE | FALSE | NULL
  name      := identifier | alias.column

  AND, OR and XOR have equal weight and are read left to right.
  Keywords are case-insensitive. Identifiers may contain '-'.

EXAMPLES

  oaql check 'SELECT * FROM users'
  oaql check 'SELECT DISTINCT u.name FROM users WHERE u.age >= 18 AND active = TRUE'
  oaql tokens --json 'SELECT name FROM users WHERE name <> "bob"'
"#;

/// Build the grammar reference printed by `oaql grammar`.
pub fn get_grammar_reference() -> String {
    let mut doc = String::from(OVERVIEW);

    doc.push_str("\nCOMPARISON OPERATORS\n\n");
    for op in ComparisonOp::LONGEST_FIRST {
        doc.push_str(&format!("  {:<4} {}\n", op.symbol(), op.mnemonic()));
    }

    doc.push_str("\nTOKEN CODES\n\n");
    for kind in TokenKind::all() {
        doc.push_str(&format!("  #{:<3} {}\n", kind.code(), kind.label()));
    }

    doc.push_str(
        "\nRESERVED BUT NOT YET ACCEPTED\n\n  \
         JOIN ON AS NOT IN IS BETWEEN ORDER BY LIMIT LIKE ASC DESC ( )\n\n  \
         The scanner recognises these, so the words cannot be used as names,\n  \
         but any query containing them is rejected.\n",
    );
    doc
}
