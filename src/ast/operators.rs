use std::fmt;

/// Comparison operators.
///
/// The scanner never hands out the raw symbol: each operator is carried as
/// the document-store mnemonic it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonOp {
    /// Equal (`=` / `$eq`)
    Equal,
    /// Not equal (`<>` / `$ne`)
    NotEqual,
    /// Greater than (`>` / `$gt`)
    GreaterThan,
    /// Greater than or equal (`>=` / `$gte`)
    GreaterEqual,
    /// Less than (`<` / `$lt`)
    LessThan,
    /// Less than or equal (`<=` / `$lte`)
    LessEqual,
}

impl ComparisonOp {
    /// All operators, two-character symbols first.
    ///
    /// The scanner tries them in this order so that `<>`, `>=` and `<=` are
    /// never split into their one-character prefixes.
    pub const LONGEST_FIRST: [ComparisonOp; 6] = [
        ComparisonOp::NotEqual,
        ComparisonOp::GreaterEqual,
        ComparisonOp::LessEqual,
        ComparisonOp::Equal,
        ComparisonOp::GreaterThan,
        ComparisonOp::LessThan,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "=",
            ComparisonOp::NotEqual => "<>",
            ComparisonOp::GreaterThan => ">",
            ComparisonOp::GreaterEqual => ">=",
            ComparisonOp::LessThan => "<",
            ComparisonOp::LessEqual => "<=",
        }
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            ComparisonOp::Equal => "$eq",
            ComparisonOp::NotEqual => "$ne",
            ComparisonOp::GreaterThan => "$gt",
            ComparisonOp::GreaterEqual => "$gte",
            ComparisonOp::LessThan => "$lt",
            ComparisonOp::LessEqual => "$lte",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}
