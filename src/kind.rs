//! The shared classification vocabulary attached to every UAST node.
//!
//! The taxonomy is closed and versioned: supporting a new native construct
//! means adding a tag here plus a mapping rule, never changing the node
//! schema. Tags serialize under their canonical SCREAMING_SNAKE_CASE
//! spelling, which is the spelling shared with non-Rust consumers.

use serde::{Deserialize, Serialize};

/// Taxonomy revision. Bumped whenever a tag is added or renamed.
pub const TAXONOMY_VERSION: u32 = 1;

/// A semantic classification tag.
///
/// A node carries one or more of these (primary kind first); secondary tags
/// mark extra roles, e.g. an expression used as an `if` condition also
/// carries [`Kind::Condition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    CompilationUnit,
    DeclList,
    Declaration,
    Function,
    ParamList,
    Parameter,
    Block,
    Assignment,
    AssignmentOperator,
    CompoundAssignment,
    ExprList,
    ExprStmt,
    IfStmt,
    Condition,
    Else,
    ReturnStmt,
    Call,
    MemberSelect,
    BinaryExpression,
    ParenExpr,
    Operator,
    Keyword,
    Identifier,
    Literal,
    StringLiteral,
}

/// Every tag in the taxonomy, in declaration order.
pub const VOCABULARY: &[Kind] = &[
    Kind::CompilationUnit,
    Kind::DeclList,
    Kind::Declaration,
    Kind::Function,
    Kind::ParamList,
    Kind::Parameter,
    Kind::Block,
    Kind::Assignment,
    Kind::AssignmentOperator,
    Kind::CompoundAssignment,
    Kind::ExprList,
    Kind::ExprStmt,
    Kind::IfStmt,
    Kind::Condition,
    Kind::Else,
    Kind::ReturnStmt,
    Kind::Call,
    Kind::MemberSelect,
    Kind::BinaryExpression,
    Kind::ParenExpr,
    Kind::Operator,
    Kind::Keyword,
    Kind::Identifier,
    Kind::Literal,
    Kind::StringLiteral,
];

impl Kind {
    /// Canonical vocabulary spelling of this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::CompilationUnit => "COMPILATION_UNIT",
            Kind::DeclList => "DECL_LIST",
            Kind::Declaration => "DECLARATION",
            Kind::Function => "FUNCTION",
            Kind::ParamList => "PARAM_LIST",
            Kind::Parameter => "PARAMETER",
            Kind::Block => "BLOCK",
            Kind::Assignment => "ASSIGNMENT",
            Kind::AssignmentOperator => "ASSIGNMENT_OPERATOR",
            Kind::CompoundAssignment => "COMPOUND_ASSIGNMENT",
            Kind::ExprList => "EXPR_LIST",
            Kind::ExprStmt => "EXPR_STMT",
            Kind::IfStmt => "IF_STMT",
            Kind::Condition => "CONDITION",
            Kind::Else => "ELSE",
            Kind::ReturnStmt => "RETURN_STMT",
            Kind::Call => "CALL",
            Kind::MemberSelect => "MEMBER_SELECT",
            Kind::BinaryExpression => "BINARY_EXPRESSION",
            Kind::ParenExpr => "PAREN_EXPR",
            Kind::Operator => "OPERATOR",
            Kind::Keyword => "KEYWORD",
            Kind::Identifier => "IDENTIFIER",
            Kind::Literal => "LITERAL",
            Kind::StringLiteral => "STRING_LITERAL",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_covers_every_tag_exactly_once() {
        let mut seen = std::collections::BTreeSet::new();
        for kind in VOCABULARY {
            assert!(seen.insert(*kind), "duplicate tag {kind}");
        }
        assert_eq!(seen.len(), VOCABULARY.len());
    }

    #[test]
    fn serializes_under_vocabulary_spelling() {
        for kind in VOCABULARY {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
            let back: Kind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *kind);
        }
    }
}
