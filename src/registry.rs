//! Audit surface for mapping coverage.
//!
//! Dispatch itself happens by `match` in the mapper; this registry exists
//! so callers and tests can enumerate which native constructs produce
//! output, and so coverage gaps are a queryable fact rather than something
//! discovered by feeding trees in.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;

/// Native labels the mapper has a rule for, including the synthetic
/// sequence and token labels it attaches to nodes of its own making.
static SUPPORTED: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    BTreeSet::from([
        "File",
        "FuncDecl",
        "GenDecl",
        "Field",
        "AssignStmt",
        "ExprStmt",
        "IfStmt",
        "BlockStmt",
        "ReturnStmt",
        "CallExpr",
        "SelectorExpr",
        "BinaryExpr",
        "ParenExpr",
        "Ident",
        "BasicLit",
        "Token",
        "[Expr]",
        "[Decl]",
        "[Field]",
    ])
});

/// All native labels with a mapping rule, sorted.
pub fn supported_variants() -> impl Iterator<Item = &'static str> {
    SUPPORTED.iter().copied()
}

pub fn is_supported(native: &str) -> bool {
    SUPPORTED.contains(native)
}
