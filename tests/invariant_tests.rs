//! Structural guarantees that hold for every mapped tree, checked on the
//! shared fixture and on generated expression trees.

mod common;

use proptest::prelude::*;

use common::{sample_file, sample_source};
use uast::go::ast::*;
use uast::go::{map, Mapper};
use uast::{registry, Kind, Pos, SourceFile, UastNode};

/// Recursively asserts the node-shape guarantees: kinds and provenance are
/// never empty, token payloads stay on leaves (the compilation unit being
/// the one anchored exception), sibling first-token offsets never go
/// backwards, and every provenance label is a registered one.
fn check_invariants(node: &UastNode) {
    assert!(!node.kinds.is_empty(), "node without kinds: {node:?}");
    assert!(!node.native_node.is_empty(), "node without provenance");
    assert!(
        registry::is_supported(&node.native_node),
        "unregistered provenance label {:?}",
        node.native_node
    );
    if node.token.is_some() && !node.children.is_empty() {
        assert!(
            node.is(&[Kind::CompilationUnit]),
            "anchored token on non-root {:?}",
            node.kinds
        );
    }
    let mut last = 0;
    for child in &node.children {
        if let Some(token) = child.first_token() {
            assert!(
                token.offset >= last,
                "sibling order violated: {} after {last}",
                token.offset
            );
            last = token.offset;
        }
        check_invariants(child);
    }
}

#[test]
fn sample_tree_upholds_invariants() {
    let source = sample_source();
    let root = map(&sample_file(), &source).unwrap();
    check_invariants(&root);
}

#[test]
fn mapping_is_idempotent() {
    let source = sample_source();
    let file = sample_file();
    let first = map(&file, &source).unwrap();
    let second = map(&file, &source).unwrap();
    assert_eq!(first, second);
}

#[test]
fn mapped_tree_survives_serialization() {
    let source = sample_source();
    let root = map(&sample_file(), &source).unwrap();
    let json = serde_json::to_string(&root).unwrap();
    let back: UastNode = serde_json::from_str(&json).unwrap();
    assert_eq!(root, back);
}

#[test]
fn token_sequence_reconstructs_leading_keyword() {
    let source = sample_source();
    let root = map(&sample_file(), &source).unwrap();
    let tokens = root.tokens();
    assert!(!tokens.is_empty());
    // The root anchor carries the package name at the keyword's offset.
    assert_eq!(tokens[0].offset, 1);
}

// ---------------------------------------------------------------------------
// Generated trees
// ---------------------------------------------------------------------------

/// Assigns strictly increasing positions in token order, the order a real
/// parser would have seen them.
fn renumber(expr: &mut Expr, counter: &mut u32) {
    let mut next = |counter: &mut u32| {
        *counter += 2;
        Pos(*counter)
    };
    match expr {
        Expr::Ident(e) => e.pos = next(counter),
        Expr::Lit(e) => e.pos = next(counter),
        Expr::Call(e) => {
            renumber(&mut e.callee, counter);
            e.lparen = next(counter);
            for arg in &mut e.args {
                renumber(arg, counter);
            }
            if let Some(ellipsis) = &mut e.ellipsis {
                *ellipsis = next(counter);
            }
            e.rparen = next(counter);
        }
        Expr::Selector(e) => {
            renumber(&mut e.x, counter);
            e.dot = next(counter);
            e.sel.pos = next(counter);
        }
        Expr::Binary(e) => {
            renumber(&mut e.x, counter);
            e.op_pos = next(counter);
            renumber(&mut e.y, counter);
        }
        Expr::Paren(e) => {
            e.lparen = next(counter);
            renumber(&mut e.expr, counter);
            e.rparen = next(counter);
        }
        Expr::FuncLit(_) => unreachable!("generator never emits function literals"),
    }
}

fn arb_expr() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        "[a-z][a-z0-9]{0,6}".prop_map(|name| Expr::Ident(Ident::new(Pos(1), name))),
        (0u32..10_000).prop_map(|n| Expr::Lit(BasicLit {
            pos: Pos(1),
            kind: LitKind::Int,
            value: n.to_string(),
        })),
    ];
    leaf.prop_recursive(4, 24, 3, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(x, y)| {
                Expr::Binary(Box::new(BinaryExpr {
                    x,
                    op_pos: Pos(1),
                    op: BinOp::Add,
                    y,
                }))
            }),
            inner.clone().prop_map(|expr| {
                Expr::Paren(Box::new(ParenExpr {
                    lparen: Pos(1),
                    expr,
                    rparen: Pos(1),
                }))
            }),
            (inner.clone(), prop::collection::vec(inner.clone(), 0..3)).prop_map(
                |(callee, args)| {
                    Expr::Call(Box::new(CallExpr {
                        callee,
                        lparen: Pos(1),
                        args,
                        ellipsis: None,
                        rparen: Pos(1),
                    }))
                }
            ),
            inner.prop_map(|x| {
                Expr::Selector(Box::new(SelectorExpr {
                    x,
                    dot: Pos(1),
                    sel: Ident::new(Pos(1), "field"),
                }))
            }),
        ]
    })
}

proptest! {
    #[test]
    fn generated_expressions_uphold_invariants(mut expr in arb_expr()) {
        let mut counter = 0;
        renumber(&mut expr, &mut counter);
        let backing = " ".repeat(4096);
        let source = SourceFile::new("gen.go", &backing);
        let node = Mapper::new(&source).map_expr(&expr).unwrap();
        check_invariants(&node);

        // Pre-order token offsets mirror the assignment order exactly.
        let offsets: Vec<_> = node.tokens().iter().map(|t| t.offset).collect();
        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(offsets, sorted);
    }

    #[test]
    fn generated_expressions_round_trip_json(mut expr in arb_expr()) {
        let mut counter = 0;
        renumber(&mut expr, &mut counter);
        let backing = " ".repeat(4096);
        let source = SourceFile::new("gen.go", &backing);
        let node = Mapper::new(&source).map_expr(&expr).unwrap();
        let json = serde_json::to_string(&node).unwrap();
        let back: UastNode = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(node, back);
    }
}
