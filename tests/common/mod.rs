//! Shared fixture: a small Go file with its hand-built native tree.
//!
//! The tree mirrors what a Go parser produces for [`SAMPLE`], with every
//! position computed as a 1-based byte offset into the source text. Tests
//! assert against these offsets, so the literal text and the tree must
//! stay in sync.

use uast::go::ast::*;
use uast::{Pos, SourceFile};

pub const SAMPLE: &str = "package main
import \"fmt\"
func main() {
    // This is a comment
    msg := \"hello, world\\n\"
    fmt.Printf( msg )
\tif (len(msg)) > 0 {
\t\tfmt.Println(msg)
    }
}
";

pub fn sample_source() -> SourceFile {
    SourceFile::new("main.go", SAMPLE)
}

fn ident(pos: u32, name: &str) -> Expr {
    Expr::Ident(Ident::new(Pos(pos), name))
}

/// `msg := "hello, world\n"`
fn assign() -> Stmt {
    Stmt::Assign(AssignStmt {
        lhs: vec![ident(70, "msg")],
        op_pos: Pos(74),
        op: AssignOp::Define,
        rhs: vec![Expr::Lit(BasicLit {
            pos: Pos(77),
            kind: LitKind::Str,
            value: "\"hello, world\\n\"".into(),
        })],
    })
}

/// `fmt.Printf( msg )`
fn printf_call() -> Stmt {
    Stmt::Expr(ExprStmt {
        expr: Expr::Call(Box::new(CallExpr {
            callee: Expr::Selector(Box::new(SelectorExpr {
                x: ident(98, "fmt"),
                dot: Pos(101),
                sel: Ident::new(Pos(102), "Printf"),
            })),
            lparen: Pos(108),
            args: vec![ident(110, "msg")],
            ellipsis: None,
            rparen: Pos(114),
        })),
    })
}

/// `if (len(msg)) > 0 { fmt.Println(msg) }`
fn if_stmt() -> Stmt {
    let cond = Expr::Binary(Box::new(BinaryExpr {
        x: Expr::Paren(Box::new(ParenExpr {
            lparen: Pos(120),
            expr: Expr::Call(Box::new(CallExpr {
                callee: ident(121, "len"),
                lparen: Pos(124),
                args: vec![ident(125, "msg")],
                ellipsis: None,
                rparen: Pos(128),
            })),
            rparen: Pos(129),
        })),
        op_pos: Pos(131),
        op: BinOp::Gt,
        y: Expr::Lit(BasicLit {
            pos: Pos(133),
            kind: LitKind::Int,
            value: "0".into(),
        }),
    }));
    let then = BlockStmt {
        lbrace: Pos(135),
        stmts: vec![Stmt::Expr(ExprStmt {
            expr: Expr::Call(Box::new(CallExpr {
                callee: Expr::Selector(Box::new(SelectorExpr {
                    x: ident(139, "fmt"),
                    dot: Pos(142),
                    sel: Ident::new(Pos(143), "Println"),
                })),
                lparen: Pos(150),
                args: vec![ident(151, "msg")],
                ellipsis: None,
                rparen: Pos(154),
            })),
        })],
        rbrace: Pos(160),
    };
    Stmt::If(IfStmt {
        if_pos: Pos(117),
        init: None,
        cond,
        then,
        else_arm: None,
    })
}

pub fn sample_file() -> File {
    File {
        package: Pos(1),
        name: Ident::new(Pos(9), "main"),
        decls: vec![
            Decl::Gen(GenDecl {
                pos: Pos(14),
                tok: DeclTok::Import,
                specs: vec![Spec::Import(ImportSpec {
                    alias: None,
                    path: BasicLit {
                        pos: Pos(21),
                        kind: LitKind::Str,
                        value: "\"fmt\"".into(),
                    },
                })],
            }),
            Decl::Func(FuncDecl {
                func_pos: Pos(27),
                name: Ident::new(Pos(32), "main"),
                params: vec![],
                body: Some(BlockStmt {
                    lbrace: Pos(39),
                    stmts: vec![assign(), printf_call(), if_stmt()],
                    rbrace: Pos(162),
                }),
            }),
        ],
    }
}
