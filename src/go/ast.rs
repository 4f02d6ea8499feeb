//! The Go-shaped native syntax tree: the mapper's input boundary.
//!
//! These are the types a Go front-end parser populates. They model syntax
//! only, carry [`Pos`] markers for every anchoring token, and are borrowed
//! read-only by the mapper — it never mutates or retains them.
//!
//! Each node exposes `native_name`, the provenance label recorded on the
//! UAST nodes it produces. The sum types are deliberately closed: dispatch
//! is an exhaustive `match`, so adding a variant forces a mapping decision
//! at compile time. Two variants ship without a rule on purpose
//! ([`Expr::FuncLit`], [`Stmt::Go`]) — they exercise the classification-gap
//! policy.

use serde::{Deserialize, Serialize};

use crate::source::Pos;

/// A compilation unit: one parsed source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Position of the `package` keyword — the unit's anchor.
    pub package: Pos,
    /// The package name identifier.
    pub name: Ident,
    pub decls: Vec<Decl>,
}

impl File {
    pub fn native_name(&self) -> &'static str {
        "File"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ident {
    pub pos: Pos,
    pub name: String,
}

impl Ident {
    pub fn new(pos: Pos, name: impl Into<String>) -> Self {
        Ident {
            pos,
            name: name.into(),
        }
    }

    pub fn native_name(&self) -> &'static str {
        "Ident"
    }
}

/// A literal as written, quoting and escapes included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicLit {
    pub pos: Pos,
    pub kind: LitKind,
    /// Raw source text, e.g. `"hello\n"` including the quotes.
    pub value: String,
}

impl BasicLit {
    pub fn native_name(&self) -> &'static str {
        "BasicLit"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LitKind {
    Int,
    Float,
    Char,
    Str,
}

// ---------------------------------------------------------------------------
// Declarations
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Decl {
    Func(FuncDecl),
    Gen(GenDecl),
}

impl Decl {
    pub fn native_name(&self) -> &'static str {
        match self {
            Decl::Func(d) => d.native_name(),
            Decl::Gen(d) => d.native_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncDecl {
    /// Position of the `func` keyword.
    pub func_pos: Pos,
    pub name: Ident,
    pub params: Vec<Field>,
    /// Absent for external (body-less) declarations.
    pub body: Option<BlockStmt>,
}

impl FuncDecl {
    pub fn native_name(&self) -> &'static str {
        "FuncDecl"
    }
}

/// One parameter group: `a, b int`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub names: Vec<Ident>,
    pub ty: Expr,
}

impl Field {
    pub fn native_name(&self) -> &'static str {
        "Field"
    }
}

/// An `import`, `const` or `var` declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenDecl {
    /// Position of the declaration keyword.
    pub pos: Pos,
    pub tok: DeclTok,
    pub specs: Vec<Spec>,
}

impl GenDecl {
    pub fn native_name(&self) -> &'static str {
        "GenDecl"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeclTok {
    Import,
    Const,
    Var,
}

impl DeclTok {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclTok::Import => "import",
            DeclTok::Const => "const",
            DeclTok::Var => "var",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Spec {
    Import(ImportSpec),
    Value(ValueSpec),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSpec {
    pub alias: Option<Ident>,
    pub path: BasicLit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueSpec {
    pub names: Vec<Ident>,
    pub ty: Option<Expr>,
    pub values: Vec<Expr>,
}

// ---------------------------------------------------------------------------
// Statements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    Assign(AssignStmt),
    Expr(ExprStmt),
    If(IfStmt),
    Block(BlockStmt),
    Return(ReturnStmt),
    /// Goroutine launch. No mapping rule yet.
    Go(GoStmt),
}

impl Stmt {
    pub fn native_name(&self) -> &'static str {
        match self {
            Stmt::Assign(s) => s.native_name(),
            Stmt::Expr(s) => s.native_name(),
            Stmt::If(s) => s.native_name(),
            Stmt::Block(s) => s.native_name(),
            Stmt::Return(s) => s.native_name(),
            Stmt::Go(s) => s.native_name(),
        }
    }

    /// Best-effort position of the statement's first token.
    pub fn pos(&self) -> Pos {
        match self {
            Stmt::Assign(s) => s.lhs.first().map(Expr::pos).unwrap_or(Pos::NONE),
            Stmt::Expr(s) => s.expr.pos(),
            Stmt::If(s) => s.if_pos,
            Stmt::Block(s) => s.lbrace,
            Stmt::Return(s) => s.pos,
            Stmt::Go(s) => s.pos,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignStmt {
    pub lhs: Vec<Expr>,
    pub op_pos: Pos,
    pub op: AssignOp,
    pub rhs: Vec<Expr>,
}

impl AssignStmt {
    pub fn native_name(&self) -> &'static str {
        "AssignStmt"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssignOp {
    /// `=`
    Assign,
    /// `:=`
    Define,
    /// `+=`
    AddAssign,
    /// `-=`
    SubAssign,
}

impl AssignOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Define => ":=",
            AssignOp::AddAssign => "+=",
            AssignOp::SubAssign => "-=",
        }
    }

    /// True for operators that combine an operation with the assignment.
    pub fn is_compound(&self) -> bool {
        matches!(self, AssignOp::AddAssign | AssignOp::SubAssign)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExprStmt {
    pub expr: Expr,
}

impl ExprStmt {
    pub fn native_name(&self) -> &'static str {
        "ExprStmt"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub if_pos: Pos,
    pub init: Option<Box<Stmt>>,
    pub cond: Expr,
    pub then: BlockStmt,
    pub else_arm: Option<ElseArm>,
}

impl IfStmt {
    pub fn native_name(&self) -> &'static str {
        "IfStmt"
    }
}

/// The `else` keyword plus its branch (a block or a chained `if`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElseArm {
    pub else_pos: Pos,
    pub stmt: Box<Stmt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStmt {
    pub lbrace: Pos,
    pub stmts: Vec<Stmt>,
    pub rbrace: Pos,
}

impl BlockStmt {
    pub fn native_name(&self) -> &'static str {
        "BlockStmt"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    pub pos: Pos,
    pub results: Vec<Expr>,
}

impl ReturnStmt {
    pub fn native_name(&self) -> &'static str {
        "ReturnStmt"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoStmt {
    pub pos: Pos,
    pub call: CallExpr,
}

impl GoStmt {
    pub fn native_name(&self) -> &'static str {
        "GoStmt"
    }
}

// ---------------------------------------------------------------------------
// Expressions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Ident(Ident),
    Lit(BasicLit),
    Call(Box<CallExpr>),
    Selector(Box<SelectorExpr>),
    Binary(Box<BinaryExpr>),
    Paren(Box<ParenExpr>),
    /// Anonymous function literal. No mapping rule yet.
    FuncLit(Box<FuncLit>),
}

impl Expr {
    pub fn native_name(&self) -> &'static str {
        match self {
            Expr::Ident(e) => e.native_name(),
            Expr::Lit(e) => e.native_name(),
            Expr::Call(e) => e.native_name(),
            Expr::Selector(e) => e.native_name(),
            Expr::Binary(e) => e.native_name(),
            Expr::Paren(e) => e.native_name(),
            Expr::FuncLit(e) => e.native_name(),
        }
    }

    /// Position of the expression's first token.
    pub fn pos(&self) -> Pos {
        match self {
            Expr::Ident(e) => e.pos,
            Expr::Lit(e) => e.pos,
            Expr::Call(e) => e.callee.pos(),
            Expr::Selector(e) => e.x.pos(),
            Expr::Binary(e) => e.x.pos(),
            Expr::Paren(e) => e.lparen,
            Expr::FuncLit(e) => e.func_pos,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpr {
    pub callee: Expr,
    pub lparen: Pos,
    pub args: Vec<Expr>,
    /// Position of a trailing `...` when the last argument is spread.
    pub ellipsis: Option<Pos>,
    pub rparen: Pos,
}

impl CallExpr {
    pub fn native_name(&self) -> &'static str {
        "CallExpr"
    }
}

/// Member selection: `x.sel`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectorExpr {
    pub x: Expr,
    pub dot: Pos,
    pub sel: Ident,
}

impl SelectorExpr {
    pub fn native_name(&self) -> &'static str {
        "SelectorExpr"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub x: Expr,
    pub op_pos: Pos,
    pub op: BinOp,
    pub y: Expr,
}

impl BinaryExpr {
    pub fn native_name(&self) -> &'static str {
        "BinaryExpr"
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    LAnd,
    LOr,
}

impl BinOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Gt => ">",
            BinOp::Le => "<=",
            BinOp::Ge => ">=",
            BinOp::LAnd => "&&",
            BinOp::LOr => "||",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParenExpr {
    pub lparen: Pos,
    pub expr: Expr,
    pub rparen: Pos,
}

impl ParenExpr {
    pub fn native_name(&self) -> &'static str {
        "ParenExpr"
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuncLit {
    pub func_pos: Pos,
    pub body: BlockStmt,
}

impl FuncLit {
    pub fn native_name(&self) -> &'static str {
        "FuncLit"
    }
}
