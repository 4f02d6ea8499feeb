//! Canonicalization of a Go native tree into the unified AST.
//!
//! One mapping rule per native construct, dispatched by exhaustive `match`.
//! Rules are all-or-nothing: a construct without a rule fails the whole
//! mapping with [`MapError::UnsupportedNode`] rather than emitting a
//! placeholder, so every tree that comes out is fully canonical.
//!
//! Every anchoring token the native tree records (keywords, operators,
//! delimiters) is materialized as a leaf, which is what lets child counts
//! stay stable across constructs with optional parts.

use tracing::{debug, trace};

use crate::errors::MapError;
use crate::go::ast;
use crate::kind::Kind;
use crate::node::{UastNode, UastToken};
use crate::source::{Pos, SourceFile};

/// Provenance label for token leaves the mapper synthesizes.
const TOKEN_NATIVE: &str = "Token";
/// Provenance label for expression-sequence wrapper nodes.
const EXPR_LIST_NATIVE: &str = "[Expr]";
/// Provenance label for the declaration-sequence wrapper under the root.
const DECL_LIST_NATIVE: &str = "[Decl]";
/// Provenance label for the parameter-sequence wrapper of a function.
const FIELD_LIST_NATIVE: &str = "[Field]";

/// Maps a parsed file into its unified form.
///
/// Convenience wrapper over [`Mapper`]; the common entry point.
pub fn map(file: &ast::File, source: &SourceFile) -> Result<UastNode, MapError> {
    Mapper::new(source).map_file(file)
}

/// Holds the source context a mapping run needs for offset resolution
/// and error spans. Borrows everything; cheap to construct per file.
pub struct Mapper<'a> {
    source: &'a SourceFile,
}

impl<'a> Mapper<'a> {
    pub fn new(source: &'a SourceFile) -> Self {
        Mapper { source }
    }

    pub fn map_file(&self, file: &ast::File) -> Result<UastNode, MapError> {
        debug!(file = %self.source.name(), decls = file.decls.len(), "mapping compilation unit");
        let decls = file
            .decls
            .iter()
            .map(|d| self.map_decl(d))
            .collect::<Result<Vec<_>, _>>()?;
        let decl_list = UastNode::composite(Kind::DeclList, DECL_LIST_NATIVE, decls);
        let anchor = self.token(file.package, &file.name.name, file.native_name())?;
        Ok(UastNode::anchored(
            Kind::CompilationUnit,
            file.native_name(),
            anchor,
            vec![decl_list],
        ))
    }

    fn map_decl(&self, decl: &ast::Decl) -> Result<UastNode, MapError> {
        match decl {
            ast::Decl::Func(d) => self.map_func_decl(d),
            ast::Decl::Gen(d) => self.map_gen_decl(d),
        }
    }

    fn map_func_decl(&self, decl: &ast::FuncDecl) -> Result<UastNode, MapError> {
        let mut children = Vec::new();
        children.push(self.map_ident(&decl.name)?);
        if !decl.params.is_empty() {
            let params = decl
                .params
                .iter()
                .map(|f| self.map_field(f))
                .collect::<Result<Vec<_>, _>>()?;
            children.push(UastNode::composite(
                Kind::ParamList,
                FIELD_LIST_NATIVE,
                params,
            ));
        }
        if let Some(body) = &decl.body {
            children.push(self.map_block_stmt(body)?);
        }
        Ok(UastNode::composite(
            Kind::Function,
            decl.native_name(),
            children,
        ))
    }

    /// One parameter group becomes one PARAMETER node: the declared names
    /// followed by their shared type expression.
    fn map_field(&self, field: &ast::Field) -> Result<UastNode, MapError> {
        let mut children = Vec::new();
        for name in &field.names {
            children.push(self.map_ident(name)?);
        }
        children.push(self.map_expr(&field.ty)?);
        Ok(UastNode::composite(
            Kind::Parameter,
            field.native_name(),
            children,
        ))
    }

    fn map_gen_decl(&self, decl: &ast::GenDecl) -> Result<UastNode, MapError> {
        let mut children = vec![self.keyword(decl.pos, decl.tok.as_str())?];
        for spec in &decl.specs {
            match spec {
                ast::Spec::Import(s) => {
                    if let Some(alias) = &s.alias {
                        children.push(self.map_ident(alias)?);
                    }
                    children.push(self.map_lit(&s.path)?);
                }
                ast::Spec::Value(s) => {
                    for name in &s.names {
                        children.push(self.map_ident(name)?);
                    }
                    if let Some(ty) = &s.ty {
                        children.push(self.map_expr(ty)?);
                    }
                    if !s.values.is_empty() {
                        children.push(self.map_expr_list(Kind::ExprList, &s.values)?);
                    }
                }
            }
        }
        Ok(UastNode::composite(
            Kind::Declaration,
            decl.native_name(),
            children,
        ))
    }

    pub fn map_stmt(&self, stmt: &ast::Stmt) -> Result<UastNode, MapError> {
        match stmt {
            ast::Stmt::Assign(s) => self.map_assign_stmt(s),
            ast::Stmt::Expr(s) => self.map_expr_stmt(s),
            ast::Stmt::If(s) => self.map_if_stmt(s),
            ast::Stmt::Block(s) => self.map_block_stmt(s),
            ast::Stmt::Return(s) => self.map_return_stmt(s),
            // `go f()` spans the keyword.
            ast::Stmt::Go(s) => Err(self.unsupported(s.native_name(), stmt.pos(), 2)),
        }
    }

    fn map_assign_stmt(&self, stmt: &ast::AssignStmt) -> Result<UastNode, MapError> {
        let lhs = self.map_expr_list(Kind::ExprList, &stmt.lhs)?;
        let op = UastNode::leaf(
            Kind::AssignmentOperator,
            TOKEN_NATIVE,
            self.token(stmt.op_pos, stmt.op.as_str(), stmt.native_name())?,
        );
        let rhs = self.map_expr_list(Kind::ExprList, &stmt.rhs)?;
        let node = UastNode::composite(Kind::Assignment, stmt.native_name(), vec![lhs, op, rhs]);
        if stmt.op.is_compound() {
            Ok(node.with_kind(Kind::CompoundAssignment))
        } else {
            Ok(node)
        }
    }

    fn map_expr_stmt(&self, stmt: &ast::ExprStmt) -> Result<UastNode, MapError> {
        let expr = self.map_expr(&stmt.expr)?;
        Ok(UastNode::composite(
            Kind::ExprStmt,
            stmt.native_name(),
            vec![expr],
        ))
    }

    fn map_if_stmt(&self, stmt: &ast::IfStmt) -> Result<UastNode, MapError> {
        let mut children = vec![self.keyword(stmt.if_pos, "if")?];
        if let Some(init) = &stmt.init {
            children.push(self.map_stmt(init)?);
        }
        children.push(self.map_expr(&stmt.cond)?.with_kind(Kind::Condition));
        children.push(self.map_block_stmt(&stmt.then)?);
        if let Some(arm) = &stmt.else_arm {
            children.push(self.keyword(arm.else_pos, "else")?);
            children.push(self.map_stmt(&arm.stmt)?.with_kind(Kind::Else));
        }
        Ok(UastNode::composite(
            Kind::IfStmt,
            stmt.native_name(),
            children,
        ))
    }

    fn map_block_stmt(&self, block: &ast::BlockStmt) -> Result<UastNode, MapError> {
        let mut children = vec![self.keyword(block.lbrace, "{")?];
        for stmt in &block.stmts {
            children.push(self.map_stmt(stmt)?);
        }
        children.push(self.keyword(block.rbrace, "}")?);
        Ok(UastNode::composite(
            Kind::Block,
            block.native_name(),
            children,
        ))
    }

    fn map_return_stmt(&self, stmt: &ast::ReturnStmt) -> Result<UastNode, MapError> {
        let mut children = vec![self.keyword(stmt.pos, "return")?];
        if !stmt.results.is_empty() {
            children.push(self.map_expr_list(Kind::ExprList, &stmt.results)?);
        }
        Ok(UastNode::composite(
            Kind::ReturnStmt,
            stmt.native_name(),
            children,
        ))
    }

    pub fn map_expr(&self, expr: &ast::Expr) -> Result<UastNode, MapError> {
        match expr {
            ast::Expr::Ident(e) => self.map_ident(e),
            ast::Expr::Lit(e) => self.map_lit(e),
            ast::Expr::Call(e) => self.map_call_expr(e),
            ast::Expr::Selector(e) => self.map_selector_expr(e),
            ast::Expr::Binary(e) => self.map_binary_expr(e),
            ast::Expr::Paren(e) => self.map_paren_expr(e),
            // `func` keyword spans the gap.
            ast::Expr::FuncLit(e) => Err(self.unsupported(e.native_name(), expr.pos(), 4)),
        }
    }

    fn map_ident(&self, ident: &ast::Ident) -> Result<UastNode, MapError> {
        Ok(UastNode::leaf(
            Kind::Identifier,
            ident.native_name(),
            self.token(ident.pos, &ident.name, ident.native_name())?,
        ))
    }

    fn map_lit(&self, lit: &ast::BasicLit) -> Result<UastNode, MapError> {
        let node = UastNode::leaf(
            Kind::Literal,
            lit.native_name(),
            self.token(lit.pos, &lit.value, lit.native_name())?,
        );
        if lit.kind == ast::LitKind::Str {
            Ok(node.with_kind(Kind::StringLiteral))
        } else {
            Ok(node)
        }
    }

    fn map_call_expr(&self, call: &ast::CallExpr) -> Result<UastNode, MapError> {
        let mut children = vec![self.map_expr(&call.callee)?, self.keyword(call.lparen, "(")?];
        for arg in &call.args {
            children.push(self.map_expr(arg)?);
        }
        if let Some(ellipsis) = call.ellipsis {
            children.push(self.keyword(ellipsis, "...")?);
        }
        children.push(self.keyword(call.rparen, ")")?);
        Ok(UastNode::composite(
            Kind::Call,
            call.native_name(),
            children,
        ))
    }

    fn map_selector_expr(&self, sel: &ast::SelectorExpr) -> Result<UastNode, MapError> {
        let children = vec![
            self.map_expr(&sel.x)?,
            self.keyword(sel.dot, ".")?,
            self.map_ident(&sel.sel)?,
        ];
        Ok(UastNode::composite(
            Kind::MemberSelect,
            sel.native_name(),
            children,
        ))
    }

    fn map_binary_expr(&self, bin: &ast::BinaryExpr) -> Result<UastNode, MapError> {
        let op = UastNode::leaf(
            Kind::Operator,
            TOKEN_NATIVE,
            self.token(bin.op_pos, bin.op.as_str(), bin.native_name())?,
        );
        let children = vec![self.map_expr(&bin.x)?, op, self.map_expr(&bin.y)?];
        Ok(UastNode::composite(
            Kind::BinaryExpression,
            bin.native_name(),
            children,
        ))
    }

    fn map_paren_expr(&self, paren: &ast::ParenExpr) -> Result<UastNode, MapError> {
        let children = vec![
            self.keyword(paren.lparen, "(")?,
            self.map_expr(&paren.expr)?,
            self.keyword(paren.rparen, ")")?,
        ];
        Ok(UastNode::composite(
            Kind::ParenExpr,
            paren.native_name(),
            children,
        ))
    }

    /// Wraps an expression sequence so multi-value positions keep a single
    /// child slot regardless of arity.
    pub fn map_expr_list(&self, kind: Kind, exprs: &[ast::Expr]) -> Result<UastNode, MapError> {
        let children = exprs
            .iter()
            .map(|e| self.map_expr(e))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(UastNode::composite(kind, EXPR_LIST_NATIVE, children))
    }

    fn token(
        &self,
        pos: Pos,
        value: &str,
        construct: &'static str,
    ) -> Result<UastToken, MapError> {
        let offset = self.source.offset(pos, construct)?;
        Ok(UastToken {
            offset,
            value: value.to_owned(),
        })
    }

    fn keyword(&self, pos: Pos, text: &'static str) -> Result<UastNode, MapError> {
        Ok(UastNode::leaf(
            Kind::Keyword,
            TOKEN_NATIVE,
            self.token(pos, text, TOKEN_NATIVE)?,
        ))
    }

    fn unsupported(&self, construct: &'static str, pos: Pos, len: usize) -> MapError {
        trace!(construct, pos = pos.0, "no mapping rule");
        let span = self
            .source
            .offset(pos, construct)
            .ok()
            .map(|offset| ((offset - 1), len).into());
        MapError::UnsupportedNode { construct, span }
    }
}
