//! Canonicalization of native syntax trees into a unified AST.
//!
//! A unified tree is a single node shape ([`UastNode`]) carrying an ordered
//! set of semantic kinds, optional token payload, and a provenance label
//! naming the native construct it came from. Language-independent rules run
//! against kinds and tokens without knowing the source language; the
//! provenance label keeps every node traceable back to its origin.
//!
//! The `go` module holds the first front-end: a Go-shaped native model and
//! the mapper that canonicalizes it.
//!
//! ```
//! use uast::go::{ast, map};
//! use uast::{Kind, SourceFile};
//!
//! let source = SourceFile::new("tiny.go", "package demo\n");
//! let file = ast::File {
//!     package: uast::Pos(1),
//!     name: ast::Ident::new(uast::Pos(9), "demo"),
//!     decls: vec![],
//! };
//! let root = map(&file, &source).unwrap();
//! assert!(root.is(&[Kind::CompilationUnit]));
//! ```

pub mod errors;
pub mod go;
pub mod kind;
pub mod node;
pub mod registry;
pub mod source;

pub use errors::MapError;
pub use kind::{Kind, TAXONOMY_VERSION, VOCABULARY};
pub use node::{UastNode, UastToken};
pub use source::{Pos, SourceFile};
