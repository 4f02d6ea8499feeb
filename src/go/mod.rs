//! The Go front-end: native tree model and its canonicalization rules.

pub mod ast;
pub mod mapper;

pub use mapper::{map, Mapper};
