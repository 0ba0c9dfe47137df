//! Arcane IR — spans, tokens, interned names, and AST node types.
//!
//! This crate holds only data, no evaluation logic: `arcane_lexer` produces
//! `Token`s from it, `arcane_eval::parser` builds `Expr`/`Stmt` trees into
//! its `ExprArena`, and `arcane_eval::exec` walks those trees.

mod arena;
pub mod ast;
mod interner;
mod name;
mod span;
mod token;

pub use arena::{ExprArena, ExprId, StmtId};
pub use ast::{AssignOp, BinaryOp, Expr, ExprKind, IncDecOp, Stmt, StmtKind, UnaryOp};
pub use interner::StringInterner;
pub use name::Name;
pub use span::Span;
pub use token::{Token, TokenKind};
