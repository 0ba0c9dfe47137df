//! Contiguous storage for one program's expression and statement nodes.
//!
//! Child references use `ExprId`/`StmtId` indices rather than `Box`, so the
//! tree-walking evaluator in `arcane_eval` can hold a `&ExprArena` alongside
//! a mutably borrowed `Interpreter` without fighting the borrow checker over
//! nested owned boxes.

use std::fmt;

use crate::ast::{Expr, ExprKind, Stmt, StmtKind};
use crate::Span;

#[cold]
#[inline(never)]
fn panic_capacity_exceeded(what: &str, len: usize) -> ! {
    panic!("arcane program exceeds {what} capacity: {len} nodes");
}

fn to_u32(value: usize, what: &str) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| panic_capacity_exceeded(what, value))
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

/// Owns every `Expr`/`Stmt` node parsed from one program.
#[derive(Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    stmts: Vec<Stmt>,
}

impl ExprArena {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alloc_expr(&mut self, kind: ExprKind, span: Span) -> ExprId {
        let id = ExprId(to_u32(self.exprs.len(), "expression"));
        self.exprs.push(Expr { kind, span });
        id
    }

    pub fn alloc_stmt(&mut self, kind: StmtKind, span: Span) -> StmtId {
        let id = StmtId(to_u32(self.stmts.len(), "statement"));
        self.stmts.push(Stmt { kind, span });
        id
    }

    #[must_use]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[must_use]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }
}
