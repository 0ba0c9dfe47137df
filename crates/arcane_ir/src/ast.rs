//! AST node shapes.
//!
//! Per the REDESIGN FLAGS in `spec.md` §9 ("Token-range loop replay"), the
//! source's trick of re-seeking a token cursor to replay a loop's condition
//! and post-expression is replaced here by a small retained tree: `for`/
//! `while` headers and bodies are parsed once by `arcane_eval::parser` and
//! then re-evaluated node-by-node on each iteration, with identical
//! observable side effects and ordering.

use crate::{ExprId, Name, Span, StmtId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Add,
    Sub,
    Mul,
    Div,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncDecOp {
    Inc,
    Dec,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignOp {
    /// `=`
    Set,
    /// `+=`
    AddAssign,
}

/// An expression node (`spec.md` §4.3).
#[derive(Debug, Clone)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum ExprKind {
    Int(i64),
    Double(f64),
    Bool(bool),
    /// Interned raw literal text; `${name}` substitution happens when this
    /// node is evaluated (`spec.md` §4.4), not when it is parsed.
    Str(Name),
    Ident(Name),
    Assign {
        name: Name,
        op: AssignOp,
        value: ExprId,
    },
    Binary {
        op: BinaryOp,
        lhs: ExprId,
        rhs: ExprId,
    },
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    /// `++x` / `--x` — returns the *new* value (`spec.md` §9 Open Question).
    PrefixIncDec {
        name: Name,
        op: IncDecOp,
    },
    /// `x++` / `x--` — returns the *original* value.
    PostfixIncDec {
        name: Name,
        op: IncDecOp,
    },
    /// `name(arg1, arg2, ...)` — a host-function call (`spec.md` §4.3, §6).
    Call {
        callee: Name,
        args: Vec<ExprId>,
    },
    /// `base[i]` possibly chained: `base[i][j]...`.
    Index {
        base: ExprId,
        indices: Vec<ExprId>,
    },
}

/// A statement node (`spec.md` §4.5).
#[derive(Debug, Clone)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum StmtKind {
    Expr(ExprId),
    Return(ExprId),
    Break,
    Continue,
    /// `if (c1) b1 else if (c2) b2 ... else be`. Branches are evaluated in
    /// order and the first truthy one's block runs; no later branch's
    /// condition is evaluated or block executed (`spec.md` §9 Open
    /// Question, resolved).
    If {
        branches: Vec<(ExprId, Vec<StmtId>)>,
        else_branch: Option<Vec<StmtId>>,
    },
    While {
        cond: ExprId,
        body: Vec<StmtId>,
    },
    For {
        init: Option<ExprId>,
        cond: Option<ExprId>,
        post: Option<ExprId>,
        body: Vec<StmtId>,
    },
}
