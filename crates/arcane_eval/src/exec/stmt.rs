//! Statement execution (`spec.md` §4.5).
//!
//! `for`/`while` headers were parsed once into retained AST nodes; each
//! iteration here re-evaluates those nodes instead of re-seeking a token
//! cursor (`spec.md` §9 REDESIGN FLAGS).

use arcane_ir::{ExprArena, ExprId, StmtId, StmtKind};

use crate::errors::{ControlSignal, EvalError};
use crate::exec::expr::eval_expr;
use crate::interpreter::Interpreter;

pub fn exec_stmt(interp: &mut Interpreter, arena: &ExprArena, id: StmtId) -> Result<(), EvalError> {
    interp.check_deadline()?;
    let stmt = arena.stmt(id);
    tracing::trace!(span = ?stmt.span, "dispatch statement");
    match &stmt.kind {
        StmtKind::Expr(expr) => {
            eval_expr(interp, arena, *expr)?;
            Ok(())
        }
        StmtKind::Return(expr) => {
            let value = eval_expr(interp, arena, *expr)?;
            Err(EvalError::return_signal(value))
        }
        StmtKind::Break => Err(EvalError::break_signal()),
        StmtKind::Continue => Err(EvalError::continue_signal()),
        StmtKind::If { branches, else_branch } => exec_if(interp, arena, branches, else_branch),
        StmtKind::While { cond, body } => exec_while(interp, arena, *cond, body),
        StmtKind::For { init, cond, post, body } => exec_for(interp, arena, *init, *cond, *post, body),
    }
}

pub fn exec_block(interp: &mut Interpreter, arena: &ExprArena, stmts: &[StmtId]) -> Result<(), EvalError> {
    for &id in stmts {
        exec_stmt(interp, arena, id)?;
    }
    Ok(())
}

/// Branches run in source order; the first whose condition is truthy has
/// its block executed and no later condition is evaluated (`spec.md` §9
/// Open Question, resolved).
fn exec_if(
    interp: &mut Interpreter,
    arena: &ExprArena,
    branches: &[(ExprId, Vec<StmtId>)],
    else_branch: &Option<Vec<StmtId>>,
) -> Result<(), EvalError> {
    for (cond, block) in branches {
        let span = arena.expr(*cond).span;
        let value = eval_expr(interp, arena, *cond)?;
        if value.truthy(span)? {
            return exec_block(interp, arena, block);
        }
    }
    if let Some(block) = else_branch {
        return exec_block(interp, arena, block);
    }
    Ok(())
}

fn exec_while(interp: &mut Interpreter, arena: &ExprArena, cond: ExprId, body: &[StmtId]) -> Result<(), EvalError> {
    loop {
        let span = arena.expr(cond).span;
        let value = eval_expr(interp, arena, cond)?;
        if !value.truthy(span)? {
            break;
        }
        match exec_block(interp, arena, body) {
            Ok(()) => {}
            Err(EvalError::Control(ControlSignal::Break)) => break,
            Err(EvalError::Control(ControlSignal::Continue)) => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

fn exec_for(
    interp: &mut Interpreter,
    arena: &ExprArena,
    init: Option<ExprId>,
    cond: Option<ExprId>,
    post: Option<ExprId>,
    body: &[StmtId],
) -> Result<(), EvalError> {
    if let Some(init) = init {
        eval_expr(interp, arena, init)?;
    }
    loop {
        if let Some(cond) = cond {
            let span = arena.expr(cond).span;
            let value = eval_expr(interp, arena, cond)?;
            if !value.truthy(span)? {
                break;
            }
        }
        // `break` ends the loop; `continue` ends only the current
        // iteration and still runs the post-expression (`spec.md` §4.5).
        match exec_block(interp, arena, body) {
            Ok(()) => {}
            Err(EvalError::Control(ControlSignal::Break)) => break,
            Err(EvalError::Control(ControlSignal::Continue)) => {}
            Err(err) => return Err(err),
        }
        if let Some(post) = post {
            eval_expr(interp, arena, post)?;
        }
    }
    Ok(())
}
