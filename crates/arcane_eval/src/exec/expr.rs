//! Expression evaluation (`spec.md` §4.3, §4.4).

use arcane_ir::{AssignOp, BinaryOp, ExprArena, ExprId, ExprKind, IncDecOp, Span};

use crate::errors::EvalError;
use crate::interpreter::Interpreter;
use crate::operators::evaluate_binary;
use crate::template;
use crate::unary_operators::evaluate_unary;
use crate::value::Value;

pub fn eval_expr(interp: &mut Interpreter, arena: &ExprArena, id: ExprId) -> Result<Value, EvalError> {
    let expr = arena.expr(id);
    let span = expr.span;
    match &expr.kind {
        ExprKind::Int(n) => Ok(Value::Int(*n)),
        ExprKind::Double(n) => Ok(Value::Double(*n)),
        ExprKind::Bool(b) => Ok(Value::Bool(*b)),
        ExprKind::Str(name) => {
            let raw = interp.interner.lookup(*name).to_string();
            let expanded = template::expand(&raw, &interp.env, &mut interp.interner, span)?;
            Ok(Value::str(expanded))
        }
        ExprKind::Ident(name) => interp.env.get(*name, &interp.interner, span),
        ExprKind::Assign { name, op, value } => eval_assign(interp, arena, *name, *op, *value, span),
        ExprKind::Binary { op, lhs, rhs } => {
            // Both operands are always evaluated: `&&`/`||` do not
            // short-circuit (`spec.md` §5, §9 REDESIGN FLAGS).
            let lhs_value = eval_expr(interp, arena, *lhs)?;
            let rhs_value = eval_expr(interp, arena, *rhs)?;
            evaluate_binary(*op, lhs_value, rhs_value, span)
        }
        ExprKind::Unary { op, operand } => {
            let value = eval_expr(interp, arena, *operand)?;
            evaluate_unary(*op, value, span)
        }
        ExprKind::PrefixIncDec { name, op } => eval_inc_dec(interp, *name, *op, span, true),
        ExprKind::PostfixIncDec { name, op } => eval_inc_dec(interp, *name, *op, span, false),
        ExprKind::Call { callee, args } => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(eval_expr(interp, arena, *arg)?);
            }
            tracing::trace!(function = %interp.interner.lookup(*callee), argc = values.len(), "host call");
            interp.builtins.call(*callee, &values, &interp.interner, span)
        }
        ExprKind::Index { base, indices } => {
            let mut current = eval_expr(interp, arena, *base)?;
            for idx_id in indices {
                let idx_value = eval_expr(interp, arena, *idx_id)?;
                current = index_once(current, &idx_value, span)?;
            }
            Ok(current)
        }
    }
}

fn eval_assign(
    interp: &mut Interpreter,
    arena: &ExprArena,
    name: arcane_ir::Name,
    op: AssignOp,
    value: ExprId,
    span: Span,
) -> Result<Value, EvalError> {
    let rhs = eval_expr(interp, arena, value)?;
    let new_value = match op {
        AssignOp::Set => rhs,
        AssignOp::AddAssign => {
            let current = interp.env.get(name, &interp.interner, span)?;
            evaluate_binary(BinaryOp::Add, current, rhs, span)?
        }
    };
    interp.env.set(name, new_value.clone());
    Ok(new_value)
}

/// Postfix returns the value *before* the update; prefix returns the value
/// *after* (`spec.md` §9 Open Question, resolved). Both require the
/// identifier to currently hold an `Int` (`spec.md` §4.3).
fn eval_inc_dec(
    interp: &mut Interpreter,
    name: arcane_ir::Name,
    op: IncDecOp,
    span: Span,
    is_prefix: bool,
) -> Result<Value, EvalError> {
    let current = interp.env.get(name, &interp.interner, span)?;
    let Value::Int(n) = current else {
        return Err(EvalError::type_mismatch(
            format!("`++`/`--` requires an Int variable, found {}", current.type_name()),
            span,
        ));
    };
    let updated = match op {
        IncDecOp::Inc => n.wrapping_add(1),
        IncDecOp::Dec => n.wrapping_sub(1),
    };
    interp.env.set(name, Value::Int(updated));
    Ok(Value::Int(if is_prefix { updated } else { n }))
}

/// `a[i]`: `a` must be an Array, `i` an Int in `[0, length)`. Chained
/// indices apply this once per bracket, left to right (`spec.md` §4.3).
fn index_once(base: Value, index: &Value, span: Span) -> Result<Value, EvalError> {
    match base {
        Value::Array(items) => match index {
            Value::Int(i) => {
                let i = *i;
                if i < 0 {
                    return Err(EvalError::index_error(format!("index {i} out of bounds"), span));
                }
                items.get(i as usize).ok_or_else(|| {
                    EvalError::index_error(
                        format!("index {i} out of bounds for array of length {}", items.len()),
                        span,
                    )
                })
            }
            other => Err(EvalError::index_error(
                format!("array index must be Int, found {}", other.type_name()),
                span,
            )),
        },
        other => Err(EvalError::index_error(
            format!("cannot index into {}", other.type_name()),
            span,
        )),
    }
}
