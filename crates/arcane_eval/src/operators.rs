//! Binary operator dispatch (`spec.md` §4.3).
//!
//! `&&`/`||` are deliberately **not** short-circuited: both operands are
//! always evaluated by the caller before this function runs, preserving the
//! source's eager evaluation (`spec.md` §5, §9 REDESIGN FLAGS: "Logical
//! short-circuit").

use arcane_ir::{BinaryOp, Span};

use crate::errors::EvalError;
use crate::value::Value;

pub fn evaluate_binary(op: BinaryOp, lhs: Value, rhs: Value, span: Span) -> Result<Value, EvalError> {
    match op {
        BinaryOp::Or => Ok(Value::Bool(lhs.truthy(span)? || rhs.truthy(span)?)),
        BinaryOp::And => Ok(Value::Bool(lhs.truthy(span)? && rhs.truthy(span)?)),
        BinaryOp::Eq => Ok(Value::Bool(lhs.structural_eq(&rhs))),
        BinaryOp::NotEq => Ok(Value::Bool(!lhs.structural_eq(&rhs))),
        BinaryOp::Lt => relational(&lhs, &rhs, span, |o| o.is_lt()),
        BinaryOp::LtEq => relational(&lhs, &rhs, span, |o| o.is_le()),
        BinaryOp::Gt => relational(&lhs, &rhs, span, |o| o.is_gt()),
        BinaryOp::GtEq => relational(&lhs, &rhs, span, |o| o.is_ge()),
        BinaryOp::Add => add(lhs, rhs, span),
        BinaryOp::Sub => numeric(lhs, rhs, span, "-", |a, b| a - b, |a, b| a.wrapping_sub(b)),
        BinaryOp::Mul => numeric(lhs, rhs, span, "*", |a, b| a * b, |a, b| a.wrapping_mul(b)),
        BinaryOp::Div => divide(lhs, rhs, span),
    }
}

/// Relational operators are defined only same-kind: int×int, double×double,
/// date×date (`spec.md` §4.3) — no int/double auto-widening, unlike `+`.
fn relational(
    lhs: &Value,
    rhs: &Value,
    span: Span,
    accept: impl Fn(std::cmp::Ordering) -> bool,
) -> Result<Value, EvalError> {
    let ordering = match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => a.cmp(b),
        (Value::Double(a), Value::Double(b)) => {
            a.partial_cmp(b).ok_or_else(|| not_ordered(span))?
        }
        (Value::Date(a), Value::Date(b)) => a.ordering_key().cmp(&b.ordering_key()),
        _ => {
            return Err(EvalError::type_mismatch(
                format!(
                    "relational operator requires matching Int, Double, or Date operands, found {} and {}",
                    lhs.type_name(),
                    rhs.type_name()
                ),
                span,
            ))
        }
    };
    Ok(Value::Bool(accept(ordering)))
}

fn not_ordered(span: Span) -> EvalError {
    EvalError::type_mismatch("double comparison against NaN is not ordered", span)
}

/// `+` is polymorphic (`spec.md` §4.3): string-concat if either side is a
/// String, else double-widen if either side is a Double, else int-add.
fn add(lhs: Value, rhs: Value, span: Span) -> Result<Value, EvalError> {
    if matches!(lhs, Value::Str(_)) || matches!(rhs, Value::Str(_)) {
        return Ok(Value::str(format!("{}{}", lhs.stringify(), rhs.stringify())));
    }
    match (lhs, rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(b))),
        (a, b) if a.is_numeric() && b.is_numeric() => {
            Ok(Value::Double(a.as_f64().unwrap_or(0.0) + b.as_f64().unwrap_or(0.0)))
        }
        (a, b) => type_mismatch_numeric("+", &a, &b, span),
    }
}

/// `-`, `*` are numeric-only with the same int/double widening as `+`, but
/// never string-coercing (`spec.md` §4.3).
fn numeric(
    lhs: Value,
    rhs: Value,
    span: Span,
    symbol: &str,
    on_double: impl Fn(f64, f64) -> f64,
    on_int: impl Fn(i64, i64) -> i64,
) -> Result<Value, EvalError> {
    match (&lhs, &rhs) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(on_int(*a, *b))),
        (a, b) if a.is_numeric() && b.is_numeric() => {
            let a = a.as_f64().unwrap_or(0.0);
            let b = b.as_f64().unwrap_or(0.0);
            Ok(Value::Double(on_double(a, b)))
        }
        _ => type_mismatch_numeric(symbol, &lhs, &rhs, span),
    }
}

fn divide(lhs: Value, rhs: Value, span: Span) -> Result<Value, EvalError> {
    match (&lhs, &rhs) {
        (Value::Int(_), Value::Int(0)) => Err(EvalError::division_by_zero(span)),
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a / b)),
        (a, b) if a.is_numeric() && b.is_numeric() => {
            let divisor = b.as_f64().unwrap_or(0.0);
            if divisor == 0.0 {
                return Err(EvalError::division_by_zero(span));
            }
            Ok(Value::Double(a.as_f64().unwrap_or(0.0) / divisor))
        }
        _ => type_mismatch_numeric("/", &lhs, &rhs, span),
    }
}

fn type_mismatch_numeric(symbol: &str, lhs: &Value, rhs: &Value, span: Span) -> Result<Value, EvalError> {
    Err(EvalError::type_mismatch(
        format!(
            "`{symbol}` requires numeric operands, found {} and {}",
            lhs.type_name(),
            rhs.type_name()
        ),
        span,
    ))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    fn int(n: i64) -> Value {
        Value::Int(n)
    }

    #[test]
    fn string_concat_either_side() {
        let result = evaluate_binary(BinaryOp::Add, int(1), Value::str("x"), Span::DUMMY).unwrap();
        assert_eq!(result.stringify(), "1x");
        let result = evaluate_binary(BinaryOp::Add, Value::str("x"), int(1), Span::DUMMY).unwrap();
        assert_eq!(result.stringify(), "x1");
    }

    #[test]
    fn subtraction_is_left_associative_through_repeated_calls() {
        let step1 = evaluate_binary(BinaryOp::Sub, int(1), int(2), Span::DUMMY).unwrap();
        let step2 = evaluate_binary(BinaryOp::Sub, step1, int(3), Span::DUMMY).unwrap();
        assert!(step2.structural_eq(&int(-4)));
    }

    #[test]
    fn division_by_zero_is_an_error() {
        assert!(evaluate_binary(BinaryOp::Div, int(10), int(0), Span::DUMMY).is_err());
    }

    #[test]
    fn relational_rejects_mixed_int_double() {
        let result = evaluate_binary(BinaryOp::Lt, int(1), Value::Double(2.0), Span::DUMMY);
        assert!(result.is_err());
    }
}
