//! Unary operator dispatch (`spec.md` §4.3).
//!
//! Unary `-` applies to any primary expression evaluating to a numeric
//! `Value`, not only a literal token immediately following it (`spec.md` §9
//! Open Question, resolved): the parser calls `parse_unary` recursively, so
//! `-(1 + 2)` and `-a` both work.

use arcane_ir::{Span, UnaryOp};

use crate::errors::EvalError;
use crate::value::Value;

pub fn evaluate_unary(op: UnaryOp, operand: Value, span: Span) -> Result<Value, EvalError> {
    match op {
        UnaryOp::Neg => match operand {
            Value::Int(n) => Ok(Value::Int(-n)),
            Value::Double(n) => Ok(Value::Double(-n)),
            other => Err(EvalError::type_mismatch(
                format!("unary `-` requires a numeric operand, found {}", other.type_name()),
                span,
            )),
        },
        // `!` accepts Bool or Int, producing Bool with payload `operand == 0` (`spec.md` §4.3).
        UnaryOp::Not => match operand {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            Value::Int(n) => Ok(Value::Bool(n == 0)),
            other => Err(EvalError::type_mismatch(
                format!("`!` requires Bool or Int, found {}", other.type_name()),
                span,
            )),
        },
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn not_on_int_is_equality_with_zero() {
        let result = evaluate_unary(UnaryOp::Not, Value::Int(0), Span::DUMMY).unwrap();
        assert!(result.structural_eq(&Value::Bool(true)));
        let result = evaluate_unary(UnaryOp::Not, Value::Int(5), Span::DUMMY).unwrap();
        assert!(result.structural_eq(&Value::Bool(false)));
    }

    #[test]
    fn neg_rejects_non_numeric() {
        assert!(evaluate_unary(UnaryOp::Neg, Value::str("x"), Span::DUMMY).is_err());
    }
}
