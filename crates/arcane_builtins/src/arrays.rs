//! Array builtins (`functions.c` `fn_new_array`, `fn_array_set`,
//! `fn_upperbound`; `spec.md` §8 scenario 5).

use arcane_eval::{ArrayHandle, EvalError, Value};
use arcane_ir::Span;

use crate::args::{int_arg, require_count};

/// `new_array(n)`: an array of `n` `Null`s.
pub fn new_array(args: &[Value]) -> Result<Value, EvalError> {
    require_count("new_array", args, 1)?;
    let size = int_arg("new_array", args, 0)?;
    if size < 0 {
        return Err(EvalError::type_mismatch(
            "new_array() expects a non-negative integer",
            Span::DUMMY,
        ));
    }
    Ok(Value::Array(ArrayHandle::new(vec![Value::Null; size as usize])))
}

/// `array_set(array, index, value)`: mutates the array in place and
/// returns `Null` (`functions.c`'s `fn_array_set` returns `make_null()`).
pub fn array_set(args: &[Value]) -> Result<Value, EvalError> {
    require_count("array_set", args, 3)?;
    let Value::Array(arr) = &args[0] else {
        return Err(EvalError::type_mismatch(
            format!("array_set() expects an Array as its first argument, found {}", args[0].type_name()),
            Span::DUMMY,
        ));
    };
    let index = int_arg("array_set", args, 1)?;
    if index < 0 || !arr.set(index as usize, args[2].clone()) {
        return Err(EvalError::index_error(
            format!("array_set() index {index} out of bounds"),
            Span::DUMMY,
        ));
    }
    Ok(Value::Null)
}

/// `ubound(array)`: the highest valid index, `length - 1`.
pub fn ubound(args: &[Value]) -> Result<Value, EvalError> {
    require_count("ubound", args, 1)?;
    let Value::Array(arr) = &args[0] else {
        return Err(EvalError::type_mismatch(
            format!("ubound() expects an Array, found {}", args[0].type_name()),
            Span::DUMMY,
        ));
    };
    Ok(Value::Int(arr.len() as i64 - 1))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn new_array_is_filled_with_null() {
        let result = new_array(&[Value::Int(3)]).expect("ok");
        let Value::Array(arr) = result else { panic!("expected array") };
        assert_eq!(arr.len(), 3);
        assert!(arr.get(0).unwrap().structural_eq(&Value::Null));
    }

    #[test]
    fn array_set_mutates_the_shared_handle() {
        let array = new_array(&[Value::Int(3)]).expect("ok");
        array_set(&[array.clone(), Value::Int(1), Value::str("x")]).expect("ok");
        let Value::Array(arr) = array else { panic!("expected array") };
        assert!(arr.get(1).unwrap().structural_eq(&Value::str("x")));
    }

    #[test]
    fn ubound_is_length_minus_one() {
        let array = new_array(&[Value::Int(3)]).expect("ok");
        let result = ubound(&[array]).expect("ok");
        assert!(result.structural_eq(&Value::Int(2)));
    }

    #[test]
    fn array_set_out_of_bounds_is_an_error() {
        let array = new_array(&[Value::Int(1)]).expect("ok");
        assert!(array_set(&[array, Value::Int(5), Value::Null]).is_err());
    }
}
