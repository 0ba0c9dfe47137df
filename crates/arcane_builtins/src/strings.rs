//! String builtins (`functions.c` `fn_strlen`, `fn_left`, `fn_right`,
//! `fn_substring`, `fn_ucase`, `fn_lcase`, `fn_split`, `fn_typeof`).

use arcane_eval::{ArrayHandle, EvalError, Value};
use arcane_ir::Span;

use crate::args::{int_arg, require_count, string_arg};

/// `len(s)`: character count (`functions.c`'s `strlen` counts bytes; this
/// counts Unicode scalar values instead, the idiomatic Rust notion of
/// string length for a UTF-8 source file — see `DESIGN.md`).
pub fn len(args: &[Value]) -> Result<Value, EvalError> {
    require_count("len", args, 1)?;
    let text = string_arg("len", args, 0)?;
    Ok(Value::Int(text.chars().count() as i64))
}

/// `left(s, n)`: the first `n` characters, clamped to `[0, len(s)]`.
pub fn left(args: &[Value]) -> Result<Value, EvalError> {
    require_count("left", args, 2)?;
    let text = string_arg("left", args, 0)?;
    let n = int_arg("left", args, 1)?.max(0) as usize;
    Ok(Value::str(text.chars().take(n).collect::<String>()))
}

/// `right(s, n)`: the last `n` characters, clamped to `[0, len(s)]`.
pub fn right(args: &[Value]) -> Result<Value, EvalError> {
    require_count("right", args, 2)?;
    let text = string_arg("right", args, 0)?;
    let n = int_arg("right", args, 1)?.max(0) as usize;
    let total = text.chars().count();
    let skip = total.saturating_sub(n);
    Ok(Value::str(text.chars().skip(skip).collect::<String>()))
}

/// `substring(s, start, len)`: clamped start/length, out-of-range yields
/// `""` rather than an error (`functions.c`'s `fn_substring`).
pub fn substring(args: &[Value]) -> Result<Value, EvalError> {
    require_count("substring", args, 3)?;
    let text = string_arg("substring", args, 0)?;
    let start = int_arg("substring", args, 1)?.max(0) as usize;
    let length = int_arg("substring", args, 2)?.max(0) as usize;
    let chars: Vec<char> = text.chars().collect();
    if start >= chars.len() {
        return Ok(Value::str(""));
    }
    let end = (start + length).min(chars.len());
    Ok(Value::str(chars[start..end].iter().collect::<String>()))
}

pub fn upper(args: &[Value]) -> Result<Value, EvalError> {
    require_count("upper", args, 1)?;
    Ok(Value::str(string_arg("upper", args, 0)?.to_uppercase()))
}

pub fn lower(args: &[Value]) -> Result<Value, EvalError> {
    require_count("lower", args, 1)?;
    Ok(Value::str(string_arg("lower", args, 0)?.to_lowercase()))
}

/// `split(s, delim)`: an array of the non-empty pieces between occurrences
/// of `delim` (`functions.c`'s `fn_split`, built on `strtok`, which also
/// collapses empty tokens).
pub fn split(args: &[Value]) -> Result<Value, EvalError> {
    require_count("split", args, 2)?;
    let text = string_arg("split", args, 0)?;
    let delim = string_arg("split", args, 1)?;
    if delim.is_empty() {
        return Err(EvalError::type_mismatch("split() delimiter must not be empty", Span::DUMMY));
    }
    let pieces: Vec<Value> = text
        .split(delim)
        .filter(|piece| !piece.is_empty())
        .map(Value::str)
        .collect();
    Ok(Value::Array(ArrayHandle::new(pieces)))
}

/// `join(array, delim)`: the inverse of `split` (supplements the distilled
/// spec's list, grounded on the `split`/`new_array` array protocol it
/// already specifies).
pub fn join(args: &[Value]) -> Result<Value, EvalError> {
    require_count("join", args, 2)?;
    let Value::Array(arr) = &args[0] else {
        return Err(EvalError::type_mismatch(
            format!("join() expects an Array as its first argument, found {}", args[0].type_name()),
            Span::DUMMY,
        ));
    };
    let delim = string_arg("join", args, 1)?;
    let rendered: Vec<String> = (0..arr.len())
        .map(|i| arr.get(i).map(|v| v.stringify()).unwrap_or_default())
        .collect();
    Ok(Value::str(rendered.join(delim)))
}

/// `type_of(v)`: lowercase type name (`functions.c`'s `fn_typeof`).
pub fn type_of(args: &[Value]) -> Result<Value, EvalError> {
    require_count("type_of", args, 1)?;
    Ok(Value::str(args[0].type_name().to_lowercase()))
}

/// `to_string(v)`: same rendering rules as `+`-concatenation (`spec.md`
/// §4.3).
pub fn to_string(args: &[Value]) -> Result<Value, EvalError> {
    require_count("to_string", args, 1)?;
    Ok(Value::str(args[0].stringify()))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn len_counts_characters() {
        assert!(len(&[Value::str("hello")]).unwrap().structural_eq(&Value::Int(5)));
    }

    #[test]
    fn left_clamps_to_string_length() {
        assert_eq!(left(&[Value::str("hi"), Value::Int(10)]).unwrap().stringify(), "hi");
    }

    #[test]
    fn right_returns_the_trailing_characters() {
        assert_eq!(right(&[Value::str("hello"), Value::Int(3)]).unwrap().stringify(), "llo");
    }

    #[test]
    fn substring_out_of_range_is_empty_not_an_error() {
        assert_eq!(substring(&[Value::str("hi"), Value::Int(10), Value::Int(2)]).unwrap().stringify(), "");
    }

    #[test]
    fn split_drops_empty_tokens() {
        let result = split(&[Value::str("a,,b"), Value::str(",")]).unwrap();
        let Value::Array(arr) = result else { panic!("expected array") };
        assert_eq!(arr.len(), 2);
    }

    #[test]
    fn join_is_the_inverse_of_split() {
        let arr = split(&[Value::str("a,b,c"), Value::str(",")]).unwrap();
        assert_eq!(join(&[arr, Value::str("-")]).unwrap().stringify(), "a-b-c");
    }
}
