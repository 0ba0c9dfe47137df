//! Argument-checking helpers shared by the reference builtins.
//!
//! The host-call signature (`spec.md` §6) is `(args, count) -> Value`, with
//! no source span threaded through — a builtin raising an error can only
//! point at [`Span::DUMMY`], exactly like the original `raise_error(...)`
//! calls in `functions.c`, which carry a message but no source location
//! either.

use arcane_ir::Span;
use arcane_eval::{EvalError, Value};

pub fn require_count(name: &str, args: &[Value], expected: usize) -> Result<(), EvalError> {
    if args.len() != expected {
        return Err(EvalError::type_mismatch(
            format!("{name}() expects {expected} argument(s), got {}", args.len()),
            Span::DUMMY,
        ));
    }
    Ok(())
}

pub fn string_arg<'a>(name: &str, args: &'a [Value], index: usize) -> Result<&'a str, EvalError> {
    match &args[index] {
        Value::Str(s) => Ok(s.as_str()),
        other => Err(EvalError::type_mismatch(
            format!("{name}() expects a String argument at position {index}, found {}", other.type_name()),
            Span::DUMMY,
        )),
    }
}

pub fn int_arg(name: &str, args: &[Value], index: usize) -> Result<i64, EvalError> {
    match &args[index] {
        Value::Int(n) => Ok(*n),
        other => Err(EvalError::type_mismatch(
            format!("{name}() expects an Int argument at position {index}, found {}", other.type_name()),
            Span::DUMMY,
        )),
    }
}
