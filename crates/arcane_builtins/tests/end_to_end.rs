// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! The two `spec.md` §8 scenarios that need a real host-function registry
//! (`arcane_eval/tests/end_to_end.rs` covers the rest with a bare `print`
//! stub, since it can't depend on this crate).

use std::cell::RefCell;

use arcane_builtins::register_all;
use arcane_eval::{EvalError, Interpreter, Value};
use pretty_assertions::assert_eq;

thread_local! {
    static PRINTED: RefCell<Vec<String>> = RefCell::new(Vec::new());
}

fn take_printed() -> Vec<String> {
    PRINTED.with(|buf| std::mem::take(&mut *buf.borrow_mut()))
}

fn print_builtin(args: &[Value]) -> Result<Value, EvalError> {
    let text = args.first().map(Value::stringify).unwrap_or_default();
    PRINTED.with(|buf| buf.borrow_mut().push(text));
    Ok(Value::Null)
}

fn interpreter() -> Interpreter {
    take_printed();
    let mut interp = Interpreter::new();
    register_all(&mut interp);
    // Overwrite the registered `print` with one that records instead of
    // writing to stdout, so tests can assert on it.
    interp.register_builtin("print", print_builtin);
    interp
}

#[test]
fn scenario_5_array_mutation_is_visible_through_the_original_binding() {
    let mut interp = interpreter();
    let source = "a = new_array(3); array_set(a, 1, \"x\"); print(a[1]); print(ubound(a));";
    interp.run(source).expect("program runs");
    assert_eq!(take_printed(), vec!["x".to_string(), "2".to_string()]);
}

#[test]
fn scenario_5_unset_slots_are_null() {
    let mut interp = interpreter();
    interp
        .run("a = new_array(3); print(a[0]); print(a[2]);")
        .expect("program runs");
    assert_eq!(take_printed(), vec!["null".to_string(), "null".to_string()]);
}

#[test]
fn scenario_6_add_days_crosses_a_month_boundary() {
    let mut interp = interpreter();
    interp
        .run("d = cdate(\"02/14/2025\"); d2 = add_days(d, 5); print(d2);")
        .expect("program runs");
    assert_eq!(take_printed(), vec!["02/19/2025".to_string()]);
}

#[test]
fn array_set_out_of_bounds_raises_an_evaluator_error() {
    let mut interp = interpreter();
    let result = interp.run("a = new_array(2); array_set(a, 5, 1);");
    assert!(result.is_err());
}

#[test]
fn split_and_join_round_trip_through_the_registered_builtins() {
    let mut interp = interpreter();
    interp
        .run("parts = split(\"a,b,c\", \",\"); print(join(parts, \"-\"));")
        .expect("program runs");
    assert_eq!(take_printed(), vec!["a-b-c".to_string()]);
}
