// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end scenarios run against `Interpreter::run` (`spec.md` §8). These
//! exercise the evaluator the way an embedding host would: register a
//! handful of host functions, then run source text and observe either the
//! printed output or the final returned `Value`.

use std::cell::RefCell;

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
    interp.register_builtin("print", print_builtin);
    interp
}

#[test]
fn scenario_1_compound_assignment() {
    let mut interp = interpreter();
    interp.run("a = 5; a += 2; print(a);").expect("runs");
    assert_eq!(take_printed(), vec!["7"]);
}

#[test]
fn scenario_2_string_concatenation() {
    let mut interp = interpreter();
    interp
        .run(r#"buf = "Hello"; buf += ", "; buf = buf + "World"; print(buf);"#)
        .expect("runs");
    assert_eq!(take_printed(), vec!["Hello, World"]);
}

#[test]
fn scenario_3_for_loop() {
    let mut interp = interpreter();
    interp
        .run("for (i = 0; i < 3; i++) { print(i); }")
        .expect("runs");
    assert_eq!(take_printed(), vec!["0", "1", "2"]);
}

#[test]
fn scenario_4_while_with_continue() {
    let mut interp = interpreter();
    interp
        .run("i = 0; while (i < 3) { if (i == 1) { i++; continue; } print(i); i++; }")
        .expect("runs");
    assert_eq!(take_printed(), vec!["0", "2"]);
}

#[test]
fn scenario_7_eager_logical_operators() {
    let mut interp = interpreter();
    interp
        .run(r#"if (true && false) { print("y"); } else { print("n"); }"#)
        .expect("runs");
    assert_eq!(take_printed(), vec!["n"]);
}

#[test]
fn scenario_8_division_by_zero_is_an_error() {
    let mut interp = interpreter();
    let result = interp.run("x = 10 / 0;");
    assert!(result.is_err());
}

#[test]
fn break_stops_the_loop_immediately() {
    let mut interp = interpreter();
    interp
        .run("for (i = 0; i < 10; i++) { if (i == 2) { break; } print(i); }")
        .expect("runs");
    assert_eq!(take_printed(), vec!["0", "1"]);
}

#[test]
fn return_propagates_through_nested_blocks() {
    let mut interp = interpreter();
    let value = interp
        .run("for (i = 0; i < 10; i++) { if (i == 3) { return i; } }")
        .expect("runs");
    assert!(value.structural_eq(&Value::Int(3)));
}

#[test]
fn assignment_is_right_associative() {
    let mut interp = interpreter();
    interp.run("a = b = 5; print(a); print(b);").expect("runs");
    assert_eq!(take_printed(), vec!["5", "5"]);
}

#[test]
fn subtraction_is_left_associative() {
    let mut interp = interpreter();
    interp.run("print(1 - 2 - 3);").expect("runs");
    assert_eq!(take_printed(), vec!["-4"]);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let mut interp = interpreter();
    interp.run("print(2 * 3 + 1);").expect("runs");
    assert_eq!(take_printed(), vec!["7"]);
}

#[test]
fn addition_is_polymorphic_on_either_operand() {
    let mut interp = interpreter();
    interp.run(r#"print(1 + "x"); print("x" + 1);"#).expect("runs");
    assert_eq!(take_printed(), vec!["1x", "x1"]);
}

#[test]
fn template_substitutes_a_bound_variable() {
    let mut interp = interpreter();
    interp.run(r#"x = 7; print("x=${x}");"#).expect("runs");
    assert_eq!(take_printed(), vec!["x=7"]);
}

#[test]
fn undefined_variable_in_template_is_an_error() {
    let mut interp = interpreter();
    let result = interp.run(r#"print("x=${missing}");"#);
    assert!(result.is_err());
}

#[test]
fn builtin_names_survive_across_separate_runs() {
    // Registration happens once; the interpreter must not re-intern (and
    // thereby invalidate) builtin names between `run` calls.
    let mut interp = interpreter();
    interp.run("print(1);").expect("first run");
    interp.run("print(2);").expect("second run");
    assert_eq!(take_printed(), vec!["1", "2"]);
}

#[test]
fn environment_does_not_leak_across_runs() {
    let mut interp = interpreter();
    interp.run("a = 1;").expect("first run");
    let result = interp.run("print(a);");
    assert!(result.is_err(), "bindings from a prior run must not survive");
}
