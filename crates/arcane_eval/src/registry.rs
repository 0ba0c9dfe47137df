//! The host-function call protocol (`spec.md` §4.3, §6): a name → callback
//! table, populated once before execution starts. `arcane_eval` depends on
//! nothing from `arcane_builtins` — the registry only names the interface
//! the embedding host registers against.

use arcane_ir::{Name, Span, StringInterner};
use rustc_hash::FxHashMap;

use crate::errors::EvalError;
use crate::value::Value;

/// A host function's signature (`spec.md` §6): evaluated arguments in, one
/// `Value` out. Errors raised by a host function flow through the same
/// `EvalError` channel as any other runtime error.
pub type BuiltinFn = fn(&[Value]) -> Result<Value, EvalError>;

#[derive(Default)]
pub struct Builtins {
    functions: FxHashMap<Name, BuiltinFn>,
}

impl Builtins {
    #[must_use]
    pub fn new() -> Self {
        Builtins::default()
    }

    /// Register `name` against `f`. Called by the embedding host before the
    /// first `Interpreter::run` (`spec.md` §6: "registration is static").
    pub fn register(&mut self, interner: &mut StringInterner, name: &str, f: BuiltinFn) {
        let name = interner.intern(name);
        self.functions.insert(name, f);
    }

    /// Dispatch a call. An unregistered name is a runtime error (`spec.md`
    /// §4.3: "An unknown name is a runtime error").
    pub fn call(
        &self,
        name: Name,
        args: &[Value],
        interner: &StringInterner,
        span: Span,
    ) -> Result<Value, EvalError> {
        match self.functions.get(&name) {
            Some(f) => f(args),
            None => Err(EvalError::undefined_function(interner.lookup(name), span)),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    fn identity(args: &[Value]) -> Result<Value, EvalError> {
        Ok(args.first().cloned().unwrap_or(Value::Null))
    }

    #[test]
    fn registered_function_dispatches() {
        let mut interner = StringInterner::new();
        let mut builtins = Builtins::new();
        builtins.register(&mut interner, "id", identity);
        let name = interner.intern("id");
        let result = builtins
            .call(name, &[Value::Int(7)], &interner, Span::DUMMY)
            .expect("call should succeed");
        assert!(result.structural_eq(&Value::Int(7)));
    }

    #[test]
    fn unregistered_function_is_an_error() {
        let mut interner = StringInterner::new();
        let builtins = Builtins::new();
        let name = interner.intern("missing");
        assert!(builtins
            .call(name, &[], &interner, Span::DUMMY)
            .is_err());
    }
}
