//! The variable store (`spec.md` §3.2, §4.2): a single flat mapping from
//! name to value, last-writer-wins, released as a whole at program end.

use arcane_ir::{Name, Span, StringInterner};
use rustc_hash::FxHashMap;

use crate::errors::EvalError;
use crate::value::Value;

#[derive(Default)]
pub struct Environment {
    bindings: FxHashMap<Name, Value>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Environment::default()
    }

    /// Lookup by name. Fails with `variable X not defined` (`spec.md`
    /// §4.2). Values are cloned out rather than borrowed, since the
    /// caller needs an owned `Value` to fold into an expression result.
    pub fn get(&self, name: Name, interner: &StringInterner, span: Span) -> Result<Value, EvalError> {
        self.bindings
            .get(&name)
            .cloned()
            .ok_or_else(|| EvalError::undefined_variable(interner.lookup(name), span))
    }

    /// Insert or replace. The previous binding's payload, if any, is
    /// dropped automatically when the map entry is overwritten (`spec.md`
    /// §4.2: "releases any previous payload" — here, ordinary `Drop`).
    pub fn set(&mut self, name: Name, value: Value) {
        self.bindings.insert(name, value);
    }

    /// Release every binding. Called once when `Interpreter::run` returns
    /// (`spec.md` §4.6); with owned `Heap<T>` payloads this is exactly
    /// `Drop`, so the call exists mainly to document the lifecycle point.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn last_write_wins() {
        let mut interner = StringInterner::new();
        let mut env = Environment::new();
        let name = interner.intern("x");
        env.set(name, Value::Int(1));
        env.set(name, Value::Int(2));
        let value = env.get(name, &interner, Span::DUMMY).expect("bound");
        assert!(value.structural_eq(&Value::Int(2)));
    }

    #[test]
    fn unbound_name_is_an_error() {
        let interner = StringInterner::new();
        let env = Environment::new();
        let err = env.get(Name::EMPTY, &interner, Span::DUMMY);
        assert!(err.is_err());
    }
}
