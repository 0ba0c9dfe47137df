//! Program entry point (`spec.md` §4.6).
//!
//! `Interpreter` is an explicit struct constructed once per embedding host
//! and reused across `run` calls, replacing the source's process-wide
//! globals for the variable store and control flags (`spec.md` §9 REDESIGN
//! FLAGS: "Global mutable state → explicit Executor object").

use std::time::{Duration, Instant};

use arcane_ir::{ExprArena, StmtId, StringInterner};

use crate::environment::Environment;
use crate::errors::{ControlSignal, EvalError};
use crate::exec::stmt::exec_stmt;
use crate::parser;
use crate::registry::{BuiltinFn, Builtins};
use crate::value::Value;

pub struct Interpreter {
    pub(crate) env: Environment,
    pub(crate) interner: StringInterner,
    pub(crate) builtins: Builtins,
    timeout: Option<Duration>,
    deadline: Option<Instant>,
}

impl Interpreter {
    /// A fresh interpreter with an empty variable store and no builtins
    /// registered. The interner it creates here lives for the interpreter's
    /// whole lifetime, spanning every `run` call — host-function names must
    /// stay valid `Name`s across runs, so, unlike the per-run token stream
    /// and AST, the interner is never reset (`spec.md` §6: "registration is
    /// static").
    #[must_use]
    pub fn new() -> Self {
        Interpreter {
            env: Environment::new(),
            interner: StringInterner::new(),
            builtins: Builtins::new(),
            timeout: None,
            deadline: None,
        }
    }

    /// Configure the optional wall-clock execution budget (`spec.md` §4.6,
    /// §7: `Timeout`), sampled at statement boundaries.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Register a host function under `name`, interned against this
    /// interpreter's own table so the `Name` the lexer later produces for a
    /// call site matches the one stored here (`spec.md` §6).
    pub fn register_builtin(&mut self, name: &str, f: BuiltinFn) {
        self.builtins.register(&mut self.interner, name, f);
    }

    /// Tokenise, parse, and evaluate `source` top to bottom. Uses a fresh
    /// `Environment` for this run; the interner and the host-function
    /// registry carry over unchanged.
    pub fn run(&mut self, source: &str) -> Result<Value, EvalError> {
        self.env.clear();
        self.deadline = self.timeout.map(|timeout| Instant::now() + timeout);

        let tokens = arcane_lexer::lex(source, &mut self.interner)?;
        let (stmts, arena) = parser::parse(&tokens)?;

        let result = self.exec_program(&arena, &stmts);
        self.env.clear();
        result
    }

    pub(crate) fn check_deadline(&self) -> Result<(), EvalError> {
        match self.deadline {
            Some(deadline) if Instant::now() > deadline => Err(EvalError::timeout()),
            _ => Ok(()),
        }
    }

    /// Execute the top-level statement sequence until end-of-input or a
    /// captured `return` (`spec.md` §4.6). `break`/`continue` reaching the
    /// top level are statically unenforced (`spec.md` §4.5: "only legal
    /// inside a loop body... effectively ignored outside a loop"), so they
    /// simply stop execution at that point rather than propagating as an
    /// error.
    fn exec_program(&mut self, arena: &ExprArena, stmts: &[StmtId]) -> Result<Value, EvalError> {
        for &id in stmts {
            match exec_stmt(self, arena, id) {
                Ok(()) => {}
                Err(EvalError::Control(ControlSignal::Return(value))) => return Ok(value),
                Err(EvalError::Control(ControlSignal::Break | ControlSignal::Continue)) => {
                    return Ok(Value::Null)
                }
                Err(err) => return Err(err),
            }
        }
        Ok(Value::Null)
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
