//! The evaluator's unified error/control-flow channel.
//!
//! `break`, `continue`, and `return` all need to unwind through arbitrary
//! statement nesting exactly like a runtime error does (`spec.md` §3.4,
//! §4.5), so they share the same `Result<_, EvalError>` propagated with `?`
//! instead of three separate process-global flags (`spec.md` §9 REDESIGN
//! FLAGS: "Global mutable state → explicit Executor object").

use std::fmt;

use arcane_diagnostic::{Diagnostic, ErrorCode};
use arcane_ir::Span;

use crate::value::Value;

/// A non-error unwind signal threaded through the same channel as runtime
/// errors.
#[derive(Debug, Clone)]
pub enum ControlSignal {
    Break,
    Continue,
    Return(Value),
}

#[derive(Debug, Clone)]
pub enum EvalError {
    /// `break` / `continue` / `return` unwinding through the call stack.
    Control(ControlSignal),
    /// An ordinary tokeniser/parser/runtime failure (`spec.md` §7).
    Runtime {
        code: ErrorCode,
        message: String,
        span: Option<Span>,
    },
}

impl EvalError {
    #[must_use]
    pub fn break_signal() -> Self {
        EvalError::Control(ControlSignal::Break)
    }

    #[must_use]
    pub fn continue_signal() -> Self {
        EvalError::Control(ControlSignal::Continue)
    }

    #[must_use]
    pub fn return_signal(value: Value) -> Self {
        EvalError::Control(ControlSignal::Return(value))
    }

    #[must_use]
    pub fn is_control(&self) -> bool {
        matches!(self, EvalError::Control(_))
    }

    fn runtime(code: ErrorCode, message: impl Into<String>, span: Option<Span>) -> Self {
        EvalError::Runtime {
            code,
            message: message.into(),
            span,
        }
    }

    #[must_use]
    pub fn undefined_variable(name: &str, span: Span) -> Self {
        Self::runtime(
            ErrorCode::UndefinedVariable,
            format!("variable {name} not defined"),
            Some(span),
        )
    }

    #[must_use]
    pub fn undefined_function(name: &str, span: Span) -> Self {
        Self::runtime(
            ErrorCode::UndefinedFunction,
            format!("function {name} not defined"),
            Some(span),
        )
    }

    #[must_use]
    pub fn type_mismatch(message: impl Into<String>, span: Span) -> Self {
        Self::runtime(ErrorCode::TypeMismatch, message, Some(span))
    }

    #[must_use]
    pub fn division_by_zero(span: Span) -> Self {
        Self::runtime(ErrorCode::DivisionByZero, "division by zero", Some(span))
    }

    #[must_use]
    pub fn index_error(message: impl Into<String>, span: Span) -> Self {
        Self::runtime(ErrorCode::IndexError, message, Some(span))
    }

    #[must_use]
    pub fn template_error(message: impl Into<String>, span: Span) -> Self {
        Self::runtime(ErrorCode::TemplateError, message, Some(span))
    }

    #[must_use]
    pub fn bad_condition_type(found: &str, span: Span) -> Self {
        Self::runtime(
            ErrorCode::BadConditionType,
            format!("condition must be Int or Bool, found {found}"),
            Some(span),
        )
    }

    #[must_use]
    pub fn unexpected_token(message: impl Into<String>, span: Span) -> Self {
        Self::runtime(ErrorCode::UnexpectedToken, message, Some(span))
    }

    #[must_use]
    pub fn timeout() -> Self {
        Self::runtime(ErrorCode::Timeout, "execution timed out", None)
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::Control(ControlSignal::Break) => write!(f, "break outside a loop"),
            EvalError::Control(ControlSignal::Continue) => write!(f, "continue outside a loop"),
            EvalError::Control(ControlSignal::Return(_)) => {
                write!(f, "return outside a function body")
            }
            EvalError::Runtime { message, .. } => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<arcane_lexer::LexError> for EvalError {
    fn from(err: arcane_lexer::LexError) -> Self {
        let diagnostic: Diagnostic = err.into();
        EvalError::Runtime {
            code: diagnostic.code,
            message: diagnostic.message,
            span: diagnostic.span,
        }
    }
}

impl From<EvalError> for Diagnostic {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::Runtime {
                code,
                message,
                span,
            } => {
                let diag = Diagnostic::new(code, message);
                match span {
                    Some(span) => diag.with_span(span),
                    None => diag,
                }
            }
            // A control signal escaping to the CLI boundary means
            // `Interpreter::run` failed to resolve it; there is no source
            // span to point at.
            EvalError::Control(_) => {
                Diagnostic::new(ErrorCode::UnexpectedToken, err.to_string())
            }
        }
    }
}
