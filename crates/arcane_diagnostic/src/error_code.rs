//! Stable, searchable error codes (`spec.md` §7: the three taxonomic kinds
//! of error, each with stable sub-codes).

use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ErrorCode {
    /// Unterminated string literal.
    UnterminatedString,
    /// A byte the tokeniser does not recognise.
    UnexpectedByte,
    /// Token sequence exceeded its capacity.
    TokenOverflow,
    /// Unexpected token while parsing.
    UnexpectedToken,
    /// Reference to a name with no binding.
    UndefinedVariable,
    /// Reference to a host function with no registration.
    UndefinedFunction,
    /// An operator applied to operand types it is not defined for.
    TypeMismatch,
    /// Division or modulo by zero.
    DivisionByZero,
    /// Array index outside `[0, length)`, or indexing a non-array.
    IndexError,
    /// Malformed `${...}` string template.
    TemplateError,
    /// A condition did not evaluate to `Int` or `Bool`.
    BadConditionType,
    /// The configured wall-clock execution budget was exceeded.
    Timeout,
}

impl ErrorCode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::UnterminatedString => "E0001",
            ErrorCode::UnexpectedByte => "E0002",
            ErrorCode::TokenOverflow => "E0003",
            ErrorCode::UnexpectedToken => "E0101",
            ErrorCode::UndefinedVariable => "E0201",
            ErrorCode::UndefinedFunction => "E0202",
            ErrorCode::TypeMismatch => "E0203",
            ErrorCode::DivisionByZero => "E0204",
            ErrorCode::IndexError => "E0205",
            ErrorCode::TemplateError => "E0206",
            ErrorCode::BadConditionType => "E0207",
            ErrorCode::Timeout => "E0301",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
