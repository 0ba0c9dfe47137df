use arcane_diagnostic::{Diagnostic, ErrorCode};
use arcane_ir::Span;
use thiserror::Error;

/// Tokeniser errors (`spec.md` §7: "fatal; execution aborts with an Error
/// Value").
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unterminated string literal")]
    UnterminatedString { span: Span },
    #[error("unexpected byte {byte:#04x} (`{ch}`)")]
    UnexpectedByte { byte: u8, ch: char, span: Span },
    #[error("token sequence exceeded its {limit}-token capacity")]
    TokenOverflow { limit: usize },
}

impl LexError {
    #[must_use]
    pub fn span(&self) -> Option<Span> {
        match self {
            LexError::UnterminatedString { span } | LexError::UnexpectedByte { span, .. } => {
                Some(*span)
            }
            LexError::TokenOverflow { .. } => None,
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(err: LexError) -> Self {
        let code = match &err {
            LexError::UnterminatedString { .. } => ErrorCode::UnterminatedString,
            LexError::UnexpectedByte { .. } => ErrorCode::UnexpectedByte,
            LexError::TokenOverflow { .. } => ErrorCode::TokenOverflow,
        };
        let span = err.span();
        let diag = Diagnostic::new(code, err.to_string());
        match span {
            Some(span) => diag.with_span(span),
            None => diag,
        }
    }
}
