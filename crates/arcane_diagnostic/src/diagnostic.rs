//! A rendered, human-facing error report.

use std::fmt;

use arcane_ir::Span;

use crate::ErrorCode;

/// One error surfaced to the CLI boundary, carrying enough context to print
/// a message and, when a span is available, underline the offending source.
#[derive(Clone, Debug)]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub message: String,
    pub span: Option<Span>,
    pub help: Option<String>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Diagnostic {
            code,
            message: message.into(),
            span: None,
            help: None,
        }
    }

    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    #[must_use]
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Render this diagnostic against `source`, underlining the primary
    /// span's line when one is available.
    #[must_use]
    pub fn render(&self, source: &str) -> String {
        let mut out = format!("error[{}]: {}", self.code, self.message);
        if let Some(span) = self.span {
            if let Some((line_no, line, col)) = locate(source, span.start) {
                out.push_str(&format!("\n  --> line {line_no}, column {col}\n"));
                out.push_str(&format!("   | {line}\n"));
                out.push_str(&format!("   | {}^", " ".repeat(col.saturating_sub(1))));
            }
        }
        if let Some(help) = &self.help {
            out.push_str(&format!("\nhelp: {help}"));
        }
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error[{}]: {}", self.code, self.message)
    }
}

/// Find the 1-indexed (line number, line text, column) for a byte offset.
fn locate(source: &str, offset: u32) -> Option<(usize, &str, usize)> {
    let offset = offset as usize;
    if offset > source.len() {
        return None;
    }
    let mut line_start = 0;
    let mut line_no = 1;
    for (i, ch) in source.char_indices() {
        if i >= offset {
            break;
        }
        if ch == '\n' {
            line_start = i + 1;
            line_no += 1;
        }
    }
    let line_end = source[line_start..]
        .find('\n')
        .map_or(source.len(), |rel| line_start + rel);
    let line = &source[line_start..line_end];
    let col = offset - line_start + 1;
    Some((line_no, line, col))
}
