//! Token vocabulary produced by `arcane_lexer` (`spec.md` §3.3, §4.1).

use std::fmt;

use crate::{Name, Span};

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

/// Token kinds, covering the literal, identifier, keyword, operator, and
/// punctuation classes named in `spec.md` §3.3.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TokenKind {
    Int(i64),
    Double(f64),
    /// Interned string-literal payload, quotes already stripped. Template
    /// substitution (`spec.md` §4.4) happens later, at evaluation time.
    Str(Name),
    Bool(bool),
    Ident(Name),

    // Keywords
    If,
    Else,
    For,
    While,
    Return,
    Continue,
    Break,

    // Punctuation
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Semicolon,

    // Operators
    AndAnd,
    OrOr,
    PlusPlus,
    MinusMinus,
    EqEq,
    NotEq,
    GtEq,
    LtEq,
    PlusEq,
    Eq,
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    Gt,
    Lt,

    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            TokenKind::Int(n) => return write!(f, "integer `{n}`"),
            TokenKind::Double(n) => return write!(f, "double `{n}`"),
            TokenKind::Str(_) => "string literal",
            TokenKind::Bool(b) => return write!(f, "boolean `{b}`"),
            TokenKind::Ident(_) => "identifier",
            TokenKind::If => "`if`",
            TokenKind::Else => "`else`",
            TokenKind::For => "`for`",
            TokenKind::While => "`while`",
            TokenKind::Return => "`return`",
            TokenKind::Continue => "`continue`",
            TokenKind::Break => "`break`",
            TokenKind::LBrace => "`{`",
            TokenKind::RBrace => "`}`",
            TokenKind::LParen => "`(`",
            TokenKind::RParen => "`)`",
            TokenKind::LBracket => "`[`",
            TokenKind::RBracket => "`]`",
            TokenKind::Comma => "`,`",
            TokenKind::Semicolon => "`;`",
            TokenKind::AndAnd => "`&&`",
            TokenKind::OrOr => "`||`",
            TokenKind::PlusPlus => "`++`",
            TokenKind::MinusMinus => "`--`",
            TokenKind::EqEq => "`==`",
            TokenKind::NotEq => "`!=`",
            TokenKind::GtEq => "`>=`",
            TokenKind::LtEq => "`<=`",
            TokenKind::PlusEq => "`+=`",
            TokenKind::Eq => "`=`",
            TokenKind::Plus => "`+`",
            TokenKind::Minus => "`-`",
            TokenKind::Star => "`*`",
            TokenKind::Slash => "`/`",
            TokenKind::Bang => "`!`",
            TokenKind::Gt => "`>`",
            TokenKind::Lt => "`<`",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{text}")
    }
}
