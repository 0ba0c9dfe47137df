//! Tokeniser for Arcane (`spec.md` §4.1), built on `logos` the way the
//! teacher's tokeniser is (`ori_lexer::RawToken`): a `#[derive(Logos)]`
//! enum describes every token's pattern, and `logos`'s DFA resolves the
//! greedy two-character-before-one-character operator priority (`&&` before
//! a bare `&` would be, `+=`/`++` before `+`) and keyword-before-identifier
//! priority automatically, rather than by hand-written lookahead.

mod errors;

pub use errors::LexError;

use logos::Logos;

use arcane_ir::{Span, StringInterner, Token, TokenKind};

/// Hard ceiling on the number of tokens a single program may produce
/// (`spec.md` §3.3: "minimum 2048").
pub const MAX_TOKENS: usize = 65_536;

/// Raw token from `logos`, before keyword/literal conversion and string
/// interning.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"//[^\n]*")]
enum RawToken {
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("return")]
    Return,
    #[token("continue")]
    Continue,
    #[token("break")]
    Break,
    #[token("true")]
    True,
    #[token("false")]
    False,

    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("==")]
    EqEq,
    #[token("+=")]
    PlusEq,
    #[token("!=")]
    NotEq,
    #[token(">=")]
    GtEq,
    #[token("<=")]
    LtEq,
    #[token("=")]
    Eq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("!")]
    Bang,
    #[token(">")]
    Gt,
    #[token("<")]
    Lt,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(",")]
    Comma,

    // Double requires digits on both sides of the dot; logos's longest-match
    // rule picks this over `Int` whenever the dot is followed by a digit.
    #[regex(r"[0-9]+\.[0-9]+")]
    Double,

    #[regex(r"[0-9]+")]
    Int,

    // A terminated string, quotes included; unescaped newlines inside are
    // allowed (the original scanner copies raw bytes up to the next `"`).
    #[regex(r#""[^"]*""#)]
    Str,

    // Only reached when no closing quote exists anywhere in the remainder:
    // `logos` always prefers `Str`'s match when a closing quote is present,
    // since it's one byte longer.
    #[regex(r#""[^"]*"#)]
    UnterminatedStr,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
}

fn as_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Tokenise `source` into a bounded token sequence ending with `Eof`.
pub fn lex(source: &str, interner: &mut StringInterner) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let range = logos.span();
        let span = Span::new(as_u32(range.start), as_u32(range.end));
        let slice = logos.slice();

        let raw = match result {
            Ok(raw) => raw,
            Err(()) => {
                let ch = slice.chars().next().unwrap_or('\u{FFFD}');
                return Err(LexError::UnexpectedByte {
                    byte: slice.as_bytes()[0],
                    ch,
                    span,
                });
            }
        };

        if raw == RawToken::UnterminatedStr {
            return Err(LexError::UnterminatedString { span });
        }

        let kind = convert(raw, slice, interner);
        tokens.push(Token::new(kind, span));

        if tokens.len() >= MAX_TOKENS {
            return Err(LexError::TokenOverflow { limit: MAX_TOKENS });
        }
    }

    let eof_pos = as_u32(source.len());
    tokens.push(Token::new(TokenKind::Eof, Span::new(eof_pos, eof_pos)));
    Ok(tokens)
}

/// Convert a matched `RawToken` to a `TokenKind`, parsing literals and
/// interning identifiers/string contents.
fn convert(raw: RawToken, slice: &str, interner: &mut StringInterner) -> TokenKind {
    match raw {
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::For => TokenKind::For,
        RawToken::While => TokenKind::While,
        RawToken::Return => TokenKind::Return,
        RawToken::Continue => TokenKind::Continue,
        RawToken::Break => TokenKind::Break,
        RawToken::True => TokenKind::Bool(true),
        RawToken::False => TokenKind::Bool(false),

        RawToken::AndAnd => TokenKind::AndAnd,
        RawToken::OrOr => TokenKind::OrOr,
        RawToken::PlusPlus => TokenKind::PlusPlus,
        RawToken::MinusMinus => TokenKind::MinusMinus,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Eq => TokenKind::Eq,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Bang => TokenKind::Bang,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Lt => TokenKind::Lt,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Comma => TokenKind::Comma,

        RawToken::Double => TokenKind::Double(slice.parse().unwrap_or(0.0)),
        RawToken::Int => TokenKind::Int(slice.parse().unwrap_or(0)),
        RawToken::Str => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::Str(interner.intern(content))
        }
        RawToken::UnterminatedStr => {
            unreachable!("caller returns LexError::UnterminatedString before converting")
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        let mut interner = StringInterner::new();
        lex(source, &mut interner)
            .expect("lex should succeed")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn lexes_assignment_and_increment() {
        assert_eq!(
            kinds("a = 5; a += 2;"),
            vec![
                TokenKind::Ident(arcane_ir::Name::from_raw(1)),
                TokenKind::Eq,
                TokenKind::Int(5),
                TokenKind::Semicolon,
                TokenKind::Ident(arcane_ir::Name::from_raw(1)),
                TokenKind::PlusEq,
                TokenKind::Int(2),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn two_char_operators_matched_greedily() {
        assert_eq!(
            kinds("a && b || c"),
            vec![
                TokenKind::Ident(arcane_ir::Name::from_raw(1)),
                TokenKind::AndAnd,
                TokenKind::Ident(arcane_ir::Name::from_raw(2)),
                TokenKind::OrOr,
                TokenKind::Ident(arcane_ir::Name::from_raw(3)),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn double_literal_requires_interior_dot_with_digit() {
        let mut interner = StringInterner::new();
        let tokens = lex("3.14", &mut interner).expect("lex should succeed");
        assert_eq!(tokens[0].kind, TokenKind::Double(3.14));
    }

    #[test]
    fn comment_is_consumed_to_newline() {
        let mut interner = StringInterner::new();
        let tokens = lex("1 // comment\n2", &mut interner).expect("lex should succeed");
        assert_eq!(tokens[0].kind, TokenKind::Int(1));
        assert_eq!(tokens[1].kind, TokenKind::Int(2));
    }

    #[test]
    fn unterminated_string_is_fatal() {
        let mut interner = StringInterner::new();
        let err = lex("\"abc", &mut interner).unwrap_err();
        assert!(matches!(err, LexError::UnterminatedString { .. }));
    }

    #[test]
    fn unexpected_byte_is_fatal() {
        let mut interner = StringInterner::new();
        let err = lex("a = 1 @ 2", &mut interner).unwrap_err();
        assert!(matches!(err, LexError::UnexpectedByte { byte: b'@', .. }));
    }

    #[test]
    fn string_literal_strips_quotes() {
        let mut interner = StringInterner::new();
        let tokens = lex("\"hello\"", &mut interner).expect("lex should succeed");
        match tokens[0].kind {
            TokenKind::Str(name) => assert_eq!(interner.lookup(name), "hello"),
            other => panic!("expected string token, got {other:?}"),
        }
    }

    #[test]
    fn keyword_wins_over_identifier_of_the_same_text() {
        assert_eq!(kinds("if")[0], TokenKind::If);
    }

    #[test]
    fn string_literal_may_contain_a_literal_newline() {
        let mut interner = StringInterner::new();
        let tokens = lex("\"a\nb\"", &mut interner).expect("lex should succeed");
        match tokens[0].kind {
            TokenKind::Str(name) => assert_eq!(interner.lookup(name), "a\nb"),
            other => panic!("expected string token, got {other:?}"),
        }
    }
}
