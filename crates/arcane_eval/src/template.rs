//! `${NAME}` string template expansion (`spec.md` §4.4).
//!
//! Applied at the moment a string-literal expression node is evaluated, not
//! at lex time — the literal token retains its raw, unexpanded text.

use arcane_ir::{Span, StringInterner};

use crate::environment::Environment;
use crate::errors::EvalError;

/// Expand every `${NAME}` occurrence in `raw` against `env`. Literal bytes
/// outside `${...}` are copied verbatim; an unclosed `${` is a fatal
/// `TemplateError`, a name with no binding is the ordinary
/// `UndefinedVariable` error.
pub fn expand(
    raw: &str,
    env: &Environment,
    interner: &mut StringInterner,
    span: Span,
) -> Result<String, EvalError> {
    if !raw.contains("${") {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let bytes = raw.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        if bytes[pos] == b'$' && bytes.get(pos + 1) == Some(&b'{') {
            let name_start = pos + 2;
            let Some(rel_close) = raw[name_start..].find('}') else {
                return Err(EvalError::template_error(
                    "unterminated `${...}` in string template",
                    span,
                ));
            };
            let name_text = &raw[name_start..name_start + rel_close];
            let name = interner.intern(name_text);
            let value = env.get(name, interner, span)?;
            out.push_str(&value.stringify());
            pos = name_start + rel_close + 1;
        } else {
            let ch = raw[pos..].chars().next().unwrap_or('\u{FFFD}');
            out.push(ch);
            pos += ch.len_utf8();
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn substitutes_known_name() {
        let mut interner = StringInterner::new();
        let mut env = Environment::new();
        let x = interner.intern("x");
        env.set(x, crate::value::Value::Int(7));
        let result = expand("x=${x}", &env, &mut interner, Span::DUMMY).unwrap();
        assert_eq!(result, "x=7");
    }

    #[test]
    fn missing_close_brace_is_fatal() {
        let mut interner = StringInterner::new();
        let env = Environment::new();
        let err = expand("x=${x", &env, &mut interner, Span::DUMMY);
        assert!(err.is_err());
    }

    #[test]
    fn missing_variable_is_undefined_error() {
        let mut interner = StringInterner::new();
        let env = Environment::new();
        let err = expand("${missing}", &env, &mut interner, Span::DUMMY);
        assert!(err.is_err());
    }

    #[test]
    fn literal_text_without_templates_is_passthrough() {
        let mut interner = StringInterner::new();
        let env = Environment::new();
        let result = expand("no templates here", &env, &mut interner, Span::DUMMY).unwrap();
        assert_eq!(result, "no templates here");
    }
}
