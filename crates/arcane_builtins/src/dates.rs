//! Date builtins (`functions.c` `fn_cdate`, `fn_add_days`; `spec.md` §8
//! scenario 6). `arcane_eval::DateValue` only parses and formats the plain
//! triple; calendar arithmetic belongs here, where `chrono` is available.

use chrono::{Datelike, Duration, NaiveDate};

use arcane_eval::{DateValue, EvalError, Value};
use arcane_ir::Span;

use crate::args::{int_arg, require_count, string_arg};

/// `cdate(text)`: parse `MM/DD/YYYY` into a `Date` Value.
pub fn cdate(args: &[Value]) -> Result<Value, EvalError> {
    require_count("cdate", args, 1)?;
    let text = string_arg("cdate", args, 0)?;
    DateValue::parse_mdy(text)
        .map(Value::date)
        .ok_or_else(|| EvalError::type_mismatch(format!("cdate() could not parse date from: {text}"), Span::DUMMY))
}

/// `add_days(date, n)`: calendar addition, not a flat 24h offset, so it
/// rolls over month/year boundaries correctly.
pub fn add_days(args: &[Value]) -> Result<Value, EvalError> {
    require_count("add_days", args, 2)?;
    let Value::Date(date) = &args[0] else {
        return Err(EvalError::type_mismatch(
            format!("add_days() expects a Date as its first argument, found {}", args[0].type_name()),
            Span::DUMMY,
        ));
    };
    let days = int_arg("add_days", args, 1)?;

    let start = NaiveDate::from_ymd_opt(date.year, date.month, date.day)
        .ok_or_else(|| EvalError::type_mismatch(format!("add_days() received an invalid date: {}", **date), Span::DUMMY))?;
    let shifted = start
        .checked_add_signed(Duration::days(days))
        .ok_or_else(|| EvalError::type_mismatch("add_days() produced a date out of range", Span::DUMMY))?;

    Ok(Value::date(DateValue::new(shifted.month(), shifted.day(), shifted.year())))
}
