//! Scalar host builtins without their own natural module (`functions.c`
//! `fn_print`, `fn_number_range`, `fn_sleep`).

use std::cell::RefCell;
use std::thread;
use std::time::Duration;

use arcane_eval::{EvalError, Value};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::args::{int_arg, require_count};

enum Source {
    Seeded(StdRng),
    Thread,
}

thread_local! {
    static RNG: RefCell<Source> = const { RefCell::new(Source::Thread) };
}

/// Makes `rnd` deterministic for the remainder of this thread (`arcanec`'s
/// `--seed` flag, `spec.md` §3.7). Not part of the original's builtin list —
/// a CLI-only hook, wired through [`crate::register_all`]'s caller rather
/// than registered as a callable Arcane function.
pub fn seed_rng(seed: u64) {
    RNG.with(|rng| *rng.borrow_mut() = Source::Seeded(StdRng::seed_from_u64(seed)));
}

/// `print(v)`: writes the value's stringified form plus a trailing newline
/// to standard output (`functions.c`'s `fn_println`; this crate folds
/// `print`/`println` into one builtin since `spec.md` §8's scenarios all
/// expect one value per printed line).
pub fn print(args: &[Value]) -> Result<Value, EvalError> {
    require_count("print", args, 1)?;
    println!("{}", args[0].stringify());
    Ok(Value::Null)
}

/// `rnd(from, to)`: a uniformly distributed integer in `[from, to]`
/// inclusive (`functions.c`'s `fn_number_range`, reimplemented on `rand`
/// instead of the source's hand-rolled power-of-two rejection sampler).
/// A degenerate range (`to <= from`) returns `from`, matching the source.
pub fn rnd(args: &[Value]) -> Result<Value, EvalError> {
    require_count("rnd", args, 2)?;
    let from = int_arg("rnd", args, 0)?;
    let to = int_arg("rnd", args, 1)?;
    if to <= from {
        return Ok(Value::Int(from));
    }
    let value = RNG.with(|rng| match &mut *rng.borrow_mut() {
        Source::Seeded(rng) => rng.gen_range(from..=to),
        Source::Thread => rand::thread_rng().gen_range(from..=to),
    });
    Ok(Value::Int(value))
}

/// `sleep_ms(n)`: blocks the calling thread for `n` milliseconds
/// (`functions.c`'s `fn_sleep`); negative durations clamp to zero.
pub fn sleep_ms(args: &[Value]) -> Result<Value, EvalError> {
    require_count("sleep_ms", args, 1)?;
    let ms = int_arg("sleep_ms", args, 0)?.max(0);
    thread::sleep(Duration::from_millis(ms as u64));
    Ok(Value::Null)
}
