//! Reference host-function library for Arcane (`spec.md` §1, §6; `spec.md`
//! §9's "external collaborator named only by interface").
//!
//! `arcane_eval` only specifies the call protocol
//! (`arcane_eval::registry::Builtins`); this crate is a concrete, if partial,
//! implementation of it, grounded function-by-function on the original
//! `functions.c` reference implementation (see `DESIGN.md`).

mod args;
mod arrays;
mod dates;
mod misc;
mod strings;

use arcane_eval::Interpreter;

pub use misc::seed_rng;

/// Register every builtin this crate implements against `interp`. Call this
/// once, before the first `Interpreter::run` (`spec.md` §6: "registration
/// is static").
pub fn register_all(interp: &mut Interpreter) {
    interp.register_builtin("print", misc::print);
    interp.register_builtin("rnd", misc::rnd);
    interp.register_builtin("sleep_ms", misc::sleep_ms);

    interp.register_builtin("len", strings::len);
    interp.register_builtin("left", strings::left);
    interp.register_builtin("right", strings::right);
    interp.register_builtin("substring", strings::substring);
    interp.register_builtin("upper", strings::upper);
    interp.register_builtin("lower", strings::lower);
    interp.register_builtin("split", strings::split);
    interp.register_builtin("join", strings::join);
    interp.register_builtin("type_of", strings::type_of);
    interp.register_builtin("to_string", strings::to_string);

    interp.register_builtin("new_array", arrays::new_array);
    interp.register_builtin("array_set", arrays::array_set);
    interp.register_builtin("ubound", arrays::ubound);

    interp.register_builtin("cdate", dates::cdate);
    interp.register_builtin("add_days", dates::add_days);
}
