//! `arcanec`: reads a source file, runs it, and prints the result
//! (`spec.md` §6, expanded in `SPEC_FULL.md` §3.7/§6 into a real CLI).

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use arcane_diagnostic::Diagnostic;
use arcane_eval::{EvalError, Interpreter, Value};
use clap::Parser;
use tracing::debug;

/// The Arcane language interpreter.
#[derive(Parser)]
#[command(name = "arcanec")]
#[command(about = "Run an Arcane source file", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the `.arc` source file to run.
    path: PathBuf,

    /// Abort the run once this many milliseconds of wall-clock time pass.
    #[arg(long, value_name = "N")]
    timeout_ms: Option<u64>,

    /// Seed the `rnd` builtin for a reproducible run.
    #[arg(long, value_name = "N")]
    seed: Option<u64>,

    /// Raise tracing verbosity (overrides `RUST_LOG` when set).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let source = match std::fs::read_to_string(&cli.path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: could not read {}: {err}", cli.path.display());
            return ExitCode::FAILURE;
        }
    };

    if let Some(seed) = cli.seed {
        arcane_builtins::seed_rng(seed);
    }

    let mut interp = Interpreter::new();
    arcane_builtins::register_all(&mut interp);
    if let Some(timeout_ms) = cli.timeout_ms {
        interp = interp.with_timeout(Duration::from_millis(timeout_ms));
    }

    debug!(path = %cli.path.display(), "running source file");
    match interp.run(&source) {
        Ok(value) => print_result(&value),
        Err(err) => {
            report(err, &source);
            ExitCode::FAILURE
        }
    }
}

/// Prints the interpreter's return value per `SPEC_FULL.md` §6's formatting
/// table, and returns the process exit code: a top-level `Error` value is a
/// failed run even though the interpreter itself didn't raise one. A bare
/// `Null` (no top-level `return`) prints nothing, matching the teacher's
/// `EvalOutput::Void` convention.
fn print_result(value: &Value) -> ExitCode {
    match value {
        Value::Error(message) => {
            eprintln!("{}", message.as_str());
            ExitCode::FAILURE
        }
        Value::Null => ExitCode::SUCCESS,
        other => {
            println!("{}", other.stringify());
            ExitCode::SUCCESS
        }
    }
}

fn report(err: EvalError, source: &str) {
    let diagnostic: Diagnostic = err.into();
    eprintln!("{}", diagnostic.render(source));
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
