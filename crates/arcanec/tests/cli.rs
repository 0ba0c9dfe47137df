// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI-level tests for the `arcanec` binary, driving it the way a user
//! would from a shell (`spec.md` §8's end-to-end scenarios, plus the exit
//! code and flag surface `SPEC_FULL.md` §6 adds).

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn arcanec() -> Command {
    Command::cargo_bin("arcanec").expect("binary built")
}

fn script(source: &str) -> NamedTempFile {
    use std::io::Write;
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{source}").expect("write source");
    file
}

#[test]
fn prints_help() {
    arcanec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("arcanec"));
}

#[test]
fn runs_a_program_and_prints_its_output() {
    let file = script("a = 5; a += 2; print(a);");
    arcanec()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq("7\n"));
}

#[test]
fn division_by_zero_exits_nonzero() {
    let file = script("x = 10 / 0;");
    arcanec().arg(file.path()).assert().failure();
}

#[test]
fn missing_file_exits_nonzero() {
    arcanec()
        .arg("/no/such/file.arc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could not read"));
}

#[test]
fn seed_flag_makes_rnd_deterministic() {
    let file = script("print(rnd(1, 1000000));");
    let first = arcanec()
        .arg(file.path())
        .arg("--seed")
        .arg("42")
        .output()
        .expect("run once");
    let second = arcanec()
        .arg(file.path())
        .arg("--seed")
        .arg("42")
        .output()
        .expect("run twice");
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn timeout_flag_aborts_an_infinite_loop() {
    let file = script("while (true) { }");
    arcanec()
        .arg(file.path())
        .arg("--timeout-ms")
        .arg("50")
        .assert()
        .failure();
}
