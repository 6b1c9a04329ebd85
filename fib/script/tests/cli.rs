use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn fib(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fib"))
        .args(args)
        .env_remove("FIB_ARG")
        .env_remove("FIB_RUNS")
        .env_remove("FIB_REPR")
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

#[test]
fn prints_only_the_result() {
    let output = fib(&[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "1548008755920\n");
}

#[test]
fn repeats_and_verifies() {
    let output = fib(&["300", "10", "--repr", "arbitrary", "--verify", "--quiet"]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "222232244629420445529739893461909967206666939096499764990979600\n"
    );
    assert!(output.stderr.is_empty());
}

#[test]
fn quiet_silences_logs_and_stats() {
    let noisy = Command::new(env!("CARGO_BIN_EXE_fib"))
        .args(["10", "--stats"])
        .env("RUST_LOG", "info")
        .env_remove("FIB_REPR")
        .output()
        .unwrap();
    assert_eq!(stdout(&noisy), "55\n");
    assert!(!noisy.stderr.is_empty());

    let quiet = Command::new(env!("CARGO_BIN_EXE_fib"))
        .args(["10", "--stats", "--quiet"])
        .env("RUST_LOG", "info")
        .env_remove("FIB_REPR")
        .output()
        .unwrap();
    assert!(quiet.status.success());
    assert_eq!(stdout(&quiet), "55\n");
    assert!(quiet.stderr.is_empty());
}

#[test]
fn fixed_width_wraps() {
    let output = fib(&["94"]);
    assert_eq!(stdout(&output), "1293530146158671551\n");
}

#[test]
fn stats_go_to_stderr() {
    let output = fib(&["10", "--stats"]);
    assert_eq!(stdout(&output), "55\n");
    let stderr = std::str::from_utf8(&output.stderr).unwrap();
    let stats: serde_json::Value = serde_json::from_str(stderr.trim()).unwrap();
    assert_eq!(stats["n"], 10);
    assert_eq!(stats["representation"], "fixed");
}

#[test]
fn malformed_input_fails() {
    let output = fib(&["sixty"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let output = Command::new(env!("CARGO_BIN_EXE_fib"))
        .env("FIB_ARG", "sixty")
        .env_remove("RUST_LOG")
        .output()
        .unwrap();
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
