//! Integration tests for the duckargs binary.

#![allow(deprecated)] // cargo_bin is deprecated but works fine for standard builds

use assert_cmd::Command;
use predicates::prelude::*;

fn duckargs() -> Command {
    let mut cmd = Command::cargo_bin("duckargs").unwrap();
    cmd.env_remove("DUCKARGS_LANG")
        .env_remove("DUCKARGS_NOCOMMENT")
        .env_remove("DUCKARGS_PRINT");
    cmd
}

// ============================================================================
// Help and Version tests
// ============================================================================

#[test]
fn test_help_shows_all_options() {
    duckargs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--lang"))
        .stdout(predicate::str::contains("--no-comment"))
        .stdout(predicate::str::contains("--print"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--no-color"));
}

#[test]
fn test_version() {
    duckargs()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_short_help_is_an_example_flag() {
    duckargs()
        .args(["-h", "--host", "localhost"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "parser.add_argument('-h', '--host', default='localhost'",
        ));
}

#[test]
fn test_invalid_language_fails() {
    duckargs()
        .args(["--lang", "cobol"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cobol"));
}

// ============================================================================
// Python generation
// ============================================================================

#[test]
fn test_python_readme_example() {
    duckargs()
        .args(["--", "-a", "-b", "-c", "-t", "--int-val", "4", "-e", "--file", "FILE", "positional_arg"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# Generated by duckargs, invoked with the following arguments:\n",
        ))
        .stdout(predicate::str::contains("parser.add_argument('-a', action='store_true', help='a flag')"))
        .stdout(predicate::str::contains(
            "parser.add_argument('-t', '--int-val', default=4, type=int, help='an int value')",
        ))
        .stdout(predicate::str::contains(
            "parser.add_argument('-e', '--file', default=None, type=argparse.FileType(), help='a filename')",
        ))
        .stdout(predicate::str::contains(
            "parser.add_argument('positional_arg', help='a string')",
        ));
}

#[test]
fn test_tokens_without_separator() {
    duckargs()
        .args(["-x", "--xray", "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default=2.5, type=float"));
}

#[test]
fn test_no_comment_and_print() {
    duckargs()
        .args(["--no-comment", "--print", "--", "input", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("import argparse"))
        .stdout(predicate::str::contains("print(args.v)"));
}

#[test]
fn test_env_switches() {
    duckargs()
        .env("DUCKARGS_NOCOMMENT", "1")
        .env("DUCKARGS_PRINT", "1")
        .args(["--", "input", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("import argparse"))
        .stdout(predicate::str::contains("print(args.input)"));
}

// ============================================================================
// C generation
// ============================================================================

#[test]
fn test_c_generation() {
    duckargs()
        .args(["--lang", "c", "--", "-v", "--verbose", "-n", "--num", "0x10", "input"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#include <getopt.h>"))
        .stdout(predicate::str::contains("{\"num\", required_argument, NULL, 'n'},"))
        .stdout(predicate::str::contains("static long int num = 0x10;"))
        .stdout(predicate::str::contains("\"vn:\""));
}

#[test]
fn test_c_language_from_env() {
    duckargs()
        .env("DUCKARGS_LANG", "c")
        .args(["--", "-i", "--int", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("static long int intval = 1;"));
}

// ============================================================================
// Output file
// ============================================================================

#[test]
fn test_output_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("parser.py");

    duckargs()
        .arg("--output")
        .arg(&path)
        .args(["--", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("parser.add_argument('-q', action='store_true', help='a flag')"));
}

#[test]
fn test_output_missing_directory_fails() {
    duckargs()
        .args(["--output", "/nonexistent/dir/parser.py", "--", "-q"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

// ============================================================================
// Inference errors
// ============================================================================

#[test]
fn test_long_option_without_short_fails() {
    duckargs()
        .args(["--", "--verbose"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--verbose"));
}

#[test]
fn test_short_option_too_long_fails() {
    duckargs()
        .args(["--", "-rr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("-rr"));
}

#[test]
fn test_duplicate_names_fail() {
    duckargs()
        .args(["--", "pos1", "pos1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate variable name: pos1"));
}
