//! CLI integration tests for the `mocat` binary, using `assert_cmd` and
//! `predicates` to drive the compiled binary and assert on its output.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn mocat_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("mocat"))
}

fn sample_mo_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let bytes = common::build_mo(&[("Open", "Ouvrir"), ("Close", "Fermer")]);
    file.write_all(&bytes).unwrap();
    file
}

#[test]
fn inspect_prints_string_count_and_search_method() {
    let file = sample_mo_file();
    mocat_cmd()
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("string count: 2"))
        .stdout(predicate::str::contains("search method:"));
}

#[test]
fn query_prints_translation() {
    let file = sample_mo_file();
    mocat_cmd()
        .arg("query")
        .arg(file.path())
        .arg("Open")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ouvrir"));
}

#[test]
fn query_reports_untranslated_on_miss() {
    let file = sample_mo_file();
    mocat_cmd()
        .arg("query")
        .arg(file.path())
        .arg("Welcome")
        .assert()
        .success()
        .stdout(predicate::str::contains("(untranslated)"));
}

#[test]
fn inspect_reports_invalid_format_for_garbage_input() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(&[0u8; 10]).unwrap();
    mocat_cmd().arg("inspect").arg(file.path()).assert().failure();
}
