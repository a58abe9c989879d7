use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};

fn write_corpus(dir: &Path) -> PathBuf {
    let path = dir.join("data.json");
    std::fs::write(&path, r#"[[["Alpha","Beta"]],[["Gamma"]]]"#).unwrap();
    path
}

fn verz(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("verz").unwrap();
    cmd.current_dir(dir);
    cmd
}

#[test]
fn show_renders_the_first_chapter_by_default() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_corpus(temp_dir.path());

    verz(temp_dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicates::str::contains("CHAPTER 1 OF 2"))
        .stdout(predicates::str::contains("Alpha"))
        .stdout(predicates::str::contains("Beta"))
        .stdout(predicates::str::contains("Gamma").not());
}

#[test]
fn show_jumps_to_the_requested_chapter() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_corpus(temp_dir.path());

    verz(temp_dir.path())
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("CHAPTER 2 OF 2"))
        .stdout(predicates::str::contains("Gamma"));
}

#[test]
fn out_of_range_chapter_warns_without_failing() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_corpus(temp_dir.path());

    verz(temp_dir.path())
        .args(["show", "9"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Chapter 9 is out of range (1-2)"))
        .stdout(predicates::str::contains("CHAPTER 1 OF 2"));
}

#[test]
fn search_jumps_to_the_matching_chapter() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_corpus(temp_dir.path());

    verz(temp_dir.path())
        .args(["search", "beta"])
        .assert()
        .success()
        .stdout(predicates::str::contains("CHAPTER 1 OF 2"))
        .stdout(predicates::str::contains("Verse found."));
}

#[test]
fn search_miss_reports_not_found_on_the_current_page() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_corpus(temp_dir.path());

    verz(temp_dir.path())
        .args(["search", "Delta"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Verse not found."))
        .stdout(predicates::str::contains("CHAPTER 1 OF 2"));
}

#[test]
fn random_prints_exactly_one_known_verse() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_corpus(temp_dir.path());

    verz(temp_dir.path())
        .arg("random")
        .assert()
        .success()
        .stdout(predicates::str::is_match("^(Alpha|Beta|Gamma)\n$").unwrap());
}

#[test]
fn random_on_empty_corpus_reports_no_verses() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("data.json"), "[]").unwrap();

    verz(temp_dir.path())
        .arg("random")
        .assert()
        .success()
        .stdout(predicates::str::contains("No verses available."))
        .stdout(predicates::str::contains("CHAPTER").not());
}

#[test]
fn missing_corpus_file_is_a_load_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    verz(temp_dir.path())
        .arg("show")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error: IO error"));
}

#[test]
fn malformed_corpus_file_is_a_load_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("data.json"), "{ nope").unwrap();

    verz(temp_dir.path())
        .arg("show")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Error: Invalid corpus data"));
}

#[test]
fn data_flag_overrides_the_default_path() {
    let temp_dir = tempfile::tempdir().unwrap();
    let custom = temp_dir.path().join("psalms.json");
    std::fs::write(&custom, r#"[[["Selah"]]]"#).unwrap();

    verz(temp_dir.path())
        .args(["--data", custom.to_str().unwrap(), "show"])
        .assert()
        .success()
        .stdout(predicates::str::contains("CHAPTER 1 OF 1"))
        .stdout(predicates::str::contains("Selah"));
}
