//! Exit codes and stdout of the lesson binaries.

mod common;

use common::write_inputs;
use std::path::Path;
use std::process::{Command, Output};

fn run_basics(data_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_basics"))
        .env("VISION_TOUR_DATA_DIR", data_dir)
        .env("VISION_TOUR_OUT_DIR", data_dir.join("out"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn run_tour(data_dir: &Path, command: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vision_tour"))
        .arg("--data-dir")
        .arg(data_dir)
        .arg("--out-dir")
        .arg(data_dir.join("out"))
        .arg(command)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn read_failure(data_dir: &Path) -> String {
    format!("Failed to read image: {}", data_dir.join("messi.jpg").display())
}

#[test]
fn basics_exits_with_one_when_input_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_basics(dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout, format!("{}\n", read_failure(dir.path())));
}

#[test]
fn basics_prints_notes_and_exits_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let output = run_basics(dir.path());

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Number of channels: 3"), "{stdout}");
    assert!(dir.path().join("out").join("border_blur_messi.jpg").exists());
}

#[test]
fn tour_all_fails_when_inputs_are_missing() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_tour(dir.path(), "all");

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(&read_failure(dir.path())), "{stdout}");
    assert!(stdout.contains("0/4 lessons succeeded"), "{stdout}");
}

#[test]
fn tour_all_succeeds_with_every_input() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    let output = run_tour(dir.path(), "all");

    assert!(output.status.success(), "{output:?}");
    let stdout = String::from_utf8(output.stdout).unwrap();
    for lesson in ["basics", "arithmetics", "thresholding", "geometry"] {
        assert!(stdout.contains(&format!("== {lesson}")), "{stdout}");
    }
    assert!(stdout.contains("4/4 lessons succeeded"), "{stdout}");
}
