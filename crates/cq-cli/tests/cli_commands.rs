#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable
//! End-to-end tests for the `cq` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CAMPUS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/campus.json");

fn cq() -> Command {
    Command::cargo_bin("cq").unwrap()
}

fn bad_data(contents: &str) -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("world.json");
    fs::write(&path, contents).unwrap();
    let path = path.to_str().unwrap().to_string();
    (dir, path)
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_demo_world() {
    cq().args(["check", "-d", CAMPUS])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("All checks passed")
                .and(predicate::str::contains("12 locations, 7 items (4 with a target), 5 puzzles"))
                .and(predicate::str::contains("35 moves")),
        );
}

#[test]
fn check_fails_on_malformed_json() {
    let (_dir, path) = bad_data("{ this is not json");
    cq().args(["check", "-d", &path])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("error:"));
}

#[test]
fn check_fails_on_dangling_destination() {
    let (_dir, path) = bad_data(
        r#"{
            "locations": [
                {"id": 1, "name": "Dorm", "long_description": "A room.",
                 "available_commands": {"go outside": 99}}
            ],
            "items": []
        }"#,
    );
    cq().args(["check", "-d", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("99"));
}

#[test]
fn check_fails_on_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nowhere.json");
    cq().args(["check", "-d", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load"));
}

// ---------------------------------------------------------------------------
// items
// ---------------------------------------------------------------------------

#[test]
fn items_lists_every_item() {
    cq().args(["items", "-d", CAMPUS])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("T-Card")
                .and(predicate::str::contains("Lucky UofT Mug"))
                .and(predicate::str::contains("starbucks receipt"))
                .and(predicate::str::contains("7 items")),
        );
}

#[test]
fn items_on_empty_item_list() {
    let (_dir, path) = bad_data(
        r#"{"locations": [{"id": 1, "name": "Dorm", "long_description": "A room."}], "items": []}"#,
    );
    cq().args(["items", "-d", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("No items found."));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_single_move() {
    cq().args(["simulate", "-d", CAMPUS, "go outside"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[1, 2]")
                .and(predicate::str::contains("ongoing"))
                .and(predicate::str::contains("moves 34")),
        );
}

#[test]
fn simulate_skips_unknown_commands() {
    cq().args(["simulate", "-d", CAMPUS, "fly away", "go outside"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("skipped:")
                .and(predicate::str::contains("[1, 2]"))
                .and(predicate::str::contains("1 rejected")),
        );
}

#[test]
fn simulate_treadmill_with_answers() {
    cq().args([
        "simulate",
        "-d",
        CAMPUS,
        "--answer",
        "",
        "--answer",
        "10.0",
        "go outside",
        "go west",
        "find coach carter",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("[1, 2, 8, 8, 8]")
            .and(predicate::str::contains("score 10"))
            .and(predicate::str::contains("moves 32")),
    );
}

#[test]
fn simulate_runs_out_of_moves() {
    cq().args([
        "simulate",
        "-d",
        CAMPUS,
        "--moves",
        "1",
        "go outside",
        "go south",
    ])
    .assert()
    .success()
    .stdout(
        predicate::str::contains("stopped:")
            .and(predicate::str::contains("[1, 2]"))
            .and(predicate::str::contains("lost")),
    );
}

#[test]
fn simulate_undo_restores_the_move() {
    cq().args(["simulate", "-d", CAMPUS, "go outside", "undo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1]").and(predicate::str::contains("moves 35")));
}

#[test]
fn simulate_verbose_prints_responses() {
    cq().args(["simulate", "-d", CAMPUS, "-v", "look at desk", "pickup note"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("> pickup note")
                .and(predicate::str::contains("You picked up the note.")),
        );
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_reads_commands_from_stdin() {
    cq().args(["play", "-d", CAMPUS, "--no-color", "--name", "Sam"])
        .write_stdin("go outside\nmoves\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Welcome to Campus Quest, Sam!")
                .and(predicate::str::contains("Moves remaining: 34"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_lists_commands_after_unknown_input() {
    cq().args(["play", "-d", CAMPUS, "--no-color"])
        .write_stdin("dance\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("unknown command")
                .and(predicate::str::contains("Available commands:"))
                .and(predicate::str::contains("search cabinet")),
        );
}

#[test]
fn play_asks_what_to_drop() {
    cq().args(["play", "-d", CAMPUS, "--no-color"])
        .write_stdin("look at desk\npickup note\ndrop\nnote\ninventory\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Drop what?")
                .and(predicate::str::contains("You dropped the note."))
                .and(predicate::str::contains("Your inventory is empty.")),
        );
}

#[test]
fn play_stops_at_end_of_input() {
    cq().args(["play", "-d", CAMPUS, "--no-color", "--start", "2"])
        .write_stdin("look\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("King's College Circle"));
}

#[test]
fn play_rejects_unknown_start() {
    cq().args(["play", "-d", CAMPUS, "--start", "404"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
