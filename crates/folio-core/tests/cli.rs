//! CLI surface tests for the `folio` binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn folio() -> Command {
    Command::cargo_bin("folio").unwrap()
}

#[test]
fn render_emits_complete_page() {
    folio()
        .arg("render")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
        .stdout(predicate::str::contains("data-project=\"coastal\""))
        .stdout(predicate::str::contains("id=\"modalBody\""));
}

#[test]
fn render_light_theme_sets_body_class() {
    folio()
        .args(["render", "--theme", "light"])
        .assert()
        .success()
        .stdout(predicate::str::contains("light-mode"));
}

#[test]
fn render_title_override() {
    folio()
        .args(["render", "--title", "Research Portfolio"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<title>Research Portfolio</title>"));
}

#[test]
fn render_to_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let out = dir.path().join("index.html");
    folio()
        .args(["render", "-o"])
        .arg(&out)
        .assert()
        .success();
    let html = std::fs::read_to_string(&out).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>"));
}

#[test]
fn project_prints_detail_fragment() {
    folio()
        .args(["project", "groundwater"])
        .assert()
        .success()
        .stdout(predicate::str::contains("modal-header-plain"))
        .stdout(predicate::str::contains("<img").not());
}

#[test]
fn unknown_project_fails() {
    folio()
        .args(["project", "no-such-slug"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown project"));
}

#[test]
fn search_routes_to_anchor() {
    folio()
        .args(["search", "climate change adaptation"])
        .assert()
        .success()
        .stdout("#experience\n");

    folio()
        .args(["search", "zzz"])
        .assert()
        .success()
        .stdout("#projects\n");
}

#[test]
fn mailto_composes_encoded_url() {
    folio()
        .args([
            "mailto",
            "--name", "Ada Lovelace",
            "--email", "ada@example.org",
            "--subject", "Hello there",
            "--message", "Line one\nLine two",
            "--to", "owner@example.com",
        ])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "mailto:owner@example.com?subject=Hello%20there&body=",
        ))
        .stdout(predicate::str::contains("Name%3A%20Ada%20Lovelace"));
}

#[test]
fn mailto_blank_field_fails() {
    folio()
        .args([
            "mailto",
            "--name", "Ada",
            "--email", "ada@example.org",
            "--subject", "  ",
            "--message", "hi",
        ])
        .assert()
        .failure();
}

#[test]
fn theme_store_round_trip() {
    let dir = tempfile::TempDir::new().unwrap();
    let store = dir.path().join("theme.json");

    folio()
        .args(["theme", "--store"])
        .arg(&store)
        .arg("get")
        .assert()
        .success()
        .stdout("dark\n");

    folio()
        .args(["theme", "--store"])
        .arg(&store)
        .args(["set", "light"])
        .assert()
        .success()
        .stdout("light\n");

    folio()
        .args(["theme", "--store"])
        .arg(&store)
        .arg("toggle")
        .assert()
        .success()
        .stdout("dark\n");
}

#[test]
fn check_reports_catalog_size() {
    folio()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("6 projects"));
}
