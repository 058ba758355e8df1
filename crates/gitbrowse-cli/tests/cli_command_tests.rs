//! Branch listing, object views, hexdump, configuration and completions

use assert_cmd::Command;
use gitbrowse_test_utils::{fixture_file, gitbrowse, sample_repo};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn clean() -> Command {
    let mut cmd = gitbrowse();
    for var in [
        "GITBROWSE_STORE_URL",
        "GITBROWSE_STORE_FIXTURE",
        "GITBROWSE_DEFAULT_BRANCH",
        "GITBROWSE_LOG_LEVEL",
        "GITBROWSE_LOG_FORMAT",
    ] {
        cmd.env_remove(var);
    }
    cmd.arg("--color").arg("never");
    cmd
}

fn with_fixture(path: &Path) -> Command {
    let mut cmd = clean();
    cmd.arg("--fixture").arg(path);
    cmd
}

// ============================================================================
// branches
// ============================================================================

#[test]
fn test_branches_lists_index_order() {
    let fixture = fixture_file(&sample_repo());

    let output = with_fixture(fixture.path())
        .arg("branches")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("* master"));
    assert!(lines[0].ends_with("git-branch-master"));
    assert!(lines[1].starts_with("  dev"));
}

#[test]
fn test_branches_json() {
    let fixture = fixture_file(&sample_repo());

    let output = with_fixture(fixture.path())
        .args(["branches", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let branches: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(branches[1]["branch"], "dev");
    assert_eq!(branches[1]["_id"], "git-branch-dev");
}

#[test]
fn test_without_store_fails() {
    clean()
        .arg("branches")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No document store configured"));
}

#[test]
fn test_store_flags_are_exclusive() {
    clean()
        .args(["--store-url", "http://localhost:5984/db", "--fixture", "repo.json", "branches"])
        .assert()
        .failure();
}

#[test]
fn test_missing_fixture_file() {
    let dir = TempDir::new().unwrap();

    with_fixture(&dir.path().join("missing.json"))
        .arg("branches")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot load fixture"));
}

#[test]
fn test_invalid_store_url() {
    clean()
        .args(["--store-url", "ftp://example.com/db", "branches"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid configuration"));
}

// ============================================================================
// object
// ============================================================================

#[test]
fn test_object_branch_index() {
    let fixture = fixture_file(&sample_repo());

    with_fixture(fixture.path())
        .args(["object", "git-branches"])
        .assert()
        .success()
        .stdout(predicate::str::contains("git-branch-list"))
        .stdout(predicate::str::contains("master: git-branch-master"));
}

#[test]
fn test_object_commit() {
    let repo = sample_repo();
    let head = repo.head_of("master").unwrap();
    let fixture = fixture_file(&repo);

    with_fixture(fixture.path())
        .args(["object", head.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("git-commit"))
        .stdout(predicate::str::contains("parent git-object-"))
        .stdout(predicate::str::contains("Author:    Fixture Author <author@example.com>"))
        .stdout(predicate::str::contains("    Add sources"))
        .stdout(predicate::str::contains("    And a logo."));
}

#[test]
fn test_object_branch_document() {
    let fixture = fixture_file(&sample_repo());

    with_fixture(fixture.path())
        .args(["object", "git-branch-dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Branch: dev"));
}

#[test]
fn test_object_missing() {
    let fixture = fixture_file(&sample_repo());

    with_fixture(fixture.path())
        .args(["object", "git-object-nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot show object git-object-nope"));
}

// ============================================================================
// hexdump
// ============================================================================

#[test]
fn test_hexdump_local_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, "Hello, World!\n").unwrap();

    clean()
        .arg("hexdump")
        .arg(&path)
        .assert()
        .success()
        .stdout(
            "00000000  48 65 6c 6c 6f 2c 20 57  6f 72 6c 64 21 0a        |Hello, World!.|\r\n\
             0000000e\n",
        );
}

#[test]
fn test_hexdump_empty_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty");
    fs::write(&path, b"").unwrap();

    clean()
        .arg("hexdump")
        .arg(&path)
        .assert()
        .success()
        .stdout("00000000\n");
}

#[test]
fn test_hexdump_missing_file() {
    clean()
        .args(["hexdump", "/nonexistent/file.bin"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot read"));
}

// ============================================================================
// configuration
// ============================================================================

#[test]
fn test_config_file_sets_store_and_default_branch() {
    let dir = TempDir::new().unwrap();
    let fixture = dir.path().join("repo.json");
    sample_repo().write_json(&fixture).unwrap();

    let config = dir.path().join("gitbrowse.toml");
    fs::write(
        &config,
        format!(
            "[store]\nfixture = {:?}\n\n[browse]\ndefault_branch = \"dev\"\n",
            fixture.display().to_string()
        ),
    )
    .unwrap();

    clean()
        .arg("-c")
        .arg(&config)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("README"))
        .stdout(predicate::str::contains("hello.py").not());
}

#[test]
fn test_fixture_from_environment() {
    let fixture = fixture_file(&sample_repo());

    clean()
        .env("GITBROWSE_STORE_FIXTURE", fixture.path())
        .arg("branches")
        .assert()
        .success()
        .stdout(predicate::str::contains("master"));
}

#[test]
fn test_invalid_config_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("gitbrowse.yaml");
    fs::write(&config, "render:\n  doc_width: 3\n").unwrap();

    clean()
        .arg("-c")
        .arg(&config)
        .arg("branches")
        .assert()
        .failure()
        .stderr(predicate::str::contains("doc_width"));
}

#[test]
fn test_verbose_logs_fetches_to_stderr() {
    let fixture = fixture_file(&sample_repo());

    with_fixture(fixture.path())
        .args(["-v", "branches"])
        .assert()
        .success()
        .stderr(predicate::str::contains("git-branches"))
        .stdout(predicate::str::contains("master"));
}

// ============================================================================
// completions and help
// ============================================================================

#[test]
fn test_completions_bash() {
    clean()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gitbrowse"));
}

#[test]
fn test_help_lists_commands() {
    clean()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("branches"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("hexdump"));
}
