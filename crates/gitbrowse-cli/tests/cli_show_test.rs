//! `gitbrowse show` against the sample fixture repository

use assert_cmd::Command;
use gitbrowse_test_utils::{fixture_file, gitbrowse, sample_repo, SAMPLE_PNG};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::NamedTempFile;

fn show(fixture: &NamedTempFile) -> Command {
    let mut cmd = gitbrowse();
    cmd.env_remove("GITBROWSE_STORE_URL")
        .env_remove("GITBROWSE_STORE_FIXTURE")
        .arg("--color")
        .arg("never")
        .arg("--fixture")
        .arg(fixture.path())
        .arg("show");
    cmd
}

fn json_stdout(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_show_root_tree_of_default_branch() {
    let fixture = fixture_file(&sample_repo());

    show(&fixture)
        .assert()
        .success()
        .stdout(predicate::str::contains("README"))
        .stdout(predicate::str::contains("hello.py"))
        .stdout(predicate::str::contains("logo.png"))
        .stdout(predicate::str::contains("src/"))
        .stdout(predicate::str::contains("Add sources"));
}

#[test]
fn test_show_tree_as_json() {
    let fixture = fixture_file(&sample_repo());

    let tree = json_stdout(show(&fixture).args(["master", "head", "src", "--json"]));
    let names: Vec<&str> = tree["children"]
        .as_array()
        .unwrap()
        .iter()
        .map(|child| child["basename"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["main.js", "lib"]);
}

#[test]
fn test_show_python_file_as_literate_rows() {
    let fixture = fixture_file(&sample_repo());

    let rows = json_stdout(show(&fixture).args(["master", "head", "hello.py", "--json"]));
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["documentation"], "Greets the world.\n\nRun with python3.\n");
    assert_eq!(rows[0]["code"], "import sys\n\ndef main():\n");
    assert_eq!(rows[1]["documentation"], "Print a greeting\n");
    assert_eq!(rows[1]["code"], "    print(\"hello\")\n");
}

#[test]
fn test_show_python_file_in_columns() {
    let fixture = fixture_file(&sample_repo());

    show(&fixture)
        .args(["master", "head", "hello.py"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Greets the world."))
        .stdout(predicate::str::contains("│ import sys"))
        .stdout(predicate::str::contains("# Greets").not());
}

#[test]
fn test_show_nested_javascript_file() {
    let fixture = fixture_file(&sample_repo());

    let rows = json_stdout(show(&fixture).args(["master", "head", "src/lib/util.js", "--json"]));
    assert_eq!(rows[0]["documentation"], "Helpers\n");
    assert_eq!(rows[0]["code"], "exports.id = (x) => x;\n");
}

#[test]
fn test_show_binary_file_as_hexdump() {
    let fixture = fixture_file(&sample_repo());

    show(&fixture)
        .args(["master", "head", "logo.png"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("00000000  89 50 4e 47 0d 0a 1a 0a"))
        .stdout(predicate::str::contains("|.PNG........IHDR|\r\n"))
        .stdout(predicate::str::ends_with(format!("{:08x}\n", SAMPLE_PNG.len())));
}

#[test]
fn test_show_text_file_with_hex_flag() {
    let fixture = fixture_file(&sample_repo());

    show(&fixture)
        .args(["master", "head", "README", "--hex"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("00000000  23 20 53 61 6d 70 6c 65"));
}

#[test]
fn test_show_plain_text_keeps_hash_lines_as_code() {
    let fixture = fixture_file(&sample_repo());

    show(&fixture)
        .args(["dev", "head", "README"])
        .assert()
        .success()
        .stdout(predicate::str::contains("│ # Sample"))
        .stdout(predicate::str::contains("A sample repository."));
}

#[test]
fn test_json_and_hex_conflict() {
    let fixture = fixture_file(&sample_repo());

    show(&fixture)
        .args(["master", "head", "README", "--hex", "--json"])
        .assert()
        .failure();
}

#[test]
fn test_missing_path_in_older_branch() {
    let fixture = fixture_file(&sample_repo());

    show(&fixture)
        .args(["dev", "head", "hello.py"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot show dev:hello.py"))
        .stderr(predicate::str::contains("no entry named \"hello.py\""));
}

#[test]
fn test_unknown_branch() {
    let fixture = fixture_file(&sample_repo());

    show(&fixture)
        .arg("release")
        .assert()
        .failure()
        .stderr(predicate::str::contains("release"));
}

#[test]
fn test_unsupported_revision() {
    let fixture = fixture_file(&sample_repo());

    show(&fixture)
        .args(["master", "v1.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("v1.0"));
}

#[test]
fn test_descending_into_a_file() {
    let fixture = fixture_file(&sample_repo());

    show(&fixture)
        .args(["master", "head", "src/main.js/x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("src/main.js is a file, not a directory"));
}

#[test]
fn test_invalid_path() {
    let fixture = fixture_file(&sample_repo());

    show(&fixture)
        .args(["master", "head", "src//main.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid path"));
}
