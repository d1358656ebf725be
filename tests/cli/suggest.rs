use crate::cli::support::{notelink_in, sample_vault, stdout_json};
use predicates::prelude::*;

#[test]
fn test_suggest_from_text_flag() {
    let vault = sample_vault();

    let output = notelink_in(vault.path())
        .args(["--format", "json", "suggest", "--text", "one two three"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let ids: Vec<&str> = json["suggestions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["document_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["alpha.md", "beta.md", "epsilon.md"]);
}

#[test]
fn test_suggest_from_stdin() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["suggest", "-n", "1"])
        .write_stdin("pink pink pink grey")
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggested links:"))
        .stdout(predicate::str::contains("  delta.md  100.0%"))
        .stdout(predicate::str::contains("gamma.md").not());
}

#[test]
fn test_suggest_no_matches() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["suggest", "--text", "one two three four five six"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No suggestions"));
}

#[test]
fn test_suggest_blank_input_is_usage_error() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["suggest", "--text", "   "])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no input text"));
}
