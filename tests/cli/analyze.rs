use crate::cli::support::{notelink_in, sample_vault, stdout_json, write_note};
use predicates::prelude::*;

#[test]
fn test_analyze_note() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["analyze", "learning.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note: learning.md"))
        .stdout(predicate::str::contains("Tags: обучение, цели, программирование"))
        .stdout(predicate::str::contains("Related notes: none"))
        .stdout(predicate::str::contains("Excerpt:"))
        .stdout(predicate::str::contains("Пишу код вечером."));
}

#[test]
fn test_analyze_short_note_is_skipped() {
    let vault = sample_vault();

    let output = notelink_in(vault.path())
        .args(["--format", "json", "analyze", "alpha.md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["id"], "alpha.md");
    assert_eq!(
        json["analysis"]["skipped"],
        "note too short (16 of 50 characters)"
    );
}

#[test]
fn test_analyze_records_wraps_body() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["--format", "records", "analyze", "learning.md"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"H notelink=1 records=1 mode=analyze id="learning.md" content_type=technical"#,
        ))
        .stdout(predicate::str::contains("B \"learning.md\"\n"))
        .stdout(predicate::str::contains("B-END"));
}

#[test]
fn test_analyze_missing_note() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["analyze", "nope.md"])
        .assert()
        .code(3);
}

#[test]
fn test_analyze_folder() {
    let vault = sample_vault();
    let text = "Я изучаю программирование каждый день, это моя цель. Пишу код вечером.";
    write_note(vault.path(), "journal/day one.md", text);
    write_note(vault.path(), "journal/day two.md", "rust cargo crate");

    let output = notelink_in(vault.path())
        .args(["--format", "json", "analyze", "--folder", "journal/"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["folder"], "journal/");
    let notes = json["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["id"], "journal/day one.md");
    assert_eq!(
        notes[0]["analysis"]["suggestions"][0]["document_id"],
        "learning.md"
    );
    assert_eq!(notes[1]["id"], "journal/day two.md");
    assert!(notes[1]["analysis"]["skipped"].is_string());
}

#[test]
fn test_analyze_folder_human_and_records() {
    let vault = sample_vault();
    write_note(vault.path(), "journal/day one.md", "rust cargo crate");

    notelink_in(vault.path())
        .args(["analyze", "--folder", "journal/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Note: journal/day one.md"))
        .stdout(predicate::str::contains("Analyzed 1 notes"));

    notelink_in(vault.path())
        .args(["--format", "records", "analyze", "--folder", "journal/"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"H notelink=1 records=1 mode=analyze folder="journal/" count=1"#,
        ))
        .stdout(predicate::str::contains(r#"N id="journal/day one.md""#))
        .stdout(predicate::str::contains("B \"journal/day one.md\"\n"));
}

#[test]
fn test_analyze_empty_folder() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["analyze", "--folder", "archive/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes in folder archive/"));
}

#[test]
fn test_analyze_needs_id_or_folder() {
    let vault = sample_vault();

    notelink_in(vault.path()).arg("analyze").assert().code(2);
    notelink_in(vault.path())
        .args(["analyze", "alpha.md", "--folder", "journal/"])
        .assert()
        .code(2);
}
