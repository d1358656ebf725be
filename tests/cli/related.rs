use crate::cli::support::{notelink_in, sample_vault, stdout_json};
use predicates::prelude::*;

#[test]
fn test_related_human() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["related", "alpha.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Related to alpha.md:"))
        .stdout(predicate::str::contains("  beta.md  100.0%"))
        .stdout(predicate::str::contains("  epsilon.md  100.0%"))
        .stdout(predicate::str::contains("gamma.md").not());
}

#[test]
fn test_related_json() {
    let vault = sample_vault();

    let output = notelink_in(vault.path())
        .args(["--format", "json", "related", "gamma.md"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["source"], "gamma.md");
    let connections = json["connections"].as_array().unwrap();
    assert_eq!(connections.len(), 1);
    assert_eq!(connections[0]["document_id"], "delta.md");
    assert!(connections[0]["reasons"].as_array().unwrap().is_empty());
}

#[test]
fn test_related_limit() {
    let vault = sample_vault();

    let output = notelink_in(vault.path())
        .args(["--format", "json", "related", "alpha.md", "-n", "1"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["connections"].as_array().unwrap().len(), 1);
}

#[test]
fn test_related_records() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["--format", "records", "related", "alpha.md"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r#"H notelink=1 records=1 mode=related source="alpha.md" count=2"#,
        ))
        .stdout(predicate::str::contains(
            r#"C "beta.md" similarity=1.000 reasons="""#,
        ));
}

#[test]
fn test_related_nothing_found() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["related", "learning.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No related notes found for learning.md"));
}

#[test]
fn test_related_missing_note_exit_code_3() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["related", "missing.md"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("document not found: missing.md"));
}

#[test]
fn test_related_missing_note_json_envelope() {
    let vault = sample_vault();

    let output = notelink_in(vault.path())
        .args(["--format", "json", "related", "missing.md"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let envelope: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(envelope["error"]["code"], 3);
    assert_eq!(envelope["error"]["type"], "document_not_found");
}

#[test]
fn test_related_rejects_out_of_range_similarity() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["related", "alpha.md", "--min-similarity", "1.5"])
        .assert()
        .code(2);
}
