use crate::cli::support::{notelink_in, sample_vault, stdout_json};
use predicates::prelude::*;

#[test]
fn test_clusters_default_size() {
    let vault = sample_vault();

    let output = notelink_in(vault.path())
        .args(["--format", "json", "clusters"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let clusters = json["clusters"].as_array().unwrap();
    assert_eq!(clusters.len(), 1);
    assert_eq!(
        clusters[0]["member_ids"],
        serde_json::json!(["alpha.md", "beta.md", "epsilon.md"])
    );
    assert_eq!(clusters[0]["connection_count"], 2);
}

#[test]
fn test_clusters_min_size_two() {
    let vault = sample_vault();

    let output = notelink_in(vault.path())
        .args(["--format", "json", "clusters", "--min-size", "2"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    let clusters = json["clusters"].as_array().unwrap();

    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0]["connection_count"], 2);
    assert_eq!(
        clusters[1]["member_ids"],
        serde_json::json!(["delta.md", "gamma.md"])
    );
}

#[test]
fn test_clusters_human_and_records() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .arg("clusters")
        .assert()
        .success()
        .stdout(predicate::str::contains("(3 notes, 2 connections)"))
        .stdout(predicate::str::contains("  epsilon.md"));

    notelink_in(vault.path())
        .args(["--format", "records", "clusters"])
        .assert()
        .success()
        .stdout(predicate::str::contains("H notelink=1 records=1 mode=clusters count=1"))
        .stdout(predicate::str::contains(
            r#"connections=2 members="alpha.md","beta.md","epsilon.md""#,
        ));
}

#[test]
fn test_clusters_none_in_small_vault() {
    let vault = tempfile::tempdir().unwrap();

    notelink_in(vault.path())
        .arg("clusters")
        .assert()
        .success()
        .stdout(predicate::str::contains("No clusters of 3 or more notes"));
}
