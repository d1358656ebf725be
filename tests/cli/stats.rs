use crate::cli::support::{notelink_in, sample_vault, stdout_json};
use predicates::prelude::*;

#[test]
fn test_stats_cold() {
    let vault = sample_vault();

    let output = notelink_in(vault.path())
        .args(["--format", "json", "stats"])
        .output()
        .unwrap();
    let json = stdout_json(&output);
    assert_eq!(json["total_documents"], 6);
    assert_eq!(json["cache_size"], 0);
    assert_eq!(json["connections_count"], 0);
}

#[test]
fn test_stats_warm() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["stats", "--warm"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Documents: 6"))
        .stdout(predicate::str::contains("Cached: 6"));
}

#[test]
fn test_stats_warm_then_clear() {
    let vault = sample_vault();

    notelink_in(vault.path())
        .args(["--format", "records", "stats", "--warm", "--clear"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "mode=stats total_documents=6 cache_size=0 connections_count=0",
        ));
}

#[test]
fn test_stats_ignores_hidden_and_other_files() {
    let vault = sample_vault();
    std::fs::create_dir_all(vault.path().join(".notelink")).unwrap();
    std::fs::write(vault.path().join(".notelink/cache.md"), "hidden note").unwrap();
    std::fs::write(vault.path().join("image.png"), "not a note").unwrap();

    notelink_in(vault.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Documents: 6"));
}
