use crate::cli::support::notelink;
use predicates::prelude::*;

#[test]
fn test_classify_human() {
    notelink()
        .args([
            "classify",
            "--text",
            "Я изучаю программирование каждый день, это моя цель",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Tags: обучение, цели, программирование",
        ))
        .stdout(predicate::str::contains("Emotional tone: neutral"))
        .stdout(predicate::str::contains("Content type: technical"));
}

#[test]
fn test_classify_json() {
    let output = notelink()
        .args(["--format", "json", "classify", "--text", "Сегодня всё отлично, я рад"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["emotional_tone"]["tone"], "positive");
    assert_eq!(json["content_type"], "emotional");
    assert_eq!(json["tags"], serde_json::json!(["эмоции-позитивные"]));
}

#[test]
fn test_classify_records() {
    notelink()
        .args(["--format", "records", "classify", "--text", "Using HTTPS with TypeScript"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H notelink=1 records=1 mode=classify"))
        .stdout(predicate::str::contains("W \"HTTPS\""))
        .stdout(predicate::str::contains("W \"TypeScript\""));
}

#[test]
fn test_classify_does_not_need_a_vault() {
    notelink()
        .args(["--root", "/nonexistent/vault", "classify", "--text", "plain words"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Tags: none"));
}
