use std::fs;
use std::path::Path;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use tempfile::{tempdir, TempDir};

/// Get a Command for notelink
pub fn notelink() -> Command {
    cargo_bin_cmd!("notelink")
}

/// Same, already pointed at `root`
pub fn notelink_in(root: &Path) -> Command {
    let mut cmd = notelink();
    cmd.arg("--root").arg(root);
    cmd
}

/// Three-word notes relate to each other; the two-word notes relate to each other.
///
/// Listing order (by id): alpha, beta, delta, epsilon, gamma, learning.
pub fn sample_vault() -> TempDir {
    let dir = tempdir().unwrap();
    write_note(dir.path(), "alpha.md", "rust cargo crate");
    write_note(dir.path(), "beta.md", "tokio async runtime");
    write_note(dir.path(), "epsilon.md", "apple mango pearl");
    write_note(dir.path(), "gamma.md", "red red red blue");
    write_note(dir.path(), "delta.md", "green green green teal");
    write_note(
        dir.path(),
        "learning.md",
        "Я изучаю программирование каждый день, это моя цель. Пишу код вечером.",
    );
    dir
}

pub fn write_note(root: &Path, id: &str, text: &str) {
    let path = root.join(id);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, text).unwrap();
}

pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}
