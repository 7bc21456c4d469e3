#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn diary_cmd() -> Command {
    let mut cmd = Command::cargo_bin("diary").unwrap();
    cmd.env_remove("DIARY_ROOT");
    cmd.env_remove("DIARY_LOG_LEVEL");
    cmd
}

/// Run `diary add` in `dir` and return the id it printed
pub fn add_entry(dir: &Path, title: &str, contents: &str, date: &str) -> String {
    let output = diary_cmd()
        .current_dir(dir)
        .args(["add", "--title", title, "--contents", contents, "--date", date])
        .output()
        .unwrap();
    assert!(output.status.success(), "add failed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let start = stdout.rfind('[').unwrap() + 1;
    let end = stdout.rfind(']').unwrap();
    stdout[start..end].to_string()
}
