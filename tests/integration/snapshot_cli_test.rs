//! CLI output snapshot tests
//!
//! Runs the binary over the fixtures and pins the exact output.

use std::path::PathBuf;
use std::process::Command;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Helper to run html-skeleton and capture output
fn run_skeleton(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_html-skeleton"))
        .args(args)
        .env("HTML_SKELETON_CONFIG", fixture("does-not-exist.toml"))
        .env("NO_COLOR", "1")
        .env_remove("HTML_SKELETON_LOG")
        .output()
        .expect("Failed to execute html-skeleton");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn snapshot_release_notes() {
    let path = fixture("release_notes.html");
    let (stdout, stderr, exit_code) = run_skeleton(&[path.to_str().unwrap()]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    insta::assert_snapshot!(stdout, @"<!DOCTYPE html><html><head><meta><title>Release notes</title><link></head><body><!-- main content --><article><h1>Release notes</h1><p>Fixed <a>a crash</a> on startup.</p><ul><li>Faster parsing</li><li>Smaller output</li></ul></article></body></html>");
}

#[test]
fn snapshot_release_notes_keep_whitespace_head() {
    let path = fixture("release_notes.html");
    let (stdout, _, exit_code) = run_skeleton(&["--keep-whitespace", path.to_str().unwrap()]);

    assert_eq!(exit_code, 0);
    let head: String = stdout.lines().take(4).collect::<Vec<_>>().join("\n");
    insta::assert_snapshot!(head, @r###"
    <!DOCTYPE html><html><head>
      <meta>
      <title>Release notes</title>
      <link>
    "###);
}
