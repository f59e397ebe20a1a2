//! End-to-end CLI tests.
//!
//! Drives the built binary through stdin, input files and output files,
//! including the error paths and their exit codes.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command with config lookups pointed at `config`, which may not exist.
fn skeleton_with_config(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("html-skeleton").expect("binary should build");
    cmd.env("HTML_SKELETON_CONFIG", config)
        .env("NO_COLOR", "1")
        .env_remove("HTML_SKELETON_LOG");
    cmd
}

fn skeleton(temp: &TempDir) -> Command {
    skeleton_with_config(&temp.path().join("no-config.toml"))
}

#[test]
fn strips_html_from_stdin() {
    let temp = TempDir::new().unwrap();

    skeleton(&temp)
        .write_stdin(r#"<div class="a"><script>alert(1)</script><p id="x">Hi</p></div>"#)
        .assert()
        .success()
        .stdout("<div><p>Hi</p></div>")
        .stderr("");
}

#[test]
fn strips_html_from_file() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("in.html");
    fs::write(&input, "<style>body{color:red}</style><span>text</span>").unwrap();

    skeleton(&temp)
        .arg(&input)
        .assert()
        .success()
        .stdout("<span>text</span>");
}

#[test]
fn collapses_whitespace_by_default() {
    let temp = TempDir::new().unwrap();

    skeleton(&temp)
        .write_stdin("<div>\n  <p>  Hi  </p>\n</div>")
        .assert()
        .success()
        .stdout("<div><p> Hi </p></div>");
}

#[test]
fn keep_whitespace_flag_preserves_layout() {
    let temp = TempDir::new().unwrap();

    for flag in ["-k", "--keep-whitespace"] {
        skeleton(&temp)
            .arg(flag)
            .write_stdin("<div>\n  <p>  Hi  </p>\n</div>")
            .assert()
            .success()
            .stdout("<div>\n  <p>  Hi  </p>\n</div>");
    }
}

#[test]
fn empty_stdin_gives_empty_output() {
    let temp = TempDir::new().unwrap();

    skeleton(&temp)
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}

#[test]
fn writes_output_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out.html");

    skeleton(&temp)
        .args(["-o"])
        .arg(&output)
        .write_stdin("<p style=\"x\">a</p>")
        .assert()
        .success()
        .stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "<p>a</p>");
}

#[test]
fn overwrites_existing_output_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out.html");
    fs::write(&output, "old contents that are longer than the new ones").unwrap();

    skeleton(&temp)
        .arg("--output")
        .arg(&output)
        .write_stdin("<b>new</b>")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "<b>new</b>");
}

#[test]
fn missing_input_file_fails_with_message() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.html");

    skeleton(&temp)
        .arg(&missing)
        .assert()
        .code(1)
        .stdout("")
        .stderr(
            predicate::str::starts_with("Error: Failed to read input file")
                .and(predicate::str::contains("missing.html")),
        );
}

#[test]
fn unwritable_output_fails_without_partial_file() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("no-such-dir").join("out.html");

    skeleton(&temp)
        .arg("-o")
        .arg(&output)
        .write_stdin("<p>a</p>")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to write output file"));

    assert!(!output.exists());
}

#[test]
fn error_is_a_single_line() {
    let temp = TempDir::new().unwrap();

    let assert = skeleton(&temp)
        .arg(temp.path().join("missing.html"))
        .assert()
        .code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert_eq!(stderr.trim_end().lines().count(), 1, "stderr: {}", stderr);
}

#[test]
fn unknown_option_exits_with_one() {
    let temp = TempDir::new().unwrap();

    skeleton(&temp)
        .arg("--bogus")
        .write_stdin("")
        .assert()
        .code(1);
}

#[test]
fn conflicting_parse_modes_exit_with_one() {
    let temp = TempDir::new().unwrap();

    skeleton(&temp)
        .args(["--document", "--fragment"])
        .write_stdin("")
        .assert()
        .code(1);
}

#[test]
fn version_flag_prints_version() {
    let temp = TempDir::new().unwrap();

    skeleton(&temp)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_flag_lists_options() {
    let temp = TempDir::new().unwrap();

    for flag in ["-h", "--help"] {
        skeleton(&temp)
            .arg(flag)
            .assert()
            .success()
            .stdout(
                predicate::str::contains("--keep-whitespace")
                    .and(predicate::str::contains("--output")),
            );
    }
}

#[test]
fn document_flag_adds_wrappers() {
    let temp = TempDir::new().unwrap();

    skeleton(&temp)
        .arg("--document")
        .write_stdin("<p>x</p>")
        .assert()
        .success()
        .stdout("<html><head></head><body><p>x</p></body></html>");
}

#[test]
fn config_file_can_keep_whitespace() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[output]\nkeep_whitespace = true\n").unwrap();

    skeleton_with_config(&config)
        .write_stdin("<p>\n  a\n</p>")
        .assert()
        .success()
        .stdout("<p>\n  a\n</p>");
}

#[test]
fn config_file_parse_mode_is_overridden_by_flag() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[parse]\nmode = \"document\"\n").unwrap();

    skeleton_with_config(&config)
        .arg("--fragment")
        .write_stdin("<p>x</p>")
        .assert()
        .success()
        .stdout("<p>x</p>");
}

#[test]
fn invalid_config_fails() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("config.toml");
    fs::write(&config, "[output]\nkeep_whitespace = \"yes\"\n").unwrap();

    skeleton_with_config(&config)
        .write_stdin("<p>x</p>")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to parse config file"));
}

#[test]
fn debug_logging_goes_to_stderr() {
    let temp = TempDir::new().unwrap();

    skeleton(&temp)
        .env("HTML_SKELETON_LOG", "debug")
        .write_stdin("<p id=\"x\">a</p>")
        .assert()
        .success()
        .stdout("<p>a</p>")
        .stderr(predicate::str::contains("parsed input"));
}

#[test]
fn deep_nesting_exits_cleanly() {
    let temp = TempDir::new().unwrap();
    let depth = 100_000;
    let input = format!("{}x{}", "<span>".repeat(depth), "</span>".repeat(depth));

    skeleton(&temp)
        .write_stdin(input.clone())
        .assert()
        .success()
        .stdout(input);
}
