//! Integration tests for tallyloc CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::tempdir;

fn run_tallyloc(args: &[&str]) -> (String, String, Option<i32>) {
    let output = Command::new(env!("CARGO_BIN_EXE_tallyloc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (stdout, stderr, output.status.code())
}

fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Value after the label on the stdout line starting with `label`.
fn field(stdout: &str, label: &str) -> u64 {
    stdout
        .lines()
        .find_map(|l| l.strip_prefix(label))
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_else(|| panic!("missing field {label:?} in:\n{stdout}"))
}

#[test]
fn test_cli_help() {
    let (stdout, _, code) = run_tallyloc(&["--help"]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("tallyloc"));
    assert!(stdout.contains("--ext"));
    assert!(stdout.contains("--comment-marker"));
    assert!(stdout.contains("--jobs"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, code) = run_tallyloc(&["--version"]);

    assert_eq!(code, Some(0));
    assert!(stdout.contains("tallyloc"));
}

#[test]
fn test_missing_path_is_usage_error() {
    let (_, stderr, code) = run_tallyloc(&[]);

    assert_eq!(code, Some(2));
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_invalid_path() {
    let (_, stderr, code) = run_tallyloc(&["/nonexistent/path"]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("Error:"));
    // Reported once, not also through the log output
    assert_eq!(stderr.matches("path does not exist").count(), 1);
}

#[test]
fn test_summary_output() {
    let temp = tempdir().unwrap();
    create_file(&temp.path().join("A.java"), "\n// comment\nint x = 1;\n");
    create_file(
        &temp.path().join("pkg/B.java"),
        "/**\n * Doc\n */\nclass B {\n}\n",
    );
    create_file(&temp.path().join("notes.txt"), "not counted\n");

    let (stdout, _, code) = run_tallyloc(&[temp.path().to_str().unwrap()]);

    assert_eq!(code, Some(0));
    assert_eq!(field(&stdout, "Source files:"), 2);
    assert_eq!(field(&stdout, "Total lines:"), 8);
    assert_eq!(field(&stdout, "Code lines:"), 3);
    assert_eq!(field(&stdout, "Blank lines:"), 1);
    assert_eq!(field(&stdout, "Comment lines:"), 4);
    assert!(stdout.contains("-------------------------------------"));
    assert!(stdout.contains("Total Time is: "));
}

#[test]
fn test_output_line_order() {
    let temp = tempdir().unwrap();
    create_file(&temp.path().join("A.java"), "int a;\n");

    let (stdout, _, _) = run_tallyloc(&[temp.path().to_str().unwrap()]);
    let labels: Vec<&str> = stdout
        .lines()
        .map(|l| l.split(':').next().unwrap_or(""))
        .collect();

    assert_eq!(
        labels,
        vec![
            "Source files",
            "Total lines",
            "Code lines",
            "Blank lines",
            "Comment lines",
            "-------------------------------------",
            "Total Time is",
        ]
    );
}

#[test]
fn test_empty_directory() {
    let temp = tempdir().unwrap();

    let (stdout, _, code) = run_tallyloc(&[temp.path().to_str().unwrap()]);

    assert_eq!(code, Some(0));
    assert_eq!(field(&stdout, "Source files:"), 0);
    assert_eq!(field(&stdout, "Total lines:"), 0);
}

#[test]
fn test_custom_extension_and_markers() {
    let temp = tempdir().unwrap();
    create_file(&temp.path().join("run.py"), "# setup\n\nprint('hi')\n");
    create_file(&temp.path().join("Main.java"), "class Main {}\n");

    let (stdout, _, code) = run_tallyloc(&[
        temp.path().to_str().unwrap(),
        "--ext",
        ".py",
        "--comment-marker",
        "#",
        "--jobs",
        "2",
    ]);

    assert_eq!(code, Some(0));
    assert_eq!(field(&stdout, "Source files:"), 1);
    assert_eq!(field(&stdout, "Comment lines:"), 1);
    assert_eq!(field(&stdout, "Code lines:"), 1);
}

#[test]
fn test_exclude_pattern() {
    let temp = tempdir().unwrap();
    create_file(&temp.path().join("src/App.java"), "class App {}\n");
    create_file(&temp.path().join("gen/Stub.java"), "class Stub {}\n");

    let (stdout, _, code) = run_tallyloc(&[
        temp.path().to_str().unwrap(),
        "--exclude",
        "**/gen/**",
    ]);

    assert_eq!(code, Some(0));
    assert_eq!(field(&stdout, "Source files:"), 1);
}

#[test]
fn test_invalid_exclude_pattern() {
    let temp = tempdir().unwrap();

    let (_, stderr, code) = run_tallyloc(&[temp.path().to_str().unwrap(), "-e", "[invalid"]);

    assert_eq!(code, Some(1));
    assert!(stderr.contains("invalid glob pattern"));
}
