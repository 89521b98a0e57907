//! CLI integration tests
//!
//! These tests verify that the CLI works correctly with various options.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (path, content) in files {
        let full = dir.path().join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
    dir
}

fn scenario() -> TempDir {
    project(&[
        (
            "src/app/page.tsx",
            "import { helper } from '../util';\nexport default function Page() { return helper(); }\n",
        ),
        ("src/util.ts", "export function helper() { return 1; }\n"),
        ("src/orphan.ts", "export const x = 1;\n"),
    ])
}

fn tsdeadcode() -> Command {
    Command::cargo_bin("tsdeadcode").unwrap()
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_cli_help() {
    tsdeadcode()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("tsdeadcode"))
        .stdout(predicate::str::contains("--reachability"))
        .stdout(predicate::str::contains("--exclude-dir"));
}

#[test]
fn test_cli_version() {
    tsdeadcode()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tsdeadcode"));
}

// ============================================================================
// Analysis runs
// ============================================================================

#[test]
fn test_terminal_report_and_json_file() {
    let dir = scenario();
    let out = TempDir::new().unwrap();
    let report = out.path().join("report.json");

    tsdeadcode()
        .arg(dir.path())
        .arg("-o")
        .arg(&report)
        .arg("--quiet")
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("src/orphan.ts"))
        .stdout(predicate::str::contains("Total: 2 dead code issues"));

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["deadFiles"], serde_json::json!(["src/orphan.ts"]));
    assert_eq!(json["unusedExports"][0]["name"], "x");
    assert_eq!(json["summary"]["band"], "good");
}

#[test]
fn test_default_output_path_is_in_working_directory() {
    let dir = scenario();
    let cwd = TempDir::new().unwrap();

    tsdeadcode()
        .current_dir(cwd.path())
        .arg(dir.path())
        .arg("-q")
        .assert()
        .success();

    assert!(cwd.path().join("dead-code-report.json").is_file());
}

#[test]
fn test_json_format_prints_document() {
    let dir = scenario();
    let out = TempDir::new().unwrap();

    let output = tsdeadcode()
        .arg(dir.path())
        .args(["--format", "json", "-q", "-o"])
        .arg(out.path().join("r.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed["summary"]["totalIssues"], 2);
}

#[test]
fn test_reachability_flag() {
    let dir = project(&[
        ("src/app/page.tsx", "export default function Page() {}\n"),
        ("src/a.ts", "import { b } from './b';\nexport const a = b;\n"),
        ("src/b.ts", "import { a } from './a';\nexport const b = a;\n"),
    ]);
    let out = TempDir::new().unwrap();
    let report = out.path().join("r.json");

    tsdeadcode()
        .arg(dir.path())
        .args(["-q", "--reachability", "one-hop", "-o"])
        .arg(&report)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["deadFiles"], serde_json::json!([]));
}

#[test]
fn test_exclude_dir_and_root_file_flags() {
    let dir = project(&[
        ("src/main.ts", "import { x } from './x';\n"),
        ("src/x.ts", "export const x = 1;\n"),
        ("generated/types.ts", "export const g = 1;\n"),
    ]);
    let out = TempDir::new().unwrap();
    let report = out.path().join("r.json");

    tsdeadcode()
        .arg(dir.path())
        .args(["-q", "-e", "generated", "--root-file", "main.ts", "-o"])
        .arg(&report)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["deadFiles"], serde_json::json!([]));
}

#[test]
fn test_show_warnings() {
    let dir = project(&[("src/app/page.tsx", "import { a } from './nowhere';\na;\n")]);
    let out = TempDir::new().unwrap();

    tsdeadcode()
        .arg(dir.path())
        .args(["-q", "--show-warnings", "-o"])
        .arg(out.path().join("r.json"))
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stderr(predicate::str::contains("Unresolved import './nowhere'"));
}

#[test]
fn test_config_file_is_read() {
    let dir = project(&[
        ("app/entry.ts", "import { x } from '~/x';\nx;\n"),
        ("app/x.ts", "export const x = 1;\n"),
        (
            ".tsdeadcode.yml",
            "root_basenames: [entry.ts]\nalias:\n  prefix: \"~/\"\n  target: app\n",
        ),
    ]);
    let out = TempDir::new().unwrap();
    let report = out.path().join("r.json");

    tsdeadcode()
        .arg(dir.path())
        .args(["-q", "-o"])
        .arg(&report)
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&report).unwrap()).unwrap();
    assert_eq!(json["summary"]["totalIssues"], 0);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_missing_root_fails() {
    let dir = TempDir::new().unwrap();
    tsdeadcode()
        .arg(dir.path().join("does-not-exist"))
        .arg("-q")
        .assert()
        .failure();
}

#[test]
fn test_unwritable_output_fails() {
    let dir = scenario();
    let out = TempDir::new().unwrap();

    tsdeadcode()
        .arg(dir.path())
        .args(["-q", "-o"])
        .arg(out.path().join("missing-dir").join("r.json"))
        .assert()
        .failure();

    assert!(!out.path().join("missing-dir").exists());
}

#[test]
fn test_bad_config_file_fails() {
    let dir = scenario();
    let config = dir.path().join("broken.toml");
    fs::write(&config, "extensions = [").unwrap();

    tsdeadcode()
        .arg(dir.path())
        .arg("-q")
        .arg("-c")
        .arg(&config)
        .assert()
        .failure();
}
