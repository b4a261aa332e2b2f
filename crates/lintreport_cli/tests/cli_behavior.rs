//! Integration tests for CLI behavior
//!
//! These tests verify the external behavior of the CLI tool:
//! what it prints and which exit code it returns for a given input.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a command for the lintreport CLI
fn lintreport_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_lintreport"))
}

/// Helper to get fixtures directory
fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

mod help_command {
    use super::*;

    #[test]
    fn shows_help_with_flag() {
        lintreport_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Usage:"));
    }

    #[test]
    fn shows_version_with_flag() {
        lintreport_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

mod file_input {
    use super::*;

    #[test]
    fn reports_no_problems_for_clean_results() {
        lintreport_cmd()
            .arg(fixtures_dir().join("clean.json"))
            .assert()
            .success()
            .stdout("no problems\n");
    }

    #[test]
    fn succeeds_when_only_warnings() {
        lintreport_cmd()
            .arg(fixtures_dir().join("warnings.json"))
            .assert()
            .success()
            .stdout("foo.scss(5,10): warning foo : Unexpected foo.\n\n1 problem\n");
    }

    #[test]
    fn exits_with_one_when_errors_present() {
        lintreport_cmd()
            .arg(fixtures_dir().join("mixed.json"))
            .assert()
            .code(1)
            .stdout(
                "foo.scss(5,10): error foo : Unexpected foo.\n\
                 bar.scss(6,11): warning bar : Unexpected bar.\n\
                 \n\
                 2 problems\n",
            );
    }

    #[test]
    fn fails_for_missing_file() {
        lintreport_cmd()
            .arg("nonexistent_results.json")
            .assert()
            .code(2)
            .stdout(predicate::str::is_empty());
    }

    #[test]
    fn rejects_fatal_messages() {
        lintreport_cmd()
            .arg(fixtures_dir().join("fatal.json"))
            .assert()
            .code(2)
            .stderr(predicate::str::contains("fatal messages are not supported"));
    }
}

mod stdin_input {
    use super::*;

    #[test]
    fn reads_stdin_without_argument() {
        let input = fs::read_to_string(fixtures_dir().join("warnings.json")).unwrap();

        lintreport_cmd()
            .write_stdin(input)
            .assert()
            .success()
            .stdout(predicate::str::contains("1 problem"));
    }

    #[test]
    fn reads_stdin_with_dash() {
        let input = fs::read_to_string(fixtures_dir().join("mixed.json")).unwrap();

        lintreport_cmd()
            .arg("-")
            .write_stdin(input)
            .assert()
            .code(1)
            .stdout(predicate::str::contains("2 problems"));
    }

    #[test]
    fn rejects_unknown_severity() {
        let input = r#"[{ "filePath": "foo.scss", "messages": [{ "ruleId": "foo", "severity": 3, "message": "m", "line": 1, "column": 1 }] }]"#;

        lintreport_cmd()
            .write_stdin(input)
            .assert()
            .code(2)
            .stderr(predicate::str::contains("unknown severity 3"));
    }

    #[test]
    fn rejects_invalid_json() {
        lintreport_cmd()
            .write_stdin("not json")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Parse error"));
    }
}

mod output_file {
    use super::*;

    #[test]
    fn writes_report_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let report_path = temp_dir.path().join("report.txt");

        lintreport_cmd()
            .arg(fixtures_dir().join("mixed.json"))
            .arg("--output")
            .arg(&report_path)
            .assert()
            .code(1)
            .stdout(predicate::str::is_empty());

        let content = fs::read_to_string(&report_path).unwrap();
        assert_eq!(
            content,
            "foo.scss(5,10): error foo : Unexpected foo.\nbar.scss(6,11): warning bar : Unexpected bar.\n\n2 problems\n"
        );
    }
}
