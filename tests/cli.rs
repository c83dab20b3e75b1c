use assert_cmd::Command;
use predicates::str::contains;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn cmd(cwd: &Path) -> Command {
    let mut cmd = Command::cargo_bin("git-bugreport").unwrap();
    cmd.current_dir(cwd)
        .env_remove("GIT_DIR")
        .env_remove("GIT_OBJECT_DIRECTORY")
        .env("GIT_CEILING_DIRECTORIES", cwd)
        .env("GIT_EDITOR", "true");
    cmd
}

/// Every `git-bugreport-*.txt` file in `dir`.
fn reports_in(dir: &Path) -> Vec<PathBuf> {
    let mut reports: Vec<PathBuf> = fs::read_dir(dir)
        .unwrap()
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with("git-bugreport-") && name.ends_with(".txt"))
        })
        .collect();
    reports.sort();
    reports
}

fn single_report(dir: &Path) -> PathBuf {
    let reports = reports_in(dir);
    assert_eq!(reports.len(), 1, "expected one report in {}", dir.display());
    reports.into_iter().next().unwrap()
}

#[test]
fn writes_report_to_output_directory() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path())
        .args(["-o", "reports"])
        .assert()
        .success()
        .stderr(contains("Created new report at"));

    let report = single_report(&tmp.path().join("reports"));
    let name = report.file_name().unwrap().to_str().unwrap();
    // git-bugreport-YYYY-MM-DD.txt
    assert_eq!(name.len(), "git-bugreport-0000-00-00.txt".len());
    let text = fs::read_to_string(report).unwrap();
    assert!(text.starts_with("Thank you for filling out a Git bug report!"));
    assert!(text.contains("\n\n[Safelisted Config Info]\n"));
    assert!(text.contains("not run from a git repository - no hooks to show"));
}

#[test]
fn defaults_to_current_directory_and_overwrites() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path()).assert().success();
    let report = single_report(tmp.path());
    fs::write(&report, "stale contents").unwrap();

    cmd(tmp.path()).assert().success();

    let text = fs::read_to_string(single_report(tmp.path())).unwrap();
    assert!(!text.contains("stale contents"));
    assert_eq!(text.matches("[System Info]").count(), 1);
    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
}

#[test]
fn failing_editor_keeps_report() {
    let tmp = TempDir::new().unwrap();

    cmd(tmp.path()).env("GIT_EDITOR", "false").assert().failure();

    assert_eq!(reports_in(tmp.path()).len(), 1);
}

#[test]
fn rejects_unknown_flags() {
    let tmp = TempDir::new().unwrap();
    cmd(tmp.path()).arg("--suffix").arg("x").assert().failure();
}
