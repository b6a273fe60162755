/// End-to-end tests for the CLI
///
/// Each test builds a fake site-packages directory with `.dist-info`
/// entries and runs the binary against it with `--site-packages`.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Writes `<name>-<version>.dist-info/METADATA` with the given extra headers.
fn write_dist(site_packages: &Path, name: &str, version: &str, headers: &str) -> PathBuf {
    let dist_info = site_packages.join(format!("{}-{}.dist-info", name, version));
    fs::create_dir_all(&dist_info).unwrap();
    let metadata = format!(
        "Metadata-Version: 2.1\nName: {}\nVersion: {}\n{}\n",
        name, version, headers
    );
    fs::write(dist_info.join("METADATA"), metadata).unwrap();
    dist_info
}

/// Fake environment with four libraries plus pip.
fn create_site_packages(dir: &Path) -> PathBuf {
    let site_packages = dir.join("site-packages");
    fs::create_dir_all(&site_packages).unwrap();

    write_dist(
        &site_packages,
        "requests",
        "2.31.0",
        "Author: Kenneth Reitz\nHome-page: https://requests.readthedocs.io\nLicense: Apache 2.0",
    );
    write_dist(
        &site_packages,
        "Django",
        "4.2.7",
        "Author: Django Software Foundation\nClassifier: License :: OSI Approved :: BSD License",
    );
    write_dist(&site_packages, "six", "1.16.0", "Author: Benjamin Peterson\nLicense: MIT");
    write_dist(&site_packages, "attrs", "23.1.0", "License: MIT");
    write_dist(&site_packages, "pip", "24.0", "License: MIT");

    site_packages
}

fn run_in(dir: &TempDir, site_packages: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("py-licenses");
    cmd.current_dir(dir.path())
        .arg("--site-packages")
        .arg(site_packages);
    cmd
}

// ============================================================================
// Exit code tests
// ============================================================================

mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - normal execution
    #[test]
    fn test_exit_code_success() {
        let dir = TempDir::new().unwrap();
        let site_packages = create_site_packages(dir.path());
        run_in(&dir, &site_packages).assert().code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("py-licenses").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("py-licenses").arg("--version").assert().code(0);
    }

    /// Exit code 1: a fail-on license was found
    #[test]
    fn test_exit_code_policy_violation() {
        let dir = TempDir::new().unwrap();
        let site_packages = create_site_packages(dir.path());
        run_in(&dir, &site_packages)
            .args(["--fail-on", "MIT"])
            .assert()
            .code(1);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("py-licenses")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Invalid keyword values
    #[test]
    fn test_exit_code_invalid_order() {
        let dir = TempDir::new().unwrap();
        let site_packages = create_site_packages(dir.path());
        run_in(&dir, &site_packages)
            .args(["--order", "size"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Invalid value for '--order'"));
    }

    /// Exit code 2: option that needs another option
    #[test]
    fn test_exit_code_incompatible_options() {
        let dir = TempDir::new().unwrap();
        let site_packages = create_site_packages(dir.path());
        run_in(&dir, &site_packages)
            .arg("--no-license-path")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("--with-license-file"));
    }

    /// Exit code 3: Application error - site-packages directory does not exist
    #[test]
    fn test_exit_code_missing_site_packages() {
        cargo_bin_cmd!("py-licenses")
            .args(["--site-packages", "/nonexistent/site-packages"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to discover installed packages"));
    }

    /// Exit code 3: Application error - interpreter cannot be run
    #[test]
    fn test_exit_code_missing_interpreter() {
        let dir = TempDir::new().unwrap();
        cargo_bin_cmd!("py-licenses")
            .current_dir(dir.path())
            .args(["--python", "/nonexistent/bin/python3"])
            .assert()
            .code(3);
    }
}

// ============================================================================
// Report tests
// ============================================================================

#[test]
fn test_e2e_plain_report() {
    let dir = TempDir::new().unwrap();
    let site_packages = create_site_packages(dir.path());

    let output = run_in(&dir, &site_packages).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with(" Name"));
    assert!(lines[1].starts_with(" attrs"));
    assert!(lines[2].starts_with(" Django") && lines[2].ends_with("BSD License"));
    assert!(lines[3].starts_with(" requests") && lines[3].ends_with("Apache 2.0"));
    assert!(!stdout.contains("pip"));
}

#[test]
fn test_e2e_with_system() {
    let dir = TempDir::new().unwrap();
    let site_packages = create_site_packages(dir.path());

    run_in(&dir, &site_packages)
        .arg("--with-system")
        .assert()
        .success()
        .stdout(predicate::str::contains(" pip "));
}

#[test]
fn test_e2e_json_with_authors_and_urls() {
    let dir = TempDir::new().unwrap();
    let site_packages = create_site_packages(dir.path());

    let output = run_in(&dir, &site_packages)
        .args(["--format", "json", "--with-authors", "--with-urls"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let packages = json.as_array().unwrap();
    assert_eq!(packages.len(), 4);

    let requests = packages.iter().find(|p| p["Name"] == "requests").unwrap();
    assert_eq!(requests["Author"], "Kenneth Reitz");
    assert_eq!(requests["URL"], "https://requests.readthedocs.io");
    let attrs = packages.iter().find(|p| p["Name"] == "attrs").unwrap();
    assert_eq!(attrs["Author"], "UNKNOWN");
}

#[test]
fn test_e2e_summary_order_by_count() {
    let dir = TempDir::new().unwrap();
    let site_packages = create_site_packages(dir.path());

    let output = run_in(&dir, &site_packages)
        .args(["--summary", "--order", "count", "--format", "csv"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.starts_with("\"Count\",\"License\"\n"));
    assert!(stdout.trim_end().ends_with("\"2\",\"MIT\""));
}

#[test]
fn test_e2e_ignore_and_include_packages() {
    let dir = TempDir::new().unwrap();
    let site_packages = create_site_packages(dir.path());

    run_in(&dir, &site_packages)
        .args(["--format", "jlf", "--packages", "six", "Django", "--ignore-packages", "django"])
        .assert()
        .success()
        .stdout("[{\"licenses\":[\"MIT\"],\"name\":\"six\",\"version\":\"1.16.0\"}]\n");
}

#[test]
fn test_e2e_fail_on_reports_without_report() {
    let dir = TempDir::new().unwrap();
    let site_packages = create_site_packages(dir.path());

    run_in(&dir, &site_packages)
        .args(["--fail-on", "mit", "--collect-all-failures"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "fail-on license MIT was found for package attrs:23.1.0",
        ))
        .stderr(predicate::str::contains(
            "fail-on license MIT was found for package six:1.16.0",
        ));
}

#[test]
fn test_e2e_allow_only_partial_match() {
    let dir = TempDir::new().unwrap();
    let site_packages = create_site_packages(dir.path());

    run_in(&dir, &site_packages)
        .args(["--allow-only", "MIT;BSD;Apache", "--partial-match"])
        .assert()
        .success();

    run_in(&dir, &site_packages)
        .args(["--allow-only", "MIT;BSD;Apache"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not in allow-only licenses"));
}

#[test]
fn test_e2e_output_file() {
    let dir = TempDir::new().unwrap();
    let site_packages = create_site_packages(dir.path());
    let report = dir.path().join("licenses.md");

    run_in(&dir, &site_packages)
        .args(["--format", "markdown", "--output-file"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("created path:"));

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.starts_with("| Name "));
    assert!(content.ends_with("|\n"));
}

#[test]
fn test_e2e_license_file_columns() {
    let dir = TempDir::new().unwrap();
    let site_packages = dir.path().join("site-packages");
    let dist_info = write_dist(&site_packages, "idna", "3.6", "License-File: LICENSE.md");
    fs::write(dist_info.join("LICENSE.md"), "BSD 3-Clause License").unwrap();
    fs::write(dist_info.join("NOTICE"), "Notice text").unwrap();

    let output = run_in(&dir, &site_packages)
        .args(["--format", "json", "--with-license-file", "--with-notice-file"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["LicenseText"], "BSD 3-Clause License");
    assert_eq!(json[0]["NoticeText"], "Notice text");
    assert!(json[0]["LicenseFile"]
        .as_str()
        .unwrap()
        .ends_with("LICENSE.md"));
}

#[test]
fn test_e2e_license_file_warning_for_plain_format() {
    let dir = TempDir::new().unwrap();
    let site_packages = create_site_packages(dir.path());

    run_in(&dir, &site_packages)
        .args(["--with-license-file", "--no-license-path"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Due to the length of these fields, this option is best paired with --format=json.",
        ));
}

#[test]
fn test_e2e_html_escapes_non_ascii() {
    let dir = TempDir::new().unwrap();
    let site_packages = dir.path().join("site-packages");
    write_dist(&site_packages, "kanji", "1.0", "Author: 山田\nLicense: MIT");

    run_in(&dir, &site_packages)
        .args(["--format", "html", "--with-authors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("<td>&#23665;&#30000;</td>"));
}

#[test]
fn test_e2e_filter_strings_ascii() {
    let dir = TempDir::new().unwrap();
    let site_packages = dir.path().join("site-packages");
    write_dist(&site_packages, "kanji", "1.0", "Author: 山田 Taro\nLicense: MIT");

    run_in(&dir, &site_packages)
        .args([
            "--format",
            "plain-vertical",
            "--with-authors",
            "--filter-strings",
            "--filter-code-page",
            "ascii",
        ])
        .assert()
        .success()
        .stdout("kanji\n1.0\nMIT\nTaro\n\n");
}

#[test]
fn test_e2e_spdx_splits_or_expressions() {
    let dir = TempDir::new().unwrap();
    let site_packages = dir.path().join("site-packages");
    write_dist(&site_packages, "dual", "1.0", "License-Expression: MIT OR Apache-2.0");

    run_in(&dir, &site_packages)
        .args(["--spdx", "--fail-on", "Apache-2.0"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "fail-on license Apache-2.0 was found for package dual:1.0",
        ));
}

#[test]
fn test_e2e_skips_broken_metadata() {
    let dir = TempDir::new().unwrap();
    let site_packages = create_site_packages(dir.path());
    let broken = site_packages.join("broken-0.1.dist-info");
    fs::create_dir_all(&broken).unwrap();
    fs::write(broken.join("METADATA"), "Metadata-Version: 2.1\n").unwrap();

    run_in(&dir, &site_packages)
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping"));
}
