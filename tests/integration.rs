use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn jarinv_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("jarinv");
    path
}

fn write_jar(path: &Path, manifest: Option<&str>) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let file = File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    if let Some(text) = manifest {
        writer.start_file("META-INF/MANIFEST.MF", options).unwrap();
        writer.write_all(text.as_bytes()).unwrap();
    }
    writer.start_file("com/example/A.class", options).unwrap();
    writer.write_all(b"\xca\xfe\xba\xbe").unwrap();
    writer.finish().unwrap();
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let app_dir = root.join("app");
    write_jar(
        &app_dir.join("lib/commons-codec-1.15.jar"),
        Some(
            "Manifest-Version: 1.0\r\n\
             Implementation-Title: Apache Commons Codec\r\n\
             Implementation-Vendor: The Apache Software Foundation\r\n\
             Implementation-Version: 1.15\r\n",
        ),
    );
    write_jar(&app_dir.join("lib/nested/bare.jar"), None);
    fs::create_dir_all(app_dir.join("docs")).unwrap();
    fs::write(app_dir.join("docs/notes.txt"), "not an archive").unwrap();

    let config_content = format!(
        r#"[scan]
root = "{}/app"

[report]
output = "{}/out/report.csv"
"#,
        root.display(),
        root.display()
    );

    let config_path = root.join("jarinv.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_jarinv(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = jarinv_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run jarinv binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();
    (stdout, stderr, success)
}

#[test]
fn scan_offline_writes_report() {
    let (tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_jarinv(&config_path, &["scan", "--offline"]);
    assert!(success, "scan failed: stdout={}, stderr={}", stdout, stderr);
    assert!(stdout.contains("inventoried 2 archives"));

    let report = fs::read_to_string(tmp.path().join("out/report.csv")).unwrap();
    let mut lines = report.lines();
    assert_eq!(
        lines.next().unwrap(),
        "Title,Vendor,Version,File,MavenGroup,MavenArtifact,MavenVersion,MavenRelDate,MavenRecentestVer,MavenRecentestDate"
    );

    // Rows are sorted by relative path; the txt file is excluded.
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("lib/commons-codec-1.15.jar"));
    assert!(rows[0].contains("Apache Commons Codec"));
    assert!(rows[0].contains("1.15"));
    assert!(rows[1].contains("lib/nested/bare.jar"));
    assert!(!report.contains("notes.txt"));

    // Offline run: all six registry columns stay empty.
    assert!(rows[0].ends_with("lib/commons-codec-1.15.jar,,,,,,"));
}

#[test]
fn bare_archive_yields_empty_identity_fields() {
    let (tmp, config_path) = setup_test_env();

    run_jarinv(&config_path, &["scan", "--offline"]);
    let report = fs::read_to_string(tmp.path().join("out/report.csv")).unwrap();
    let bare_row = report
        .lines()
        .find(|l| l.contains("lib/nested/bare.jar"))
        .unwrap();
    // Title, Vendor, Version all empty; only File is set.
    assert!(bare_row.starts_with(",,,lib/nested/bare.jar,"));
}

#[test]
fn scan_full_view_includes_hash() {
    let (tmp, config_path) = setup_test_env();

    let (_, _, success) = run_jarinv(&config_path, &["scan", "--offline", "--full"]);
    assert!(success);

    let report = fs::read_to_string(tmp.path().join("out/report.csv")).unwrap();
    let header = report.lines().next().unwrap();
    assert!(header.contains("Sha1"));
    assert!(header.contains("ImplementationTitle"));

    // Every row carries a 40-char hash.
    for row in report.lines().skip(1) {
        let sha1 = row.split(',').nth(10).unwrap();
        assert_eq!(sha1.len(), 40, "bad hash in row: {}", row);
    }
}

#[test]
fn scan_output_flag_overrides_config() {
    let (tmp, config_path) = setup_test_env();
    let custom = tmp.path().join("custom.csv");

    let (_, _, success) = run_jarinv(
        &config_path,
        &["scan", "--offline", "--output", custom.to_str().unwrap()],
    );
    assert!(success);
    assert!(custom.exists());
    assert!(!tmp.path().join("out/report.csv").exists());
}

#[test]
fn scan_is_deterministic_across_runs() {
    let (tmp, config_path) = setup_test_env();

    run_jarinv(&config_path, &["scan", "--offline"]);
    let first = fs::read_to_string(tmp.path().join("out/report.csv")).unwrap();
    run_jarinv(&config_path, &["scan", "--offline"]);
    let second = fs::read_to_string(tmp.path().join("out/report.csv")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scan_missing_root_fails_before_processing() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("jarinv.toml");
    fs::write(
        &config_path,
        format!(
            "[scan]\nroot = \"{}/does-not-exist\"\n",
            tmp.path().display()
        ),
    )
    .unwrap();

    let (_, stderr, success) = run_jarinv(&config_path, &["scan", "--offline"]);
    assert!(!success, "scan with missing root should fail");
    assert!(
        stderr.contains("not a directory"),
        "Should report bad root, got: {}",
        stderr
    );
}

#[test]
fn corrupt_archive_aborts_without_partial_report() {
    let (tmp, config_path) = setup_test_env();
    fs::write(tmp.path().join("app/lib/broken.jar"), b"not a zip").unwrap();

    let (_, stderr, success) = run_jarinv(&config_path, &["scan", "--offline"]);
    assert!(!success, "corrupt archive should abort the run");
    assert!(
        stderr.contains("corrupt archive"),
        "Should report corruption, got: {}",
        stderr
    );
    assert!(
        !tmp.path().join("out/report.csv").exists(),
        "No partial report on fatal failure"
    );
}

#[test]
fn identify_prints_resolved_record() {
    let (tmp, config_path) = setup_test_env();
    let jar = tmp.path().join("app/lib/commons-codec-1.15.jar");

    let (stdout, stderr, success) = run_jarinv(
        &config_path,
        &["identify", jar.to_str().unwrap(), "--offline"],
    );
    assert!(success, "identify failed: {}", stderr);
    assert!(stdout.contains("Title:              Apache Commons Codec"));
    assert!(stdout.contains("Version:            1.15"));
    assert!(stdout.contains("Sha1:"));
}

#[test]
fn identify_works_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let jar = tmp.path().join("solo.jar");
    write_jar(&jar, Some("Manifest-Version: 1.0\nBundle-Name: Solo\n"));

    // Point --config at a path that does not exist; defaults apply.
    let missing_config = tmp.path().join("nope.toml");
    let (stdout, _, success) = run_jarinv(
        &missing_config,
        &["identify", jar.to_str().unwrap(), "--offline"],
    );
    assert!(success);
    assert!(stdout.contains("Title:              Solo"));
}

#[test]
fn identify_rejects_malformed_config_file() {
    let tmp = TempDir::new().unwrap();
    let jar = tmp.path().join("solo.jar");
    write_jar(&jar, Some("Manifest-Version: 1.0\nBundle-Name: Solo\n"));

    // A config file that exists but does not parse must fail the run,
    // not silently degrade to defaults.
    let broken_config = tmp.path().join("jarinv.toml");
    fs::write(&broken_config, "[scan\nroot = broken").unwrap();
    let (_, stderr, success) = run_jarinv(
        &broken_config,
        &["identify", jar.to_str().unwrap(), "--offline"],
    );
    assert!(!success, "malformed config should be an error");
    assert!(
        stderr.contains("config"),
        "Should mention the config file, got: {}",
        stderr
    );
}

#[test]
fn exclude_globs_skip_subtrees() {
    let (tmp, config_path) = setup_test_env();
    write_jar(&tmp.path().join("app/vendor/skip-me.jar"), None);

    let config_content = format!(
        r#"[scan]
root = "{}/app"
exclude_globs = ["vendor/**"]

[report]
output = "{}/out/report.csv"
"#,
        tmp.path().display(),
        tmp.path().display()
    );
    fs::write(&config_path, config_content).unwrap();

    let (stdout, _, success) = run_jarinv(&config_path, &["scan", "--offline"]);
    assert!(success);
    assert!(stdout.contains("inventoried 2 archives"));

    let report = fs::read_to_string(tmp.path().join("out/report.csv")).unwrap();
    assert!(!report.contains("skip-me.jar"));
}
