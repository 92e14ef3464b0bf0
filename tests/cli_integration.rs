//! CLI Integration Tests
//!
//! These tests verify that the CLI commands work correctly end-to-end.
//! They test the actual binary behavior, not just the library.
//!
//! Run with:
//! ```bash
//! cargo test --test cli_integration
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

const VIEWS: &str = "\
view DEFAULT match-clients key {0.0.0.0/0;};};
view CN_TEL match-clients key {1.0.1.0/24;1.0.2.0/23;};};
view CN_UNI match-clients key {1.0.0.0/8;};};
";

/// Get the path to the built binary
fn netview_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_netview"))
}

/// A temp dir holding a view file and a private settings file
fn setup(views: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = tempdir().unwrap();
    let view_path = dir.path().join("views.conf");
    std::fs::write(&view_path, views).unwrap();
    let settings_path = dir.path().join("settings.json");
    (dir, view_path, settings_path)
}

/// Run netview command and return (stdout, stderr, success)
fn run_netview(args: &[&str], settings: &Path) -> (String, String, bool) {
    run_netview_with_view_env(args, settings, None)
}

/// Run netview with NETVIEW_VIEW_FILE set to `view_env` (or unset)
fn run_netview_with_view_env(
    args: &[&str],
    settings: &Path,
    view_env: Option<&Path>,
) -> (String, String, bool) {
    let mut command = Command::new(netview_binary());
    match view_env {
        Some(path) => command.env("NETVIEW_VIEW_FILE", path),
        None => command.env_remove("NETVIEW_VIEW_FILE"),
    };

    let output = command
        .args(["--settings", settings.to_str().unwrap()])
        .args(args)
        .output()
        .expect("Failed to execute netview");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.success(),
    )
}

fn parse_json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).unwrap_or_else(|e| panic!("bad JSON {:?}: {}", stdout, e))
}

// ============================================================================
// Lookup Tests
// ============================================================================

#[test]
fn test_cli_lookup_longest_match() {
    let (_dir, views, settings) = setup(VIEWS);
    let views = views.to_str().unwrap();

    let (stdout, _stderr, success) = run_netview(
        &["-c", views, "lookup", "1.0.1.9", "1.200.0.1", "9.9.9.9"],
        &settings,
    );

    assert!(success, "lookup should succeed");
    let json = parse_json(&stdout);
    assert_eq!(json["count"], 3);
    assert_eq!(json["results"][0]["area"], "CN_TEL");
    assert_eq!(json["results"][0]["subnet"], "1.0.1.0/24");
    assert_eq!(json["results"][1]["area"], "CN_UNI");
    assert_eq!(json["results"][2]["area"], "DEFAULT");
}

#[test]
fn test_cli_lookup_unmatched_is_null() {
    let (_dir, views, settings) = setup("view LAN a b {10.0.0.0/8;};};\n");
    let views = views.to_str().unwrap();

    let (stdout, _stderr, success) = run_netview(&["-c", views, "lookup", "11.0.0.1"], &settings);

    assert!(success, "an unmatched address is not an error");
    let json = parse_json(&stdout);
    assert!(json["results"][0]["area"].is_null());
}

#[test]
fn test_cli_lookup_all_matches() {
    let (_dir, views, settings) = setup(VIEWS);
    let views = views.to_str().unwrap();

    let (stdout, _stderr, success) =
        run_netview(&["-c", views, "lookup", "--all", "1.0.2.1"], &settings);

    assert!(success);
    let json = parse_json(&stdout);
    let matches = json["results"][0]["matches"].as_array().unwrap();
    let areas: Vec<_> = matches.iter().map(|m| m["area"].as_str().unwrap()).collect();
    assert_eq!(areas, vec!["DEFAULT", "CN_UNI", "CN_TEL"]);
}

#[test]
fn test_cli_lookup_invalid_address_fails() {
    let (_dir, views, settings) = setup(VIEWS);
    let views = views.to_str().unwrap();

    let (_stdout, stderr, success) = run_netview(&["-c", views, "lookup", "1.2.3"], &settings);

    assert!(!success, "malformed address should fail");
    assert!(
        stderr.contains("Illegal address format"),
        "stderr should explain the failure: {}",
        stderr
    );
}

// ============================================================================
// Load Error Tests
// ============================================================================

#[test]
fn test_cli_duplicate_subnet_reports_line() {
    let (_dir, views, settings) =
        setup("view A a b {10.0.0.0/24;};};\n\nview B a b {10.0.0.0/24;};};\n");
    let views = views.to_str().unwrap();

    let (_stdout, stderr, success) = run_netview(&["-c", views, "check"], &settings);

    assert!(!success, "duplicate subnet should abort loading");
    assert!(stderr.contains("line 3"), "stderr: {}", stderr);
    assert!(stderr.contains("Duplicate subnet"), "stderr: {}", stderr);
}

#[test]
fn test_cli_missing_view_file() {
    let (_dir, _views, settings) = setup(VIEWS);

    let (_stdout, stderr, success) = run_netview(&["check"], &settings);

    assert!(!success);
    assert!(stderr.contains("No view file"), "stderr: {}", stderr);
}

// ============================================================================
// Check / List Tests
// ============================================================================

#[test]
fn test_cli_check_counts() {
    let (_dir, views, settings) = setup(VIEWS);
    let views = views.to_str().unwrap();

    let (stdout, _stderr, success) = run_netview(&["-c", views, "check"], &settings);

    assert!(success);
    let json = parse_json(&stdout);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["entries"], 4);
    assert_eq!(json["lines"], 3);
}

#[test]
fn test_cli_list_in_address_order() {
    let (_dir, views, settings) = setup(VIEWS);
    let views = views.to_str().unwrap();

    let (stdout, _stderr, success) = run_netview(&["-c", views, "list"], &settings);

    assert!(success);
    let json = parse_json(&stdout);
    let subnets: Vec<_> = json["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["subnet"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        subnets,
        vec!["0.0.0.0/0", "1.0.0.0/8", "1.0.1.0/24", "1.0.2.0/23"]
    );
}

// ============================================================================
// Settings Tests
// ============================================================================

#[test]
fn test_cli_set_file_is_remembered() {
    let (_dir, views, settings) = setup(VIEWS);
    let views = views.to_str().unwrap();

    let (_stdout, _stderr, success) = run_netview(&["config", "set-file", views], &settings);
    assert!(success, "set-file should succeed");
    assert!(settings.exists(), "settings file should be written");

    let (stdout, _stderr, success) = run_netview(&["lookup", "1.0.1.1"], &settings);
    assert!(success, "lookup should use the remembered view file");
    assert_eq!(parse_json(&stdout)["results"][0]["area"], "CN_TEL");
}

#[test]
fn test_cli_text_format_is_pretty() {
    let (_dir, views, settings) = setup(VIEWS);
    let views = views.to_str().unwrap();

    let (stdout, _stderr, success) =
        run_netview(&["-c", views, "-f", "text", "check"], &settings);

    assert!(success);
    assert!(stdout.lines().count() > 1, "text output should span lines");
    assert_eq!(parse_json(&stdout)["entries"], 4);
}

#[test]
fn test_cli_unknown_stored_format_fails() {
    let (_dir, views, settings) = setup(VIEWS);
    let views = views.to_str().unwrap();
    std::fs::write(&settings, r#"{"format":"yaml"}"#).unwrap();

    let (stdout, stderr, success) = run_netview(&["-c", views, "check"], &settings);

    assert!(!success, "an unknown stored format should be rejected");
    assert!(stdout.is_empty(), "stdout: {}", stdout);
    assert!(stderr.contains("Failed to parse settings"), "stderr: {}", stderr);
}

#[test]
fn test_cli_set_format_is_remembered() {
    let (_dir, views, settings) = setup(VIEWS);
    let views = views.to_str().unwrap();

    let (_stdout, _stderr, success) = run_netview(&["config", "set-format", "text"], &settings);
    assert!(success, "set-format should succeed");

    let (stdout, _stderr, success) = run_netview(&["-c", views, "check"], &settings);
    assert!(success);
    assert!(stdout.lines().count() > 1, "stored text format should apply");
}

// ============================================================================
// View File Resolution Tests
// ============================================================================

#[test]
fn test_cli_view_file_from_environment() {
    let (_dir, views, settings) = setup(VIEWS);

    let (stdout, stderr, success) =
        run_netview_with_view_env(&["lookup", "1.0.1.1"], &settings, Some(views.as_path()));

    assert!(success, "lookup should use NETVIEW_VIEW_FILE: {}", stderr);
    assert_eq!(parse_json(&stdout)["results"][0]["area"], "CN_TEL");
}

#[test]
fn test_cli_environment_wins_over_settings() {
    let (dir, views, settings) = setup(VIEWS);
    let other = dir.path().join("other.conf");
    std::fs::write(&other, "view OTHER a b {0.0.0.0/0;};};\n").unwrap();

    let other_str = other.to_str().unwrap();
    let (_stdout, _stderr, success) = run_netview(&["config", "set-file", other_str], &settings);
    assert!(success, "set-file should succeed");

    let (stdout, _stderr, success) =
        run_netview_with_view_env(&["lookup", "1.0.1.1"], &settings, Some(views.as_path()));
    assert!(success);
    assert_eq!(parse_json(&stdout)["results"][0]["area"], "CN_TEL");

    let (stdout, _stderr, success) = run_netview(&["lookup", "1.0.1.1"], &settings);
    assert!(success);
    assert_eq!(parse_json(&stdout)["results"][0]["area"], "OTHER");
}

#[test]
fn test_cli_flag_wins_over_environment() {
    let (dir, views, settings) = setup(VIEWS);
    let other = dir.path().join("other.conf");
    std::fs::write(&other, "view OTHER a b {0.0.0.0/0;};};\n").unwrap();

    let views = views.to_str().unwrap();
    let (stdout, _stderr, success) = run_netview_with_view_env(
        &["-c", views, "lookup", "1.0.1.1"],
        &settings,
        Some(other.as_path()),
    );

    assert!(success);
    assert_eq!(parse_json(&stdout)["results"][0]["area"], "CN_TEL");
}
