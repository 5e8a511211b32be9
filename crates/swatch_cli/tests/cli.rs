use std::path::PathBuf;
use std::process::{Command, Output};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("swatch-cli-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn swatch(dir: &PathBuf, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swatch"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn list_as_json() {
    let dir = scratch_dir("list");
    let output = swatch(&dir, &["list", "--category", "nature", "--output", "json"]);
    assert!(output.status.success());

    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let ids: Vec<&str> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["forest", "ocean"]);
}

#[test]
fn contrast_reports_ratio_and_level() {
    let dir = scratch_dir("contrast");
    let output = swatch(&dir, &["contrast", "#000000", "#ffffff"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "#000000 on #ffffff: 21.00:1 (AAA)");

    let output = swatch(&dir, &["contrast", "#zz0000", "#ffffff"]);
    assert!(!output.status.success());
}

#[test]
fn export_then_validate_file() {
    let dir = scratch_dir("export");
    let output = swatch(&dir, &["export", "paper", "--file", "paper.toml"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let output = swatch(&dir, &["validate", "paper.toml"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Paper: no issues");
}

#[test]
fn validate_fails_on_unreadable_theme() {
    let dir = scratch_dir("validate");
    std::fs::write(
        dir.join("bad.toml"),
        "name = \"Bad\"\nextends = \"light\"\n[colors]\non_primary = \"#2b6be0\"\n",
    )
    .unwrap();
    let output = swatch(&dir, &["validate", "bad.toml", "-o", "json"]);
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["theme"], "Bad");
    assert_eq!(report["issues"][0]["severity"], "error");
    assert_eq!(report["issues"][0]["kind"], "low_contrast");
}

#[test]
fn config_selects_default_and_adds_themes_to_audit() {
    let dir = scratch_dir("config");
    std::fs::create_dir_all(dir.join("themes")).unwrap();
    std::fs::write(
        dir.join("themes/brand.toml"),
        "name = \"Brand\"\nextends = \"corporate\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("swatch.toml"),
        "[theme]\ndefault = \"Brand\"\nfiles = [\"themes/brand.toml\"]\n\n[audit]\nminimum = \"aa\"\n",
    )
    .unwrap();

    let output = swatch(&dir, &["show", "Brand", "-o", "json"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let theme: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(theme["name"], "Brand");
    assert_eq!(theme["preset"], serde_json::Value::Null);

    let output = swatch(&dir, &["audit", "-o", "json"]);
    assert!(output.status.success());
    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), (9 + 1) * 11);
    assert!(rows.iter().any(|row| row["theme"] == "Brand"));
}

#[test]
fn unknown_theme_is_an_error() {
    let dir = scratch_dir("unknown");
    let output = swatch(&dir, &["show", "solarized"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown theme `solarized`"));
}

#[test]
fn failing_configured_theme_is_audited_not_rejected() {
    let dir = scratch_dir("failing-config");
    std::fs::create_dir_all(dir.join("themes")).unwrap();
    std::fs::write(
        dir.join("themes/bad.toml"),
        "name = \"Bad\"\nextends = \"light\"\n[colors]\non_primary = \"#2b6be0\"\n",
    )
    .unwrap();
    std::fs::write(dir.join("swatch.toml"), "[theme]\nfiles = [\"themes/bad.toml\"]\n").unwrap();

    let output = swatch(&dir, &["validate", "light"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let output = swatch(&dir, &["validate", "Bad", "-o", "json"]);
    assert!(!output.status.success());
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["theme"], "Bad");

    let output = swatch(&dir, &["audit", "-o", "json"]);
    assert!(!output.status.success());
    let rows: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let failing: Vec<&serde_json::Value> = rows
        .as_array()
        .unwrap()
        .iter()
        .filter(|row| row["pass"] == false)
        .collect();
    assert_eq!(failing.len(), 1);
    assert_eq!(failing[0]["theme"], "Bad");
    assert_eq!(failing[0]["foreground"], "on_primary");

    let output = swatch(&dir, &["export", "Bad"]);
    assert!(!output.status.success());
}

#[test]
fn export_to_stdout_as_json() {
    let dir = scratch_dir("export-json");
    let output = swatch(&dir, &["export", "forest", "-o", "json"]);
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["theme"], "Forest");
    let source = value["toml"].as_str().unwrap();
    assert!(source.contains("name = \"Forest\""), "{source}");
}
