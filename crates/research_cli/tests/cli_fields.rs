use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::Value;

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../..")
}

fn fixture_path(name: &str) -> String {
    workspace_root()
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .to_string()
}

fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_terraria-research"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run terraria-research CLI")
}

fn temp_output_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before unix epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("{prefix}_{}_{}.json", std::process::id(), nanos))
}

#[test]
fn cli_prints_researched_names() {
    let path = fixture_path("TestChar.plr");
    let output = run_cli(&["--researched", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec!["researched=IronPickaxe", "researched=IronShortsword"]
    );
}

#[test]
fn cli_prints_researched_ids() {
    let path = fixture_path("TestChar-1.4.2.1.plr");
    let output = run_cli(&["--researched", "--ids", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "researched_id=1");
}

#[test]
fn cli_ids_without_list_is_usage_error() {
    let path = fixture_path("TestChar.plr");
    let output = run_cli(&["--ids", &path]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cli_json_output_is_valid() {
    let path = fixture_path("ManySpawnPoints.plr");
    let output = run_cli(&["--json", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(json["layout"], "1.4.4");
    assert_eq!(json["research"]["DirtBlock"]["has"], 100);
    assert_eq!(json["research"]["DirtBlock"]["researched"], true);
}

#[test]
fn cli_layout_json_reports_sections() {
    let path = fixture_path("TestChar-1.4.3.2.plr");
    let output = run_cli(&["--layout", "--json", &path]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let json: Value = serde_json::from_str(&stdout).expect("stdout should be valid JSON");
    assert_eq!(json["layout"], "1.4.3.2");
    let sections = json["sections"].as_array().expect("sections array");
    assert_eq!(sections[0]["name"], "character name");
    assert_eq!(sections[0]["start"], 25);
    assert!(sections[0]["end"].as_u64().is_some_and(|end| end > 25));
    assert!(sections[0].get("range").is_none());
    assert_eq!(
        sections.last().map(|s| s["name"].clone()),
        Some(Value::from("journey powers"))
    );
}

#[test]
fn cli_text_table_is_default() {
    let path = fixture_path("TestChar.plr");
    let output = run_cli(&[path.as_str()]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Release 279"));
    assert!(stdout.contains("Wood"));
    assert!(!stdout.contains("DirtBlock"));
}

#[test]
fn cli_reports_decode_errors() {
    let cases = [
        ("InvalidChar.plr", "invalid"),
        ("BadVersion.plr", "only supports 4."),
        ("NotJourneyMode.plr", "only supports journey"),
    ];
    for (name, phrase) in cases {
        let path = fixture_path(name);
        let output = run_cli(&[path.as_str()]);
        assert_eq!(output.status.code(), Some(1), "{name}");
        let stderr = String::from_utf8_lossy(&output.stderr).to_lowercase();
        assert!(stderr.contains(phrase), "{name}: {stderr}");
    }
}

#[test]
fn cli_uses_replacement_catalog() {
    let catalog_path = temp_output_path("research_catalog");
    fs::write(
        &catalog_path,
        r#"[{"id": 9, "name": "Wood", "needed": 40}, {"id": 1, "name": "IronPickaxe", "needed": 2}]"#,
    )
    .expect("failed to write catalog");

    let path = fixture_path("TestChar.plr");
    let catalog = catalog_path.to_string_lossy().to_string();
    let output = run_cli(&["--catalog", &catalog, "--researched", &path]);
    let _ = fs::remove_file(&catalog_path);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim(), "researched=Wood");
}

#[test]
fn cli_reports_missing_catalog_file() {
    let catalog_path = temp_output_path("missing_research_catalog");
    let catalog = catalog_path.to_string_lossy().to_string();
    let path = fixture_path("TestChar.plr");
    let output = run_cli(&["--catalog", &catalog, "--researched", &path]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Io:"), "{stderr}");
    assert!(stderr.contains("missing_research_catalog"), "{stderr}");
}
