//! CLI integration tests for the `shorthand` binary.
//!
//! These tests run the actual compiled binary via `std::process::Command`
//! to verify end-to-end CLI behavior. Each test spawns a fresh process
//! with `SHORTHAND_CONFIG` pointing at a nonexistent path so the config
//! loader falls back to defaults, and with the API key variable removed so
//! no test can reach the network.

use std::path::Path;
use std::process::{Command, Output};

/// Build a `Command` pointing at the compiled `shorthand` binary.
fn shorthand_bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_shorthand"));
    cmd.env(
        "SHORTHAND_CONFIG",
        "/tmp/.shorthand-test-nonexistent-config.json",
    );
    cmd.env_remove("GEMINI_API_KEY");
    // Suppress tracing output so test assertions only match program output.
    cmd.env("RUST_LOG", "off");
    cmd
}

fn run(args: &[&str]) -> Output {
    shorthand_bin()
        .args(args)
        .output()
        .expect("failed to run shorthand")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

// ── 1. Version and help ─────────────────────────────────────────────────

#[test]
fn version_output() {
    let output = run(&["--version"]);
    assert!(output.status.success(), "exit code should be 0");
    assert!(stdout(&output).contains("shorthand"));
}

#[test]
fn help_output() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(
        out.contains("Decode and train on shorthand images"),
        "help output should contain the CLI description, got: {out}"
    );
}

// ── 2. Offline commands ─────────────────────────────────────────────────

#[test]
fn systems_lists_all_three() {
    let output = run(&["systems"]);
    assert!(output.status.success());
    let out = stdout(&output);
    for name in ["Teeline", "Pitman", "Gregg"] {
        assert!(out.contains(name), "missing {name} in: {out}");
    }
}

#[test]
fn tips_for_low_accuracy() {
    let output = run(&["tips", "--system", "teeline", "--accuracy", "50"]);
    assert!(output.status.success());
    let tips: Vec<String> = stdout(&output)
        .lines()
        .filter(|l| l.trim_start().starts_with("- "))
        .map(String::from)
        .collect();
    assert_eq!(tips.len(), 5, "{tips:?}");
}

#[test]
fn progress_json() {
    let output = run(&["progress", "--samples", "2", "--json"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["currentAccuracy"], 70.0);
    assert_eq!(json["samplesNeeded"], 4);
}

#[test]
fn patterns_filter_by_category() {
    let output = run(&["patterns", "--system", "teeline", "--category", "endings"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Teeline library"));
    assert!(out.contains("Endings"), "{out}");
}

#[test]
fn patterns_search_without_match() {
    let output = run(&["patterns", "--system", "gregg", "--search", "zzzz-nothing"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("No patterns match."));
}

#[test]
fn metrics_work_without_key() {
    let output = run(&["metrics", "--system", "pitman", "--range", "7d", "--json"]);
    assert!(output.status.success(), "{}", stderr(&output));
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["current"], 87.0);
    assert_eq!(json["history"].as_array().unwrap().len(), 1);
}

#[test]
fn model_export_then_import_without_key() {
    let dir = tempfile::tempdir().unwrap();
    let model = dir.path().join("gregg-model.json");

    let output = run(&["model", "export", "--system", "gregg", "--output", model.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(model.exists());

    let output = run(&["model", "import", model.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Imported Gregg model (version 1.0)"));
}

#[test]
fn model_import_rejects_garbage() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, "{").unwrap();

    let output = run(&["model", "import", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid model data"));
}

#[test]
fn status_without_config() {
    let output = run(&["status"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("Config: /tmp/.shorthand-test-nonexistent-config.json") || out.contains("not found"));
    assert!(out.contains("GEMINI_API_KEY (NOT SET)"), "{out}");
    assert!(out.contains("TEELINE"));
}

// ── 3. Validation failures ──────────────────────────────────────────────

#[test]
fn unknown_system_fails() {
    let output = run(&["tips", "--system", "klingon", "--accuracy", "80"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown shorthand system"));
}

#[test]
fn decode_rejects_unsupported_image() {
    let dir = tempfile::tempdir().unwrap();
    let gif = dir.path().join("note.gif");
    std::fs::write(&gif, b"GIF89a").unwrap();

    let output = run(&["decode", gif.to_str().unwrap(), "--system", "gregg"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Please upload a JPEG or PNG image"));
}

#[test]
fn decode_missing_image_fails() {
    let output = run(&["decode", "/tmp/.shorthand-test-no-such-image.png"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("failed to read image"));
}

#[test]
fn decode_without_key_is_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("note.png");
    std::fs::write(&png, [0x89, b'P', b'N', b'G']).unwrap();

    let output = run(&["decode", png.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("GEMINI_API_KEY"), "{}", stderr(&output));
}

#[test]
fn train_requires_three_samples() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("a.png");
    std::fs::write(&png, [0x89, b'P', b'N', b'G']).unwrap();
    let png = png.to_str().unwrap();

    let output = run(&["train", "--image", png, "--text", "one", "--image", png, "--text", "two"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("at least 3"));
}

#[test]
fn train_checks_session_before_training() {
    let dir = tempfile::tempdir().unwrap();
    let session = write_export(dir.path());
    let before = std::fs::read_to_string(&session).unwrap();
    let png = dir.path().join("a.png");
    std::fs::write(&png, [0x89, b'P', b'N', b'G']).unwrap();
    let png = png.to_str().unwrap();

    let output = run(&[
        "train", "--system", "teeline",
        "--image", png, "--text", "one",
        "--image", png, "--text", "two",
        "--image", png, "--text", "three",
        "--session", session.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    let err = stderr(&output);
    // Fails on the mismatched session, not on the missing key.
    assert!(err.contains("holds a GREGG profile"), "{err}");
    assert!(!err.contains("GEMINI_API_KEY"), "{err}");
    assert_eq!(std::fs::read_to_string(&session).unwrap(), before);
}

#[test]
fn explicit_missing_config_fails() {
    let output = run(&["--config", "/tmp/.shorthand-test-missing.json", "systems"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("config file not found"));
}

// ── 4. Data import ──────────────────────────────────────────────────────

fn write_export(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("shorthand_GREGG_2024-02-01.json");
    let body = serde_json::json!({
        "profile": {
            "system": "GREGG",
            "accuracy": 92.0,
            "samplesCount": 12,
            "status": "EXPERT",
            "totalDecoded": 234,
            "avgProcessingTime": 1.8
        },
        "decodingHistory": [],
        "exportDate": "2024-02-01T10:00:00Z",
        "version": "1.0"
    });
    std::fs::write(&path, serde_json::to_string_pretty(&body).unwrap()).unwrap();
    path
}

#[test]
fn data_import_summarizes_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_export(dir.path());

    let output = run(&["data", "import", path.to_str().unwrap()]);
    assert!(output.status.success(), "{}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Gregg"));
    assert!(out.contains("92.0%"));
    assert!(out.contains("0 records"));
}

#[test]
fn data_import_rejects_non_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "definitely not json").unwrap();

    let output = run(&["data", "import", path.to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Invalid file format"));
}

#[test]
fn data_import_missing_file() {
    let output = run(&["data", "import", "/tmp/.shorthand-test-missing-export.json"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("Failed to read file"));
}
