use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::io::{Cursor, Read};
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

fn scanlist() -> Command {
    let mut cmd = Command::cargo_bin("scanlist").unwrap();
    cmd.env_remove("SCANLIST_DEBUG_LOG");
    cmd
}

/// Parses the response line; stderr may carry log lines before it.
fn parse_json_output(output: &[u8]) -> Value {
    let text = String::from_utf8_lossy(output);
    let line = text.lines().rev().find(|l| !l.trim().is_empty()).unwrap_or("");
    serde_json::from_str(line).expect("Failed to parse JSON output")
}

/// Temp dir holding a config with fixed file names.
fn workspace() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "timestamped_filenames = false\nplatform = \"desktop\"\n").unwrap();
    (dir, config)
}

fn export_cmd(config: &Path, out: &Path) -> Command {
    let mut cmd = scanlist();
    cmd.args([
        "--config",
        config.to_str().unwrap(),
        "export",
        "--no-share",
        "--output-dir",
        out.to_str().unwrap(),
    ]);
    cmd
}

fn shared_strings(path: &Path) -> String {
    let bytes = fs::read(path).unwrap();
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name("xl/sharedStrings.xml").unwrap();
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

mod export_tests {
    use super::*;

    #[test]
    fn test_export_saves_to_documents() {
        let (dir, config) = workspace();
        let out = dir.path().join("out");

        let output = export_cmd(&config, &out)
            .args(["--item", "Milk", "--item", "Eggs"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert!(json["success"].as_bool().unwrap());
        assert_eq!(json["data"]["outcome"], "saved");
        assert_eq!(json["data"]["destination"], "documents");
        assert_eq!(json["data"]["item_count"], 2);
        assert_eq!(json["data"]["notices"][0]["title"], "Saved");

        let path = out.join("documents/items.xlsx");
        assert_eq!(json["data"]["path"], path.to_str().unwrap());
        let sst = shared_strings(&path);
        assert!(sst.contains("<t>Text</t>"));
        assert!(sst.find("<t>Milk</t>").unwrap() < sst.find("<t>Eggs</t>").unwrap());
    }

    #[test]
    fn test_export_empty_list() {
        let (dir, config) = workspace();
        let out = dir.path().join("out");

        let output = export_cmd(&config, &out)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["data"]["item_count"], 0);
        assert!(out.join("documents/items.xlsx").exists());
    }

    #[test]
    fn test_blank_items_are_skipped() {
        let (dir, config) = workspace();
        let out = dir.path().join("out");

        let output = export_cmd(&config, &out)
            .args(["--item", "A", "--item", "   ", "--item", "B"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        assert_eq!(parse_json_output(&output)["data"]["item_count"], 2);
    }

    #[test]
    fn test_android_granted_writes_downloads() {
        let (dir, config) = workspace();
        let out = dir.path().join("out");

        let output = export_cmd(&config, &out)
            .args(["--platform", "android", "--item", "A"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        assert_eq!(json["data"]["destination"], "downloads");
        assert!(out.join("Download/items.xlsx").exists());
    }

    #[test]
    fn test_android_denied_writes_nothing() {
        let (dir, config) = workspace();
        let out = dir.path().join("out");

        let output = export_cmd(&config, &out)
            .args(["--platform", "android", "--permission", "denied", "--item", "A"])
            .assert()
            .failure()
            .get_output()
            .stderr
            .clone();

        let json = parse_json_output(&output);
        assert!(!json["success"].as_bool().unwrap());
        assert_eq!(json["data"]["outcome"], "permission-denied");
        assert_eq!(json["data"]["notices"][0]["title"], "Permission denied");
        assert!(!out.exists());
    }

    #[test]
    fn test_invalid_permission_is_rejected() {
        let (dir, config) = workspace();

        export_cmd(&config, dir.path())
            .args(["--permission", "maybe"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown permission status"));
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_missing_config_file_fails() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        export_cmd(&missing, dir.path()).assert().failure();
    }

    #[test]
    fn test_timestamped_file_name_by_default() {
        let dir = tempdir().unwrap();
        let config = dir.path().join("config.toml");
        fs::write(&config, "platform = \"desktop\"\n").unwrap();
        let out = dir.path().join("out");

        let output = export_cmd(&config, &out)
            .args(["--item", "A"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let json = parse_json_output(&output);
        let path = json["data"]["path"].as_str().unwrap();
        let name = Path::new(path).file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("items_") && name.ends_with(".xlsx"));
    }
}

mod completions_tests {
    use super::*;

    #[test]
    fn test_bash_completions() {
        scanlist()
            .args(["completions", "bash"])
            .assert()
            .success()
            .stdout(predicate::str::contains("scanlist"));
    }
}
