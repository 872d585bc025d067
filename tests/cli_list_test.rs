//! Runs the `townmap` binary against small CSV fixtures.

use assert_cmd::Command;
use indoc::indoc;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const DATA: &str = indoc! {"
    lat,lon,score,score_1,score_2,score_3,score_4,node,boundary,addr2,addr3,addr4
    23.13,113.26,55,10,15,20,10,-1,123456,广东省,广州市,天河区
    30.59,114.30,82.5,18,25,22.5,17,2001,3001,湖北省,武汉市,江岸区
    39.90,116.40,12,2,0,10,0,-1,-1,北京市,北京市,东城区
    not-a-number,116.40,12,2,0,10,0,-1,-1,broken,row,here
"};

fn fixture() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("townships.csv");
    fs::write(&path, DATA).unwrap();
    (dir, path)
}

fn townmap(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_townmap"));
    cmd.current_dir(dir.path()).env_remove("TOWNMAP_LOG");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_list_json_all_points() {
    let (dir, path) = fixture();
    let out = stdout_of(townmap(&dir).arg("list").arg(&path).args(["--format", "json"]));

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["visible"], 3);
    // Highest score first
    assert_eq!(json["points"][0]["name"], "湖北省武汉市江岸区");
    // Repeated municipality level collapsed
    assert_eq!(json["points"][2]["name"], "北京市东城区");
}

#[test]
fn test_list_applies_filters() {
    let (dir, path) = fixture();
    let out = stdout_of(
        townmap(&dir)
            .arg("list")
            .arg(&path)
            .args(["--score", "50:100", "--no-node", "--format", "json"]),
    );

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["visible"], 1);
    assert_eq!(json["points"][0]["score"], 55.0);
}

#[test]
fn test_list_inverted_range_is_swapped() {
    let (dir, path) = fixture();
    let out = stdout_of(
        townmap(&dir)
            .arg("list")
            .arg(&path)
            .args(["--roads", "30:10", "--format", "json"]),
    );

    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["visible"], 2);
}

#[test]
fn test_list_table_output() {
    let (dir, path) = fixture();
    let out = stdout_of(townmap(&dir).arg("list").arg(&path).args(["--no-road"]));
    assert!(out.contains("北京市东城区"));
    assert!(!out.contains("广州市"));
    assert!(out.contains("of 3 points shown"));
}

#[test]
fn test_list_directory_input() {
    let (dir, _) = fixture();
    let out = stdout_of(
        townmap(&dir)
            .arg("list")
            .arg(dir.path())
            .args(["--format", "json", "--limit", "1"]),
    );
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["visible"], 1);
}

#[test]
fn test_bad_range_argument_fails() {
    let (dir, path) = fixture();
    townmap(&dir)
        .arg("list")
        .arg(&path)
        .args(["--score", "fifty"])
        .assert()
        .failure();
}

#[test]
fn test_missing_file_fails() {
    let (dir, _) = fixture();
    townmap(&dir)
        .arg("list")
        .arg(dir.path().join("nope.csv"))
        .assert()
        .failure();
}

#[test]
fn test_init_then_list_uses_configured_paths() {
    let (dir, _) = fixture();
    townmap(&dir).arg("init").assert().success();
    let config = dir.path().join(".townmap.toml");
    assert!(config.exists());

    // Point [data] at the fixture and list without positional paths
    let contents = fs::read_to_string(&config)
        .unwrap()
        .replace("paths = []", "paths = [\"townships.csv\"]");
    fs::write(&config, contents).unwrap();

    let out = stdout_of(townmap(&dir).args(["list", "--format", "json"]));
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(json["total"], 3);

    townmap(&dir).arg("init").assert().failure();
    townmap(&dir).args(["init", "--force"]).assert().success();
}
