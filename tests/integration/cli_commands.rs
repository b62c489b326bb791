#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use tempfile::TempDir;

const WORDS: &str = "wyyy\nab\nba\n  be\nabc\nabe\n\nafe\nwxyy\nwyxy\nab\n";

fn setup(name: &str) -> (TempDir, PathBuf, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let words = dir.path().join(format!("{name}.txt"));
    fs::write(&words, WORDS).expect("write words");
    let graph = dir.path().join(format!("{name}.json"));
    (dir, words, graph)
}

fn ladder(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("ladder");
    cmd.env("LADDER_CONFIG", dir.join("no-config.toml"))
        .env_remove("RUST_LOG")
        .args(["--theme", "plain"]);
    cmd
}

fn build(dir: &Path, words: &Path, graph: &Path) {
    ladder(dir)
        .arg("build")
        .arg("--words")
        .arg(words)
        .arg("--out")
        .arg(graph)
        .assert()
        .success();
}

fn stdout_json(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("json output")
}

#[test]
fn build_reports_counts_and_writes_graph() {
    let (dir, words, graph) = setup("build");
    let output = ladder(dir.path())
        .args(["--format", "json", "build", "--words"])
        .arg(&words)
        .arg("--out")
        .arg(&graph)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report = stdout_json(&output);
    assert_eq!(report["nodes"], 9);
    assert_eq!(report["edges"], 5);
    assert_eq!(report["partitions"], 3);
    assert_eq!(report["parallel"], true);

    let written: Value = serde_json::from_str(&fs::read_to_string(&graph).unwrap()).unwrap();
    assert_eq!(written[4]["root"], "abe");
    assert_eq!(written[4]["relations"], serde_json::json!([3, 5]));
}

#[test]
fn sequential_build_writes_identical_file() {
    let (dir, words, graph) = setup("seq");
    build(dir.path(), &words, &graph);
    let sequential = dir.path().join("seq-single.json");
    ladder(dir.path())
        .arg("build")
        .arg("--sequential")
        .arg("--words")
        .arg(&words)
        .arg("--out")
        .arg(&sequential)
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(&graph).unwrap(),
        fs::read_to_string(&sequential).unwrap()
    );
}

#[test]
fn search_prints_ladder() {
    let (dir, words, graph) = setup("search");
    build(dir.path(), &words, &graph);
    let output = ladder(dir.path())
        .arg("search")
        .arg("--graph")
        .arg(&graph)
        .args(["abc", "afe"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8_lossy(&output);
    assert!(stdout.contains("abc -> abe -> afe"), "stdout: {stdout}");
    assert!(stdout.contains("2 step(s)"), "stdout: {stdout}");
}

#[test]
fn search_json_and_quiet_output() {
    let (dir, words, graph) = setup("search-json");
    build(dir.path(), &words, &graph);

    let output = ladder(dir.path())
        .args(["--format", "json", "search", "--graph"])
        .arg(&graph)
        .args(["wxyy", "wyxy"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report = stdout_json(&output);
    assert_eq!(report["hops"], 2);
    assert_eq!(report["path"], serde_json::json!(["wxyy", "wyyy", "wyxy"]));

    ladder(dir.path())
        .args(["--quiet", "search", "--graph"])
        .arg(&graph)
        .args(["ba", "be"])
        .assert()
        .success()
        .stdout("ba be\n");
}

#[test]
fn search_same_word_is_zero_steps() {
    let (dir, words, graph) = setup("search-same");
    build(dir.path(), &words, &graph);

    let output = ladder(dir.path())
        .args(["--format", "json", "search", "--graph"])
        .arg(&graph)
        .args(["abe", "abe"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report = stdout_json(&output);
    assert_eq!(report["hops"], 0);
    assert_eq!(report["path"], serde_json::json!(["abe"]));
}

#[test]
fn search_failures_exit_with_error() {
    let (dir, words, graph) = setup("search-fail");
    build(dir.path(), &words, &graph);

    let output = ladder(dir.path())
        .arg("search")
        .arg("--graph")
        .arg(&graph)
        .args(["ab", "kw"])
        .assert()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("end word 'kw' is not found"), "stderr: {stderr}");

    let output = ladder(dir.path())
        .arg("search")
        .arg("--graph")
        .arg(&graph)
        .args(["ab", "ba"])
        .assert()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("no ladder from 'ab' to 'ba'"), "stderr: {stderr}");
}

#[test]
fn verify_accepts_built_graph_and_rejects_broken_one() {
    let (dir, words, graph) = setup("verify");
    build(dir.path(), &words, &graph);

    let output = ladder(dir.path())
        .args(["--format", "json", "verify", "--graph"])
        .arg(&graph)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report = stdout_json(&output);
    assert_eq!(report["success"], true);
    assert_eq!(report["nodes"], 9);

    let broken = dir.path().join("broken.json");
    fs::write(
        &broken,
        r#"[{"root":"ba","relations":[1]},{"root":"be","relations":[]}]"#,
    )
    .unwrap();
    ladder(dir.path())
        .arg("verify")
        .arg("--graph")
        .arg(&broken)
        .assert()
        .code(2);
}

#[test]
fn config_file_supplies_default_paths() {
    let (dir, words, graph) = setup("config");
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        format!(
            "[paths]\nwords = {:?}\ngraph = {:?}\n\n[build]\nparallel = false\n",
            words.display().to_string(),
            graph.display().to_string()
        ),
    )
    .unwrap();

    let output = ladder(dir.path())
        .env("LADDER_CONFIG", &config)
        .args(["--format", "json", "build"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(stdout_json(&output)["parallel"], false);

    ladder(dir.path())
        .env("LADDER_CONFIG", &config)
        .args(["--quiet", "search", "abc", "afe"])
        .assert()
        .success()
        .stdout("abc abe afe\n");
}

#[test]
fn build_without_words_path_fails() {
    let dir = TempDir::new().expect("tempdir");
    let output = ladder(dir.path())
        .args(["build", "--out"])
        .arg(dir.path().join("graph.json"))
        .assert()
        .code(1)
        .get_output()
        .stderr
        .clone();
    let stderr = String::from_utf8_lossy(&output);
    assert!(stderr.contains("--words"), "stderr: {stderr}");
}

#[test]
fn distance_reports_edit_distance() {
    let dir = TempDir::new().expect("tempdir");
    let output = ladder(dir.path())
        .args(["--format", "json", "distance", "azcde", "abcde"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report = stdout_json(&output);
    assert_eq!(report["distance"], 1);
    assert_eq!(report["unit_edit"], true);
}
