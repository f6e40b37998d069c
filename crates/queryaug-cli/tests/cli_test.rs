//! Integration tests for the queryaug commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn queryaug_cmd(config: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("queryaug").unwrap();
    cmd.arg("--config")
        .arg(config)
        .env_remove("QUERYAUG_LLM_MODEL")
        .env_remove("OPENAI_API_MODEL")
        .env_remove("RUST_LOG");
    cmd
}

/// Temp dir holding an English pipeline and a config pointing at it
fn setup() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("en.vec"),
        "cheap 1.0 0.0\ninexpensive 0.95 0.1\ntoys 0.0 1.0\ntoy 0.05 0.98\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("en.tsv"),
        "toys\ttoy\tNNS\ntoy\ttoy\tNN\ncheap\tcheap\tJJ\n",
    )
    .unwrap();
    let config = dir.path().join("config.yml");
    fs::write(
        &config,
        "neighbors: 2\nlanguages:\n  en:\n    vectors: en.vec\n    lexicon: en.tsv\n",
    )
    .unwrap();
    (dir, config)
}

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_augment_lemma_to_stdout() {
    let (dir, config) = setup();
    let input = write_file(
        &dir,
        "queries.json",
        r#"{"queries": [{"original": "cheap toys", "lang": "en"}]}"#,
    );

    queryaug_cmd(&config)
        .args(["augment", "--kind", "lemma", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"cheap toy\""))
        .stdout(predicate::str::contains("\"LEMMA\""));
}

#[test]
fn test_augment_writes_output_file() {
    let (dir, config) = setup();
    let input = write_file(
        &dir,
        "queries.json",
        r#"{"queries": [{"original": "cheap toys", "lang": "en"}]}"#,
    );
    let output = dir.path().join("variants.json");

    queryaug_cmd(&config)
        .args(["augment", "-k", "syn-repl", "-k", "lemma", "-i"])
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Augmented 1 queries"));

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("inexpensive toys"));
    assert!(written.contains("cheap toy"));
}

#[test]
fn test_augment_unknown_kind() {
    let (dir, config) = setup();
    let input = write_file(&dir, "queries.json", r#"{"queries": []}"#);

    queryaug_cmd(&config)
        .args(["augment", "--kind", "rhyme", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown variant kind 'rhyme'"));
}

#[test]
fn test_augment_unknown_backend() {
    let (dir, config) = setup();
    let input = write_file(&dir, "queries.json", r#"{"queries": []}"#);

    queryaug_cmd(&config)
        .args(["augment", "--backend", "markov", "--kind", "lemma", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("markov"));
}

#[test]
fn test_augment_unsupported_kind_for_lexical() {
    let (dir, config) = setup();
    let input = write_file(
        &dir,
        "queries.json",
        r#"{"queries": [{"original": "cheap toys", "lang": "en"}]}"#,
    );

    queryaug_cmd(&config)
        .args(["augment", "--kind", "hypernym", "--input"])
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("HYPERNYM"));
}

#[test]
fn test_augment_missing_language_pipeline() {
    let (dir, config) = setup();
    let input = write_file(
        &dir,
        "queries.json",
        r#"{"queries": [{"original": "billige spielzeuge", "lang": "de"}]}"#,
    );

    queryaug_cmd(&config)
        .args(["augment", "--kind", "lemma", "--input"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("'de'"));
}

#[test]
fn test_generate_without_model() {
    let (_dir, config) = setup();

    queryaug_cmd(&config)
        .args(["generate", "--topic", "christmas gifts"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("missing LLM model name"));
}

#[test]
fn test_validate_clean_file() {
    let (dir, config) = setup();
    let input = write_file(
        &dir,
        "variants.json",
        r#"{"queries": [{"original": "cheap toys", "lang": "en", "variants": [
            {"text": "cheap toy", "lang": "en", "variant_type": "LEMMA"}
        ]}]}"#,
    );

    queryaug_cmd(&config)
        .args(["validate", "--input"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("OK: 1 queries, 1 variants"));
}

#[test]
fn test_validate_reports_issues() {
    let (dir, config) = setup();
    let input = write_file(
        &dir,
        "variants.json",
        r#"{"queries": [{"original": "cheap toys", "lang": "en", "variants": [
            {"text": "cheap toys", "lang": "en", "variant_type": "SYN_REPL"},
            {"text": "", "lang": "en", "variant_type": "LEMMA"}
        ]}]}"#,
    );

    queryaug_cmd(&config)
        .args(["validate", "--input"])
        .arg(&input)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("SYN_REPL variant equals the original"))
        .stdout(predicate::str::contains("variant text is empty"));
}

#[test]
fn test_merge_query_files() {
    let (dir, config) = setup();
    let a = write_file(
        &dir,
        "a.json",
        r#"{"queries": [{"original": "cheap toys", "lang": "en"}]}"#,
    );
    let b = write_file(
        &dir,
        "b.json",
        r#"{"queries": [{"original": "günstige spielzeuge", "lang": "de"}]}"#,
    );

    let output = queryaug_cmd(&config)
        .args(["merge", "-i"])
        .arg(&a)
        .arg("-i")
        .arg(&b)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first = stdout.find("cheap toys").unwrap();
    let second = stdout.find("günstige spielzeuge").unwrap();
    assert!(first < second);
    assert!(!stdout.contains("variants"));
}

#[test]
fn test_merge_variant_files() {
    let (dir, config) = setup();
    let variants = r#"{"queries": [{"original": "cheap toys", "lang": "en", "variants": [
        {"text": "cheap toy", "lang": "en", "variant_type": "LEMMA"}
    ]}]}"#;
    let a = write_file(&dir, "a.json", variants);
    let b = write_file(&dir, "b.json", variants);
    let output = dir.path().join("merged.json");

    queryaug_cmd(&config)
        .args(["merge", "-i"])
        .arg(&a)
        .arg("-i")
        .arg(&b)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    let merged: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(merged["queries"].as_array().unwrap().len(), 2);
}

#[test]
fn test_merge_needs_two_inputs() {
    let (dir, config) = setup();
    let a = write_file(&dir, "a.json", r#"{"queries": []}"#);

    queryaug_cmd(&config)
        .args(["merge", "-i"])
        .arg(&a)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("at least two inputs"));
}

#[test]
fn test_merge_rejects_mixed_files() {
    let (dir, config) = setup();
    let a = write_file(
        &dir,
        "a.json",
        r#"{"queries": [{"original": "cheap toys", "lang": "en"}]}"#,
    );
    let b = write_file(
        &dir,
        "b.json",
        r#"{"queries": [{"original": "cheap toys", "lang": "en", "variants": []}]}"#,
    );

    queryaug_cmd(&config)
        .args(["merge", "-i"])
        .arg(&a)
        .arg("-i")
        .arg(&b)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot merge"));
}

#[test]
fn test_merge_augmented_empty_input_with_variant_file() {
    let (dir, config) = setup();
    let empty = write_file(&dir, "empty.json", r#"{"queries": []}"#);
    let empty_variants = dir.path().join("empty_variants.json");
    let full = write_file(
        &dir,
        "full.json",
        r#"{"queries": [{"original": "cheap toys", "lang": "en", "variants": [
            {"text": "cheap toy", "lang": "en", "variant_type": "LEMMA"}
        ]}]}"#,
    );

    queryaug_cmd(&config)
        .args(["augment", "-b", "lexical", "-k", "lemma", "-i"])
        .arg(&empty)
        .arg("-o")
        .arg(&empty_variants)
        .assert()
        .success();

    let output = queryaug_cmd(&config)
        .args(["merge", "-i"])
        .arg(&full)
        .arg("-i")
        .arg(&empty_variants)
        .output()
        .unwrap();
    assert!(output.status.success());

    let merged: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let queries = merged["queries"].as_array().unwrap();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0]["variants"][0]["text"], "cheap toy");
}

#[test]
fn test_invalid_document_names_the_file() {
    let (dir, config) = setup();
    let broken = write_file(&dir, "broken.json", r#"{"queries": [{"text": 1}]}"#);

    queryaug_cmd(&config)
        .args(["validate", "--input"])
        .arg(&broken)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.json"));
}
