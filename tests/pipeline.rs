//! End-to-end tests: library entry point and the `mkdoc` binary against
//! throwaway project trees.

use mkdoc::config::{self, GeneratorConfig};
use mkdoc::generate::{self, ErrorKind};
use serde_json::json;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// `feature/01_intro`, `feature/02_usage`, empty `flavour/`, key-listing template.
fn intro_usage_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "feature/01_intro/feature.yaml", "title: \"Intro\"\n");
    write(tmp.path(), "feature/02_usage/feature.yaml", "title: \"Usage\"\n");
    fs::create_dir_all(tmp.path().join("flavour")).unwrap();
    write(
        tmp.path(),
        "README.md.handlebars",
        "{{#each docObjects.feature}}{{@key}}{{#unless @last}}, {{/unless}}{{/each}}",
    );
    tmp
}

fn mkdoc(root: &Path, args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_mkdoc"))
        .arg("--root")
        .arg(root)
        .args(args)
        .output()
        .expect("failed to run mkdoc")
}

// =========================================================================
// Library
// =========================================================================

#[test]
fn intro_and_usage_render_in_discovery_order() {
    let tmp = intro_usage_project();
    let config = config::load_config(tmp.path()).unwrap();

    let assembly = generate::assemble(tmp.path(), &config).unwrap();
    assert_eq!(
        serde_json::to_value(&assembly.model).unwrap(),
        json!({
            "feature": {"intro": {"title": "Intro"}, "usage": {"title": "Usage"}},
            "flavour": {}
        })
    );

    generate::generate(tmp.path(), &config).unwrap();
    assert_eq!(
        fs::read_to_string(tmp.path().join("README.md")).unwrap(),
        "intro, usage"
    );
}

#[test]
fn injected_categories_replace_defaults() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "recipe/b_bread/recipe.yaml", "flour: 500\n");
    write(tmp.path(), "recipe/a_soup/recipe.yaml", "water: 1000\n");
    write(
        tmp.path(),
        "README.md.handlebars",
        "{{#each docObjects.recipe}}{{@key}} {{/each}}",
    );
    let config = GeneratorConfig {
        categories: vec!["recipe".to_string()],
        ..Default::default()
    };

    generate::generate(tmp.path(), &config).unwrap();
    assert_eq!(
        fs::read_to_string(tmp.path().join("README.md")).unwrap(),
        "soup bread "
    );
}

#[test]
fn config_file_changes_output_and_context_key() {
    let tmp = intro_usage_project();
    write(
        tmp.path(),
        "mkdoc.toml",
        "output = \"OUT.md\"\ncontext_key = \"doc\"\n",
    );
    write(
        tmp.path(),
        "README.md.handlebars",
        "{{#each doc.feature}}{{this.title}};{{/each}}",
    );

    let config = config::load_config(tmp.path()).unwrap();
    generate::generate(tmp.path(), &config).unwrap();

    assert_eq!(
        fs::read_to_string(tmp.path().join("OUT.md")).unwrap(),
        "Intro;Usage;"
    );
    assert!(!tmp.path().join("README.md").exists());
}

#[test]
fn missing_descriptor_aborts_without_output() {
    let tmp = intro_usage_project();
    fs::create_dir_all(tmp.path().join("flavour/bare")).unwrap();

    let config = config::load_config(tmp.path()).unwrap();
    let err = generate::generate(tmp.path(), &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!tmp.path().join("README.md").exists());
}

// =========================================================================
// Binary
// =========================================================================

#[test]
fn binary_builds_by_default() {
    let tmp = intro_usage_project();
    let out = mkdoc(tmp.path(), &[]);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        fs::read_to_string(tmp.path().join("README.md")).unwrap(),
        "intro, usage"
    );
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("001 intro"));
    assert!(stdout.contains("Source: feature/01_intro/feature.yaml"));
}

#[test]
fn binary_check_does_not_write() {
    let tmp = intro_usage_project();
    let out = mkdoc(tmp.path(), &["check"]);

    assert!(out.status.success());
    assert!(!tmp.path().join("README.md").exists());
}

#[test]
fn binary_model_prints_json() {
    let tmp = intro_usage_project();
    let out = mkdoc(tmp.path(), &["model"]);

    assert!(out.status.success());
    let model: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(model["feature"]["usage"]["title"], "Usage");
    assert_eq!(model["flavour"], json!({}));
}

#[test]
fn binary_fails_on_missing_category() {
    let tmp = intro_usage_project();
    fs::remove_dir(tmp.path().join("flavour")).unwrap();

    let out = mkdoc(tmp.path(), &["build"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("flavour"));
    assert!(!tmp.path().join("README.md").exists());
}

#[test]
fn binary_gen_config_round_trips() {
    let tmp = TempDir::new().unwrap();
    let out = mkdoc(tmp.path(), &["gen-config"]);

    assert!(out.status.success());
    let config: GeneratorConfig = toml::from_str(&String::from_utf8_lossy(&out.stdout)).unwrap();
    assert_eq!(config, GeneratorConfig::default());
}
