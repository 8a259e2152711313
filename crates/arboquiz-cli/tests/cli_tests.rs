//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn arboquiz() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("arboquiz").unwrap()
}

#[test]
fn help_output() {
    arboquiz()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quiz de taxonomie des arbres"));
}

#[test]
fn version_output() {
    arboquiz()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("arboquiz"));
}

#[test]
fn guide_prints_usage() {
    arboquiz()
        .arg("guide")
        .assert()
        .success()
        .stdout(predicate::str::contains("Guide d'utilisation"))
        .stdout(predicate::str::contains("trois essais"));
}

#[test]
fn list_trees_builtin_table() {
    arboquiz()
        .arg("list-trees")
        .assert()
        .success()
        .stdout(predicate::str::contains("18 arbres"))
        .stdout(predicate::str::contains("Quercus"))
        .stdout(predicate::str::contains("Chêne pédonculé"));
}

#[test]
fn list_trees_json() {
    arboquiz()
        .args(["list-trees", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"genus\": \"Quercus\""))
        .stdout(predicate::str::contains("\"image_path\""));
}

#[test]
fn list_trees_unknown_format() {
    arboquiz()
        .args(["list-trees", "--format", "yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn init_creates_catalog() {
    let dir = TempDir::new().unwrap();

    arboquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created arbres.toml"));

    assert!(dir.path().join("arbres.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    arboquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    arboquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_starter_catalog() {
    let dir = TempDir::new().unwrap();

    arboquiz()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    arboquiz()
        .current_dir(dir.path())
        .args(["validate", "--catalog", "arbres.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 trees"))
        .stdout(predicate::str::contains("All catalogs valid"));
}

#[test]
fn validate_nonexistent_file() {
    arboquiz()
        .args(["validate", "--catalog", "nonexistent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn validate_warns_on_shared_genus() {
    let dir = TempDir::new().unwrap();
    let catalog = r#"
[catalog]
name = "Chênes"

[[trees]]
common_name = "Chêne pédonculé"
genus = "Quercus"
species = "robur"
image = "a.jpg"

[[trees]]
common_name = "Chêne vert"
genus = "Quercus"
species = "ilex"
image = "b.jpg"
"#;
    let path = dir.path().join("chenes.toml");
    std::fs::write(&path, catalog).unwrap();

    arboquiz()
        .args(["validate", "--catalog"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"))
        .stdout(predicate::str::contains("shared"));
}

#[test]
fn validate_directory() {
    let dir = TempDir::new().unwrap();

    let one = r#"
[catalog]
name = "Feuillus"

[[trees]]
common_name = "Hêtre"
genus = "Fagus"
species = "sylvatica"
image = "hetre.jpg"
"#;
    let two = r#"
[catalog]
name = "Conifères"

[[trees]]
common_name = "Pin sylvestre"
genus = "Pinus"
species = "sylvestris"
image = "pin.jpg"
"#;
    std::fs::write(dir.path().join("feuillus.toml"), one).unwrap();
    std::fs::write(dir.path().join("coniferes.toml"), two).unwrap();

    arboquiz()
        .args(["validate", "--catalog"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Feuillus"))
        .stdout(predicate::str::contains("Conifères"));
}

#[test]
fn play_rejects_unknown_difficulty() {
    arboquiz()
        .args(["play", "--difficulty", "extrême", "--questions", "1"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("difficulté"));
}

#[test]
fn play_rejects_zero_questions() {
    arboquiz()
        .args(["play", "--questions", "0"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("au moins une question"));
}
