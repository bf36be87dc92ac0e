//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn carteira(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("carteira").expect("binary not found");
    cmd.env("CARTEIRA_DATA_DIR", dir.path())
        .env_remove("CARTEIRA_LOG");
    cmd
}

#[test]
fn help_flag() {
    let dir = TempDir::new().unwrap();
    carteira(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("personal-finance"));
}

#[test]
fn category_chart_json() {
    let dir = TempDir::new().unwrap();
    carteira(&dir)
        .args(["chart", "category"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"doughnut\""))
        .stdout(predicate::str::contains("Moradia"));
}

#[test]
fn monthly_chart_yaml() {
    let dir = TempDir::new().unwrap();
    carteira(&dir)
        .args(["chart", "bar", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("type: bar"));
}

#[test]
fn unknown_chart_fails() {
    let dir = TempDir::new().unwrap();
    carteira(&dir)
        .args(["chart", "radar"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("radar"));
}

#[test]
fn summary_text() {
    let dir = TempDir::new().unwrap();
    carteira(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Resumo de Gastos"))
        .stdout(predicate::str::contains("Total: R$ 5.900,00"));
}

#[test]
fn summary_from_dataset_file() {
    let dir = TempDir::new().unwrap();
    let dataset = dir.path().join("dados.json");
    std::fs::write(
        &dataset,
        r#"{
            "categories": [{"category": "Lazer", "amount": 100.0}],
            "months": [],
            "trend": {"labels": [], "datasets": []}
        }"#,
    )
    .unwrap();

    carteira(&dir)
        .args(["summary", "--json", "--input"])
        .arg(&dataset)
        .assert()
        .success()
        .stdout(predicate::str::contains("Lazer"));
}

#[test]
fn menu_lists_routes() {
    let dir = TempDir::new().unwrap();
    carteira(&dir)
        .arg("menu")
        .assert()
        .success()
        .stdout(predicate::str::contains("/planejamentos"))
        .stdout(predicate::str::contains("Gastos Extraordinários"));
}

#[test]
fn menu_resolves_about_page() {
    let dir = TempDir::new().unwrap();
    carteira(&dir)
        .args(["menu", "--resolve", "/sobre"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sobre"))
        .stdout(predicate::str::contains("Funcionalidades"));
}

#[test]
fn menu_unknown_route_fails() {
    let dir = TempDir::new().unwrap();
    carteira(&dir)
        .args(["menu", "--resolve", "/nada"])
        .assert()
        .failure();
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    carteira(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete"));
    assert!(dir.path().join("config.json").exists());

    carteira(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Show actions:      true"));
}

#[test]
fn summary_rejects_out_of_range_amounts() {
    let dir = TempDir::new().unwrap();
    let dataset = dir.path().join("grande.json");
    std::fs::write(
        &dataset,
        r#"{"categories": [{"category": "A", "amount": 9e16}, {"category": "B", "amount": 9e16}]}"#,
    )
    .unwrap();

    carteira(&dir)
        .args(["summary", "--input"])
        .arg(&dataset)
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}
