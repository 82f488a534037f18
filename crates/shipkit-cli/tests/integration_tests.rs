//! End-to-end tests driving the compiled `shipkit` binary.
//!
//! Every scenario passes `--skip-vcs` and `--yes` where relevant so nothing
//! shells out to `gh` or waits on a prompt.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn shipkit() -> Command {
    Command::cargo_bin("shipkit").unwrap()
}

fn laravel_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("composer.json"),
        r#"{ "require": { "php": "^8.2" } }"#,
    )
    .unwrap();
    fs::write(temp.path().join("artisan"), "").unwrap();
    temp
}

fn fastapi_project() -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("requirements.txt"), "fastapi==0.110\n").unwrap();
    temp
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    shipkit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("init"))
        .stdout(predicate::str::contains("detect"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_matches_cargo() {
    shipkit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_args_shows_help_hint() {
    shipkit().assert().failure().code(2);
}

#[test]
fn completions_generate_for_bash() {
    shipkit()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("shipkit"));
}

// ── detect ────────────────────────────────────────────────────────────────────

#[test]
fn detect_laravel_as_json() {
    let temp = laravel_project();
    shipkit()
        .args(["detect", "--format", "json"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("php_laravel"))
        .stdout(predicate::str::contains("\"8.2\""));
}

#[test]
fn detect_spring_boot_human() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pom.xml"), "<project/>").unwrap();

    shipkit()
        .args(["--no-color", "detect"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Java / Spring Boot"))
        .stdout(predicate::str::contains("17"));
}

#[test]
fn detect_unrecognized_project_exits_3() {
    let temp = TempDir::new().unwrap();
    shipkit()
        .arg("detect")
        .arg(temp.path())
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn detect_missing_directory_is_user_error() {
    shipkit()
        .args(["detect", "/definitely/not/a/dir"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("not a directory"));
}

// ── init ──────────────────────────────────────────────────────────────────────

#[test]
fn init_generates_full_file_set() {
    let temp = fastapi_project();
    shipkit()
        .args(["--no-color", "init", "-n", "my-api", "-y", "--skip-vcs"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 5 files"));

    for file in [
        "docker-compose.yml",
        "terraform/main.tf",
        "kubernetes/deployment.yml",
        "Dockerfile",
        ".github/workflows/pipeline.yml",
    ] {
        assert!(temp.path().join(file).is_file(), "missing {file}");
    }

    let dockerfile = fs::read_to_string(temp.path().join("Dockerfile")).unwrap();
    assert!(dockerfile.contains("python:3.9-slim"));
    assert!(dockerfile.contains("my-api"));
}

#[test]
fn init_honors_database_and_environment_flags() {
    let temp = laravel_project();
    shipkit()
        .args([
            "init", "-n", "shop", "-d", "mysql", "-e", "production", "-y", "--skip-vcs",
        ])
        .arg(temp.path())
        .assert()
        .success();

    let compose = fs::read_to_string(temp.path().join("docker-compose.yml")).unwrap();
    assert!(compose.contains("mysql:8.4"));
    assert!(compose.contains("APP_ENV: production"));
}

#[test]
fn init_dry_run_writes_nothing() {
    let temp = laravel_project();
    shipkit()
        .args([
            "--no-color",
            "init",
            "-n",
            "shop",
            "-y",
            "--skip-vcs",
            "--dry-run",
        ])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("docker-compose.yml"));

    assert!(!temp.path().join("docker-compose.yml").exists());
    assert!(!temp.path().join("Dockerfile").exists());
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let temp = laravel_project();
    fs::write(temp.path().join("docker-compose.yml"), "services: {}\n").unwrap();

    shipkit()
        .args(["init", "-n", "shop", "-y", "--skip-vcs"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    // The pre-existing file must be untouched.
    let compose = fs::read_to_string(temp.path().join("docker-compose.yml")).unwrap();
    assert_eq!(compose, "services: {}\n");
}

#[test]
fn init_force_overwrites() {
    let temp = laravel_project();
    fs::write(temp.path().join("docker-compose.yml"), "services: {}\n").unwrap();

    shipkit()
        .args(["init", "-n", "shop", "-y", "--skip-vcs", "--force"])
        .arg(temp.path())
        .assert()
        .success();

    let compose = fs::read_to_string(temp.path().join("docker-compose.yml")).unwrap();
    assert!(compose.contains("shop"));
}

#[test]
fn init_on_unrecognized_project_exits_3() {
    let temp = TempDir::new().unwrap();
    shipkit()
        .args(["init", "-n", "shop", "-y", "--skip-vcs"])
        .arg(temp.path())
        .assert()
        .failure()
        .code(3);

    assert!(!temp.path().join("docker-compose.yml").exists());
}

#[test]
fn rendered_pipeline_has_no_leftover_placeholders() {
    let temp = fastapi_project();
    shipkit()
        .args(["init", "-n", "my-api", "-y", "--skip-vcs"])
        .arg(temp.path())
        .assert()
        .success();

    let pipeline =
        fs::read_to_string(temp.path().join(".github/workflows/pipeline.yml")).unwrap();
    assert!(!pipeline.contains("{{"), "unrendered placeholder:\n{pipeline}");
}

// ── config file integration ───────────────────────────────────────────────────

#[test]
fn config_file_supplies_default_answers() {
    let temp = laravel_project();
    let config_path = temp.path().join("shipkit.toml");
    fs::write(
        &config_path,
        "[defaults]\ndatabase = \"mysql\"\nenvironment = \"staging\"\n",
    )
    .unwrap();

    shipkit()
        .arg("--config")
        .arg(&config_path)
        .args(["init", "-n", "shop", "-y", "--skip-vcs", "--force"])
        .arg(temp.path())
        .assert()
        .success();

    let compose = fs::read_to_string(temp.path().join("docker-compose.yml")).unwrap();
    assert!(compose.contains("mysql:8.4"));
    assert!(compose.contains("APP_ENV: staging"));
}

#[test]
fn config_file_overrides_php_candidates() {
    let temp = laravel_project();
    let config_path = temp.path().join("shipkit.toml");
    fs::write(
        &config_path,
        "[detector]\nphp_candidates = [\"8.3.0\", \"8.2.0\"]\n",
    )
    .unwrap();

    // composer.json asks for ^8.2; with 8.3.0 in the candidate list the
    // newest compatible version wins.
    shipkit()
        .arg("--config")
        .arg(&config_path)
        .args(["detect", "--format", "json"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"8.3\""));
}

#[test]
fn config_list_shows_defaults() {
    shipkit()
        .args(["--no-color", "config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("protected_branches"));
}

#[test]
fn config_path_prints_a_path() {
    shipkit()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── quiet mode ────────────────────────────────────────────────────────────────

#[test]
fn quiet_init_suppresses_progress_output() {
    let temp = fastapi_project();
    shipkit()
        .args(["--quiet", "init", "-n", "my-api", "--skip-vcs"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp.path().join("Dockerfile").is_file());
}
