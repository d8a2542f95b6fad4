//! Integration tests for the command-line interface
//!
//! These tests run the built binary with HOME pointed at a temporary
//! directory so no user configuration leaks in.

mod common;

use common::{create_temp_dir, holocron_cmd, write_config};
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let home = create_temp_dir();

    holocron_cmd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("init-db"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_serve_help_documents_env_vars() {
    let home = create_temp_dir();

    holocron_cmd(home.path())
        .args(["serve", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PORT"))
        .stdout(predicate::str::contains("DATABASE_URL"));
}

#[test]
fn test_init_db_creates_database_file() {
    let home = create_temp_dir();
    let db_path = home.path().join("data").join("favorites.db");
    let url = format!("sqlite:///{}", db_path.display());

    holocron_cmd(home.path())
        .args(["init-db", "--database-url", &url, "--no-log-file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database ready"));

    assert!(db_path.exists());

    // Running again keeps the existing file
    holocron_cmd(home.path())
        .args(["init-db", "--database-url", &url, "--no-log-file"])
        .assert()
        .success();
}

#[test]
fn test_database_url_from_environment() {
    let home = create_temp_dir();
    let db_path = home.path().join("env.db");

    holocron_cmd(home.path())
        .env("DATABASE_URL", format!("sqlite:///{}", db_path.display()))
        .args(["init-db", "--no-log-file"])
        .assert()
        .success();

    assert!(db_path.exists());
}

#[test]
fn test_postgres_url_is_rejected() {
    let home = create_temp_dir();

    holocron_cmd(home.path())
        .args([
            "init-db",
            "--database-url",
            "postgres://user:pw@db.example.com/app",
            "--no-log-file",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "postgresql://user:pw@db.example.com/app",
        ))
        .stderr(predicate::str::contains("unsupported database backend"));
}

#[test]
fn test_config_show_merges_file_and_flags() {
    let home = create_temp_dir();
    let config = write_config(
        home.path(),
        "[server]\nport = 5000\nhost = \"127.0.0.1\"\n\n[database]\nurl = \"sqlite://\"\n",
    )
    .unwrap();

    holocron_cmd(home.path())
        .args(["config", "show", "--no-log-file", "--port", "6000", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 6000"))
        .stdout(predicate::str::contains("host = \"127.0.0.1\""))
        .stdout(predicate::str::contains("url = \"sqlite://\""));
}

#[test]
fn test_config_show_port_from_environment() {
    let home = create_temp_dir();

    holocron_cmd(home.path())
        .env("PORT", "7070")
        .args(["config", "show", "--no-log-file"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 7070"))
        .stdout(predicate::str::contains("built-in defaults"));
}

#[test]
fn test_invalid_config_file_fails() {
    let home = create_temp_dir();
    let config = write_config(home.path(), "[server]\nport = 0\n").unwrap();

    holocron_cmd(home.path())
        .args(["config", "show", "--no-log-file", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("server.port"));
}
