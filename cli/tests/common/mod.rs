//! Common test utilities and fixtures
//!
//! This module provides shared helpers for holocron integration tests:
//! an API server on an ephemeral port backed by an in-memory database, and
//! CLI commands isolated from the caller's environment.

#![allow(dead_code)]

use assert_cmd::Command;
use holocron::db::Store;
use reqwest::StatusCode;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

/// A running API server and a client pointed at it
pub struct TestServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl TestServer {
    /// Start a server on 127.0.0.1 with a fresh in-memory database
    pub async fn spawn() -> Self {
        let store = Store::open_in_memory().expect("Failed to open in-memory store");
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind ephemeral port");
        let addr = listener.local_addr().expect("Listener has an address");

        tokio::spawn(holocron::server::serve(
            listener,
            store,
            std::future::pending(),
        ));

        Self {
            base_url: format!("http://{addr}"),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        read_json(response).await
    }

    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        read_json(response).await
    }

    pub async fn put(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .client
            .put(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        read_json(response).await
    }

    pub async fn delete(&self, path: &str) -> (StatusCode, Value) {
        let response = self.client.delete(self.url(path)).send().await.unwrap();
        read_json(response).await
    }

    /// Raw response body, for checks on exact wire form
    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        let status = response.status();
        (status, response.text().await.unwrap())
    }
}

async fn read_json(response: reqwest::Response) -> (StatusCode, Value) {
    let status = response.status();
    let body = response.json::<Value>().await.expect("Response is JSON");
    (status, body)
}

/// `message` field of an API response body
pub fn message(body: &Value) -> &str {
    body["message"].as_str().expect("body has a message")
}

/// Creates a temporary directory for test fixtures
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// A `holocron` command that sees none of the caller's settings
///
/// HOME and the XDG directories point into `home`, and every environment
/// variable the CLI reads is cleared.
pub fn holocron_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("holocron").expect("binary is built");
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_DATA_HOME", home.join(".local/share"))
        .env_remove("PORT")
        .env_remove("DATABASE_URL")
        .env_remove("HOLOCRON_HOST")
        .env_remove("HOLOCRON_LOG_DIR")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes a config file and returns its path
pub fn write_config(dir: &Path, content: &str) -> std::io::Result<std::path::PathBuf> {
    let config_path = dir.join("holocron.toml");
    std::fs::write(&config_path, content)?;
    Ok(config_path)
}
