//! SQLite persistence for users, planets, people and favorites
//!
//! A single [`rusqlite::Connection`] is shared behind a mutex. Async callers
//! go through [`Store::call`], which runs the closure on the blocking pool
//! while holding the lock, so everything a request does (lookups, the write
//! and its commit) happens as one unit.
//!
//! The per-table modules expose plain functions over `&Connection` /
//! `&mut Connection`. Mutations open a transaction and commit it; an error
//! drops the transaction, which rolls it back.

pub mod favorites;
pub mod models;
pub mod people;
pub mod planets;
pub mod users;

use crate::config::DatabaseUrl;
use crate::error::StoreError;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};

pub use models::{Favorite, FavoriteTarget, NewUser, Person, PersonFields, Planet, PlanetFields, User};

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        is_active INTEGER NOT NULL DEFAULT 1
    );

    CREATE TABLE IF NOT EXISTS planets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        diameter INTEGER NOT NULL,
        population INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS people (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        age INTEGER NOT NULL,
        height INTEGER NOT NULL
    );

    CREATE TABLE IF NOT EXISTS favorites (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
        planets_id INTEGER REFERENCES planets(id) ON DELETE CASCADE,
        people_id INTEGER REFERENCES people(id) ON DELETE CASCADE,
        CHECK ((planets_id IS NULL) <> (people_id IS NULL))
    );

    CREATE INDEX IF NOT EXISTS idx_favorites_user
    ON favorites(user_id);
";

/// Shared handle to the database
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Open (creating if needed) the database named by `url`
    pub fn open(url: &DatabaseUrl) -> Result<Self> {
        let conn = match url {
            DatabaseUrl::InMemory => open_in_memory_connection()?,
            DatabaseUrl::File(path) => open_connection(path)?,
        };
        Ok(Self::from_connection(conn))
    }

    /// Open a private in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self::from_connection(open_in_memory_connection()?))
    }

    fn from_connection(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Run `f` against the connection on the blocking thread pool
    pub async fn call<F, T, E>(&self, f: F) -> std::result::Result<T, E>
    where
        F: FnOnce(&mut Connection) -> std::result::Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: From<StoreError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            // Open transactions roll back while a panic unwinds, so the
            // connection behind a poisoned lock is still consistent.
            let mut guard = conn.lock().unwrap_or_else(|poisoned| {
                tracing::warn!("Recovering database connection after a panicked request");
                conn.clear_poison();
                poisoned.into_inner()
            });
            f(&mut guard)
        })
        .await
        .map_err(StoreError::from)?
    }
}

/// Open a database file, creating its parent directory if needed
pub fn open_connection(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let conn = Connection::open(path)
        .with_context(|| format!("Failed to open database at {}", path.display()))?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")
        .context("Failed to enable WAL journal")?;
    initialize(&conn)?;
    Ok(conn)
}

/// Open an initialized in-memory database
pub fn open_in_memory_connection() -> Result<Connection> {
    let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
    initialize(&conn)?;
    Ok(conn)
}

/// Apply pragmas and create any missing tables
///
/// Safe to run on every start; existing tables are left untouched.
pub fn initialize(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys=ON;")
        .context("Failed to set database pragmas")?;
    conn.execute_batch(SCHEMA)
        .context("Failed to create database schema")?;
    Ok(())
}
