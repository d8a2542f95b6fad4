//! Database URL parsing
//!
//! URLs follow the SQLAlchemy convention the service has always been
//! deployed with: `sqlite:///relative.db`, `sqlite:////absolute.db`, and
//! `sqlite://` for an in-memory database. Hosted Postgres providers hand
//! out `postgres://` URLs; those are normalized to `postgresql://` before
//! being reported, since only SQLite is supported by the store.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

const SQLITE_SCHEME: &str = "sqlite://";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatabaseUrlError {
    #[error("unsupported database backend in '{0}': only sqlite:// URLs are supported")]
    UnsupportedBackend(String),

    #[error("invalid database URL '{0}'")]
    InvalidUrl(String),
}

/// Where the store keeps its data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseUrl {
    InMemory,
    File(PathBuf),
}

impl DatabaseUrl {
    pub fn parse(raw: &str) -> Result<Self, DatabaseUrlError> {
        let raw = raw.trim();
        let url = normalize_scheme(raw);

        if url.starts_with("postgresql://") {
            return Err(DatabaseUrlError::UnsupportedBackend(url));
        }

        let Some(rest) = url.strip_prefix(SQLITE_SCHEME) else {
            return Err(DatabaseUrlError::InvalidUrl(url));
        };

        // `sqlite://` with no path, or the explicit memory path
        if rest.is_empty() || rest == "/:memory:" {
            return Ok(Self::InMemory);
        }

        // The third slash separates the (empty) authority from the path
        match rest.strip_prefix('/') {
            Some(path) if !path.is_empty() => Ok(Self::File(PathBuf::from(path))),
            _ => Err(DatabaseUrlError::InvalidUrl(url)),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseUrl::InMemory => write!(f, "{SQLITE_SCHEME}"),
            DatabaseUrl::File(path) => write!(f, "{SQLITE_SCHEME}/{}", path.display()),
        }
    }
}

/// Rewrite the legacy `postgres://` scheme to `postgresql://`
pub fn normalize_scheme(url: &str) -> String {
    match url.strip_prefix("postgres://") {
        Some(rest) => format!("postgresql://{rest}"),
        None => url.to_string(),
    }
}
