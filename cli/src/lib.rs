pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod routes;
pub mod server;
pub mod types;

pub use types::SettingsArgs;
