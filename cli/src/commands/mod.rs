//! Subcommand implementations

pub mod config;
pub mod init_db;
pub mod serve;

pub use config::show_config;
pub use init_db::init_db;
pub use serve::{ServeArgs, handle_serve_command};
