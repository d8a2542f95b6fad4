// Use modules from the library crate
use holocron::{SettingsArgs, commands};

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "holocron",
    about = "REST API for users, planets, people and their favorites",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run the HTTP API server
    ///
    /// Examples:
    ///   holocron serve
    ///   holocron serve --port 8080 --database-url sqlite:///favorites.db
    ///   PORT=8080 DATABASE_URL=sqlite:// holocron serve --no-log-file
    Serve(commands::ServeArgs),

    /// Create the database tables and exit
    ///
    /// Existing tables and rows are left untouched.
    InitDb {
        #[command(flatten)]
        settings: SettingsArgs,
    },

    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Parser)]
enum ConfigCommand {
    /// Print the effective settings as TOML
    Show {
        #[command(flatten)]
        settings: SettingsArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve(args) => commands::handle_serve_command(args).await,
        Command::InitDb { settings } => commands::init_db(&settings),
        Command::Config { command } => match command {
            ConfigCommand::Show { settings } => commands::show_config(&settings),
        },
    }
}
