use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when RUST_LOG is unset
const DEFAULT_FILTER: &str = "holocron=info";

/// Default filter with `--verbose`
const VERBOSE_FILTER: &str = "holocron=debug";

/// Initialize logging for the holocron server
///
/// Logs always go to stderr. When `log_dir` is set they are also written
/// there, rotated daily with the pattern: holocron.log.YYYY-MM-DD
///
/// The log level can be controlled via the RUST_LOG environment variable:
/// - RUST_LOG=debug holocron serve  (verbose logging)
/// - RUST_LOG=info holocron serve   (default level)
/// - RUST_LOG=error holocron serve  (errors only)
pub fn init(log_dir: Option<&Path>, verbose: bool) -> Result<()> {
    let default_filter = if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let file_appender = tracing_appender::rolling::daily(dir, "holocron.log");
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false) // No ANSI colors in log files
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .boxed(),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    match log_dir {
        Some(dir) => tracing::info!("Logging initialized to {}", dir.display()),
        None => tracing::debug!("Logging to stderr only"),
    }

    Ok(())
}
