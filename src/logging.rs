//! Diagnostic logging setup.
//!
//! User-facing output goes through `ui::messages`; tracing is for
//! diagnostics only and stays quiet (`warn`) unless `BABYLOG_LOG` says
//! otherwise.
use crate::errors::AppResult;
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_ENV: &str = "BABYLOG_LOG";
pub const LOG_FILE: &str = "babylog.log";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initializes logging to stderr, or to `{log_dir}/babylog.log` when a
/// directory is configured.
///
/// Calling it twice is harmless: the second subscriber is ignored.
pub fn init(log_dir: Option<&Path>) -> AppResult<()> {
    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);

            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_line_number(true);

            tracing_subscriber::registry()
                .with(filter())
                .with(file_layer)
                .try_init()
                .ok();
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact();

            tracing_subscriber::registry()
                .with(filter())
                .with(stderr_layer)
                .try_init()
                .ok();
        }
    }

    tracing::debug!("logging initialized");
    Ok(())
}
