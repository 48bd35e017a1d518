//! Structured logging to stderr

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit `tracing` filter
pub const LOG_ENV: &str = "LOGSEQ_MEETINGS_LOG";

/// Default filter directive for a `-v` count
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn build_filter(verbosity: u8) -> anyhow::Result<EnvFilter> {
    match std::env::var(LOG_ENV) {
        Ok(directives) if !directives.trim().is_empty() => EnvFilter::try_new(&directives)
            .with_context(|| format!("invalid {} filter '{}'", LOG_ENV, directives)),
        _ => EnvFilter::try_new(default_directive(verbosity))
            .context("invalid default logging filter"),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean for output.
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = build_filter(verbosity)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install logging subscriber")
}
