//! Logging setup for the binary.
//!
//! Events go to stderr only, since stdout carries the document. The filter
//! is read from `HTML_SKELETON_LOG` (same syntax as `RUST_LOG`) and
//! defaults to `warn`. Call [`init_logging`] once near process start;
//! later calls are no-ops.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "HTML_SKELETON_LOG";

const DEFAULT_FILTER: &str = "warn";

static INITIALIZED: OnceLock<()> = OnceLock::new();

/// Install the global `tracing` subscriber.
pub fn init_logging() -> anyhow::Result<()> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(use_ansi()),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    let _ = INITIALIZED.set(());
    Ok(())
}

fn use_ansi() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr)
}
