//! Tracing subscriber setup.

use ledgerly_shared::config::LogFormat;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber. Logs go to stderr so stdout only carries
/// command output.
pub fn init(verbose: bool, format: LogFormat) {
    let default_filter = if verbose { "ledgerly=debug" } else { "ledgerly=info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().with_writer(std::io::stderr).json())
            .init(),
    }
}
