use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, DEFAULT_LOG_LEVEL};

/// Installs the global subscriber. Logs go to stderr so stdout only carries results.
pub fn init(config: &Config) -> Result<()> {
    let filter = build_filter(config.get_log_level());

    let fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    tracing_subscriber::registry().with(fmt_layer).with(filter).try_init()?;

    info!(%config, "telemetry initialized");
    Ok(())
}

// A malformed RUST_LOG falls back to the default level instead of failing the run
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_level_is_kept() {
        let filter = build_filter("debug");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn malformed_level_falls_back_to_default() {
        let filter = build_filter("lhs=[");
        assert_eq!(filter.to_string(), EnvFilter::new(DEFAULT_LOG_LEVEL).to_string());
    }
}
