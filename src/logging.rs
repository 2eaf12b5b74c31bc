//! Logger setup for the viewer
//!
//! The library only emits through the `log` facade. The viewer installs
//! `env_logger` once at startup.

use std::sync::Once;

/// Used when neither an explicit filter nor `RUST_LOG` is set: our own
/// messages at info, dependencies only when they warn.
pub const DEFAULT_FILTER: &str = "warn,blobhop=info";

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    /// `env_logger` filter, e.g. "blobhop=debug"
    pub filter: Option<String>,
    /// Prefix each line with a timestamp
    pub timestamps: bool,
}

impl LoggingConfig {
    /// Explicit filter, then `RUST_LOG`, then [`DEFAULT_FILTER`]
    pub fn effective_filter(&self) -> String {
        self.filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string())
    }
}

static INIT: Once = Once::new();

/// Install the logger. Only the first call has any effect.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.effective_filter();
        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        if !config.timestamps {
            builder.format_timestamp(None);
        }

        // A test harness may already own the global logger
        if builder.try_init().is_ok() {
            log::debug!("logging initialized with filter '{}'", filter);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_filter_wins() {
        let config = LoggingConfig {
            filter: Some("blobhop=debug".to_string()),
            timestamps: false,
        };
        assert_eq!(config.effective_filter(), "blobhop=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init_logging(&LoggingConfig::default());
        init_logging(&LoggingConfig {
            filter: Some("debug".to_string()),
            timestamps: true,
        });
        log::info!("still alive");
    }
}
